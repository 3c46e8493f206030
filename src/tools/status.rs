//! UUC Status Tool
//!
//! Provides runtime status information about the UUC service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Unit conversion instructions for AI assistants
pub const CONVERSION_INSTRUCTIONS: &str = r#"
# UUC Unit Conversion Instructions

This guide explains how to convert values using the Universal Unit Converter
(UUC) tools.

## Overview

UUC holds a directed graph of conversion rules. Each rule says:

    value_in_target = value_in_source * factor

Rules are one-directional. `meter -> centimeter (100)` does not imply
`centimeter -> meter (0.01)`; both directions must be registered separately.
When no direct rule exists, UUC composes the shortest chain of rules
automatically (e.g. hour -> minute -> second).

Unit names are case-insensitive and stored lower-cased. "METER" and "meter"
are the same unit.

## Built-in Units

| Category    | Units                          |
|-------------|--------------------------------|
| Length      | centimeter, meter, kilometer   |
| Weight      | gram, kilogram, pound          |
| Temperature | celsius, fahrenheit            |
| Time        | second, minute, hour           |

Length, weight, and time units are fully connected within their category.
There are NO rules between categories: converting meter -> gram fails with a
"conversion path not found" error, which is expected.

## Temperature Is Special

celsius <-> fahrenheit is an affine conversion (F = C * 1.8 + 32), not a
multiplicative one. UUC applies the formula directly for that pair; the
factors shown for it by list_conversions are never used.

## Tools

1. **convert_units** - Convert a value
   - `{"from_unit": "meter", "to_unit": "kilometer", "value": 1500}`
   - Returns `{"result": 1.5, ...}`
   - Errors: "unknown unit: X" (unit never registered) or
     "conversion path not found between X and Y" (no rule chain connects them)

2. **add_conversion** - Register or overwrite a rule
   - `{"from_unit": "mile", "to_unit": "kilometer", "factor": 1.609344}`
   - Register the reverse rule yourself if round trips are needed
   - Re-registering the same pair overwrites the old factor

3. **list_units** - All known unit names

4. **list_conversions** - All rules, or only those out of one unit
   - `{"from_unit": "meter"}` lists the rules whose source is meter

5. **uuc_status** - Build, process, and graph-size information

## Example: Adding a New Unit

To make miles usable in both directions:

1. `add_conversion {"from_unit": "mile", "to_unit": "kilometer", "factor": 1.609344}`
2. `add_conversion {"from_unit": "kilometer", "to_unit": "mile", "factor": 0.621371}`
3. `convert_units {"from_unit": "mile", "to_unit": "centimeter", "value": 1}`
   works immediately via mile -> kilometer -> meter -> centimeter.

## Notes

- Factors are not validated; a zero or negative factor produces nonsensical
  results rather than an error.
- Rules cannot be deleted, only overwritten.
- The graph lives in memory only and resets on restart.
"#;

/// Runtime status of the UUC service
#[derive(Debug, Clone, Serialize)]
pub struct UucStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Conversion graph information
    pub unit_count: usize,
    pub conversion_count: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, unit_count: usize, conversion_count: usize) -> UucStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        UucStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            unit_count,
            conversion_count,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_carries_graph_counts() {
        let tracker = StatusTracker::new();
        let status = tracker.get_status(11, 14);

        assert_eq!(status.unit_count, 11);
        assert_eq!(status.conversion_count, 14);
        assert_eq!(status.process_id, std::process::id());
    }
}
