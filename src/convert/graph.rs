//! Conversion graph
//!
//! Directed weighted graph of unit-to-unit conversion factors with
//! breadth-first path composition.

use std::collections::{HashMap, VecDeque};

use thiserror::Error;

use super::temperature;

/// Conversion error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("unknown unit: {unit}")]
    UnknownUnit { unit: String },

    #[error("conversion path not found between {from} and {to}")]
    NoConversionPath { from: String, to: String },
}

/// Result type for conversion queries
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Directed weighted graph of unit conversion rules.
///
/// Nodes are lower-cased unit identifiers. An edge `source -> destination`
/// carries a multiplicative factor such that
/// `value_in_destination = value_in_source * factor`. Edges are directed:
/// registering one direction does not create the reverse.
///
/// The graph is a plain owned value; callers embedding it in a concurrent
/// host must guard both [`register`](Self::register) and
/// [`convert`](Self::convert) behind a single lock, since a query walks the
/// adjacency structure a concurrent registration would mutate.
#[derive(Debug, Clone, Default)]
pub struct ConversionGraph {
    adjacency: HashMap<String, HashMap<String, f64>>,
}

impl ConversionGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or overwrite the conversion rule `source -> destination`.
    ///
    /// Both identifiers are lower-cased before storage. Both endpoints become
    /// nodes of the graph, but only the forward edge is created; the reverse
    /// rule must be registered separately. The factor is stored as given, with
    /// no validation of sign or magnitude.
    ///
    /// Returns the factor previously stored for this exact pair, if any.
    pub fn register(&mut self, source: &str, destination: &str, factor: f64) -> Option<f64> {
        let source = normalize(source);
        let destination = normalize(destination);

        self.adjacency.entry(destination.clone()).or_default();
        self.adjacency
            .entry(source)
            .or_default()
            .insert(destination, factor)
    }

    /// Convert `value` from `source` units to `destination` units.
    ///
    /// Celsius/Fahrenheit is intercepted by the affine formula before any
    /// graph lookup. Every other pair is resolved by an unweighted
    /// breadth-first search that multiplies edge factors along the
    /// first-discovered (fewest-hops) path. Ties between equal-hop paths are
    /// broken by adjacency iteration order, which for a hash map is
    /// unspecified.
    ///
    /// Pure query: no side effects, and the graph remains usable after any
    /// failure.
    pub fn convert(&self, source: &str, destination: &str, value: f64) -> ConvertResult<f64> {
        let from = normalize(source);
        let to = normalize(destination);

        if let Some(result) = temperature::affine_convert(&from, &to, value) {
            return Ok(result);
        }

        if !self.adjacency.contains_key(&from) {
            return Err(ConvertError::UnknownUnit { unit: from });
        }
        if !self.adjacency.contains_key(&to) {
            return Err(ConvertError::UnknownUnit { unit: to });
        }

        // Each visited unit maps to the product of edge factors along the
        // first path that reached it from `from`.
        let mut visited: HashMap<String, f64> = HashMap::new();
        let mut queue: VecDeque<String> = VecDeque::new();

        visited.insert(from.clone(), 1.0);
        queue.push_back(from.clone());

        while let Some(current) = queue.pop_front() {
            let acc = visited[&current];

            if current == to {
                return Ok(value * acc);
            }

            if let Some(neighbors) = self.adjacency.get(&current) {
                for (next, factor) in neighbors {
                    if !visited.contains_key(next) {
                        visited.insert(next.clone(), acc * factor);
                        queue.push_back(next.clone());
                    }
                }
            }
        }

        Err(ConvertError::NoConversionPath { from, to })
    }

    /// Whether `unit` is a registered node (case-insensitive)
    pub fn contains_unit(&self, unit: &str) -> bool {
        self.adjacency.contains_key(&normalize(unit))
    }

    /// Direct-edge factor for `source -> destination`, if one is registered.
    ///
    /// Does not compose multi-hop paths; use [`convert`](Self::convert) for
    /// that.
    pub fn factor(&self, source: &str, destination: &str) -> Option<f64> {
        self.adjacency
            .get(&normalize(source))?
            .get(&normalize(destination))
            .copied()
    }

    /// All registered units, sorted
    pub fn units(&self) -> Vec<&str> {
        let mut units: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        units.sort_unstable();
        units
    }

    /// All registered rules as `(source, destination, factor)`, sorted by
    /// source then destination
    pub fn conversions(&self) -> Vec<(&str, &str, f64)> {
        let mut edges: Vec<(&str, &str, f64)> = self
            .adjacency
            .iter()
            .flat_map(|(from, neighbors)| {
                neighbors
                    .iter()
                    .map(move |(to, factor)| (from.as_str(), to.as_str(), *factor))
            })
            .collect();
        edges.sort_unstable_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        edges
    }

    /// Number of registered units
    pub fn unit_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of registered directed rules
    pub fn conversion_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum()
    }
}

/// Lower-case a unit identifier for storage and lookup
fn normalize(unit: &str) -> String {
    unit.trim().to_lowercase()
}
