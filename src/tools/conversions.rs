//! Conversion MCP Tools
//!
//! Tools for querying the conversion graph and registering new rules.

use serde::Serialize;

use crate::convert::temperature;
use crate::convert::ConversionGraph;

/// Response for convert_units
#[derive(Debug, Serialize)]
pub struct ConvertUnitsResponse {
    pub from_unit: String,
    pub to_unit: String,
    pub value: f64,
    pub result: f64,
}

/// Response for add_conversion
#[derive(Debug, Serialize)]
pub struct AddConversionResponse {
    pub success: bool,
    pub from_unit: String,
    pub to_unit: String,
    pub factor: f64,
    /// Whether an existing rule for this exact pair was overwritten
    pub updated: bool,
    pub previous_factor: Option<f64>,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub units: Vec<String>,
    pub total: usize,
}

/// Single conversion rule for list results
#[derive(Debug, Serialize)]
pub struct ConversionSummary {
    pub from_unit: String,
    pub to_unit: String,
    pub factor: f64,
    /// True for the celsius/fahrenheit pair, whose stored factor is shadowed
    /// by the affine formula
    pub affine_override: bool,
}

/// Response for list_conversions
#[derive(Debug, Serialize)]
pub struct ListConversionsResponse {
    pub conversions: Vec<ConversionSummary>,
    pub total: usize,
}

/// Convert a value between two units
pub fn convert_units(
    graph: &ConversionGraph,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<ConvertUnitsResponse, String> {
    let result = graph
        .convert(from_unit, to_unit, value)
        .map_err(|e| e.to_string())?;

    Ok(ConvertUnitsResponse {
        from_unit: from_unit.trim().to_lowercase(),
        to_unit: to_unit.trim().to_lowercase(),
        value,
        result,
    })
}

/// Add or update a conversion rule
///
/// Rules are directed; registering `from -> to` does not create the reverse
/// rule.
pub fn add_conversion(
    graph: &mut ConversionGraph,
    from_unit: &str,
    to_unit: &str,
    factor: f64,
) -> Result<AddConversionResponse, String> {
    let from = from_unit.trim().to_lowercase();
    let to = to_unit.trim().to_lowercase();

    if from.is_empty() {
        return Err("from_unit cannot be empty".to_string());
    }
    if to.is_empty() {
        return Err("to_unit cannot be empty".to_string());
    }

    let previous_factor = graph.register(&from, &to, factor);

    tracing::info!("conversion rule {} -> {} set to {}", from, to, factor);

    Ok(AddConversionResponse {
        success: true,
        from_unit: from,
        to_unit: to,
        factor,
        updated: previous_factor.is_some(),
        previous_factor,
    })
}

/// List all registered units
pub fn list_units(graph: &ConversionGraph) -> ListUnitsResponse {
    let units: Vec<String> = graph.units().into_iter().map(str::to_string).collect();
    let total = units.len();

    ListUnitsResponse { units, total }
}

/// List registered conversion rules, optionally filtered to one source unit
pub fn list_conversions(
    graph: &ConversionGraph,
    from_unit: Option<&str>,
) -> Result<ListConversionsResponse, String> {
    let filter = from_unit.map(|u| u.trim().to_lowercase());

    if let Some(ref unit) = filter {
        if !graph.contains_unit(unit) {
            return Err(format!("Unknown unit: {}", unit));
        }
    }

    let conversions: Vec<ConversionSummary> = graph
        .conversions()
        .into_iter()
        .filter(|(from, _, _)| filter.as_deref().map_or(true, |unit| *from == unit))
        .map(|(from, to, factor)| ConversionSummary {
            from_unit: from.to_string(),
            to_unit: to.to_string(),
            factor,
            affine_override: temperature::is_affine_pair(from, to),
        })
        .collect();

    let total = conversions.len();

    Ok(ListConversionsResponse { conversions, total })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_units_normalizes_names() {
        let graph = ConversionGraph::with_standard_units();

        let resp = convert_units(&graph, "METER", "Kilometer", 1500.0).unwrap();
        assert_eq!(resp.from_unit, "meter");
        assert_eq!(resp.to_unit, "kilometer");
        assert!((resp.result - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_convert_units_reports_engine_errors() {
        let graph = ConversionGraph::with_standard_units();

        let err = convert_units(&graph, "meter", "banana", 5.0).unwrap_err();
        assert_eq!(err, "unknown unit: banana");

        let err = convert_units(&graph, "meter", "gram", 5.0).unwrap_err();
        assert_eq!(err, "conversion path not found between meter and gram");
    }

    #[test]
    fn test_add_conversion_reports_update() {
        let mut graph = ConversionGraph::new();

        let resp = add_conversion(&mut graph, "foo", "bar", 2.0).unwrap();
        assert!(resp.success);
        assert!(!resp.updated);
        assert_eq!(resp.previous_factor, None);

        let resp = add_conversion(&mut graph, "FOO", "bar", 5.0).unwrap();
        assert!(resp.updated);
        assert_eq!(resp.previous_factor, Some(2.0));

        assert!((graph.convert("foo", "bar", 3.0).unwrap() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_conversion_rejects_empty_names() {
        let mut graph = ConversionGraph::new();

        assert!(add_conversion(&mut graph, "  ", "bar", 2.0).is_err());
        assert!(add_conversion(&mut graph, "foo", "", 2.0).is_err());
        assert_eq!(graph.unit_count(), 0);
    }

    #[test]
    fn test_list_units_is_sorted() {
        let graph = ConversionGraph::with_standard_units();

        let resp = list_units(&graph);
        assert_eq!(resp.total, 11);
        assert_eq!(resp.units.first().map(String::as_str), Some("celsius"));

        let mut sorted = resp.units.clone();
        sorted.sort();
        assert_eq!(resp.units, sorted);
    }

    #[test]
    fn test_list_conversions_filtered() {
        let graph = ConversionGraph::with_standard_units();

        let resp = list_conversions(&graph, Some("meter")).unwrap();
        assert_eq!(resp.total, 2);
        assert!(resp
            .conversions
            .iter()
            .all(|c| c.from_unit == "meter" && !c.affine_override));

        assert!(list_conversions(&graph, Some("banana")).is_err());
    }

    #[test]
    fn test_list_conversions_flags_affine_pair() {
        let graph = ConversionGraph::with_standard_units();

        let resp = list_conversions(&graph, None).unwrap();
        assert_eq!(resp.total, 14);

        let affine: Vec<_> = resp
            .conversions
            .iter()
            .filter(|c| c.affine_override)
            .collect();
        assert_eq!(affine.len(), 2);
        assert!(affine
            .iter()
            .all(|c| c.from_unit == "celsius" || c.from_unit == "fahrenheit"));
    }
}
