//! Standard unit seed set
//!
//! The conversion rules loaded at startup.

use super::graph::ConversionGraph;
use super::temperature::{CELSIUS_TO_FAHRENHEIT_SLOPE, FAHRENHEIT_TO_CELSIUS_SLOPE};

impl ConversionGraph {
    /// Build a graph pre-loaded with the standard length, weight,
    /// temperature, and time units
    pub fn with_standard_units() -> Self {
        let mut graph = Self::new();

        // Length units
        graph.register("centimeter", "meter", 0.01);
        graph.register("meter", "centimeter", 100.0);
        graph.register("meter", "kilometer", 0.001);
        graph.register("kilometer", "meter", 1000.0);

        // Weight units. The pound factors are the usual 4-digit roundings,
        // not exact reciprocals of each other.
        graph.register("gram", "kilogram", 0.001);
        graph.register("kilogram", "gram", 1000.0);
        graph.register("pound", "kilogram", 0.4536);
        graph.register("kilogram", "pound", 2.2046);

        // Temperature units. These multiplicative entries are shadowed by the
        // affine celsius/fahrenheit formulas, which intercept that exact pair
        // before any graph lookup. They would only take effect through
        // multi-hop composition if a third temperature unit were ever linked
        // in, and the result would then be a multiplicative approximation.
        graph.register("celsius", "fahrenheit", CELSIUS_TO_FAHRENHEIT_SLOPE);
        graph.register("fahrenheit", "celsius", FAHRENHEIT_TO_CELSIUS_SLOPE);

        // Time units
        graph.register("minute", "second", 60.0);
        graph.register("second", "minute", 1.0 / 60.0);
        graph.register("hour", "minute", 60.0);
        graph.register("minute", "hour", 1.0 / 60.0);

        graph
    }
}

#[cfg(test)]
mod tests {
    use super::super::graph::ConvertError;
    use super::*;

    #[test]
    fn test_seed_counts() {
        let graph = ConversionGraph::with_standard_units();

        // centimeter, meter, kilometer, gram, kilogram, pound,
        // celsius, fahrenheit, minute, second, hour
        assert_eq!(graph.unit_count(), 11);
        assert_eq!(graph.conversion_count(), 14);
    }

    #[test]
    fn test_meters_to_kilometers() {
        let graph = ConversionGraph::with_standard_units();
        let result = graph.convert("meter", "kilometer", 1500.0).unwrap();
        assert!((result - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_two_hop_time_conversion() {
        let graph = ConversionGraph::with_standard_units();

        // hour -> minute -> second is the only path
        let result = graph.convert("hour", "second", 2.0).unwrap();
        assert!((result - 7200.0).abs() < 1e-9);
    }

    #[test]
    fn test_two_hop_length_conversion() {
        let graph = ConversionGraph::with_standard_units();

        // centimeter -> meter -> kilometer
        let result = graph.convert("centimeter", "kilometer", 150000.0).unwrap();
        assert!((result - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_pound_round_trip_is_not_exact() {
        let graph = ConversionGraph::with_standard_units();

        let pounds = graph.convert("kilogram", "pound", 1.0).unwrap();
        let back = graph.convert("pound", "kilogram", pounds).unwrap();

        // 2.2046 * 0.4536 = 1.00000656; the factors are not exact reciprocals
        assert!((back - 2.2046 * 0.4536).abs() < 1e-12);
        assert!((back - 1.0).abs() > 1e-7);
    }

    #[test]
    fn test_length_and_weight_are_disconnected() {
        let graph = ConversionGraph::with_standard_units();

        assert_eq!(
            graph.convert("meter", "gram", 5.0),
            Err(ConvertError::NoConversionPath {
                from: "meter".to_string(),
                to: "gram".to_string(),
            })
        );
    }

    #[test]
    fn test_temperature_goes_through_affine_formula() {
        let graph = ConversionGraph::with_standard_units();

        // The registered 1.8 / 0.5556 edges are never consulted for this pair
        let f = graph.convert("celsius", "fahrenheit", 100.0).unwrap();
        assert!((f - 212.0).abs() < 1e-9);

        let c = graph.convert("fahrenheit", "celsius", 32.0).unwrap();
        assert!(c.abs() < 1e-9);
    }

    #[test]
    fn test_seed_can_still_be_extended() {
        let mut graph = ConversionGraph::with_standard_units();
        graph.register("mile", "kilometer", 1.609344);

        let result = graph.convert("mile", "centimeter", 1.0).unwrap();

        // mile -> kilometer -> meter -> centimeter
        assert!((result - 160934.4).abs() < 1e-6);
    }
}
