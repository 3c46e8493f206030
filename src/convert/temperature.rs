//! Affine temperature conversion
//!
//! Celsius/Fahrenheit is not a pure multiplicative relationship, so it is
//! handled by formula before any graph lookup.

/// Celsius unit identifier
pub const CELSIUS: &str = "celsius";

/// Fahrenheit unit identifier
pub const FAHRENHEIT: &str = "fahrenheit";

/// Slope of the celsius -> fahrenheit formula
pub const CELSIUS_TO_FAHRENHEIT_SLOPE: f64 = 1.8;

/// Slope of the fahrenheit -> celsius formula (rounded, not the exact 5/9)
pub const FAHRENHEIT_TO_CELSIUS_SLOPE: f64 = 0.5556;

/// Whether `(from, to)` is one of the two affine temperature pairs
///
/// Expects identifiers already lower-cased.
pub fn is_affine_pair(from: &str, to: &str) -> bool {
    matches!((from, to), (CELSIUS, FAHRENHEIT) | (FAHRENHEIT, CELSIUS))
}

/// Convert between celsius and fahrenheit if `(from, to)` is exactly that
/// ordered pair. Returns `None` for every other pair.
///
/// Expects identifiers already lower-cased.
pub fn affine_convert(from: &str, to: &str, value: f64) -> Option<f64> {
    match (from, to) {
        (CELSIUS, FAHRENHEIT) => Some(value * CELSIUS_TO_FAHRENHEIT_SLOPE + 32.0),
        (FAHRENHEIT, CELSIUS) => Some((value - 32.0) * FAHRENHEIT_TO_CELSIUS_SLOPE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(affine_convert("celsius", "fahrenheit", 100.0), Some(212.0));
        assert_eq!(affine_convert("celsius", "fahrenheit", 0.0), Some(32.0));
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(affine_convert("fahrenheit", "celsius", 32.0), Some(0.0));

        // The rounded 0.5556 slope, not the exact 5/9
        let result = affine_convert("fahrenheit", "celsius", 212.0).unwrap();
        assert!((result - 180.0 * 0.5556).abs() < 1e-12);
    }

    #[test]
    fn test_non_temperature_pairs_pass_through() {
        assert_eq!(affine_convert("meter", "kilometer", 1.0), None);
        assert_eq!(affine_convert("celsius", "kelvin", 1.0), None);
        assert_eq!(affine_convert("celsius", "celsius", 1.0), None);
    }

    #[test]
    fn test_is_affine_pair() {
        assert!(is_affine_pair("celsius", "fahrenheit"));
        assert!(is_affine_pair("fahrenheit", "celsius"));
        assert!(!is_affine_pair("fahrenheit", "fahrenheit"));
        assert!(!is_affine_pair("meter", "celsius"));
    }
}
