//! Validation utilities for the Car Park Finder

use chrono::NaiveDate;

use crate::types::round_to;

// ============================================================================
// Name Validations
// ============================================================================

/// Validate a car park or facility name.
///
/// Names double as forecast artifact file stems, so anything that could
/// escape the storage root is rejected.
pub fn validate_car_park_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Car park name cannot be empty");
    }
    if name.contains('/') || name.contains('\\') {
        return Err("Car park name cannot contain path separators");
    }
    if name.contains('\0') {
        return Err("Car park name cannot contain NUL bytes");
    }
    if name.contains("..") {
        return Err("Car park name cannot contain '..'");
    }
    Ok(())
}

// ============================================================================
// Date and Coordinate Validations
// ============================================================================

/// Parse a date picker value (`YYYY-MM-DD`)
pub fn parse_selected_date(raw: &str) -> Result<NaiveDate, &'static str> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| "Date must be in YYYY-MM-DD format")
}

/// Check that a value carries no more than `decimals` decimal places
pub fn is_rounded_to(value: f64, decimals: i32) -> bool {
    round_to(value, decimals) == value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_valid() {
        assert!(validate_car_park_name("Warriewood Car Park").is_ok());
        assert!(validate_car_park_name("Penrith Combewood At-Grade Car Park").is_ok());
        assert!(validate_car_park_name("St. Marys Car Park").is_ok());
    }

    #[test]
    fn test_validate_name_empty() {
        assert!(validate_car_park_name("").is_err());
        assert!(validate_car_park_name("   ").is_err());
    }

    #[test]
    fn test_validate_name_path_escape() {
        assert!(validate_car_park_name("../secrets").is_err());
        assert!(validate_car_park_name("model/Kiama Car Park").is_err());
        assert!(validate_car_park_name("model\\Kiama Car Park").is_err());
        assert!(validate_car_park_name("..").is_err());
        assert!(validate_car_park_name("Kiama\0Car Park").is_err());
    }

    #[test]
    fn test_parse_selected_date() {
        assert_eq!(
            parse_selected_date("2024-05-01"),
            Ok(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
        );
        assert!(parse_selected_date("2024-02-30").is_err());
        assert!(parse_selected_date("01/05/2024").is_err());
    }

    #[test]
    fn test_is_rounded_to() {
        assert!(is_rounded_to(-33.698, 3));
        assert!(is_rounded_to(151.0, 3));
        assert!(!is_rounded_to(-33.697777, 3));
    }
}
