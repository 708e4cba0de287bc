//! Input checks for the form layer.
//!
//! The workout constructors never call these. Callers run them on raw input
//! before building a workout.

use crate::error::{MaptyError, Result};

/// Every value must be a finite number
pub fn ensure_finite(inputs: &[(&str, f64)]) -> Result<()> {
    for (field, value) in inputs {
        if !value.is_finite() {
            return Err(MaptyError::InvalidInput {
                field: field.to_string(),
                reason: format!("expected a finite number, got {}", value),
            });
        }
    }
    Ok(())
}

/// Every value must be strictly positive
pub fn ensure_positive(inputs: &[(&str, f64)]) -> Result<()> {
    for (field, value) in inputs {
        if *value <= 0.0 || value.is_nan() {
            return Err(MaptyError::InvalidInput {
                field: field.to_string(),
                reason: format!("must be a positive number, got {}", value),
            });
        }
    }
    Ok(())
}

pub fn validate_running(distance_km: f64, duration_min: f64, cadence_spm: f64) -> Result<()> {
    let inputs = [
        ("distance", distance_km),
        ("duration", duration_min),
        ("cadence", cadence_spm),
    ];
    ensure_finite(&inputs)?;
    ensure_positive(&inputs)
}

/// Elevation gain only has to be finite; descents are valid
pub fn validate_cycling(distance_km: f64, duration_min: f64, elevation_gain_m: f64) -> Result<()> {
    ensure_finite(&[
        ("distance", distance_km),
        ("duration", duration_min),
        ("elevation", elevation_gain_m),
    ])?;
    ensure_positive(&[("distance", distance_km), ("duration", duration_min)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_running() {
        assert!(validate_running(5.2, 24.0, 178.0).is_ok());
    }

    #[test]
    fn test_running_rejects_zero_and_negative() {
        assert!(validate_running(0.0, 24.0, 178.0).is_err());
        assert!(validate_running(5.0, -1.0, 178.0).is_err());
        assert!(validate_running(5.0, 24.0, 0.0).is_err());
    }

    #[test]
    fn test_running_rejects_non_finite() {
        let err = validate_running(f64::NAN, 24.0, 178.0).unwrap_err();
        match err {
            MaptyError::InvalidInput { field, .. } => assert_eq!(field, "distance"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(validate_running(5.0, f64::INFINITY, 178.0).is_err());
    }

    #[test]
    fn test_cycling_allows_descent() {
        assert!(validate_cycling(20.0, 60.0, -120.0).is_ok());
        assert!(validate_cycling(20.0, 60.0, 0.0).is_ok());
    }

    #[test]
    fn test_cycling_rejects_bad_base_fields() {
        assert!(validate_cycling(0.0, 60.0, 10.0).is_err());
        assert!(validate_cycling(20.0, 0.0, 10.0).is_err());
        let err = validate_cycling(20.0, 60.0, f64::NAN).unwrap_err();
        assert!(err.to_string().contains("elevation"));
    }
}
