use crate::error::SamplerError;
use crate::scan::quickfind;

/// Relative tolerance between a declared total and the recomputed sum.
pub const TOTAL_RELATIVE_TOLERANCE: f64 = 1e-9;

/// Checks the weights and the declared total without looking at a draw.
///
/// Returns the recomputed sum on success.
pub fn validate_inputs(weights: &[f64], total: f64) -> Result<f64, SamplerError> {
    if weights.is_empty() {
        return Err(SamplerError::Empty);
    }

    let mut actual = 0.0;
    for (index, &value) in weights.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(SamplerError::InvalidWeight { index, value });
        }
        actual += value;
    }

    if !total.is_finite() || total <= 0.0 {
        return Err(SamplerError::InvalidTotal(total));
    }

    // Finite weights can still sum past f64::MAX.
    let scale = actual.abs().max(total.abs());
    if !actual.is_finite() || (actual - total).abs() > TOTAL_RELATIVE_TOLERANCE * scale {
        return Err(SamplerError::TotalMismatch {
            declared: total,
            actual,
        });
    }

    Ok(actual)
}

pub fn validate_draw(draw: f64) -> Result<(), SamplerError> {
    if (0.0..=1.0).contains(&draw) {
        Ok(())
    } else {
        Err(SamplerError::DrawOutOfRange(draw))
    }
}

/// Validating counterpart of [`quickfind`]. Any input the permissive scan
/// would silently accept but that cannot describe a distribution is rejected;
/// otherwise the result is the same as `quickfind`.
pub fn quickfind_checked(weights: &[f64], total: f64, draw: f64) -> Result<usize, SamplerError> {
    validate_inputs(weights, total)?;
    validate_draw(draw)?;
    Ok(quickfind(weights, total, draw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_input() {
        assert_eq!(quickfind_checked(&[1.0, 2.0, 3.0, 4.0], 10.0, 0.5), Ok(3));
        assert_eq!(quickfind_checked(&[1.0, 1.0, 1.0, 1.0], 4.0, 1.0), Ok(4));
    }

    #[test]
    fn rejects_empty_weights() {
        assert_eq!(quickfind_checked(&[], 0.0, 0.3), Err(SamplerError::Empty));
    }

    #[test]
    fn rejects_bad_weights() {
        assert_eq!(
            quickfind_checked(&[1.0, -1.0, 2.0], 2.0, 0.5),
            Err(SamplerError::InvalidWeight { index: 1, value: -1.0 })
        );
        assert!(matches!(
            quickfind_checked(&[1.0, f64::NAN], 1.0, 0.5),
            Err(SamplerError::InvalidWeight { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_non_positive_total() {
        assert_eq!(quickfind_checked(&[0.0, 0.0], 0.0, 0.5), Err(SamplerError::InvalidTotal(0.0)));
        assert_eq!(quickfind_checked(&[1.0], -1.0, 0.5), Err(SamplerError::InvalidTotal(-1.0)));
    }

    #[test]
    fn rejects_draw_outside_unit_interval() {
        assert_eq!(quickfind_checked(&[1.0], 1.0, 1.5), Err(SamplerError::DrawOutOfRange(1.5)));
        assert_eq!(quickfind_checked(&[1.0], 1.0, -0.1), Err(SamplerError::DrawOutOfRange(-0.1)));
        assert!(quickfind_checked(&[1.0], 1.0, f64::NAN).is_err());
    }

    #[test]
    fn rejects_mismatched_total() {
        assert_eq!(
            quickfind_checked(&[1.0, 2.0], 10.0, 0.5),
            Err(SamplerError::TotalMismatch { declared: 10.0, actual: 3.0 })
        );
    }

    #[test]
    fn rejects_weights_whose_sum_overflows() {
        assert_eq!(
            validate_inputs(&[1e308, 1e308], 1.0),
            Err(SamplerError::TotalMismatch { declared: 1.0, actual: f64::INFINITY })
        );
        assert!(quickfind_checked(&[1e308, 1e308], 1.0, 0.5).is_err());
        assert!(quickfind_checked(&[1e308, 1e308], f64::MAX, 0.5).is_err());
    }

    #[test]
    fn tolerates_rounding_in_declared_total() {
        // pairwise and sequential summation can differ in the last bits
        let weights = [0.1, 0.2, 0.3];
        assert_eq!(quickfind_checked(&weights, 0.6, 0.99), Ok(3));
        assert_eq!(validate_inputs(&weights, 0.6).map(|s| (s - 0.6).abs() < 1e-12), Ok(true));
    }

    #[test]
    fn error_messages_name_the_offending_value() {
        let err = quickfind_checked(&[1.0, -2.0], 1.0, 0.5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "weight at index 1 is -2, expected a finite non-negative value"
        );
    }
}
