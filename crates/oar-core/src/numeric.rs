use crate::OarError;

/// Reject NaN and infinities, e.g. a caller-supplied time step.
pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, OarError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(OarError::NonFinite { what, value: v })
    }
}

/// Accept a finite, non-negative construction parameter.
pub fn ensure_non_negative(v: f64, what: &'static str) -> Result<f64, OarError> {
    if v.is_finite() && v >= 0.0 {
        Ok(v)
    } else {
        Err(OarError::InvalidParameter { what, value: v })
    }
}

/// Accept a finite, strictly positive construction parameter.
pub fn ensure_positive(v: f64, what: &'static str) -> Result<f64, OarError> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(OarError::InvalidParameter { what, value: v })
    }
}

/// Clamp a normalized control intensity into [-1, 1]. NaN maps to 0.
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) }
}

/// Wrap a heading in degrees into [0, 360).
pub fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
