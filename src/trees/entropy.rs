//! Binary entropy.
use crate::error::{Result, TreeError};

/// Computes the binary (base-2) entropy `H(p) = -p log2(p) - (1 - p) log2(1 - p)`.
///
/// # Arguments
///
/// * `p` - Fraction of positive examples in a set.
///
/// # Returns
///
/// The entropy in bits. `H(0)` and `H(1)` are defined as `0`.
///
/// # Errors
///
/// Returns [`TreeError::InvalidProportion`] if `p` is not within `[0, 1]`.
pub fn entropy(p: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(TreeError::InvalidProportion(p));
    }
    if p == 0.0 || p == 1.0 {
        return Ok(0.0);
    }
    Ok(-p * p.log2() - (1.0 - p) * (1.0 - p).log2())
}
