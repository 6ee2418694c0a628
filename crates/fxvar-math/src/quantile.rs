//! Empirical quantiles.

use crate::error::{MathError, MathResult};

/// Empirical quantile with linear interpolation between order statistics.
///
/// The sample is sorted ascending and evaluated at rank `p * (n - 1)`;
/// a fractional rank interpolates linearly between its two neighbours.
/// Non-finite observations (missing days) are ignored.
///
/// # Arguments
///
/// * `values` - Sample, in any order
/// * `p` - Probability in `[0, 1]`
///
/// # Errors
///
/// Returns an error if `p` is outside `[0, 1]` or the sample has no finite
/// observation.
///
/// # Example
///
/// ```rust
/// use fxvar_math::quantile;
///
/// let q = quantile(&[4.0, 1.0, 3.0, 2.0, 5.0], 0.1).unwrap();
/// assert!((q - 1.4).abs() < 1e-12);
/// ```
pub fn quantile(values: &[f64], p: f64) -> MathResult<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(MathError::invalid_input(format!(
            "quantile probability {p} outside [0, 1]"
        )));
    }

    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let skipped = values.len() - sorted.len();
    if skipped > 0 {
        log::debug!("quantile: ignored {skipped} non-finite observations");
    }
    if sorted.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }

    sorted.sort_by(f64::total_cmp);
    Ok(interpolate_sorted(&sorted, p))
}

/// Quantile of an already sorted, finite, non-empty sample.
fn interpolate_sorted(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let fraction = rank - lower as f64;
        sorted[lower] + fraction * (sorted[upper] - sorted[lower])
    }
}
