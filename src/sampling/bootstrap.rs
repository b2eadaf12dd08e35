use crate::core::error::DatasetError;
use crate::sampling::Interval;
use rand::Rng;

/// Draws `distribution.len()` row indices, each index `j` with probability
/// equal to the width of `distribution[j]`.
///
/// Intervals are scanned in order and the first one containing the draw
/// wins. A draw that no interval contains means the distribution does not
/// cover `[0, 1)` and fails the whole call.
pub fn weighted_bootstrap<R: Rng + ?Sized>(
    distribution: &[Interval],
    rng: &mut R,
) -> Result<Vec<usize>, DatasetError> {
    let mut indices = Vec::with_capacity(distribution.len());
    for _ in 0..distribution.len() {
        let draw: f64 = rng.random();
        let index = distribution
            .iter()
            .position(|interval| interval.contains_value(draw))
            .ok_or_else(|| {
                DatasetError::InvalidArgument(format!(
                    "draw {draw} is not covered by the distribution"
                ))
            })?;
        indices.push(index);
    }
    Ok(indices)
}

/// Turns non-negative weights into contiguous intervals covering `[0, 1)`.
///
/// The last interval is closed at exactly `1.0` so rounding never leaves a
/// gap at the top of the range.
pub fn distribution_from_weights(weights: &[f64]) -> Result<Vec<Interval>, DatasetError> {
    if weights.is_empty() {
        return Err(DatasetError::InvalidArgument(
            "cannot build a distribution from no weights".into(),
        ));
    }
    if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(DatasetError::InvalidArgument(format!(
            "weights must be finite and non-negative, got {bad}"
        )));
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(DatasetError::InvalidArgument(
            "weights must not all be zero".into(),
        ));
    }

    let mut lo = 0.0;
    let last = weights.len() - 1;
    let intervals = weights
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let hi = if i == last { 1.0 } else { lo + w / total };
            let interval = Interval::new(lo, hi);
            lo = hi;
            interval
        })
        .collect();
    Ok(intervals)
}
