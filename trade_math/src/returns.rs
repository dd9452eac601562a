//! Price windowing and simple returns
//!
//! Closing prices are always ordered oldest first.

/// Return the most recent `window` closes.
///
/// When fewer than `window` closes are available the whole slice is returned,
/// so an empty history stays empty. A `window` of zero selects nothing.
pub fn window_tail(closes: &[f64], window: usize) -> &[f64] {
    let start = closes.len().saturating_sub(window);
    &closes[start..]
}

/// Calculate simple returns `(p[i] - p[i-1]) / p[i-1]` for consecutive closes.
///
/// Pairs whose prior close is not strictly positive are skipped, not counted
/// as zero, so the output may be shorter than `closes.len() - 1`.
pub fn simple_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .filter(|pair| pair[0] > 0.0)
        .map(|pair| (pair[1] - pair[0]) / pair[0])
        .collect()
}
