//! Exponential smoothing and dispersion helpers.

/// Exponentially weighted moving average over `values`, oldest first.
///
/// The estimate is seeded with the oldest value and every later value pulls it by `alpha`:
/// `estimate = alpha * value + (1 - alpha) * estimate`. Empty input yields `0.0`.
pub fn ewma(values: &[f64], alpha: f64) -> f64 {
    let Some((&first, rest)) = values.split_first() else {
        return 0.0;
    };
    rest.iter()
        .fold(first, |estimate, &v| alpha * v + (1.0 - alpha) * estimate)
}

/// Sample variance (n - 1 denominator) of `values` around `mean`.
/// Fewer than two values have no spread: `0.0`.
pub fn variance(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let sum: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    sum / (values.len() - 1) as f64
}
