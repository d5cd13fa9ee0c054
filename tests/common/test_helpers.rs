//! Helper functions for integration tests

/// Conversion grid on `[0, 1)`: `n` points `0, 1/n, ..., (n-1)/n`
pub fn grid(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 / n as f64).collect()
}

/// Assert that `values` is strictly increasing
pub fn assert_strictly_increasing(values: &[f64], message: &str) {
    for (i, pair) in values.windows(2).enumerate() {
        assert!(
            pair[1] > pair[0],
            "{}: element {} ({}) is not above element {} ({})",
            message, i + 1, pair[1], i, pair[0]
        );
    }
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_grid_excludes_one() {
        let g = grid(4);
        assert_eq!(g, vec![0.0, 0.25, 0.5, 0.75]);
    }
}
