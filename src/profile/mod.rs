//! Conversion profile generator
//!
//! Samples a reactor design equation over the conversion range to build a
//! plottable curve `V(X)`.
//!
//! # Sampling Grid
//!
//! The grid is the closed interval `[0, 1]` with both endpoints included.
//! The last sample sits exactly on `X = 1`, where the design equations
//! diverge: the final volume is non-finite by construction. Consumers (charts,
//! export) decide what to do with it; the generator never drops or clamps it.
//!
//! # Example
//!
//! ```rust
//! use rctr_vol::profile::{pfr_conversion_profile, PROFILE_POINTS};
//!
//! let profile = pfr_conversion_profile(1.0, 1.0);
//!
//! assert_eq!(profile.len(), PROFILE_POINTS);
//! assert_eq!(profile.conversion[0], 0.0);
//! assert_eq!(profile.conversion[PROFILE_POINTS - 1], 1.0);
//! assert!(!profile.volume[PROFILE_POINTS - 1].is_finite());
//! ```

use nalgebra::DVector;

use crate::kinetics::{pfr_volume, IdealReactor, Pfr};

/// Number of samples in the default conversion profile
pub const PROFILE_POINTS: usize = 100;

// =================================================================================================
// Grid
// =================================================================================================

/// `n` evenly spaced values over the closed interval `[start, end]`
///
/// The first value is exactly `start` and the last exactly `end`; interior
/// values are `start + i · step` with `step = (end − start) / (n − 1)`.
/// `n = 0` gives an empty vector and `n = 1` gives `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> DVector<f64> {
    match n {
        0 => DVector::zeros(0),
        1 => DVector::from_element(1, start),
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values = DVector::from_fn(n, |i, _| start + i as f64 * step);
            values[n - 1] = end;
            values
        }
    }
}

// =================================================================================================
// Conversion Profile
// =================================================================================================

/// Paired samples `(X_i, V_i)` of a reactor design equation
///
/// `conversion` is ascending; `volume[i]` is the volume required to reach
/// `conversion[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionProfile {
    /// Conversion samples X
    pub conversion: DVector<f64>,

    /// Required volume at each conversion sample
    pub volume: DVector<f64>,
}

impl ConversionProfile {
    pub fn len(&self) -> usize {
        self.conversion.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversion.is_empty()
    }

    /// Iterate over `(X, V)` pairs in ascending conversion
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.conversion.iter().copied().zip(self.volume.iter().copied())
    }

    /// Iterate over the pairs whose volume is finite
    ///
    /// This is the clipped view used for drawing and axis scaling.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points().filter(|(_, v)| v.is_finite())
    }

    /// Largest finite volume, `None` if no sample is finite
    pub fn max_finite_volume(&self) -> Option<f64> {
        self.finite_points().map(|(_, v)| v).reduce(f64::max)
    }

    /// Number of samples with a non-finite volume
    pub fn non_finite_count(&self) -> usize {
        self.volume.iter().filter(|v| !v.is_finite()).count()
    }
}

// =================================================================================================
// Generators
// =================================================================================================

/// Sample any reactor over `n_points` conversions spanning `[0, 1]`
pub fn conversion_profile<R: IdealReactor + ?Sized>(
    reactor: &R,
    k: f64,
    feed_rate: f64,
    n_points: usize,
) -> ConversionProfile {
    let conversion = linspace(0.0, 1.0, n_points);
    let volume = conversion.map(|x| reactor.volume(k, feed_rate, x));

    log::debug!(
        "{} profile: {} samples, k = {}, F_A0 = {}",
        reactor.name(),
        n_points,
        k,
        feed_rate
    );

    ConversionProfile { conversion, volume }
}

/// PFR conversion profile on the default 100-point grid
///
/// `volume[i] == pfr_volume(k, feed_rate, conversion[i])` for every sample.
/// The final sample (`X = 1`) is non-finite.
pub fn pfr_conversion_profile(k: f64, feed_rate: f64) -> ConversionProfile {
    conversion_profile(&Pfr, k, feed_rate, PROFILE_POINTS)
}

// =================================================================================================
// Tests
// =================================================================================================
