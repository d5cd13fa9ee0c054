//! Kinetics model for ideal continuous reactors
//!
//! This module holds the design equations of the two ideal reactors for a
//! single first-order irreversible reaction `A → products` with rate
//! $-r_A = k \, C_A$.
//!
//! # Design Equations
//!
//! ```text
//! CSTR:  V = F_A0 · X / (k · (1 − X))
//! PFR:   V = (F_A0 / k) · ln(1 / (1 − X))
//! ```
//!
//! # Domain
//!
//! Both equations are total over the open domain `k > 0`, `0 ≤ X < 1`.
//! On the boundary (`X = 1` or `k = 0`) they hit a division by zero or a
//! log of zero. The resulting IEEE-754 special value (`inf` or `NaN`) is
//! returned as-is: it is the physical asymptote (infinite residence time for
//! complete conversion), not an error to be corrected here.
//!
//! # Example
//!
//! ```rust
//! use rctr_vol::kinetics::{cstr_volume, pfr_volume};
//!
//! let v_cstr = cstr_volume(1.0, 1.0, 0.9);
//! let v_pfr = pfr_volume(1.0, 1.0, 0.9);
//!
//! assert!((v_cstr - 9.0).abs() < 1e-12);
//! assert!((v_pfr - 10f64.ln()).abs() < 1e-12);
//! ```

mod traits;
mod reactors;

pub use traits::IdealReactor;
pub use reactors::{Cstr, Pfr};

// =================================================================================================
// Design Equations
// =================================================================================================

/// Required CSTR volume for a first-order reaction
///
/// `V = F_A0 · X / (k · (1 − X))`
///
/// # Arguments
///
/// * `k` - Rate constant \[1/time\]
/// * `feed_rate` - Feed molar flow rate of A, `F_A0` \[mol/time\]
/// * `conversion` - Target fractional conversion `X`
///
/// Returns `+inf` at `X = 1` (for `F_A0 > 0`) and `inf`/`NaN` at `k = 0`.
pub fn cstr_volume(k: f64, feed_rate: f64, conversion: f64) -> f64 {
    feed_rate * conversion / (k * (1.0 - conversion))
}

/// Required PFR volume for a first-order reaction
///
/// `V = (F_A0 / k) · ln(1 / (1 − X))`
///
/// Same domain and boundary behaviour as [`cstr_volume`].
pub fn pfr_volume(k: f64, feed_rate: f64, conversion: f64) -> f64 {
    (feed_rate / k) * (1.0 / (1.0 - conversion)).ln()
}

// =================================================================================================
// Parameters and Results
// =================================================================================================

/// Operating point of a first-order reaction
///
/// A plain value set: construction never validates or clamps. Bounds are the
/// business of the input controls (see [`crate::presentation::controls`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactionParameters {
    /// Rate constant k \[1/time\]
    pub rate_constant: f64,

    /// Feed molar flow rate F_A0 \[mol/time\]
    pub feed_rate: f64,

    /// Target fractional conversion X
    pub conversion: f64,
}

impl ReactionParameters {
    pub fn new(rate_constant: f64, feed_rate: f64, conversion: f64) -> Self {
        Self { rate_constant, feed_rate, conversion }
    }

    /// True when the design equations are finite for these parameters
    ///
    /// `k > 0`, `F_A0 ≥ 0` and `0 ≤ X < 1`.
    pub fn is_in_domain(&self) -> bool {
        self.rate_constant > 0.0
            && self.feed_rate >= 0.0
            && (0.0..1.0).contains(&self.conversion)
    }
}

/// Required volumes of both ideal reactors at one operating point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeResult {
    /// CSTR volume
    pub cstr: f64,

    /// PFR volume
    pub pfr: f64,
}

impl VolumeResult {
    /// Evaluate both design equations at `params`
    ///
    /// # Example
    ///
    /// ```rust
    /// use rctr_vol::kinetics::{ReactionParameters, VolumeResult};
    ///
    /// let volumes = VolumeResult::compute(&ReactionParameters::new(2.0, 1.0, 0.5));
    /// assert!((volumes.cstr - 0.5).abs() < 1e-12);
    /// ```
    pub fn compute(params: &ReactionParameters) -> Self {
        Self {
            cstr: Cstr.design_volume(params),
            pfr: Pfr.design_volume(params),
        }
    }

    /// Both volumes are finite numbers
    pub fn is_finite(&self) -> bool {
        self.cstr.is_finite() && self.pfr.is_finite()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
