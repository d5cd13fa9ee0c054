//! Reactor model trait
//!
//! The [`IdealReactor`] trait is the seam between a reactor's design equation
//! and everything that consumes it (profile sampling, charts, export).
//! Consumers never need to know which reactor they are sampling.

use crate::kinetics::ReactionParameters;

/// Ideal continuous reactor with a closed-form design equation
///
/// # Contract
///
/// - `volume` must be pure: identical inputs give identical outputs.
/// - `volume` must not clamp or special-case its inputs. Boundary values
///   (`X = 1`, `k = 0`) propagate as `inf`/`NaN`.
///
/// # Example
///
/// ```rust
/// use rctr_vol::kinetics::{IdealReactor, Cstr, Pfr, ReactionParameters};
///
/// let params = ReactionParameters::new(1.0, 1.0, 0.9);
/// let reactors: Vec<Box<dyn IdealReactor>> = vec![Box::new(Cstr), Box::new(Pfr)];
///
/// for reactor in &reactors {
///     println!("{}: {}", reactor.name(), reactor.design_volume(&params));
/// }
/// ```
pub trait IdealReactor {
    /// Required volume for rate constant `k`, feed rate `F_A0` and conversion `X`
    fn volume(&self, k: f64, feed_rate: f64, conversion: f64) -> f64;

    /// Required volume at an operating point
    fn design_volume(&self, params: &ReactionParameters) -> f64 {
        self.volume(params.rate_constant, params.feed_rate, params.conversion)
    }

    /// Short display name (e.g. "CSTR")
    fn name(&self) -> &str;
}
