//! One render cycle: parameters in, volumes and profile out
//!
//! [`render`] is the whole reactive pipeline as a pure function. A shell
//! calls it once per input change and then presents the result; nothing is
//! cached between calls.

use std::fmt;

use crate::kinetics::{ReactionParameters, VolumeResult};
use crate::profile::{pfr_conversion_profile, ConversionProfile};

/// Heading shown once when the form opens
pub const APP_TITLE: &str = "CSTR and PFR Calculator";

/// Heading shown above the chart output
pub const CHART_HEADER: &str = "PFR Conversion";

/// Text label of the CSTR volume output
pub const CSTR_LABEL: &str = "CSTR Volume";

/// Text label of the PFR volume output
pub const PFR_LABEL: &str = "PFR Volume";

/// Compute every output for one set of inputs
///
/// Point volumes first, then the PFR profile. Degenerate inputs (`X = 1`)
/// are logged and passed through untouched.
///
/// # Example
///
/// ```rust
/// use rctr_vol::kinetics::ReactionParameters;
/// use rctr_vol::presentation::render;
///
/// let (volumes, profile) = render(ReactionParameters::new(1.0, 1.0, 0.9));
/// assert!((volumes.cstr - 9.0).abs() < 1e-12);
/// assert_eq!(profile.len(), 100);
/// ```
pub fn render(params: ReactionParameters) -> (VolumeResult, ConversionProfile) {
    if !params.is_in_domain() {
        log::warn!(
            "parameters outside the finite domain (k = {}, F_A0 = {}, X = {}): volumes will be non-finite",
            params.rate_constant,
            params.feed_rate,
            params.conversion
        );
    }

    let volumes = VolumeResult::compute(&params);
    let profile = pfr_conversion_profile(params.rate_constant, params.feed_rate);

    log::debug!("render: V_cstr = {}, V_pfr = {}", volumes.cstr, volumes.pfr);

    (volumes, profile)
}

/// Everything one render cycle produced, ready to present
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    pub params: ReactionParameters,
    pub volumes: VolumeResult,
    pub profile: ConversionProfile,
}

impl RenderedView {
    pub fn new(params: ReactionParameters) -> Self {
        let (volumes, profile) = render(params);
        Self { params, volumes, profile }
    }
}

/// Text outputs: one labeled line per reactor
///
/// Non-finite volumes print as `inf` / `NaN`.
impl fmt::Display for RenderedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", CSTR_LABEL, self.volumes.cstr)?;
        write!(f, "{}: {}", PFR_LABEL, self.volumes.pfr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinetics::{cstr_volume, pfr_volume};

    #[test]
    fn test_render_is_pure() {
        let params = ReactionParameters::new(2.0, 1.0, 0.5);
        assert_eq!(render(params), render(params));
    }

    #[test]
    fn test_render_matches_kinetics() {
        let params = ReactionParameters::new(3.2, 0.4, 0.75);
        let (volumes, profile) = render(params);

        assert_eq!(volumes.cstr, cstr_volume(3.2, 0.4, 0.75));
        assert_eq!(volumes.pfr, pfr_volume(3.2, 0.4, 0.75));
        assert_eq!(profile.volume[10], pfr_volume(3.2, 0.4, profile.conversion[10]));
    }

    #[test]
    fn test_text_output_labels() {
        let view = RenderedView::new(ReactionParameters::new(1.0, 1.0, 0.0));
        assert_eq!(view.to_string(), "CSTR Volume: 0\nPFR Volume: 0");
    }

    #[test]
    fn test_text_output_complete_conversion() {
        let view = RenderedView::new(ReactionParameters::new(1.0, 1.0, 1.0));
        assert_eq!(view.to_string(), "CSTR Volume: inf\nPFR Volume: inf");
    }
}
