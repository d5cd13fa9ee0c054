//! CSTR and PFR reactor models
use crate::kinetics::{cstr_volume, pfr_volume, IdealReactor};

/// Continuously stirred tank reactor
///
/// Perfect mixing: the whole volume runs at the outlet concentration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cstr;

impl IdealReactor for Cstr {
    fn volume(&self, k: f64, feed_rate: f64, conversion: f64) -> f64 {
        cstr_volume(k, feed_rate, conversion)
    }

    fn name(&self) -> &str {
        "CSTR"
    }
}

/// Plug flow reactor
///
/// No axial mixing: integrated design equation along the reactor length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pfr;

impl IdealReactor for Pfr {
    fn volume(&self, k: f64, feed_rate: f64, conversion: f64) -> f64 {
        pfr_volume(k, feed_rate, conversion)
    }

    fn name(&self) -> &str {
        "PFR"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinetics::ReactionParameters;

    #[test]
    fn test_names() {
        assert_eq!(Cstr.name(), "CSTR");
        assert_eq!(Pfr.name(), "PFR");
    }

    #[test]
    fn test_trait_matches_free_functions() {
        let params = ReactionParameters::new(2.5, 3.0, 0.35);
        assert_eq!(Cstr.design_volume(&params), cstr_volume(2.5, 3.0, 0.35));
        assert_eq!(Pfr.design_volume(&params), pfr_volume(2.5, 3.0, 0.35));
    }

    #[test]
    fn test_trait_object_dispatch() {
        let reactors: Vec<Box<dyn IdealReactor>> = vec![Box::new(Cstr), Box::new(Pfr)];
        let volumes: Vec<f64> = reactors.iter().map(|r| r.volume(1.0, 1.0, 0.9)).collect();
        assert_eq!(volumes.len(), 2);
        assert!(volumes[0] > volumes[1]);
    }
}
