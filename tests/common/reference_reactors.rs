//! Reference reactor models for testing
//!
//! These reactors reach the same volumes as the closed-form design equations
//! by a different route, which makes them useful to cross-check the crate.

use rctr_vol::kinetics::IdealReactor;

// =================================================================================================
// PFR by numerical integration
// =================================================================================================

/// PFR volume from the differential design equation
///
/// `dV/dX = F_A0 / (k · (1 − X))`, integrated with the composite Simpson rule.
pub struct IntegratedPfr {
    pub intervals: usize,
}

impl IntegratedPfr {
    pub fn new(intervals: usize) -> Self {
        // Simpson needs an even interval count
        Self { intervals: intervals + intervals % 2 }
    }
}

impl IdealReactor for IntegratedPfr {
    fn volume(&self, k: f64, feed_rate: f64, conversion: f64) -> f64 {
        let integrand = |x: f64| feed_rate / (k * (1.0 - x));
        let n = self.intervals;
        let h = conversion / n as f64;

        let mut sum = integrand(0.0) + integrand(conversion);
        for i in 1..n {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            sum += weight * integrand(i as f64 * h);
        }

        sum * h / 3.0
    }

    fn name(&self) -> &str {
        "Integrated PFR"
    }
}

// =================================================================================================
// PFR as the limit of CSTRs in series
// =================================================================================================

/// `n` equal CSTRs in series reaching conversion `X` overall
///
/// Each tank runs at `1 − (1 − X)^(1/n)` conversion of its own feed. The total
/// volume tends to the PFR volume as `n` grows, and equals one CSTR at `n = 1`.
pub struct SeriesCstr {
    pub tanks: usize,
}

impl IdealReactor for SeriesCstr {
    fn volume(&self, k: f64, feed_rate: f64, conversion: f64) -> f64 {
        let n = self.tanks as f64;
        let outlet_ratio = (1.0 - conversion).powf(1.0 / n);

        // Unit feed concentration, so volumetric flow equals F_A0.
        // C_i / C_{i-1} = 1 / (1 + k tau)  =>  tau = (1/ratio − 1) / k
        let tau_per_tank = (1.0 / outlet_ratio - 1.0) / k;
        n * feed_rate * tau_per_tank
    }

    fn name(&self) -> &str {
        "CSTRs in series"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simpson_exact_at_zero() {
        assert_eq!(IntegratedPfr::new(10).volume(1.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn test_interval_count_made_even() {
        assert_eq!(IntegratedPfr::new(7).intervals, 8);
    }
}
