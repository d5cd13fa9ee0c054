//! Bounded numeric input controls and the live form state
//!
//! The controls own the input bounds. The kinetics model never validates its
//! arguments, so every value that reaches it from a user goes through
//! [`NumericControl::clamp`] first.
//!
//! | Field | Label | Range | Default | Step |
//! |-------|-------|-------|---------|------|
//! | `k`   | Reaction rate constant (k) | \[0.1, 5.0\] | 1.0 | 0.1 |
//! | `F_A0`| Feed rate (F_A0) | \[0.0, 5.0\] | 1.0 | 0.1 |
//! | `X`   | Target conversion (X) | \[0.0, 1.0\] | 0.9 | 0.05 |
//!
//! `X = 1.0` is inside the range on purpose: it shows the asymptote.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::kinetics::ReactionParameters;

// =================================================================================================
// Numeric Control
// =================================================================================================

/// A bounded numeric input field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericControl {
    /// Label shown next to the field
    pub label: &'static str,

    /// Lowest accepted value
    pub min: f64,

    /// Highest accepted value
    pub max: f64,

    /// Initial value
    pub default: f64,

    /// Increment used by step up / step down
    pub step: f64,
}

/// Rate constant control
pub const RATE_CONSTANT: NumericControl = NumericControl {
    label: "Reaction rate constant (k)",
    min: 0.1,
    max: 5.0,
    default: 1.0,
    step: 0.1,
};

/// Feed rate control
pub const FEED_RATE: NumericControl = NumericControl {
    label: "Feed rate (F_A0)",
    min: 0.0,
    max: 5.0,
    default: 1.0,
    step: 0.1,
};

/// Target conversion control
pub const CONVERSION: NumericControl = NumericControl {
    label: "Target conversion (X)",
    min: 0.0,
    max: 1.0,
    default: 0.9,
    step: 0.05,
};

impl NumericControl {
    /// Bring `value` into `[min, max]`
    ///
    /// Returns `None` for NaN, which has no nearest bound.
    pub fn clamp(&self, value: f64) -> Option<f64> {
        if value.is_nan() {
            None
        } else {
            Some(value.clamp(self.min, self.max))
        }
    }

    /// Move `current` by `steps` increments, then clamp
    ///
    /// The result is the nearest point of the step grid anchored at `min`,
    /// rounded to the decimals of `step`: stepping `k` down from 1.0 three
    /// times stores 0.7, not 0.7000000000000001.
    pub fn step_by(&self, current: f64, steps: i32) -> f64 {
        let index = ((current - self.min) / self.step).round() + f64::from(steps);
        let snapped = self.round_to_grid(self.min + index * self.step);
        snapped.clamp(self.min, self.max)
    }

    /// Whether `value` lies inside `[min, max]`
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Decimal places of `step` (0.1 -> 1, 0.05 -> 2)
    fn step_decimals(&self) -> i32 {
        // log10 of a decimal step may land just past the integer
        (-self.step.log10() - 1e-9).ceil().max(0.0) as i32
    }

    /// `min` must not carry more decimals than `step`
    fn round_to_grid(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.step_decimals());
        (value * scale).round() / scale
    }
}

// =================================================================================================
// Form Fields
// =================================================================================================

/// Identifies one of the three form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RateConstant,
    FeedRate,
    Conversion,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::RateConstant, Field::FeedRate, Field::Conversion];

    /// Control (bounds, default, step) backing this field
    pub fn control(&self) -> &'static NumericControl {
        match self {
            Field::RateConstant => &RATE_CONSTANT,
            Field::FeedRate => &FEED_RATE,
            Field::Conversion => &CONVERSION,
        }
    }

    /// Short command name used by the interactive shell
    pub fn key(&self) -> &'static str {
        match self {
            Field::RateConstant => "k",
            Field::FeedRate => "fa0",
            Field::Conversion => "x",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Error returned when a field name is unknown
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}' (expected k, fa0 or x)")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "k" | "rate" | "rate_constant" => Ok(Field::RateConstant),
            "fa0" | "f_a0" | "feed" | "feed_rate" => Ok(Field::FeedRate),
            "x" | "conversion" => Ok(Field::Conversion),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

// =================================================================================================
// Form State
// =================================================================================================

/// Live values of the three input controls
///
/// Passed explicitly to whoever renders; there is no global form state.
///
/// # Example
///
/// ```rust
/// use rctr_vol::presentation::controls::{Field, FormState};
///
/// let mut form = FormState::default();
/// form.set(Field::Conversion, 1.7);          // clamped to the control maximum
/// assert_eq!(form.conversion, 1.0);
///
/// let params = form.params();
/// assert_eq!(params.conversion, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormState {
    pub rate_constant: f64,
    pub feed_rate: f64,
    pub conversion: f64,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            rate_constant: RATE_CONSTANT.default,
            feed_rate: FEED_RATE.default,
            conversion: CONVERSION.default,
        }
    }
}

impl FormState {
    /// Current value of `field`
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::RateConstant => self.rate_constant,
            Field::FeedRate => self.feed_rate,
            Field::Conversion => self.conversion,
        }
    }

    fn slot(&mut self, field: Field) -> &mut f64 {
        match field {
            Field::RateConstant => &mut self.rate_constant,
            Field::FeedRate => &mut self.feed_rate,
            Field::Conversion => &mut self.conversion,
        }
    }

    /// Set `field` through its control
    ///
    /// Out-of-range values are clamped. NaN is rejected and leaves the field
    /// unchanged. Returns `true` when the stored value changed.
    pub fn set(&mut self, field: Field, value: f64) -> bool {
        let control = field.control();

        let Some(clamped) = control.clamp(value) else {
            log::warn!("{}: rejected NaN input, keeping {}", control.label, self.get(field));
            return false;
        };

        if !control.contains(value) {
            log::warn!(
                "{}: {} is outside [{}, {}], clamped to {}",
                control.label,
                value,
                control.min,
                control.max,
                clamped
            );
        }

        let slot = self.slot(field);
        let changed = *slot != clamped;
        *slot = clamped;
        changed
    }

    /// Move `field` by `steps` control increments
    pub fn step(&mut self, field: Field, steps: i32) -> bool {
        let next = field.control().step_by(self.get(field), steps);
        let slot = self.slot(field);
        let changed = *slot != next;
        *slot = next;
        changed
    }

    /// Restore every field to its control default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Operating point for the kinetics model
    pub fn params(&self) -> ReactionParameters {
        ReactionParameters::new(self.rate_constant, self.feed_rate, self.conversion)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = FormState::default();
        assert_eq!(form.rate_constant, 1.0);
        assert_eq!(form.feed_rate, 1.0);
        assert_eq!(form.conversion, 0.9);
    }

    #[test]
    fn test_control_ranges() {
        assert_eq!((RATE_CONSTANT.min, RATE_CONSTANT.max), (0.1, 5.0));
        assert_eq!((FEED_RATE.min, FEED_RATE.max), (0.0, 5.0));
        assert_eq!((CONVERSION.min, CONVERSION.max), (0.0, 1.0));
        assert!(CONVERSION.contains(1.0));
    }

    #[test]
    fn test_clamp_out_of_range() {
        assert_eq!(RATE_CONSTANT.clamp(0.0), Some(0.1));
        assert_eq!(RATE_CONSTANT.clamp(12.0), Some(5.0));
        assert_eq!(FEED_RATE.clamp(-3.0), Some(0.0));
        assert_eq!(CONVERSION.clamp(0.42), Some(0.42));
        assert_eq!(CONVERSION.clamp(f64::NAN), None);
        assert_eq!(CONVERSION.clamp(f64::INFINITY), Some(1.0));
    }

    #[test]
    fn test_set_clamps_and_reports_change() {
        let mut form = FormState::default();
        assert!(form.set(Field::RateConstant, -1.0));
        assert_eq!(form.rate_constant, 0.1);

        assert!(!form.set(Field::RateConstant, 0.1));
        assert!(!form.set(Field::FeedRate, f64::NAN));
        assert_eq!(form.feed_rate, 1.0);
    }

    #[test]
    fn test_conversion_one_is_allowed() {
        let mut form = FormState::default();
        form.set(Field::Conversion, 1.0);
        assert_eq!(form.params().conversion, 1.0);
    }

    #[test]
    fn test_step_lands_on_grid() {
        let mut form = FormState::default();
        form.step(Field::Conversion, 1);
        assert_eq!(form.conversion, 0.95);
        form.step(Field::Conversion, 1);
        assert_eq!(form.conversion, 1.0);
        assert!(!form.step(Field::Conversion, 1));
        assert_eq!(form.conversion, 1.0);
    }

    #[test]
    fn test_step_down_stops_at_minimum() {
        let mut form = FormState::default();
        form.step(Field::RateConstant, -100);
        assert_eq!(form.rate_constant, 0.1);
    }

    #[test]
    fn test_step_values_are_exact_decimals() {
        let mut form = FormState::default();
        form.step(Field::RateConstant, -3);
        assert_eq!(form.rate_constant, 0.7);
        assert_eq!(form.rate_constant.to_string(), "0.7");

        form.step(Field::RateConstant, 15);
        assert_eq!(form.rate_constant, 2.2);

        form.step(Field::FeedRate, 3);
        assert_eq!(form.feed_rate, 1.3);

        for expected in [0.85, 0.8, 0.75, 0.7, 0.65] {
            form.step(Field::Conversion, -1);
            assert_eq!(form.conversion, expected);
        }
    }

    #[test]
    fn test_step_from_off_grid_value() {
        let mut form = FormState::default();
        form.set(Field::Conversion, 0.42);
        form.step(Field::Conversion, 1);
        assert_eq!(form.conversion, 0.45);
    }

    #[test]
    fn test_step_decimals() {
        assert_eq!(RATE_CONSTANT.step_decimals(), 1);
        assert_eq!(CONVERSION.step_decimals(), 2);
    }

    #[test]
    fn test_reset() {
        let mut form = FormState::default();
        form.set(Field::FeedRate, 4.0);
        form.reset();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn test_field_parse() {
        assert_eq!("k".parse::<Field>(), Ok(Field::RateConstant));
        assert_eq!("FA0".parse::<Field>(), Ok(Field::FeedRate));
        assert_eq!("conversion".parse::<Field>(), Ok(Field::Conversion));
        assert!("temperature".parse::<Field>().is_err());
    }
}
