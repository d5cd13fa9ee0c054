//! Common utilities for integration tests

pub mod reference_reactors;
pub mod test_helpers;

// Re-export commonly used items
pub use reference_reactors::{IntegratedPfr, SeriesCstr};
pub use test_helpers::{
    assert_strictly_increasing,
    grid,
    relative_error,
};
