//! Presentation layer
//!
//! Binds the three bounded input controls to the kinetics model and the
//! profile generator, then presents the outputs:
//!
//! - two labeled text values ("CSTR Volume", "PFR Volume")
//! - one line chart of the PFR conversion profile
//!
//! # Organization
//!
//! - [`controls`]: input bounds, defaults and steps; the live [`FormState`]
//! - [`render`]: the pure render cycle `render(params) -> (VolumeResult, ConversionProfile)`
//! - [`shell`]: a line-oriented event loop that re-renders on every change
//!
//! The kinetics model never sees a value that did not go through a control.

pub mod controls;
pub mod render;
pub mod shell;

pub use controls::{Field, FormState, NumericControl};
pub use render::{render, RenderedView, APP_TITLE, CHART_HEADER};
pub use shell::{Command, Shell, ShellError};
