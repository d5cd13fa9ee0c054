//! Output module for calculation results
//!
//! This module provides tools to output conversion profiles in various formats:
//! - **Visualization**: PNG/SVG charts using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Charts
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── profile.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use rctr_vol::output::plot_conversion_profile;
//!
//! plot_conversion_profile(&profile, "pfr.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use rctr_vol::output::export_profile_csv;
//!
//! export_profile_csv(&profile, "pfr.csv", None)?;
//! ```
//!
//! Both sub-modules accept a [`ConversionProfile`](crate::profile::ConversionProfile)
//! or plain `&[f64]` slices. Neither mutates the profile: clipping of the
//! non-finite asymptote happens on the way out.

pub mod visualization;
pub mod export;

pub use visualization::{
    plot_conversion_profile,
    plot_profile_series,
    PlotConfig,
};

pub use export::{
    export_profile_csv,
    CsvConfig,
    CsvExporter,
    CsvMetadata,
    ExportError,
    Exporter,
};
