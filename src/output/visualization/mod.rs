//! Visualization of conversion profiles
//!
//! This module draws reactor conversion profiles using the `plotters` library.
//! PNG or SVG output is chosen from the file extension.
//!
//! # Organization
//!
//! - **config**: Plot configuration (`PlotConfig`)
//! - **profile**: Volume vs conversion line chart
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rctr_vol::output::visualization::{plot_conversion_profile, PlotConfig};
//! use rctr_vol::profile::pfr_conversion_profile;
//!
//! let profile = pfr_conversion_profile(1.0, 1.0);
//!
//! // Default labels: "PFR Conversion Rate", "Conversion", "Volume of PFR"
//! plot_conversion_profile(&profile, "pfr.png", None)?;
//!
//! // Custom title
//! let config = PlotConfig::conversion_profile("k = 1.0 1/s");
//! plot_conversion_profile(&profile, "pfr.svg", Some(&config))?;
//! ```

pub mod config;
pub mod profile;

pub use config::{PlotConfig, NO_TITLE};

pub use profile::{plot_conversion_profile, plot_profile_series};
