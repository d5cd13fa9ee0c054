//! Export module for conversion profiles.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a
//! new format means a new file and no change to existing ones.
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use rctr_vol::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//! exporter.export_profile(&profile, "pfr.csv")?;
//! ```

pub mod csv;

pub use csv::{export_profile_csv, CsvConfig, CsvExporter, CsvMetadata, ExportError};

use crate::profile::ConversionProfile;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, so callers
/// can react to the precise failure instead of a boxed error.
///
/// # Non-finite volumes
///
/// The last sample of a profile is the `X = 1` asymptote. Exporters write it
/// as data (`inf` / `NaN`); they must not drop or clamp it.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports a profile as `conversion, volume` rows.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path is invalid or the directory does not exist
    /// - `profile` contains no data or inconsistent series
    fn export_profile(&self, profile: &ConversionProfile, path: &str) -> Result<(), Self::Error>;
}
