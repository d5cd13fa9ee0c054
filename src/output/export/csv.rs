//! CSV export of conversion profiles
//!
//! This module writes profiles to CSV (Comma-Separated Values), which is
//! compatible with spreadsheets, pandas, MATLAB and most analysis tools.
//!
//! # Features
//!
//! - **Simple interface**: Export a [`ConversionProfile`] or raw `&[f64]` slices
//! - **Metadata support**: Optional `#` header with the operating point
//! - **Customizable**: Delimiter, decimal separator, precision
//! - **Validation**: Checks for empty data, mismatched lengths, bad conversions
//!
//! # Quick Example
//!
//! ```rust,ignore
//! use rctr_vol::output::export::export_profile_csv;
//!
//! export_profile_csv(&profile, "pfr.csv", None)?;
//! ```
//!
//! **Output** (`pfr.csv`):
//! ```csv
//! Conversion,Volume of PFR
//! 0.000000,0.000000
//! 0.010101,0.010152
//! ...
//! 1.000000,inf
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! let metadata = CsvMetadata::from_params("PFR", &params);
//! let config = CsvConfig::default().with_metadata(metadata);
//!
//! export_profile_csv(&profile, "pfr.csv", Some(&config))?;
//! ```
//!
//! **Output**:
//! ```csv
//! # Reactor Volume Profile
//! # Generated: 2026-10-17T15:30:00+00:00
//! # Reactor: PFR
//! # Rate Constant k: 1
//! # Feed Rate F_A0: 1
//! # Target Conversion X: 0.9
//! #
//! Conversion,Volume of PFR
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use thiserror::Error;

use crate::kinetics::ReactionParameters;
use crate::output::export::Exporter;
use crate::profile::ConversionProfile;

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while exporting a profile
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Empty data: conversion and volume series must not be empty")]
    EmptyProfile,

    #[error("Data length mismatch: {conversion} conversions versus {volume} volumes")]
    LengthMismatch { conversion: usize, volume: usize },

    #[error("Invalid data: non-finite conversion at row {0}")]
    NonFiniteConversion(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use rctr_vol::output::export::CsvConfig;
///
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header for the conversion column (default: "Conversion")
    pub conversion_header: String,

    /// Header for the volume column (default: "Volume of PFR")
    pub volume_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            conversion_header: "Conversion".to_string(),
            volume_header: "Volume of PFR".to_string(),
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon delimiter, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// High precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only non-None fields are written.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Reactor name (e.g., "PFR")
    pub reactor_name: Option<String>,

    /// Rate constant k
    pub rate_constant: Option<f64>,

    /// Feed molar flow rate F_A0
    pub feed_rate: Option<f64>,

    /// Target conversion X of the point calculation
    pub target_conversion: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata for a reactor at an operating point
    pub fn from_params(reactor: &str, params: &ReactionParameters) -> Self {
        Self {
            reactor_name: Some(reactor.to_string()),
            rate_constant: Some(params.rate_constant),
            feed_rate: Some(params.feed_rate),
            target_conversion: Some(params.conversion),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> std::io::Result<()> {
    writeln!(out, "# Reactor Volume Profile")?;

    let now = chrono::Utc::now();
    writeln!(out, "# Generated: {}", now.to_rfc3339())?;

    if let Some(reactor) = &metadata.reactor_name {
        writeln!(out, "# Reactor: {}", reactor)?;
    }
    if let Some(k) = metadata.rate_constant {
        writeln!(out, "# Rate Constant k: {}", k)?;
    }
    if let Some(feed_rate) = metadata.feed_rate {
        writeln!(out, "# Feed Rate F_A0: {}", feed_rate)?;
    }
    if let Some(x) = metadata.target_conversion {
        writeln!(out, "# Target Conversion X: {}", x)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
///
/// Non-finite values come out as `inf`, `-inf` or `NaN`.
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Check series before anything touches the file system
fn validate_series(conversion_serie: &[f64], volume_serie: &[f64]) -> Result<(), ExportError> {
    if conversion_serie.is_empty() || volume_serie.is_empty() {
        return Err(ExportError::EmptyProfile);
    }

    if conversion_serie.len() != volume_serie.len() {
        return Err(ExportError::LengthMismatch {
            conversion: conversion_serie.len(),
            volume: volume_serie.len(),
        });
    }

    if let Some(row) = conversion_serie.iter().position(|x| !x.is_finite()) {
        return Err(ExportError::NonFiniteConversion(row));
    }

    Ok(())
}

/// Write header and rows to any writer
///
/// Nothing is written when the series fail validation.
pub fn write_profile_series<W: Write>(
    out: &mut W,
    conversion_serie: &[f64],
    volume_serie: &[f64],
    configuration: &CsvConfig,
) -> Result<(), ExportError> {
    validate_series(conversion_serie, volume_serie)?;

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(out, metadata)?;
        }
    }

    writeln!(
        out,
        "{}{}{}",
        configuration.conversion_header,
        configuration.delimiter,
        configuration.volume_header
    )?;

    for (conversion, volume) in conversion_serie.iter().zip(volume_serie.iter()) {
        writeln!(
            out,
            "{}{}{}",
            format_number(*conversion, configuration),
            configuration.delimiter,
            format_number(*volume, configuration)
        )?;
    }

    Ok(())
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a conversion profile to a CSV file
///
/// # Errors
///
/// - Empty profile
/// - Mismatched series lengths
/// - Non-finite conversion values
/// - File creation errors
///
/// Non-finite volumes are not an error.
pub fn export_profile_csv(
    profile: &ConversionProfile,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), ExportError> {
    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let conversion_serie = profile.conversion.as_slice();
    let volume_serie = profile.volume.as_slice();

    validate_series(conversion_serie, volume_serie)?;

    let mut file = BufWriter::new(File::create(output_path)?);
    write_profile_series(&mut file, conversion_serie, volume_serie, configuration)?;
    file.flush()?;

    log::info!("{} rows written to {}", profile.len(), output_path);
    Ok(())
}

// =============================================================================
// Exporter implementation
// =============================================================================

/// CSV implementation of [`Exporter`]
#[derive(Clone, Debug, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    type Error = ExportError;

    fn export_profile(&self, profile: &ConversionProfile, path: &str) -> Result<(), Self::Error> {
        export_profile_csv(profile, path, Some(&self.config))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
