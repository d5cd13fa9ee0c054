//! Conversion profile plotting
//!
//! Draws `V(X)` as a single line series. The last sample of a profile sits
//! on the `X = 1` asymptote and is non-finite; non-finite samples are
//! clipped from the series and the y axis is scaled on the finite ones.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rctr_vol::output::visualization::plot_conversion_profile;
//! use rctr_vol::profile::pfr_conversion_profile;
//!
//! let profile = pfr_conversion_profile(1.0, 1.0);
//! plot_conversion_profile(&profile, "pfr.svg", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;

use crate::profile::ConversionProfile;
use super::config::{PlotConfig, NO_TITLE};

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Axis ranges for the finite samples
///
/// The x range spans every finite sample. The y range starts at zero (or
/// below, for negative volumes) and leaves 10 % head-room above the largest
/// finite volume. A flat profile gets a unit-height axis.
fn axis_ranges(points: &[(f64, f64)]) -> Result<(Range<f64>, Range<f64>), Box<dyn Error>> {
    if points.is_empty() {
        return Err("No finite samples to plot".into());
    }

    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (0.0_f64, f64::NEG_INFINITY);

    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if x_max <= x_min {
        x_max = x_min + 1.0;
    }

    let y_range = y_max - y_min;
    let y_max = if y_range > 0.0 { y_max + 0.1 * y_range } else { y_min + 1.0 };

    Ok((x_min..x_max, y_min..y_max))
}

/// Draw one profile curve on any drawing area
fn draw_profile_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    points: &[(f64, f64)],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static
{
    let (x_range, y_range) = axis_ranges(points)?;

    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    let x_formatter = |x: &f64| format!("{:.2}", x);
    let y_formatter = |y: &f64| format!("{:.3}", y);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter);

    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    let color = config.line_color;
    let width = config.line_width;

    chart.draw_series(LineSeries::new(
        points.iter().copied(),
        color.stroke_width(width),
    ))?
        .label(config.series_label.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(width)));

    chart.configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Public API
// =================================================================================================

/// Plot a curve from raw conversion and volume series
///
/// Pairs whose conversion or volume is non-finite are skipped.
///
/// # Arguments
///
/// * `conversion_serie` - Conversion values (x axis)
/// * `volume_serie` - Volume values (y axis)
/// * `output_path` - Output file path (.png or .svg)
/// * `configuration` - Optional PlotConfig
///
/// # Errors
///
/// - Series lengths differ
/// - No pair is finite
/// - File cannot be written or drawing fails
pub fn plot_profile_series(
    conversion_serie: &[f64],
    volume_serie: &[f64],
    output_path: &str,
    configuration: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if conversion_serie.len() != volume_serie.len() {
        return Err(format!(
            "Data length mismatch: {} conversions versus {} volumes",
            conversion_serie.len(),
            volume_serie.len()
        ).into());
    }

    let default_config = PlotConfig::conversion_profile(NO_TITLE);
    let config = configuration.unwrap_or(&default_config);

    let points: Vec<(f64, f64)> = conversion_serie.iter()
        .copied()
        .zip(volume_serie.iter().copied())
        .filter(|(x, v)| x.is_finite() && v.is_finite())
        .collect();

    let clipped = conversion_serie.len() - points.len();
    if clipped > 0 {
        log::debug!("{}: clipped {} non-finite sample(s) from the series", output_path, clipped);
    }

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let root = SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
            draw_profile_on_area(&root, &points, config)
        }
        _ => {
            let root = BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
            draw_profile_on_area(&root, &points, config)
        }
    }?;

    log::info!("chart written to {}", output_path);
    Ok(())
}

/// Plot a conversion profile (volume vs conversion)
///
/// # Example
///
/// ```rust,ignore
/// use rctr_vol::output::visualization::{plot_conversion_profile, PlotConfig};
///
/// let profile = pfr_conversion_profile(2.0, 1.0);
/// plot_conversion_profile(&profile, "pfr.png", Some(&PlotConfig::conversion_profile("k = 2")))?;
/// ```
pub fn plot_conversion_profile(
    profile: &ConversionProfile,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    plot_profile_series(
        profile.conversion.as_slice(),
        profile.volume.as_slice(),
        output_path,
        config,
    )
}

// =================================================================================================
// Tests
// =================================================================================================
