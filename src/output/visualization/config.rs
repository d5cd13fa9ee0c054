//! Plot configuration for conversion-profile charts

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `series_label`: Legend entry of the curve
/// - `line_color`: Line color of the curve
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust
/// use rctr_vol::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::conversion_profile("Pilot plant PFR");
/// config.line_color = RED;
/// config.width = 1920;  // Full HD
/// config.height = 1080;
/// ```
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "PFR Conversion Rate")
    pub title: String,

    /// X-axis label (default: "Conversion")
    pub xlabel: String,

    /// Y-axis label (default: "Volume of PFR")
    pub ylabel: String,

    /// Legend entry (default: "Conversion Profile")
    pub series_label: String,

    /// Curve color (default: BLUE)
    pub line_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "PFR Conversion Rate".to_string(),
            xlabel: "Conversion".to_string(),
            ylabel: "Volume of PFR".to_string(),
            series_label: "Conversion Profile".to_string(),
            line_color: BLUE,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Config for the PFR conversion profile with optional custom title
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rctr_vol::output::visualization::{PlotConfig, NO_TITLE};
    ///
    /// let config = PlotConfig::conversion_profile("Run 12");
    /// assert_eq!(config.title, "Run 12");
    ///
    /// let config = PlotConfig::conversion_profile(NO_TITLE);
    /// assert_eq!(config.title, "PFR Conversion Rate");
    /// ```
    pub fn conversion_profile(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        if let Some(title) = title.into_optional_title() {
            config.title = title;
        }
        config
    }
}

// =================================================================================================
// Tests
// =================================================================================================
