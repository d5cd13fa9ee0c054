//! Command-line front end
//!
//! One-shot mode renders once from the flags and exits. `--interactive`
//! opens the line shell on stdin/stdout and re-renders on every change.
//!
//! ```text
//! rctr-vol -k 2 --conversion 0.5 --plot pfr.svg
//! rctr-vol --interactive --plot pfr.png
//! RUST_LOG=debug rctr-vol --csv pfr.csv
//! ```

use std::error::Error;
use std::io;

use clap::Parser;

use rctr_vol::kinetics::Pfr;
use rctr_vol::kinetics::IdealReactor;
use rctr_vol::output::export::{export_profile_csv, CsvConfig, CsvMetadata};
use rctr_vol::output::visualization::{plot_conversion_profile, PlotConfig, NO_TITLE};
use rctr_vol::presentation::controls::{CONVERSION, FEED_RATE, RATE_CONSTANT};
use rctr_vol::presentation::{Field, FormState, RenderedView, Shell, APP_TITLE, CHART_HEADER};

#[derive(Parser, Debug)]
#[command(name = "rctr-vol")]
#[command(version)]
#[command(about = "CSTR and PFR volume calculator for a first-order reaction")]
struct Args {
    /// Reaction rate constant k [0.1, 5.0]
    #[arg(short = 'k', long = "rate-constant", default_value_t = RATE_CONSTANT.default)]
    rate_constant: f64,

    /// Feed rate F_A0 [0.0, 5.0]
    #[arg(short = 'f', long = "feed-rate", default_value_t = FEED_RATE.default)]
    feed_rate: f64,

    /// Target conversion X [0.0, 1.0]
    #[arg(short = 'x', long, default_value_t = CONVERSION.default)]
    conversion: f64,

    /// Write the PFR conversion chart here (.png or .svg)
    #[arg(short, long)]
    plot: Option<String>,

    /// Write the PFR conversion profile as CSV here (rewritten on every change in interactive mode)
    #[arg(long)]
    csv: Option<String>,

    /// Chart title
    #[arg(long)]
    title: Option<String>,

    /// Read commands from stdin and re-render on every change
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // Flags go through the same controls as interactive edits
    let mut form = FormState::default();
    form.set(Field::RateConstant, args.rate_constant);
    form.set(Field::FeedRate, args.feed_rate);
    form.set(Field::Conversion, args.conversion);

    let plot_config = match &args.title {
        Some(title) => PlotConfig::conversion_profile(title.as_str()),
        None => PlotConfig::conversion_profile(NO_TITLE),
    };

    if args.interactive {
        let stdin = io::stdin();
        let stdout = io::stdout();

        let mut shell = Shell::new(stdin.lock(), stdout.lock()).with_form(form);
        if let Some(path) = &args.plot {
            shell = shell.with_chart(path.as_str(), plot_config);
        }
        if let Some(path) = &args.csv {
            shell = shell.with_csv(path.as_str(), CsvConfig::default());
        }
        shell.run()?;

        return Ok(());
    }

    let view = RenderedView::new(form.params());
    println!("{}", APP_TITLE);
    println!("{}", view);

    if let Some(path) = &args.plot {
        println!("{}", CHART_HEADER);
        plot_conversion_profile(&view.profile, path, Some(&plot_config))?;
        println!("Chart: {}", path);
    }

    if let Some(path) = &args.csv {
        let metadata = CsvMetadata::from_params(Pfr.name(), &view.params);
        let config = CsvConfig::default().with_metadata(metadata);
        export_profile_csv(&view.profile, path, Some(&config))?;
        println!("Profile: {}", path);
    }

    Ok(())
}
