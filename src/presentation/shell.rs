//! Line-oriented interactive shell
//!
//! A thin event loop over [`FormState`]: each input line is one event. Every
//! event that changes a control runs one full render cycle and presents the
//! result: text outputs, then the chart and the CSV profile when their paths
//! are configured.
//!
//! # Commands
//!
//! | Command | Effect |
//! |---------|--------|
//! | `k <value>` / `fa0 <value>` / `x <value>` | Set a control (clamped to its range) |
//! | `up <field>` / `down <field>` | Move a control by one step |
//! | `show` | Render again without changing anything |
//! | `reset` | Restore control defaults |
//! | `help` | List commands |
//! | `quit` / `exit` | Leave the shell |
//!
//! A bad command prints an error and the loop keeps going.

use std::io::{BufRead, Write};
use std::num::ParseFloatError;

use thiserror::Error;

use crate::kinetics::{IdealReactor, Pfr};
use crate::output::export::{export_profile_csv, CsvConfig, CsvMetadata};
use crate::output::visualization::{plot_conversion_profile, PlotConfig};
use crate::presentation::controls::{Field, FormState, UnknownField};
use crate::presentation::render::{RenderedView, APP_TITLE, CHART_HEADER};

const HELP: &str = "\
commands:
  k <value>       set rate constant k      [0.1, 5.0]
  fa0 <value>     set feed rate F_A0       [0.0, 5.0]
  x <value>       set target conversion X  [0.0, 1.0]
  up <field>      step a field up
  down <field>    step a field down
  show            render again
  reset           restore defaults
  help            this list
  quit            leave";

// =================================================================================================
// Errors
// =================================================================================================

/// Errors raised by the shell
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("unknown command '{0}' (type 'help')")]
    UnknownCommand(String),

    #[error("missing value for '{0}'")]
    MissingValue(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("'{input}' is not a number: {source}")]
    InvalidNumber {
        input: String,
        source: ParseFloatError,
    },

    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =================================================================================================
// Commands
// =================================================================================================

/// One parsed input line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Set(Field, f64),
    Step(Field, i32),
    Show,
    Reset,
    Help,
    Quit,
    Empty,
}

impl Command {
    /// Parse one input line
    ///
    /// # Example
    ///
    /// ```rust
    /// use rctr_vol::presentation::shell::Command;
    /// use rctr_vol::presentation::controls::Field;
    ///
    /// assert_eq!(Command::parse("x 0.95").unwrap(), Command::Set(Field::Conversion, 0.95));
    /// assert_eq!(Command::parse("up k").unwrap(), Command::Step(Field::RateConstant, 1));
    /// ```
    pub fn parse(line: &str) -> Result<Self, ShellError> {
        let mut words = line.split_whitespace();

        let Some(head) = words.next() else {
            return Ok(Command::Empty);
        };
        let arg = words.next();

        if let Some(extra) = words.next() {
            return Err(ShellError::UnexpectedArgument(extra.to_string()));
        }

        let command = match (head.to_ascii_lowercase().as_str(), arg) {
            ("show", None) => Command::Show,
            ("reset", None) => Command::Reset,
            ("help" | "?", None) => Command::Help,
            ("quit" | "exit" | "q", None) => Command::Quit,
            ("show" | "reset" | "help" | "?" | "quit" | "exit" | "q", Some(extra)) => {
                return Err(ShellError::UnexpectedArgument(extra.to_string()));
            }
            ("up" | "down", None) => return Err(ShellError::MissingValue(head.to_string())),
            ("up", Some(field)) => Command::Step(field.parse()?, 1),
            ("down", Some(field)) => Command::Step(field.parse()?, -1),
            (_, arg) => {
                let field: Field = head
                    .parse()
                    .map_err(|_| ShellError::UnknownCommand(head.to_string()))?;
                let input = arg.ok_or_else(|| ShellError::MissingValue(head.to_string()))?;
                let value = input.parse::<f64>().map_err(|source| ShellError::InvalidNumber {
                    input: input.to_string(),
                    source,
                })?;
                Command::Set(field, value)
            }
        };

        Ok(command)
    }
}

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Render,
    Idle,
    Help,
    Quit,
}

// =================================================================================================
// Shell
// =================================================================================================

/// Interactive form bound to a reader and a writer
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// use rctr_vol::presentation::shell::Shell;
///
/// let input = Cursor::new("x 0.5\nquit\n");
/// let mut shell = Shell::new(input, Vec::new());
/// shell.run().unwrap();
///
/// assert_eq!(shell.form().conversion, 0.5);
/// ```
pub struct Shell<R, W> {
    input: R,
    output: W,
    form: FormState,
    chart_path: Option<String>,
    plot_config: PlotConfig,
    csv_path: Option<String>,
    csv_config: CsvConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Shell with default control values and no chart output
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            form: FormState::default(),
            chart_path: None,
            plot_config: PlotConfig::default(),
            csv_path: None,
            csv_config: CsvConfig::default(),
        }
    }

    /// Start from `form` instead of the control defaults
    pub fn with_form(mut self, form: FormState) -> Self {
        self.form = form;
        self
    }

    /// Redraw the chart to `path` on every render cycle
    pub fn with_chart(mut self, path: impl Into<String>, config: PlotConfig) -> Self {
        self.chart_path = Some(path.into());
        self.plot_config = config;
        self
    }

    /// Rewrite the PFR profile as CSV to `path` on every render cycle
    ///
    /// The metadata header is refreshed with the operating point each time.
    pub fn with_csv(mut self, path: impl Into<String>, config: CsvConfig) -> Self {
        self.csv_path = Some(path.into());
        self.csv_config = config;
        self
    }

    /// Current control values
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Give back the writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Set(field, value) => {
                if self.form.set(field, value) { Outcome::Render } else { Outcome::Idle }
            }
            Command::Step(field, steps) => {
                if self.form.step(field, steps) { Outcome::Render } else { Outcome::Idle }
            }
            Command::Show => Outcome::Render,
            Command::Reset => {
                self.form.reset();
                Outcome::Render
            }
            Command::Help => Outcome::Help,
            Command::Quit => Outcome::Quit,
            Command::Empty => Outcome::Idle,
        }
    }

    /// Run one render cycle and present it
    ///
    /// Chart and CSV failures are reported on the output and do not stop
    /// the shell.
    pub fn present(&mut self) -> Result<(), ShellError> {
        let view = RenderedView::new(self.form.params());

        for field in Field::ALL {
            writeln!(self.output, "{}: {}", field.control().label, self.form.get(field))?;
        }
        writeln!(self.output, "{}", view)?;

        if let Some(path) = &self.chart_path {
            writeln!(self.output, "{}", CHART_HEADER)?;
            match plot_conversion_profile(&view.profile, path, Some(&self.plot_config)) {
                Ok(()) => writeln!(self.output, "Chart: {}", path)?,
                Err(e) => {
                    log::error!("chart {} failed: {}", path, e);
                    writeln!(self.output, "chart error: {}", e)?;
                }
            }
        }

        if let Some(path) = &self.csv_path {
            let config = self
                .csv_config
                .clone()
                .with_metadata(CsvMetadata::from_params(Pfr.name(), &view.params));

            match export_profile_csv(&view.profile, path, Some(&config)) {
                Ok(()) => writeln!(self.output, "Profile: {}", path)?,
                Err(e) => {
                    log::error!("profile {} failed: {}", path, e);
                    writeln!(self.output, "csv error: {}", e)?;
                }
            }
        }

        Ok(())
    }

    /// Read commands until `quit` or end of input
    ///
    /// Shows the title and the initial state first. Only I/O errors end the
    /// loop early.
    pub fn run(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "{}", APP_TITLE)?;
        self.present()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            let outcome = match Command::parse(&line) {
                Ok(command) => self.apply(command),
                Err(e) => {
                    writeln!(self.output, "error: {}", e)?;
                    continue;
                }
            };

            match outcome {
                Outcome::Render => self.present()?,
                Outcome::Idle => {}
                Outcome::Help => writeln!(self.output, "{}", HELP)?,
                Outcome::Quit => break,
            }
        }

        log::debug!("shell closed with {:?}", self.form);
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
