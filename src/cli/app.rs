//! Main CLI application

use crate::args::Args;
use crate::cli::commands::{self, Command};
use crate::cli::help;
use crate::error::{ElzError, Result};
use crate::ui::Printer;
use crate::VERSION;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// CLI application
pub struct App {
    /// Arguments of this invocation
    args: Args,
    /// Output settings
    printer: Printer,
}

impl App {
    /// Create an app from already tokenized arguments
    pub fn new(args: Args) -> Self {
        App {
            args,
            printer: Printer::default(),
        }
    }

    /// Create an app from the process arguments
    pub fn from_env() -> Self {
        Self::new(Args::from_env())
    }

    /// Output settings, as left by the last run
    pub fn printer(&self) -> &Printer {
        &self.printer
    }

    /// Run the application
    pub fn run(&mut self) -> Result<()> {
        if self.args.help_flag() {
            return self.dispatch(true);
        }

        if self.args.bool_flag("version", Some("v"), true)? {
            self.printer.show(VERSION);
            return Ok(());
        }

        let debugging = self.args.bool_flag("debug", None, true)?;
        let color = self.args.bool_flag("no-color", None, false)?;

        init_logging(debugging);
        if !color {
            colored::control::set_override(false);
        }
        self.printer.color = color;

        debug!("running tool elz version {}", VERSION);
        debug!(tokens = ?self.args.tokens(), "parsed command line");

        self.dispatch(false)
    }

    /// Find the command and run it, or show its help
    fn dispatch(&mut self, just_show_help: bool) -> Result<()> {
        let name = match self.args.command() {
            Some(name) if !name.is_empty() => name,
            _ => {
                // leftovers are still errors when there is nothing to run
                if !just_show_help {
                    self.args.done()?;
                }
                help::show_help(&self.printer);
                return Ok(());
            }
        };

        let command = Command::from_name(&name)
            .ok_or_else(|| ElzError::usage(format!("unknown command \"{}\"", name)))?;
        debug!(command = command.name(), "dispatching");

        if just_show_help {
            help::show_command_help(command, &self.printer);
            return Ok(());
        }

        self.printer.program = format!("elz {}", command.name());
        commands::execute(command, &mut self.args, &self.printer)
    }
}

/// Send tracing events to the standard error
///
/// `--debug` shows everything down to debug events; otherwise `RUST_LOG` is
/// honored, defaulting to warnings only.
fn init_logging(debugging: bool) {
    let filter = if debugging {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // a subscriber may already be installed when running inside tests
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_file(debugging)
        .with_line_number(debugging)
        .with_target(false)
        .try_init();
}

/// Run the CLI application with the process arguments
///
/// Returns the process exit code.
pub fn run() -> i32 {
    let mut app = App::from_env();

    match app.run() {
        Ok(()) => 0,
        Err(e) => {
            app.printer().report(&e);
            e.exit_reason().code()
        }
    }
}
