//! Subcommands

use crate::args::Args;
use crate::config::{find_config_file, ProjectConfig, NO_PREFIX};
use crate::error::{ConfigError, ElzError, Result};
use crate::ui::Printer;
use tracing::debug;

/// The commands elz knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Init,
    Locale,
    Prefix,
    Message,
    Update,
    Release,
    Format,
}

impl Command {
    /// Look a command up by name or alias
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "init" => Some(Command::Init),
            "locale" | "locales" => Some(Command::Locale),
            "prefix" | "prefixes" => Some(Command::Prefix),
            "message" | "messages" | "msg" => Some(Command::Message),
            "update" | "u" => Some(Command::Update),
            "release" | "r" => Some(Command::Release),
            "format" | "fmt" => Some(Command::Format),
            _ => None,
        }
    }

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            Command::Init => "init",
            Command::Locale => "locale",
            Command::Prefix => "prefix",
            Command::Message => "message",
            Command::Update => "update",
            Command::Release => "release",
            Command::Format => "format",
        }
    }
}

/// Run a command with the arguments left after dispatch
pub fn execute(command: Command, args: &mut Args, printer: &Printer) -> Result<()> {
    match command {
        Command::Init => init(args, printer),
        other => Err(ElzError::Internal(format!(
            "Command \"{}\" not implemented",
            other.name()
        ))),
    }
}

/// Report on the project the current directory belongs to
fn init(args: &mut Args, printer: &Printer) -> Result<()> {
    args.done()?;

    let path = find_config_file().map_err(|err| match err {
        ConfigError::NotFound(_) => ElzError::User(format!("Not inside a project. {}", err)),
        other => other.into(),
    })?;
    debug!("found project configuration at {}", path.display());

    let config = ProjectConfig::load(&path)?;
    let translations = config.translations()?;
    let ignore = config.ignore()?;
    let mut sources: Vec<(String, Vec<String>)> = config.sources()?.into_iter().collect();
    sources.sort();

    printer.show(&format!("Project already initialised in {}", path.display()));
    printer.show("\nSources:");
    for (prefix, files) in &sources {
        let label = if prefix == NO_PREFIX { "(no prefix)" } else { prefix.as_str() };
        printer.describe_option(label, &files.join(", "));
    }
    if !ignore.is_empty() {
        printer.show("\nIgnored:");
        for pattern in &ignore {
            printer.describe_option(pattern, "");
        }
    }
    printer.show(&format!("\nTranslations: {}", translations));

    Ok(())
}
