//! Help text

use crate::cli::commands::Command;
use crate::ui::Printer;

/// Main help, listing the commands
pub fn show_help(printer: &Printer) {
    printer.show_usage(
        "Elz is a tool for managing Elizalina translations.",
        &["elz <command> [arguments]"],
    );
    printer.show("\nAvailable commands:");
    printer.describe_option("init   ", "Initialise a new project");
    printer.describe_option("locale ", "List or update target languages");
    printer.describe_option("prefix ", "Place translated messages into separate files");
    printer.describe_option("message", "Update translated messages manually");
    printer.describe_option("update ", "Update translated messages automatically");
    printer.describe_option("release", "Transform translations into source code");
    printer.describe_option("format ", "Format translation files");
    show_global_options(printer);
}

/// Help of a single command
pub fn show_command_help(command: Command, printer: &Printer) {
    match command {
        Command::Init => {
            printer.show_usage(
                "Elz init is an interactive tool that helps you set up Elizalina inside a project.",
                &["elz init"],
            );
        }
        Command::Locale => {
            printer.show_usage(
                "Elz locale lists the languages targeted by the project, or adds and removes them.",
                &["elz locale", "elz locale add <loc> ...", "elz locale remove <loc> ..."],
            );
            printer.show("\nAlias: locale, locales");
        }
        Command::Prefix => {
            printer.show_usage(
                "Elz prefix places the translated messages of some source files into separate \
                 translation files.",
                &["elz prefix", "elz prefix add <pre> <source> ...", "elz prefix remove <pre>"],
            );
            printer.show("\nAlias: prefix, prefixes");
        }
        Command::Message => {
            printer.show_usage(
                "Elz message updates translated messages manually.",
                &["elz message <key> [--locale:<loc>=<text> ...]"],
            );
            printer.show("\nAlias: message, messages, msg");
            printer.show("\nOptions:");
            printer.describe_option(
                "-L, --locale <loc>",
                "Target only this locale (can be specified multiple times).",
            );
            printer.describe_option("-P, --prefix <pre>", "Target only files with this prefix.");
        }
        Command::Update => {
            printer.show_usage(
                "Elz update extracts messages from the source files and updates the \
                 translation files.",
                &["elz update [--check]"],
            );
            printer.show("\nAlias: update, u");
            printer.show("\nOptions:");
            printer.describe_option("--check", "Assert that all translation files are up to date.");
        }
        Command::Release => {
            printer.show_usage(
                "Elz release transforms the translation files into source code.",
                &["elz release"],
            );
            printer.show("\nAlias: release, r");
        }
        Command::Format => {
            printer.show_usage(
                "Elz format enforces the project's format rules in translation files.",
                &["elz format --check [<file> ...]", "elz format [--write] [<file> ...]"],
            );
            printer.show("\nAlias: format, fmt");
            printer.show(
                "\nIf no files are specified, all translations files in the project will be \
                 formatted. A single dash \"-\" can be used to read from the standard input \
                 instead.",
            );
            printer.show("\nOptions:");
            printer.describe_option(
                "-L, --locale <loc>",
                "Target only files with this locale (can be specified multiple times).",
            );
            printer.describe_option(
                "-P, --prefix <pre>",
                "Target only files with this prefix (can be specified multiple times).",
            );
            printer.describe_option(
                "--check           ",
                "Assert that all files are properly formatted, or fails with a summary of the \
                 files to reformat.",
            );
            printer.describe_option(
                "--write           ",
                "Rewrite the files in place instead of printing to the standard output.",
            );
        }
    }
    show_global_options(printer);
}

fn show_global_options(printer: &Printer) {
    printer.show("\nGlobal options:");
    printer.describe_option(
        "-h, --help   ",
        "Show command usage and exit. Run 'elz --help <command>' to get help for a specific \
         command.",
    );
    printer.describe_option(
        "--no-color   ",
        "Disable colored output. This option can also be set via the NO_COLOR environment \
         variable.",
    );
    printer.describe_option("--debug      ", "Print debugging information on the standard error.");
    printer.describe_option("-v, --version", "Print the tool version and exit.");
}
