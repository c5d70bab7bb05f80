//! Queries over the token list
//!
//! Handlers pull what they expect from [`Args`] in any order. Each query only
//! looks at tokens no previous query has claimed, and [`Args::done`] reports
//! whatever is left.

use crate::args::token::{tokenize, tokenize_os, Argument, Token};
use crate::error::{ArgError, InvalidArgs};
use std::ffi::OsStr;

/// Parsed command-line arguments and which of them have been used
#[derive(Debug, Clone, Default)]
pub struct Args {
    tokens: Vec<Token>,
    claimed: Vec<bool>,
}

impl Args {
    /// Tokenize raw arguments, not including the program name
    pub fn parse<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_tokens(tokenize(raw))
    }

    /// Tokenize raw OS arguments, which may not be valid unicode
    pub fn parse_os<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Self::from_tokens(tokenize_os(raw))
    }

    /// Tokenize the arguments of the current process
    pub fn from_env() -> Self {
        Self::parse_os(std::env::args_os().skip(1))
    }

    fn from_tokens(tokens: Vec<Token>) -> Self {
        let claimed = vec![false; tokens.len()];
        Args { tokens, claimed }
    }

    /// All tokens, in command-line order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whether a query already claimed the token at `index`
    pub fn is_claimed(&self, index: usize) -> bool {
        self.claimed.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Indices and arguments of the tokens nobody claimed yet
    fn unclaimed(&self) -> impl Iterator<Item = (usize, &Argument)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.claimed[*i])
            .map(|(i, token)| (i, token.argument()))
    }

    /// Whether a help flag is present
    ///
    /// `-h`, `--help` and the windows-style `/?` are accepted. All of them are
    /// claimed, even when repeated.
    pub fn help_flag(&mut self) -> bool {
        let found: Vec<usize> = self
            .unclaimed()
            .filter(|(_, arg)| is_help_flag(arg))
            .map(|(i, _)| i)
            .collect();

        for &i in &found {
            self.claimed[i] = true;
        }

        !found.is_empty()
    }

    /// Read a boolean flag
    ///
    /// Returns `value` if the flag is set and `!value` otherwise. A flag given
    /// more than once, or given a suffix or a value, is an error.
    pub fn bool_flag(
        &mut self,
        name: &str,
        shorthand: Option<&str>,
        value: bool,
    ) -> Result<bool, ArgError> {
        let found: Vec<usize> = self
            .unclaimed()
            .filter(|(_, arg)| {
                arg.is_flag && (arg.name == name || Some(arg.name.as_str()) == shorthand)
            })
            .map(|(i, _)| i)
            .collect();

        for &i in &found {
            self.claimed[i] = true;
        }

        let Some(&first) = found.first() else {
            return Ok(!value);
        };

        let flag = self.tokens[first].argument();
        if !flag.suffix.is_empty() {
            Err(ArgError::UnexpectedSuffix(flag_label(name, shorthand)))
        } else if flag.has_value {
            Err(ArgError::UnexpectedValue(flag_label(name, shorthand)))
        } else if found.len() > 1 {
            Err(ArgError::UsedMoreThanOnce(flag_label(name, shorthand)))
        } else {
            Ok(value)
        }
    }

    /// Read the next argument as a command
    pub fn command(&mut self) -> Option<String> {
        let (i, command) = self
            .unclaimed()
            .find(|(_, arg)| arg.may_be_command)
            .map(|(i, arg)| (i, arg.value.clone()))?;

        self.claimed[i] = true;
        Some(command)
    }

    /// Verify that every argument has been used
    ///
    /// Unused arguments and syntax errors of used ones are reported together.
    pub fn done(&self) -> Result<(), InvalidArgs> {
        let errs: Vec<ArgError> = self
            .tokens
            .iter()
            .zip(&self.claimed)
            .filter_map(|(token, &claimed)| {
                let arg = token.argument();
                if !claimed {
                    Some(match token.syntax_error() {
                        _ if arg.is_flag => ArgError::UnexpectedFlag(arg.display_flag()),
                        Some(err) => err.clone().into(),
                        None => ArgError::UnexpectedArgument(arg.value.clone()),
                    })
                } else {
                    token.syntax_error().cloned().map(ArgError::from)
                }
            })
            .collect();

        if errs.is_empty() {
            Ok(())
        } else {
            Err(InvalidArgs(errs))
        }
    }
}

fn is_help_flag(arg: &Argument) -> bool {
    if arg.is_flag {
        arg.name == "h" || arg.name == "help"
    } else {
        arg.may_be_command && arg.value == "/?"
    }
}

/// Quoted flag name with its shorthand, as used in error messages
fn flag_label(name: &str, shorthand: Option<&str>) -> String {
    match shorthand {
        Some(short) => format!("\"-{}\" or \"--{}\"", short, name),
        None => format!("\"--{}\"", name),
    }
}
