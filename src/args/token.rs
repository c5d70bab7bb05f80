//! Tokenizing of raw command-line arguments
//!
//! Every raw argument becomes one or more [`Token`]s. Malformed flags are not
//! rejected here: the syntax error travels with the token and is only reported
//! once the command line is finalized.

use crate::error::SyntaxError;
use std::ffi::OsStr;

/// A parsed command-line argument
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argument {
    /// Flag name without leading dashes (empty for positionals)
    pub name: String,

    /// Sub-key attached with a colon, as in `--locale:region`
    pub suffix: String,

    /// Flag value after `=`, or the literal text of a positional
    pub value: String,

    /// Whether the argument was written with leading dashes
    pub is_flag: bool,

    /// Whether the argument may be claimed as a command
    pub may_be_command: bool,

    /// Whether an explicit `=value` was present
    pub has_value: bool,
}

impl Argument {
    fn positional(value: &str, may_be_command: bool) -> Self {
        Argument {
            value: value.to_string(),
            may_be_command,
            ..Default::default()
        }
    }

    fn flag(name: &str) -> Self {
        Argument {
            name: name.to_string(),
            is_flag: true,
            ..Default::default()
        }
    }

    /// Quoted flag as the user would have typed it, `"-n"` or `"--name"`
    pub fn display_flag(&self) -> String {
        if self.name.chars().count() < 2 {
            format!("\"-{}\"", self.name)
        } else {
            format!("\"--{}\"", self.name)
        }
    }
}

/// An argument, possibly carrying a deferred syntax error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Valid(Argument),
    Malformed(Argument, SyntaxError),
}

impl Token {
    fn new(argument: Argument, err: Option<SyntaxError>) -> Self {
        match err {
            Some(err) => Token::Malformed(argument, err),
            None => Token::Valid(argument),
        }
    }

    /// The argument, whether or not it is well-formed
    pub fn argument(&self) -> &Argument {
        match self {
            Token::Valid(arg) | Token::Malformed(arg, _) => arg,
        }
    }

    /// The syntax error attached while tokenizing, if any
    pub fn syntax_error(&self) -> Option<&SyntaxError> {
        match self {
            Token::Valid(_) => None,
            Token::Malformed(_, err) => Some(err),
        }
    }
}

/// Turn raw arguments (without the program name) into tokens
pub fn tokenize<I, S>(raw: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokenizer = Tokenizer::default();
    for arg in raw {
        tokenizer.push(arg.as_ref());
    }
    tokenizer.tokens
}

/// Turn raw OS arguments into tokens
///
/// Arguments that are not valid unicode cannot be flags or commands. They are
/// kept as malformed positionals so that finalization reports them.
pub fn tokenize_os<I, S>(raw: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut tokenizer = Tokenizer::default();
    for arg in raw {
        let arg = arg.as_ref();
        match arg.to_str() {
            Some(arg) => tokenizer.push(arg),
            None => tokenizer.push_not_unicode(arg),
        }
    }
    tokenizer.tokens
}

struct Tokenizer {
    tokens: Vec<Token>,
    accept_flags: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer {
            tokens: Vec::new(),
            accept_flags: true,
        }
    }
}

impl Tokenizer {
    fn push(&mut self, arg: &str) {
        if self.accept_flags && arg.starts_with("--") {
            if arg.len() > 2 {
                parse_long_flag(arg, &mut self.tokens);
            } else {
                // everything after a bare "--" is positional
                self.accept_flags = false;
            }
        } else if self.accept_flags && arg.starts_with('-') {
            if arg.len() > 1 {
                parse_short_flag(arg, &mut self.tokens);
            } else {
                self.tokens.push(Token::Valid(Argument::positional(arg, false)));
            }
        } else {
            let positional = Argument::positional(arg, self.accept_flags);
            self.tokens.push(Token::Valid(positional));
        }
    }

    fn push_not_unicode(&mut self, arg: &OsStr) {
        let lossy = arg.to_string_lossy();
        self.tokens.push(Token::Malformed(
            Argument::positional(&lossy, false),
            SyntaxError::NotUnicode(lossy.into_owned()),
        ));
    }
}

/// Parse a long flag such as `--name:suffix=value`
fn parse_long_flag(arg: &str, into: &mut Vec<Token>) {
    let (name_part, value) = split_once_opt(&arg[2..], '=');
    let (name, suffix) = split_once_opt(name_part, ':');

    let mut flag = Argument::flag(name);
    flag.suffix = suffix.unwrap_or_default().to_string();
    flag.has_value = value.is_some();
    flag.value = value.unwrap_or_default().to_string();

    let mut err = None;
    if name.is_empty() {
        err = Some(SyntaxError::NoName(arg.to_string()));
    }
    if suffix == Some("") {
        err = Some(SyntaxError::MissingSuffix(arg.to_string()));
    }

    into.push(Token::new(flag, err));
}

/// Parse a short flag or a group of short flags
///
/// `-name` is parsed as four boolean flags `-n`, `-a`, `-m` and `-e`. Only the
/// last one receives the suffix and value.
fn parse_short_flag(arg: &str, into: &mut Vec<Token>) {
    let (name_part, value) = split_once_opt(&arg[1..], '=');
    let (prefix, suffix) = split_once_opt(name_part, ':');

    if prefix.is_empty() {
        let flag = Argument {
            is_flag: true,
            suffix: suffix.unwrap_or_default().to_string(),
            has_value: value.is_some(),
            value: value.unwrap_or_default().to_string(),
            ..Default::default()
        };
        into.push(Token::Malformed(flag, SyntaxError::NoName(arg.to_string())));
        return;
    }

    let count = prefix.chars().count();
    for (i, c) in prefix.chars().enumerate() {
        let mut flag = Argument::flag(c.encode_utf8(&mut [0; 4]));
        let mut err = None;

        if i == count - 1 {
            flag.suffix = suffix.unwrap_or_default().to_string();
            flag.has_value = value.is_some();
            flag.value = value.unwrap_or_default().to_string();
            if suffix == Some("") {
                err = Some(SyntaxError::GroupMissingSuffix(arg.to_string()));
            }
        }

        into.push(Token::new(flag, err));
    }
}

/// Split at the first `sep`, keeping track of whether it was present
fn split_once_opt(s: &str, sep: char) -> (&str, Option<&str>) {
    match s.split_once(sep) {
        Some((head, tail)) => (head, Some(tail)),
        None => (s, None),
    }
}
