//! Error types for Elz

use std::fmt;
use thiserror::Error;

/// Result type alias for Elz operations
pub type Result<T> = std::result::Result<T, ElzError>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    UserError = 1,
    BadUsage = 2,
    InternalError = 3,
}

impl ExitReason {
    /// Numeric process exit code
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Main error type for Elz
#[derive(Error, Debug)]
pub enum ElzError {
    /// The command line could not be interpreted
    #[error("{message}")]
    Usage {
        message: String,
        details: Vec<ArgError>,
    },

    /// The user asked for something that cannot be done
    #[error("{0}")]
    User(String),

    /// Project configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Bugs and missing features
    #[error("{0}")]
    Internal(String),
}

impl ElzError {
    /// Create a usage error without details
    pub fn usage(message: impl Into<String>) -> Self {
        ElzError::Usage {
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Exit code the process should end with
    pub fn exit_reason(&self) -> ExitReason {
        match self {
            ElzError::Usage { .. } => ExitReason::BadUsage,
            ElzError::Internal(_) => ExitReason::InternalError,
            ElzError::User(_) | ElzError::Config(_) => ExitReason::UserError,
        }
    }

    /// Individual problems listed under the main message
    pub fn details(&self) -> &[ArgError] {
        match self {
            ElzError::Usage { details, .. } => details,
            _ => &[],
        }
    }
}

impl From<InvalidArgs> for ElzError {
    fn from(err: InvalidArgs) -> Self {
        ElzError::Usage {
            message: "invalid command-line arguments".to_string(),
            details: err.0,
        }
    }
}

impl From<ArgError> for ElzError {
    fn from(err: ArgError) -> Self {
        InvalidArgs(vec![err]).into()
    }
}

/// Malformed flag syntax, detected while tokenizing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Flag \"{0}\" has no name")]
    NoName(String),

    #[error("Flag \"{0}\" has a colon in its name but no suffix")]
    MissingSuffix(String),

    #[error("Flag group \"{0}\" contains a colon but no suffix")]
    GroupMissingSuffix(String),

    #[error("Argument \"{0}\" is not valid unicode")]
    NotUnicode(String),
}

/// A single problem with the command-line arguments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("Flag {0} can only be used once")]
    UsedMoreThanOnce(String),

    #[error("Flag {0} cannot have a suffix")]
    UnexpectedSuffix(String),

    #[error("Flag {0} cannot have a value")]
    UnexpectedValue(String),

    #[error("Unexpected flag {0}")]
    UnexpectedFlag(String),

    #[error("Unexpected argument \"{0}\"")]
    UnexpectedArgument(String),
}

/// Every problem found when finalizing the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgs(pub Vec<ArgError>);

impl fmt::Display for InvalidArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid command-line arguments")?;
        for err in &self.0 {
            write!(f, "\n   {}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidArgs {}

/// Configuration loading and binding errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find {0} in this directory or any of its parents")]
    NotFound(String),

    #[error("Failed to read {path}: {error}")]
    Read { path: String, error: String },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unable to map {0} into a config value")]
    Shape(String),

    #[error("unable to map {0} into a config key")]
    Key(String),

    #[error("{0}")]
    Invalid(String),
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_reasons() {
        assert_eq!(ElzError::usage("bad").exit_reason(), ExitReason::BadUsage);
        assert_eq!(
            ElzError::Internal("oops".to_string()).exit_reason(),
            ExitReason::InternalError
        );
        assert_eq!(
            ElzError::User("no project".to_string()).exit_reason(),
            ExitReason::UserError
        );
        assert_eq!(ExitReason::BadUsage.code(), 2);
    }

    #[test]
    fn test_invalid_args_become_usage_details() {
        let err: ElzError = InvalidArgs(vec![
            ArgError::UnexpectedArgument("foo".to_string()),
            ArgError::UnexpectedFlag("\"-x\"".to_string()),
        ])
        .into();

        assert_eq!(err.to_string(), "invalid command-line arguments");
        assert_eq!(err.details().len(), 2);
        assert_eq!(err.details()[0].to_string(), "Unexpected argument \"foo\"");
        assert_eq!(err.details()[1].to_string(), "Unexpected flag \"-x\"");
    }

    #[test]
    fn test_syntax_error_is_transparent() {
        let err: ArgError = SyntaxError::NoName("--=x".to_string()).into();
        assert_eq!(err.to_string(), "Flag \"--=x\" has no name");
    }
}
