use crate::schema::OptionType;

/// Errors raised while resolving a declared option against a bound invocation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    /// A required option was not supplied by the invocation
    #[error("Missing required option '{option}'")]
    MissingRequired { option: String },
    /// The invocation supplied the option with a different wire type
    #[error("Option '{option}' expected type {expected:?}, got {actual:?}")]
    KindMismatch {
        option: String,
        expected: OptionType,
        actual: OptionType,
    },
    /// The raw wire value does not have the shape its type promises
    #[error("Option '{option}' has an invalid {kind:?} value: {value}")]
    InvalidValue {
        option: String,
        kind: OptionType,
        value: String,
    },
    /// The resolved value cannot be read as the declared Rust type
    #[error("Option '{option}' resolved to {value}, which is not a {expected}")]
    UnexpectedValue {
        option: String,
        expected: &'static str,
        value: String,
    },
}

/// Errors raised while dispatching an invocation to a command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// No command is registered under the invoked name
    #[error("Command not found: {0}")]
    NotFound(String),
    /// An option read failed during execution
    #[error("Option resolution failed: {0}")]
    Resolve(#[from] ResolveError),
    /// The command handler itself failed
    #[error("Command execution failed: {0}")]
    Execution(String),
}

/// Top-level errors surfaced by the command-line front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
    /// JSON parsing or rendering errors
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Command dispatch errors
    #[error("Command error: {0}")]
    Command(#[from] CommandError),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> Self {
        Self::Command(CommandError::Resolve(err))
    }
}
