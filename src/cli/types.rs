use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid arguments were provided to a command.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The configuration could not be loaded.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A service could not be started.
    #[error("Service error: {0}")]
    ServiceError(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for command execution results.
///
/// Successful commands return the text to print on stdout.
pub type CommandResult = Result<String, CliError>;
