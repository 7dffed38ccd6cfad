//! Errors surfaced while dispatching and running commands.

use command_input::InputError;
use command_input_core::DefinitionError;
use thiserror::Error;

/// Failures raised by the application loop or by commands themselves.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The requested command name matches no registered command or alias.
    #[error("command \"{0}\" is not defined")]
    UnknownCommand(String),

    /// Input parsing or validation failed for the dispatched command.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A command's schema could not be constructed.
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    /// A command-specific failure, reported with its own message.
    #[error("{0}")]
    Command(String),
}

/// Convenience alias for results with [`ConsoleError`].
pub type Result<T> = std::result::Result<T, ConsoleError>;
