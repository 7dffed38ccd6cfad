//! Error types for input parsing and binding.

use command_input_core::DefinitionError;
use thiserror::Error;

/// Failures raised while parsing raw input against a schema or while
/// reading back bound values.
///
/// Every failure is raised synchronously at the point of detection and is
/// never retried or swallowed; a failed parse leaves the input's maps in
/// their partially-populated state and the caller discards the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A long name or shortcut no option in the schema declares. The
    /// stored token keeps its dashes (`--bogus`, `-x`).
    #[error("the \"{0}\" option does not exist")]
    UnknownOption(String),

    /// A value was supplied to a flag-only option.
    #[error("the \"--{name}\" option does not accept a value (got \"{value}\")")]
    OptionValueNotAccepted {
        /// Long name of the flag option.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// A required-value option received no value.
    #[error("the \"--{name}\" option requires a value")]
    OptionValueRequired {
        /// Long name of the option.
        name: String,
    },

    /// An argument name the schema does not declare (array adapter only).
    #[error("the \"{name}\" argument does not exist")]
    UnknownArgument {
        /// The unknown name.
        name: String,
    },

    /// More positional tokens than schema slots, with no trailing array
    /// argument to absorb them.
    #[error("too many arguments")]
    TooManyArguments,

    /// Fewer bound arguments than the schema requires, detected at
    /// validation time.
    #[error("not enough arguments (expected {expected}, got {actual})")]
    NotEnoughArguments {
        /// The schema's required-argument count.
        expected: usize,
        /// Number of arguments actually bound.
        actual: usize,
    },

    /// Schema construction failure surfaced through binding.
    #[error(transparent)]
    Definition(#[from] DefinitionError),
}

/// Convenience alias for results with [`InputError`].
pub type Result<T> = std::result::Result<T, InputError>;
