//! Errors raised while constructing or merging an input schema.

use thiserror::Error;

/// Violations of schema construction invariants.
///
/// All variants are raised at command-definition time, before any parsing
/// begins. The `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// An argument with the same name was already added.
    #[error("an argument named \"{0}\" already exists")]
    DuplicateArgument(String),

    /// A required argument was added after an optional one.
    #[error("cannot add required argument \"{0}\" after an optional one")]
    RequiredAfterOptional(String),

    /// An argument was added after an array-moded one, which must be last.
    #[error("cannot add argument \"{0}\" after an array argument")]
    ArgumentAfterArray(String),

    /// An option with the same long name was already added.
    #[error("an option named \"--{0}\" already exists")]
    DuplicateOption(String),

    /// An option with the same shortcut was already added.
    #[error("an option with shortcut \"-{0}\" already exists")]
    DuplicateShortcut(char),

    /// Argument or option name is empty or whitespace-only.
    #[error("argument and option names cannot be empty")]
    EmptyName,

    /// The definition carries a default its mode does not allow.
    #[error("invalid default value for \"{name}\": {reason}")]
    InvalidDefault {
        /// Name of the offending definition.
        name: String,
        /// Why the default is rejected.
        reason: String,
    },
}
