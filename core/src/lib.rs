//! Schema model for console command input.
//!
//! This crate defines the types a command declares its expected input
//! with:
//!
//! - [`ArgumentDefinition`] — one positional argument (name, mode,
//!   array flag, default).
//! - [`OptionDefinition`] — one `--long` option with an optional
//!   single-character shortcut and a value mode.
//! - [`InputSchema`] — the ordered aggregate of both, with shortcut
//!   resolution, required-argument counting, and a usage synopsis.
//! - [`InputValue`] — the tagged value type bound parameters resolve to.
//! - [`merge`] — pure combination of a command schema with an
//!   application-wide one.
//!
//! Parsing raw input against a schema lives in the `command-input`
//! crate; this crate is purely the declarative model.
//!
//! # Example
//!
//! ```
//! use command_input_core::*;
//!
//! let mut schema = InputSchema::new();
//! schema.add_argument(ArgumentDefinition::required("source"))?;
//! schema.add_argument(ArgumentDefinition::optional("dest").with_default("."))?;
//! schema.add_option(
//!     OptionDefinition::value_required("format")
//!         .with_shortcut('f')
//!         .with_description("Output format"),
//! )?;
//!
//! assert_eq!(schema.synopsis(), "<source> [dest] [--format=FORMAT]");
//! assert!(schema.option_for_shortcut('f').is_some());
//! # Ok::<(), DefinitionError>(())
//! ```

mod error;
mod merge;
mod schema;
mod types;

pub use error::DefinitionError;
pub use merge::merge;
pub use schema::InputSchema;
pub use types::{
    ArgumentDefinition, ArgumentMode, InputValue, OptionDefinition, OptionValueMode,
};
