//! Input binding engine: parses raw command-line tokens or pre-split
//! parameter maps against an [`InputSchema`](command_input_core::InputSchema)
//! and exposes the bound values through the [`Input`] trait.
//!
//! Two adapters are provided. [`ArgvInput`] performs a single
//! left-to-right pass over raw tokens, resolving long options, shortcut
//! clusters, the `--` end-of-options marker and positional slots.
//! [`ArrayInput`] binds an explicit parameter map and is used for
//! synthetic dispatch where no raw command line exists.
//!
//! # Examples
//!
//! ```
//! use command_input::{ArgvInput, Input};
//! use command_input_core::*;
//!
//! let schema = InputSchema::with_definitions(
//!     vec![
//!         ArgumentDefinition::required("command"),
//!         ArgumentDefinition::optional("paths").array(),
//!     ],
//!     vec![OptionDefinition::flag("verbose").with_shortcut('v')],
//! )?;
//!
//! let mut input = ArgvInput::new(["sync", "-v", "a.txt", "b.txt"]);
//! input.bind(schema)?;
//! input.validate()?;
//!
//! assert_eq!(input.first_argument(), Some("sync".to_string()));
//! assert_eq!(input.option("verbose")?, Some(InputValue::Flag(true)));
//! assert_eq!(
//!     input.argument("paths")?,
//!     Some(InputValue::Sequence(vec!["a.txt".into(), "b.txt".into()]))
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod array;
mod argv;
mod error;
mod input;
mod state;

pub use array::ArrayInput;
pub use argv::ArgvInput;
pub use error::{InputError, Result};
pub use input::{Input, escape_token};
pub use state::InputState;
