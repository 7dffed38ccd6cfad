//! The abstract binding surface shared by every input adapter.

use std::borrow::Cow;
use std::sync::LazyLock;

use command_input_core::{InputSchema, InputValue};
use indexmap::IndexMap;
use regex::Regex;

use crate::error::Result;
use crate::state::InputState;

static SAFE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w-]+$").expect("static regex must compile"));

/// One parsed invocation: a schema-bound set of argument and option
/// values with typed accessors.
///
/// Adapters implement [`parse`](Input::parse) to populate the shared
/// [`InputState`] from their raw input, plus the three raw-input queries
/// the dispatcher uses before any schema is known
/// ([`first_argument`](Input::first_argument),
/// [`has_parameter_option`](Input::has_parameter_option),
/// [`parameter_option`](Input::parameter_option)). Everything else is
/// provided by delegation to the state.
pub trait Input {
    /// The bound state backing this input.
    fn state(&self) -> &InputState;

    /// Mutable access to the bound state.
    fn state_mut(&mut self) -> &mut InputState;

    /// Adapter-specific pass populating the bound maps from raw input.
    fn parse(&mut self) -> Result<()>;

    /// First raw token/value that looks like a command name rather than an
    /// option. Used by the dispatcher before full parsing.
    fn first_argument(&self) -> Option<String>;

    /// Whether any raw token matches one of `names` exactly or as a
    /// `name=value` prefix. Works without a schema, so early flags like
    /// `--help` are detectable before dispatch.
    fn has_parameter_option(&self, names: &[&str]) -> bool;

    /// Best-effort value extraction for one of `names` from the raw
    /// input, outside the schema-driven path. Returns the first match or
    /// falls through to `default`.
    fn parameter_option(&self, names: &[&str], default: Option<InputValue>)
    -> Option<InputValue>;

    /// Resets the bound maps, stores `schema` and re-parses the raw input
    /// against it.
    fn bind(&mut self, schema: InputSchema) -> Result<()> {
        self.state_mut().reset(schema);
        self.parse()
    }

    /// Validates argument-count invariants after a successful parse.
    fn validate(&self) -> Result<()> {
        self.state().validate()
    }

    /// Bound or default value for an argument; errors on unknown names.
    fn argument(&self, name: &str) -> Result<Option<InputValue>> {
        self.state().argument(name)
    }

    /// Overwrites a bound argument value; errors on unknown names.
    fn set_argument(&mut self, name: &str, value: InputValue) -> Result<()> {
        self.state_mut().set_argument(name, value)
    }

    /// Whether the bound schema declares this argument.
    fn has_argument(&self, name: &str) -> bool {
        self.state().has_argument(name)
    }

    /// Full resolved argument view: defaults first, explicitly bound
    /// values override them.
    fn all_arguments(&self) -> IndexMap<String, InputValue> {
        self.state().all_arguments()
    }

    /// Bound or default value for an option; errors on unknown names.
    fn option(&self, name: &str) -> Result<Option<InputValue>> {
        self.state().option(name)
    }

    /// Overwrites a bound option value; errors on unknown names.
    fn set_option(&mut self, name: &str, value: InputValue) -> Result<()> {
        self.state_mut().set_option(name, value)
    }

    /// Whether the bound schema declares this option.
    fn has_option(&self, name: &str) -> bool {
        self.state().has_option(name)
    }

    /// Full resolved option view: defaults first, explicitly bound values
    /// override them.
    fn all_options(&self) -> IndexMap<String, InputValue> {
        self.state().all_options()
    }

    /// Whether the invocation may ask interactive questions.
    fn is_interactive(&self) -> bool {
        self.state().is_interactive()
    }

    /// Flips the interactive flag.
    fn set_interactive(&mut self, interactive: bool) {
        self.state_mut().set_interactive(interactive);
    }
}

/// Escapes a token for shell-style rendering of a stored command line.
///
/// Tokens that are plain words (`[\w-]+`) pass through unchanged; anything
/// else is single-quoted with embedded quotes escaped. Presentation
/// support for the adapters' `Display` impls, not part of parsing.
///
/// # Examples
///
/// ```
/// use command_input::escape_token;
///
/// assert_eq!(escape_token("plain-word"), "plain-word");
/// assert_eq!(escape_token("two words"), "'two words'");
/// assert_eq!(escape_token("it's"), r"'it'\''s'");
/// ```
pub fn escape_token(token: &str) -> Cow<'_, str> {
    if SAFE_TOKEN_RE.is_match(token) {
        Cow::Borrowed(token)
    } else {
        Cow::Owned(format!("'{}'", token.replace('\'', r"'\''")))
    }
}
