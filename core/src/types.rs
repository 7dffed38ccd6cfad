//! Definition types for command input schemas.
//!
//! An [`ArgumentDefinition`] describes one positional argument and an
//! [`OptionDefinition`] describes one `--long`/`-s` option. Both are built
//! once at command-definition time through the constructor/builder methods
//! and are immutable afterwards; an
//! [`InputSchema`](crate::InputSchema) aggregates them.
//!
//! Bound values are modeled by [`InputValue`], a tagged variant over the
//! three shapes a resolved parameter can take (flag presence, scalar,
//! accumulated sequence).

use serde::{Deserialize, Serialize};

/// A resolved argument or option value.
///
/// The bound maps of an input hold exactly one of these shapes per entry,
/// rather than a dynamically-typed "string or list or boolean" value.
///
/// # Examples
///
/// ```
/// use command_input_core::InputValue;
///
/// let value = InputValue::Scalar("out.txt".into());
/// assert_eq!(value.as_str(), Some("out.txt"));
/// assert!(value.is_set());
///
/// assert!(!InputValue::Flag(false).is_set());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputValue {
    /// Boolean presence of a flag option.
    Flag(bool),
    /// A single string value.
    Scalar(String),
    /// Accumulated values of an array-mode argument or option.
    Sequence(Vec<String>),
}

impl InputValue {
    /// Returns the scalar string value, if this is a [`InputValue::Scalar`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            InputValue::Scalar(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the accumulated values, if this is a [`InputValue::Sequence`].
    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            InputValue::Sequence(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    /// Boolean view: `Flag(b)` reads as `b`, any supplied value reads as true.
    pub fn as_bool(&self) -> bool {
        match self {
            InputValue::Flag(value) => *value,
            _ => true,
        }
    }

    /// Whether the value counts as set. Only `Flag(false)` does not.
    pub fn is_set(&self) -> bool {
        !matches!(self, InputValue::Flag(false))
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::Scalar(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        InputValue::Scalar(value)
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        InputValue::Flag(value)
    }
}

impl From<Vec<String>> for InputValue {
    fn from(values: Vec<String>) -> Self {
        InputValue::Sequence(values)
    }
}

impl From<Vec<&str>> for InputValue {
    fn from(values: Vec<&str>) -> Self {
        InputValue::Sequence(values.into_iter().map(String::from).collect())
    }
}

/// Whether a positional argument must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ArgumentMode {
    /// The argument must be present after parsing.
    Required,
    /// The argument may be omitted; reads fall back to its default.
    #[default]
    Optional,
}

/// Definition of one positional argument.
///
/// Use the constructors [`required`](ArgumentDefinition::required) and
/// [`optional`](ArgumentDefinition::optional), then chain builder methods.
///
/// # Examples
///
/// ```
/// use command_input_core::ArgumentDefinition;
///
/// let items = ArgumentDefinition::optional("items")
///     .array()
///     .with_description("Files to process");
/// assert!(items.is_array());
/// assert!(!items.is_required());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentDefinition {
    /// Argument name, unique within a schema.
    pub name: String,
    /// Required or optional.
    pub mode: ArgumentMode,
    /// Whether the argument accumulates all remaining positional tokens.
    pub array: bool,
    /// Description shown in help output.
    pub description: Option<String>,
    /// Default value returned when the argument was not supplied.
    pub default: Option<InputValue>,
}

impl ArgumentDefinition {
    /// Creates a required argument.
    pub fn required(name: &str) -> Self {
        Self {
            name: name.to_string(),
            mode: ArgumentMode::Required,
            array: false,
            description: None,
            default: None,
        }
    }

    /// Creates an optional argument.
    pub fn optional(name: &str) -> Self {
        Self {
            name: name.to_string(),
            mode: ArgumentMode::Optional,
            array: false,
            description: None,
            default: None,
        }
    }

    /// Marks the argument as array-moded. It must be the last positional
    /// argument in its schema and absorbs all remaining tokens.
    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Sets the default value. Only meaningful on an optional argument;
    /// enforced when the definition is added to a schema.
    pub fn with_default(mut self, default: impl Into<InputValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Whether the argument must be supplied.
    pub fn is_required(&self) -> bool {
        self.mode == ArgumentMode::Required
    }

    /// Whether the argument accumulates remaining positional tokens.
    pub fn is_array(&self) -> bool {
        self.array
    }
}

/// Whether and how an option takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OptionValueMode {
    /// A plain flag; presence resolves to boolean true.
    #[default]
    None,
    /// The option must be given a value.
    Required,
    /// The option may be given a value; absent values fall back to the
    /// definition default.
    Optional,
}

/// Definition of one `--long` option with an optional single-character
/// shortcut.
///
/// Constructors strip leading dashes, so `OptionDefinition::flag("--help")`
/// and `OptionDefinition::flag("help")` are equivalent.
///
/// # Examples
///
/// ```
/// use command_input_core::OptionDefinition;
///
/// let output = OptionDefinition::value_required("output")
///     .with_shortcut('o')
///     .with_description("Output file");
/// assert!(output.accepts_value());
/// assert_eq!(output.shortcut, Some('o'));
///
/// let verbose = OptionDefinition::flag("--verbose").with_shortcut('v');
/// assert_eq!(verbose.name, "verbose");
/// assert!(!verbose.accepts_value());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDefinition {
    /// Long name without leading dashes, unique within a schema.
    pub name: String,
    /// Single-character short form, unique within a schema.
    pub shortcut: Option<char>,
    /// Whether and how the option takes a value.
    pub value_mode: OptionValueMode,
    /// Whether repeated occurrences accumulate into a sequence.
    pub array: bool,
    /// Description shown in help output.
    pub description: Option<String>,
    /// Default value returned when the option was not supplied.
    pub default: Option<InputValue>,
}

impl OptionDefinition {
    fn new(name: &str, value_mode: OptionValueMode) -> Self {
        Self {
            name: name.trim_start_matches('-').to_string(),
            shortcut: None,
            value_mode,
            array: false,
            description: None,
            default: None,
        }
    }

    /// Creates a flag option (no value; presence resolves to true).
    pub fn flag(name: &str) -> Self {
        Self::new(name, OptionValueMode::None)
    }

    /// Creates an option that requires a value.
    pub fn value_required(name: &str) -> Self {
        Self::new(name, OptionValueMode::Required)
    }

    /// Creates an option that accepts an optional value.
    pub fn value_optional(name: &str) -> Self {
        Self::new(name, OptionValueMode::Optional)
    }

    /// Sets the single-character shortcut.
    pub fn with_shortcut(mut self, shortcut: char) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    /// Sets the shortcut from a string form such as `"-v"` or `"v"`.
    /// Anything longer than one character after dash-stripping is ignored.
    pub fn with_shortcut_str(mut self, shortcut: &str) -> Self {
        let stripped = shortcut.trim_start_matches('-');
        let mut chars = stripped.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            self.shortcut = Some(ch);
        }
        self
    }

    /// Marks the option as array-moded; repeated occurrences accumulate.
    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Sets the default value. Invalid on a flag option; enforced when the
    /// definition is added to a schema.
    pub fn with_default(mut self, default: impl Into<InputValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Whether the option takes a value at all.
    pub fn accepts_value(&self) -> bool {
        self.value_mode != OptionValueMode::None
    }

    /// Whether the option must be given a value when present.
    pub fn is_value_required(&self) -> bool {
        self.value_mode == OptionValueMode::Required
    }

    /// Whether the option may be given a value when present.
    pub fn is_value_optional(&self) -> bool {
        self.value_mode == OptionValueMode::Optional
    }

    /// Whether repeated occurrences accumulate into a sequence.
    pub fn is_array(&self) -> bool {
        self.array
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_value_accessors() {
        assert_eq!(InputValue::Scalar("x".into()).as_str(), Some("x"));
        assert_eq!(InputValue::Flag(true).as_str(), None);
        assert!(InputValue::Flag(true).as_bool());
        assert!(!InputValue::Flag(false).as_bool());
        assert_eq!(
            InputValue::from(vec!["a", "b"]).as_sequence(),
            Some(&["a".to_string(), "b".to_string()][..])
        );
    }

    #[test]
    fn test_argument_builder() {
        let arg = ArgumentDefinition::optional("pattern")
            .with_description("Search pattern")
            .with_default("*");

        assert!(!arg.is_required());
        assert_eq!(arg.default, Some(InputValue::Scalar("*".into())));
        assert_eq!(arg.description.as_deref(), Some("Search pattern"));
    }

    #[test]
    fn test_option_constructor_strips_dashes() {
        let opt = OptionDefinition::flag("--no-interaction").with_shortcut_str("-n");
        assert_eq!(opt.name, "no-interaction");
        assert_eq!(opt.shortcut, Some('n'));
    }

    #[test]
    fn test_option_value_modes() {
        assert!(!OptionDefinition::flag("help").accepts_value());
        assert!(OptionDefinition::value_required("output").is_value_required());
        assert!(OptionDefinition::value_optional("format").is_value_optional());
    }
}
