//! The aggregate schema a command's input is parsed against.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ArgumentDefinition, DefinitionError, InputValue, OptionDefinition};

/// Ordered set of argument definitions plus a name- and shortcut-indexed
/// set of option definitions.
///
/// A schema is built once per command, before any parsing begins, and is
/// treated as immutable while inputs are bound against it. Construction
/// enforces the structural invariants: argument names and option
/// names/shortcuts are unique, a required argument never follows an
/// optional one, and an array argument is always last.
///
/// # Examples
///
/// ```
/// use command_input_core::*;
///
/// let mut schema = InputSchema::new();
/// schema.add_argument(ArgumentDefinition::required("source"))?;
/// schema.add_argument(ArgumentDefinition::optional("dest"))?;
/// schema.add_option(OptionDefinition::flag("force").with_shortcut('f'))?;
///
/// assert_eq!(schema.argument_required_count(), 1);
/// assert!(schema.has_shortcut('f'));
/// assert_eq!(schema.synopsis(), "<source> [dest] [--force]");
/// # Ok::<(), DefinitionError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSchema {
    arguments: IndexMap<String, ArgumentDefinition>,
    options: IndexMap<String, OptionDefinition>,
    shortcuts: HashMap<char, String>,
    required_count: usize,
}

impl InputSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schema from definition lists, failing on the first invariant
    /// violation.
    pub fn with_definitions(
        arguments: Vec<ArgumentDefinition>,
        options: Vec<OptionDefinition>,
    ) -> Result<Self, DefinitionError> {
        let mut schema = Self::new();
        for argument in arguments {
            schema.add_argument(argument)?;
        }
        for option in options {
            schema.add_option(option)?;
        }
        Ok(schema)
    }

    /// Appends an argument definition.
    ///
    /// Fails when the name is empty or already used, when a required
    /// argument would follow an optional one, when any argument would
    /// follow an array one, or when the default value does not fit the
    /// argument's mode.
    pub fn add_argument(&mut self, argument: ArgumentDefinition) -> Result<(), DefinitionError> {
        if argument.name.trim().is_empty() {
            return Err(DefinitionError::EmptyName);
        }
        if self.arguments.contains_key(&argument.name) {
            return Err(DefinitionError::DuplicateArgument(argument.name));
        }
        if let Some(last) = self.arguments.values().last() {
            if last.is_array() {
                return Err(DefinitionError::ArgumentAfterArray(argument.name));
            }
            if argument.is_required() && !last.is_required() {
                return Err(DefinitionError::RequiredAfterOptional(argument.name));
            }
        }
        if let Some(default) = &argument.default {
            if argument.is_required() {
                return Err(DefinitionError::InvalidDefault {
                    name: argument.name,
                    reason: "a required argument cannot have a default".to_string(),
                });
            }
            if argument.is_array() && !matches!(default, InputValue::Sequence(_)) {
                return Err(DefinitionError::InvalidDefault {
                    name: argument.name,
                    reason: "an array argument default must be a sequence".to_string(),
                });
            }
        }

        if argument.is_required() {
            self.required_count += 1;
        }
        self.arguments.insert(argument.name.clone(), argument);
        Ok(())
    }

    /// Adds an option definition.
    ///
    /// Fails when the long name or shortcut is empty/already used, or when
    /// a flag option carries a default other than absent/false.
    pub fn add_option(&mut self, option: OptionDefinition) -> Result<(), DefinitionError> {
        if option.name.trim().is_empty() {
            return Err(DefinitionError::EmptyName);
        }
        if self.options.contains_key(&option.name) {
            return Err(DefinitionError::DuplicateOption(option.name));
        }
        if let Some(shortcut) = option.shortcut {
            if self.shortcuts.contains_key(&shortcut) {
                return Err(DefinitionError::DuplicateShortcut(shortcut));
            }
        }
        if !option.accepts_value() {
            if let Some(default) = &option.default {
                if default != &InputValue::Flag(false) {
                    return Err(DefinitionError::InvalidDefault {
                        name: option.name,
                        reason: "a flag option cannot have a default value".to_string(),
                    });
                }
            }
        }

        if let Some(shortcut) = option.shortcut {
            self.shortcuts.insert(shortcut, option.name.clone());
        }
        self.options.insert(option.name.clone(), option);
        Ok(())
    }

    /// Looks up an argument definition by name.
    pub fn argument(&self, name: &str) -> Option<&ArgumentDefinition> {
        self.arguments.get(name)
    }

    /// Looks up an argument definition by positional index.
    pub fn argument_at(&self, index: usize) -> Option<&ArgumentDefinition> {
        self.arguments.get_index(index).map(|(_, def)| def)
    }

    /// Whether an argument with this name is declared.
    pub fn has_argument(&self, name: &str) -> bool {
        self.arguments.contains_key(name)
    }

    /// Whether an argument is declared at this positional index.
    pub fn has_argument_at(&self, index: usize) -> bool {
        index < self.arguments.len()
    }

    /// Declared arguments, in positional order.
    pub fn arguments(&self) -> impl Iterator<Item = &ArgumentDefinition> {
        self.arguments.values()
    }

    /// Number of declared arguments.
    pub fn argument_count(&self) -> usize {
        self.arguments.len()
    }

    /// Number of required arguments.
    pub fn argument_required_count(&self) -> usize {
        self.required_count
    }

    /// Map of argument name to default, for arguments that declare one.
    pub fn argument_defaults(&self) -> IndexMap<String, InputValue> {
        self.arguments
            .values()
            .filter_map(|def| def.default.clone().map(|value| (def.name.clone(), value)))
            .collect()
    }

    /// Looks up an option definition by long name (without dashes).
    pub fn option(&self, name: &str) -> Option<&OptionDefinition> {
        self.options.get(name)
    }

    /// Whether an option with this long name is declared.
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Whether any option declares this shortcut.
    pub fn has_shortcut(&self, shortcut: char) -> bool {
        self.shortcuts.contains_key(&shortcut)
    }

    /// Resolves a shortcut to its option definition.
    pub fn option_for_shortcut(&self, shortcut: char) -> Option<&OptionDefinition> {
        self.shortcuts
            .get(&shortcut)
            .and_then(|name| self.options.get(name))
    }

    /// Declared options, in definition order.
    pub fn options(&self) -> impl Iterator<Item = &OptionDefinition> {
        self.options.values()
    }

    /// Map of option name to default, for options that declare one.
    pub fn option_defaults(&self) -> IndexMap<String, InputValue> {
        self.options
            .values()
            .filter_map(|def| def.default.clone().map(|value| (def.name.clone(), value)))
            .collect()
    }

    /// Usage synopsis: arguments in positional order as `<name>`, `[name]`
    /// or `[name1] ... [nameN]`, then options as `[--name]` or
    /// `[--name=NAME]`.
    pub fn synopsis(&self) -> String {
        let mut parts = Vec::with_capacity(self.arguments.len() + self.options.len());
        for argument in self.arguments.values() {
            if argument.is_array() {
                parts.push(format!("[{0}1] ... [{0}N]", argument.name));
            } else if argument.is_required() {
                parts.push(format!("<{}>", argument.name));
            } else {
                parts.push(format!("[{}]", argument.name));
            }
        }
        for option in self.options.values() {
            if option.accepts_value() {
                parts.push(format!(
                    "[--{}={}]",
                    option.name,
                    option.name.to_uppercase()
                ));
            } else {
                parts.push(format!("[--{}]", option.name));
            }
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArgumentMode;

    fn schema_with(arguments: Vec<ArgumentDefinition>) -> InputSchema {
        InputSchema::with_definitions(arguments, Vec::new()).expect("valid schema")
    }

    #[test]
    fn test_add_argument_rejects_required_after_optional() {
        let mut schema = schema_with(vec![ArgumentDefinition::optional("first")]);
        let err = schema
            .add_argument(ArgumentDefinition::required("second"))
            .unwrap_err();
        assert_eq!(
            err,
            DefinitionError::RequiredAfterOptional("second".to_string())
        );
    }

    #[test]
    fn test_add_argument_rejects_anything_after_array() {
        let mut schema = schema_with(vec![ArgumentDefinition::optional("items").array()]);
        let err = schema
            .add_argument(ArgumentDefinition::optional("extra"))
            .unwrap_err();
        assert_eq!(err, DefinitionError::ArgumentAfterArray("extra".to_string()));
    }

    #[test]
    fn test_add_argument_rejects_duplicate_name() {
        let mut schema = schema_with(vec![ArgumentDefinition::required("name")]);
        let err = schema
            .add_argument(ArgumentDefinition::optional("name"))
            .unwrap_err();
        assert_eq!(err, DefinitionError::DuplicateArgument("name".to_string()));
    }

    #[test]
    fn test_add_argument_rejects_default_on_required() {
        let mut schema = InputSchema::new();
        let mut def = ArgumentDefinition::required("name");
        def.default = Some(InputValue::Scalar("x".into()));
        assert!(matches!(
            schema.add_argument(def),
            Err(DefinitionError::InvalidDefault { .. })
        ));
    }

    #[test]
    fn test_add_argument_rejects_scalar_default_on_array() {
        let mut schema = InputSchema::new();
        let def = ArgumentDefinition::optional("items").array().with_default("x");
        assert!(matches!(
            schema.add_argument(def),
            Err(DefinitionError::InvalidDefault { .. })
        ));
    }

    #[test]
    fn test_add_option_rejects_duplicate_shortcut() {
        let mut schema = InputSchema::new();
        schema
            .add_option(OptionDefinition::flag("verbose").with_shortcut('v'))
            .unwrap();
        let err = schema
            .add_option(OptionDefinition::flag("version").with_shortcut('v'))
            .unwrap_err();
        assert_eq!(err, DefinitionError::DuplicateShortcut('v'));
    }

    #[test]
    fn test_add_option_rejects_default_on_flag() {
        let mut schema = InputSchema::new();
        let def = OptionDefinition::flag("force").with_default("yes");
        assert!(matches!(
            schema.add_option(def),
            Err(DefinitionError::InvalidDefault { .. })
        ));
    }

    #[test]
    fn test_shortcut_resolution() {
        let mut schema = InputSchema::new();
        schema
            .add_option(OptionDefinition::value_required("output").with_shortcut('o'))
            .unwrap();

        assert!(schema.has_shortcut('o'));
        assert_eq!(
            schema.option_for_shortcut('o').map(|o| o.name.as_str()),
            Some("output")
        );
        assert!(schema.option_for_shortcut('x').is_none());
    }

    #[test]
    fn test_argument_lookup_by_index_follows_declaration_order() {
        let schema = schema_with(vec![
            ArgumentDefinition::required("source"),
            ArgumentDefinition::optional("dest"),
        ]);

        assert_eq!(schema.argument_at(0).map(|a| a.name.as_str()), Some("source"));
        assert_eq!(schema.argument_at(1).map(|a| a.name.as_str()), Some("dest"));
        assert!(schema.argument_at(2).is_none());
        assert_eq!(schema.argument_required_count(), 1);
    }

    #[test]
    fn test_synopsis_notation() {
        let mut schema = schema_with(vec![
            ArgumentDefinition::required("command"),
            ArgumentDefinition::optional("items").array(),
        ]);
        schema
            .add_option(OptionDefinition::flag("help").with_shortcut('h'))
            .unwrap();
        schema
            .add_option(OptionDefinition::value_required("output"))
            .unwrap();

        assert_eq!(
            schema.synopsis(),
            "<command> [items1] ... [itemsN] [--help] [--output=OUTPUT]"
        );
    }

    #[test]
    fn test_defaults_maps_only_cover_declared_defaults() {
        let mut schema = schema_with(vec![
            ArgumentDefinition::required("command"),
            ArgumentDefinition::optional("format").with_default("plain"),
        ]);
        schema
            .add_option(
                OptionDefinition::value_optional("level").with_default("info"),
            )
            .unwrap();
        schema.add_option(OptionDefinition::flag("quiet")).unwrap();

        let argument_defaults = schema.argument_defaults();
        assert_eq!(argument_defaults.len(), 1);
        assert_eq!(
            argument_defaults.get("format"),
            Some(&InputValue::Scalar("plain".into()))
        );

        let option_defaults = schema.option_defaults();
        assert_eq!(option_defaults.len(), 1);
        assert_eq!(
            option_defaults.get("level"),
            Some(&InputValue::Scalar("info".into()))
        );
    }

    #[test]
    fn test_required_argument_mode_roundtrip() {
        let def = ArgumentDefinition::required("command");
        assert_eq!(def.mode, ArgumentMode::Required);
    }
}
