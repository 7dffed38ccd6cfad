//! Bound values for one parsed invocation.

use command_input_core::{InputSchema, InputValue};
use indexmap::IndexMap;

use crate::error::{InputError, Result};

/// The resolved arguments/options of one invocation, bound against a
/// schema.
///
/// The maps only ever hold explicitly supplied values; unset optional
/// parameters resolve to their definition default at read time, not at
/// store time. One state exists per invocation attempt and is discarded
/// after the command returns.
#[derive(Debug, Clone)]
pub struct InputState {
    schema: InputSchema,
    arguments: IndexMap<String, InputValue>,
    options: IndexMap<String, InputValue>,
    interactive: bool,
}

impl InputState {
    /// Creates an empty state bound to an empty schema.
    pub fn new() -> Self {
        Self {
            schema: InputSchema::new(),
            arguments: IndexMap::new(),
            options: IndexMap::new(),
            interactive: true,
        }
    }

    /// The schema this state is bound against.
    pub fn schema(&self) -> &InputSchema {
        &self.schema
    }

    /// Clears the bound maps and stores a new schema, ahead of a re-parse.
    pub fn reset(&mut self, schema: InputSchema) {
        self.arguments.clear();
        self.options.clear();
        self.schema = schema;
    }

    /// Coarse positional-count check: fails when fewer arguments are bound
    /// than the schema requires. Any combination of filled slots passes as
    /// long as the count threshold is met.
    pub fn validate(&self) -> Result<()> {
        let expected = self.schema.argument_required_count();
        let actual = self.arguments.len();
        if actual < expected {
            return Err(InputError::NotEnoughArguments { expected, actual });
        }
        Ok(())
    }

    /// Returns the bound value for `name`, falling back to the definition
    /// default. Fails when the schema does not declare the argument.
    pub fn argument(&self, name: &str) -> Result<Option<InputValue>> {
        let def = self
            .schema
            .argument(name)
            .ok_or_else(|| InputError::UnknownArgument {
                name: name.to_string(),
            })?;
        Ok(self
            .arguments
            .get(name)
            .cloned()
            .or_else(|| def.default.clone()))
    }

    /// Overwrites the bound value for `name`. Fails when the schema does
    /// not declare the argument.
    pub fn set_argument(&mut self, name: &str, value: InputValue) -> Result<()> {
        if !self.schema.has_argument(name) {
            return Err(InputError::UnknownArgument {
                name: name.to_string(),
            });
        }
        self.arguments.insert(name.to_string(), value);
        Ok(())
    }

    /// Full resolved argument view: defaults first, explicitly bound
    /// values override them.
    pub fn all_arguments(&self) -> IndexMap<String, InputValue> {
        let mut all = self.schema.argument_defaults();
        for (name, value) in &self.arguments {
            all.insert(name.clone(), value.clone());
        }
        all
    }

    /// Whether the schema declares an argument with this name.
    pub fn has_argument(&self, name: &str) -> bool {
        self.schema.has_argument(name)
    }

    /// Returns the bound value for option `name`, falling back to the
    /// definition default. Fails when the schema does not declare it.
    pub fn option(&self, name: &str) -> Result<Option<InputValue>> {
        let def = self
            .schema
            .option(name)
            .ok_or_else(|| InputError::UnknownOption(format!("--{name}")))?;
        Ok(self
            .options
            .get(name)
            .cloned()
            .or_else(|| def.default.clone()))
    }

    /// Overwrites the bound value for option `name`. Fails when the
    /// schema does not declare it.
    pub fn set_option(&mut self, name: &str, value: InputValue) -> Result<()> {
        if !self.schema.has_option(name) {
            return Err(InputError::UnknownOption(format!("--{name}")));
        }
        self.options.insert(name.to_string(), value);
        Ok(())
    }

    /// Full resolved option view: defaults first, explicitly bound values
    /// override them.
    pub fn all_options(&self) -> IndexMap<String, InputValue> {
        let mut all = self.schema.option_defaults();
        for (name, value) in &self.options {
            all.insert(name.clone(), value.clone());
        }
        all
    }

    /// Whether the schema declares an option with this long name.
    pub fn has_option(&self, name: &str) -> bool {
        self.schema.has_option(name)
    }

    /// Whether the invocation may ask interactive questions.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Flips the interactive flag (e.g. for `--no-interaction`).
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Number of explicitly bound arguments.
    pub(crate) fn bound_argument_count(&self) -> usize {
        self.arguments.len()
    }

    /// Raw access for the adapters populating the state.
    pub(crate) fn arguments_mut(&mut self) -> &mut IndexMap<String, InputValue> {
        &mut self.arguments
    }

    pub(crate) fn options_mut(&mut self) -> &mut IndexMap<String, InputValue> {
        &mut self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use command_input_core::{ArgumentDefinition, OptionDefinition};

    fn bound_state() -> InputState {
        let schema = InputSchema::with_definitions(
            vec![
                ArgumentDefinition::required("command"),
                ArgumentDefinition::optional("format").with_default("plain"),
            ],
            vec![
                OptionDefinition::flag("quiet"),
                OptionDefinition::value_optional("level").with_default("info"),
            ],
        )
        .unwrap();
        let mut state = InputState::new();
        state.reset(schema);
        state
    }

    #[test]
    fn test_argument_read_falls_back_to_default() {
        let state = bound_state();
        assert_eq!(
            state.argument("format").unwrap(),
            Some(InputValue::Scalar("plain".into()))
        );
        assert_eq!(state.argument("command").unwrap(), None);
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        let mut state = bound_state();
        assert!(matches!(
            state.argument("bogus"),
            Err(InputError::UnknownArgument { .. })
        ));
        assert!(matches!(
            state.set_option("bogus", InputValue::Flag(true)),
            Err(InputError::UnknownOption(_))
        ));
    }

    #[test]
    fn test_stored_value_overrides_default() {
        let mut state = bound_state();
        state
            .set_option("level", InputValue::Scalar("debug".into()))
            .unwrap();

        assert_eq!(
            state.option("level").unwrap(),
            Some(InputValue::Scalar("debug".into()))
        );
        let all = state.all_options();
        assert_eq!(all.get("level"), Some(&InputValue::Scalar("debug".into())));
        assert!(!all.contains_key("quiet"));
    }

    #[test]
    fn test_validate_checks_required_count_only() {
        let mut state = bound_state();
        assert_eq!(
            state.validate(),
            Err(InputError::NotEnoughArguments {
                expected: 1,
                actual: 0
            })
        );

        // Any bound slot satisfies the coarse count check.
        state
            .set_argument("format", InputValue::Scalar("json".into()))
            .unwrap();
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_reset_clears_bound_values() {
        let mut state = bound_state();
        state
            .set_argument("command", InputValue::Scalar("list".into()))
            .unwrap();
        let schema = state.schema().clone();
        state.reset(schema);
        assert_eq!(state.argument("command").unwrap(), None);
    }
}
