//! Adapter for pre-split key/value parameters.

use std::fmt;

use command_input_core::InputValue;
use indexmap::IndexMap;

use crate::error::{InputError, Result};
use crate::input::{Input, escape_token};
use crate::state::InputState;

/// Input built from an explicit parameter map instead of raw tokens.
/// Dashed keys name options, other keys name arguments. Used for
/// synthetic dispatch, where the caller already knows the structure.
///
/// A `None` value leaves the parameter unset: the argument or option is
/// acknowledged but nothing is bound for it.
///
/// # Examples
///
/// ```
/// use command_input::{ArrayInput, Input};
/// use command_input_core::*;
///
/// let schema = InputSchema::with_definitions(
///     vec![ArgumentDefinition::required("command")],
///     vec![OptionDefinition::flag("verbose")],
/// )?;
///
/// let mut input = ArrayInput::from_pairs([("command", "help"), ("--verbose", "")]);
/// input.bind(schema)?;
///
/// assert_eq!(input.argument("command")?, Some(InputValue::Scalar("help".into())));
/// # Ok::<(), command_input::InputError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ArrayInput {
    parameters: IndexMap<String, Option<String>>,
    state: InputState,
}

impl ArrayInput {
    /// Creates an input over the given parameter map.
    pub fn new(parameters: IndexMap<String, Option<String>>) -> Self {
        Self {
            parameters,
            state: InputState::new(),
        }
    }

    /// Convenience constructor over key/value pairs. An empty value on a
    /// dashed key means the option carries no explicit value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let parameters = pairs
            .into_iter()
            .map(|(key, value)| {
                let key = key.into();
                let value = value.into();
                let value = if key.starts_with('-') && value.is_empty() {
                    None
                } else {
                    Some(value)
                };
                (key, value)
            })
            .collect();
        Self::new(parameters)
    }

    fn add_argument(&mut self, name: &str, value: Option<&str>) -> Result<()> {
        let Some(def) = self.state.schema().argument(name).cloned() else {
            return Err(InputError::UnknownArgument {
                name: name.to_string(),
            });
        };
        // None means the argument is declared but unset.
        let Some(value) = value else {
            return Ok(());
        };
        let resolved = if def.is_array() {
            InputValue::Sequence(vec![value.to_string()])
        } else {
            InputValue::Scalar(value.to_string())
        };
        self.state.arguments_mut().insert(def.name, resolved);
        Ok(())
    }

    fn add_short_option(&mut self, shortcut: &str, value: Option<&str>) -> Result<()> {
        let mut chars = shortcut.chars();
        let name = match (chars.next(), chars.next()) {
            (Some(c), None) => self
                .state
                .schema()
                .option_for_shortcut(c)
                .map(|option| option.name.clone()),
            _ => None,
        };
        match name {
            Some(name) => self.add_long_option(&name, value),
            None => Err(InputError::UnknownOption(format!("-{shortcut}"))),
        }
    }

    fn add_long_option(&mut self, name: &str, value: Option<&str>) -> Result<()> {
        let Some(option) = self.state.schema().option(name).cloned() else {
            return Err(InputError::UnknownOption(format!("--{name}")));
        };

        let resolved = match value {
            Some(value) if option.is_array() => InputValue::Sequence(vec![value.to_string()]),
            Some(value) if !option.accepts_value() => {
                return Err(InputError::OptionValueNotAccepted {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
            Some(value) => InputValue::Scalar(value.to_string()),
            None if option.is_value_required() => {
                return Err(InputError::OptionValueRequired {
                    name: name.to_string(),
                });
            }
            None if option.accepts_value() => match option.default.clone() {
                Some(default) => default,
                None => return Ok(()),
            },
            None => InputValue::Flag(true),
        };
        self.state.options_mut().insert(option.name, resolved);
        Ok(())
    }
}

impl Input for ArrayInput {
    fn state(&self) -> &InputState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut InputState {
        &mut self.state
    }

    fn parse(&mut self) -> Result<()> {
        let parameters = self.parameters.clone();
        for (key, value) in &parameters {
            if let Some(name) = key.strip_prefix("--") {
                self.add_long_option(name, value.as_deref())?;
            } else if let Some(shortcut) = key.strip_prefix('-') {
                self.add_short_option(shortcut, value.as_deref())?;
            } else {
                self.add_argument(key, value.as_deref())?;
            }
        }
        Ok(())
    }

    fn first_argument(&self) -> Option<String> {
        self.parameters
            .iter()
            .find(|(key, _)| !key.starts_with('-'))
            .and_then(|(_, value)| value.clone())
    }

    fn has_parameter_option(&self, names: &[&str]) -> bool {
        self.parameters.iter().any(|(key, value)| {
            // Positional entries are matched by value, options by key.
            let candidate = if key.parse::<i64>().is_ok() {
                value.as_deref().unwrap_or_default()
            } else {
                key.as_str()
            };
            names.contains(&candidate)
        })
    }

    fn parameter_option(
        &self,
        names: &[&str],
        default: Option<InputValue>,
    ) -> Option<InputValue> {
        for (key, value) in &self.parameters {
            if key.parse::<i64>().is_ok() {
                if names.contains(&value.as_deref().unwrap_or_default()) {
                    return Some(InputValue::Scalar(
                        value.clone().unwrap_or_default(),
                    ));
                }
            } else if names.contains(&key.as_str()) {
                return Some(match value {
                    Some(value) => InputValue::Scalar(value.clone()),
                    None => InputValue::Flag(true),
                });
            }
        }
        default
    }
}

impl fmt::Display for ArrayInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .parameters
            .iter()
            .map(|(key, value)| {
                if key.starts_with('-') {
                    match value {
                        Some(value) if !value.is_empty() => {
                            format!("{key}={}", escape_token(value))
                        }
                        _ => key.clone(),
                    }
                } else {
                    escape_token(value.as_deref().unwrap_or_default()).into_owned()
                }
            })
            .collect();
        write!(f, "{}", rendered.join(" "))
    }
}
