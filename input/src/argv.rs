//! Adapter for process-style token sequences.

use std::collections::VecDeque;
use std::fmt;
use std::sync::LazyLock;

use command_input_core::{InputValue, OptionDefinition};
use regex::Regex;
use tracing::debug;

use crate::error::{InputError, Result};
use crate::input::{Input, escape_token};
use crate::state::InputState;

static OPTION_WITH_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-[^=]+=)(.+)").expect("static regex must compile"));

/// Input parsed from a flat sequence of raw tokens, e.g. the process
/// argument vector without the program name.
///
/// Recognized token syntax:
///
/// - `--name=value`, `--name value` (look-ahead), `--name`
/// - `-x`, `-xvalue` (value-accepting shortcut), `-xyz` (flag cluster,
///   last shortcut may consume the remainder as its value)
/// - `--` stops option parsing; everything after is positional
/// - bare tokens fill positional slots in schema order, with a trailing
///   array argument absorbing all remaining tokens
///
/// # Examples
///
/// ```
/// use command_input::{ArgvInput, Input};
/// use command_input_core::*;
///
/// let schema = InputSchema::with_definitions(
///     vec![ArgumentDefinition::required("name")],
///     vec![OptionDefinition::value_required("greeting").with_shortcut('g')],
/// )?;
///
/// let mut input = ArgvInput::new(["World", "--greeting=Hi"]);
/// input.bind(schema)?;
/// input.validate()?;
///
/// assert_eq!(input.argument("name")?, Some(InputValue::Scalar("World".into())));
/// assert_eq!(input.option("greeting")?, Some(InputValue::Scalar("Hi".into())));
/// # Ok::<(), command_input::InputError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ArgvInput {
    tokens: Vec<String>,
    parsed: VecDeque<String>,
    lenient: bool,
    state: InputState,
}

impl ArgvInput {
    /// Creates an input over the given raw tokens.
    pub fn new<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            parsed: VecDeque::new(),
            lenient: false,
            state: InputState::new(),
        }
    }

    /// Creates a lenient input: excess positional tokens are discarded
    /// instead of failing with [`InputError::TooManyArguments`]. Used for
    /// standalone parsing where the schema is known to be partial.
    pub fn lenient<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut input = Self::new(tokens);
        input.lenient = true;
        input
    }

    /// Creates an input over the current process arguments, program name
    /// excluded.
    pub fn from_env() -> Self {
        Self::new(std::env::args().skip(1))
    }

    /// The raw token sequence this input was constructed over.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Replaces the raw tokens ahead of a re-bind.
    pub fn set_tokens<I, T>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tokens = tokens.into_iter().map(Into::into).collect();
    }

    fn parse_long_option(&mut self, token: &str) -> Result<()> {
        let name = &token[2..];
        match name.split_once('=') {
            Some((name, value)) => self.add_long_option(name, Some(value.to_string())),
            None => self.add_long_option(name, None),
        }
    }

    fn parse_short_option(&mut self, token: &str) -> Result<()> {
        let name = &token[1..];
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return Ok(());
        };

        if chars.next().is_some() {
            let takes_value = self
                .state
                .schema()
                .option_for_shortcut(first)
                .is_some_and(OptionDefinition::accepts_value);
            if takes_value {
                // -xvalue: the first shortcut consumes the rest as its value.
                let value = name[first.len_utf8()..].to_string();
                self.add_short_option(first, Some(value))
            } else {
                self.parse_short_option_set(name)
            }
        } else {
            self.add_short_option(first, None)
        }
    }

    /// Resolves a cluster of flag shortcuts left to right. The last
    /// shortcut in the cluster may consume the remainder as its value.
    fn parse_short_option_set(&mut self, set: &str) -> Result<()> {
        let mut indices = set.char_indices().peekable();
        while let Some((offset, shortcut)) = indices.next() {
            let option = self
                .state
                .schema()
                .option_for_shortcut(shortcut)
                .ok_or_else(|| InputError::UnknownOption(format!("-{shortcut}")))?
                .clone();

            if option.accepts_value() {
                let rest = &set[offset + shortcut.len_utf8()..];
                let value = if rest.is_empty() {
                    None
                } else {
                    Some(rest.to_string())
                };
                self.add_long_option(&option.name, value)?;
                break;
            }
            self.add_long_option(&option.name, None)?;
        }
        Ok(())
    }

    fn parse_argument(&mut self, token: &str) -> Result<()> {
        let count = self.state.bound_argument_count();

        if let Some(def) = self.state.schema().argument_at(count) {
            let name = def.name.clone();
            let value = if def.is_array() {
                InputValue::Sequence(vec![token.to_string()])
            } else {
                InputValue::Scalar(token.to_string())
            };
            self.state.arguments_mut().insert(name, value);
            return Ok(());
        }

        // A trailing array argument absorbs every remaining token.
        let trailing_array = count
            .checked_sub(1)
            .and_then(|index| self.state.schema().argument_at(index))
            .filter(|def| def.is_array())
            .map(|def| def.name.clone());
        if let Some(name) = trailing_array {
            match self.state.arguments_mut().get_mut(&name) {
                Some(InputValue::Sequence(values)) => values.push(token.to_string()),
                _ => {
                    self.state
                        .arguments_mut()
                        .insert(name, InputValue::Sequence(vec![token.to_string()]));
                }
            }
            return Ok(());
        }

        if self.lenient {
            debug!(token, "discarding excess positional token");
            return Ok(());
        }
        Err(InputError::TooManyArguments)
    }

    fn add_short_option(&mut self, shortcut: char, value: Option<String>) -> Result<()> {
        let name = self
            .state
            .schema()
            .option_for_shortcut(shortcut)
            .ok_or_else(|| InputError::UnknownOption(format!("-{shortcut}")))?
            .name
            .clone();
        self.add_long_option(&name, value)
    }

    fn add_long_option(&mut self, name: &str, mut value: Option<String>) -> Result<()> {
        let Some(option) = self.state.schema().option(name).cloned() else {
            return Err(InputError::UnknownOption(format!("--{name}")));
        };

        if let Some(supplied) = &value {
            if !option.accepts_value() {
                return Err(InputError::OptionValueNotAccepted {
                    name: name.to_string(),
                    value: supplied.clone(),
                });
            }
        }

        // Deferred value: look at the next unconsumed token. A token that
        // does not itself begin with a dash (including the empty string)
        // is consumed as the value; anything else stays in the stream.
        if value.is_none() && option.accepts_value() {
            if let Some(next) = self.parsed.front() {
                if !next.starts_with('-') {
                    value = self.parsed.pop_front();
                }
            }
        }

        if value.is_none() && option.is_value_required() {
            return Err(InputError::OptionValueRequired {
                name: name.to_string(),
            });
        }

        if option.is_array() {
            let item = match value {
                Some(supplied) => supplied,
                None => option
                    .default
                    .as_ref()
                    .and_then(InputValue::as_str)
                    .unwrap_or_default()
                    .to_string(),
            };
            match self.state.options_mut().get_mut(name) {
                Some(InputValue::Sequence(values)) => values.push(item),
                _ => {
                    self.state
                        .options_mut()
                        .insert(name.to_string(), InputValue::Sequence(vec![item]));
                }
            }
            return Ok(());
        }

        let resolved = match value {
            Some(supplied) => InputValue::Scalar(supplied),
            None => {
                if option.is_value_optional() {
                    match option.default.clone() {
                        Some(default) => default,
                        // No default to fall back to; reads resolve the
                        // absence themselves.
                        None => return Ok(()),
                    }
                } else {
                    InputValue::Flag(true)
                }
            }
        };
        self.state.options_mut().insert(name.to_string(), resolved);
        Ok(())
    }
}

impl Input for ArgvInput {
    fn state(&self) -> &InputState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut InputState {
        &mut self.state
    }

    /// Single left-to-right pass over the raw tokens.
    fn parse(&mut self) -> Result<()> {
        let mut parse_options = true;
        self.parsed = self.tokens.clone().into();

        while let Some(token) = self.parsed.pop_front() {
            if parse_options && token.is_empty() {
                self.parse_argument(&token)?;
            } else if parse_options && token == "--" {
                parse_options = false;
            } else if parse_options && token.starts_with("--") {
                self.parse_long_option(&token)?;
            } else if parse_options && token.starts_with('-') && token != "-" {
                self.parse_short_option(&token)?;
            } else {
                self.parse_argument(&token)?;
            }
        }
        Ok(())
    }

    fn first_argument(&self) -> Option<String> {
        self.tokens
            .iter()
            .find(|token| !token.starts_with('-'))
            .cloned()
    }

    fn has_parameter_option(&self, names: &[&str]) -> bool {
        self.tokens.iter().any(|token| {
            names.iter().any(|name| {
                token.as_str() == *name || token.starts_with(&format!("{name}="))
            })
        })
    }

    fn parameter_option(
        &self,
        names: &[&str],
        default: Option<InputValue>,
    ) -> Option<InputValue> {
        let mut tokens = self.tokens.iter();
        while let Some(token) = tokens.next() {
            for name in names {
                if token.as_str() == *name {
                    // Bare match: the value is the following token.
                    return tokens
                        .next()
                        .map(|value| InputValue::Scalar(value.clone()))
                        .or(default);
                }
                if let Some(value) = token.strip_prefix(&format!("{name}=")) {
                    return Some(InputValue::Scalar(value.to_string()));
                }
            }
        }
        default
    }
}

/// Log-friendly reconstruction of the command line. The first token that
/// carries a value (or looks like a positional) is escaped and rendering
/// stops there; this mirrors the historical debug representation rather
/// than reproducing every token.
impl fmt::Display for ArgvInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = Vec::new();
        for token in &self.tokens {
            if let Some(caps) = OPTION_WITH_VALUE_RE.captures(token) {
                return write!(f, "{}{}", &caps[1], escape_token(&caps[2]));
            }
            if !token.is_empty() && !token.starts_with('-') {
                return write!(f, "{}", escape_token(token));
            }
            rendered.push(token.as_str());
        }
        write!(f, "{}", rendered.join(" "))
    }
}
