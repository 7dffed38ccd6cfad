//! The command registry and dispatch loop.

use command_input::{ArrayInput, Input};
use command_input_core::{
    ArgumentDefinition, DefinitionError, InputSchema, OptionDefinition, merge,
};
use indexmap::IndexMap;
use tracing::debug;

use crate::command::Command;
use crate::error::{ConsoleError, Result};
use crate::help::HelpCommand;
use crate::list::ListCommand;

/// A named collection of commands plus the loop that picks one from the
/// raw input and runs it.
///
/// Every application starts with `help` and `list` registered; further
/// commands are added with [`add`](Application::add). Dispatch inspects
/// the raw input before any schema is bound: early flags like `--help`
/// and `--version` short-circuit, otherwise the first positional token
/// names the command.
///
/// # Examples
///
/// ```
/// use command_input::ArgvInput;
/// use command_input_console::Application;
///
/// let app = Application::new("tool", "1.0.0");
/// let mut input = ArgvInput::new(["list"]);
/// let code = app.run(&mut input)?;
/// assert_eq!(code, 0);
/// # Ok::<(), command_input_console::ConsoleError>(())
/// ```
pub struct Application {
    name: String,
    version: String,
    commands: IndexMap<String, Box<dyn Command>>,
}

impl Application {
    /// Creates an application with the built-in `help` and `list`
    /// commands registered.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        let mut app = Self {
            name: name.into(),
            version: version.into(),
            commands: IndexMap::new(),
        };
        app.add(Box::new(HelpCommand));
        app.add(Box::new(ListCommand));
        app
    }

    /// The application name used in version and help output.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The application version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// `name version`, as printed for `--version`.
    pub fn long_version(&self) -> String {
        format!("{} {}", self.name, self.version)
    }

    /// Registers a command under its primary name. A later registration
    /// with the same name replaces the earlier one.
    pub fn add(&mut self, command: Box<dyn Command>) {
        self.commands.insert(command.name().to_string(), command);
    }

    /// Looks a command up by primary name or alias.
    pub fn get(&self, name: &str) -> Result<&dyn Command> {
        if let Some(command) = self.commands.get(name) {
            return Ok(command.as_ref());
        }
        self.commands
            .values()
            .find(|command| command.aliases().contains(&name))
            .map(Box::as_ref)
            .ok_or_else(|| ConsoleError::UnknownCommand(name.to_string()))
    }

    /// Whether a command is registered under this name or alias.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// All registered commands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.values().map(Box::as_ref)
    }

    /// The schema every command invocation carries: the `command` name
    /// slot plus the application-wide flags.
    pub fn default_schema(&self) -> std::result::Result<InputSchema, DefinitionError> {
        InputSchema::with_definitions(
            vec![ArgumentDefinition::required("command")
                .with_description("The command to execute")],
            vec![
                OptionDefinition::flag("help")
                    .with_shortcut('h')
                    .with_description("Display help for the given command"),
                OptionDefinition::flag("verbose")
                    .with_shortcut('v')
                    .with_description("Increase the verbosity of messages"),
                OptionDefinition::flag("version")
                    .with_shortcut('V')
                    .with_description("Display the application version"),
                OptionDefinition::flag("no-interaction")
                    .with_shortcut('n')
                    .with_description("Do not ask any interactive question"),
            ],
        )
    }

    /// Picks a command from the raw input and runs it, returning the
    /// exit code.
    ///
    /// `--version`/`-V` prints the version and returns without
    /// dispatching. `--help`/`-h` reroutes to the `help` command for the
    /// named command (or for `help` itself when no name is present). An
    /// input with no command name at all lists the registered commands.
    pub fn run(&self, input: &mut dyn Input) -> Result<i32> {
        if input.has_parameter_option(&["--no-interaction", "-n"]) {
            input.set_interactive(false);
        }
        if input.has_parameter_option(&["--verbose", "-v"]) {
            debug!("verbose output requested");
        }

        if input.has_parameter_option(&["--version", "-V"]) {
            println!("{}", self.long_version());
            return Ok(0);
        }

        let name = input.first_argument();

        if input.has_parameter_option(&["--help", "-h"]) {
            let mut pairs = vec![("command".to_string(), "help".to_string())];
            if let Some(name) = &name {
                pairs.push(("command_name".to_string(), name.clone()));
            }
            let mut help = ArrayInput::from_pairs(pairs);
            help.set_interactive(input.is_interactive());
            return self.run_command(self.get("help")?, &mut help);
        }

        match name {
            Some(name) => self.run_command(self.get(&name)?, input),
            None => {
                let mut list = ArrayInput::from_pairs([("command", "list")]);
                list.set_interactive(input.is_interactive());
                self.run_command(self.get("list")?, &mut list)
            }
        }
    }

    fn run_command(&self, command: &dyn Command, input: &mut dyn Input) -> Result<i32> {
        debug!(command = command.name(), "dispatching");
        let schema = merge(&command.schema()?, &self.default_schema()?)?;
        input.bind(schema)?;
        if input.is_interactive() {
            command.interact(input)?;
        }
        input.validate()?;
        command.execute(input, self)
    }
}
