//! Built-in `list` command.

use command_input::Input;
use command_input_core::{DefinitionError, InputSchema};
use console::style;

use crate::application::Application;
use crate::command::Command;
use crate::error::Result;

/// Prints the application banner and every registered command with its
/// description, name column width-aligned.
pub struct ListCommand;

impl Command for ListCommand {
    fn name(&self) -> &str {
        "list"
    }

    fn description(&self) -> &str {
        "List the available commands"
    }

    fn schema(&self) -> std::result::Result<InputSchema, DefinitionError> {
        Ok(InputSchema::new())
    }

    fn execute(&self, _input: &dyn Input, app: &Application) -> Result<i32> {
        println!("{}", style(app.long_version()).bold());
        println!();
        println!("{}", style("Available commands:").bold());

        let width = app
            .commands()
            .map(|command| command.name().len())
            .max()
            .unwrap_or(0);
        for command in app.commands() {
            // Pad before styling so ANSI codes do not skew the column.
            let name = format!("{:width$}", command.name());
            println!("  {}  {}", style(name).green(), command.description());
        }
        Ok(0)
    }
}
