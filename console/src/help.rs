//! Built-in `help` command.

use command_input::Input;
use command_input_core::{ArgumentDefinition, DefinitionError, InputSchema, merge};
use console::style;

use crate::application::Application;
use crate::command::Command;
use crate::error::Result;

/// Prints usage for a single command: the synopsis over its merged
/// schema, the description and any aliases.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        "Display help for a command"
    }

    fn schema(&self) -> std::result::Result<InputSchema, DefinitionError> {
        InputSchema::with_definitions(
            vec![
                ArgumentDefinition::optional("command_name")
                    .with_description("The command to show help for")
                    .with_default("help"),
            ],
            Vec::new(),
        )
    }

    fn execute(&self, input: &dyn Input, app: &Application) -> Result<i32> {
        let name = input
            .argument("command_name")?
            .and_then(|value| value.as_str().map(String::from))
            .unwrap_or_else(|| "help".to_string());
        let command = app.get(&name)?;
        let schema = merge(&command.schema()?, &app.default_schema()?)?;

        println!("{}", style("Usage:").bold());
        println!("  {} {}", app.name(), schema.synopsis());
        println!();
        println!("{}", style("Description:").bold());
        println!("  {}", command.description());
        if !command.aliases().is_empty() {
            println!();
            println!("{}", style("Aliases:").bold());
            println!("  {}", command.aliases().join(", "));
        }
        Ok(0)
    }
}
