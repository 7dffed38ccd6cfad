//! Demo console binary over the command-input stack.

use command_input::{ArgvInput, Input, InputError};
use command_input_console::{Application, Command, ConsoleError, Result};
use command_input_core::{
    ArgumentDefinition, DefinitionError, InputSchema, InputValue, OptionDefinition,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Greets one name, optionally decorated with adjectives.
struct GreetCommand;

impl Command for GreetCommand {
    fn name(&self) -> &str {
        "greet"
    }

    fn description(&self) -> &str {
        "Greet someone by name"
    }

    fn aliases(&self) -> &[&str] {
        &["hello"]
    }

    fn schema(&self) -> std::result::Result<InputSchema, DefinitionError> {
        InputSchema::with_definitions(
            vec![
                ArgumentDefinition::required("name").with_description("Who to greet"),
                ArgumentDefinition::optional("adjective")
                    .array()
                    .with_description("Adjectives to decorate the name with"),
            ],
            vec![
                OptionDefinition::value_required("greeting")
                    .with_shortcut('g')
                    .with_default("Hello")
                    .with_description("The greeting word to use"),
                OptionDefinition::flag("shout")
                    .with_shortcut('s')
                    .with_description("Print the greeting in upper case"),
            ],
        )
    }

    fn interact(&self, input: &mut dyn Input) -> Result<()> {
        if input.argument("name")?.is_none() {
            debug!("no name supplied, greeting the world");
            input.set_argument("name", InputValue::Scalar("World".into()))?;
        }
        Ok(())
    }

    fn execute(&self, input: &dyn Input, _app: &Application) -> Result<i32> {
        let name = input
            .argument("name")?
            .and_then(|value| value.as_str().map(String::from))
            .ok_or_else(|| ConsoleError::Command("no name bound".into()))?;
        let greeting = input
            .argument("adjective")?
            .and_then(|value| value.as_sequence().map(|adjectives| adjectives.join(" ")))
            .filter(|adjectives| !adjectives.is_empty())
            .map_or(name.clone(), |adjectives| format!("{adjectives} {name}"));

        let word = input
            .option("greeting")?
            .and_then(|value| value.as_str().map(String::from))
            .unwrap_or_else(|| "Hello".to_string());
        let mut line = format!("{word}, {greeting}!");
        if input.option("shout")?.is_some_and(|value| value.as_bool()) {
            line = line.to_uppercase();
        }
        println!("{line}");
        Ok(0)
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    init_tracing();

    let mut app = Application::new("command-console", env!("CARGO_PKG_VERSION"));
    app.add(Box::new(GreetCommand));

    let mut input = ArgvInput::from_env();
    let code = match app.run(&mut input) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            match err {
                ConsoleError::Input(InputError::Definition(_)) => 1,
                ConsoleError::Input(_) => 2,
                _ => 1,
            }
        }
    };
    std::process::exit(code);
}
