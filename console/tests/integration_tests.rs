//! Full dispatch scenarios through the application loop.

use command_input::{ArgvInput, ArrayInput, Input, InputError};
use command_input_core::{
    ArgumentDefinition, DefinitionError, InputSchema, InputValue, OptionDefinition,
};
use command_input_console::{Application, Command, ConsoleError, Result};

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
            vec![ArgumentDefinition::required("name")],
            vec![
                OptionDefinition::value_required("greeting")
                    .with_shortcut('g')
                    .with_default("Hello"),
            ],
        )
    }

    fn interact(&self, input: &mut dyn Input) -> Result<()> {
        // Non-interactive runs skip this and fail validation instead.
        if input.argument("name")?.is_none() {
            input.set_argument("name", InputValue::Scalar("stranger".into()))?;
        }
        Ok(())
    }

    fn execute(&self, input: &dyn Input, _app: &Application) -> Result<i32> {
        input.argument("name")?.ok_or_else(|| {
            ConsoleError::Command("no name bound".into())
        })?;
        Ok(0)
    }
}

fn app() -> Application {
    let mut app = Application::new("greeter", "0.9.0");
    app.add(Box::new(GreetCommand));
    app
}

#[test]
fn test_dispatch_binds_command_and_global_schemas() {
    let mut input = ArgvInput::new(["greet", "World", "--greeting=Hi", "--verbose"]);
    assert_eq!(app().run(&mut input).unwrap(), 0);

    assert_eq!(
        input.argument("command").unwrap(),
        Some(InputValue::Scalar("greet".into()))
    );
    assert_eq!(
        input.argument("name").unwrap(),
        Some(InputValue::Scalar("World".into()))
    );
    assert_eq!(
        input.option("greeting").unwrap(),
        Some(InputValue::Scalar("Hi".into()))
    );
    assert_eq!(
        input.option("verbose").unwrap(),
        Some(InputValue::Flag(true))
    );
}

#[test]
fn test_dispatch_by_alias() {
    let mut input = ArgvInput::new(["hello", "World"]);
    assert_eq!(app().run(&mut input).unwrap(), 0);
}

#[test]
fn test_interact_fills_missing_argument_when_interactive() {
    let mut input = ArgvInput::new(["greet"]);
    assert_eq!(app().run(&mut input).unwrap(), 0);
    assert_eq!(
        input.argument("name").unwrap(),
        Some(InputValue::Scalar("stranger".into()))
    );
}

#[test]
fn test_no_interaction_skips_interact_and_fails_validation() {
    let mut input = ArgvInput::new(["greet", "-n"]);
    assert!(matches!(
        app().run(&mut input),
        Err(ConsoleError::Input(InputError::NotEnoughArguments { .. }))
    ));
}

#[test]
fn test_unknown_command_is_reported_by_name() {
    let mut input = ArgvInput::new(["shout", "World"]);
    assert!(matches!(
        app().run(&mut input),
        Err(ConsoleError::UnknownCommand(name)) if name == "shout"
    ));
}

#[test]
fn test_unknown_option_propagates_from_binding() {
    let mut input = ArgvInput::new(["greet", "World", "--loud"]);
    assert!(matches!(
        app().run(&mut input),
        Err(ConsoleError::Input(InputError::UnknownOption(token))) if token == "--loud"
    ));
}

#[test]
fn test_help_flag_runs_help_for_named_command() {
    let mut input = ArgvInput::new(["greet", "--help"]);
    assert_eq!(app().run(&mut input).unwrap(), 0);
}

#[test]
fn test_bare_help_flag_documents_help_itself() {
    let mut input = ArgvInput::new(["--help"]);
    assert_eq!(app().run(&mut input).unwrap(), 0);
}

#[test]
fn test_version_flag_short_circuits_dispatch() {
    let mut input = ArgvInput::new(["--version"]);
    assert_eq!(app().run(&mut input).unwrap(), 0);
}

#[test]
fn test_empty_invocation_falls_back_to_list() {
    let mut input = ArgvInput::new(Vec::<String>::new());
    assert_eq!(app().run(&mut input).unwrap(), 0);
}

#[test]
fn test_array_input_dispatches_like_argv() {
    let mut input = ArrayInput::from_pairs([("command", "greet"), ("name", "World")]);
    assert_eq!(app().run(&mut input).unwrap(), 0);
    assert_eq!(
        input.argument("name").unwrap(),
        Some(InputValue::Scalar("World".into()))
    );
}

#[test]
fn test_merged_synopsis_covers_both_schemas() {
    let app = app();
    let command = app.get("greet").unwrap();
    let merged = command_input_core::merge(
        &command.schema().unwrap(),
        &app.default_schema().unwrap(),
    )
    .unwrap();
    let synopsis = merged.synopsis();
    assert!(synopsis.starts_with("<command> <name>"));
    assert!(synopsis.contains("[--greeting=GREETING]"));
    assert!(synopsis.contains("[--help]"));
}
