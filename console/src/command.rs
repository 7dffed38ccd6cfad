//! The capability every runnable command implements.

use command_input::Input;
use command_input_core::{DefinitionError, InputSchema};

use crate::application::Application;
use crate::error::Result;

/// A named, runnable unit registered with an [`Application`].
///
/// The application drives each invocation through a fixed sequence:
/// the command's schema is merged with the global one, the input is
/// bound against the merged schema, [`interact`](Command::interact) may
/// fill in missing values (interactive invocations only), the input is
/// validated, and [`execute`](Command::execute) runs with the fully
/// bound input.
///
/// # Examples
///
/// ```
/// use command_input::Input;
/// use command_input_core::{ArgumentDefinition, DefinitionError, InputSchema};
/// use command_input_console::{Application, Command, Result};
///
/// struct EchoCommand;
///
/// impl Command for EchoCommand {
///     fn name(&self) -> &str {
///         "echo"
///     }
///
///     fn schema(&self) -> std::result::Result<InputSchema, DefinitionError> {
///         InputSchema::with_definitions(
///             vec![ArgumentDefinition::required("text")],
///             Vec::new(),
///         )
///     }
///
///     fn execute(&self, input: &dyn Input, _app: &Application) -> Result<i32> {
///         let text = input.argument("text")?;
///         println!("{}", text.and_then(|value| value.as_str().map(String::from)).unwrap_or_default());
///         Ok(0)
///     }
/// }
/// ```
pub trait Command {
    /// The primary name the command is dispatched under.
    fn name(&self) -> &str;

    /// One-line description shown in listings and help.
    fn description(&self) -> &str {
        "No description"
    }

    /// Alternative dispatch names.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// The command's own input schema, before the global schema is
    /// merged in.
    fn schema(&self) -> std::result::Result<InputSchema, DefinitionError>;

    /// Hook run before validation on interactive invocations, typically
    /// to fill missing arguments. The default does nothing.
    fn interact(&self, _input: &mut dyn Input) -> Result<()> {
        Ok(())
    }

    /// Runs the command against fully bound, validated input and returns
    /// its exit code.
    fn execute(&self, input: &dyn Input, app: &Application) -> Result<i32>;
}
