//! Command registry and dispatch over schema-bound input.
//!
//! An [`Application`] owns a set of [`Command`]s and a dispatch loop:
//! the raw input is scanned for early flags (`--version`, `--help`,
//! `--no-interaction`) and a command name, the named command's schema is
//! merged with the application-wide one, the input is bound and
//! validated, and the command executes. The built-in `help` and `list`
//! commands are always registered.
//!
//! # Examples
//!
//! ```no_run
//! use command_input::ArgvInput;
//! use command_input_console::Application;
//!
//! let app = Application::new("tool", env!("CARGO_PKG_VERSION"));
//! let mut input = ArgvInput::from_env();
//! let code = match app.run(&mut input) {
//!     Ok(code) => code,
//!     Err(err) => {
//!         eprintln!("{err}");
//!         1
//!     }
//! };
//! std::process::exit(code);
//! ```

mod application;
mod command;
mod error;
mod help;
mod list;

pub use application::Application;
pub use command::Command;
pub use error::{ConsoleError, Result};
pub use help::HelpCommand;
pub use list::ListCommand;
