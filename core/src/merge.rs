//! Pure schema merging.
//!
//! The dispatcher folds an application-wide schema into each command's own
//! schema before binding. [`merge`] models that as a pure function
//! returning a fresh schema instead of mutating either side: overlay
//! arguments are prepended (the application's `command` argument comes
//! before the command's own positionals) and overlay options are additive
//! only, never overwriting an option the base already declares.
//!
//! # Example
//!
//! ```
//! use command_input_core::*;
//!
//! let base = InputSchema::with_definitions(
//!     vec![ArgumentDefinition::required("name")],
//!     vec![OptionDefinition::flag("shout")],
//! )?;
//! let global = InputSchema::with_definitions(
//!     vec![ArgumentDefinition::required("command")],
//!     vec![OptionDefinition::flag("help").with_shortcut('h')],
//! )?;
//!
//! let merged = merge(&base, &global)?;
//! assert_eq!(merged.synopsis(), "<command> <name> [--shout] [--help]");
//! # Ok::<(), DefinitionError>(())
//! ```

use crate::{DefinitionError, InputSchema};

/// Merges `overlay` into `base`, returning a new schema.
///
/// Overlay arguments are prepended before base arguments and the combined
/// sequence is re-validated, so a layout that would put a required
/// argument after an optional one fails with the usual
/// [`DefinitionError`]. Base options always win; overlay options are only
/// added under names the base does not declare (a colliding shortcut on a
/// new name is still an error).
pub fn merge(base: &InputSchema, overlay: &InputSchema) -> Result<InputSchema, DefinitionError> {
    let mut merged = InputSchema::new();

    for argument in overlay.arguments() {
        merged.add_argument(argument.clone())?;
    }
    for argument in base.arguments() {
        merged.add_argument(argument.clone())?;
    }

    for option in base.options() {
        merged.add_option(option.clone())?;
    }
    for option in overlay.options() {
        if merged.has_option(&option.name) {
            continue;
        }
        merged.add_option(option.clone())?;
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArgumentDefinition, OptionDefinition};

    #[test]
    fn test_merge_prepends_overlay_arguments() {
        let base = InputSchema::with_definitions(
            vec![ArgumentDefinition::required("name")],
            Vec::new(),
        )
        .unwrap();
        let overlay = InputSchema::with_definitions(
            vec![ArgumentDefinition::required("command")],
            Vec::new(),
        )
        .unwrap();

        let merged = merge(&base, &overlay).unwrap();
        let names: Vec<_> = merged.arguments().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["command", "name"]);
        assert_eq!(merged.argument_required_count(), 2);
    }

    #[test]
    fn test_merge_never_overwrites_base_options() {
        let base = InputSchema::with_definitions(
            Vec::new(),
            vec![OptionDefinition::value_required("format").with_default("json")],
        )
        .unwrap();
        let overlay = InputSchema::with_definitions(
            Vec::new(),
            vec![
                OptionDefinition::value_required("format").with_default("plain"),
                OptionDefinition::flag("help").with_shortcut('h'),
            ],
        )
        .unwrap();

        let merged = merge(&base, &overlay).unwrap();
        assert_eq!(
            merged.option("format").and_then(|o| o.default.clone()),
            Some("json".into())
        );
        assert!(merged.has_option("help"));
    }

    #[test]
    fn test_merge_rejects_required_after_optional_layout() {
        let base = InputSchema::with_definitions(
            vec![ArgumentDefinition::required("name")],
            Vec::new(),
        )
        .unwrap();
        let overlay = InputSchema::with_definitions(
            vec![ArgumentDefinition::optional("target")],
            Vec::new(),
        )
        .unwrap();

        let err = merge(&base, &overlay).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::RequiredAfterOptional("name".to_string())
        );
    }

    #[test]
    fn test_merge_leaves_inputs_untouched() {
        let base = InputSchema::with_definitions(
            vec![ArgumentDefinition::required("name")],
            Vec::new(),
        )
        .unwrap();
        let overlay = InputSchema::with_definitions(
            vec![ArgumentDefinition::required("command")],
            Vec::new(),
        )
        .unwrap();

        let _ = merge(&base, &overlay).unwrap();
        assert_eq!(base.argument_count(), 1);
        assert_eq!(overlay.argument_count(), 1);
    }
}
