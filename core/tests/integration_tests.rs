use command_input_core::{
    ArgumentDefinition, InputSchema, InputValue, OptionDefinition, merge,
};

fn command_schema() -> InputSchema {
    InputSchema::with_definitions(
        vec![
            ArgumentDefinition::required("source").with_description("Input path"),
            ArgumentDefinition::optional("targets")
                .array()
                .with_default(InputValue::Sequence(vec!["all".to_string()])),
        ],
        vec![
            OptionDefinition::flag("dry-run").with_shortcut('d'),
            OptionDefinition::value_optional("format")
                .with_shortcut('f')
                .with_default("plain"),
        ],
    )
    .expect("valid schema")
}

#[test]
fn test_schema_serde_roundtrip_preserves_order_and_shortcuts() {
    let schema = command_schema();

    let json = serde_json::to_string(&schema).expect("serializes");
    let restored: InputSchema = serde_json::from_str(&json).expect("deserializes");

    assert_eq!(restored, schema);
    let names: Vec<_> = restored.arguments().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["source", "targets"]);
    assert_eq!(
        restored.option_for_shortcut('f').map(|o| o.name.as_str()),
        Some("format")
    );
    assert_eq!(restored.argument_required_count(), 1);
}

#[test]
fn test_schema_synopsis_covers_every_mode() {
    let schema = command_schema();
    assert_eq!(
        schema.synopsis(),
        "<source> [targets1] ... [targetsN] [--dry-run] [--format=FORMAT]"
    );
}

#[test]
fn test_merged_schema_keeps_defaults_readable() {
    let global = InputSchema::with_definitions(
        vec![ArgumentDefinition::required("command")],
        vec![OptionDefinition::flag("help").with_shortcut('h')],
    )
    .expect("valid global schema");

    let merged = merge(&command_schema(), &global).expect("schemas merge");

    assert_eq!(
        merged.option_defaults().get("format"),
        Some(&InputValue::Scalar("plain".into()))
    );
    assert_eq!(merged.argument_at(0).map(|a| a.name.as_str()), Some("command"));
    assert!(merged.has_shortcut('h'));
    assert!(merged.has_shortcut('d'));
}
