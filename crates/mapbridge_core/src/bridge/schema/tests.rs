use crate::bridge::{BridgeError, FieldKind, SchemaSet, StructSchema};

#[test]
fn rejects_duplicate_schema_names() {
	let mut set = SchemaSet::new();
	set.insert(StructSchema::new("A")).expect("first insert");
	let err = set.insert(StructSchema::new("A")).expect_err("duplicate should fail");
	assert!(matches!(err, BridgeError::SchemaDuplicate { name } if name == "A"));
}

#[test]
fn rejects_duplicate_field_names() {
	let mut set = SchemaSet::new();
	let schema = StructSchema::new("A").field("x", FieldKind::Integer).field("x", FieldKind::String);
	let err = set.insert(schema).expect_err("duplicate field should fail");
	assert!(matches!(err, BridgeError::SchemaDuplicateField { field, .. } if field == "x"));
	assert!(set.is_empty());
}

#[test]
fn require_reports_missing_schema() {
	let set = SchemaSet::new();
	let err = set.require("Nope").expect_err("missing schema");
	assert!(matches!(err, BridgeError::SchemaNotFound { name } if name == "Nope"));
}

#[test]
fn validate_finds_unresolved_reference_inside_sequence() {
	let mut set = SchemaSet::new();
	set.insert(StructSchema::new("Holder").field("items", FieldKind::sequence(FieldKind::object("Missing"))))
		.expect("insert");
	let err = set.validate().expect_err("unresolved reference");
	assert!(matches!(
		err,
		BridgeError::SchemaUnresolvedObject { schema, field, target } if schema == "Holder" && field == "items" && target == "Missing"
	));
}

#[test]
fn builtin_set_is_self_consistent() {
	let set = SchemaSet::builtin();
	set.validate().expect("builtin schemas resolve");
	for name in ["Conversation", "UserInfo", "MentionInfo", "GroupMessageReadInfo", "Message", "ConversationInfo"] {
		assert!(set.get(name).is_some(), "missing builtin schema {name}");
	}

	let mut rebuilt = SchemaSet::new();
	for schema in set.iter() {
		rebuilt.insert(schema.clone()).expect("builtin schemas have unique names and fields");
	}
	assert_eq!(rebuilt.len(), set.len());
}

#[test]
fn field_lookup_and_display() {
	let schema = StructSchema::new("A")
		.field("tags", FieldKind::sequence(FieldKind::String))
		.field("extra", FieldKind::map(FieldKind::String))
		.field("owner", FieldKind::object("User"));
	assert_eq!(schema.get("tags").map(|field| field.kind.to_string()), Some("[string]".to_owned()));
	assert_eq!(schema.get("extra").map(|field| field.kind.to_string()), Some("{string: string}".to_owned()));
	assert_eq!(schema.get("owner").map(|field| field.kind.to_string()), Some("User".to_owned()));
	assert!(schema.get("missing").is_none());
	assert!(FieldKind::Long.is_numeric());
	assert!(!FieldKind::Boolean.is_numeric());
}
