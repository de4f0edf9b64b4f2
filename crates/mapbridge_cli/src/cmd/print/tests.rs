use mapbridge::bridge::{FieldKind, GenericMap, GenericValue, PopulateOptions, SchemaSet, StructSchema, from_generic_map};

use super::{PrintOptions, render_generic, render_instance};

fn sample_map() -> GenericMap {
	let mut map = GenericMap::new();
	map.insert("name".to_owned(), "x".into());
	map.insert("tags".to_owned(), vec!["a".into(), "b".into(), "c".into()].into());
	map
}

#[test]
fn generic_tree_nests_containers() {
	let mut out = String::new();
	render_generic(&mut out, &GenericValue::Mapping(sample_map()), 0, 0, PrintOptions::default());
	assert_eq!(out, "{\n  name = \"x\"\n  tags =\n    [\n      \"a\"\n      \"b\"\n      \"c\"\n    ]\n}\n");
}

#[test]
fn long_sequences_and_strings_are_truncated() {
	let options = PrintOptions {
		max_items: 2,
		max_string_len: 3,
		..PrintOptions::default()
	};
	let mut out = String::new();
	render_generic(
		&mut out,
		&GenericValue::Sequence(vec!["abcdef".into(), "b".into(), "c".into()]),
		0,
		0,
		options,
	);
	assert_eq!(out, "[\n  \"abc...\"\n  \"b\"\n  ... 1 more\n]\n");
}

#[test]
fn depth_limit_collapses_nested_values() {
	let options = PrintOptions {
		max_print_depth: 1,
		..PrintOptions::default()
	};
	let mut out = String::new();
	render_generic(&mut out, &GenericValue::Mapping(sample_map()), 0, 0, options);
	assert!(out.contains("[... 3 items]"), "unexpected output: {out}");
}

#[test]
fn instance_tree_shows_type_and_fields() {
	let mut set = SchemaSet::new();
	set.insert(StructSchema::new("Named").field("name", FieldKind::String).field("count", FieldKind::Integer))
		.expect("insert");
	let out = from_generic_map(&sample_map(), "Named", &set, &PopulateOptions::default()).expect("populates");

	let mut text = String::new();
	render_instance(&mut text, &out.instance, 0, 0, PrintOptions::default());
	assert_eq!(text, "Named {\n  name = \"x\"\n  count = 0\n}\n");
}
