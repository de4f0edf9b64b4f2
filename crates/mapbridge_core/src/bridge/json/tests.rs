use serde_json::json;

use crate::bridge::{
	GenericMap, GenericValue, JsonOptions, generic_map_to_json_bytes, generic_map_to_json_text, json_bytes_to_generic_map, json_text_to_generic_map,
	json_value_to_generic,
};

#[test]
fn empty_and_missing_text_yield_empty_map() {
	assert!(json_text_to_generic_map(None).is_empty());
	assert!(json_text_to_generic_map(Some("")).is_empty());
}

#[test]
fn malformed_json_yields_empty_map() {
	assert!(json_text_to_generic_map(Some("{not valid json")).is_empty());
}

#[test]
fn non_object_document_yields_empty_map() {
	assert!(json_text_to_generic_map(Some("[1, 2]")).is_empty());
	assert!(json_text_to_generic_map(Some("3")).is_empty());
}

#[test]
fn explicit_null_is_preserved() {
	let map = json_text_to_generic_map(Some(r#"{"name":"x","avatar":null}"#));
	assert_eq!(map.len(), 2);
	assert_eq!(map["name"], GenericValue::String("x".to_owned()));
	assert_eq!(map["avatar"], GenericValue::Null);
}

#[test]
fn nested_structures_and_numbers_convert() {
	let map = json_text_to_generic_map(Some(r#"{"n":1,"f":2.5,"big":9007199254740993,"ok":true,"list":[1,"a",null,[2]],"obj":{"k":"v"}}"#));
	assert_eq!(map["n"], GenericValue::Number(1.0));
	assert_eq!(map["f"], GenericValue::Number(2.5));
	assert_eq!(map["big"], GenericValue::Number(9_007_199_254_740_992.0));
	assert_eq!(map["ok"], GenericValue::Bool(true));
	assert_eq!(
		map["list"],
		GenericValue::Sequence(vec![
			GenericValue::Number(1.0),
			"a".into(),
			GenericValue::Null,
			GenericValue::Sequence(vec![GenericValue::Number(2.0)]),
		])
	);
	let obj = map["obj"].as_mapping().expect("nested object");
	assert_eq!(obj["k"], GenericValue::String("v".to_owned()));
}

#[test]
fn bytes_must_be_utf8() {
	assert_eq!(json_bytes_to_generic_map(br#"{"a":"b"}"#).len(), 1);
	assert!(json_bytes_to_generic_map(&[0x7b, 0xff, 0xfe, 0x7d]).is_empty());
}

#[test]
fn integral_numbers_are_written_without_fraction() {
	let mut map = GenericMap::new();
	map.insert("count".to_owned(), GenericValue::Number(3.0));
	map.insert("ratio".to_owned(), GenericValue::Number(0.5));
	map.insert("gone".to_owned(), GenericValue::Null);

	let text = generic_map_to_json_text(&map, &JsonOptions::default()).expect("serializes");
	assert_eq!(text, r#"{"count":3,"gone":null,"ratio":0.5}"#);

	let raw = JsonOptions {
		integral_numbers: false,
		..JsonOptions::default()
	};
	let text = generic_map_to_json_text(&map, &raw).expect("serializes");
	assert_eq!(text, r#"{"count":3.0,"gone":null,"ratio":0.5}"#);
}

#[test]
fn non_finite_numbers_become_null() {
	let mut map = GenericMap::new();
	map.insert("nan".to_owned(), GenericValue::Number(f64::NAN));
	map.insert("inf".to_owned(), GenericValue::Number(f64::INFINITY));
	let text = generic_map_to_json_text(&map, &JsonOptions::default()).expect("serializes");
	assert_eq!(text, r#"{"inf":null,"nan":null}"#);
}

#[test]
fn map_survives_text_round_trip() {
	let source = json!({
		"contentType": "app:card",
		"title": "hello",
		"count": 2,
		"items": [{"id": "a"}, {"id": "b"}],
		"note": null
	});
	let GenericValue::Mapping(map) = json_value_to_generic(&source) else {
		panic!("expected mapping");
	};

	let bytes = generic_map_to_json_bytes(&map, &JsonOptions::default()).expect("serializes");
	assert_eq!(json_bytes_to_generic_map(&bytes), map);

	let reparsed: serde_json::Value = serde_json::from_slice(&bytes).expect("valid json");
	assert_eq!(reparsed, source);
}
