use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::bridge::reflect::{AsField, Unreadable};
use crate::bridge::{FieldRef, Reflect};

struct Point {
	x: i32,
	label: Option<String>,
}

impl Reflect for Point {
	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> Result<(), Unreadable> {
		visit("x", self.x.as_field());
		visit("label", self.label.as_field());
		Ok(())
	}
}

fn field_names(value: &dyn Reflect) -> Result<Vec<String>, Unreadable> {
	let mut names = Vec::new();
	value.visit_fields(&mut |name, _| names.push(name.to_owned()))?;
	Ok(names)
}

#[test]
fn visits_fields_in_declaration_order() {
	let point = Point { x: 1, label: None };
	assert_eq!(field_names(&point).expect("readable"), vec!["x", "label"]);
}

#[test]
fn default_type_name_is_rust_path() {
	let point = Point { x: 1, label: None };
	assert!(point.type_name().ends_with("Point"));
}

#[test]
fn refcell_reports_inner_type_name() {
	let cell = RefCell::new(Point { x: 1, label: None });
	assert!(Reflect::type_name(&cell).ends_with("Point"));
}

#[test]
fn mutably_borrowed_refcell_is_unreadable() {
	let cell = RefCell::new(Point { x: 1, label: None });
	let _guard = cell.borrow_mut();
	let err = field_names(&cell).expect_err("borrow conflict");
	assert!(err.0.contains("mutably borrowed"));
}

#[test]
fn option_none_is_null_view() {
	let value: Option<String> = None;
	assert!(matches!(value.as_field(), FieldRef::Null));
	let value = Some("a".to_owned());
	assert!(matches!(value.as_field(), FieldRef::Str("a")));
}

#[test]
fn containers_produce_nested_views() {
	let items = vec![1_i64, 2, 3];
	let FieldRef::Seq(views) = items.as_field() else {
		panic!("expected sequence view");
	};
	assert_eq!(views.len(), 3);
	assert!(views.iter().all(FieldRef::is_primitive));

	let mut map = BTreeMap::new();
	map.insert("k".to_owned(), "v".to_owned());
	let FieldRef::Map(entries) = map.as_field() else {
		panic!("expected map view");
	};
	assert_eq!(entries.len(), 1);
	assert_eq!(entries[0].0, "k");
}
