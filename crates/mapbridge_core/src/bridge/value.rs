use std::collections::BTreeMap;

use serde::Serialize;

/// String-keyed mapping crossing the bridge. Receivers look values up by key only.
pub type GenericMap = BTreeMap<String, GenericValue>;

/// Any value that can cross the bridge boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GenericValue {
	/// Explicit null marker.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// The single numeric kind; every integer and float width is widened to this.
	Number(f64),
	/// UTF-8 string scalar.
	String(String),
	/// Ordered sequence of values.
	Sequence(Vec<GenericValue>),
	/// Nested string-keyed mapping.
	Mapping(GenericMap),
}

impl GenericValue {
	/// Short label of the runtime tag, used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "Null",
			Self::Bool(_) => "Bool",
			Self::Number(_) => "Number",
			Self::String(_) => "String",
			Self::Sequence(_) => "Sequence",
			Self::Mapping(_) => "Mapping",
		}
	}

	/// True for the explicit null marker.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Borrow the string payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(value),
			_ => None,
		}
	}

	/// Read the numeric payload.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Number(value) => Some(*value),
			_ => None,
		}
	}

	/// Read the boolean payload.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Borrow the sequence payload.
	pub fn as_sequence(&self) -> Option<&[GenericValue]> {
		match self {
			Self::Sequence(items) => Some(items),
			_ => None,
		}
	}

	/// Borrow the mapping payload.
	pub fn as_mapping(&self) -> Option<&GenericMap> {
		match self {
			Self::Mapping(map) => Some(map),
			_ => None,
		}
	}
}

impl From<bool> for GenericValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<f64> for GenericValue {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<i32> for GenericValue {
	fn from(value: i32) -> Self {
		Self::Number(f64::from(value))
	}
}

impl From<&str> for GenericValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<String> for GenericValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<GenericMap> for GenericValue {
	fn from(value: GenericMap) -> Self {
		Self::Mapping(value)
	}
}

impl From<Vec<GenericValue>> for GenericValue {
	fn from(value: Vec<GenericValue>) -> Self {
		Self::Sequence(value)
	}
}
