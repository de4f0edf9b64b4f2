use std::collections::HashMap;
use std::fmt;

use crate::bridge::model::builtin_schemas;
use crate::bridge::{BridgeError, Result};

/// Declared kind of one schema field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
	/// UTF-8 string.
	String,
	/// 32-bit signed integer.
	Integer,
	/// 64-bit signed integer.
	Long,
	/// 32-bit float.
	Float,
	/// 64-bit float.
	Double,
	/// Boolean.
	Boolean,
	/// Nested object described by the named schema.
	Object(Box<str>),
	/// Sequence whose elements have the given kind.
	Sequence(Box<FieldKind>),
	/// String-keyed mapping whose values have the given kind.
	Map(Box<FieldKind>),
	/// Any bridge value, kept as-is.
	Any,
}

impl FieldKind {
	/// Nested object kind referring to `schema`.
	pub fn object(schema: &str) -> Self {
		Self::Object(schema.into())
	}

	/// Sequence kind with `element` items.
	pub fn sequence(element: FieldKind) -> Self {
		Self::Sequence(Box::new(element))
	}

	/// Mapping kind with `value` entries.
	pub fn map(value: FieldKind) -> Self {
		Self::Map(Box::new(value))
	}

	/// True for the four numeric widths.
	pub fn is_numeric(&self) -> bool {
		matches!(self, Self::Integer | Self::Long | Self::Float | Self::Double)
	}

	/// Short label used in diagnostics.
	pub fn label(&self) -> &'static str {
		match self {
			Self::String => "String",
			Self::Integer => "Integer",
			Self::Long => "Long",
			Self::Float => "Float",
			Self::Double => "Double",
			Self::Boolean => "Boolean",
			Self::Object(_) => "Object",
			Self::Sequence(_) => "Sequence",
			Self::Map(_) => "Map",
			Self::Any => "Any",
		}
	}
}

impl fmt::Display for FieldKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::String => f.write_str("string"),
			Self::Integer => f.write_str("int"),
			Self::Long => f.write_str("long"),
			Self::Float => f.write_str("float"),
			Self::Double => f.write_str("double"),
			Self::Boolean => f.write_str("bool"),
			Self::Object(name) => write!(f, "{name}"),
			Self::Sequence(item) => write!(f, "[{item}]"),
			Self::Map(item) => write!(f, "{{string: {item}}}"),
			Self::Any => f.write_str("any"),
		}
	}
}

/// One named field of a structural schema.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
	/// Bridge key of the field.
	pub name: Box<str>,
	/// Declared kind.
	pub kind: FieldKind,
}

/// Structural type descriptor: ordered `(name, kind)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct StructSchema {
	/// Schema name, referenced by [`FieldKind::Object`].
	pub name: Box<str>,
	/// Fields in declaration order.
	pub fields: Vec<SchemaField>,
}

impl StructSchema {
	/// Empty schema named `name`.
	pub fn new(name: &str) -> Self {
		Self {
			name: name.into(),
			fields: Vec::new(),
		}
	}

	/// Append a field.
	pub fn field(mut self, name: &str, kind: FieldKind) -> Self {
		self.fields.push(SchemaField { name: name.into(), kind });
		self
	}

	/// Look up a field by name.
	pub fn get(&self, name: &str) -> Option<&SchemaField> {
		self.fields.iter().find(|field| field.name.as_ref() == name)
	}
}

/// Named schemas that nested object fields resolve against.
#[derive(Debug, Default, Clone)]
pub struct SchemaSet {
	structs: Vec<StructSchema>,
	by_name: HashMap<Box<str>, usize>,
}

impl SchemaSet {
	/// Empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Schemas for every well-known bridge entity.
	pub fn builtin() -> Self {
		let mut set = Self::new();
		for schema in builtin_schemas() {
			set.push(schema);
		}
		set
	}

	/// Register a schema, rejecting duplicate names and duplicate fields.
	pub fn insert(&mut self, schema: StructSchema) -> Result<()> {
		if self.by_name.contains_key(&schema.name) {
			return Err(BridgeError::SchemaDuplicate { name: schema.name.to_string() });
		}
		for (idx, field) in schema.fields.iter().enumerate() {
			if schema.fields[..idx].iter().any(|prior| prior.name == field.name) {
				return Err(BridgeError::SchemaDuplicateField {
					schema: schema.name.to_string(),
					field: field.name.to_string(),
				});
			}
		}
		self.push(schema);
		Ok(())
	}

	fn push(&mut self, schema: StructSchema) {
		self.by_name.insert(schema.name.clone(), self.structs.len());
		self.structs.push(schema);
	}

	/// Look up a schema by name.
	pub fn get(&self, name: &str) -> Option<&StructSchema> {
		self.by_name.get(name).and_then(|idx| self.structs.get(*idx))
	}

	/// Look up a schema by name, failing when it is not registered.
	pub fn require(&self, name: &str) -> Result<&StructSchema> {
		self.get(name).ok_or_else(|| BridgeError::SchemaNotFound { name: name.to_owned() })
	}

	/// Registered schemas in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &StructSchema> {
		self.structs.iter()
	}

	/// Number of registered schemas.
	pub fn len(&self) -> usize {
		self.structs.len()
	}

	/// True when nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.structs.is_empty()
	}

	/// Check that every nested object reference resolves.
	pub fn validate(&self) -> Result<()> {
		for schema in &self.structs {
			for field in &schema.fields {
				self.check_kind(schema, field, &field.kind)?;
			}
		}
		Ok(())
	}

	fn check_kind(&self, schema: &StructSchema, field: &SchemaField, kind: &FieldKind) -> Result<()> {
		match kind {
			FieldKind::Object(target) if self.get(target).is_none() => Err(BridgeError::SchemaUnresolvedObject {
				schema: schema.name.to_string(),
				field: field.name.to_string(),
				target: target.to_string(),
			}),
			FieldKind::Sequence(item) | FieldKind::Map(item) => self.check_kind(schema, field, item),
			_ => Ok(()),
		}
	}
}

#[cfg(test)]
mod tests;
