use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

use crate::bridge::coerce::narrow_number;
use crate::bridge::{BridgeError, FieldKind, GenericMap, GenericValue, Result, SchemaSet, StructSchema};

/// Runtime limits and mismatch policy for population.
#[derive(Debug, Clone)]
pub struct PopulateOptions {
	/// Maximum nested object depth.
	pub max_depth: u32,
	/// Fail the whole conversion on the first type mismatch instead of skipping the field.
	pub strict: bool,
}

impl Default for PopulateOptions {
	fn default() -> Self {
		Self { max_depth: 32, strict: false }
	}
}

impl PopulateOptions {
	/// Preset that rejects any mismatched field.
	pub fn strict() -> Self {
		Self {
			strict: true,
			..Self::default()
		}
	}
}

/// Field value of a populated instance, typed by the schema.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
	/// Absent nested object, sequence, mapping, or `Any` value.
	Null,
	/// String field.
	String(String),
	/// 32-bit integer field.
	I32(i32),
	/// 64-bit integer field.
	I64(i64),
	/// 32-bit float field.
	F32(f32),
	/// 64-bit float field.
	F64(f64),
	/// Boolean field.
	Bool(bool),
	/// Nested object field.
	Object(Instance),
	/// Sequence field.
	Sequence(Vec<TypedValue>),
	/// String-keyed mapping field.
	Map(BTreeMap<String, TypedValue>),
	/// `Any` field kept in bridge form.
	Generic(GenericValue),
}

impl TypedValue {
	/// Zero value for a declared kind.
	pub fn zero(kind: &FieldKind) -> Self {
		match kind {
			FieldKind::String => Self::String(String::new()),
			FieldKind::Integer => Self::I32(0),
			FieldKind::Long => Self::I64(0),
			FieldKind::Float => Self::F32(0.0),
			FieldKind::Double => Self::F64(0.0),
			FieldKind::Boolean => Self::Bool(false),
			FieldKind::Object(_) | FieldKind::Sequence(_) | FieldKind::Map(_) | FieldKind::Any => Self::Null,
		}
	}
}

impl Serialize for TypedValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::Null => serializer.serialize_none(),
			Self::String(value) => serializer.serialize_str(value),
			Self::I32(value) => serializer.serialize_i32(*value),
			Self::I64(value) => serializer.serialize_i64(*value),
			Self::F32(value) => serializer.serialize_f32(*value),
			Self::F64(value) => serializer.serialize_f64(*value),
			Self::Bool(value) => serializer.serialize_bool(*value),
			Self::Object(value) => value.serialize(serializer),
			Self::Sequence(items) => items.serialize(serializer),
			Self::Map(entries) => entries.serialize(serializer),
			Self::Generic(value) => value.serialize(serializer),
		}
	}
}

/// Named field of a populated instance.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceField {
	/// Field name from the schema.
	pub name: Box<str>,
	/// Populated or zero value.
	pub value: TypedValue,
}

/// Object populated from a generic map, with one entry per schema field.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
	/// Schema name.
	pub type_name: Box<str>,
	/// Fields in schema declaration order.
	pub fields: Vec<InstanceField>,
}

impl Instance {
	/// Fresh instance with every field at its zero value.
	pub fn zeroed(schema: &StructSchema) -> Self {
		Self {
			type_name: schema.name.clone(),
			fields: schema
				.fields
				.iter()
				.map(|field| InstanceField {
					name: field.name.clone(),
					value: TypedValue::zero(&field.kind),
				})
				.collect(),
		}
	}

	/// Look up a field value.
	pub fn get(&self, name: &str) -> Option<&TypedValue> {
		self.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value)
	}

	fn set(&mut self, name: &str, value: TypedValue) {
		if let Some(field) = self.fields.iter_mut().find(|field| field.name.as_ref() == name) {
			field.value = value;
		}
	}

	/// String field value.
	pub fn get_str(&self, name: &str) -> Option<&str> {
		match self.get(name)? {
			TypedValue::String(value) => Some(value),
			_ => None,
		}
	}

	/// 32-bit integer field value.
	pub fn get_i32(&self, name: &str) -> Option<i32> {
		match self.get(name)? {
			TypedValue::I32(value) => Some(*value),
			_ => None,
		}
	}

	/// 64-bit integer field value.
	pub fn get_i64(&self, name: &str) -> Option<i64> {
		match self.get(name)? {
			TypedValue::I64(value) => Some(*value),
			_ => None,
		}
	}

	/// 32-bit float field value.
	pub fn get_f32(&self, name: &str) -> Option<f32> {
		match self.get(name)? {
			TypedValue::F32(value) => Some(*value),
			_ => None,
		}
	}

	/// 64-bit float field value.
	pub fn get_f64(&self, name: &str) -> Option<f64> {
		match self.get(name)? {
			TypedValue::F64(value) => Some(*value),
			_ => None,
		}
	}

	/// Boolean field value.
	pub fn get_bool(&self, name: &str) -> Option<bool> {
		match self.get(name)? {
			TypedValue::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Nested object field value.
	pub fn get_object(&self, name: &str) -> Option<&Instance> {
		match self.get(name)? {
			TypedValue::Object(value) => Some(value),
			_ => None,
		}
	}

	/// Sequence field value.
	pub fn get_sequence(&self, name: &str) -> Option<&[TypedValue]> {
		match self.get(name)? {
			TypedValue::Sequence(items) => Some(items),
			_ => None,
		}
	}

	/// Mapping field value.
	pub fn get_map(&self, name: &str) -> Option<&BTreeMap<String, TypedValue>> {
		match self.get(name)? {
			TypedValue::Map(entries) => Some(entries),
			_ => None,
		}
	}

	/// `Any` field value.
	pub fn get_generic(&self, name: &str) -> Option<&GenericValue> {
		match self.get(name)? {
			TypedValue::Generic(value) => Some(value),
			_ => None,
		}
	}
}

impl Serialize for Instance {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.fields.len()))?;
		for field in &self.fields {
			map.serialize_entry(field.name.as_ref(), &field.value)?;
		}
		map.end()
	}
}

/// One inbound value that did not match its declared kind and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMismatch {
	/// Dotted path from the root schema, with `[i]` for sequence elements.
	pub path: String,
	/// Declared kind label.
	pub expected: &'static str,
	/// Runtime value tag.
	pub got: &'static str,
}

/// Population output: the instance plus every field that was skipped.
#[derive(Debug, Clone)]
pub struct Populated {
	/// Populated instance.
	pub instance: Instance,
	/// Mismatched values left at their zero value.
	pub mismatches: Vec<FieldMismatch>,
}

impl Populated {
	/// True when every inbound value matched its declared kind.
	pub fn is_complete(&self) -> bool {
		self.mismatches.is_empty()
	}
}

struct PopulateCtx<'a> {
	schemas: &'a SchemaSet,
	options: &'a PopulateOptions,
	mismatches: Vec<FieldMismatch>,
}

/// Populate a fresh instance of `schema_name` from `map`.
///
/// Unknown keys are skipped. Mismatched values stay at their zero value and are listed in
/// [`Populated::mismatches`], unless [`PopulateOptions::strict`] is set. Fails only when the
/// target, or a nested object target, cannot be constructed.
pub fn from_generic_map(map: &GenericMap, schema_name: &str, schemas: &SchemaSet, options: &PopulateOptions) -> Result<Populated> {
	let schema = schemas.require(schema_name)?;
	let mut ctx = PopulateCtx {
		schemas,
		options,
		mismatches: Vec::new(),
	};
	let instance = populate_struct(&mut ctx, map, schema, schema.name.as_ref(), 0)?;
	Ok(Populated {
		instance,
		mismatches: ctx.mismatches,
	})
}

fn populate_struct(ctx: &mut PopulateCtx<'_>, map: &GenericMap, schema: &StructSchema, path: &str, depth: u32) -> Result<Instance> {
	if depth >= ctx.options.max_depth {
		return Err(BridgeError::PopulateDepthExceeded {
			max_depth: ctx.options.max_depth,
		});
	}

	let mut instance = Instance::zeroed(schema);
	for (key, value) in map {
		let Some(field) = schema.get(key) else {
			debug!(schema = schema.name.as_ref(), key = key.as_str(), "unknown key skipped");
			continue;
		};
		if value.is_null() {
			continue;
		}

		let field_path = format!("{path}.{key}");
		if let Some(typed) = coerce_value(ctx, value, &field.kind, schema, key, &field_path, depth)? {
			instance.set(key, typed);
		}
	}

	Ok(instance)
}

fn coerce_value(
	ctx: &mut PopulateCtx<'_>,
	value: &GenericValue,
	kind: &FieldKind,
	owner: &StructSchema,
	field: &str,
	path: &str,
	depth: u32,
) -> Result<Option<TypedValue>> {
	let typed = match (kind, value) {
		(FieldKind::Any, _) => TypedValue::Generic(value.clone()),
		(FieldKind::String, GenericValue::String(text)) => TypedValue::String(text.clone()),
		(FieldKind::Boolean, GenericValue::Bool(flag)) => TypedValue::Bool(*flag),
		(_, GenericValue::Number(number)) if kind.is_numeric() => match narrow_number(*number, kind) {
			Some(typed) => typed,
			None => return mismatch(ctx, path, kind, value),
		},
		(FieldKind::Object(target), GenericValue::Mapping(nested)) => {
			let schemas = ctx.schemas;
			let Some(target_schema) = schemas.get(target) else {
				return Err(BridgeError::SchemaUnresolvedObject {
					schema: owner.name.to_string(),
					field: field.to_owned(),
					target: target.to_string(),
				});
			};
			TypedValue::Object(populate_struct(ctx, nested, target_schema, path, depth + 1)?)
		}
		(FieldKind::Sequence(element), GenericValue::Sequence(items)) => {
			let mut out = Vec::with_capacity(items.len());
			for (idx, item) in items.iter().enumerate() {
				let item_path = format!("{path}[{idx}]");
				match item {
					GenericValue::Null => {}
					GenericValue::Sequence(_) if !matches!(**element, FieldKind::Any) => {
						mismatch(ctx, &item_path, element, item)?;
					}
					_ => {
						if let Some(typed) = coerce_value(ctx, item, element, owner, field, &item_path, depth)? {
							out.push(typed);
						}
					}
				}
			}
			TypedValue::Sequence(out)
		}
		(FieldKind::Map(entry), GenericValue::Mapping(entries)) => {
			let mut out = BTreeMap::new();
			for (key, item) in entries {
				if item.is_null() {
					continue;
				}
				let item_path = format!("{path}.{key}");
				if let Some(typed) = coerce_value(ctx, item, entry, owner, field, &item_path, depth)? {
					out.insert(key.clone(), typed);
				}
			}
			TypedValue::Map(out)
		}
		_ => return mismatch(ctx, path, kind, value),
	};

	Ok(Some(typed))
}

fn mismatch(ctx: &mut PopulateCtx<'_>, path: &str, kind: &FieldKind, value: &GenericValue) -> Result<Option<TypedValue>> {
	if ctx.options.strict {
		let (schema, field) = path.split_once('.').unwrap_or((path, ""));
		return Err(BridgeError::PopulateTypeMismatch {
			schema: schema.to_owned(),
			field: field.to_owned(),
			expected: kind.label(),
			got: value.kind(),
		});
	}

	warn!(path, expected = kind.label(), got = value.kind(), "type mismatch, field left at zero value");
	ctx.mismatches.push(FieldMismatch {
		path: path.to_owned(),
		expected: kind.label(),
		got: value.kind(),
	});
	Ok(None)
}
