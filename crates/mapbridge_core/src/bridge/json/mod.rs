use serde_json::{Map, Number, Value};
use tracing::warn;

use crate::bridge::coerce::exact_integer;
use crate::bridge::{GenericMap, GenericValue, Result};

/// Output switches for the map to JSON direction.
#[derive(Debug, Clone)]
pub struct JsonOptions {
	/// Write integral numbers inside the exact `f64` range without a fractional part.
	pub integral_numbers: bool,
	/// Indent the output.
	pub pretty: bool,
}

impl Default for JsonOptions {
	fn default() -> Self {
		Self {
			integral_numbers: true,
			pretty: false,
		}
	}
}

impl JsonOptions {
	/// Preset for human-facing output.
	pub fn pretty() -> Self {
		Self {
			pretty: true,
			..Self::default()
		}
	}
}

/// Parse JSON text into a generic map.
///
/// Missing or empty text, malformed JSON, and non-object documents all yield an empty map.
pub fn json_text_to_generic_map(text: Option<&str>) -> GenericMap {
	let Some(text) = text.filter(|item| !item.is_empty()) else {
		return GenericMap::new();
	};

	match serde_json::from_str::<Value>(text) {
		Ok(Value::Object(object)) => object_to_generic(&object),
		Ok(other) => {
			warn!(kind = json_kind(&other), "json document is not an object, returning empty map");
			GenericMap::new()
		}
		Err(err) => {
			warn!(error = %err, "malformed json, returning empty map");
			GenericMap::new()
		}
	}
}

/// Decode UTF-8 bytes as JSON text and parse them into a generic map.
pub fn json_bytes_to_generic_map(bytes: &[u8]) -> GenericMap {
	match std::str::from_utf8(bytes) {
		Ok(text) => json_text_to_generic_map(Some(text)),
		Err(err) => {
			warn!(error = %err, len = bytes.len(), "payload is not utf-8, returning empty map");
			GenericMap::new()
		}
	}
}

/// Convert a parsed JSON value. Explicit JSON nulls are preserved.
pub fn json_value_to_generic(value: &Value) -> GenericValue {
	match value {
		Value::Null => GenericValue::Null,
		Value::Bool(flag) => GenericValue::Bool(*flag),
		Value::Number(number) => number.as_f64().map_or(GenericValue::Null, GenericValue::Number),
		Value::String(text) => GenericValue::String(text.clone()),
		Value::Array(items) => GenericValue::Sequence(items.iter().map(json_value_to_generic).collect()),
		Value::Object(object) => GenericValue::Mapping(object_to_generic(object)),
	}
}

fn object_to_generic(object: &Map<String, Value>) -> GenericMap {
	object.iter().map(|(key, value)| (key.clone(), json_value_to_generic(value))).collect()
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// Serialize a generic map to JSON text.
pub fn generic_map_to_json_text(map: &GenericMap, options: &JsonOptions) -> Result<String> {
	let value = map_to_json(map, options);
	let text = if options.pretty {
		serde_json::to_string_pretty(&value)?
	} else {
		serde_json::to_string(&value)?
	};
	Ok(text)
}

/// Serialize a generic map to UTF-8 JSON bytes, the form custom message payloads are stored in.
pub fn generic_map_to_json_bytes(map: &GenericMap, options: &JsonOptions) -> Result<Vec<u8>> {
	Ok(generic_map_to_json_text(map, options)?.into_bytes())
}

fn map_to_json(map: &GenericMap, options: &JsonOptions) -> Value {
	Value::Object(map.iter().map(|(key, value)| (key.clone(), generic_to_json(value, options))).collect())
}

fn generic_to_json(value: &GenericValue, options: &JsonOptions) -> Value {
	match value {
		GenericValue::Null => Value::Null,
		GenericValue::Bool(flag) => Value::Bool(*flag),
		GenericValue::Number(number) => number_to_json(*number, options),
		GenericValue::String(text) => Value::String(text.clone()),
		GenericValue::Sequence(items) => Value::Array(items.iter().map(|item| generic_to_json(item, options)).collect()),
		GenericValue::Mapping(map) => map_to_json(map, options),
	}
}

fn number_to_json(number: f64, options: &JsonOptions) -> Value {
	if options.integral_numbers
		&& let Some(integer) = exact_integer(number)
	{
		return Value::Number(Number::from(integer));
	}
	// JSON has no encoding for NaN or infinities.
	Number::from_f64(number).map_or(Value::Null, Value::Number)
}

#[cfg(test)]
mod tests;
