use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Errors that surface to callers of the converter.
///
/// Field-level problems are normally recovered locally and logged; only conditions
/// where no meaningful result can be produced are reported through this type.
#[derive(Debug, Error)]
pub enum BridgeError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON serialization failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Requested schema name is not registered.
	#[error("schema not found: {name}")]
	SchemaNotFound {
		/// Requested schema name.
		name: String,
	},
	/// Two schemas were registered under the same name.
	#[error("duplicate schema: {name}")]
	SchemaDuplicate {
		/// Conflicting schema name.
		name: String,
	},
	/// One schema declares the same field twice.
	#[error("duplicate field {field} in schema {schema}")]
	SchemaDuplicateField {
		/// Schema declaring the field.
		schema: String,
		/// Repeated field name.
		field: String,
	},
	/// A nested object field refers to a schema that is not registered.
	#[error("schema {schema} field {field} refers to unknown schema {target}")]
	SchemaUnresolvedObject {
		/// Schema declaring the field.
		schema: String,
		/// Field carrying the reference.
		field: String,
		/// Unresolved target schema name.
		target: String,
	},
	/// Strict population met a value whose tag does not match the declared kind.
	#[error("type mismatch in {schema}.{field}: expected {expected}, got {got}")]
	PopulateTypeMismatch {
		/// Schema being populated.
		schema: String,
		/// Offending field.
		field: String,
		/// Declared field kind.
		expected: &'static str,
		/// Runtime value tag.
		got: &'static str,
	},
	/// Nested population exceeded the configured depth.
	#[error("populate depth exceeded (max={max_depth})")]
	PopulateDepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// A required entity field was absent or zero-valued.
	#[error("missing field {field} on {entity}")]
	MissingField {
		/// Entity being read.
		entity: &'static str,
		/// Missing field name.
		field: &'static str,
	},
	/// A numeric enum field carried a value with no matching variant.
	#[error("unknown {kind} value {value}")]
	UnknownDiscriminant {
		/// Enum being decoded.
		kind: &'static str,
		/// Offending raw value.
		value: i64,
	},
	/// A string enum field carried a label with no matching variant.
	#[error("unknown {kind} label {value:?}")]
	UnknownLabel {
		/// Enum being decoded.
		kind: &'static str,
		/// Offending label.
		value: String,
	},
	/// A content type name is reserved or already registered.
	#[error("content type {name} cannot be registered: {reason}")]
	ContentTypeRejected {
		/// Rejected type name.
		name: String,
		/// Why registration failed.
		reason: &'static str,
	},
}
