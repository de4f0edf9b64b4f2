use tracing::{debug, warn};

use crate::bridge::coerce::{widen_f32, widen_i32, widen_i64};
use crate::bridge::reflect::Unreadable;
use crate::bridge::{FieldRef, GenericMap, GenericValue, Reflect};

/// Runtime limits for object walking.
#[derive(Debug, Clone)]
pub struct WalkOptions {
	/// Maximum number of nested objects on the active path. Deeper objects become empty mappings.
	pub max_depth: u32,
}

impl Default for WalkOptions {
	fn default() -> Self {
		Self { max_depth: 64 }
	}
}

impl WalkOptions {
	/// Preset for event payloads, which never nest deeply.
	pub fn for_events() -> Self {
		Self { max_depth: 16 }
	}
}

/// Identity of one object during a walk: its address plus its type label.
///
/// The type label keeps a struct distinct from a by-value first field stored at the same address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId {
	addr: usize,
	type_name: &'static str,
}

impl ObjectId {
	/// Identity of a borrowed object.
	pub fn of(value: &dyn Reflect) -> Self {
		Self {
			addr: value as *const dyn Reflect as *const () as usize,
			type_name: value.type_name(),
		}
	}
}

/// Objects on the current recursion path of one walk.
///
/// An identity is pushed on entry and popped on exit, so an object shared by two
/// sibling fields is converted both times while a true cycle is cut.
#[derive(Debug, Default)]
pub struct VisitPath {
	stack: Vec<ObjectId>,
}

impl VisitPath {
	/// Empty path for a top-level call.
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether `id` is already on the active path.
	pub fn contains(&self, id: ObjectId) -> bool {
		self.stack.contains(&id)
	}

	/// Push `id`. Returns false, leaving the path untouched, when `id` is already present.
	pub fn enter(&mut self, id: ObjectId) -> bool {
		if self.contains(id) {
			return false;
		}
		self.stack.push(id);
		true
	}

	/// Pop `id` when leaving the object it identifies.
	pub fn leave(&mut self, id: ObjectId) {
		if let Some(pos) = self.stack.iter().rposition(|item| *item == id) {
			self.stack.truncate(pos);
		}
	}

	/// Number of objects on the active path.
	pub fn depth(&self) -> usize {
		self.stack.len()
	}

	/// True when no object is being walked.
	pub fn is_empty(&self) -> bool {
		self.stack.is_empty()
	}
}

/// Convert an object to a generic map with default limits.
pub fn to_generic_map(value: Option<&dyn Reflect>) -> GenericMap {
	to_generic_map_with(value, &WalkOptions::default())
}

/// Convert an object to a generic map.
pub fn to_generic_map_with(value: Option<&dyn Reflect>, options: &WalkOptions) -> GenericMap {
	let mut visited = VisitPath::new();
	to_generic_map_guarded(value, &mut visited, options)
}

/// Convert an object to a generic map using a caller-maintained cycle guard.
///
/// Null input, cycles, and unreadable objects all yield an empty mapping; this never fails.
pub fn to_generic_map_guarded(value: Option<&dyn Reflect>, visited: &mut VisitPath, options: &WalkOptions) -> GenericMap {
	let Some(value) = value else {
		return GenericMap::new();
	};

	match walk_object(value, visited, options) {
		Ok(map) => map,
		Err(Unreadable(reason)) => {
			warn!(object = value.type_name(), %reason, "object unreadable, returning empty map");
			GenericMap::new()
		}
	}
}

fn walk_object(value: &dyn Reflect, visited: &mut VisitPath, options: &WalkOptions) -> Result<GenericMap, Unreadable> {
	let owner = value.type_name();
	if visited.depth() >= options.max_depth as usize {
		warn!(object = owner, max_depth = options.max_depth, "walk depth exceeded, truncating");
		return Ok(GenericMap::new());
	}

	let id = ObjectId::of(value);
	if !visited.enter(id) {
		debug!(object = owner, "cycle detected, truncating");
		return Ok(GenericMap::new());
	}

	let mut map = GenericMap::new();
	let outcome = value.visit_fields(&mut |name, field| {
		if let Some(item) = convert_field(owner, name, field, visited, options) {
			map.insert(name.to_owned(), item);
		}
	});
	visited.leave(id);

	outcome.map(|()| map)
}

fn convert_field(owner: &str, name: &str, field: FieldRef<'_>, visited: &mut VisitPath, options: &WalkOptions) -> Option<GenericValue> {
	match field {
		FieldRef::Null => None,
		FieldRef::Bool(value) => Some(GenericValue::Bool(value)),
		FieldRef::I32(value) => Some(GenericValue::Number(widen_i32(value))),
		FieldRef::I64(value) => Some(GenericValue::Number(widen_i64(value))),
		FieldRef::F32(value) => Some(GenericValue::Number(widen_f32(value))),
		FieldRef::F64(value) => Some(GenericValue::Number(value)),
		FieldRef::Str(value) => Some(GenericValue::String(value.to_owned())),
		FieldRef::Generic(value) => Some(value.clone()),
		FieldRef::Seq(items) => {
			let mut out = Vec::with_capacity(items.len());
			for item in items {
				if let Some(value) = convert_field(owner, name, item, visited, options) {
					out.push(value);
				}
			}
			Some(GenericValue::Sequence(out))
		}
		FieldRef::Map(entries) => {
			let mut out = GenericMap::new();
			for (key, item) in entries {
				if let Some(value) = convert_field(owner, name, item, visited, options) {
					out.insert(key.to_owned(), value);
				}
			}
			Some(GenericValue::Mapping(out))
		}
		FieldRef::Object(nested) => match walk_object(nested, visited, options) {
			Ok(map) => Some(GenericValue::Mapping(map)),
			Err(Unreadable(reason)) => {
				warn!(object = owner, field = name, %reason, "field unreadable, omitted");
				None
			}
		},
		FieldRef::Unreadable(reason) => {
			warn!(object = owner, field = name, %reason, "field unreadable, omitted");
			None
		}
	}
}

#[cfg(test)]
mod tests;
