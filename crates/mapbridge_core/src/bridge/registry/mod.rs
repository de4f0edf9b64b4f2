use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::bridge::{BridgeError, Result};

/// Type name used by generic custom content when no other name is given.
pub const DEFAULT_CUSTOM_TYPE: &str = "jgrn:custom";

const RESERVED_PREFIX: &str = "jg:";

/// Set of custom content type names, fixed once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentRegistry {
	custom: BTreeSet<Box<str>>,
}

impl ContentRegistry {
	/// Start collecting registrations.
	pub fn builder() -> ContentRegistryBuilder {
		ContentRegistryBuilder::default()
	}

	/// Registry holding only [`DEFAULT_CUSTOM_TYPE`].
	pub fn standard() -> Self {
		Self {
			custom: BTreeSet::from([Box::from(DEFAULT_CUSTOM_TYPE)]),
		}
	}

	/// True when `content_type` was registered as custom.
	pub fn is_custom(&self, content_type: &str) -> bool {
		self.custom.contains(content_type)
	}

	/// Registered names in lexical order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.custom.iter().map(AsRef::as_ref)
	}

	/// Number of registered names.
	pub fn len(&self) -> usize {
		self.custom.len()
	}

	/// True when nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.custom.is_empty()
	}
}

/// Collects custom content type names during initialization.
#[derive(Debug, Clone, Default)]
pub struct ContentRegistryBuilder {
	custom: BTreeSet<Box<str>>,
}

impl ContentRegistryBuilder {
	/// Register `content_type` as a custom content type.
	///
	/// Empty names and names in the builtin `jg:` namespace are rejected. Registering the same
	/// name twice is a no-op.
	pub fn register(&mut self, content_type: &str) -> Result<&mut Self> {
		if content_type.is_empty() {
			warn!("rejected empty custom content type");
			return Err(BridgeError::ContentTypeRejected {
				name: String::new(),
				reason: "name is empty",
			});
		}
		if content_type.starts_with(RESERVED_PREFIX) {
			warn!(content_type, "rejected custom content type in builtin namespace");
			return Err(BridgeError::ContentTypeRejected {
				name: content_type.to_owned(),
				reason: "the jg: prefix is reserved for builtin types",
			});
		}

		if !self.custom.insert(Box::from(content_type)) {
			debug!(content_type, "custom content type already registered");
		}
		Ok(self)
	}

	/// Freeze the registrations.
	pub fn build(self) -> ContentRegistry {
		ContentRegistry { custom: self.custom }
	}
}
