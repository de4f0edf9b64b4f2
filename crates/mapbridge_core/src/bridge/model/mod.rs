mod call;
mod conversation;
mod message;
mod moment;
mod reaction;
mod user;

use tracing::warn;

pub use call::{CallFinishReason, CallInfo, CallMediaType, CallMember, CallSession, CallStatus};
pub use conversation::{Conversation, ConversationInfo, ConversationMentionInfo, ConversationType, MentionMsg};
pub use message::{FILE_TYPE, IMAGE_TYPE, Message, MessageContent, MessageDirection, MessageState, TEXT_TYPE, VOICE_TYPE};
pub use moment::{Moment, MomentComment, MomentMedia, MomentMediaType, MomentReaction};
pub use reaction::{MessageReaction, MessageReactionItem};
pub use user::{GroupMessageReadInfo, MentionInfo, MentionType, UserInfo};

use crate::bridge::{
	BridgeError, ContentRegistry, FieldKind, GenericMap, GenericValue, Instance, JsonOptions, PopulateOptions, Reflect, Result, SchemaSet, StructSchema,
	WalkOptions, from_generic_map, generic_map_to_json_bytes, to_generic_map_with,
};

/// Entity that can be read back from a populated instance of its schema.
pub trait FromInstance: Sized {
	/// Name of the schema describing this entity.
	const SCHEMA: &'static str;

	/// Structural descriptor of this entity.
	fn schema() -> StructSchema;

	/// Build the entity from an instance populated with [`Self::schema`].
	fn from_instance(instance: &Instance, codec: &EntityCodec) -> Result<Self>;
}

/// Every entity schema the bridge knows about.
pub(crate) fn builtin_schemas() -> Vec<StructSchema> {
	vec![
		Conversation::schema(),
		ConversationInfo::schema(),
		ConversationMentionInfo::schema(),
		MentionMsg::schema(),
		UserInfo::schema(),
		MentionInfo::schema(),
		GroupMessageReadInfo::schema(),
		Message::schema(),
		MessageReaction::schema(),
		MessageReactionItem::schema(),
		CallMember::schema(),
		CallSession::schema(),
		CallInfo::schema(),
		MomentMedia::schema(),
		MomentComment::schema(),
		MomentReaction::schema(),
		Moment::schema(),
		StructSchema::new("TextMessage").field("content", FieldKind::String),
		StructSchema::new("ImageMessage")
			.field("url", FieldKind::String)
			.field("localPath", FieldKind::String)
			.field("thumbnailLocalPath", FieldKind::String)
			.field("thumbnailUrl", FieldKind::String)
			.field("width", FieldKind::Integer)
			.field("height", FieldKind::Integer),
		StructSchema::new("FileMessage")
			.field("url", FieldKind::String)
			.field("localPath", FieldKind::String)
			.field("name", FieldKind::String)
			.field("type", FieldKind::String)
			.field("size", FieldKind::Long),
		StructSchema::new("VoiceMessage")
			.field("url", FieldKind::String)
			.field("localPath", FieldKind::String)
			.field("duration", FieldKind::Integer),
	]
}

/// Converts well-known entities to and from generic maps.
///
/// Holds the schema set and the content registry; both are fixed once constructed.
#[derive(Debug, Clone)]
pub struct EntityCodec {
	schemas: SchemaSet,
	registry: ContentRegistry,
	populate: PopulateOptions,
	walk: WalkOptions,
}

impl EntityCodec {
	/// Codec over the builtin schemas with default limits.
	pub fn new(registry: ContentRegistry) -> Self {
		Self {
			schemas: SchemaSet::builtin(),
			registry,
			populate: PopulateOptions::default(),
			walk: WalkOptions::default(),
		}
	}

	/// Replace the population and walk limits.
	pub fn with_options(mut self, populate: PopulateOptions, walk: WalkOptions) -> Self {
		self.populate = populate;
		self.walk = walk;
		self
	}

	/// Schema set used for inbound conversion.
	pub fn schemas(&self) -> &SchemaSet {
		&self.schemas
	}

	/// Registered custom content types.
	pub fn registry(&self) -> &ContentRegistry {
		&self.registry
	}

	/// Walk options used for outbound conversion.
	pub fn walk_options(&self) -> &WalkOptions {
		&self.walk
	}

	/// Convert an outbound entity to a generic map.
	pub fn write(&self, value: &dyn Reflect) -> GenericMap {
		to_generic_map_with(Some(value), &self.walk)
	}

	/// Read an inbound entity from a generic map.
	pub fn read<T: FromInstance>(&self, map: &GenericMap) -> Result<T> {
		let instance = self.populate(map, T::SCHEMA)?;
		T::from_instance(&instance, self)
	}

	fn populate(&self, map: &GenericMap, schema: &str) -> Result<Instance> {
		let populated = from_generic_map(map, schema, &self.schemas, &self.populate)?;
		if !populated.is_complete() {
			warn!(schema, mismatches = populated.mismatches.len(), "entity populated with skipped fields");
		}
		Ok(populated.instance)
	}

	/// Read message content from its generic map form.
	///
	/// Registered custom types keep the whole map as UTF-8 JSON bytes; unregistered types are
	/// kept as a generic map.
	pub fn content_from_map(&self, map: &GenericMap) -> Result<MessageContent> {
		let content_type = match map.get("contentType").and_then(GenericValue::as_str) {
			Some(name) if !name.is_empty() => name,
			_ => {
				return Err(BridgeError::MissingField {
					entity: "MessageContent",
					field: "contentType",
				});
			}
		};

		match content_type {
			TEXT_TYPE => {
				let item = self.populate(map, "TextMessage")?;
				Ok(MessageContent::Text {
					content: item.get_str("content").unwrap_or_default().to_owned(),
				})
			}
			IMAGE_TYPE => {
				let item = self.populate(map, "ImageMessage")?;
				Ok(MessageContent::Image {
					url: optional_str(&item, "url"),
					local_path: optional_str(&item, "localPath"),
					thumbnail_local_path: optional_str(&item, "thumbnailLocalPath"),
					thumbnail_url: optional_str(&item, "thumbnailUrl"),
					width: item.get_i32("width").unwrap_or_default(),
					height: item.get_i32("height").unwrap_or_default(),
				})
			}
			FILE_TYPE => {
				let item = self.populate(map, "FileMessage")?;
				Ok(MessageContent::File {
					url: optional_str(&item, "url"),
					local_path: optional_str(&item, "localPath"),
					name: item.get_str("name").unwrap_or_default().to_owned(),
					file_type: optional_str(&item, "type"),
					size: item.get_i64("size").unwrap_or_default(),
				})
			}
			VOICE_TYPE => {
				let item = self.populate(map, "VoiceMessage")?;
				Ok(MessageContent::Voice {
					url: optional_str(&item, "url"),
					local_path: optional_str(&item, "localPath"),
					duration: item.get_i32("duration").unwrap_or_default(),
				})
			}
			name if self.registry.is_custom(name) => Ok(MessageContent::Custom {
				content_type: name.to_owned(),
				data: generic_map_to_json_bytes(map, &JsonOptions::default())?,
			}),
			name => {
				warn!(content_type = name, "unregistered content type kept as generic map");
				let mut fields = map.clone();
				fields.remove("contentType");
				Ok(MessageContent::Unknown {
					content_type: name.to_owned(),
					fields,
				})
			}
		}
	}
}

pub(crate) fn optional_str(instance: &Instance, field: &str) -> Option<String> {
	instance.get_str(field).filter(|value| !value.is_empty()).map(str::to_owned)
}

pub(crate) fn required_str(instance: &Instance, entity: &'static str, field: &'static str) -> Result<String> {
	optional_str(instance, field).ok_or(BridgeError::MissingField { entity, field })
}

pub(crate) fn required_object<'a>(instance: &'a Instance, entity: &'static str, field: &'static str) -> Result<&'a Instance> {
	instance.get_object(field).ok_or(BridgeError::MissingField { entity, field })
}
