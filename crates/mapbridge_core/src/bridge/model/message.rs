use tracing::warn;

use crate::bridge::model::{EntityCodec, FromInstance, GroupMessageReadInfo, MentionInfo, optional_str, required_object};
use crate::bridge::{
	AsField, BridgeError, Conversation, FieldKind, FieldRef, GenericMap, Instance, Reflect, Result, StructSchema, Unreadable, json_bytes_to_generic_map,
};

/// Content type name of plain text messages.
pub const TEXT_TYPE: &str = "jg:text";
/// Content type name of image messages.
pub const IMAGE_TYPE: &str = "jg:img";
/// Content type name of file messages.
pub const FILE_TYPE: &str = "jg:file";
/// Content type name of voice messages.
pub const VOICE_TYPE: &str = "jg:voice";

/// Whether a message was sent or received by the local user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageDirection {
	/// Sent by the local user.
	Send,
	/// Received from someone else.
	Receive,
}

impl MessageDirection {
	/// Wire discriminant.
	pub fn value(self) -> i32 {
		match self {
			Self::Send => 1,
			Self::Receive => 2,
		}
	}

	/// Parse a wire discriminant; zero means unset.
	pub fn from_value(value: i32) -> Result<Option<Self>> {
		match value {
			0 => Ok(None),
			1 => Ok(Some(Self::Send)),
			2 => Ok(Some(Self::Receive)),
			other => Err(BridgeError::UnknownDiscriminant {
				kind: "MessageDirection",
				value: i64::from(other),
			}),
		}
	}
}

/// Delivery state of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageState {
	/// Waiting for the server acknowledgement.
	Sending,
	/// Acknowledged by the server.
	Sent,
	/// Delivery failed.
	Fail,
	/// Media upload in progress.
	Uploading,
}

impl MessageState {
	/// Wire discriminant.
	pub fn value(self) -> i32 {
		match self {
			Self::Sending => 1,
			Self::Sent => 2,
			Self::Fail => 3,
			Self::Uploading => 4,
		}
	}

	/// Parse a wire discriminant; zero means unset.
	pub fn from_value(value: i32) -> Result<Option<Self>> {
		match value {
			0 => Ok(None),
			1 => Ok(Some(Self::Sending)),
			2 => Ok(Some(Self::Sent)),
			3 => Ok(Some(Self::Fail)),
			4 => Ok(Some(Self::Uploading)),
			other => Err(BridgeError::UnknownDiscriminant {
				kind: "MessageState",
				value: i64::from(other),
			}),
		}
	}
}

/// Typed message body, selected by `contentType`.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageContent {
	/// `jg:text`.
	Text {
		/// Message text.
		content: String,
	},
	/// `jg:img`.
	Image {
		/// Remote image URL.
		url: Option<String>,
		/// Local image file.
		local_path: Option<String>,
		/// Local thumbnail file.
		thumbnail_local_path: Option<String>,
		/// Remote thumbnail URL.
		thumbnail_url: Option<String>,
		/// Width in pixels.
		width: i32,
		/// Height in pixels.
		height: i32,
	},
	/// `jg:file`.
	File {
		/// Remote file URL.
		url: Option<String>,
		/// Local file path.
		local_path: Option<String>,
		/// File name.
		name: String,
		/// File type label.
		file_type: Option<String>,
		/// Size in bytes.
		size: i64,
	},
	/// `jg:voice`.
	Voice {
		/// Remote audio URL.
		url: Option<String>,
		/// Local audio file.
		local_path: Option<String>,
		/// Duration in seconds.
		duration: i32,
	},
	/// Registered custom type whose body travels as UTF-8 JSON bytes.
	Custom {
		/// Registered type name.
		content_type: String,
		/// UTF-8 JSON object.
		data: Vec<u8>,
	},
	/// Type the bridge does not know, kept in generic form.
	Unknown {
		/// Declared type name.
		content_type: String,
		/// Remaining content fields.
		fields: GenericMap,
	},
}

impl MessageContent {
	/// Text content.
	pub fn text(content: impl Into<String>) -> Self {
		Self::Text { content: content.into() }
	}

	/// Declared `contentType` name.
	pub fn content_type(&self) -> &str {
		match self {
			Self::Text { .. } => TEXT_TYPE,
			Self::Image { .. } => IMAGE_TYPE,
			Self::File { .. } => FILE_TYPE,
			Self::Voice { .. } => VOICE_TYPE,
			Self::Custom { content_type, .. } | Self::Unknown { content_type, .. } => content_type,
		}
	}
}

impl Reflect for MessageContent {
	fn type_name(&self) -> &'static str {
		"MessageContent"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> std::result::Result<(), Unreadable> {
		match self {
			Self::Text { content } => {
				visit("content", content.as_field());
			}
			Self::Image {
				url,
				local_path,
				thumbnail_local_path,
				thumbnail_url,
				width,
				height,
			} => {
				visit("url", url.as_field());
				visit("localPath", local_path.as_field());
				visit("thumbnailLocalPath", thumbnail_local_path.as_field());
				visit("thumbnailUrl", thumbnail_url.as_field());
				visit("width", width.as_field());
				visit("height", height.as_field());
			}
			Self::File {
				url,
				local_path,
				name,
				file_type,
				size,
			} => {
				visit("url", url.as_field());
				visit("localPath", local_path.as_field());
				visit("name", name.as_field());
				visit("type", file_type.as_field());
				visit("size", size.as_field());
			}
			Self::Voice { url, local_path, duration } => {
				visit("url", url.as_field());
				visit("localPath", local_path.as_field());
				visit("duration", duration.as_field());
			}
			Self::Custom { content_type, data } => {
				let fields = json_bytes_to_generic_map(data);
				if fields.is_empty() && !data.is_empty() {
					warn!(content_type = content_type.as_str(), "custom content is not a json object");
				}
				visit_present(&fields, visit);
			}
			Self::Unknown { fields, .. } => visit_present(fields, visit),
		}
		// Emitted last so a stray payload key cannot override it.
		visit("contentType", FieldRef::Str(self.content_type()));
		Ok(())
	}
}

// Explicit nulls are dropped like any other absent field.
fn visit_present(fields: &GenericMap, visit: &mut dyn FnMut(&str, FieldRef<'_>)) {
	for (key, value) in fields {
		if !value.is_null() {
			visit(key.as_str(), value.as_field());
		}
	}
}

impl AsField for MessageContent {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

/// Chat message.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
	/// Server-assigned id, empty until acknowledged.
	pub message_id: String,
	/// Client-side sequence number.
	pub client_msg_no: i64,
	/// Send time, milliseconds since the epoch.
	pub timestamp: i64,
	/// Sender user id.
	pub sender_user_id: String,
	/// Conversation the message belongs to.
	pub conversation: Conversation,
	/// Message body.
	pub content: MessageContent,
	/// Sent or received.
	pub direction: Option<MessageDirection>,
	/// Delivery state.
	pub state: Option<MessageState>,
	/// Read by the local user.
	pub has_read: bool,
	/// Deleted locally.
	pub is_delete: bool,
	/// Edited after sending.
	pub is_edit: bool,
	/// Read receipts for group messages.
	pub group_message_read_info: Option<GroupMessageReadInfo>,
	/// Quoted message.
	pub referred_message: Option<Box<Message>>,
	/// Mention attached to the message.
	pub mention_info: Option<MentionInfo>,
	/// Local-only attribute string.
	pub local_attribute: Option<String>,
}

impl Message {
	/// Unsent message with default flags.
	pub fn new(conversation: Conversation, content: MessageContent) -> Self {
		Self {
			message_id: String::new(),
			client_msg_no: 0,
			timestamp: 0,
			sender_user_id: String::new(),
			conversation,
			content,
			direction: None,
			state: None,
			has_read: false,
			is_delete: false,
			is_edit: false,
			group_message_read_info: None,
			referred_message: None,
			mention_info: None,
			local_attribute: None,
		}
	}
}

impl Reflect for Message {
	fn type_name(&self) -> &'static str {
		"Message"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> std::result::Result<(), Unreadable> {
		visit("messageId", self.message_id.as_field());
		visit("clientMsgNo", self.client_msg_no.as_field());
		visit("timestamp", self.timestamp.as_field());
		visit("senderUserId", self.sender_user_id.as_field());
		visit("conversation", self.conversation.as_field());
		visit("content", self.content.as_field());
		visit("direction", self.direction.map_or(FieldRef::Null, |item| FieldRef::I32(item.value())));
		visit("state", self.state.map_or(FieldRef::Null, |item| FieldRef::I32(item.value())));
		visit("hasRead", self.has_read.as_field());
		visit("isDelete", self.is_delete.as_field());
		visit("isEdit", self.is_edit.as_field());
		visit("groupMessageReadInfo", self.group_message_read_info.as_field());
		visit("referredMessage", self.referred_message.as_field());
		visit("mentionInfo", self.mention_info.as_field());
		visit("localAttribute", self.local_attribute.as_field());
		Ok(())
	}
}

impl AsField for Message {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

impl FromInstance for Message {
	const SCHEMA: &'static str = "Message";

	fn schema() -> StructSchema {
		StructSchema::new(Self::SCHEMA)
			.field("messageId", FieldKind::String)
			.field("clientMsgNo", FieldKind::Long)
			.field("timestamp", FieldKind::Long)
			.field("senderUserId", FieldKind::String)
			.field("conversation", FieldKind::object(Conversation::SCHEMA))
			.field("content", FieldKind::Any)
			.field("direction", FieldKind::Integer)
			.field("state", FieldKind::Integer)
			.field("hasRead", FieldKind::Boolean)
			.field("isDelete", FieldKind::Boolean)
			.field("isEdit", FieldKind::Boolean)
			.field("groupMessageReadInfo", FieldKind::object(GroupMessageReadInfo::SCHEMA))
			.field("referredMessage", FieldKind::object(Self::SCHEMA))
			.field("mentionInfo", FieldKind::object(MentionInfo::SCHEMA))
			.field("localAttribute", FieldKind::String)
	}

	fn from_instance(instance: &Instance, codec: &EntityCodec) -> Result<Self> {
		let conversation = Conversation::from_instance(required_object(instance, Self::SCHEMA, "conversation")?, codec)?;
		let Some(content) = instance.get_generic("content").and_then(|value| value.as_mapping()) else {
			return Err(BridgeError::MissingField {
				entity: Self::SCHEMA,
				field: "content",
			});
		};
		let content = codec.content_from_map(content)?;

		let group_message_read_info = match instance.get_object("groupMessageReadInfo") {
			Some(nested) => Some(GroupMessageReadInfo::from_instance(nested, codec)?),
			None => None,
		};
		let referred_message = match instance.get_object("referredMessage") {
			Some(nested) => Some(Box::new(Self::from_instance(nested, codec)?)),
			None => None,
		};
		let mention_info = match instance.get_object("mentionInfo") {
			Some(nested) => Some(MentionInfo::from_instance(nested, codec)?),
			None => None,
		};

		Ok(Self {
			message_id: optional_str(instance, "messageId").unwrap_or_default(),
			client_msg_no: instance.get_i64("clientMsgNo").unwrap_or_default(),
			timestamp: instance.get_i64("timestamp").unwrap_or_default(),
			sender_user_id: optional_str(instance, "senderUserId").unwrap_or_default(),
			conversation,
			content,
			direction: MessageDirection::from_value(instance.get_i32("direction").unwrap_or_default())?,
			state: MessageState::from_value(instance.get_i32("state").unwrap_or_default())?,
			has_read: instance.get_bool("hasRead").unwrap_or_default(),
			is_delete: instance.get_bool("isDelete").unwrap_or_default(),
			is_edit: instance.get_bool("isEdit").unwrap_or_default(),
			group_message_read_info,
			referred_message,
			mention_info,
			local_attribute: optional_str(instance, "localAttribute"),
		})
	}
}
