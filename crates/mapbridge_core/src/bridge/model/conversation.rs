use crate::bridge::model::user::objects;
use crate::bridge::model::{EntityCodec, FromInstance, Message, MentionType, optional_str, required_object, required_str};
use crate::bridge::{AsField, BridgeError, FieldKind, FieldRef, Instance, Reflect, Result, StructSchema, Unreadable};

/// Kind of conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversationType {
	/// One-to-one conversation.
	Private,
	/// Group conversation.
	Group,
	/// Chatroom.
	Chatroom,
	/// System notifications.
	System,
}

impl ConversationType {
	/// Wire discriminant.
	pub fn value(self) -> i32 {
		match self {
			Self::Private => 1,
			Self::Group => 2,
			Self::Chatroom => 3,
			Self::System => 4,
		}
	}

	/// Parse a wire discriminant.
	pub fn from_value(value: i32) -> Result<Self> {
		match value {
			1 => Ok(Self::Private),
			2 => Ok(Self::Group),
			3 => Ok(Self::Chatroom),
			4 => Ok(Self::System),
			other => Err(BridgeError::UnknownDiscriminant {
				kind: "ConversationType",
				value: i64::from(other),
			}),
		}
	}
}

/// Conversation identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Conversation {
	/// Kind of conversation.
	pub conversation_type: ConversationType,
	/// Peer user id, group id, or chatroom id depending on the kind.
	pub conversation_id: String,
}

impl Conversation {
	/// Conversation of `conversation_type` with `conversation_id`.
	pub fn new(conversation_type: ConversationType, conversation_id: impl Into<String>) -> Self {
		Self {
			conversation_type,
			conversation_id: conversation_id.into(),
		}
	}
}

impl Reflect for Conversation {
	fn type_name(&self) -> &'static str {
		"Conversation"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> std::result::Result<(), Unreadable> {
		visit("conversationType", FieldRef::I32(self.conversation_type.value()));
		visit("conversationId", self.conversation_id.as_field());
		Ok(())
	}
}

impl AsField for Conversation {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

impl FromInstance for Conversation {
	const SCHEMA: &'static str = "Conversation";

	fn schema() -> StructSchema {
		StructSchema::new(Self::SCHEMA)
			.field("conversationType", FieldKind::Integer)
			.field("conversationId", FieldKind::String)
	}

	fn from_instance(instance: &Instance, _codec: &EntityCodec) -> Result<Self> {
		// An absent type populates as zero, which is not a valid discriminant either.
		let conversation_type = match instance.get_i32("conversationType") {
			None | Some(0) => {
				return Err(BridgeError::MissingField {
					entity: Self::SCHEMA,
					field: "conversationType",
				});
			}
			Some(value) => ConversationType::from_value(value)?,
		};
		Ok(Self {
			conversation_type,
			conversation_id: required_str(instance, Self::SCHEMA, "conversationId")?,
		})
	}
}

/// Unread mention inside a conversation summary.
#[derive(Debug, Clone, PartialEq)]
pub struct MentionMsg {
	/// User that sent the mention.
	pub sender_id: String,
	/// Message carrying the mention.
	pub msg_id: String,
	/// Send time, milliseconds since the epoch.
	pub msg_time: i64,
	/// Mention kind.
	pub mention_type: MentionType,
}

impl Reflect for MentionMsg {
	fn type_name(&self) -> &'static str {
		"MentionMsg"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> std::result::Result<(), Unreadable> {
		visit("senderId", self.sender_id.as_field());
		visit("msgId", self.msg_id.as_field());
		visit("msgTime", self.msg_time.as_field());
		visit("type", FieldRef::I32(self.mention_type.value()));
		Ok(())
	}
}

impl AsField for MentionMsg {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

impl FromInstance for MentionMsg {
	const SCHEMA: &'static str = "MentionMsg";

	fn schema() -> StructSchema {
		StructSchema::new(Self::SCHEMA)
			.field("senderId", FieldKind::String)
			.field("msgId", FieldKind::String)
			.field("msgTime", FieldKind::Long)
			.field("type", FieldKind::Integer)
	}

	fn from_instance(instance: &Instance, _codec: &EntityCodec) -> Result<Self> {
		Ok(Self {
			sender_id: optional_str(instance, "senderId").unwrap_or_default(),
			msg_id: optional_str(instance, "msgId").unwrap_or_default(),
			msg_time: instance.get_i64("msgTime").unwrap_or_default(),
			mention_type: MentionType::from_value(instance.get_i32("type").unwrap_or_default())?,
		})
	}
}

/// Unread mentions of a conversation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationMentionInfo {
	/// Mentions not yet read.
	pub mention_msg_list: Vec<MentionMsg>,
}

impl Reflect for ConversationMentionInfo {
	fn type_name(&self) -> &'static str {
		"ConversationMentionInfo"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> std::result::Result<(), Unreadable> {
		visit("mentionMsgList", self.mention_msg_list.as_field());
		Ok(())
	}
}

impl AsField for ConversationMentionInfo {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

impl FromInstance for ConversationMentionInfo {
	const SCHEMA: &'static str = "ConversationMentionInfo";

	fn schema() -> StructSchema {
		StructSchema::new(Self::SCHEMA).field("mentionMsgList", FieldKind::sequence(FieldKind::object(MentionMsg::SCHEMA)))
	}

	fn from_instance(instance: &Instance, codec: &EntityCodec) -> Result<Self> {
		Ok(Self {
			mention_msg_list: objects(instance, "mentionMsgList", codec)?,
		})
	}
}

/// Conversation list entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationInfo {
	/// Conversation identity.
	pub conversation: Conversation,
	/// Unread message count.
	pub unread_count: i32,
	/// Pinned to the top of the list.
	pub is_top: bool,
	/// Notifications muted.
	pub is_mute: bool,
	/// Explicitly marked unread.
	pub has_unread: bool,
	/// Unsent draft text.
	pub draft: String,
	/// Time the conversation was pinned.
	pub top_time: i64,
	/// Ordering key of the list.
	pub sort_time: i64,
	/// Most recent message.
	pub last_message: Option<Box<Message>>,
	/// Unread mentions.
	pub mention_info: Option<ConversationMentionInfo>,
}

impl Reflect for ConversationInfo {
	fn type_name(&self) -> &'static str {
		"ConversationInfo"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> std::result::Result<(), Unreadable> {
		visit("conversation", self.conversation.as_field());
		visit("unreadCount", self.unread_count.as_field());
		visit("isTop", self.is_top.as_field());
		visit("isMute", self.is_mute.as_field());
		visit("hasUnread", self.has_unread.as_field());
		visit("draft", self.draft.as_field());
		visit("topTime", self.top_time.as_field());
		visit("sortTime", self.sort_time.as_field());
		visit("lastMessage", self.last_message.as_field());
		visit("mentionInfo", self.mention_info.as_field());
		Ok(())
	}
}

impl AsField for ConversationInfo {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

impl FromInstance for ConversationInfo {
	const SCHEMA: &'static str = "ConversationInfo";

	fn schema() -> StructSchema {
		StructSchema::new(Self::SCHEMA)
			.field("conversation", FieldKind::object(Conversation::SCHEMA))
			.field("unreadCount", FieldKind::Integer)
			.field("isTop", FieldKind::Boolean)
			.field("isMute", FieldKind::Boolean)
			.field("hasUnread", FieldKind::Boolean)
			.field("draft", FieldKind::String)
			.field("topTime", FieldKind::Long)
			.field("sortTime", FieldKind::Long)
			.field("lastMessage", FieldKind::object(Message::SCHEMA))
			.field("mentionInfo", FieldKind::object(ConversationMentionInfo::SCHEMA))
	}

	fn from_instance(instance: &Instance, codec: &EntityCodec) -> Result<Self> {
		let conversation = Conversation::from_instance(required_object(instance, Self::SCHEMA, "conversation")?, codec)?;
		let last_message = match instance.get_object("lastMessage") {
			Some(nested) => Some(Box::new(Message::from_instance(nested, codec)?)),
			None => None,
		};
		let mention_info = match instance.get_object("mentionInfo") {
			Some(nested) => Some(ConversationMentionInfo::from_instance(nested, codec)?),
			None => None,
		};

		Ok(Self {
			conversation,
			unread_count: instance.get_i32("unreadCount").unwrap_or_default(),
			is_top: instance.get_bool("isTop").unwrap_or_default(),
			is_mute: instance.get_bool("isMute").unwrap_or_default(),
			has_unread: instance.get_bool("hasUnread").unwrap_or_default(),
			draft: optional_str(instance, "draft").unwrap_or_default(),
			top_time: instance.get_i64("topTime").unwrap_or_default(),
			sort_time: instance.get_i64("sortTime").unwrap_or_default(),
			last_message,
			mention_info,
		})
	}
}
