use crate::bridge::model::user::objects;
use crate::bridge::model::{EntityCodec, FromInstance, UserInfo, required_str};
use crate::bridge::{AsField, FieldKind, FieldRef, Instance, Reflect, Result, StructSchema, Unreadable};

/// Users that reacted to a message with one reaction.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageReactionItem {
	/// Reaction id, such as an emoji code.
	pub reaction_id: String,
	/// Users that reacted.
	pub user_info_list: Vec<UserInfo>,
}

impl Reflect for MessageReactionItem {
	fn type_name(&self) -> &'static str {
		"MessageReactionItem"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> std::result::Result<(), Unreadable> {
		visit("reactionId", self.reaction_id.as_field());
		visit("userInfoList", self.user_info_list.as_field());
		Ok(())
	}
}

impl AsField for MessageReactionItem {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

impl FromInstance for MessageReactionItem {
	const SCHEMA: &'static str = "MessageReactionItem";

	fn schema() -> StructSchema {
		StructSchema::new(Self::SCHEMA)
			.field("reactionId", FieldKind::String)
			.field("userInfoList", FieldKind::sequence(FieldKind::object(UserInfo::SCHEMA)))
	}

	fn from_instance(instance: &Instance, codec: &EntityCodec) -> Result<Self> {
		Ok(Self {
			reaction_id: required_str(instance, Self::SCHEMA, "reactionId")?,
			user_info_list: objects(instance, "userInfoList", codec)?,
		})
	}
}

/// Every reaction currently attached to one message.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageReaction {
	/// Message the reactions belong to.
	pub message_id: String,
	/// One entry per reaction id.
	pub item_list: Vec<MessageReactionItem>,
}

impl Reflect for MessageReaction {
	fn type_name(&self) -> &'static str {
		"MessageReaction"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> std::result::Result<(), Unreadable> {
		visit("messageId", self.message_id.as_field());
		visit("itemList", self.item_list.as_field());
		Ok(())
	}
}

impl AsField for MessageReaction {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

impl FromInstance for MessageReaction {
	const SCHEMA: &'static str = "MessageReaction";

	fn schema() -> StructSchema {
		StructSchema::new(Self::SCHEMA)
			.field("messageId", FieldKind::String)
			.field("itemList", FieldKind::sequence(FieldKind::object(MessageReactionItem::SCHEMA)))
	}

	fn from_instance(instance: &Instance, codec: &EntityCodec) -> Result<Self> {
		Ok(Self {
			message_id: required_str(instance, Self::SCHEMA, "messageId")?,
			item_list: objects(instance, "itemList", codec)?,
		})
	}
}
