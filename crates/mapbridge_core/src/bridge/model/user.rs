use std::collections::BTreeMap;

use crate::bridge::model::{EntityCodec, FromInstance, optional_str, required_str};
use crate::bridge::{AsField, BridgeError, FieldKind, FieldRef, Instance, Reflect, Result, StructSchema, TypedValue, Unreadable};

/// Public profile of a user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserInfo {
	/// Stable user id.
	pub user_id: String,
	/// Display name.
	pub nickname: String,
	/// Avatar URL.
	pub avatar: String,
	/// Application-defined string attributes.
	pub extra: BTreeMap<String, String>,
	/// Last profile update, milliseconds since the epoch.
	pub updated_time: i64,
}

impl Reflect for UserInfo {
	fn type_name(&self) -> &'static str {
		"UserInfo"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> std::result::Result<(), Unreadable> {
		visit("userId", self.user_id.as_field());
		visit("nickname", self.nickname.as_field());
		visit("avatar", self.avatar.as_field());
		if !self.extra.is_empty() {
			visit("extra", self.extra.as_field());
		}
		visit("updatedTime", self.updated_time.as_field());
		Ok(())
	}
}

impl AsField for UserInfo {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

impl FromInstance for UserInfo {
	const SCHEMA: &'static str = "UserInfo";

	fn schema() -> StructSchema {
		StructSchema::new(Self::SCHEMA)
			.field("userId", FieldKind::String)
			.field("nickname", FieldKind::String)
			.field("avatar", FieldKind::String)
			.field("extra", FieldKind::map(FieldKind::String))
			.field("updatedTime", FieldKind::Long)
	}

	fn from_instance(instance: &Instance, _codec: &EntityCodec) -> Result<Self> {
		let extra = instance
			.get_map("extra")
			.map(|entries| {
				entries
					.iter()
					.filter_map(|(key, value)| match value {
						TypedValue::String(text) => Some((key.clone(), text.clone())),
						_ => None,
					})
					.collect()
			})
			.unwrap_or_default();

		Ok(Self {
			user_id: required_str(instance, Self::SCHEMA, "userId")?,
			nickname: optional_str(instance, "nickname").unwrap_or_default(),
			avatar: optional_str(instance, "avatar").unwrap_or_default(),
			extra,
			updated_time: instance.get_i64("updatedTime").unwrap_or_default(),
		})
	}
}

/// Who a mention addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionType {
	/// No mention.
	Default,
	/// Everyone in the conversation.
	All,
	/// The listed target users.
	Someone,
	/// Everyone, with the target users highlighted.
	AllAndSomeone,
}

impl MentionType {
	/// Wire discriminant.
	pub fn value(self) -> i32 {
		match self {
			Self::Default => 0,
			Self::All => 1,
			Self::Someone => 2,
			Self::AllAndSomeone => 3,
		}
	}

	/// Parse a wire discriminant.
	pub fn from_value(value: i32) -> Result<Self> {
		match value {
			0 => Ok(Self::Default),
			1 => Ok(Self::All),
			2 => Ok(Self::Someone),
			3 => Ok(Self::AllAndSomeone),
			other => Err(BridgeError::UnknownDiscriminant {
				kind: "MentionType",
				value: i64::from(other),
			}),
		}
	}
}

/// Mention attached to a message.
#[derive(Debug, Clone, PartialEq)]
pub struct MentionInfo {
	/// Mention kind.
	pub mention_type: MentionType,
	/// Users addressed by the mention.
	pub target_users: Vec<UserInfo>,
}

impl Reflect for MentionInfo {
	fn type_name(&self) -> &'static str {
		"MentionInfo"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> std::result::Result<(), Unreadable> {
		visit("type", FieldRef::I32(self.mention_type.value()));
		visit("targetUsers", self.target_users.as_field());
		Ok(())
	}
}

impl AsField for MentionInfo {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

impl FromInstance for MentionInfo {
	const SCHEMA: &'static str = "MentionInfo";

	fn schema() -> StructSchema {
		StructSchema::new(Self::SCHEMA)
			.field("type", FieldKind::Integer)
			.field("targetUsers", FieldKind::sequence(FieldKind::object(UserInfo::SCHEMA)))
	}

	fn from_instance(instance: &Instance, codec: &EntityCodec) -> Result<Self> {
		Ok(Self {
			mention_type: MentionType::from_value(instance.get_i32("type").unwrap_or_default())?,
			target_users: objects(instance, "targetUsers", codec)?,
		})
	}
}

/// Read receipt counters of a group message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupMessageReadInfo {
	/// Members that have read the message.
	pub read_count: i32,
	/// Members of the group.
	pub member_count: i32,
}

impl Reflect for GroupMessageReadInfo {
	fn type_name(&self) -> &'static str {
		"GroupMessageReadInfo"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> std::result::Result<(), Unreadable> {
		visit("readCount", self.read_count.as_field());
		visit("memberCount", self.member_count.as_field());
		Ok(())
	}
}

impl AsField for GroupMessageReadInfo {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

impl FromInstance for GroupMessageReadInfo {
	const SCHEMA: &'static str = "GroupMessageReadInfo";

	fn schema() -> StructSchema {
		StructSchema::new(Self::SCHEMA)
			.field("readCount", FieldKind::Integer)
			.field("memberCount", FieldKind::Integer)
	}

	fn from_instance(instance: &Instance, _codec: &EntityCodec) -> Result<Self> {
		Ok(Self {
			read_count: instance.get_i32("readCount").unwrap_or_default(),
			member_count: instance.get_i32("memberCount").unwrap_or_default(),
		})
	}
}

/// Read every nested object of a sequence field as `T`.
pub(crate) fn objects<T: FromInstance>(instance: &Instance, field: &str, codec: &EntityCodec) -> Result<Vec<T>> {
	let Some(items) = instance.get_sequence(field) else {
		return Ok(Vec::new());
	};
	items
		.iter()
		.filter_map(|item| match item {
			TypedValue::Object(nested) => Some(T::from_instance(nested, codec)),
			_ => None,
		})
		.collect()
}

/// Read an optional nested user profile.
pub(crate) fn optional_user(instance: &Instance, field: &str, codec: &EntityCodec) -> Result<Option<UserInfo>> {
	instance.get_object(field).map(|nested| UserInfo::from_instance(nested, codec)).transpose()
}
