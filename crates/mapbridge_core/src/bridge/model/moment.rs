use crate::bridge::model::user::{objects, optional_user};
use crate::bridge::model::{EntityCodec, FromInstance, UserInfo, optional_str, required_object, required_str};
use crate::bridge::{AsField, BridgeError, FieldKind, FieldRef, Instance, Reflect, Result, StructSchema, Unreadable};

/// Kind of media attached to a moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MomentMediaType {
	/// Still image.
	Image,
	/// Video clip.
	Video,
}

impl MomentMediaType {
	/// Wire label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Image => "image",
			Self::Video => "video",
		}
	}

	/// Parse a wire label.
	pub fn parse(label: &str) -> Result<Self> {
		match label {
			"image" => Ok(Self::Image),
			"video" => Ok(Self::Video),
			other => Err(BridgeError::UnknownLabel {
				kind: "MomentMediaType",
				value: other.to_owned(),
			}),
		}
	}
}

/// Image or video attached to a moment.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentMedia {
	/// Image or video.
	pub media_type: MomentMediaType,
	/// Remote media URL.
	pub url: String,
	/// Thumbnail URL.
	pub snapshot_url: Option<String>,
	/// Width in pixels.
	pub width: i32,
	/// Height in pixels.
	pub height: i32,
	/// Duration in seconds; zero for images.
	pub duration: i32,
}

impl Reflect for MomentMedia {
	fn type_name(&self) -> &'static str {
		"MomentMedia"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> std::result::Result<(), Unreadable> {
		visit("type", FieldRef::Str(self.media_type.as_str()));
		visit("url", self.url.as_field());
		visit("snapshotUrl", self.snapshot_url.as_field());
		visit("width", self.width.as_field());
		visit("height", self.height.as_field());
		visit("duration", self.duration.as_field());
		Ok(())
	}
}

impl AsField for MomentMedia {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

impl FromInstance for MomentMedia {
	const SCHEMA: &'static str = "MomentMedia";

	fn schema() -> StructSchema {
		StructSchema::new(Self::SCHEMA)
			.field("type", FieldKind::String)
			.field("url", FieldKind::String)
			.field("snapshotUrl", FieldKind::String)
			.field("width", FieldKind::Integer)
			.field("height", FieldKind::Integer)
			.field("duration", FieldKind::Integer)
	}

	fn from_instance(instance: &Instance, _codec: &EntityCodec) -> Result<Self> {
		let label = required_str(instance, Self::SCHEMA, "type")?;
		Ok(Self {
			media_type: MomentMediaType::parse(&label)?,
			url: optional_str(instance, "url").unwrap_or_default(),
			snapshot_url: optional_str(instance, "snapshotUrl"),
			width: instance.get_i32("width").unwrap_or_default(),
			height: instance.get_i32("height").unwrap_or_default(),
			duration: instance.get_i32("duration").unwrap_or_default(),
		})
	}
}

/// Comment on a moment, optionally replying to another comment.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentComment {
	/// Comment id.
	pub comment_id: String,
	/// Moment the comment belongs to.
	pub moment_id: String,
	/// Comment this one replies to.
	pub parent_comment_id: Option<String>,
	/// Comment text.
	pub content: String,
	/// Author.
	pub user_info: UserInfo,
	/// Author of the parent comment.
	pub parent_user_info: Option<UserInfo>,
	/// Creation time, milliseconds since the epoch.
	pub create_time: i64,
}

impl Reflect for MomentComment {
	fn type_name(&self) -> &'static str {
		"MomentComment"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> std::result::Result<(), Unreadable> {
		visit("commentId", self.comment_id.as_field());
		visit("momentId", self.moment_id.as_field());
		visit("parentCommentId", self.parent_comment_id.as_field());
		visit("content", self.content.as_field());
		visit("userInfo", self.user_info.as_field());
		visit("parentUserInfo", self.parent_user_info.as_field());
		visit("createTime", self.create_time.as_field());
		Ok(())
	}
}

impl AsField for MomentComment {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

impl FromInstance for MomentComment {
	const SCHEMA: &'static str = "MomentComment";

	fn schema() -> StructSchema {
		StructSchema::new(Self::SCHEMA)
			.field("commentId", FieldKind::String)
			.field("momentId", FieldKind::String)
			.field("parentCommentId", FieldKind::String)
			.field("content", FieldKind::String)
			.field("userInfo", FieldKind::object(UserInfo::SCHEMA))
			.field("parentUserInfo", FieldKind::object(UserInfo::SCHEMA))
			.field("createTime", FieldKind::Long)
	}

	fn from_instance(instance: &Instance, codec: &EntityCodec) -> Result<Self> {
		Ok(Self {
			comment_id: required_str(instance, Self::SCHEMA, "commentId")?,
			moment_id: optional_str(instance, "momentId").unwrap_or_default(),
			parent_comment_id: optional_str(instance, "parentCommentId"),
			content: optional_str(instance, "content").unwrap_or_default(),
			user_info: UserInfo::from_instance(required_object(instance, Self::SCHEMA, "userInfo")?, codec)?,
			parent_user_info: optional_user(instance, "parentUserInfo", codec)?,
			create_time: instance.get_i64("createTime").unwrap_or_default(),
		})
	}
}

/// Users that reacted to a moment with the same reaction key.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentReaction {
	/// Reaction key, such as an emoji code.
	pub key: String,
	/// Users that reacted.
	pub user_list: Vec<UserInfo>,
}

impl Reflect for MomentReaction {
	fn type_name(&self) -> &'static str {
		"MomentReaction"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> std::result::Result<(), Unreadable> {
		visit("key", self.key.as_field());
		visit("userList", self.user_list.as_field());
		Ok(())
	}
}

impl AsField for MomentReaction {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

impl FromInstance for MomentReaction {
	const SCHEMA: &'static str = "MomentReaction";

	fn schema() -> StructSchema {
		StructSchema::new(Self::SCHEMA)
			.field("key", FieldKind::String)
			.field("userList", FieldKind::sequence(FieldKind::object(UserInfo::SCHEMA)))
	}

	fn from_instance(instance: &Instance, codec: &EntityCodec) -> Result<Self> {
		Ok(Self {
			key: required_str(instance, Self::SCHEMA, "key")?,
			user_list: objects(instance, "userList", codec)?,
		})
	}
}

/// Post on a user's moment feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Moment {
	/// Moment id.
	pub moment_id: String,
	/// Post text.
	pub content: String,
	/// Author.
	pub user_info: UserInfo,
	/// Creation time, milliseconds since the epoch.
	pub create_time: i64,
	/// Attached media, in display order.
	pub media_list: Vec<MomentMedia>,
	/// Comments, oldest first.
	pub comment_list: Vec<MomentComment>,
	/// Reactions grouped by key.
	pub reaction_list: Vec<MomentReaction>,
}

impl Reflect for Moment {
	fn type_name(&self) -> &'static str {
		"Moment"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> std::result::Result<(), Unreadable> {
		visit("momentId", self.moment_id.as_field());
		visit("content", self.content.as_field());
		visit("userInfo", self.user_info.as_field());
		visit("createTime", self.create_time.as_field());
		visit("mediaList", self.media_list.as_field());
		visit("commentList", self.comment_list.as_field());
		visit("reactionList", self.reaction_list.as_field());
		Ok(())
	}
}

impl AsField for Moment {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

impl FromInstance for Moment {
	const SCHEMA: &'static str = "Moment";

	fn schema() -> StructSchema {
		StructSchema::new(Self::SCHEMA)
			.field("momentId", FieldKind::String)
			.field("content", FieldKind::String)
			.field("userInfo", FieldKind::object(UserInfo::SCHEMA))
			.field("createTime", FieldKind::Long)
			.field("mediaList", FieldKind::sequence(FieldKind::object(MomentMedia::SCHEMA)))
			.field("commentList", FieldKind::sequence(FieldKind::object(MomentComment::SCHEMA)))
			.field("reactionList", FieldKind::sequence(FieldKind::object(MomentReaction::SCHEMA)))
	}

	fn from_instance(instance: &Instance, codec: &EntityCodec) -> Result<Self> {
		Ok(Self {
			moment_id: required_str(instance, Self::SCHEMA, "momentId")?,
			content: optional_str(instance, "content").unwrap_or_default(),
			user_info: UserInfo::from_instance(required_object(instance, Self::SCHEMA, "userInfo")?, codec)?,
			create_time: instance.get_i64("createTime").unwrap_or_default(),
			media_list: objects(instance, "mediaList", codec)?,
			comment_list: objects(instance, "commentList", codec)?,
			reaction_list: objects(instance, "reactionList", codec)?,
		})
	}
}
