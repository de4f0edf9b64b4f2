use crate::bridge::model::user::{objects, optional_user};
use crate::bridge::model::{EntityCodec, FromInstance, UserInfo, optional_str, required_str};
use crate::bridge::{AsField, BridgeError, FieldKind, FieldRef, Instance, Reflect, Result, StructSchema, Unreadable};

/// Progress of a call, for the whole session or one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStatus {
	/// No call.
	Idle,
	/// Ringing on this device.
	Incoming,
	/// Waiting for the callee.
	Outgoing,
	/// Media being negotiated.
	Connecting,
	/// Media flowing.
	Connected,
	/// Joining a multi-party call already in progress.
	Join,
}

impl CallStatus {
	/// Wire discriminant.
	pub fn value(self) -> i32 {
		match self {
			Self::Idle => 0,
			Self::Incoming => 1,
			Self::Outgoing => 2,
			Self::Connecting => 3,
			Self::Connected => 4,
			Self::Join => 5,
		}
	}

	/// Parse a wire discriminant.
	pub fn from_value(value: i32) -> Result<Self> {
		match value {
			0 => Ok(Self::Idle),
			1 => Ok(Self::Incoming),
			2 => Ok(Self::Outgoing),
			3 => Ok(Self::Connecting),
			4 => Ok(Self::Connected),
			5 => Ok(Self::Join),
			other => Err(BridgeError::UnknownDiscriminant {
				kind: "CallStatus",
				value: i64::from(other),
			}),
		}
	}
}

/// Audio-only or video call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallMediaType {
	/// Audio only.
	Voice,
	/// Audio and video.
	Video,
}

impl CallMediaType {
	/// Wire discriminant.
	pub fn value(self) -> i32 {
		match self {
			Self::Voice => 0,
			Self::Video => 1,
		}
	}

	/// Parse a wire discriminant.
	pub fn from_value(value: i32) -> Result<Self> {
		match value {
			0 => Ok(Self::Voice),
			1 => Ok(Self::Video),
			other => Err(BridgeError::UnknownDiscriminant {
				kind: "CallMediaType",
				value: i64::from(other),
			}),
		}
	}
}

/// Why a call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallFinishReason {
	/// Not reported, or the call is still running.
	Unknown,
	/// Local hangup.
	Hangup,
	/// Local decline.
	Decline,
	/// Local side busy.
	Busy,
	/// Local side did not answer.
	NoResponse,
	/// Local side cancelled before answer.
	Cancel,
	/// Remote hangup.
	OtherSideHangup,
	/// Remote decline.
	OtherSideDecline,
	/// Remote side busy.
	OtherSideBusy,
	/// Remote side did not answer.
	OtherSideNoResponse,
	/// Remote side cancelled before answer.
	OtherSideCancel,
	/// Media room torn down.
	RoomDestroy,
	/// Network failure.
	NetworkError,
	/// Answered on another device of the same user.
	AcceptOnOtherClient,
	/// Hung up on another device of the same user.
	HangupOnOtherClient,
}

impl CallFinishReason {
	const TABLE: [Self; 15] = [
		Self::Unknown,
		Self::Hangup,
		Self::Decline,
		Self::Busy,
		Self::NoResponse,
		Self::Cancel,
		Self::OtherSideHangup,
		Self::OtherSideDecline,
		Self::OtherSideBusy,
		Self::OtherSideNoResponse,
		Self::OtherSideCancel,
		Self::RoomDestroy,
		Self::NetworkError,
		Self::AcceptOnOtherClient,
		Self::HangupOnOtherClient,
	];

	/// Wire discriminant.
	pub fn value(self) -> i32 {
		self as i32
	}

	/// Parse a wire discriminant.
	pub fn from_value(value: i32) -> Result<Self> {
		usize::try_from(value)
			.ok()
			.and_then(|idx| Self::TABLE.get(idx).copied())
			.ok_or(BridgeError::UnknownDiscriminant {
				kind: "CallFinishReason",
				value: i64::from(value),
			})
	}
}

/// One participant of a call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallMember {
	/// Participant profile.
	pub user_info: Option<UserInfo>,
	/// Participant progress.
	pub call_status: CallStatus,
	/// Invitation time, milliseconds since the epoch.
	pub start_time: i64,
	/// Media connect time.
	pub connect_time: i64,
	/// Leave time.
	pub finish_time: i64,
	/// User that invited this participant.
	pub inviter: Option<UserInfo>,
}

impl Reflect for CallMember {
	fn type_name(&self) -> &'static str {
		"CallMember"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> std::result::Result<(), Unreadable> {
		visit("userInfo", self.user_info.as_field());
		visit("callStatus", FieldRef::I32(self.call_status.value()));
		visit("startTime", self.start_time.as_field());
		visit("connectTime", self.connect_time.as_field());
		visit("finishTime", self.finish_time.as_field());
		visit("inviter", self.inviter.as_field());
		Ok(())
	}
}

impl AsField for CallMember {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

impl FromInstance for CallMember {
	const SCHEMA: &'static str = "CallMember";

	fn schema() -> StructSchema {
		StructSchema::new(Self::SCHEMA)
			.field("userInfo", FieldKind::object(UserInfo::SCHEMA))
			.field("callStatus", FieldKind::Integer)
			.field("startTime", FieldKind::Long)
			.field("connectTime", FieldKind::Long)
			.field("finishTime", FieldKind::Long)
			.field("inviter", FieldKind::object(UserInfo::SCHEMA))
	}

	fn from_instance(instance: &Instance, codec: &EntityCodec) -> Result<Self> {
		Ok(Self {
			user_info: optional_user(instance, "userInfo", codec)?,
			call_status: CallStatus::from_value(instance.get_i32("callStatus").unwrap_or_default())?,
			start_time: instance.get_i64("startTime").unwrap_or_default(),
			connect_time: instance.get_i64("connectTime").unwrap_or_default(),
			finish_time: instance.get_i64("finishTime").unwrap_or_default(),
			inviter: optional_user(instance, "inviter", codec)?,
		})
	}
}

/// Live call as seen by the local user.
#[derive(Debug, Clone, PartialEq)]
pub struct CallSession {
	/// Call id.
	pub call_id: String,
	/// More than two participants allowed.
	pub is_multi_call: bool,
	/// Audio or video.
	pub media_type: CallMediaType,
	/// Session progress.
	pub call_status: CallStatus,
	/// Start time, milliseconds since the epoch.
	pub start_time: i64,
	/// Media connect time.
	pub connect_time: i64,
	/// End time.
	pub finish_time: i64,
	/// User id of the caller.
	pub owner: String,
	/// User id of whoever invited the local user.
	pub inviter: String,
	/// Why the call ended.
	pub finish_reason: CallFinishReason,
	/// Application-defined payload.
	pub extra: String,
	/// Remote participants.
	pub members: Vec<CallMember>,
	/// The local participant.
	pub current_member: Option<CallMember>,
}

impl CallSession {
	/// Idle session with no participants.
	pub fn new(call_id: impl Into<String>, media_type: CallMediaType) -> Self {
		Self {
			call_id: call_id.into(),
			is_multi_call: false,
			media_type,
			call_status: CallStatus::Idle,
			start_time: 0,
			connect_time: 0,
			finish_time: 0,
			owner: String::new(),
			inviter: String::new(),
			finish_reason: CallFinishReason::Unknown,
			extra: String::new(),
			members: Vec::new(),
			current_member: None,
		}
	}
}

impl Reflect for CallSession {
	fn type_name(&self) -> &'static str {
		"CallSession"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> std::result::Result<(), Unreadable> {
		visit("callId", self.call_id.as_field());
		visit("isMultiCall", self.is_multi_call.as_field());
		visit("mediaType", FieldRef::I32(self.media_type.value()));
		visit("callStatus", FieldRef::I32(self.call_status.value()));
		visit("startTime", self.start_time.as_field());
		visit("connectTime", self.connect_time.as_field());
		visit("finishTime", self.finish_time.as_field());
		visit("owner", self.owner.as_field());
		visit("inviter", self.inviter.as_field());
		visit("finishReason", FieldRef::I32(self.finish_reason.value()));
		visit("extra", self.extra.as_field());
		visit("members", self.members.as_field());
		visit("currentMember", self.current_member.as_field());
		Ok(())
	}
}

impl AsField for CallSession {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

impl FromInstance for CallSession {
	const SCHEMA: &'static str = "CallSession";

	fn schema() -> StructSchema {
		StructSchema::new(Self::SCHEMA)
			.field("callId", FieldKind::String)
			.field("isMultiCall", FieldKind::Boolean)
			.field("mediaType", FieldKind::Integer)
			.field("callStatus", FieldKind::Integer)
			.field("startTime", FieldKind::Long)
			.field("connectTime", FieldKind::Long)
			.field("finishTime", FieldKind::Long)
			.field("owner", FieldKind::String)
			.field("inviter", FieldKind::String)
			.field("finishReason", FieldKind::Integer)
			.field("extra", FieldKind::String)
			.field("members", FieldKind::sequence(FieldKind::object(CallMember::SCHEMA)))
			.field("currentMember", FieldKind::object(CallMember::SCHEMA))
	}

	fn from_instance(instance: &Instance, codec: &EntityCodec) -> Result<Self> {
		let current_member = match instance.get_object("currentMember") {
			Some(nested) => Some(CallMember::from_instance(nested, codec)?),
			None => None,
		};

		Ok(Self {
			call_id: required_str(instance, Self::SCHEMA, "callId")?,
			is_multi_call: instance.get_bool("isMultiCall").unwrap_or_default(),
			media_type: CallMediaType::from_value(instance.get_i32("mediaType").unwrap_or_default())?,
			call_status: CallStatus::from_value(instance.get_i32("callStatus").unwrap_or_default())?,
			start_time: instance.get_i64("startTime").unwrap_or_default(),
			connect_time: instance.get_i64("connectTime").unwrap_or_default(),
			finish_time: instance.get_i64("finishTime").unwrap_or_default(),
			owner: optional_str(instance, "owner").unwrap_or_default(),
			inviter: optional_str(instance, "inviter").unwrap_or_default(),
			finish_reason: CallFinishReason::from_value(instance.get_i32("finishReason").unwrap_or_default())?,
			extra: optional_str(instance, "extra").unwrap_or_default(),
			members: objects(instance, "members", codec)?,
			current_member,
		})
	}
}

/// Summary of an incoming or ongoing call delivered to the call manager.
#[derive(Debug, Clone, PartialEq)]
pub struct CallInfo {
	/// Call id.
	pub call_id: String,
	/// More than two participants allowed.
	pub is_multi_call: bool,
	/// Audio or video.
	pub media_type: CallMediaType,
	/// Caller profile.
	pub owner: Option<UserInfo>,
	/// Participants.
	pub members: Vec<CallMember>,
	/// Application-defined payload.
	pub extra: String,
}

impl Reflect for CallInfo {
	fn type_name(&self) -> &'static str {
		"CallInfo"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> std::result::Result<(), Unreadable> {
		visit("callId", self.call_id.as_field());
		visit("isMultiCall", self.is_multi_call.as_field());
		visit("mediaType", FieldRef::I32(self.media_type.value()));
		visit("owner", self.owner.as_field());
		visit("extra", self.extra.as_field());
		visit("members", self.members.as_field());
		Ok(())
	}
}

impl AsField for CallInfo {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

impl FromInstance for CallInfo {
	const SCHEMA: &'static str = "CallInfo";

	fn schema() -> StructSchema {
		StructSchema::new(Self::SCHEMA)
			.field("callId", FieldKind::String)
			.field("isMultiCall", FieldKind::Boolean)
			.field("mediaType", FieldKind::Integer)
			.field("owner", FieldKind::object(UserInfo::SCHEMA))
			.field("extra", FieldKind::String)
			.field("members", FieldKind::sequence(FieldKind::object(CallMember::SCHEMA)))
	}

	fn from_instance(instance: &Instance, codec: &EntityCodec) -> Result<Self> {
		Ok(Self {
			call_id: required_str(instance, Self::SCHEMA, "callId")?,
			is_multi_call: instance.get_bool("isMultiCall").unwrap_or_default(),
			media_type: CallMediaType::from_value(instance.get_i32("mediaType").unwrap_or_default())?,
			owner: optional_user(instance, "owner", codec)?,
			members: objects(instance, "members", codec)?,
			extra: optional_str(instance, "extra").unwrap_or_default(),
		})
	}
}
