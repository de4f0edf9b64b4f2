mod coerce;
mod error;
mod event;
mod json;
mod model;
mod populate;
mod reflect;
mod registry;
mod schema;
mod value;
mod walk;

/// Numeric widening and narrowing helpers.
pub use coerce::{narrow_number, widen_f32, widen_i32, widen_i64};
/// Error and result aliases.
pub use error::{BridgeError, Result};
/// Outbound event payload types.
pub use event::{BridgeEvent, ConnectionStatus, EventName};
/// JSON bridge entry points and options.
pub use json::{JsonOptions, generic_map_to_json_bytes, generic_map_to_json_text, json_bytes_to_generic_map, json_text_to_generic_map, json_value_to_generic};
/// Well-known entity shapes crossing the bridge.
pub use model::{
	CallFinishReason, CallInfo, CallMediaType, CallMember, CallSession, CallStatus, Conversation, ConversationInfo, ConversationMentionInfo, ConversationType,
	EntityCodec, FILE_TYPE, FromInstance, GroupMessageReadInfo, IMAGE_TYPE, MentionInfo, MentionMsg, MentionType, Message, MessageContent, MessageDirection,
	MessageReaction, MessageReactionItem, MessageState, Moment, MomentComment, MomentMedia, MomentMediaType, MomentReaction, TEXT_TYPE, UserInfo, VOICE_TYPE,
};
/// Typed-object population entry points and options.
pub use populate::{FieldMismatch, Instance, InstanceField, PopulateOptions, Populated, TypedValue, from_generic_map};
/// Describable-object seam used by the walker.
pub use reflect::{AsField, FieldRef, Reflect, Unreadable};
/// Custom content type registry.
pub use registry::{ContentRegistry, ContentRegistryBuilder, DEFAULT_CUSTOM_TYPE};
/// Structural type descriptors.
pub use schema::{FieldKind, SchemaField, SchemaSet, StructSchema};
/// Bridge interchange value types.
pub use value::{GenericMap, GenericValue};
/// Cycle-guarded object walker entry points.
pub use walk::{ObjectId, VisitPath, WalkOptions, to_generic_map, to_generic_map_guarded, to_generic_map_with};
