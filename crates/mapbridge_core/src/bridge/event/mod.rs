use std::fmt;

use tracing::warn;

use crate::bridge::{GenericMap, GenericValue, JsonOptions, Reflect, Result, WalkOptions, generic_map_to_json_text, to_generic_map_with};

macro_rules! event_names {
	($($variant:ident => $name:literal,)+) => {
		/// Named notification emitted from the native side to UI listeners.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum EventName {
			$(
				#[doc = concat!("`", $name, "`.")]
				$variant,
			)+
		}

		impl EventName {
			/// Every known event, in declaration order.
			pub const ALL: &'static [EventName] = &[$(Self::$variant),+];

			/// Wire name delivered to listeners.
			pub fn as_str(self) -> &'static str {
				match self {
					$(Self::$variant => $name,)+
				}
			}

			/// Look up an event by wire name.
			pub fn parse(name: &str) -> Option<Self> {
				match name {
					$($name => Some(Self::$variant),)+
					_ => None,
				}
			}
		}
	};
}

event_names! {
	ConnectionStatusChanged => "ConnectionStatusChanged",
	DbDidOpen => "DbDidOpen",
	DbDidClose => "DbDidClose",
	MessageReceived => "MessageReceived",
	MessageRecalled => "MessageRecalled",
	MessageUpdated => "MessageUpdated",
	MessageDeleted => "MessageDeleted",
	MessageCleared => "MessageCleared",
	MessageReactionAdded => "MessageReactionAdded",
	MessageReactionRemoved => "MessageReactionRemoved",
	MessageSetTop => "MessageSetTop",
	MessagesRead => "MessagesRead",
	GroupMessagesRead => "GroupMessagesRead",
	ConversationInfoAdded => "ConversationInfoAdded",
	ConversationInfoUpdated => "ConversationInfoUpdated",
	ConversationInfoDeleted => "ConversationInfoDeleted",
	TotalUnreadMessageCountUpdated => "TotalUnreadMessageCountUpdated",
	MessageDestroyTimeUpdated => "MessageDestroyTimeUpdated",
	MessageSent => "onMessageSent",
	MessageSentError => "onMessageSentError",
	MediaMessageProgress => "onMediaMessageProgress",
	MediaMessageSent => "onMediaMessageSent",
	MediaMessageSentError => "onMediaMessageSentError",
	MediaMessageCancelled => "onMediaMessageCancelled",
	CallReceived => "CallManager_onCallReceive",
	CallInfoUpdated => "CallManager_onCallInfoUpdate",
	CallConnected => "CallSession_onCallConnect",
	CallFinished => "CallSession_onCallFinish",
	CallErrorOccurred => "CallSession_onErrorOccur",
	CallUsersInvited => "CallSession_onUsersInvite",
	CallUsersConnected => "CallSession_onUsersConnect",
	CallUsersLeft => "CallSession_onUsersLeave",
	CallUserCameraEnabled => "CallSession_onUserCameraEnable",
	CallUserMicrophoneEnabled => "CallSession_onUserMicrophoneEnable",
	CallSoundLevelUpdated => "CallSession_onSoundLevelUpdate",
	CallVideoFirstFrameRendered => "CallSession_onVideoFirstFrameRender",
}

impl fmt::Display for EventName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Connection state reported by `ConnectionStatusChanged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
	/// Session established.
	Connected,
	/// Handshake in progress.
	Connecting,
	/// Session closed.
	Disconnected,
	/// Connection attempt failed.
	Failure,
}

impl ConnectionStatus {
	/// Wire label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Connected => "connected",
			Self::Connecting => "connecting",
			Self::Disconnected => "disconnected",
			Self::Failure => "failure",
		}
	}
}

const LISTENER_KEY: &str = "key";

/// Outbound event: a name plus a generic map payload.
///
/// Every payload carries `key`, the listener registration the event is addressed to.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeEvent {
	/// Event name.
	pub name: EventName,
	/// Payload delivered to listeners.
	pub payload: GenericMap,
}

impl BridgeEvent {
	/// Event addressed to listener `key`.
	pub fn new(name: EventName, key: &str) -> Self {
		let mut payload = GenericMap::new();
		payload.insert(LISTENER_KEY.to_owned(), key.into());
		Self { name, payload }
	}

	/// `ConnectionStatusChanged` with `status`, `code`, and `extra` (empty when absent).
	pub fn connection_status(key: &str, status: ConnectionStatus, code: i32, extra: Option<&str>) -> Self {
		Self::new(EventName::ConnectionStatusChanged, key)
			.with_value("status", status.as_str())
			.with_value("code", code)
			.with_value("extra", extra.unwrap_or_default())
	}

	/// Attach a scalar or already converted value.
	///
	/// `key` is fixed by [`BridgeEvent::new`]; attempts to replace it are ignored.
	pub fn with_value(mut self, field: &str, value: impl Into<GenericValue>) -> Self {
		if field == LISTENER_KEY {
			warn!(event = self.name.as_str(), "listener key is reserved, value ignored");
			return self;
		}
		self.payload.insert(field.to_owned(), value.into());
		self
	}

	/// Attach an entity converted with the event walk limits.
	pub fn with_entity(self, field: &str, value: &dyn Reflect) -> Self {
		let map = to_generic_map_with(Some(value), &WalkOptions::for_events());
		self.with_value(field, map)
	}

	/// Attach a list of entities converted with the event walk limits.
	pub fn with_entities<T: Reflect>(self, field: &str, values: &[T]) -> Self {
		let options = WalkOptions::for_events();
		let items: Vec<GenericValue> = values
			.iter()
			.map(|value| GenericValue::Mapping(to_generic_map_with(Some(value as &dyn Reflect), &options)))
			.collect();
		self.with_value(field, items)
	}

	/// Payload as JSON text.
	pub fn payload_json(&self, options: &JsonOptions) -> Result<String> {
		generic_map_to_json_text(&self.payload, options)
	}
}

#[cfg(test)]
mod tests;
