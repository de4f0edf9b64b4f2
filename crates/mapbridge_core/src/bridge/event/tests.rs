use std::collections::HashSet;

use crate::bridge::{
	BridgeEvent, ConnectionStatus, Conversation, ConversationType, EventName, GenericValue, JsonOptions, Message, MessageContent,
};

#[test]
fn event_names_are_unique_and_parse_back() {
	let names: HashSet<&str> = EventName::ALL.iter().map(|name| name.as_str()).collect();
	assert_eq!(names.len(), EventName::ALL.len());
	for name in EventName::ALL {
		assert_eq!(EventName::parse(name.as_str()), Some(*name));
	}
	assert_eq!(EventName::MessageSent.as_str(), "onMessageSent");
	assert_eq!(EventName::CallSoundLevelUpdated.to_string(), "CallSession_onSoundLevelUpdate");
	assert_eq!(EventName::parse("NoSuchEvent"), None);
	for (name, wire) in [
		(EventName::MediaMessageProgress, "onMediaMessageProgress"),
		(EventName::MediaMessageSent, "onMediaMessageSent"),
		(EventName::MediaMessageSentError, "onMediaMessageSentError"),
		(EventName::MediaMessageCancelled, "onMediaMessageCancelled"),
	] {
		assert_eq!(EventName::parse(wire), Some(name));
	}
}

#[test]
fn every_payload_carries_listener_key() {
	let event = BridgeEvent::new(EventName::DbDidOpen, "listener-1");
	assert_eq!(event.payload.len(), 1);
	assert_eq!(event.payload["key"], GenericValue::String("listener-1".to_owned()));
}

#[test]
fn connection_status_defaults_extra_to_empty() {
	let event = BridgeEvent::connection_status("k", ConnectionStatus::Failure, 11001, None);
	assert_eq!(event.name, EventName::ConnectionStatusChanged);
	assert_eq!(event.payload["status"].as_str(), Some("failure"));
	assert_eq!(event.payload["code"].as_f64(), Some(11001.0));
	assert_eq!(event.payload["extra"].as_str(), Some(""));
}

#[test]
fn entities_are_walked_into_payload() {
	let conversation = Conversation::new(ConversationType::Group, "g1");
	let message = Message::new(conversation.clone(), MessageContent::text("hi"));
	let event = BridgeEvent::new(EventName::MessageReceived, "k")
		.with_entity("message", &message)
		.with_entities("conversations", std::slice::from_ref(&conversation));

	let message = event.payload["message"].as_mapping().expect("message map");
	let content = message["content"].as_mapping().expect("content map");
	assert_eq!(content["contentType"].as_str(), Some("jg:text"));
	assert_eq!(content["content"].as_str(), Some("hi"));

	let list = event.payload["conversations"].as_sequence().expect("conversation list");
	let first = list[0].as_mapping().expect("conversation map");
	assert_eq!(first["conversationType"].as_f64(), Some(2.0));
	assert_eq!(first["conversationId"].as_str(), Some("g1"));
}

#[test]
fn payload_serializes_to_json() {
	let event = BridgeEvent::new(EventName::MessageCleared, "k").with_value("startTime", 42);
	let text = event.payload_json(&JsonOptions::default()).expect("serializes");
	assert_eq!(text, r#"{"key":"k","startTime":42}"#);
}

#[test]
fn listener_key_cannot_be_replaced() {
	let event = BridgeEvent::new(EventName::MessageReceived, "k1")
		.with_value("key", "override")
		.with_entity("key", &Conversation::new(ConversationType::Private, "u"))
		.with_value("progress", 40);
	assert_eq!(event.payload["key"].as_str(), Some("k1"));
	assert_eq!(event.payload["progress"].as_f64(), Some(40.0));
	assert_eq!(event.payload.len(), 2);
}
