#![allow(missing_docs)]

use mapbridge::bridge::{
	BridgeError, ContentRegistry, ConversationInfo, ConversationType, EntityCodec, GenericMap, MentionType, Message, MessageContent, MessageDirection,
	MessageState, PopulateOptions, SchemaSet, UserInfo, from_generic_map, json_bytes_to_generic_map, json_text_to_generic_map,
};
use mapbridge_testkit::fixture_text;

fn load(name: &str) -> GenericMap {
	let text = fixture_text(name);
	json_text_to_generic_map(Some(&text))
}

fn codec_with(custom: &[&str]) -> EntityCodec {
	let mut builder = ContentRegistry::builder();
	for name in custom {
		builder.register(name).expect("register custom type");
	}
	EntityCodec::new(builder.build())
}

#[test]
fn text_message_fixture_reads_and_writes_back() {
	let input = load("message_text.json");
	let codec = codec_with(&[]);
	let message: Message = codec.read(&input).expect("reads message");

	assert_eq!(message.message_id, "nqR7x2p3k");
	assert_eq!(message.client_msg_no, 1024);
	assert_eq!(message.timestamp, 1_718_000_000_123);
	assert_eq!(message.conversation.conversation_type, ConversationType::Group);
	assert_eq!(message.content, MessageContent::text("standup in 5"));
	assert_eq!(message.direction, Some(MessageDirection::Receive));
	assert_eq!(message.state, Some(MessageState::Sent));
	assert_eq!(message.local_attribute, None);

	let mention = message.mention_info.as_ref().expect("mention info");
	assert_eq!(mention.mention_type, MentionType::Someone);
	assert_eq!(mention.target_users[0].extra.get("team").map(String::as_str), Some("core"));

	let mut expected = input.clone();
	expected.remove("localAttribute");
	assert_eq!(codec.write(&message), expected);
}

#[test]
fn registered_custom_fixture_round_trips() {
	let input = load("message_custom.json");
	let codec = codec_with(&["app:card"]);
	let message: Message = codec.read(&input).expect("reads message");

	let MessageContent::Custom { data, .. } = &message.content else {
		panic!("expected custom content");
	};
	assert_eq!(&json_bytes_to_generic_map(data), input["content"].as_mapping().expect("content map"));
	assert_eq!(codec.write(&message), input);
}

#[test]
fn unregistered_custom_fixture_stays_generic() {
	let input = load("message_custom.json");
	let codec = codec_with(&[]);
	let message: Message = codec.read(&input).expect("reads message");

	assert!(matches!(&message.content, MessageContent::Unknown { content_type, .. } if content_type == "app:card"));
	assert_eq!(codec.write(&message), input);
}

#[test]
fn unknown_conversation_type_fails_the_read() {
	let input = load("message_bad_conversation.json");
	let err = codec_with(&[]).read::<Message>(&input).expect_err("bad conversation type");
	assert!(matches!(
		err,
		BridgeError::UnknownDiscriminant {
			kind: "ConversationType",
			value: 9
		}
	));
}

#[test]
fn conversation_info_fixture_reads() {
	let input = load("conversation_info.json");
	let codec = codec_with(&[]);
	let info: ConversationInfo = codec.read(&input).expect("reads conversation info");

	assert_eq!(info.conversation.conversation_id, "lobby");
	assert_eq!(info.unread_count, 4);
	assert!(info.is_top);
	assert!(info.last_message.is_none());
	let mentions = info.mention_info.as_ref().expect("mention info");
	assert_eq!(mentions.mention_msg_list.len(), 1);
	assert_eq!(mentions.mention_msg_list[0].mention_type, MentionType::All);

	assert_eq!(codec.write(&info), input);
}

#[test]
fn user_fixture_reports_every_mismatch() {
	let input = load("user_mismatch.json");
	let schemas = SchemaSet::builtin();

	let out = from_generic_map(&input, "UserInfo", &schemas, &PopulateOptions::default()).expect("lenient populate");
	let paths: Vec<&str> = out.mismatches.iter().map(|item| item.path.as_str()).collect();
	assert_eq!(paths, vec!["UserInfo.extra.badge", "UserInfo.nickname", "UserInfo.updatedTime"]);
	assert_eq!(out.instance.get_str("userId"), Some("erin"));
	assert_eq!(out.instance.get_i64("updatedTime"), Some(0));

	let user: UserInfo = codec_with(&[]).read(&input).expect("reads user");
	assert_eq!(user.nickname, "");
	assert_eq!(user.extra.len(), 1);

	let err = from_generic_map(&input, "UserInfo", &schemas, &PopulateOptions::strict()).expect_err("strict populate");
	assert!(matches!(
		err,
		BridgeError::PopulateTypeMismatch { schema, field, .. } if schema == "UserInfo" && field == "extra.badge"
	));
}

#[test]
fn malformed_fixture_yields_empty_map() {
	let input = load("malformed.json");
	assert!(input.is_empty());
	assert!(matches!(
		codec_with(&[]).read::<Message>(&input),
		Err(BridgeError::MissingField {
			entity: "Message",
			field: "conversation"
		})
	));
}
