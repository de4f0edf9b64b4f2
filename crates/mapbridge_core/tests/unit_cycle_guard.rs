#![allow(missing_docs)]

use std::cell::RefCell;
use std::rc::Rc;

use mapbridge::bridge::{
	AsField, FieldKind, FieldRef, GenericMap, GenericValue, PopulateOptions, Reflect, SchemaSet, StructSchema, TypedValue, Unreadable, WalkOptions,
	from_generic_map, to_generic_map, to_generic_map_with,
};

struct Group {
	name: String,
	members: Vec<Rc<RefCell<Member>>>,
}

struct Member {
	user_id: String,
	group: Option<Rc<RefCell<Group>>>,
}

impl Reflect for Group {
	fn type_name(&self) -> &'static str {
		"Group"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> Result<(), Unreadable> {
		visit("name", self.name.as_field());
		visit("members", self.members.as_field());
		Ok(())
	}
}

impl Reflect for Member {
	fn type_name(&self) -> &'static str {
		"Member"
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> Result<(), Unreadable> {
		visit("userId", self.user_id.as_field());
		visit("group", self.group.as_field());
		Ok(())
	}
}

fn group_with_members(names: &[&str]) -> Rc<RefCell<Group>> {
	let group = Rc::new(RefCell::new(Group {
		name: "core".to_owned(),
		members: Vec::new(),
	}));
	for name in names {
		let member = Rc::new(RefCell::new(Member {
			user_id: (*name).to_owned(),
			group: Some(Rc::clone(&group)),
		}));
		group.borrow_mut().members.push(member);
	}
	group
}

fn schemas() -> SchemaSet {
	let mut set = SchemaSet::new();
	set.insert(
		StructSchema::new("Group")
			.field("name", FieldKind::String)
			.field("members", FieldKind::sequence(FieldKind::object("Member"))),
	)
	.expect("insert Group");
	set.insert(StructSchema::new("Member").field("userId", FieldKind::String).field("group", FieldKind::object("Group")))
		.expect("insert Member");
	set.validate().expect("schemas resolve");
	set
}

#[test]
fn back_references_are_cut_at_the_cycle() {
	let group = group_with_members(&["alice", "bob"]);
	let map = to_generic_map(Some(&*group));

	assert_eq!(map["name"].as_str(), Some("core"));
	let members = map["members"].as_sequence().expect("members");
	assert_eq!(members.len(), 2);
	for (member, expected) in members.iter().zip(["alice", "bob"]) {
		let member = member.as_mapping().expect("member map");
		assert_eq!(member["userId"].as_str(), Some(expected));
		assert_eq!(member["group"], GenericValue::Mapping(GenericMap::new()));
	}
}

#[test]
fn walking_from_the_member_side_also_terminates() {
	let group = group_with_members(&["alice"]);
	let member = Rc::clone(&group.borrow().members[0]);
	let map = to_generic_map(Some(&*member));

	let group_map = map["group"].as_mapping().expect("group map");
	let members = group_map["members"].as_sequence().expect("members");
	assert_eq!(members, &[GenericValue::Mapping(GenericMap::new())]);
}

#[test]
fn cyclic_walk_output_populates_cleanly() {
	let group = group_with_members(&["alice", "bob"]);
	let map = to_generic_map(Some(&*group));

	let out = from_generic_map(&map, "Group", &schemas(), &PopulateOptions::default()).expect("populates");
	assert!(out.is_complete());
	let members = out.instance.get_sequence("members").expect("members");
	let [TypedValue::Object(first), TypedValue::Object(_)] = members else {
		panic!("expected two member objects");
	};
	assert_eq!(first.get_str("userId"), Some("alice"));
	let back = first.get_object("group").expect("truncated group is an empty object");
	assert_eq!(back.get_str("name"), Some(""));
}

#[test]
fn long_acyclic_chains_are_bounded_by_depth() {
	let root = group_with_members(&[]);
	let mut tail = Rc::clone(&root);
	for idx in 0..200 {
		let next = Rc::new(RefCell::new(Group {
			name: format!("g{idx}"),
			members: Vec::new(),
		}));
		let link = Rc::new(RefCell::new(Member {
			user_id: format!("link{idx}"),
			group: Some(Rc::clone(&next)),
		}));
		tail.borrow_mut().members.push(link);
		tail = next;
	}

	let options = WalkOptions { max_depth: 10 };
	let map = to_generic_map_with(Some(&*root), &options);

	let mut depth = 0;
	let mut cursor = &map;
	while let Some(GenericValue::Sequence(members)) = cursor.get("members") {
		let Some(GenericValue::Mapping(member)) = members.first() else {
			break;
		};
		let Some(GenericValue::Mapping(group)) = member.get("group") else {
			break;
		};
		depth += 2;
		cursor = group;
	}
	assert!(depth <= 10, "walk went {depth} objects deep");
	assert!(cursor.is_empty() || !cursor.contains_key("members"));
}
