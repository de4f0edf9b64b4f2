use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::bridge::reflect::{AsField, Unreadable};
use crate::bridge::{FieldRef, GenericMap, GenericValue, ObjectId, Reflect, VisitPath, WalkOptions, to_generic_map, to_generic_map_guarded, to_generic_map_with};

#[derive(Default)]
struct Node {
	name: String,
	avatar: Option<String>,
	next: Option<Rc<RefCell<Node>>>,
	peers: Vec<Rc<RefCell<Node>>>,
}

impl Reflect for Node {
	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> Result<(), Unreadable> {
		visit("name", self.name.as_field());
		visit("avatar", self.avatar.as_field());
		visit("next", self.next.as_field());
		visit("peers", self.peers.as_field());
		Ok(())
	}
}

fn node(name: &str) -> Rc<RefCell<Node>> {
	Rc::new(RefCell::new(Node {
		name: name.to_owned(),
		..Node::default()
	}))
}

fn nested<'a>(map: &'a GenericMap, key: &str) -> &'a GenericMap {
	map.get(key).and_then(GenericValue::as_mapping).unwrap_or_else(|| panic!("expected mapping at {key}"))
}

struct Scalars {
	small: i32,
	large: i64,
	ratio: f32,
	exact: f64,
	flag: bool,
	tags: Vec<String>,
	extra: BTreeMap<String, Option<String>>,
}

impl Reflect for Scalars {
	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> Result<(), Unreadable> {
		visit("small", self.small.as_field());
		visit("large", self.large.as_field());
		visit("ratio", self.ratio.as_field());
		visit("exact", self.exact.as_field());
		visit("flag", self.flag.as_field());
		visit("tags", self.tags.as_field());
		visit("extra", self.extra.as_field());
		Ok(())
	}
}

#[test]
fn null_input_yields_empty_map() {
	assert!(to_generic_map(None).is_empty());
}

#[test]
fn null_fields_are_omitted() {
	let root = node("x");
	let map = to_generic_map(Some(&*root));
	assert_eq!(map.get("name"), Some(&GenericValue::String("x".to_owned())));
	assert!(!map.contains_key("avatar"));
	assert!(!map.contains_key("next"));
	assert_eq!(map.get("peers"), Some(&GenericValue::Sequence(Vec::new())));
}

#[test]
fn scalars_widen_to_double() {
	let mut extra = BTreeMap::new();
	extra.insert("kept".to_owned(), Some("v".to_owned()));
	extra.insert("dropped".to_owned(), None);
	let value = Scalars {
		small: 42,
		large: 9_007_199_254_740_993,
		ratio: 0.5,
		exact: 2.25,
		flag: true,
		tags: vec!["a".to_owned(), "b".to_owned()],
		extra,
	};

	let map = to_generic_map(Some(&value));
	assert_eq!(map["small"], GenericValue::Number(42.0));
	assert_eq!(map["large"], GenericValue::Number(9_007_199_254_740_992.0));
	assert_eq!(map["ratio"], GenericValue::Number(0.5));
	assert_eq!(map["exact"], GenericValue::Number(2.25));
	assert_eq!(map["flag"], GenericValue::Bool(true));
	assert_eq!(map["tags"], GenericValue::Sequence(vec!["a".into(), "b".into()]));

	let extra = nested(&map, "extra");
	assert_eq!(extra.len(), 1);
	assert_eq!(extra["kept"], GenericValue::String("v".to_owned()));
}

#[test]
fn self_cycle_terminates_with_empty_mapping() {
	let a = node("a");
	a.borrow_mut().next = Some(Rc::clone(&a));

	let map = to_generic_map(Some(&*a));
	assert_eq!(map["name"], GenericValue::String("a".to_owned()));
	assert!(nested(&map, "next").is_empty());

	a.borrow_mut().next = None;
}

#[test]
fn two_node_cycle_is_cut_at_revisit() {
	let a = node("a");
	let b = node("b");
	a.borrow_mut().next = Some(Rc::clone(&b));
	b.borrow_mut().next = Some(Rc::clone(&a));

	let map = to_generic_map(Some(&*a));
	let b_map = nested(&map, "next");
	assert_eq!(b_map["name"], GenericValue::String("b".to_owned()));
	assert!(nested(b_map, "next").is_empty());

	b.borrow_mut().next = None;
}

#[test]
fn shared_non_cyclic_reference_is_converted_each_time() {
	let shared = node("shared");
	let root = node("root");
	root.borrow_mut().peers = vec![Rc::clone(&shared), Rc::clone(&shared)];
	root.borrow_mut().next = Some(Rc::clone(&shared));

	let map = to_generic_map(Some(&*root));
	let peers = map["peers"].as_sequence().expect("peers sequence");
	assert_eq!(peers.len(), 2);
	for peer in peers {
		let peer = peer.as_mapping().expect("peer mapping");
		assert_eq!(peer["name"], GenericValue::String("shared".to_owned()));
	}
	assert_eq!(nested(&map, "next")["name"], GenericValue::String("shared".to_owned()));
}

#[test]
fn unreadable_nested_object_is_omitted() {
	let locked = node("locked");
	let root = node("root");
	root.borrow_mut().next = Some(Rc::clone(&locked));

	let _guard = locked.borrow_mut();
	let map = to_generic_map(Some(&*root));
	assert_eq!(map["name"], GenericValue::String("root".to_owned()));
	assert!(!map.contains_key("next"));
}

#[test]
fn unreadable_root_yields_empty_map() {
	let root = node("root");
	let _guard = root.borrow_mut();
	assert!(to_generic_map(Some(&*root)).is_empty());
}

#[test]
fn depth_limit_truncates_deep_chains() {
	let head = node("0");
	let mut tail = Rc::clone(&head);
	for idx in 1..5 {
		let next = node(&idx.to_string());
		tail.borrow_mut().next = Some(Rc::clone(&next));
		tail = next;
	}

	let map = to_generic_map_with(Some(&*head), &WalkOptions { max_depth: 2 });
	let first = nested(&map, "next");
	assert_eq!(first["name"], GenericValue::String("1".to_owned()));
	assert!(nested(first, "next").is_empty());
}

#[test]
fn guarded_walk_leaves_path_empty() {
	let a = node("a");
	let b = node("b");
	a.borrow_mut().next = Some(Rc::clone(&b));

	let mut visited = VisitPath::new();
	let map = to_generic_map_guarded(Some(&*a), &mut visited, &WalkOptions::default());
	assert!(map.contains_key("next"));
	assert!(visited.is_empty());
}

#[test]
fn pre_seeded_path_cuts_matching_object() {
	let a = node("a");
	let mut visited = VisitPath::new();
	assert!(visited.enter(ObjectId::of(&*a)));

	let map = to_generic_map_guarded(Some(&*a), &mut visited, &WalkOptions::default());
	assert!(map.is_empty());
	assert_eq!(visited.depth(), 1);
}

#[test]
fn visit_path_enter_and_leave() {
	let a = node("a");
	let b = node("b");
	let id_a = ObjectId::of(&*a);
	let id_b = ObjectId::of(&*b);

	let mut path = VisitPath::new();
	assert!(path.enter(id_a));
	assert!(path.enter(id_b));
	assert!(!path.enter(id_a));
	path.leave(id_b);
	assert!(path.contains(id_a));
	assert!(!path.contains(id_b));
	path.leave(id_a);
	assert!(path.is_empty());
}
