use crate::components::{ArchetypeMask, Component, ComponentSet, MemberOf, TypeSet};
use crate::type_set;

#[allow(dead_code)]
struct Position {
	x: f32,
	y: f32,
}

#[allow(dead_code)]
struct Name(String);

#[allow(dead_code)]
struct Tag;

#[allow(dead_code)]
struct Volume(f32);

impl Component for Position {}
impl Component for Name {}
impl Component for Tag {}
impl Component for Volume {}

type_set! {
	struct SceneSet { Position, Name, Tag }
}

type_set! {
	struct UiSet { Tag, Volume }
}

type_set! {
	struct AudioSet { Volume }
}

#[test]
fn indices_count_from_the_tail() {
	assert_eq!(<Position as MemberOf<SceneSet>>::INDEX, 2);
	assert_eq!(<Name as MemberOf<SceneSet>>::INDEX, 1);
	assert_eq!(<Tag as MemberOf<SceneSet>>::INDEX, 0);
}

#[test]
fn indices_are_distinct() {
	let indices = [
		<Position as MemberOf<SceneSet>>::INDEX,
		<Name as MemberOf<SceneSet>>::INDEX,
		<Tag as MemberOf<SceneSet>>::INDEX,
	];

	for (i, a) in indices.iter().enumerate() {
		for b in &indices[i + 1..] {
			assert_ne!(a, b, "bit indices must be injective over the set");
		}
	}
}

#[test]
fn index_is_relative_to_the_owning_set() {
	assert_eq!(<Tag as MemberOf<SceneSet>>::INDEX, 0);
	assert_eq!(<Tag as MemberOf<UiSet>>::INDEX, 1);
}

#[test]
fn masks_are_order_independent() {
	assert_eq!(
		<(Position, Name) as ComponentSet<SceneSet>>::mask(),
		<(Name, Position) as ComponentSet<SceneSet>>::mask(),
	);
	assert_eq!(
		<(Position, Name, Tag) as ComponentSet<SceneSet>>::mask(),
		<(Tag, Name, Position) as ComponentSet<SceneSet>>::mask(),
	);
}

#[test]
fn masks_combine_member_bits() {
	assert_eq!(<Position as MemberOf<SceneSet>>::bit(), ArchetypeMask::from_bits(0b100));
	assert_eq!(
		<(Position, Name) as ComponentSet<SceneSet>>::mask(),
		ArchetypeMask::from_bits(0b110),
	);
	assert_eq!(
		<(Position, Name, Tag) as ComponentSet<SceneSet>>::mask(),
		ArchetypeMask::from_bits(0b111),
	);
}

#[test]
fn empty_selection_has_empty_mask() {
	assert!(<() as ComponentSet<SceneSet>>::mask().is_empty());
}

#[test]
fn set_len_matches_declaration() {
	assert_eq!(SceneSet::LEN, 3);
	assert_eq!(SceneSet::type_ids().len(), 3);
	assert_eq!(AudioSet::LEN, 1);
}

#[test]
fn sets_intersect_iff_they_share_a_member() {
	assert!(SceneSet::intersects::<UiSet>());
	assert!(UiSet::intersects::<SceneSet>());
	assert!(UiSet::intersects::<AudioSet>());
	assert!(SceneSet::intersects::<SceneSet>());
	assert!(!SceneSet::intersects::<AudioSet>());
	assert!(!AudioSet::intersects::<SceneSet>());
}

#[test]
fn mask_superset_and_intersection_tests() {
	let full = ArchetypeMask::from_bits(0b111);
	let pair = ArchetypeMask::from_bits(0b110);
	let tag = ArchetypeMask::from_bits(0b001);

	assert!(full.contains(pair));
	assert!(full.contains(tag));
	assert!(!pair.contains(full));
	assert!(!pair.contains(tag));
	assert!(pair.contains(ArchetypeMask::EMPTY));

	assert!(full.intersects(pair));
	assert!(!pair.intersects(tag));
}

#[test]
fn mask_displays_all_64_bits() {
	let text = format!("{}", ArchetypeMask::from_bits(0b101));
	assert_eq!(text.len(), 64);
	assert!(text.ends_with("101"));
}
