use crate::components::{ArchetypeMask, MemberOf, TypeSet};
use crate::storage::ComponentStorage;
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use std::any::Any;

type Hasher = BuildHasherDefault<NoHashHasher<u32>>;

/// Assembles one row's component values before insertion.
///
/// Starts empty, fills one optional slot per member type through
/// [with](EntityBuilder::with), and is consumed exactly once by
/// [ComponentStorage::push_entity] or
/// [MasterStorage::push](crate::storage::MasterStorage::push), which move the
/// held values into the destination columns. Any subset of `S` may be staged,
/// including none at all.
pub struct EntityBuilder<S: TypeSet> {
	slots: HashMap<u32, Slot<S>, Hasher>,
}

struct Slot<S: TypeSet> {
	value: Box<dyn Any>,
	insert: fn(&mut ComponentStorage<S>, Box<dyn Any>),
}

impl<S: TypeSet> EntityBuilder<S> {
	pub fn new() -> Self {
		Self {
			slots: HashMap::default(),
		}
	}

	/// Stores `value` in the slot for `T` and marks it present.
	/// Writing the same slot twice overwrites the previous value.
	pub fn with<T: MemberOf<S>>(mut self, value: T) -> Self {
		self.slots.insert(
			T::INDEX,
			Slot {
				value: Box::new(value),
				insert: |storage, value| {
					// The slot value and its insert fn are written together,
					// so the erased type always matches.
					let Ok(value) = value.downcast::<T>() else { unreachable!() };
					storage.push_value(*value);
				},
			},
		);
		self
	}

	/// The [ArchetypeMask] described by the slots present so far.
	pub fn archetype(&self) -> ArchetypeMask {
		self.slots
			.keys()
			.fold(ArchetypeMask::EMPTY, |mask, index| {
				mask | ArchetypeMask::from_bits(1u64 << *index)
			})
	}

	/// The number of slots present.
	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	pub(crate) fn drain_into(self, storage: &mut ComponentStorage<S>) {
		for (_, slot) in self.slots {
			(slot.insert)(storage, slot.value);
		}
	}
}

impl<S: TypeSet> Default for EntityBuilder<S> {
	fn default() -> Self {
		Self::new()
	}
}
