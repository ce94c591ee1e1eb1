use crate::components::{ArchetypeMask, TypeSet};
use crate::storage::{ComponentQuery, ComponentStorage, StorageIter};
use crate::entities::EntityBuilder;
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use crate::error::Result;

type Hasher = BuildHasherDefault<NoHashHasher<ArchetypeMask>>;

/// A registry of [ComponentStorages](ComponentStorage) keyed by their
/// [ArchetypeMask], holding at most one store per distinct mask.
///
/// Rows are routed to the store matching their exact archetype, creating the
/// store on first use. Queries span every archetype whose mask is a superset
/// of the requested components. No ordering is guaranteed across archetypes;
/// within one archetype rows keep insertion order.
pub struct MasterStorage<S: TypeSet> {
	stores: HashMap<ArchetypeMask, ComponentStorage<S>, Hasher>,
}

impl<S: TypeSet> MasterStorage<S> {
	pub fn new() -> Self {
		Self {
			stores: HashMap::default(),
		}
	}

	/// Appends one row by consuming an [EntityBuilder], routed by its
	/// [archetype](EntityBuilder::archetype). A previously unseen mask lazily
	/// creates its store.
	pub fn push(&mut self, entity: EntityBuilder<S>) -> Result<()> {
		let mask = entity.archetype();
		self.stores
			.entry(mask)
			.or_insert_with(|| ComponentStorage::with_mask(mask))
			.push_entity(entity)
	}

	/// Returns one [StorageIter] per archetype whose mask is a superset of
	/// `Q`'s mask, each over exactly the requested columns.
	///
	/// Callers compose the nested traversal: outer over archetypes, inner
	/// over rows.
	pub fn query<'s, Q: ComponentQuery<'s, S> + 's>(
		&'s self,
	) -> impl Iterator<Item = StorageIter<'s, S, Q>> + 's {
		let mask = Q::mask();
		self.stores
			.values()
			.filter(move |store| store.mask().contains(mask))
			.map(|store| store.iter::<Q>())
	}

	/// The store holding rows of exactly `mask`, if one was ever created.
	pub fn get(&self, mask: ArchetypeMask) -> Option<&ComponentStorage<S>> {
		self.stores.get(&mask)
	}

	pub fn contains(&self, mask: ArchetypeMask) -> bool {
		self.stores.contains_key(&mask)
	}

	/// The number of distinct archetypes seen so far.
	pub fn archetype_count(&self) -> usize {
		self.stores.len()
	}

	/// The total number of rows across every archetype.
	pub fn len(&self) -> usize {
		self.stores.values().map(ComponentStorage::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// The masks of every archetype seen so far, in no particular order.
	pub fn masks(&self) -> impl Iterator<Item = ArchetypeMask> + '_ {
		self.stores.keys().copied()
	}
}

impl<S: TypeSet> Default for MasterStorage<S> {
	fn default() -> Self {
		Self::new()
	}
}
