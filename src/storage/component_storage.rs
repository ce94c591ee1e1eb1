use crate::components::{ArchetypeMask, ComponentSet, MemberOf, TypeSet};
use crate::error::{Result, StorageError};
use crate::storage::{Column, ComponentQuery, StorageIter};
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use std::marker::PhantomData;
use paste::paste;

type Hasher = BuildHasherDefault<NoHashHasher<u32>>;

/// Columnar storage for all rows sharing one archetype of the [TypeSet] `S`.
///
/// The store's mask is fixed at construction; every push must match it
/// exactly, and a mismatch is rejected before any column is touched. Columns
/// materialize on the first push and afterwards grow in lock-step: row `i` of
/// every column belongs to the same logical row. Rows are never removed.
pub struct ComponentStorage<S: TypeSet> {
	mask: ArchetypeMask,
	columns: HashMap<u32, Column, Hasher>,
	len: usize,
	_set: PhantomData<S>,
}

impl<S: TypeSet> ComponentStorage<S> {
	/// Creates a store for the archetype selecting the [components](ComponentSet) `C`.
	pub fn new<C: ComponentSet<S>>() -> Self {
		Self::with_mask(C::mask())
	}

	/// Creates a store for a raw [mask](ArchetypeMask) value.
	/// Used by [MasterStorage](crate::storage::MasterStorage) when the mask is
	/// only discovered at runtime.
	pub fn with_mask(mask: ArchetypeMask) -> Self {
		Self {
			mask,
			columns: HashMap::default(),
			len: 0,
			_set: PhantomData,
		}
	}

	pub fn mask(&self) -> ArchetypeMask {
		self.mask
	}

	/// The number of rows stored. Every column holds exactly this many values.
	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Appends one row from explicit component values.
	///
	/// The [mask](ComponentSet::mask) of the supplied combination must equal
	/// the store's fixed mask; otherwise [StorageError::ArchetypeMismatch] is
	/// returned and no column is mutated.
	pub fn push<C: ComponentBundle<S>>(&mut self, components: C) -> Result<()> {
		self.check_mask(C::mask())?;

		components.store(self);
		self.len += 1;

		debug_assert!(self.columns.values().all(|column| column.len() == self.len));
		Ok(())
	}

	/// Appends one row by consuming an [EntityBuilder](crate::entities::EntityBuilder).
	///
	/// The builder's [archetype](crate::entities::EntityBuilder::archetype)
	/// must equal the store's fixed mask; otherwise
	/// [StorageError::ArchetypeMismatch] is returned and no column is mutated.
	pub fn push_entity(&mut self, entity: crate::entities::EntityBuilder<S>) -> Result<()> {
		self.check_mask(entity.archetype())?;

		entity.drain_into(self);
		self.len += 1;

		debug_assert!(self.columns.values().all(|column| column.len() == self.len));
		Ok(())
	}

	/// Returns a fresh [StorageIter] over the columns selected by `Q`.
	///
	/// Selecting a member type this store never stored yields no rows;
	/// selecting a type outside `S` does not compile.
	pub fn iter<'s, Q: ComponentQuery<'s, S>>(&'s self) -> StorageIter<'s, S, Q> {
		StorageIter::new(self)
	}

	/// Returns a fresh [StorageIter] over every type declared in `S`,
	/// in declaration order.
	pub fn iter_all<'s>(&'s self) -> StorageIter<'s, S, S::Members>
	where
		S::Members: ComponentQuery<'s, S>,
	{
		StorageIter::new(self)
	}

	fn check_mask(&self, actual: ArchetypeMask) -> Result<()> {
		if actual != self.mask {
			return Err(StorageError::ArchetypeMismatch {
				expected: self.mask,
				actual,
			});
		}
		Ok(())
	}

	pub(crate) fn push_value<T: MemberOf<S>>(&mut self, value: T) {
		self.columns.entry(T::INDEX).or_insert_with(Column::new::<T>).push(value);
	}

	pub(crate) fn column_slice<T: MemberOf<S>>(&self) -> &[T] {
		match self.columns.get(&T::INDEX) {
			Some(column) => column.as_slice::<T>(),
			None => &[],
		}
	}
}

/// A tuple of component values forming one complete row of an archetype.
///
/// The value-level counterpart of [ComponentSet]: `store` moves each element
/// into its column. Implemented for tuples of [members](MemberOf) up to arity 12.
pub trait ComponentBundle<S: TypeSet>: ComponentSet<S> {
	fn store(self, storage: &mut ComponentStorage<S>);
}

macro_rules! impl_component_bundle {
	($($t:ident),+) => {
		paste! {
			#[allow(unused_parens)]
			impl<S: TypeSet, $($t: MemberOf<S>),+> ComponentBundle<S> for ($($t),+,) {
				fn store(self, storage: &mut ComponentStorage<S>) {
					let ($([<$t:lower>]),+,) = self;
					$(storage.push_value([<$t:lower>]);)+
				}
			}
		}
	};
}

impl_component_bundle!(T0);
impl_component_bundle!(T0, T1);
impl_component_bundle!(T0, T1, T2);
impl_component_bundle!(T0, T1, T2, T3);
impl_component_bundle!(T0, T1, T2, T3, T4);
impl_component_bundle!(T0, T1, T2, T3, T4, T5);
impl_component_bundle!(T0, T1, T2, T3, T4, T5, T6);
impl_component_bundle!(T0, T1, T2, T3, T4, T5, T6, T7);
impl_component_bundle!(T0, T1, T2, T3, T4, T5, T6, T7, T8);
impl_component_bundle!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_component_bundle!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_component_bundle!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
