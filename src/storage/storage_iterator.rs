use crate::components::{ComponentSet, MemberOf, TypeSet};
use crate::storage::ComponentStorage;
use std::marker::PhantomData;
use paste::paste;

/// The column selection of a [StorageIter], described at the type level.
///
/// Implemented for tuples of [members](MemberOf) up to arity 12: `Slices` is
/// the matching tuple of shared column slices, `Row` the matching tuple of
/// shared references. The mask comes from the [ComponentSet] supertrait.
pub trait ComponentQuery<'s, S: TypeSet>: ComponentSet<S> {
	type Slices: Copy;
	type Row;

	fn slices(storage: &'s ComponentStorage<S>) -> Self::Slices;

	/// The shortest selected column. Columns of one store are kept the same
	/// length, but the bound is taken per column so the iterator stops early
	/// instead of overrunning if handed uneven slices.
	fn len(slices: &Self::Slices) -> usize;

	fn row(slices: &Self::Slices, index: usize) -> Self::Row;
}

/// A lock-step cursor over the columns selected by `Q`, one tuple of
/// references per row, bounded by the shortest selected column.
///
/// Supports both the explicit pull protocol ([has_next](StorageIter::has_next)
/// / [current](StorageIter::current) / [advance](StorageIter::advance)) and
/// the [Iterator] protocol; the two produce the same sequence of tuples. The
/// iterator borrows the store for `'s`, so the store cannot be pushed to while
/// one is alive. Re-querying the store yields a fresh iterator.
pub struct StorageIter<'s, S: TypeSet, Q: ComponentQuery<'s, S>> {
	slices: Q::Slices,
	cursor: usize,
	len: usize,
	_set: PhantomData<&'s S>,
}

impl<'s, S: TypeSet, Q: ComponentQuery<'s, S>> StorageIter<'s, S, Q> {
	pub(crate) fn new(storage: &'s ComponentStorage<S>) -> Self {
		let slices = Q::slices(storage);
		let len = Q::len(&slices);

		Self {
			slices,
			cursor: 0,
			len,
			_set: PhantomData,
		}
	}

	/// Whether every cursor still has a value left.
	pub fn has_next(&self) -> bool {
		self.cursor < self.len
	}

	/// The tuple of references at the current row, without copying the values.
	/// Must not be called once the iterator is exhausted.
	pub fn current(&self) -> Q::Row {
		Q::row(&self.slices, self.cursor)
	}

	/// Moves every cursor forward by one row.
	/// Must not be called once the iterator is exhausted.
	pub fn advance(&mut self) {
		debug_assert!(self.cursor < self.len);
		self.cursor += 1;
	}

	pub fn remaining(&self) -> usize {
		self.len - self.cursor
	}
}

impl<'s, S: TypeSet, Q: ComponentQuery<'s, S>> Iterator for StorageIter<'s, S, Q> {
	type Item = Q::Row;

	fn next(&mut self) -> Option<Q::Row> {
		if self.cursor >= self.len {
			return None;
		}

		let row = Q::row(&self.slices, self.cursor);
		self.cursor += 1;
		Some(row)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining(), Some(self.remaining()))
	}
}

impl<'s, S: TypeSet, Q: ComponentQuery<'s, S>> ExactSizeIterator for StorageIter<'s, S, Q> {}

macro_rules! impl_component_query {
	($($t:ident),+) => {
		paste! {
			#[allow(unused_parens)]
			impl<'s, S: TypeSet, $($t: MemberOf<S>),+> ComponentQuery<'s, S> for ($($t),+,) {
				type Slices = ($(&'s [$t]),+,);
				type Row = ($(&'s $t),+,);

				fn slices(storage: &'s ComponentStorage<S>) -> Self::Slices {
					($(storage.column_slice::<$t>()),+,)
				}

				fn len(slices: &Self::Slices) -> usize {
					let ($([<$t:lower>]),+,) = *slices;
					let mut len = usize::MAX;
					$(len = usize::min(len, [<$t:lower>].len());)+
					len
				}

				fn row(slices: &Self::Slices, index: usize) -> Self::Row {
					let ($([<$t:lower>]),+,) = *slices;
					($(&[<$t:lower>][index]),+,)
				}
			}
		}
	};
}

impl_component_query!(T0);
impl_component_query!(T0, T1);
impl_component_query!(T0, T1, T2);
impl_component_query!(T0, T1, T2, T3);
impl_component_query!(T0, T1, T2, T3, T4);
impl_component_query!(T0, T1, T2, T3, T4, T5);
impl_component_query!(T0, T1, T2, T3, T4, T5, T6);
impl_component_query!(T0, T1, T2, T3, T4, T5, T6, T7);
impl_component_query!(T0, T1, T2, T3, T4, T5, T6, T7, T8);
impl_component_query!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_component_query!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_component_query!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
