//! The fixed, ordered universe of component types known to the program.
//!
//! A [TypeSet] is declared exactly once per domain of component types with
//! [type_set!](crate::type_set). Membership is a compile-time property:
//! asking for the bit index of a type outside the set fails to compile,
//! as does declaring the same type twice or declaring more than 64 members.

use std::any::TypeId;

/// A fixed, ordered collection of distinct [Component](crate::components::Component)
/// types declared with [type_set!](crate::type_set).
pub trait TypeSet: 'static + Sized {
	/// The number of declared member types.
	const LEN: usize;

	/// The tuple of every declared member, in declaration order.
	/// Used by [iter_all](crate::storage::ComponentStorage::iter_all).
	type Members;

	/// The [TypeIds](TypeId) of every declared member, in declaration order.
	fn type_ids() -> &'static [TypeId];

	/// Whether any member of this set is also a member of `Other`.
	fn intersects<Other: TypeSet>() -> bool {
		Self::type_ids().iter().any(|id| Other::type_ids().contains(id))
	}
}

/// Membership of a [Component](crate::components::Component) type in a [TypeSet].
///
/// Implemented by [type_set!](crate::type_set) for each declared member; the
/// bit index counts from the tail of the declaration, so the last declared
/// type holds bit 0. The assignment is stable and injective over the set.
pub trait MemberOf<S: TypeSet>: crate::components::Component {
	const INDEX: u32;

	/// The single-bit mask of this member within `S`.
	fn bit() -> crate::components::ArchetypeMask {
		crate::components::ArchetypeMask::from_bits(1u64 << Self::INDEX)
	}
}

/// Declare a [TypeSet]: a zero-sized set type plus one [MemberOf] impl per member.
///
/// ```
/// use tandem_ecs::prelude::*;
///
/// #[derive(Component)]
/// pub struct Health(u32);
///
/// #[derive(Component)]
/// pub struct Label(String);
///
/// type_set! {
/// 	pub struct GameSet { Health, Label }
/// }
///
/// assert_eq!(<Health as MemberOf<GameSet>>::INDEX, 1);
/// assert_eq!(<Label as MemberOf<GameSet>>::INDEX, 0);
/// ```
#[macro_export]
macro_rules! type_set {
	($vis:vis struct $name:ident { $($member:ty),+ $(,)? }) => {
		$vis struct $name;

		const _: () = ::std::assert!(
			$crate::count_types!($($member),+) <= 64,
			"a TypeSet supports at most 64 component types"
		);

		impl $crate::components::TypeSet for $name {
			const LEN: usize = $crate::count_types!($($member),+);

			type Members = ($($member),+,);

			fn type_ids() -> &'static [::std::any::TypeId] {
				$crate::lazy_static! {
					static ref IDS: ::std::vec::Vec<::std::any::TypeId> =
						::std::vec![$(::std::any::TypeId::of::<$member>()),+];
				}
				IDS.as_slice()
			}
		}

		$crate::type_set!(@index $name; $($member),+);
	};

	(@index $name:ident; $head:ty $(, $tail:ty)*) => {
		impl $crate::components::MemberOf<$name> for $head {
			const INDEX: u32 = $crate::count_types!($($tail),*) as u32;
		}

		$crate::type_set!(@index $name; $($tail),*);
	};

	(@index $name:ident;) => {};
}

/// Counts the types in a comma separated list. Used by [type_set!](crate::type_set).
#[macro_export]
macro_rules! count_types {
	() => { 0usize };
	($head:ty $(, $tail:ty)*) => { 1usize + $crate::count_types!($($tail),*) };
}
