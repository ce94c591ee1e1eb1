use crate::components::{ArchetypeMask, MemberOf, TypeSet};

/// A selection of member types of the [TypeSet] `S`, described at the type level.
///
/// Implemented for tuples of [members](MemberOf) up to arity 12. The mask is a
/// `const` OR over the members' bits, so it is set-valued: `(A, B)` and `(B, A)`
/// produce the same mask. `()` is the empty selection.
pub trait ComponentSet<S: TypeSet> {
	const MASK: u64;

	/// The combined [ArchetypeMask] of the selected members.
	fn mask() -> ArchetypeMask {
		ArchetypeMask::from_bits(Self::MASK)
	}
}

impl<S: TypeSet> ComponentSet<S> for () {
	const MASK: u64 = 0;
}

macro_rules! impl_component_set {
	($($t:ident),+) => {
		#[allow(unused_parens)]
		impl<S: TypeSet, $($t: MemberOf<S>),+> ComponentSet<S> for ($($t),+,) {
			const MASK: u64 = 0 $(| (1u64 << $t::INDEX))+;
		}
	};
}

impl_component_set!(T0);
impl_component_set!(T0, T1);
impl_component_set!(T0, T1, T2);
impl_component_set!(T0, T1, T2, T3);
impl_component_set!(T0, T1, T2, T3, T4);
impl_component_set!(T0, T1, T2, T3, T4, T5);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
