use std::hash::{Hash, Hasher};
use nohash_hasher::IsEnabled;
use std::fmt;
use std::ops;

/// The bitmask identity of an archetype relative to a [TypeSet](crate::components::TypeSet).
///
/// Bit `k` is set iff the member with [INDEX](crate::components::MemberOf::INDEX)
/// `k` is present in the row or query the mask describes. A set holds at most
/// 64 member types, so one word is always enough.
#[derive(Default, Copy, Clone, Eq, PartialEq)]
pub struct ArchetypeMask {
	bits: u64,
}

impl ArchetypeMask {
	pub const EMPTY: ArchetypeMask = ArchetypeMask { bits: 0 };

	pub const fn from_bits(bits: u64) -> Self {
		Self { bits }
	}

	pub const fn bits(self) -> u64 {
		self.bits
	}

	/// Whether every bit of `other` is also set in `self`,
	/// i.e. `other` describes a subset of this archetype's components.
	pub const fn contains(self, other: ArchetypeMask) -> bool {
		self.bits & other.bits == other.bits
	}

	/// Whether the two masks share at least one set bit.
	pub const fn intersects(self, other: ArchetypeMask) -> bool {
		self.bits & other.bits != 0
	}

	pub const fn is_empty(self) -> bool {
		self.bits == 0
	}
}

impl ops::BitOr for ArchetypeMask {
	type Output = ArchetypeMask;

	fn bitor(self, rhs: ArchetypeMask) -> ArchetypeMask {
		ArchetypeMask { bits: self.bits | rhs.bits }
	}
}

impl ops::BitOrAssign for ArchetypeMask {
	fn bitor_assign(&mut self, rhs: ArchetypeMask) {
		self.bits |= rhs.bits;
	}
}

// A single write_u64 call, so mask-keyed maps can use NoHashHasher.
impl Hash for ArchetypeMask {
	fn hash<H: Hasher>(&self, state: &mut H) {
		state.write_u64(self.bits);
	}
}

impl IsEnabled for ArchetypeMask {}

impl fmt::Debug for ArchetypeMask {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ArchetypeMask({self})")
	}
}

impl fmt::Display for ArchetypeMask {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:064b}", self.bits)
	}
}
