pub mod components;
pub mod entities;
pub mod storage;
pub mod error;

pub use lazy_static::lazy_static;

pub mod prelude {
	pub use crate::components::{ArchetypeMask, Component, ComponentSet, MemberOf, TypeSet};
	pub use crate::storage::{
		ComponentBundle, ComponentQuery, ComponentStorage, MasterStorage, StorageIter,
	};
	pub use crate::entities::EntityBuilder;
	pub use crate::error::{Result, StorageError};
	pub use crate::type_set;
}

#[cfg(test)]
mod tests;
