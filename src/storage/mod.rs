//! Columnar storage partitioned by archetype.
//!
//! A [ComponentStorage] owns one growable column per component type of exactly
//! one archetype, all columns kept the same length in lock-step. A
//! [StorageIter] walks any requested subset of those columns row by row, and a
//! [MasterStorage] routes rows to the store matching their exact archetype and
//! answers queries spanning every archetype that is a superset of the request.

mod column;
mod component_storage;
mod storage_iterator;
mod master_storage;

pub use component_storage::*;
pub use storage_iterator::*;
pub use master_storage::*;

pub(crate) use column::*;
