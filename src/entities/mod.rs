//! Staging of rows before insertion.
//!
//! Rows are anonymous: there is no entity identifier. An [EntityBuilder]
//! only assembles one row's component values and hands them to a store.

mod entity_builder;

pub use entity_builder::*;
