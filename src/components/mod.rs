//! [Components](Component) are the plain data records stored in the columns of an
//! [archetype](crate::storage::ComponentStorage).
//!
//! The full universe of component types an application uses is declared once,
//! up front, with [type_set!](crate::type_set); every other piece of the crate
//! is keyed off the bit indices that declaration assigns.

mod component;
mod type_set;
mod archetype_mask;
mod component_set;

pub use component::*;
pub use type_set::*;
pub use archetype_mask::*;
pub use component_set::*;
pub use tandem_ecs_derive::Component;
