/// A plain value type storable in one column of an archetype.
///
/// Implement it with #\[derive([`Component`])] or by hand; the trait itself
/// carries no behaviour. A component has no runtime identity beyond its static
/// type: its bit index is assigned by the [TypeSet](crate::components::TypeSet)
/// it is declared in.
pub trait Component: 'static {}
