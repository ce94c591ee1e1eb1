use crate::components::Component;
use std::any::Any;

/// A polymorphic container for values of a single component type.
///
/// The erased `Vec<T>` keeps ownership semantics intact: components that hold
/// heap data (strings and the like) are dropped with their column.
pub(crate) struct Column {
	values: Box<dyn Any>,
	len: usize,
}

impl Column {
	pub fn new<T: Component>() -> Self {
		Self {
			values: Box::new(Vec::<T>::new()),
			len: 0,
		}
	}

	pub fn push<T: Component>(&mut self, value: T) {
		self.vec_mut::<T>().push(value);
		self.len += 1;
	}

	pub fn as_slice<T: Component>(&self) -> &[T] {
		self.values
			.downcast_ref::<Vec<T>>()
			.expect("column holds a different component type")
	}

	pub fn len(&self) -> usize {
		self.len
	}

	fn vec_mut<T: Component>(&mut self) -> &mut Vec<T> {
		self.values
			.downcast_mut::<Vec<T>>()
			.expect("column holds a different component type")
	}
}
