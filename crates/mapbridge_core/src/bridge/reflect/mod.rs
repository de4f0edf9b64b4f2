use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use crate::bridge::GenericValue;

/// Borrowed view of one field value handed to the walker.
pub enum FieldRef<'a> {
	/// Absent value; the walker omits the field.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// 32-bit integer scalar.
	I32(i32),
	/// 64-bit integer scalar.
	I64(i64),
	/// 32-bit float scalar.
	F32(f32),
	/// 64-bit float scalar.
	F64(f64),
	/// String scalar.
	Str(&'a str),
	/// Sequence of element views.
	Seq(Vec<FieldRef<'a>>),
	/// String-keyed entries.
	Map(Vec<(&'a str, FieldRef<'a>)>),
	/// Nested describable object, subject to the cycle guard.
	Object(&'a dyn Reflect),
	/// Value already in bridge form, copied verbatim.
	Generic(&'a GenericValue),
	/// The field exists but could not be read.
	Unreadable(Box<str>),
}

impl FieldRef<'_> {
	/// True for scalars that map directly onto a bridge scalar.
	pub fn is_primitive(&self) -> bool {
		matches!(self, Self::Bool(_) | Self::I32(_) | Self::I64(_) | Self::F32(_) | Self::F64(_) | Self::Str(_))
	}
}

/// Reason an object could not be read during a walk.
#[derive(Debug, Clone)]
pub struct Unreadable(pub Box<str>);

/// Object whose fields can be enumerated by name.
///
/// Implementations call `visit` once per field, in declaration order.
pub trait Reflect {
	/// Type label used for diagnostics and identity.
	fn type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}

	/// Yield every field as a borrowed view.
	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> Result<(), Unreadable>;
}

/// Conversion of a field value into its borrowed view.
pub trait AsField {
	/// Borrow `self` as a field view.
	fn as_field(&self) -> FieldRef<'_>;
}

impl<T: Reflect + ?Sized> Reflect for RefCell<T> {
	fn type_name(&self) -> &'static str {
		std::any::type_name::<T>()
	}

	fn visit_fields(&self, visit: &mut dyn FnMut(&str, FieldRef<'_>)) -> Result<(), Unreadable> {
		let inner = self
			.try_borrow()
			.map_err(|_| Unreadable(format!("{} is mutably borrowed", std::any::type_name::<T>()).into_boxed_str()))?;
		inner.visit_fields(visit)
	}
}

impl<T: Reflect> AsField for RefCell<T> {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Object(self)
	}
}

impl AsField for bool {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Bool(*self)
	}
}

impl AsField for i32 {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::I32(*self)
	}
}

impl AsField for i64 {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::I64(*self)
	}
}

impl AsField for f32 {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::F32(*self)
	}
}

impl AsField for f64 {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::F64(*self)
	}
}

impl AsField for str {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Str(self)
	}
}

impl AsField for String {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Str(self)
	}
}

impl AsField for GenericValue {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Generic(self)
	}
}

impl<T: AsField> AsField for Option<T> {
	fn as_field(&self) -> FieldRef<'_> {
		match self {
			Some(value) => value.as_field(),
			None => FieldRef::Null,
		}
	}
}

impl<T: AsField> AsField for [T] {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Seq(self.iter().map(AsField::as_field).collect())
	}
}

impl<T: AsField> AsField for Vec<T> {
	fn as_field(&self) -> FieldRef<'_> {
		self.as_slice().as_field()
	}
}

impl<T: AsField> AsField for BTreeMap<String, T> {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Map(self.iter().map(|(key, value)| (key.as_str(), value.as_field())).collect())
	}
}

impl<T: AsField> AsField for HashMap<String, T> {
	fn as_field(&self) -> FieldRef<'_> {
		FieldRef::Map(self.iter().map(|(key, value)| (key.as_str(), value.as_field())).collect())
	}
}

impl<T: AsField + ?Sized> AsField for Box<T> {
	fn as_field(&self) -> FieldRef<'_> {
		(**self).as_field()
	}
}

impl<T: AsField + ?Sized> AsField for Rc<T> {
	fn as_field(&self) -> FieldRef<'_> {
		(**self).as_field()
	}
}

impl<T: AsField + ?Sized> AsField for Arc<T> {
	fn as_field(&self) -> FieldRef<'_> {
		(**self).as_field()
	}
}

#[cfg(test)]
mod tests;
