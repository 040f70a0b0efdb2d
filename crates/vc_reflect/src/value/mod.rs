//! Dynamic values edited by handlers and written to streams.
//!
//! ## Menu
//!
//! - [`Value`]: one slot's content. Scalars and vectors map one to one to
//!   [`PrimitiveKind`](crate::info::PrimitiveKind).
//! - [`Object`]: a composite instance with one slot per declared field.
//! - [`Handle`]: a reference to a host native object, compared by identity.

// -----------------------------------------------------------------------------
// Modules

mod handle;
mod object;

// -----------------------------------------------------------------------------
// Exports

pub use handle::Handle;
pub use object::Object;

// -----------------------------------------------------------------------------
// Value

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

/// The content of one slot.
///
/// `Null` stands for an absent reference: an unset handle, an empty
/// reference-by-type field or a nullable composite.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    I8(i8),
    U8(u8),
    Char(char),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    IVec2([i32; 2]),
    IVec3([i32; 3]),
    /// Underlying code of an enum variant.
    Enum(i32),
    Handle(Handle),
    /// Elements of an array or a list.
    Seq(Vec<Value>),
    /// Entries of a dictionary, in insertion order.
    Map(Vec<(Value, Value)>),
    Object(Box<Object>),
}

impl Value {
    /// A short name of the variant, used in logs and errors.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I8(_) => "I8",
            Self::U8(_) => "U8",
            Self::Char(_) => "Char",
            Self::I16(_) => "I16",
            Self::U16(_) => "U16",
            Self::I32(_) => "I32",
            Self::U32(_) => "U32",
            Self::I64(_) => "I64",
            Self::U64(_) => "U64",
            Self::F32(_) => "F32",
            Self::F64(_) => "F64",
            Self::Str(_) => "Str",
            Self::Vec2(_) => "Vec2",
            Self::Vec3(_) => "Vec3",
            Self::Vec4(_) => "Vec4",
            Self::IVec2(_) => "IVec2",
            Self::IVec3(_) => "IVec3",
            Self::Enum(_) => "Enum",
            Self::Handle(_) => "Handle",
            Self::Seq(_) => "Seq",
            Self::Map(_) => "Map",
            Self::Object(_) => "Object",
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub fn as_handle(&self) -> Option<&Handle> {
        match self {
            Self::Handle(handle) => Some(handle),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    #[inline]
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }
}

impl From<Object> for Value {
    #[inline]
    fn from(object: Object) -> Self {
        Self::Object(Box::new(object))
    }
}

impl From<Handle> for Value {
    #[inline]
    fn from(handle: Handle) -> Self {
        Self::Handle(handle)
    }
}
