use alloc::string::String;
use core::fmt;

use crate::value::Value;

/// The fixed set of built-in scalar and vector types.
///
/// Built-ins are matched by their exact [`path`](PrimitiveKind::path) and have
/// a handler table that is populated once and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    I32,
    U32,
    I8,
    U8,
    Char,
    I16,
    U16,
    I64,
    U64,
    F32,
    F64,
    String,
    Bool,
    Vec2,
    Vec3,
    Vec4,
    IVec2,
    IVec3,
}

impl PrimitiveKind {
    /// Every built-in kind, in table order.
    pub const ALL: [PrimitiveKind; 18] = [
        Self::I32,
        Self::U32,
        Self::I8,
        Self::U8,
        Self::Char,
        Self::I16,
        Self::U16,
        Self::I64,
        Self::U64,
        Self::F32,
        Self::F64,
        Self::String,
        Self::Bool,
        Self::Vec2,
        Self::Vec3,
        Self::Vec4,
        Self::IVec2,
        Self::IVec3,
    ];

    /// Returns the exact type path of this built-in.
    pub const fn path(self) -> &'static str {
        match self {
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::Char => "char",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "String",
            Self::Bool => "bool",
            Self::Vec2 => "Vec2",
            Self::Vec3 => "Vec3",
            Self::Vec4 => "Vec4",
            Self::IVec2 => "IVec2",
            Self::IVec3 => "IVec3",
        }
    }

    /// Finds the built-in with exactly this path.
    ///
    /// ```
    /// use vc_reflect::info::PrimitiveKind;
    ///
    /// assert_eq!(PrimitiveKind::from_path("f32"), Some(PrimitiveKind::F32));
    /// assert_eq!(PrimitiveKind::from_path("F32"), None);
    /// ```
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.path() == path)
    }

    /// Returns the zero value of this built-in.
    pub fn default_value(self) -> Value {
        match self {
            Self::I32 => Value::I32(0),
            Self::U32 => Value::U32(0),
            Self::I8 => Value::I8(0),
            Self::U8 => Value::U8(0),
            Self::Char => Value::Char('\0'),
            Self::I16 => Value::I16(0),
            Self::U16 => Value::U16(0),
            Self::I64 => Value::I64(0),
            Self::U64 => Value::U64(0),
            Self::F32 => Value::F32(0.0),
            Self::F64 => Value::F64(0.0),
            Self::String => Value::Str(String::new()),
            Self::Bool => Value::Bool(false),
            Self::Vec2 => Value::Vec2([0.0; 2]),
            Self::Vec3 => Value::Vec3([0.0; 3]),
            Self::Vec4 => Value::Vec4([0.0; 4]),
            Self::IVec2 => Value::IVec2([0; 2]),
            Self::IVec3 => Value::IVec3([0; 3]),
        }
    }

    /// Returns `true` if `value` has the shape of this built-in.
    pub fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::I32, Value::I32(_))
                | (Self::U32, Value::U32(_))
                | (Self::I8, Value::I8(_))
                | (Self::U8, Value::U8(_))
                | (Self::Char, Value::Char(_))
                | (Self::I16, Value::I16(_))
                | (Self::U16, Value::U16(_))
                | (Self::I64, Value::I64(_))
                | (Self::U64, Value::U64(_))
                | (Self::F32, Value::F32(_))
                | (Self::F64, Value::F64(_))
                | (Self::String, Value::Str(_))
                | (Self::Bool, Value::Bool(_))
                | (Self::Vec2, Value::Vec2(_))
                | (Self::Vec3, Value::Vec3(_))
                | (Self::Vec4, Value::Vec4(_))
                | (Self::IVec2, Value::IVec2(_))
                | (Self::IVec3, Value::IVec3(_))
        )
    }
}

impl fmt::Display for PrimitiveKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
