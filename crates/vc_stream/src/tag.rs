use core::fmt;

use vc_reflect::info::PrimitiveKind;

use crate::StreamError;

/// One byte naming the wire shape of a serialized value.
///
/// Every handler variant owns exactly one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeTag {
    /// Writes nothing.
    Inert = 0,
    Bool,
    I8,
    U8,
    Char,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    String,
    Vec2,
    Vec3,
    Vec4,
    IVec2,
    IVec3,
    Enum,
    Array,
    List,
    Map,
    Object,
    Smart,
    TypeRef,
    Handle,
    Agent,
    HotList,
}

impl TypeTag {
    const ALL: [TypeTag; 29] = [
        Self::Inert,
        Self::Bool,
        Self::I8,
        Self::U8,
        Self::Char,
        Self::I16,
        Self::U16,
        Self::I32,
        Self::U32,
        Self::I64,
        Self::U64,
        Self::F32,
        Self::F64,
        Self::String,
        Self::Vec2,
        Self::Vec3,
        Self::Vec4,
        Self::IVec2,
        Self::IVec3,
        Self::Enum,
        Self::Array,
        Self::List,
        Self::Map,
        Self::Object,
        Self::Smart,
        Self::TypeRef,
        Self::Handle,
        Self::Agent,
        Self::HotList,
    ];

    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for TypeTag {
    type Error = StreamError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, StreamError> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(StreamError::UnknownTag(value))
    }
}

impl From<PrimitiveKind> for TypeTag {
    fn from(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::I32 => Self::I32,
            PrimitiveKind::U32 => Self::U32,
            PrimitiveKind::I8 => Self::I8,
            PrimitiveKind::U8 => Self::U8,
            PrimitiveKind::Char => Self::Char,
            PrimitiveKind::I16 => Self::I16,
            PrimitiveKind::U16 => Self::U16,
            PrimitiveKind::I64 => Self::I64,
            PrimitiveKind::U64 => Self::U64,
            PrimitiveKind::F32 => Self::F32,
            PrimitiveKind::F64 => Self::F64,
            PrimitiveKind::String => Self::String,
            PrimitiveKind::Bool => Self::Bool,
            PrimitiveKind::Vec2 => Self::Vec2,
            PrimitiveKind::Vec3 => Self::Vec3,
            PrimitiveKind::Vec4 => Self::Vec4,
            PrimitiveKind::IVec2 => Self::IVec2,
            PrimitiveKind::IVec3 => Self::IVec3,
        }
    }
}

impl fmt::Display for TypeTag {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
