use alloc::string::String;

use thiserror::Error;

use crate::TypeTag;

// -----------------------------------------------------------------------------
// Error

/// Failure while writing or merging a stream.
///
/// These always propagate to the caller; no default value is ever
/// substituted for bad wire data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StreamError {
    #[error("stream underrun: needed {needed} bytes, {remaining} remaining")]
    Underrun { needed: usize, remaining: usize },

    #[error("type tag mismatch: expected {expected}, found {found}")]
    TagMismatch { expected: TypeTag, found: TypeTag },

    #[error("unknown type tag {0}")]
    UnknownTag(u8),

    #[error("string payload is not valid UTF-8")]
    InvalidUtf8,

    #[error("invalid char scalar value {0:#x}")]
    InvalidChar(u32),

    #[error("invalid bool byte {0}")]
    InvalidBool(u8),

    #[error("code {code} is not a variant of enum `{type_path}`")]
    UnknownEnum { type_path: String, code: i32 },

    #[error("object reference {index} is out of the object table (len {len})")]
    UnknownObject { index: i32, len: usize },

    #[error("object of type `{found}` is not assignable to `{expected}`")]
    IncompatibleObject { expected: String, found: String },

    #[error("value shape mismatch: expected {expected}, found {found}")]
    Shape {
        expected: &'static str,
        found: &'static str,
    },

    #[error("dictionary key was read twice")]
    DuplicateKey,

    #[error("{len} elements that take no bytes exceed the limit of {max}")]
    ElementLimit { len: usize, max: usize },

    #[error("length {0} does not fit a u32 prefix")]
    LengthOverflow(usize),

    #[error("{0} trailing bytes after the last value")]
    TrailingBytes(usize),
}
