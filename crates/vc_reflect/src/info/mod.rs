//! Runtime type information.
//!
//! ## Menu
//!
//! - [`Type`]: a cheap, clonable type descriptor; equality and hashing use the
//!   type path and its [`Origin`], so it can key caches.
//!     - [`TypeInfo`]: the data behind a `Type`, including its [`TypeKind`].
//!     - [`PrimitiveKind`]: the fixed set of built-in scalar and vector types.
//!     - [`EnumInfo`]: ordered enum variants with their underlying codes.
//!     - [`StructInfo`]: ordered declared fields of a composite type.
//!     - [`StructBuilder`]: assembles composite types and their fields.
//!
//! - [`Field`]: a field descriptor with a stable [`FieldId`].
//!
//! - [`CustomAttributes`]: markers attached to types and fields, keyed by the
//!   marker's Rust type, just like C# attributes.
//!     - Built-in markers: [`HideInInspector`], [`Smart`], [`Agent`],
//!       [`RefTarget`], [`ElementType`], [`EntryTypes`], [`SerializeField`]
//!       and [`NonSerialized`].

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod enum_info;
mod field_info;
mod markers;
mod primitive;
mod struct_info;
mod type_info;

// -----------------------------------------------------------------------------
// Exports

pub use attributes::CustomAttributes;
use attributes::impl_custom_attributes_fn;
pub use enum_info::{EnumInfo, EnumVariant};
pub use field_info::{Field, FieldId, FieldInfo};
pub use markers::{Agent, ElementType, EntryTypes, HideInInspector, Smart};
pub use markers::{NonSerialized, RefTarget, SerializeField};
pub use primitive::PrimitiveKind;
pub use struct_info::{StructBuilder, StructInfo};
pub use type_info::{Origin, Type, TypeInfo, TypeKind};
