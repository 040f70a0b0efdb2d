//! Runtime type descriptions for the inspector and the stream codec.
//!
//! The host's reflection system is consumed as an opaque capability. This
//! crate gives it a shape:
//!
//! - [`info`]: [`Type`](info::Type) and [`Field`](info::Field) descriptors,
//!   their kinds and the declarative markers attached to them.
//! - [`value`]: dynamic values ([`Value`](value::Value),
//!   [`Object`](value::Object), [`Handle`](value::Handle)) that handlers edit
//!   and serialize.
//! - [`registry`]: the [`TypeSource`](registry::TypeSource) provider contract
//!   and an in-memory [`TypeRegistry`](registry::TypeRegistry).
//!
//! # Examples
//!
//! ```
//! use vc_reflect::info::{PrimitiveKind, StructBuilder, Type};
//! use vc_reflect::registry::{TypeRegistry, TypeSource};
//!
//! let mut registry = TypeRegistry::new();
//! let player = StructBuilder::new("game::Player")
//!     .field("hp", &Type::primitive(PrimitiveKind::I32))
//!     .serializable()
//!     .build();
//! registry.register(player.clone());
//!
//! let fields = registry.serializable_fields(&player);
//! assert_eq!(fields.len(), 1);
//! assert_eq!(registry.type_by_path("Player"), Some(player));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod hash;
pub mod info;
pub mod registry;
pub mod value;
