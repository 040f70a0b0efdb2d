//! Inspection and serialization driven by runtime type information.
//!
//! A [`TypeEditor`] picks one [`Handler`] per type or field and caches it.
//! Handlers present values on a [`Surface`], fill object references from a
//! [`SceneNode`] tree, and write or merge values through the
//! [`vc_stream`] codec.
//!
//! # Examples
//!
//! ```
//! use vc_inspect::{Headless, TypeEditor};
//! use vc_reflect::info::{PrimitiveKind, StructBuilder, Type, TypeInfo};
//! use vc_reflect::registry::TypeRegistry;
//! use vc_reflect::value::{Object, Value};
//!
//! let team = TypeInfo::enumeration("game::Team", &[("Red", 0), ("Blue", 1)]).into_type();
//! let player = StructBuilder::new("game::Player")
//!     .field("hp", &Type::primitive(PrimitiveKind::I32))
//!     .field("team", &team)
//!     .serializable()
//!     .build();
//!
//! let mut registry = TypeRegistry::new();
//! registry.register(player.clone());
//! let mut editor = TypeEditor::new(registry);
//!
//! let mut object = Object::new(&player);
//! object.set("team", Value::Enum(1));
//! assert!(!editor.present_all(&mut object, &mut Headless));
//!
//! let payload = editor.serialize(&object).unwrap();
//! assert_eq!(payload.len(), 8);
//! assert_eq!(editor.deserialize(&player, &payload).unwrap(), object);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod dispatch;
mod error;
mod resolver;
mod scene;
mod surface;

pub mod handler;

#[cfg(test)]
mod fixtures;

// -----------------------------------------------------------------------------
// Exports

pub use error::AttachError;
pub use handler::{Handler, HandlerRef};
pub use resolver::{EditorSettings, ReleaseSignal, TypeEditor};
pub use scene::SceneNode;
pub use surface::{Headless, InspectorHook, Surface, indented};
