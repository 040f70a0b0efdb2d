//! Type sources for resolution and dispatch.
//!
//! ## Menu
//!
//! - [`TypeSource`]: the reflection provider contract. Enumerates serializable
//!   fields, answers assignability and finds types by path.
//! - [`TypeRegistry`]: an in-memory `TypeSource`, usable as the primary
//!   provider or as a secondary ("hosted") runtime.
//! - [`NoHostedTypes`]: the null secondary source, used when no hosted
//!   runtime is present.
//! - [`is_serialized_field`]: the serializable-field rule shared by sources.

// -----------------------------------------------------------------------------
// Modules

mod source;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use source::{NoHostedTypes, TypeSource, is_serialized_field};
pub use type_registry::TypeRegistry;
