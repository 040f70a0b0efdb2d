use alloc::sync::Arc;

use crate::info::Type;

/// The field is not shown by the inspector and resolves to the inert handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HideInInspector;

/// The type is a nullable composite edited through a smart wrapper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Smart;

/// The type is backed by a native component agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Agent;

/// A non-public field that is still serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeField;

/// A public field that is never serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonSerialized;

/// Names the concrete type a reference-by-type field binds to.
///
/// Only meaningful on fields whose declared type (or element type)
/// is the `RefType` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefTarget(Arc<str>);

impl RefTarget {
    /// Creates a marker for the type with the given path or short name.
    #[inline]
    pub fn new(path: impl Into<Arc<str>>) -> Self {
        Self(path.into())
    }

    /// Returns the type path or short name to bind.
    #[inline]
    pub fn path(&self) -> &str {
        &self.0
    }
}

/// Declared element type of a list field, preferred over the list's own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementType(pub Type);

/// Declared key and value types of a dictionary field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTypes(pub Type, pub Type);
