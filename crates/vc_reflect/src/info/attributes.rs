use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::hash::HashMap;

// -----------------------------------------------------------------------------
// CustomAttributes

/// A collection of declarative markers for a type or a field.
///
/// Markers are stored by their [`TypeId`].
/// Because of this, there can only be one marker per Rust type.
///
/// # Example
///
/// ```
/// use vc_reflect::info::{CustomAttributes, HideInInspector, RefTarget};
///
/// let attrs = CustomAttributes::new()
///     .with_attribute(HideInInspector)
///     .with_attribute(RefTarget::new("game::Weapon"));
///
/// assert!(attrs.contains::<HideInInspector>());
/// assert_eq!(attrs.get::<RefTarget>().unwrap().path(), "game::Weapon");
/// assert_eq!(attrs.len(), 2);
/// ```
#[derive(Default)]
pub struct CustomAttributes {
    attributes: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl CustomAttributes {
    /// Creates an empty [`CustomAttributes`].
    #[inline]
    pub fn new() -> Self {
        Self {
            attributes: HashMap::default(),
        }
    }

    /// Adds a marker.
    ///
    /// Later insertions for the same type overwrite earlier values.
    #[inline]
    pub fn with_attribute<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    /// Inserts a marker, returns `true` if one of the same type was replaced.
    pub fn insert<T: Any + Send + Sync>(&mut self, value: T) -> bool {
        self.attributes
            .insert(TypeId::of::<T>(), Box::new(value))
            .is_some()
    }

    /// Returns `true` if a marker of type `T` is present.
    #[inline]
    pub fn contains<T: Any>(&self) -> bool {
        self.attributes.contains_key(&TypeId::of::<T>())
    }

    /// Returns the marker of type `T`, if present.
    #[inline]
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.attributes
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Returns the number of stored markers.
    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if no markers are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl fmt::Debug for CustomAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomAttributes")
            .field("len", &self.attributes.len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement `get_attribute` and `has_attribute` on top of `custom_attributes`.
macro_rules! impl_custom_attributes_fn {
    () => {
        /// Returns the marker of type `T`, if present.
        #[inline]
        pub fn get_attribute<T: ::core::any::Any>(&self) -> Option<&T> {
            self.custom_attributes().get::<T>()
        }

        /// Returns `true` if it carries the given marker type.
        #[inline]
        pub fn has_attribute<T: ::core::any::Any>(&self) -> bool {
            self.custom_attributes().contains::<T>()
        }
    };
}

pub(super) use impl_custom_attributes_fn;

#[cfg(test)]
mod tests {
    use super::CustomAttributes;
    use crate::info::{HideInInspector, RefTarget, Smart};

    #[test]
    fn later_marker_overwrites() {
        let mut attrs = CustomAttributes::new().with_attribute(RefTarget::new("a::A"));
        assert!(attrs.insert(RefTarget::new("b::B")));
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get::<RefTarget>().unwrap().path(), "b::B");
    }

    #[test]
    fn missing_marker() {
        let attrs = CustomAttributes::new().with_attribute(Smart);
        assert!(!attrs.contains::<HideInInspector>());
        assert!(attrs.get::<HideInInspector>().is_none());
        assert!(CustomAttributes::default().is_empty());
    }
}
