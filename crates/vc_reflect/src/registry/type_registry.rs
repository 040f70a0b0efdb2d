use alloc::sync::Arc;

use crate::hash::{FixedHashState, HashMap, HashSet};
use crate::info::{ElementType, EntryTypes, PrimitiveKind, Type, TypeInfo, TypeKind};
use crate::registry::TypeSource;

// -----------------------------------------------------------------------------
// TypeRegistry

/// An in-memory [`TypeSource`].
///
/// This struct is used as the central store for type information.
/// [Registering] a type also registers the types it refers to: its base,
/// element, key and value types, and the declared types of its fields.
///
/// Types are found by full path, or by short name when the name is not
/// [ambiguous](TypeRegistry::is_ambiguous).
///
/// # Example
///
/// ```
/// use vc_reflect::info::{PrimitiveKind, TypeInfo};
/// use vc_reflect::registry::{TypeRegistry, TypeSource};
///
/// let mut registry = TypeRegistry::new();
/// let team = TypeInfo::enumeration("game::Team", &[("Red", 0)]).into_type();
/// registry.register(TypeInfo::list(&team).into_type());
///
/// // The element type is registered as a dependency.
/// assert_eq!(registry.type_by_path("Team"), Some(team));
/// assert!(registry.type_by_path("List<game::Team>").is_some());
/// assert_eq!(registry.object_type().unwrap().path(), "Object");
/// ```
///
/// [Registering]: TypeRegistry::register
pub struct TypeRegistry {
    types: HashMap<Arc<str>, Type>,
    type_name_to_path: HashMap<Arc<str>, Arc<str>>,
    ambiguous_names: HashSet<Arc<str>>,
    object_type: Option<Type>,
    hosted: bool,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a empty [`TypeRegistry`].
    #[inline]
    pub const fn empty() -> Self {
        Self {
            types: HashMap::with_hasher(FixedHashState),
            type_name_to_path: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
            object_type: None,
            hosted: false,
        }
    }

    /// Create a type registry with default registrations.
    ///
    /// - every [`PrimitiveKind`]
    /// - `Object`, the root of the native handle family
    /// - `RefType`, the reference-by-type sentinel
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for kind in PrimitiveKind::ALL {
            registry.register(Type::primitive(kind));
        }
        let object = TypeInfo::handle("Object", None).into_type();
        registry.register(object.clone());
        registry.object_type = Some(object);
        registry.register(Type::type_ref());
        registry
    }

    /// Create an empty registry acting as the secondary runtime.
    ///
    /// A hosted registry never reports hosted array types as serializable.
    #[inline]
    pub const fn hosted() -> Self {
        let mut registry = Self::empty();
        registry.hosted = true;
        registry
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_type_indices(&mut self, ty: &Type) {
        let path: Arc<str> = ty.path().into();
        let type_name: Arc<str> = ty.name().into();

        // Check for duplicate names.
        if !self.ambiguous_names.contains(&type_name) {
            if self.type_name_to_path.contains_key(&type_name) {
                self.type_name_to_path.remove(&type_name);
                self.ambiguous_names.insert(type_name);
            } else {
                self.type_name_to_path.insert(type_name, path.clone());
            }
        }

        self.types.insert(path, ty.clone());
    }

    fn register_dependencies(&mut self, ty: &Type) {
        if let Some(base) = ty.base() {
            self.register(base.clone());
        }
        match ty.kind() {
            TypeKind::Array(element) | TypeKind::List(element) => {
                self.register(element.clone());
            }
            TypeKind::Map(key, value) => {
                self.register(key.clone());
                self.register(value.clone());
            }
            TypeKind::Struct(info) => {
                for field in info.fields() {
                    self.register(field.ty().clone());
                    if let Some(ElementType(element)) = field.get_attribute::<ElementType>() {
                        self.register(element.clone());
                    }
                    if let Some(EntryTypes(key, value)) = field.get_attribute::<EntryTypes>() {
                        self.register(key.clone());
                        self.register(value.clone());
                    }
                }
            }
            _ => {}
        }
    }

    /// Attempts to register the type if it has not yet been registered already.
    ///
    /// This will also recursively register type dependencies.
    /// If a type with the same path exists, nothing is registered and `false`
    /// is returned.
    pub fn register(&mut self, ty: Type) -> bool {
        if self.types.contains_key(ty.path()) {
            return false;
        }
        self.add_new_type_indices(&ty);
        self.register_dependencies(&ty);
        true
    }

    /// Whether a type with the given full path has been registered.
    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        self.types.contains_key(path)
    }

    /// Returns the type with the given full path.
    #[inline]
    pub fn get_with_type_path(&self, path: &str) -> Option<&Type> {
        self.types.get(path)
    }

    /// Returns the type with the given short name.
    ///
    /// If the type name is ambiguous, or if no type with the given name
    /// has been registered, returns `None`.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&Type> {
        match self.type_name_to_path.get(type_name) {
            Some(path) => self.types.get(path),
            None => None,
        }
    }

    /// Returns `true` if the given short name matches multiple registered types.
    ///
    /// # Example
    /// ```
    /// # use vc_reflect::{info::TypeInfo, registry::TypeRegistry};
    /// let mut registry = TypeRegistry::empty();
    /// registry.register(TypeInfo::opaque("foo::MyType").into_type());
    /// registry.register(TypeInfo::opaque("bar::MyType").into_type());
    /// assert_eq!(registry.is_ambiguous("MyType"), true);
    /// ```
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns an iterator over the registered types.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Type> {
        self.types.values()
    }
}

impl TypeSource for TypeRegistry {
    fn type_by_path(&self, path: &str) -> Option<Type> {
        self.get_with_type_path(path)
            .or_else(|| self.get_with_type_name(path))
            .cloned()
    }

    #[inline]
    fn object_type(&self) -> Option<Type> {
        self.object_type.clone()
    }

    fn is_serializable(&self, ty: &Type) -> bool {
        if self.hosted && ty.is_hosted() && ty.path().ends_with("[]") {
            return false;
        }
        ty.is_serializable()
    }
}

impl core::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.types.keys()).finish()
    }
}
