use alloc::boxed::Box;
use alloc::format;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Deref;

use crate::info::{CustomAttributes, EnumInfo, PrimitiveKind, Smart, StructInfo};
use crate::info::impl_custom_attributes_fn;
use crate::value::{Object, Value};

// -----------------------------------------------------------------------------
// Origin

/// Which type source a type or field comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The primary reflection provider.
    #[default]
    Native,
    /// The secondary, hot-reloadable runtime.
    Hosted,
}

// -----------------------------------------------------------------------------
// TypeKind

/// The structural kind of a type.
#[derive(Debug, Clone)]
pub enum TypeKind {
    Primitive(PrimitiveKind),
    Enum(EnumInfo),
    /// Fixed-shape native array of the element type.
    Array(Type),
    /// Growable list of the element type.
    List(Type),
    /// Dictionary of key and value types.
    Map(Type, Type),
    Struct(StructInfo),
    /// A member of the host's native object handle family.
    Handle,
    /// The reference-by-type sentinel.
    TypeRef,
    /// A type with no structure known to this crate.
    Opaque,
}

impl TypeKind {
    /// A short name of the kind, used in logs and errors.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Primitive(_) => "Primitive",
            Self::Enum(_) => "Enum",
            Self::Array(_) => "Array",
            Self::List(_) => "List",
            Self::Map(..) => "Map",
            Self::Struct(_) => "Struct",
            Self::Handle => "Handle",
            Self::TypeRef => "TypeRef",
            Self::Opaque => "Opaque",
        }
    }
}

impl fmt::Display for TypeKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Runtime type information.
///
/// # Content
///
/// A `TypeInfo` contains following infomation:
///
/// - **path**: full type path, e.g. `game::Player`, and its short [name](TypeInfo::name).
/// - **kind**: [`TypeKind`], may be `Struct`, `Enum` etc.
/// - **base**: the parent type in a single inheritance chain, if any.
/// - **serializable**: whether values of this type may be written to streams.
/// - **origin**: the [`Origin`] of the type.
/// - **attributes**: [`CustomAttributes`], similar to C# attributes.
///
/// A `TypeInfo` is built once, then frozen into a shared [`Type`].
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{Smart, Type, TypeInfo, TypeKind};
///
/// let object = TypeInfo::handle("Object", None).into_type();
/// let camera = TypeInfo::handle("engine::Camera", Some(&object)).into_type();
///
/// assert_eq!(camera.name(), "Camera");
/// assert!(camera.is_assignable_to(&object));
/// assert!(!object.is_assignable_to(&camera));
///
/// let list = TypeInfo::list(&camera).with_attribute(Smart).into_type();
/// assert_eq!(list.path(), "List<engine::Camera>");
/// assert!(matches!(list.kind(), TypeKind::List(_)));
/// assert!(list.has_attribute::<Smart>());
/// ```
#[derive(Debug)]
pub struct TypeInfo {
    path: Arc<str>,
    kind: TypeKind,
    base: Option<Type>,
    serializable: bool,
    origin: Origin,
    attributes: CustomAttributes,
}

impl TypeInfo {
    impl_custom_attributes_fn!();

    /// Creates a new [`TypeInfo`].
    ///
    /// Composite and opaque types start non-serializable, all others start
    /// serializable.
    pub fn new(path: &str, kind: TypeKind) -> Self {
        let serializable = !matches!(kind, TypeKind::Struct(_) | TypeKind::Opaque);
        Self {
            path: path.into(),
            kind,
            base: None,
            serializable,
            origin: Origin::Native,
            attributes: CustomAttributes::new(),
        }
    }

    /// A built-in scalar or vector type.
    #[inline]
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::new(kind.path(), TypeKind::Primitive(kind))
    }

    /// An enumeration with the given `(name, code)` variants.
    #[inline]
    pub fn enumeration(path: &str, variants: &[(&str, i32)]) -> Self {
        Self::new(path, TypeKind::Enum(EnumInfo::new(variants)))
    }

    /// A native array, named `{element}[]`, with the element's origin.
    pub fn array(element: &Type) -> Self {
        let path = format!("{}[]", element.path());
        Self::new(&path, TypeKind::Array(element.clone())).with_origin(element.origin())
    }

    /// A list, named `List<{element}>`, with the element's origin.
    pub fn list(element: &Type) -> Self {
        let path = format!("List<{}>", element.path());
        Self::new(&path, TypeKind::List(element.clone())).with_origin(element.origin())
    }

    /// A dictionary, named `Dictionary<{key}, {value}>`.
    pub fn map(key: &Type, value: &Type) -> Self {
        let path = format!("Dictionary<{}, {}>", key.path(), value.path());
        Self::new(&path, TypeKind::Map(key.clone(), value.clone()))
    }

    /// A member of the native object handle family.
    pub fn handle(path: &str, base: Option<&Type>) -> Self {
        let mut info = Self::new(path, TypeKind::Handle);
        info.base = base.cloned();
        info
    }

    /// The reference-by-type sentinel, `RefType`.
    #[inline]
    pub fn type_ref() -> Self {
        Self::new("RefType", TypeKind::TypeRef)
    }

    /// A type this crate knows nothing about, never serializable.
    #[inline]
    pub fn opaque(path: &str) -> Self {
        Self::new(path, TypeKind::Opaque)
    }

    /// Adds a marker.
    #[inline]
    pub fn with_attribute<T: Any + Send + Sync>(mut self, marker: T) -> Self {
        self.attributes.insert(marker);
        self
    }

    #[inline]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    #[inline]
    pub fn with_serializable(mut self, serializable: bool) -> Self {
        self.serializable = serializable;
        self
    }

    #[inline]
    pub fn with_base(mut self, base: &Type) -> Self {
        self.base = Some(base.clone());
        self
    }

    /// Freezes this info into a shared [`Type`].
    #[inline]
    pub fn into_type(self) -> Type {
        Type(Arc::new(self))
    }

    /// Returns the full type path.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the short name: the last `::` segment outside generic arguments.
    ///
    /// ```
    /// use vc_reflect::info::{PrimitiveKind, Type, TypeInfo};
    ///
    /// let a = TypeInfo::opaque("game::items::Sword").into_type();
    /// let b = TypeInfo::list(&a).into_type();
    /// assert_eq!(a.name(), "Sword");
    /// assert_eq!(b.name(), "List<game::items::Sword>");
    /// ```
    pub fn name(&self) -> &str {
        let path = self.path();
        let head = path.find('<').map_or(path, |i| &path[..i]);
        match head.rfind("::") {
            Some(i) => &path[i + 2..],
            None => path,
        }
    }

    #[inline]
    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Returns the direct parent type, if any.
    #[inline]
    pub fn base(&self) -> Option<&Type> {
        self.base.as_ref()
    }

    #[inline]
    pub const fn is_serializable(&self) -> bool {
        self.serializable
    }

    #[inline]
    pub const fn origin(&self) -> Origin {
        self.origin
    }

    #[inline]
    pub const fn is_hosted(&self) -> bool {
        matches!(self.origin, Origin::Hosted)
    }

    #[inline]
    pub fn custom_attributes(&self) -> &CustomAttributes {
        &self.attributes
    }

    /// Returns the built-in kind, if this is a primitive.
    #[inline]
    pub fn as_primitive(&self) -> Option<PrimitiveKind> {
        match self.kind {
            TypeKind::Primitive(kind) => Some(kind),
            _ => None,
        }
    }

    #[inline]
    pub fn as_enum(&self) -> Option<&EnumInfo> {
        match &self.kind {
            TypeKind::Enum(info) => Some(info),
            _ => None,
        }
    }

    #[inline]
    pub fn as_struct(&self) -> Option<&StructInfo> {
        match &self.kind {
            TypeKind::Struct(info) => Some(info),
            _ => None,
        }
    }

    /// Returns the element type of an array or list.
    #[inline]
    pub fn element(&self) -> Option<&Type> {
        match &self.kind {
            TypeKind::Array(element) | TypeKind::List(element) => Some(element),
            _ => None,
        }
    }

    pub(crate) fn set_base(&mut self, base: Option<Type>) {
        self.base = base;
    }

    pub(crate) fn set_attributes(&mut self, attributes: CustomAttributes) {
        self.attributes = attributes;
    }
}

// -----------------------------------------------------------------------------
// Type

/// A shared, cheap to clone type descriptor.
///
/// Equality and hashing use the type path and the [`Origin`], so a `Type` is a
/// stable cache key even when the same type is described twice.
#[derive(Clone)]
pub struct Type(Arc<TypeInfo>);

impl Type {
    /// Creates the descriptor of a built-in.
    #[inline]
    pub fn primitive(kind: PrimitiveKind) -> Self {
        TypeInfo::primitive(kind).into_type()
    }

    /// Creates the reference-by-type sentinel.
    #[inline]
    pub fn type_ref() -> Self {
        TypeInfo::type_ref().into_type()
    }

    /// Returns `true` if both handles point to the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns `true` if `base` is this type or one of its ancestors.
    pub fn is_assignable_to(&self, base: &Type) -> bool {
        let mut current = Some(self);
        while let Some(ty) = current {
            if ty == base {
                return true;
            }
            current = ty.base();
        }
        false
    }

    /// The value a fresh slot of this type holds.
    ///
    /// Composites get a nested default object unless they are [`Smart`], which
    /// are nullable, like handles and references.
    pub fn default_value(&self) -> Value {
        match self.kind() {
            TypeKind::Primitive(kind) => kind.default_value(),
            TypeKind::Enum(info) => Value::Enum(info.default_code()),
            TypeKind::Array(_) | TypeKind::List(_) => Value::Seq(Vec::new()),
            TypeKind::Map(..) => Value::Map(Vec::new()),
            TypeKind::Struct(_) if !self.has_attribute::<Smart>() => {
                Value::Object(Box::new(Object::new(self)))
            }
            _ => Value::Null,
        }
    }
}

impl Deref for Type {
    type Target = TypeInfo;

    #[inline]
    fn deref(&self) -> &TypeInfo {
        &self.0
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || (self.origin == other.origin && self.path == other.path)
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
        self.origin.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Type").field(&self.path()).finish()
    }
}

impl fmt::Display for Type {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::{Origin, Type, TypeInfo};
    use crate::info::{PrimitiveKind, Smart, StructBuilder};
    use crate::value::Value;

    #[test]
    fn equality_by_path_and_origin() {
        let a = TypeInfo::opaque("a::A").into_type();
        let b = TypeInfo::opaque("a::A").into_type();
        let hosted = TypeInfo::opaque("a::A").with_origin(Origin::Hosted).into_type();
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert_ne!(a, hosted);
    }

    #[test]
    fn container_paths_and_origin() {
        let el = TypeInfo::opaque("m::Item").with_origin(Origin::Hosted).into_type();
        let array = TypeInfo::array(&el).into_type();
        let nested = TypeInfo::array(&array).into_type();
        assert_eq!(nested.path(), "m::Item[][]");
        assert!(nested.is_hosted());
        assert_eq!(nested.element(), Some(&array));

        let map = TypeInfo::map(&Type::primitive(PrimitiveKind::String), &el).into_type();
        assert_eq!(map.path(), "Dictionary<String, m::Item>");
        assert!(!map.is_hosted());
    }

    #[test]
    fn default_values() {
        let inner = StructBuilder::new("m::Inner")
            .field("x", &Type::primitive(PrimitiveKind::F32))
            .build();
        let smart = StructBuilder::new("m::Opt").with_attribute(Smart).build();
        let team = TypeInfo::enumeration("m::Team", &[("Red", 3)]).into_type();

        assert_eq!(team.default_value(), Value::Enum(3));
        assert_eq!(smart.default_value(), Value::Null);
        assert_eq!(Type::type_ref().default_value(), Value::Null);
        match inner.default_value() {
            Value::Object(obj) => assert_eq!(obj.get("x"), Some(&Value::F32(0.0))),
            other => panic!("unexpected {other:?}"),
        }
    }
}
