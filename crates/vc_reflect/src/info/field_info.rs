use alloc::sync::Arc;
use core::fmt;
use core::ops::Deref;

use crate::info::{CustomAttributes, Origin, Type, impl_custom_attributes_fn};

// -----------------------------------------------------------------------------
// FieldId

/// Stable identity of a field: the declaring type's path and the field name.
///
/// Field handlers are cached under this key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldId {
    owner: Arc<str>,
    name: Arc<str>,
}

impl FieldId {
    /// Creates a new [`FieldId`].
    #[inline]
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Path of the declaring type.
    #[inline]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Field name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.name)
    }
}

// -----------------------------------------------------------------------------
// FieldInfo

/// Information for a named field of a composite type.
#[derive(Debug)]
pub struct FieldInfo {
    id: FieldId,
    ty: Type,
    index: usize,
    public: bool,
    origin: Origin,
    attributes: CustomAttributes,
}

impl FieldInfo {
    impl_custom_attributes_fn!();

    /// Creates a new [`FieldInfo`].
    ///
    /// `index` is the slot of the field in objects of the owner type.
    pub fn new(
        owner: &str,
        name: &str,
        ty: &Type,
        index: usize,
        public: bool,
        origin: Origin,
        attributes: CustomAttributes,
    ) -> Self {
        Self {
            id: FieldId::new(owner, name),
            ty: ty.clone(),
            index,
            public,
            origin,
            attributes,
        }
    }

    /// Returns the stable identity of this field.
    #[inline]
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    /// Returns the field name.
    #[inline]
    pub fn name(&self) -> &str {
        self.id.name()
    }

    /// Returns the declared type.
    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the declaration position inside the owner.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub const fn is_public(&self) -> bool {
        self.public
    }

    /// Returns which type source declared this field.
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
}

// -----------------------------------------------------------------------------
// Field

/// A shared field descriptor.
///
/// Two `Field`s are equal when their [`FieldId`]s are.
#[derive(Clone, Debug)]
pub struct Field(Arc<FieldInfo>);

impl Field {
    #[inline]
    pub fn new(info: FieldInfo) -> Self {
        Self(Arc::new(info))
    }
}

impl Deref for Field {
    type Target = FieldInfo;

    #[inline]
    fn deref(&self) -> &FieldInfo {
        &self.0
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.id == other.id
    }
}

impl Eq for Field {}

impl fmt::Display for Field {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}
