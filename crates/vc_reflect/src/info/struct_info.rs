use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;

use crate::info::{CustomAttributes, Field, FieldId, FieldInfo, Origin, Type, TypeInfo, TypeKind};

// -----------------------------------------------------------------------------
// StructInfo

/// Declared fields of a composite type, inherited fields first.
#[derive(Clone, Debug)]
pub struct StructInfo {
    fields: Box<[Field]>,
}

impl StructInfo {
    /// Returns all declared fields, in declaration order.
    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the field with the given name, if present.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Returns the field at the given slot, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Returns the slot of the field with the given identity.
    pub fn slot_of(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id() == id)
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}

// -----------------------------------------------------------------------------
// StructBuilder

struct PendingField {
    name: String,
    ty: Type,
    public: bool,
    attributes: CustomAttributes,
}

/// Assembles a composite [`Type`].
///
/// Fields of a composite base type are inherited and keep their identity.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{CustomAttributes, HideInInspector, PrimitiveKind};
/// use vc_reflect::info::{StructBuilder, Type};
///
/// let i32_ty = Type::primitive(PrimitiveKind::I32);
/// let base = StructBuilder::new("game::Unit").field("hp", &i32_ty).build();
/// let hero = StructBuilder::new("game::Hero")
///     .base(&base)
///     .field_with(
///         "secret",
///         &i32_ty,
///         CustomAttributes::new().with_attribute(HideInInspector),
///     )
///     .serializable()
///     .build();
///
/// let info = hero.as_struct().unwrap();
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.field_at(0).unwrap().id().owner(), "game::Unit");
/// assert!(info.field("secret").unwrap().has_attribute::<HideInInspector>());
/// assert!(hero.is_assignable_to(&base));
/// ```
pub struct StructBuilder {
    path: String,
    fields: Vec<PendingField>,
    base: Option<Type>,
    serializable: bool,
    origin: Origin,
    attributes: CustomAttributes,
}

impl StructBuilder {
    /// Starts a composite type with the given path.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.into(),
            fields: Vec::new(),
            base: None,
            serializable: false,
            origin: Origin::Native,
            attributes: CustomAttributes::new(),
        }
    }

    /// Adds a public field without markers.
    #[inline]
    pub fn field(self, name: &str, ty: &Type) -> Self {
        self.push(name, ty, true, CustomAttributes::new())
    }

    /// Adds a public field with markers.
    #[inline]
    pub fn field_with(self, name: &str, ty: &Type, attributes: CustomAttributes) -> Self {
        self.push(name, ty, true, attributes)
    }

    /// Adds a non-public field without markers.
    #[inline]
    pub fn private_field(self, name: &str, ty: &Type) -> Self {
        self.push(name, ty, false, CustomAttributes::new())
    }

    /// Adds a non-public field with markers.
    #[inline]
    pub fn private_field_with(self, name: &str, ty: &Type, attributes: CustomAttributes) -> Self {
        self.push(name, ty, false, attributes)
    }

    fn push(mut self, name: &str, ty: &Type, public: bool, attributes: CustomAttributes) -> Self {
        self.fields.push(PendingField {
            name: name.into(),
            ty: ty.clone(),
            public,
            attributes,
        });
        self
    }

    /// Sets the parent type.
    #[inline]
    pub fn base(mut self, base: &Type) -> Self {
        self.base = Some(base.clone());
        self
    }

    /// Marks the type serializable.
    #[inline]
    pub fn serializable(mut self) -> Self {
        self.serializable = true;
        self
    }

    /// Declares the type, and its own fields, in the secondary runtime.
    #[inline]
    pub fn hosted(mut self) -> Self {
        self.origin = Origin::Hosted;
        self
    }

    /// Adds a type-level marker.
    #[inline]
    pub fn with_attribute<T: Any + Send + Sync>(mut self, marker: T) -> Self {
        self.attributes.insert(marker);
        self
    }

    pub fn build(self) -> Type {
        let mut fields: Vec<Field> = self
            .base
            .as_ref()
            .and_then(|base| base.as_struct())
            .map(|info| info.fields().to_vec())
            .unwrap_or_default();
        let inherited = fields.len();

        for (index, pending) in self.fields.into_iter().enumerate() {
            fields.push(Field::new(FieldInfo::new(
                &self.path,
                &pending.name,
                &pending.ty,
                inherited + index,
                pending.public,
                self.origin,
                pending.attributes,
            )));
        }

        let kind = TypeKind::Struct(StructInfo {
            fields: fields.into_boxed_slice(),
        });
        let mut info = TypeInfo::new(&self.path, kind)
            .with_serializable(self.serializable)
            .with_origin(self.origin);
        info.set_base(self.base);
        info.set_attributes(self.attributes);
        info.into_type()
    }
}
