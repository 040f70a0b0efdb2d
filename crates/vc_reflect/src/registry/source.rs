use alloc::vec::Vec;

use crate::info::{Field, NonSerialized, SerializeField, Type};

/// Returns `true` if a field takes part in serialization and inspection.
///
/// A field does when it is public or marked [`SerializeField`], and is not
/// marked [`NonSerialized`].
#[inline]
pub fn is_serialized_field(field: &Field) -> bool {
    (field.is_public() || field.has_attribute::<SerializeField>())
        && !field.has_attribute::<NonSerialized>()
}

// -----------------------------------------------------------------------------
// TypeSource

/// A reflection provider.
///
/// Only [`type_by_path`](TypeSource::type_by_path) is required; the other
/// queries default to what the descriptors themselves carry.
pub trait TypeSource: Send + Sync {
    /// Finds a type by full path, or by unambiguous short name.
    fn type_by_path(&self, path: &str) -> Option<Type>;

    /// Returns `false` for a null source that knows no types.
    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    /// The root of the native object handle family, if this source has one.
    #[inline]
    fn object_type(&self) -> Option<Type> {
        None
    }

    #[inline]
    fn is_assignable_to(&self, ty: &Type, base: &Type) -> bool {
        ty.is_assignable_to(base)
    }

    #[inline]
    fn is_serializable(&self, ty: &Type) -> bool {
        ty.is_serializable()
    }

    /// Lists the serializable fields of `ty` in declaration order.
    ///
    /// The order must be the same on every call.
    fn serializable_fields(&self, ty: &Type) -> Vec<Field> {
        match ty.as_struct() {
            Some(info) => info
                .fields()
                .iter()
                .filter(|f| is_serialized_field(f))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }
}

// -----------------------------------------------------------------------------
// NoHostedTypes

/// The absent secondary runtime: knows no types, serializes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHostedTypes;

impl TypeSource for NoHostedTypes {
    #[inline]
    fn type_by_path(&self, _path: &str) -> Option<Type> {
        None
    }

    #[inline]
    fn is_present(&self) -> bool {
        false
    }

    #[inline]
    fn is_assignable_to(&self, _ty: &Type, _base: &Type) -> bool {
        false
    }

    #[inline]
    fn is_serializable(&self, _ty: &Type) -> bool {
        false
    }

    #[inline]
    fn serializable_fields(&self, _ty: &Type) -> Vec<Field> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{NoHostedTypes, TypeSource, is_serialized_field};
    use crate::info::{CustomAttributes, NonSerialized, PrimitiveKind};
    use crate::info::{SerializeField, StructBuilder, Type};

    #[test]
    fn serializable_field_rule() {
        let u8_ty = Type::primitive(PrimitiveKind::U8);
        let ty = StructBuilder::new("m::S")
            .field("public", &u8_ty)
            .private_field("private", &u8_ty)
            .private_field_with(
                "kept",
                &u8_ty,
                CustomAttributes::new().with_attribute(SerializeField),
            )
            .field_with(
                "skipped",
                &u8_ty,
                CustomAttributes::new().with_attribute(NonSerialized),
            )
            .build();

        let info = ty.as_struct().unwrap();
        let flags: alloc::vec::Vec<bool> = info.fields().iter().map(is_serialized_field).collect();
        assert_eq!(flags, [true, false, true, false]);

        assert!(NoHostedTypes.serializable_fields(&ty).is_empty());
        assert!(!NoHostedTypes.is_present());
    }
}
