use alloc::vec::Vec;
use core::mem;

use crate::info::{Field, Type};
use crate::value::Value;

/// A composite instance: its type and one slot per declared field.
///
/// Slots follow [`StructInfo::fields`](crate::info::StructInfo::fields) order.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{PrimitiveKind, StructBuilder, Type};
/// use vc_reflect::value::{Object, Value};
///
/// let ty = StructBuilder::new("game::Stats")
///     .field("hp", &Type::primitive(PrimitiveKind::I32))
///     .build();
/// let mut stats = Object::new(&ty);
///
/// assert_eq!(stats.get("hp"), Some(&Value::I32(0)));
/// assert_eq!(stats.set("hp", Value::I32(7)), Some(Value::I32(0)));
///
/// let hp = ty.as_struct().unwrap().field("hp").unwrap();
/// assert_eq!(stats.slot(hp), Some(&Value::I32(7)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    ty: Type,
    values: Vec<Value>,
}

impl Object {
    /// Creates an instance with every slot holding its type's default.
    pub fn new(ty: &Type) -> Self {
        let values = match ty.as_struct() {
            Some(info) => info.fields().iter().map(|f| f.ty().default_value()).collect(),
            None => Vec::new(),
        };
        Self {
            ty: ty.clone(),
            values,
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn slot_index(&self, field: &Field) -> Option<usize> {
        let info = self.ty.as_struct()?;
        // Fast path: fields declared on the object's own type.
        match info.field_at(field.index()) {
            Some(f) if f == field => Some(field.index()),
            _ => info.slot_of(field.id()),
        }
    }

    /// Returns the slot of `field`, `None` if the type does not declare it.
    #[inline]
    pub fn slot(&self, field: &Field) -> Option<&Value> {
        let index = self.slot_index(field)?;
        self.values.get(index)
    }

    #[inline]
    pub fn slot_mut(&mut self, field: &Field) -> Option<&mut Value> {
        let index = self.slot_index(field)?;
        self.values.get_mut(index)
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        let info = self.ty.as_struct()?;
        info.fields().iter().position(|f| f.name() == name)
    }

    /// Returns the slot of the first field with the given name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        let index = self.index_of(name)?;
        self.values.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        let index = self.index_of(name)?;
        self.values.get_mut(index)
    }

    /// Replaces the slot of the named field, returns the previous value.
    ///
    /// Returns `None` and changes nothing if there is no such field.
    pub fn set(&mut self, name: &str, value: Value) -> Option<Value> {
        let slot = self.get_mut(name)?;
        Some(mem::replace(slot, value))
    }

    #[inline]
    pub fn get_at(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    #[inline]
    pub fn get_at_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.values.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use crate::info::{PrimitiveKind, StructBuilder, Type};
    use crate::value::{Object, Value};

    #[test]
    fn inherited_slots() {
        let f32_ty = Type::primitive(PrimitiveKind::F32);
        let base = StructBuilder::new("m::Base").field("a", &f32_ty).build();
        let derived = StructBuilder::new("m::Derived")
            .base(&base)
            .field("b", &f32_ty)
            .build();

        let mut obj = Object::new(&derived);
        assert_eq!(obj.len(), 2);

        // Inherited fields come first.
        let b = derived.as_struct().unwrap().field("b").unwrap().clone();
        assert_eq!(b.index(), 1);
        *obj.slot_mut(&b).unwrap() = Value::F32(2.5);
        assert_eq!(obj.get_at(1), Some(&Value::F32(2.5)));
        assert_eq!(obj.get_at(0), Some(&Value::F32(0.0)));
    }

    #[test]
    fn unknown_field() {
        let ty = StructBuilder::new("m::Empty").build();
        let other = StructBuilder::new("m::Other")
            .field("x", &Type::primitive(PrimitiveKind::U8))
            .build();
        let mut obj = Object::new(&ty);
        let x = other.as_struct().unwrap().field("x").unwrap();

        assert!(obj.is_empty());
        assert!(obj.slot(x).is_none());
        assert!(obj.set("x", Value::U8(1)).is_none());
    }
}
