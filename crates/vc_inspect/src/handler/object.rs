use alloc::string::ToString;

use vc_reflect::info::{Field, Type};
use vc_reflect::value::{Handle, Object, Value};
use vc_stream::{StreamError, StreamReader, StreamWriter, TypeTag};

use crate::handler::{Handler, shape_error};
use crate::{SceneNode, Surface};

/// Writes `Null` or a handle as an object reference.
pub(super) fn write_handle(value: &Value, writer: &mut StreamWriter) -> Result<(), StreamError> {
    match value {
        Value::Null => writer.write_object_ref(None),
        Value::Handle(handle) => writer.write_object_ref(Some(handle)),
        other => Err(shape_error("Handle", other)),
    }
}

/// Identity equality of two handle slots.
pub(super) fn handles_eq(x: &Value, y: &Value) -> bool {
    match (x, y) {
        (Value::Null, Value::Null) => true,
        (Value::Handle(a), Value::Handle(b)) => a == b,
        _ => false,
    }
}

/// Lets the surface pick an object of `ty`, dropping picks of other types.
pub(super) fn present_handle(label: &str, ty: &Type, value: &mut Value, ui: &mut dyn Surface) -> bool {
    let Some(picked) = ui.draw_object(label, ty, value.as_handle()) else {
        return false;
    };
    let picked = picked.filter(|h| h.ty().is_assignable_to(ty));
    let next = picked.map_or(Value::Null, Value::Handle);
    if handles_eq(value, &next) {
        return false;
    }
    *value = next;
    true
}

/// Merges an object reference, rejecting objects not assignable to `ty`.
pub(super) fn merge_handle(
    ty: &Type,
    value: &mut Value,
    reader: &mut StreamReader<'_>,
) -> Result<(), StreamError> {
    *value = match reader.read_object_ref()? {
        Some(handle) if !handle.ty().is_assignable_to(ty) => {
            return Err(StreamError::IncompatibleObject {
                expected: ty.path().to_string(),
                found: handle.ty().path().to_string(),
            });
        }
        Some(handle) => Value::Handle(handle),
        None => Value::Null,
    };
    Ok(())
}

/// Handler of one member of the native object handle family.
#[derive(Debug, Clone)]
pub struct ObjectHandler {
    ty: Type,
}

impl ObjectHandler {
    #[inline]
    pub fn new(ty: &Type) -> Self {
        Self { ty: ty.clone() }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    // The child named like the field, or its first fitting component.
    fn lookup(&self, field: &Field, root: &SceneNode) -> Option<Handle> {
        let node = root.child(field.name())?;
        node.object_of(&self.ty).cloned()
    }
}

impl Handler for ObjectHandler {
    #[inline]
    fn tag(&self) -> TypeTag {
        TypeTag::Handle
    }

    #[inline]
    fn present_value(&self, label: &str, _ty: &Type, value: &mut Value, ui: &mut dyn Surface) -> bool {
        present_handle(label, &self.ty, value, ui)
    }

    fn auto_set(&self, owner: &mut Object, field: &Field, root: &SceneNode) -> bool {
        let Some(slot) = owner.slot_mut(field) else {
            return false;
        };
        if !slot.is_null() {
            return false;
        }
        match self.lookup(field, root) {
            Some(handle) => {
                *slot = Value::Handle(handle);
                true
            }
            None => false,
        }
    }

    #[inline]
    fn write_to(&self, value: &Value, writer: &mut StreamWriter) -> Result<(), StreamError> {
        write_handle(value, writer)
    }

    #[inline]
    fn merge_from(&self, value: &mut Value, reader: &mut StreamReader<'_>) -> Result<(), StreamError> {
        merge_handle(&self.ty, value, reader)
    }

    #[inline]
    fn equals(&self, x: &Value, y: &Value) -> bool {
        handles_eq(x, y)
    }

    #[inline]
    fn default_value(&self) -> Value {
        Value::Null
    }
}
