use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;

use vc_reflect::info::{Field, Type};
use vc_reflect::value::{Object, Value};
use vc_stream::{StreamError, StreamReader, StreamWriter, TypeTag};

use crate::handler::{Handler, HandlerRef, shape_error};
use crate::{InspectorHook, SceneNode, Surface, indented};

/// Serializable fields of a type, each with its resolved handler.
pub type FieldHandlers = Vec<(Field, HandlerRef)>;

// -----------------------------------------------------------------------------
// Field walks

fn missing_slot(object: &Object, field: &Field) -> StreamError {
    StreamError::IncompatibleObject {
        expected: field.id().owner().to_string(),
        found: object.ty().path().to_string(),
    }
}

/// Writes every field in declared order, each preceded by its tag in the
/// tagged format.
pub(crate) fn write_fields(
    fields: &[(Field, HandlerRef)],
    object: &Object,
    writer: &mut StreamWriter,
) -> Result<(), StreamError> {
    for (field, handler) in fields {
        if writer.format().is_tagged() {
            writer.write_tag(handler.tag());
        }
        let slot = object.slot(field).ok_or_else(|| missing_slot(object, field))?;
        handler.write_to(slot, writer)?;
    }
    Ok(())
}

pub(crate) fn merge_fields(
    fields: &[(Field, HandlerRef)],
    object: &mut Object,
    reader: &mut StreamReader<'_>,
) -> Result<(), StreamError> {
    for (field, handler) in fields {
        if reader.format().is_tagged() {
            reader.expect_tag(handler.tag())?;
        }
        let Some(slot) = object.slot_mut(field) else {
            return Err(missing_slot(object, field));
        };
        handler.merge_from(slot, reader)?;
    }
    Ok(())
}

/// Presents every field, then the type's hook one level deeper.
///
/// Every field is visited even after one reports a change.
pub(crate) fn present_fields(
    fields: &[(Field, HandlerRef)],
    object: &mut Object,
    ui: &mut dyn Surface,
) -> bool {
    let mut dirty = false;
    for (field, handler) in fields {
        dirty |= handler.present(object, field, ui);
    }
    if let Some(hook) = object.ty().get_attribute::<InspectorHook>().copied() {
        dirty |= indented(ui, |ui| hook.call(object, ui));
    }
    dirty
}

pub(crate) fn auto_set_fields(
    fields: &[(Field, HandlerRef)],
    object: &mut Object,
    root: &SceneNode,
) -> bool {
    let mut dirty = false;
    for (field, handler) in fields {
        dirty |= handler.auto_set(object, field, root);
    }
    dirty
}

// -----------------------------------------------------------------------------
// CompositeHandler

/// Handler of a non-null composite, field by field.
///
/// A `Null` slot is replaced by a default object when presented or merged.
#[derive(Debug)]
pub struct CompositeHandler {
    ty: Type,
    fields: FieldHandlers,
}

impl CompositeHandler {
    #[inline]
    pub fn new(ty: &Type, fields: FieldHandlers) -> Self {
        Self {
            ty: ty.clone(),
            fields,
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn fields(&self) -> &[(Field, HandlerRef)] {
        &self.fields
    }

    fn check_type(&self, object: &Object) -> Result<(), StreamError> {
        if object.ty().is_assignable_to(&self.ty) {
            return Ok(());
        }
        Err(StreamError::IncompatibleObject {
            expected: self.ty.path().to_string(),
            found: object.ty().path().to_string(),
        })
    }
}

impl Handler for CompositeHandler {
    #[inline]
    fn tag(&self) -> TypeTag {
        TypeTag::Object
    }

    fn present_value(&self, label: &str, _ty: &Type, value: &mut Value, ui: &mut dyn Surface) -> bool {
        let mut dirty = false;
        if value.as_object().is_none() {
            *value = self.default_value();
            dirty = true;
        }
        if !ui.foldout(label) {
            return dirty;
        }
        if let Some(object) = value.as_object_mut() {
            dirty |= indented(ui, |ui| present_fields(&self.fields, object, ui));
        }
        dirty
    }

    fn auto_set(&self, owner: &mut Object, field: &Field, root: &SceneNode) -> bool {
        match owner.slot_mut(field).and_then(Value::as_object_mut) {
            Some(object) => auto_set_fields(&self.fields, object, root),
            None => false,
        }
    }

    fn write_to(&self, value: &Value, writer: &mut StreamWriter) -> Result<(), StreamError> {
        let Value::Object(object) = value else {
            return Err(shape_error("Object", value));
        };
        self.check_type(object)?;
        write_fields(&self.fields, object, writer)
    }

    fn merge_from(&self, value: &mut Value, reader: &mut StreamReader<'_>) -> Result<(), StreamError> {
        if value.as_object().is_none() {
            *value = self.default_value();
        }
        match value.as_object_mut() {
            Some(object) => merge_fields(&self.fields, object, reader),
            None => Err(shape_error("Object", value)),
        }
    }

    fn equals(&self, x: &Value, y: &Value) -> bool {
        match (x, y) {
            (Value::Null, Value::Null) => true,
            (Value::Object(a), Value::Object(b)) => {
                self.fields.iter().all(|(field, handler)| match (a.slot(field), b.slot(field)) {
                    (Some(x), Some(y)) => handler.equals(x, y),
                    (None, None) => true,
                    _ => false,
                })
            }
            _ => false,
        }
    }

    #[inline]
    fn default_value(&self) -> Value {
        Value::Object(Box::new(Object::new(&self.ty)))
    }
}
