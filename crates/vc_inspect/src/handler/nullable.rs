use vc_reflect::info::{Field, Type};
use vc_reflect::value::{Object, Value};
use vc_stream::{StreamError, StreamReader, StreamWriter, TypeTag};

use crate::handler::{Handler, HandlerRef};
use crate::{SceneNode, Surface};

// Nullable values are written as a presence byte followed, when present, by
// the inner handler's payload.

fn present_nullable(
    inner: &HandlerRef,
    label: &str,
    ty: &Type,
    value: &mut Value,
    ui: &mut dyn Surface,
) -> bool {
    let present = !value.is_null();
    let mut dirty = false;
    if ui.draw_null_toggle(label, present) != present {
        *value = if present {
            Value::Null
        } else {
            inner.default_value()
        };
        dirty = true;
    }
    if !value.is_null() {
        dirty |= inner.present_value(label, ty, value, ui);
    }
    dirty
}

fn write_nullable(
    inner: &HandlerRef,
    value: &Value,
    writer: &mut StreamWriter,
) -> Result<(), StreamError> {
    if value.is_null() {
        writer.write_bool(false);
        return Ok(());
    }
    writer.write_bool(true);
    inner.write_to(value, writer)
}

fn merge_nullable(
    inner: &HandlerRef,
    value: &mut Value,
    reader: &mut StreamReader<'_>,
) -> Result<(), StreamError> {
    if !reader.read_bool()? {
        *value = Value::Null;
        return Ok(());
    }
    if value.is_null() {
        *value = inner.default_value();
    }
    inner.merge_from(value, reader)
}

fn equals_nullable(inner: &HandlerRef, x: &Value, y: &Value) -> bool {
    match (x.is_null(), y.is_null()) {
        (true, true) => true,
        (false, false) => inner.equals(x, y),
        _ => false,
    }
}

// -----------------------------------------------------------------------------
// SmartHandler

/// Handler of a [`Smart`](vc_reflect::info::Smart) composite: a nullable
/// wrapper around the composite handler of the same type.
#[derive(Debug)]
pub struct SmartHandler {
    ty: Type,
    inner: HandlerRef,
}

impl SmartHandler {
    #[inline]
    pub fn new(ty: &Type, inner: HandlerRef) -> Self {
        Self {
            ty: ty.clone(),
            inner,
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

impl Handler for SmartHandler {
    #[inline]
    fn tag(&self) -> TypeTag {
        TypeTag::Smart
    }

    #[inline]
    fn present_value(&self, label: &str, _ty: &Type, value: &mut Value, ui: &mut dyn Surface) -> bool {
        present_nullable(&self.inner, label, &self.ty, value, ui)
    }

    #[inline]
    fn auto_set(&self, owner: &mut Object, field: &Field, root: &SceneNode) -> bool {
        self.inner.auto_set(owner, field, root)
    }

    #[inline]
    fn write_to(&self, value: &Value, writer: &mut StreamWriter) -> Result<(), StreamError> {
        write_nullable(&self.inner, value, writer)
    }

    #[inline]
    fn merge_from(&self, value: &mut Value, reader: &mut StreamReader<'_>) -> Result<(), StreamError> {
        merge_nullable(&self.inner, value, reader)
    }

    #[inline]
    fn equals(&self, x: &Value, y: &Value) -> bool {
        equals_nullable(&self.inner, x, y)
    }

    #[inline]
    fn default_value(&self) -> Value {
        Value::Null
    }

    #[inline]
    fn element(&self) -> Option<&HandlerRef> {
        Some(&self.inner)
    }
}

// -----------------------------------------------------------------------------
// TypeRefHandler

/// Handler of a reference-by-type field, bound to the concrete type its
/// [`RefTarget`](vc_reflect::info::RefTarget) names.
///
/// The slot holds `Null` or a value of the bound type.
#[derive(Debug)]
pub struct TypeRefHandler {
    bound: Type,
    inner: HandlerRef,
}

impl TypeRefHandler {
    #[inline]
    pub fn new(bound: &Type, inner: HandlerRef) -> Self {
        Self {
            bound: bound.clone(),
            inner,
        }
    }
}

impl Handler for TypeRefHandler {
    #[inline]
    fn tag(&self) -> TypeTag {
        TypeTag::TypeRef
    }

    #[inline]
    fn present_value(&self, label: &str, _ty: &Type, value: &mut Value, ui: &mut dyn Surface) -> bool {
        present_nullable(&self.inner, label, &self.bound, value, ui)
    }

    #[inline]
    fn auto_set(&self, owner: &mut Object, field: &Field, root: &SceneNode) -> bool {
        self.inner.auto_set(owner, field, root)
    }

    #[inline]
    fn write_to(&self, value: &Value, writer: &mut StreamWriter) -> Result<(), StreamError> {
        write_nullable(&self.inner, value, writer)
    }

    #[inline]
    fn merge_from(&self, value: &mut Value, reader: &mut StreamReader<'_>) -> Result<(), StreamError> {
        merge_nullable(&self.inner, value, reader)
    }

    #[inline]
    fn equals(&self, x: &Value, y: &Value) -> bool {
        equals_nullable(&self.inner, x, y)
    }

    #[inline]
    fn default_value(&self) -> Value {
        Value::Null
    }

    #[inline]
    fn bound_type(&self) -> Option<&Type> {
        Some(&self.bound)
    }

    #[inline]
    fn element(&self) -> Option<&HandlerRef> {
        Some(&self.inner)
    }
}
