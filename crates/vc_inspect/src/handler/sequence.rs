use alloc::format;
use alloc::vec::Vec;
use core::mem;

use vc_reflect::info::Type;
use vc_reflect::value::Value;
use vc_stream::{StreamError, StreamReader, StreamWriter, TypeTag};

use crate::handler::{Handler, HandlerRef, shape_error};
use crate::{Surface, indented};

/// Most elements a sequence may hold when its elements take no bytes.
///
/// Elements that take bytes are bounded by the input itself.
pub const MAX_EMPTY_ELEMENTS: usize = 1 << 16;

// Checked once the first element is through, given its width on the wire.
fn check_len(len: usize, width: usize, remaining: usize) -> Result<(), StreamError> {
    if width > 0 && len > remaining {
        return Err(StreamError::Underrun {
            needed: len,
            remaining,
        });
    }
    if width == 0 && len > MAX_EMPTY_ELEMENTS {
        return Err(StreamError::ElementLimit {
            len,
            max: MAX_EMPTY_ELEMENTS,
        });
    }
    Ok(())
}

/// Writes a length followed by every item.
pub(super) fn write_items(
    items: &[Value],
    writer: &mut StreamWriter,
    mut write: impl FnMut(&Value, &mut StreamWriter) -> Result<(), StreamError>,
) -> Result<(), StreamError> {
    writer.write_len(items.len())?;
    for (index, item) in items.iter().enumerate() {
        let start = writer.len();
        write(item, writer)?;
        if index == 0 {
            check_len(items.len(), writer.len() - start, usize::MAX)?;
        }
    }
    Ok(())
}

/// Merges `len` elements into `items` in place, growing or truncating it.
///
/// A length the input cannot hold fails after the first element.
pub(super) fn merge_items(
    items: &mut Vec<Value>,
    len: usize,
    reader: &mut StreamReader<'_>,
    mut default: impl FnMut() -> Value,
    mut merge: impl FnMut(&mut Value, &mut StreamReader<'_>) -> Result<(), StreamError>,
) -> Result<(), StreamError> {
    let remaining = reader.remaining();
    items.truncate(len);
    for index in 0..len {
        if index == items.len() {
            items.push(default());
        }
        let start = reader.cursor();
        merge(&mut items[index], reader)?;
        if index == 0 {
            check_len(len, reader.cursor() - start, remaining)?;
        }
    }
    Ok(())
}

/// Takes the elements out of a slot, an empty list for any other shape.
#[inline]
pub(super) fn take_items(value: &mut Value) -> Vec<Value> {
    match mem::take(value) {
        Value::Seq(items) => items,
        _ => Vec::new(),
    }
}

/// Which container a [`SequenceHandler`] handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    Array,
    List,
}

/// Handler of an array or a list.
///
/// Owns the length; elements are presented, compared and (de)serialized by
/// the element handler. Merging resizes the sequence and merges each element
/// in place.
#[derive(Debug)]
pub struct SequenceHandler {
    kind: SequenceKind,
    element_ty: Type,
    element: HandlerRef,
}

impl SequenceHandler {
    #[inline]
    pub fn array(element_ty: &Type, element: HandlerRef) -> Self {
        Self {
            kind: SequenceKind::Array,
            element_ty: element_ty.clone(),
            element,
        }
    }

    #[inline]
    pub fn list(element_ty: &Type, element: HandlerRef) -> Self {
        Self {
            kind: SequenceKind::List,
            element_ty: element_ty.clone(),
            element,
        }
    }

    #[inline]
    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    #[inline]
    pub fn element_ty(&self) -> &Type {
        &self.element_ty
    }
}

impl Handler for SequenceHandler {
    #[inline]
    fn tag(&self) -> TypeTag {
        match self.kind {
            SequenceKind::Array => TypeTag::Array,
            SequenceKind::List => TypeTag::List,
        }
    }

    fn present_value(&self, label: &str, _ty: &Type, value: &mut Value, ui: &mut dyn Surface) -> bool {
        let Value::Seq(items) = value else {
            return false;
        };
        if !ui.foldout(label) {
            return false;
        }
        indented(ui, |ui| {
            let mut dirty = false;
            let len = ui.draw_container_controls(label, items.len());
            if len != items.len() {
                items.resize_with(len, || self.element.default_value());
                dirty = true;
            }
            for (index, item) in items.iter_mut().enumerate() {
                let label = format!("Element {index}");
                dirty |= self.element.present_value(&label, &self.element_ty, item, ui);
            }
            dirty
        })
    }

    fn write_to(&self, value: &Value, writer: &mut StreamWriter) -> Result<(), StreamError> {
        let Value::Seq(items) = value else {
            return Err(shape_error("Seq", value));
        };
        write_items(items, writer, |item, writer| self.element.write_to(item, writer))
    }

    fn merge_from(&self, value: &mut Value, reader: &mut StreamReader<'_>) -> Result<(), StreamError> {
        let len = reader.read_len()?;
        let mut items = take_items(value);
        let result = merge_items(
            &mut items,
            len,
            reader,
            || self.element.default_value(),
            |item, reader| self.element.merge_from(item, reader),
        );
        *value = Value::Seq(items);
        result
    }

    fn equals(&self, x: &Value, y: &Value) -> bool {
        match (x, y) {
            (Value::Seq(a), Value::Seq(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| self.element.equals(x, y))
            }
            _ => false,
        }
    }

    #[inline]
    fn default_value(&self) -> Value {
        Value::Seq(Vec::new())
    }

    #[inline]
    fn element(&self) -> Option<&HandlerRef> {
        Some(&self.element)
    }
}
