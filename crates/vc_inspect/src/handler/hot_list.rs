use alloc::format;
use alloc::vec::Vec;

use vc_reflect::info::Type;
use vc_reflect::value::Value;
use vc_stream::{StreamError, StreamReader, StreamWriter, TypeTag};

use crate::handler::sequence::{merge_items, take_items, write_items};
use crate::handler::{Handler, HandlerRef, shape_error};
use crate::{Surface, indented};

/// Handler of an array or list declared in the secondary runtime whose
/// innermost element type also lives there.
///
/// `depth` counts the nested containers around the element, so `Item[][]`
/// has a depth of 2. Every level is written as a length followed by its
/// items.
#[derive(Debug)]
pub struct HotListHandler {
    element_ty: Type,
    element: HandlerRef,
    depth: usize,
    is_list: bool,
}

impl HotListHandler {
    #[inline]
    pub fn new(element_ty: &Type, element: HandlerRef, depth: usize, is_list: bool) -> Self {
        Self {
            element_ty: element_ty.clone(),
            element,
            depth: depth.max(1),
            is_list,
        }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether the outermost container is a list.
    #[inline]
    pub fn is_list(&self) -> bool {
        self.is_list
    }

    #[inline]
    pub fn element_ty(&self) -> &Type {
        &self.element_ty
    }

    fn default_at(&self, depth: usize) -> Value {
        match depth {
            0 => self.element.default_value(),
            _ => Value::Seq(Vec::new()),
        }
    }

    fn present_at(&self, depth: usize, label: &str, value: &mut Value, ui: &mut dyn Surface) -> bool {
        if depth == 0 {
            return self.element.present_value(label, &self.element_ty, value, ui);
        }
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
                items.resize_with(len, || self.default_at(depth - 1));
                dirty = true;
            }
            for (index, item) in items.iter_mut().enumerate() {
                let label = format!("Element {index}");
                dirty |= self.present_at(depth - 1, &label, item, ui);
            }
            dirty
        })
    }

    fn write_at(&self, depth: usize, value: &Value, writer: &mut StreamWriter) -> Result<(), StreamError> {
        if depth == 0 {
            return self.element.write_to(value, writer);
        }
        let Value::Seq(items) = value else {
            return Err(shape_error("Seq", value));
        };
        write_items(items, writer, |item, writer| self.write_at(depth - 1, item, writer))
    }

    fn merge_at(
        &self,
        depth: usize,
        value: &mut Value,
        reader: &mut StreamReader<'_>,
    ) -> Result<(), StreamError> {
        if depth == 0 {
            return self.element.merge_from(value, reader);
        }
        let len = reader.read_len()?;
        let mut items = take_items(value);
        let result = merge_items(
            &mut items,
            len,
            reader,
            || self.default_at(depth - 1),
            |item, reader| self.merge_at(depth - 1, item, reader),
        );
        *value = Value::Seq(items);
        result
    }

    fn equals_at(&self, depth: usize, x: &Value, y: &Value) -> bool {
        if depth == 0 {
            return self.element.equals(x, y);
        }
        match (x, y) {
            (Value::Seq(a), Value::Seq(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| self.equals_at(depth - 1, x, y))
            }
            _ => false,
        }
    }
}

impl Handler for HotListHandler {
    #[inline]
    fn tag(&self) -> TypeTag {
        TypeTag::HotList
    }

    #[inline]
    fn present_value(&self, label: &str, _ty: &Type, value: &mut Value, ui: &mut dyn Surface) -> bool {
        self.present_at(self.depth, label, value, ui)
    }

    #[inline]
    fn write_to(&self, value: &Value, writer: &mut StreamWriter) -> Result<(), StreamError> {
        self.write_at(self.depth, value, writer)
    }

    #[inline]
    fn merge_from(&self, value: &mut Value, reader: &mut StreamReader<'_>) -> Result<(), StreamError> {
        self.merge_at(self.depth, value, reader)
    }

    #[inline]
    fn equals(&self, x: &Value, y: &Value) -> bool {
        self.equals_at(self.depth, x, y)
    }

    #[inline]
    fn default_value(&self) -> Value {
        self.default_at(self.depth)
    }

    #[inline]
    fn element(&self) -> Option<&HandlerRef> {
        Some(&self.element)
    }
}
