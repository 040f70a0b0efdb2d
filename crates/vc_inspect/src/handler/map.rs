use alloc::format;
use alloc::vec::Vec;

use vc_reflect::info::Type;
use vc_reflect::value::Value;
use vc_stream::{StreamError, StreamReader, StreamWriter, TypeTag};

use crate::handler::{Handler, HandlerRef, shape_error};
use crate::{Surface, indented};

/// Handler of a dictionary.
///
/// Written as a length followed by alternating keys and values. Merging
/// replaces the whole entry set. A repeated key fails both ways.
#[derive(Debug)]
pub struct MapHandler {
    key_ty: Type,
    value_ty: Type,
    key: HandlerRef,
    value: HandlerRef,
}

impl MapHandler {
    #[inline]
    pub fn new(key_ty: &Type, key: HandlerRef, value_ty: &Type, value: HandlerRef) -> Self {
        Self {
            key_ty: key_ty.clone(),
            value_ty: value_ty.clone(),
            key,
            value,
        }
    }

    #[inline]
    pub fn key_handler(&self) -> &HandlerRef {
        &self.key
    }

    #[inline]
    pub fn value_handler(&self) -> &HandlerRef {
        &self.value
    }

    fn position(&self, entries: &[(Value, Value)], key: &Value) -> Option<usize> {
        entries.iter().position(|(k, _)| self.key.equals(k, key))
    }

    fn present_entries(
        &self,
        label: &str,
        entries: &mut Vec<(Value, Value)>,
        ui: &mut dyn Surface,
    ) -> bool {
        let mut dirty = false;
        let len = ui.draw_container_controls(label, entries.len());
        if len < entries.len() {
            entries.truncate(len);
            dirty = true;
        } else if len > entries.len() {
            // Grows by one default entry, unless that key is taken.
            let key = self.key.default_value();
            if self.position(entries, &key).is_none() {
                entries.push((key, self.value.default_value()));
                dirty = true;
            }
        }

        for index in 0..entries.len() {
            let mut key = entries[index].0.clone();
            let label = format!("Key {index}");
            if self.key.present_value(&label, &self.key_ty, &mut key, ui) {
                match self.position(entries, &key) {
                    Some(other) if other != index => {
                        log::warn!("ignored `{label}` edit: the key already exists");
                    }
                    _ => {
                        entries[index].0 = key;
                        dirty = true;
                    }
                }
            }
            let label = format!("Value {index}");
            dirty |= self
                .value
                .present_value(&label, &self.value_ty, &mut entries[index].1, ui);
        }
        dirty
    }
}

impl Handler for MapHandler {
    #[inline]
    fn tag(&self) -> TypeTag {
        TypeTag::Map
    }

    fn present_value(&self, label: &str, _ty: &Type, value: &mut Value, ui: &mut dyn Surface) -> bool {
        let Value::Map(entries) = value else {
            return false;
        };
        if !ui.foldout(label) {
            return false;
        }
        indented(ui, |ui| self.present_entries(label, entries, ui))
    }

    fn write_to(&self, value: &Value, writer: &mut StreamWriter) -> Result<(), StreamError> {
        let Value::Map(entries) = value else {
            return Err(shape_error("Map", value));
        };
        writer.write_len(entries.len())?;
        for (index, (key, value)) in entries.iter().enumerate() {
            if self.position(&entries[..index], key).is_some() {
                return Err(StreamError::DuplicateKey);
            }
            self.key.write_to(key, writer)?;
            self.value.write_to(value, writer)?;
        }
        Ok(())
    }

    fn merge_from(&self, value: &mut Value, reader: &mut StreamReader<'_>) -> Result<(), StreamError> {
        let len = reader.read_len()?;
        let mut entries = Vec::new();
        for _ in 0..len {
            let mut key = self.key.default_value();
            self.key.merge_from(&mut key, reader)?;
            if self.position(&entries, &key).is_some() {
                return Err(StreamError::DuplicateKey);
            }
            let mut item = self.value.default_value();
            self.value.merge_from(&mut item, reader)?;
            entries.push((key, item));
        }
        *value = Value::Map(entries);
        Ok(())
    }

    fn equals(&self, x: &Value, y: &Value) -> bool {
        let (Value::Map(a), Value::Map(b)) = (x, y) else {
            return false;
        };
        a.len() == b.len()
            && a.iter().all(|(ka, va)| {
                b.iter()
                    .any(|(kb, vb)| self.key.equals(ka, kb) && self.value.equals(va, vb))
            })
    }

    #[inline]
    fn default_value(&self) -> Value {
        Value::Map(Vec::new())
    }

    #[inline]
    fn element(&self) -> Option<&HandlerRef> {
        Some(&self.value)
    }
}
