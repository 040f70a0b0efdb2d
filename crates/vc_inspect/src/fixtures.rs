//! Shared test types and a scripted surface.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use vc_reflect::info::{EnumInfo, Type, TypeInfo};
use vc_reflect::value::{Handle, Value};

use crate::Surface;

/// A surface replaying edits keyed by label and recording what was drawn.
#[derive(Debug, Default)]
pub(crate) struct ScriptedSurface {
    pub fields: BTreeMap<String, Value>,
    pub enums: BTreeMap<String, i32>,
    pub objects: BTreeMap<String, Option<Handle>>,
    pub toggles: BTreeMap<String, bool>,
    pub lengths: BTreeMap<String, usize>,
    pub expand: bool,
    pub indent: usize,
    pub max_indent: usize,
    pub drawn: Vec<String>,
}

impl ScriptedSurface {
    /// A surface with every foldout open.
    pub fn expanded() -> Self {
        Self {
            expand: true,
            ..Self::default()
        }
    }

    pub fn edit(mut self, label: &str, value: Value) -> Self {
        self.fields.insert(label.to_string(), value);
        self
    }

    pub fn pick_enum(mut self, label: &str, code: i32) -> Self {
        self.enums.insert(label.to_string(), code);
        self
    }

    pub fn pick_object(mut self, label: &str, handle: Option<Handle>) -> Self {
        self.objects.insert(label.to_string(), handle);
        self
    }

    pub fn toggle(mut self, label: &str, present: bool) -> Self {
        self.toggles.insert(label.to_string(), present);
        self
    }

    pub fn resize(mut self, label: &str, len: usize) -> Self {
        self.lengths.insert(label.to_string(), len);
        self
    }

    pub fn was_drawn(&self, label: &str) -> bool {
        self.drawn.iter().any(|d| d == label)
    }
}

impl Surface for ScriptedSurface {
    fn draw_field(&mut self, label: &str, _value: &Value) -> Option<Value> {
        self.drawn.push(label.to_string());
        self.fields.get(label).cloned()
    }

    fn draw_enum(&mut self, label: &str, _info: &EnumInfo, _code: i32) -> Option<i32> {
        self.drawn.push(label.to_string());
        self.enums.get(label).copied()
    }

    fn draw_object(
        &mut self,
        label: &str,
        _ty: &Type,
        _current: Option<&Handle>,
    ) -> Option<Option<Handle>> {
        self.drawn.push(label.to_string());
        self.objects.get(label).cloned()
    }

    fn foldout(&mut self, label: &str) -> bool {
        self.drawn.push(label.to_string());
        self.expand
    }

    fn draw_null_toggle(&mut self, label: &str, present: bool) -> bool {
        self.toggles.get(label).copied().unwrap_or(present)
    }

    fn draw_container_controls(&mut self, label: &str, len: usize) -> usize {
        self.lengths.get(label).copied().unwrap_or(len)
    }

    fn draw_label(&mut self, text: &str) {
        self.drawn.push(text.to_string());
    }

    fn increase_indent(&mut self) {
        self.indent += 1;
        self.max_indent = self.max_indent.max(self.indent);
    }

    fn decrease_indent(&mut self) {
        self.indent -= 1;
    }
}

pub(crate) fn team() -> Type {
    TypeInfo::enumeration("game::Team", &[("Red", 0), ("Blue", 1), ("Green", 2)]).into_type()
}
