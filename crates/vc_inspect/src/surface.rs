use core::fmt;

use vc_reflect::info::{EnumInfo, Type};
use vc_reflect::value::{Handle, Object, Value};

// -----------------------------------------------------------------------------
// Surface

/// The presentation surface handlers draw through.
///
/// Every `draw_*` call returns the user's edit, or `None` when nothing was
/// edited this pass. Pixel-level rendering is the implementor's business.
pub trait Surface {
    /// Draws a scalar, string or vector value.
    ///
    /// An edit of a different [`Value`] shape is ignored by the caller.
    fn draw_field(&mut self, label: &str, value: &Value) -> Option<Value>;

    /// Draws an enum picker, returns the picked code.
    fn draw_enum(&mut self, label: &str, info: &EnumInfo, code: i32) -> Option<i32>;

    /// Draws an object slot accepting objects of `ty`.
    ///
    /// `Some(None)` clears the slot.
    fn draw_object(
        &mut self,
        label: &str,
        ty: &Type,
        current: Option<&Handle>,
    ) -> Option<Option<Handle>>;

    /// Draws a collapsible header, returns whether its content is shown.
    fn foldout(&mut self, label: &str) -> bool;

    /// Draws the presence toggle of a nullable value, returns the new presence.
    fn draw_null_toggle(&mut self, label: &str, present: bool) -> bool;

    /// Draws size controls of a container, returns the new length.
    fn draw_container_controls(&mut self, label: &str, len: usize) -> usize;

    fn draw_label(&mut self, text: &str);

    fn increase_indent(&mut self);

    fn decrease_indent(&mut self);
}

/// Runs `f` one indent level deeper.
pub fn indented<R>(ui: &mut dyn Surface, f: impl FnOnce(&mut dyn Surface) -> R) -> R {
    ui.increase_indent();
    let result = f(&mut *ui);
    ui.decrease_indent();
    result
}

// -----------------------------------------------------------------------------
// Headless

/// A surface that draws nothing and never edits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl Surface for Headless {
    #[inline]
    fn draw_field(&mut self, _label: &str, _value: &Value) -> Option<Value> {
        None
    }

    #[inline]
    fn draw_enum(&mut self, _label: &str, _info: &EnumInfo, _code: i32) -> Option<i32> {
        None
    }

    #[inline]
    fn draw_object(
        &mut self,
        _label: &str,
        _ty: &Type,
        _current: Option<&Handle>,
    ) -> Option<Option<Handle>> {
        None
    }

    #[inline]
    fn foldout(&mut self, _label: &str) -> bool {
        false
    }

    #[inline]
    fn draw_null_toggle(&mut self, _label: &str, present: bool) -> bool {
        present
    }

    #[inline]
    fn draw_container_controls(&mut self, _label: &str, len: usize) -> usize {
        len
    }

    #[inline]
    fn draw_label(&mut self, _text: &str) {}

    #[inline]
    fn increase_indent(&mut self) {}

    #[inline]
    fn decrease_indent(&mut self) {}
}

// -----------------------------------------------------------------------------
// InspectorHook

/// A type-level marker: custom inspector code run after the type's fields.
///
/// Invoked one indent level deeper. Returns whether it changed the object.
///
/// # Examples
///
/// ```
/// use vc_inspect::{InspectorHook, Surface};
/// use vc_reflect::info::StructBuilder;
/// use vc_reflect::value::Object;
///
/// fn notes(_: &mut Object, ui: &mut dyn Surface) -> bool {
///     ui.draw_label("notes");
///     false
/// }
///
/// let ty = StructBuilder::new("game::Quest")
///     .with_attribute(InspectorHook(notes))
///     .build();
/// assert!(ty.has_attribute::<InspectorHook>());
/// ```
#[derive(Clone, Copy)]
pub struct InspectorHook(pub fn(&mut Object, &mut dyn Surface) -> bool);

impl InspectorHook {
    #[inline]
    pub fn call(self, object: &mut Object, ui: &mut dyn Surface) -> bool {
        (self.0)(object, ui)
    }
}

impl fmt::Debug for InspectorHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InspectorHook")
    }
}
