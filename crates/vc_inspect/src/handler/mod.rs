//! Handlers: the per-type strategies selected by the resolver.
//!
//! ## Menu
//!
//! - [`Handler`]: present, auto-set, write, merge and compare values of one
//!   resolved type or field. Shared as [`HandlerRef`].
//! - Leaves: [`InertHandler`], [`PrimitiveHandler`], [`EnumHandler`],
//!   [`ObjectHandler`] and [`AgentHandler`].
//! - Composites: [`CompositeHandler`], and the nullable [`SmartHandler`] and
//!   [`TypeRefHandler`] wrapping a nested handler.
//! - Containers: [`SequenceHandler`] (arrays and lists), [`MapHandler`] and
//!   [`HotListHandler`]. They own the container shape and delegate elements.
//!
//! Round-trip law: for every handler `h` and value `v` it owns, merging the
//! bytes of `h.write_to(v)` into `h.default_value()` yields a value equal to
//! `v` under `h.equals`.

// -----------------------------------------------------------------------------
// Modules

mod agent;
mod composite;
mod enum_;
mod hot_list;
mod inert;
mod map;
mod nullable;
mod object;
mod primitive;
mod sequence;

// -----------------------------------------------------------------------------
// Exports

pub use agent::AgentHandler;
pub use composite::{CompositeHandler, FieldHandlers};
pub use enum_::EnumHandler;
pub use hot_list::HotListHandler;
pub use inert::InertHandler;
pub use map::MapHandler;
pub use nullable::{SmartHandler, TypeRefHandler};
pub use object::ObjectHandler;
pub use primitive::PrimitiveHandler;
pub use sequence::{MAX_EMPTY_ELEMENTS, SequenceHandler};

pub(crate) use composite::{auto_set_fields, merge_fields, present_fields, write_fields};

// -----------------------------------------------------------------------------
// Handler

use alloc::sync::Arc;
use core::fmt;

use vc_reflect::info::{Field, Type};
use vc_reflect::value::{Object, Value};
use vc_stream::{StreamError, StreamReader, StreamWriter, TypeTag};

use crate::{SceneNode, Surface};

/// A shared handler.
pub type HandlerRef = Arc<dyn Handler>;

/// A strategy bound to one resolved type or field.
///
/// Handlers carry no per-object state: everything they edit lives in the
/// values passed in.
pub trait Handler: Send + Sync + 'static {
    /// The wire shape this handler owns.
    fn tag(&self) -> TypeTag;

    /// Presents the slot of `field` on `owner`, returns whether it changed.
    fn present(&self, owner: &mut Object, field: &Field, ui: &mut dyn Surface) -> bool {
        match owner.slot_mut(field) {
            Some(slot) => self.present_value(field.name(), field.ty(), slot, ui),
            None => false,
        }
    }

    /// Presents a free-standing value, such as a container element.
    fn present_value(&self, label: &str, ty: &Type, value: &mut Value, ui: &mut dyn Surface)
    -> bool;

    /// Fills the slot of `field` from the scene, returns whether it did.
    #[inline]
    fn auto_set(&self, _owner: &mut Object, _field: &Field, _root: &SceneNode) -> bool {
        false
    }

    fn write_to(&self, value: &Value, writer: &mut StreamWriter) -> Result<(), StreamError>;

    /// Merges a value read from `reader` into `value`.
    fn merge_from(&self, value: &mut Value, reader: &mut StreamReader<'_>)
    -> Result<(), StreamError>;

    fn equals(&self, x: &Value, y: &Value) -> bool;

    /// The value a fresh slot handled by this handler holds.
    fn default_value(&self) -> Value;

    /// The concrete type a reference-by-type handler is bound to.
    #[inline]
    fn bound_type(&self) -> Option<&Type> {
        None
    }

    /// The nested handler a container or nullable wrapper delegates to.
    #[inline]
    fn element(&self) -> Option<&HandlerRef> {
        None
    }
}

impl fmt::Debug for dyn Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Handler");
        debug.field("tag", &self.tag());
        if let Some(bound) = self.bound_type() {
            debug.field("bound", bound);
        }
        debug.finish()
    }
}

/// Reports a value of the wrong shape handed to a writer.
#[inline]
pub(crate) fn shape_error(expected: &'static str, found: &Value) -> StreamError {
    StreamError::Shape {
        expected,
        found: found.kind_name(),
    }
}
