use vc_reflect::info::{Field, Type};
use vc_reflect::value::{Object, Value};
use vc_stream::{StreamError, StreamReader, StreamWriter, TypeTag};

use crate::handler::object::{handles_eq, merge_handle, present_handle, write_handle};
use crate::handler::Handler;
use crate::{SceneNode, Surface};

/// Handler of a type backed by a native component agent.
///
/// The slot holds the agent's native object. Auto-set takes the first
/// fitting component anywhere under the root.
#[derive(Debug, Clone)]
pub struct AgentHandler {
    ty: Type,
}

impl AgentHandler {
    #[inline]
    pub fn new(ty: &Type) -> Self {
        Self { ty: ty.clone() }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

impl Handler for AgentHandler {
    #[inline]
    fn tag(&self) -> TypeTag {
        TypeTag::Agent
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
        match root.find_component(&self.ty) {
            Some(handle) => {
                *slot = Value::Handle(handle.clone());
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
