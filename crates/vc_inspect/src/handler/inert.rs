use vc_reflect::info::{Field, Type};
use vc_reflect::value::{Object, Value};
use vc_stream::{StreamError, StreamReader, StreamWriter, TypeTag};

use crate::Surface;
use crate::handler::Handler;

/// The no-op handler for hidden and unresolvable fields.
///
/// Presents nothing, writes nothing, merges nothing and considers every pair
/// of values equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct InertHandler;

impl Handler for InertHandler {
    #[inline]
    fn tag(&self) -> TypeTag {
        TypeTag::Inert
    }

    #[inline]
    fn present(&self, _owner: &mut Object, _field: &Field, _ui: &mut dyn Surface) -> bool {
        false
    }

    #[inline]
    fn present_value(&self, _: &str, _: &Type, _: &mut Value, _: &mut dyn Surface) -> bool {
        false
    }

    #[inline]
    fn write_to(&self, _value: &Value, _writer: &mut StreamWriter) -> Result<(), StreamError> {
        Ok(())
    }

    #[inline]
    fn merge_from(&self, _: &mut Value, _: &mut StreamReader<'_>) -> Result<(), StreamError> {
        Ok(())
    }

    #[inline]
    fn equals(&self, _x: &Value, _y: &Value) -> bool {
        true
    }

    #[inline]
    fn default_value(&self) -> Value {
        Value::Null
    }
}
