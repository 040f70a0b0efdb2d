use alloc::string::ToString;

use vc_reflect::info::{EnumInfo, Type};
use vc_reflect::value::Value;
use vc_stream::{StreamError, StreamReader, StreamWriter, TypeTag};

use crate::Surface;
use crate::handler::{Handler, shape_error};

/// Handler of one enum type, written as the variant's `i32` code.
#[derive(Debug, Clone)]
pub struct EnumHandler {
    ty: Type,
    info: EnumInfo,
}

impl EnumHandler {
    #[inline]
    pub fn new(ty: &Type, info: &EnumInfo) -> Self {
        Self {
            ty: ty.clone(),
            info: info.clone(),
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    // An enum without variants accepts any code.
    #[inline]
    fn accepts(&self, code: i32) -> bool {
        self.info.variant_len() == 0 || self.info.contains_code(code)
    }

    fn check_code(&self, code: i32) -> Result<(), StreamError> {
        if self.accepts(code) {
            return Ok(());
        }
        Err(StreamError::UnknownEnum {
            type_path: self.ty.path().to_string(),
            code,
        })
    }
}

impl Handler for EnumHandler {
    #[inline]
    fn tag(&self) -> TypeTag {
        TypeTag::Enum
    }

    fn present_value(&self, label: &str, _ty: &Type, value: &mut Value, ui: &mut dyn Surface) -> bool {
        let Value::Enum(code) = value else {
            return false;
        };
        match ui.draw_enum(label, &self.info, *code) {
            Some(picked) if picked != *code && self.accepts(picked) => {
                *code = picked;
                true
            }
            _ => false,
        }
    }

    fn write_to(&self, value: &Value, writer: &mut StreamWriter) -> Result<(), StreamError> {
        let Value::Enum(code) = value else {
            return Err(shape_error("Enum", value));
        };
        self.check_code(*code)?;
        writer.write_i32(*code);
        Ok(())
    }

    fn merge_from(&self, value: &mut Value, reader: &mut StreamReader<'_>) -> Result<(), StreamError> {
        let code = reader.read_i32()?;
        self.check_code(code)?;
        *value = Value::Enum(code);
        Ok(())
    }

    #[inline]
    fn equals(&self, x: &Value, y: &Value) -> bool {
        matches!((x, y), (Value::Enum(a), Value::Enum(b)) if a == b)
    }

    #[inline]
    fn default_value(&self) -> Value {
        Value::Enum(self.info.default_code())
    }
}
