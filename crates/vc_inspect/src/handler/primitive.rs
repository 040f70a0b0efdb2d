use vc_reflect::info::{PrimitiveKind, Type};
use vc_reflect::value::Value;
use vc_stream::{StreamError, StreamReader, StreamWriter, TypeTag};

use crate::Surface;
use crate::handler::{Handler, shape_error};

/// Handler of one built-in scalar or vector kind.
///
/// Floats compare by bit pattern, so a written `NaN` reads back equal.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveHandler {
    kind: PrimitiveKind,
}

impl PrimitiveHandler {
    #[inline]
    pub const fn new(kind: PrimitiveKind) -> Self {
        Self { kind }
    }

    #[inline]
    pub const fn kind(&self) -> PrimitiveKind {
        self.kind
    }
}

fn f32s_eq(x: &[f32], y: &[f32]) -> bool {
    x.iter().zip(y).all(|(a, b)| a.to_bits() == b.to_bits())
}

fn write_f32s(writer: &mut StreamWriter, values: &[f32]) {
    values.iter().for_each(|v| writer.write_f32(*v));
}

fn write_i32s(writer: &mut StreamWriter, values: &[i32]) {
    values.iter().for_each(|v| writer.write_i32(*v));
}

fn read_f32s<const N: usize>(reader: &mut StreamReader<'_>) -> Result<[f32; N], StreamError> {
    let mut out = [0.0; N];
    for slot in &mut out {
        *slot = reader.read_f32()?;
    }
    Ok(out)
}

fn read_i32s<const N: usize>(reader: &mut StreamReader<'_>) -> Result<[i32; N], StreamError> {
    let mut out = [0; N];
    for slot in &mut out {
        *slot = reader.read_i32()?;
    }
    Ok(out)
}

impl Handler for PrimitiveHandler {
    #[inline]
    fn tag(&self) -> TypeTag {
        TypeTag::from(self.kind)
    }

    fn present_value(&self, label: &str, _ty: &Type, value: &mut Value, ui: &mut dyn Surface) -> bool {
        let Some(edited) = ui.draw_field(label, value) else {
            return false;
        };
        if !self.kind.matches(&edited) {
            log::warn!(
                "ignored `{label}` edit: expected {}, found {}",
                self.kind,
                edited.kind_name()
            );
            return false;
        }
        if self.equals(value, &edited) {
            return false;
        }
        *value = edited;
        true
    }

    fn write_to(&self, value: &Value, writer: &mut StreamWriter) -> Result<(), StreamError> {
        match (self.kind, value) {
            (PrimitiveKind::I32, Value::I32(v)) => writer.write_i32(*v),
            (PrimitiveKind::U32, Value::U32(v)) => writer.write_u32(*v),
            (PrimitiveKind::I8, Value::I8(v)) => writer.write_i8(*v),
            (PrimitiveKind::U8, Value::U8(v)) => writer.write_u8(*v),
            (PrimitiveKind::Char, Value::Char(v)) => writer.write_char(*v),
            (PrimitiveKind::I16, Value::I16(v)) => writer.write_i16(*v),
            (PrimitiveKind::U16, Value::U16(v)) => writer.write_u16(*v),
            (PrimitiveKind::I64, Value::I64(v)) => writer.write_i64(*v),
            (PrimitiveKind::U64, Value::U64(v)) => writer.write_u64(*v),
            (PrimitiveKind::F32, Value::F32(v)) => writer.write_f32(*v),
            (PrimitiveKind::F64, Value::F64(v)) => writer.write_f64(*v),
            (PrimitiveKind::String, Value::Str(v)) => writer.write_str(v)?,
            (PrimitiveKind::Bool, Value::Bool(v)) => writer.write_bool(*v),
            (PrimitiveKind::Vec2, Value::Vec2(v)) => write_f32s(writer, v),
            (PrimitiveKind::Vec3, Value::Vec3(v)) => write_f32s(writer, v),
            (PrimitiveKind::Vec4, Value::Vec4(v)) => write_f32s(writer, v),
            (PrimitiveKind::IVec2, Value::IVec2(v)) => write_i32s(writer, v),
            (PrimitiveKind::IVec3, Value::IVec3(v)) => write_i32s(writer, v),
            (kind, other) => return Err(shape_error(kind.path(), other)),
        }
        Ok(())
    }

    fn merge_from(&self, value: &mut Value, reader: &mut StreamReader<'_>) -> Result<(), StreamError> {
        *value = match self.kind {
            PrimitiveKind::I32 => Value::I32(reader.read_i32()?),
            PrimitiveKind::U32 => Value::U32(reader.read_u32()?),
            PrimitiveKind::I8 => Value::I8(reader.read_i8()?),
            PrimitiveKind::U8 => Value::U8(reader.read_u8()?),
            PrimitiveKind::Char => Value::Char(reader.read_char()?),
            PrimitiveKind::I16 => Value::I16(reader.read_i16()?),
            PrimitiveKind::U16 => Value::U16(reader.read_u16()?),
            PrimitiveKind::I64 => Value::I64(reader.read_i64()?),
            PrimitiveKind::U64 => Value::U64(reader.read_u64()?),
            PrimitiveKind::F32 => Value::F32(reader.read_f32()?),
            PrimitiveKind::F64 => Value::F64(reader.read_f64()?),
            PrimitiveKind::String => Value::Str(reader.read_string()?),
            PrimitiveKind::Bool => Value::Bool(reader.read_bool()?),
            PrimitiveKind::Vec2 => Value::Vec2(read_f32s(reader)?),
            PrimitiveKind::Vec3 => Value::Vec3(read_f32s(reader)?),
            PrimitiveKind::Vec4 => Value::Vec4(read_f32s(reader)?),
            PrimitiveKind::IVec2 => Value::IVec2(read_i32s(reader)?),
            PrimitiveKind::IVec3 => Value::IVec3(read_i32s(reader)?),
        };
        Ok(())
    }

    fn equals(&self, x: &Value, y: &Value) -> bool {
        match (x, y) {
            (Value::F32(a), Value::F32(b)) => a.to_bits() == b.to_bits(),
            (Value::F64(a), Value::F64(b)) => a.to_bits() == b.to_bits(),
            (Value::Vec2(a), Value::Vec2(b)) => f32s_eq(a, b),
            (Value::Vec3(a), Value::Vec3(b)) => f32s_eq(a, b),
            (Value::Vec4(a), Value::Vec4(b)) => f32s_eq(a, b),
            _ => x == y,
        }
    }

    #[inline]
    fn default_value(&self) -> Value {
        self.kind.default_value()
    }
}
