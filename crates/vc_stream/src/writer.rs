use alloc::vec::Vec;

use byteorder::{ByteOrder, LittleEndian};
use vc_reflect::value::Handle;

use crate::{Payload, StreamError, TypeTag, WireFormat};

macro_rules! impl_write_fixed {
    ($($name:ident: $ty:ty => $write:ident, $size:literal;)*) => {
        $(
            #[doc = concat!("Writes a little-endian `", stringify!($ty), "`.")]
            #[inline]
            pub fn $name(&mut self, value: $ty) {
                let mut buf = [0u8; $size];
                LittleEndian::$write(&mut buf, value);
                self.bytes.extend_from_slice(&buf);
            }
        )*
    };
}

/// Appends values to a growing byte buffer.
///
/// Object references are collected into a table and written as indices, the
/// same handle is stored once.
#[derive(Debug, Default)]
pub struct StreamWriter {
    format: WireFormat,
    bytes: Vec<u8>,
    objects: Vec<Handle>,
}

impl StreamWriter {
    #[inline]
    pub fn new(format: WireFormat) -> Self {
        Self {
            format,
            bytes: Vec::new(),
            objects: Vec::new(),
        }
    }

    #[inline]
    pub fn format(&self) -> WireFormat {
        self.format
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    #[inline]
    pub fn write_i8(&mut self, value: i8) {
        self.bytes.push(value as u8);
    }

    impl_write_fixed! {
        write_u16: u16 => write_u16, 2;
        write_i16: i16 => write_i16, 2;
        write_u32: u32 => write_u32, 4;
        write_i32: i32 => write_i32, 4;
        write_u64: u64 => write_u64, 8;
        write_i64: i64 => write_i64, 8;
        write_f32: f32 => write_f32, 4;
        write_f64: f64 => write_f64, 8;
    }

    /// Writes `0` or `1`.
    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.bytes.push(value as u8);
    }

    /// Writes the scalar value as a `u32`.
    #[inline]
    pub fn write_char(&mut self, value: char) {
        self.write_u32(value as u32);
    }

    /// Writes a `u32` length prefix.
    pub fn write_len(&mut self, len: usize) -> Result<(), StreamError> {
        let len = u32::try_from(len).map_err(|_| StreamError::LengthOverflow(len))?;
        self.write_u32(len);
        Ok(())
    }

    /// Writes the UTF-8 byte length, then the bytes.
    pub fn write_str(&mut self, value: &str) -> Result<(), StreamError> {
        self.write_len(value.len())?;
        self.bytes.extend_from_slice(value.as_bytes());
        Ok(())
    }

    #[inline]
    pub fn write_tag(&mut self, tag: TypeTag) {
        self.bytes.push(tag.to_u8());
    }

    /// Writes an object reference as an `i32` index into the object table,
    /// `-1` for none.
    pub fn write_object_ref(&mut self, handle: Option<&Handle>) -> Result<(), StreamError> {
        let Some(handle) = handle else {
            self.write_i32(-1);
            return Ok(());
        };
        let index = match self.objects.iter().position(|h| h == handle) {
            Some(index) => index,
            None => {
                self.objects.push(handle.clone());
                self.objects.len() - 1
            }
        };
        let index = i32::try_from(index).map_err(|_| StreamError::LengthOverflow(index))?;
        self.write_i32(index);
        Ok(())
    }

    /// Completes the stream.
    #[inline]
    pub fn finish(self) -> Payload {
        Payload::new(self.bytes, self.objects)
    }
}

#[cfg(test)]
mod tests {
    use vc_reflect::info::TypeInfo;
    use vc_reflect::value::Handle;

    use super::StreamWriter;
    use crate::{TypeTag, WireFormat};

    #[test]
    fn little_endian_layout() {
        let mut w = StreamWriter::new(WireFormat::Compact);
        w.write_i32(42);
        w.write_u16(0x0102);
        w.write_char('A');
        w.write_tag(TypeTag::Map);
        assert_eq!(w.bytes(), &[42, 0, 0, 0, 2, 1, 65, 0, 0, 0, 22]);
    }

    #[test]
    fn object_table_dedup() {
        let ty = TypeInfo::handle("Object", None).into_type();
        let a = Handle::new(7, "a", &ty);
        let b = Handle::new(9, "b", &ty);

        let mut w = StreamWriter::new(WireFormat::Compact);
        w.write_object_ref(Some(&a)).unwrap();
        w.write_object_ref(Some(&b)).unwrap();
        w.write_object_ref(Some(&a)).unwrap();
        w.write_object_ref(None).unwrap();

        let payload = w.finish();
        assert_eq!(payload.objects().len(), 2);
        assert_eq!(
            payload.bytes(),
            &[0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }
}
