use alloc::string::String;
use alloc::vec::Vec;

use byteorder::{ByteOrder, LittleEndian};
use vc_reflect::value::Handle;

use crate::{Payload, StreamError, TypeTag, WireFormat};

macro_rules! impl_read_fixed {
    ($($name:ident: $ty:ty => $read:ident, $size:literal;)*) => {
        $(
            #[doc = concat!("Reads a little-endian `", stringify!($ty), "`.")]
            #[inline]
            pub fn $name(&mut self) -> Result<$ty, StreamError> {
                Ok(LittleEndian::$read(self.take($size)?))
            }
        )*
    };
}

/// Reads values back from a byte slice, the exact inverse of
/// [`StreamWriter`](crate::StreamWriter).
///
/// Every read checks bounds and fails with [`StreamError::Underrun`] instead
/// of reading past the end.
#[derive(Debug, Clone)]
pub struct StreamReader<'a> {
    format: WireFormat,
    bytes: &'a [u8],
    cursor: usize,
    objects: &'a [Handle],
}

impl<'a> StreamReader<'a> {
    #[inline]
    pub fn new(format: WireFormat, bytes: &'a [u8], objects: &'a [Handle]) -> Self {
        Self {
            format,
            bytes,
            cursor: 0,
            objects,
        }
    }

    #[inline]
    pub fn from_payload(format: WireFormat, payload: &'a Payload) -> Self {
        Self::new(format, payload.bytes(), payload.objects())
    }

    #[inline]
    pub fn format(&self) -> WireFormat {
        self.format
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of unread bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.cursor
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8], StreamError> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(StreamError::Underrun { needed, remaining });
        }
        let start = self.cursor;
        self.cursor += needed;
        Ok(&self.bytes[start..self.cursor])
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, StreamError> {
        Ok(self.take(1)?[0])
    }

    #[inline]
    pub fn read_i8(&mut self) -> Result<i8, StreamError> {
        Ok(self.take(1)?[0] as i8)
    }

    impl_read_fixed! {
        read_u16: u16 => read_u16, 2;
        read_i16: i16 => read_i16, 2;
        read_u32: u32 => read_u32, 4;
        read_i32: i32 => read_i32, 4;
        read_u64: u64 => read_u64, 8;
        read_i64: i64 => read_i64, 8;
        read_f32: f32 => read_f32, 4;
        read_f64: f64 => read_f64, 8;
    }

    pub fn read_bool(&mut self) -> Result<bool, StreamError> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(StreamError::InvalidBool(other)),
        }
    }

    pub fn read_char(&mut self) -> Result<char, StreamError> {
        let scalar = self.read_u32()?;
        char::from_u32(scalar).ok_or(StreamError::InvalidChar(scalar))
    }

    /// Reads a `u32` length prefix.
    #[inline]
    pub fn read_len(&mut self) -> Result<usize, StreamError> {
        Ok(self.read_u32()? as usize)
    }

    pub fn read_string(&mut self) -> Result<String, StreamError> {
        let len = self.read_len()?;
        let bytes = self.take(len)?;
        String::from_utf8(Vec::from(bytes)).map_err(|_| StreamError::InvalidUtf8)
    }

    #[inline]
    pub fn read_tag(&mut self) -> Result<TypeTag, StreamError> {
        TypeTag::try_from(self.read_u8()?)
    }

    /// Reads a tag and fails unless it is `expected`.
    pub fn expect_tag(&mut self, expected: TypeTag) -> Result<(), StreamError> {
        let found = self.read_tag()?;
        if found != expected {
            return Err(StreamError::TagMismatch { expected, found });
        }
        Ok(())
    }

    /// Reads an object reference written by
    /// [`write_object_ref`](crate::StreamWriter::write_object_ref).
    pub fn read_object_ref(&mut self) -> Result<Option<Handle>, StreamError> {
        let index = self.read_i32()?;
        if index == -1 {
            return Ok(None);
        }
        usize::try_from(index)
            .ok()
            .and_then(|i| self.objects.get(i))
            .cloned()
            .map(Some)
            .ok_or(StreamError::UnknownObject {
                index,
                len: self.objects.len(),
            })
    }

    /// Fails if any byte is left unread.
    pub fn finish(self) -> Result<(), StreamError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(StreamError::TrailingBytes(n)),
        }
    }
}
