use alloc::vec::Vec;

use vc_reflect::value::Handle;

/// A finished stream: bytes and the objects they reference by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    bytes: Vec<u8>,
    objects: Vec<Handle>,
}

impl Payload {
    #[inline]
    pub fn new(bytes: Vec<u8>, objects: Vec<Handle>) -> Self {
        Self { bytes, objects }
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Object table, indexed by the references in [`bytes`](Payload::bytes).
    #[inline]
    pub fn objects(&self) -> &[Handle] {
        &self.objects
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn into_parts(self) -> (Vec<u8>, Vec<Handle>) {
        (self.bytes, self.objects)
    }
}
