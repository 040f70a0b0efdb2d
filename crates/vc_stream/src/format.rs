/// Layout of composite fields on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WireFormat {
    /// Field payloads back to back, in declared order.
    #[default]
    Compact,
    /// Every composite field is preceded by its handler's
    /// [`TypeTag`](crate::TypeTag). A mismatch on read is an error.
    Tagged,
}

impl WireFormat {
    #[inline]
    pub const fn is_tagged(self) -> bool {
        matches!(self, Self::Tagged)
    }
}
