use alloc::sync::Arc;
use core::fmt;

use vc_reflect::registry::{NoHostedTypes, TypeSource};
use vc_stream::WireFormat;

/// Configuration chosen when a [`TypeEditor`](crate::TypeEditor) is built.
///
/// # Examples
///
/// ```
/// use vc_inspect::EditorSettings;
/// use vc_reflect::registry::TypeRegistry;
/// use vc_stream::WireFormat;
///
/// let settings = EditorSettings::default()
///     .with_wire_format(WireFormat::Tagged)
///     .with_hosted(TypeRegistry::hosted());
///
/// assert_eq!(settings.wire_format(), WireFormat::Tagged);
/// assert!(settings.hosted().is_present());
/// assert!(!EditorSettings::default().hosted().is_present());
/// ```
#[derive(Clone)]
pub struct EditorSettings {
    wire_format: WireFormat,
    hosted: Arc<dyn TypeSource>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            wire_format: WireFormat::Compact,
            hosted: Arc::new(NoHostedTypes),
        }
    }
}

impl EditorSettings {
    /// Sets the layout used by `serialize`, `deserialize` and `merge`.
    #[inline]
    pub fn with_wire_format(mut self, wire_format: WireFormat) -> Self {
        self.wire_format = wire_format;
        self
    }

    /// Sets the secondary runtime type source.
    #[inline]
    pub fn with_hosted(mut self, hosted: impl TypeSource + 'static) -> Self {
        self.hosted = Arc::new(hosted);
        self
    }

    #[inline]
    pub fn wire_format(&self) -> WireFormat {
        self.wire_format
    }

    #[inline]
    pub fn hosted(&self) -> &dyn TypeSource {
        &*self.hosted
    }
}

impl fmt::Debug for EditorSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorSettings")
            .field("wire_format", &self.wire_format)
            .field("hosted", &self.hosted.is_present())
            .finish()
    }
}
