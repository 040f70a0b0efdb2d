use alloc::boxed::Box;
use alloc::sync::Arc;

/// A single enum variant and its underlying code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumVariant {
    name: Arc<str>,
    code: i32,
}

impl EnumVariant {
    /// Creates a new [`EnumVariant`].
    #[inline]
    pub fn new(name: &str, code: i32) -> Self {
        Self {
            name: name.into(),
            code,
        }
    }

    /// Returns the variant name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the underlying code written to streams.
    #[inline]
    pub const fn code(&self) -> i32 {
        self.code
    }
}

/// Ordered variants of an enumeration.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::TypeInfo;
///
/// let ty = TypeInfo::enumeration("game::Team", &[("Red", 1), ("Blue", 2)]).into_type();
/// let info = ty.as_enum().unwrap();
///
/// assert_eq!(info.default_code(), 1);
/// assert_eq!(info.variant_by_code(2).unwrap().name(), "Blue");
/// assert!(!info.contains_code(0));
/// ```
#[derive(Clone, Debug)]
pub struct EnumInfo {
    variants: Box<[EnumVariant]>,
}

impl EnumInfo {
    /// Creates a new [`EnumInfo`].
    ///
    /// The order of variants is fixed, depends on the input order.
    pub fn new(variants: &[(&str, i32)]) -> Self {
        Self {
            variants: variants
                .iter()
                .map(|&(name, code)| EnumVariant::new(name, code))
                .collect(),
        }
    }

    /// Returns an iterator over the variants in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &EnumVariant> {
        self.variants.iter()
    }

    /// Returns the variant for the given name, if present.
    pub fn variant(&self, name: &str) -> Option<&EnumVariant> {
        self.variants.iter().find(|v| v.name() == name)
    }

    /// Returns the first variant with the given code, if present.
    pub fn variant_by_code(&self, code: i32) -> Option<&EnumVariant> {
        self.variants.iter().find(|v| v.code() == code)
    }

    /// Returns `true` if some variant has the given code.
    #[inline]
    pub fn contains_code(&self, code: i32) -> bool {
        self.variant_by_code(code).is_some()
    }

    /// The code of the first declared variant, or `0` for an empty enum.
    #[inline]
    pub fn default_code(&self) -> i32 {
        self.variants.first().map_or(0, EnumVariant::code)
    }

    /// Returns the number of variants.
    #[inline]
    pub fn variant_len(&self) -> usize {
        self.variants.len()
    }
}
