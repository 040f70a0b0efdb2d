use alloc::sync::Arc;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::info::Type;

/// A reference to a host native object.
///
/// Equality is identity: two handles are equal when their ids are.
#[derive(Clone)]
pub struct Handle {
    id: u64,
    name: Arc<str>,
    ty: Type,
}

impl Handle {
    #[inline]
    pub fn new(id: u64, name: &str, ty: &Type) -> Self {
        Self {
            id,
            name: name.into(),
            ty: ty.clone(),
        }
    }

    /// Host identity of the object.
    #[inline]
    pub const fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runtime type of the referenced object.
    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

impl PartialEq for Handle {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Handle {}

impl Hash for Handle {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}#{}: {})", self.name, self.id, self.ty)
    }
}
