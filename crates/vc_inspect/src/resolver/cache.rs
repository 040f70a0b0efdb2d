use alloc::sync::Arc;

use vc_reflect::hash::HashMap;
use vc_reflect::info::{FieldId, PrimitiveKind, Type};

use crate::handler::{HandlerRef, InertHandler, PrimitiveHandler};

/// One generation of resolved handlers.
///
/// The built-in table is filled on creation and never changes; the type and
/// field maps only grow. A release replaces the whole value at once.
pub(crate) struct HandlerCache {
    builtins: HashMap<&'static str, HandlerRef>,
    types: HashMap<Type, HandlerRef>,
    fields: HashMap<FieldId, (Type, HandlerRef)>,
    inert: HandlerRef,
}

impl HandlerCache {
    pub(crate) fn new() -> Self {
        let builtins = PrimitiveKind::ALL
            .into_iter()
            .map(|kind| (kind.path(), Arc::new(PrimitiveHandler::new(kind)) as HandlerRef))
            .collect();
        Self {
            builtins,
            types: HashMap::default(),
            fields: HashMap::default(),
            inert: Arc::new(InertHandler),
        }
    }

    /// The built-in handler for exactly this path.
    #[inline]
    pub(crate) fn builtin(&self, path: &str) -> Option<HandlerRef> {
        self.builtins.get(path).cloned()
    }

    #[inline]
    pub(crate) fn inert(&self) -> HandlerRef {
        self.inert.clone()
    }

    #[inline]
    pub(crate) fn by_type(&self, ty: &Type) -> Option<HandlerRef> {
        self.types.get(ty).cloned()
    }

    #[inline]
    pub(crate) fn insert_type(&mut self, ty: &Type, handler: &HandlerRef) {
        self.types.insert(ty.clone(), handler.clone());
    }

    /// The handler cached under a field, with the type it was resolved for.
    #[inline]
    pub(crate) fn by_field(&self, id: &FieldId) -> Option<&(Type, HandlerRef)> {
        self.fields.get(id)
    }

    #[inline]
    pub(crate) fn insert_field(&mut self, id: &FieldId, ty: &Type, handler: &HandlerRef) {
        self.fields.insert(id.clone(), (ty.clone(), handler.clone()));
    }

    #[inline]
    pub(crate) fn type_len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub(crate) fn field_len(&self) -> usize {
        self.fields.len()
    }
}
