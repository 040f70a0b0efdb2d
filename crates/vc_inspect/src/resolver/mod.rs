//! Handler resolution and its cache.
//!
//! ## Menu
//!
//! - [`TypeEditor`]: resolves a [`Handler`](crate::Handler) for a type or a
//!   field and memoizes the result for the current cache generation.
//! - [`EditorSettings`]: the wire format and the optional secondary runtime.
//! - [`ReleaseSignal`]: the host's reload hook; firing it drops every cached
//!   handler at once.
//!
//! ## Resolution order
//!
//! With a field, the first of these wins:
//!
//! 1. a handler already cached for the field;
//! 2. the inert handler for a [`HideInInspector`] field;
//! 3. the built-in handler whose path equals the declared type's path;
//! 4. the type rules below.
//!
//! Steps 2 to 4 cache their handler under the field.
//!
//! Without a field, the built-in table and then the type cache are consulted
//! before the type rules:
//!
//! - the native object handle family, then enums, then the reference-by-type
//!   sentinel (bound through the field's [`RefTarget`]);
//! - [`Smart`] composites, then [`Agent`] types;
//! - hot-reloadable arrays and lists of the secondary runtime;
//! - arrays, lists and dictionaries;
//! - inert for types that are not serializable, otherwise a composite over
//!   the serializable fields.
//!
//! Resolution never fails: anything it cannot handle gets the inert handler.

// -----------------------------------------------------------------------------
// Modules

mod cache;
mod release;
mod settings;

// -----------------------------------------------------------------------------
// Exports

pub use release::ReleaseSignal;
pub use settings::EditorSettings;

// -----------------------------------------------------------------------------
// TypeEditor

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use vc_reflect::info::{Agent, ElementType, EntryTypes, Field, HideInInspector};
use vc_reflect::info::{Origin, RefTarget, Smart, Type, TypeKind};
use vc_reflect::registry::TypeSource;

use crate::AttachError;
use crate::handler::{AgentHandler, CompositeHandler, EnumHandler, FieldHandlers, HandlerRef};
use crate::handler::{HotListHandler, MapHandler, ObjectHandler, SequenceHandler, SmartHandler};
use crate::handler::TypeRefHandler;

use cache::HandlerCache;
use release::ReleaseListener;

/// The resolver and the entry point of every editor operation.
///
/// A `TypeEditor` owns one cache generation at a time. Within a generation,
/// resolving the same type, or the same field, returns the same handler
/// instance. [`release`](TypeEditor::release) starts a new generation.
///
/// The editor is single-writer: every operation takes `&mut self`.
///
/// # Examples
///
/// ```
/// use vc_inspect::TypeEditor;
/// use vc_reflect::info::{PrimitiveKind, Type, TypeInfo};
/// use vc_reflect::registry::TypeRegistry;
/// use vc_stream::TypeTag;
///
/// let mut editor = TypeEditor::new(TypeRegistry::new());
/// let team = TypeInfo::enumeration("game::Team", &[("Red", 0), ("Blue", 1)]).into_type();
///
/// let first = editor.resolve(&team, None);
/// let second = editor.resolve(&team, None);
/// assert_eq!(first.tag(), TypeTag::Enum);
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
///
/// let int = editor.resolve(&Type::primitive(PrimitiveKind::I32), None);
/// assert_eq!(int.tag(), TypeTag::I32);
/// ```
pub struct TypeEditor {
    source: Box<dyn TypeSource>,
    settings: EditorSettings,
    cache: HandlerCache,
    generation: u64,
    listener: Option<ReleaseListener>,
    // Types whose rules are being evaluated, innermost last.
    resolving: Vec<Type>,
}

impl TypeEditor {
    /// Creates an editor over the primary type source with default settings.
    #[inline]
    pub fn new(source: impl TypeSource + 'static) -> Self {
        Self::with_settings(source, EditorSettings::default())
    }

    pub fn with_settings(source: impl TypeSource + 'static, settings: EditorSettings) -> Self {
        Self {
            source: Box::new(source),
            settings,
            cache: HandlerCache::new(),
            generation: 0,
            listener: None,
            resolving: Vec::new(),
        }
    }

    #[inline]
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// The primary type source.
    #[inline]
    pub fn source(&self) -> &dyn TypeSource {
        &*self.source
    }

    /// Number of releases this editor has gone through.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of handlers cached under a type in this generation.
    #[inline]
    pub fn cached_type_count(&self) -> usize {
        self.cache.type_len()
    }

    /// Number of handlers cached under a field in this generation.
    #[inline]
    pub fn cached_field_count(&self) -> usize {
        self.cache.field_len()
    }

    /// Subscribes to the host's reload hook.
    ///
    /// A signal accepts a single editor, and an editor listens to a single
    /// signal.
    pub fn attach(&mut self, signal: &ReleaseSignal) -> Result<(), AttachError> {
        if self.listener.is_some() {
            return Err(AttachError::EditorAttached);
        }
        self.listener = Some(signal.subscribe()?);
        Ok(())
    }

    /// Releases the cache if the attached signal fired since the last poll.
    ///
    /// Every editor operation polls first, so calling this is only needed to
    /// drop handlers eagerly.
    pub fn poll_release(&mut self) {
        let fired = self.listener.as_mut().is_some_and(ReleaseListener::poll);
        if fired {
            self.release();
        }
    }

    /// Drops every cached handler.
    ///
    /// The three mappings are replaced by one assignment, so no resolution
    /// observes a partly cleared cache.
    pub fn release(&mut self) {
        self.cache = HandlerCache::new();
        self.resolving.clear();
        self.generation += 1;
        log::debug!("released handler cache, generation {}", self.generation);
    }

    /// Resolves the handler of `ty`, in the context of `field` when given.
    ///
    /// `ty` is the field's declared type when a field is given.
    pub fn resolve(&mut self, ty: &Type, field: Option<&Field>) -> HandlerRef {
        self.poll_release();
        self.resolve_inner(ty, field)
    }

    pub(crate) fn resolve_inner(&mut self, ty: &Type, field: Option<&Field>) -> HandlerRef {
        match field {
            Some(field) => self.resolve_field(ty, field),
            None => self.resolve_type(ty),
        }
    }

    fn resolve_type(&mut self, ty: &Type) -> HandlerRef {
        if let Some(handler) = self.cache.builtin(ty.path()) {
            return handler;
        }
        if let Some(handler) = self.cache.by_type(ty) {
            return handler;
        }
        if self.is_resolving(ty) {
            return self.cycle(ty);
        }
        let handler = self.resolve_full(ty, None);
        self.cache.insert_type(ty, &handler);
        handler
    }

    fn resolve_field(&mut self, ty: &Type, field: &Field) -> HandlerRef {
        if let Some((cached_ty, handler)) = self.cache.by_field(field.id()) {
            assert!(
                cached_ty == ty,
                "field `{}` resolved as `{cached_ty}` and again as `{ty}`",
                field.id(),
            );
            return handler.clone();
        }
        if field.has_attribute::<HideInInspector>() {
            let inert = self.cache.inert();
            self.cache.insert_field(field.id(), ty, &inert);
            return inert;
        }
        if let Some(handler) = self.cache.builtin(ty.path()) {
            self.cache.insert_field(field.id(), ty, &handler);
            return handler;
        }
        if self.is_resolving(ty) {
            return self.cycle(ty);
        }
        let handler = self.resolve_full(ty, Some(field));
        self.cache.insert_field(field.id(), ty, &handler);
        handler
    }

    #[inline]
    fn is_resolving(&self, ty: &Type) -> bool {
        self.resolving.contains(ty)
    }

    // A type reached again while its own rules run. Not cached, so the
    // enclosing resolution still completes and a later call retries.
    fn cycle(&self, ty: &Type) -> HandlerRef {
        log::warn!("type `{ty}` refers to itself, its nested occurrence is not inspected");
        self.cache.inert()
    }

    fn resolve_full(&mut self, ty: &Type, field: Option<&Field>) -> HandlerRef {
        self.resolving.push(ty.clone());
        let handler = self.select(ty, field);
        self.resolving.pop();
        log::trace!("resolved `{ty}` to {handler:?}");
        handler
    }

    fn select(&mut self, ty: &Type, field: Option<&Field>) -> HandlerRef {
        if let Some(object) = self.source.object_type()
            && self.source.is_assignable_to(ty, &object)
        {
            return Arc::new(ObjectHandler::new(ty));
        }

        if let Some(info) = ty.as_enum() {
            return Arc::new(EnumHandler::new(ty, info));
        }

        if let TypeKind::TypeRef = ty.kind() {
            return match field {
                Some(field) => self.bind_type_ref(field),
                None => self.cache.inert(),
            };
        }

        if ty.has_attribute::<Smart>() {
            let inner = self.composite(ty);
            return Arc::new(SmartHandler::new(ty, inner));
        }

        if ty.has_attribute::<Agent>() {
            return Arc::new(AgentHandler::new(ty));
        }

        if let Some(handler) = self.hot_list(ty) {
            return handler;
        }

        match ty.kind() {
            TypeKind::Array(element) => {
                let handler = self.element_handler(element, field);
                return Arc::new(SequenceHandler::array(element, handler));
            }
            TypeKind::List(element) => {
                let element = match field.and_then(|f| f.get_attribute::<ElementType>()) {
                    Some(ElementType(declared)) => declared,
                    None => element,
                };
                let handler = self.element_handler(element, field);
                return Arc::new(SequenceHandler::list(element, handler));
            }
            TypeKind::Map(key, value) => {
                let (key, value) = match field.and_then(|f| f.get_attribute::<EntryTypes>()) {
                    Some(EntryTypes(key, value)) => (key, value),
                    None => (key, value),
                };
                let key_handler = self.element_handler(key, field);
                let value_handler = self.element_handler(value, field);
                return Arc::new(MapHandler::new(key, key_handler, value, value_handler));
            }
            _ => {}
        }

        if !self.is_serializable(ty) {
            return self.cache.inert();
        }

        self.composite(ty)
    }

    /// Binds a reference-by-type field to the type its marker names.
    fn bind_type_ref(&mut self, field: &Field) -> HandlerRef {
        let Some(target) = field.get_attribute::<RefTarget>() else {
            log::debug!("field `{}` refers by type without naming one", field.id());
            return self.cache.inert();
        };
        let Some(bound) = self.lookup_type(target.path(), field.origin()) else {
            log::debug!("field `{}` names unknown type `{}`", field.id(), target.path());
            return self.cache.inert();
        };
        let inner = self.resolve_inner(&bound, None);
        Arc::new(TypeRefHandler::new(&bound, inner))
    }

    // Elements carry no field of their own. A reference-by-type element is
    // bound through the marker on the container's field.
    fn element_handler(&mut self, element: &Type, field: Option<&Field>) -> HandlerRef {
        match (element.kind(), field) {
            (TypeKind::TypeRef, Some(field)) => self.bind_type_ref(field),
            _ => self.resolve_inner(element, None),
        }
    }

    fn hot_list(&mut self, ty: &Type) -> Option<HandlerRef> {
        let hosted = self.settings.hosted();
        if !hosted.is_present() || !ty.is_hosted() {
            return None;
        }
        let is_list = match ty.kind() {
            TypeKind::Array(_) => false,
            TypeKind::List(_) => true,
            _ => return None,
        };

        let mut depth = 0;
        let mut element = ty;
        while let TypeKind::Array(inner) | TypeKind::List(inner) = element.kind() {
            element = inner;
            depth += 1;
        }
        if !element.is_hosted() {
            return None;
        }
        let element = hosted.type_by_path(element.path())?;

        let handler = self.resolve_inner(&element, None);
        Some(Arc::new(HotListHandler::new(&element, handler, depth, is_list)))
    }

    fn composite(&mut self, ty: &Type) -> HandlerRef {
        let handlers = self.resolve_fields(ty);
        Arc::new(CompositeHandler::new(ty, handlers))
    }

    /// Resolves every serializable field of `ty`, in order.
    pub(crate) fn resolve_fields(&mut self, ty: &Type) -> FieldHandlers {
        self.fields_of(ty)
            .into_iter()
            .map(|field| {
                let handler = self.resolve_inner(field.ty(), Some(&field));
                (field, handler)
            })
            .collect()
    }

    fn source_of(&self, ty: &Type) -> &dyn TypeSource {
        let hosted = self.settings.hosted();
        if ty.is_hosted() && hosted.is_present() {
            hosted
        } else {
            &*self.source
        }
    }

    fn fields_of(&self, ty: &Type) -> Vec<Field> {
        self.source_of(ty).serializable_fields(ty)
    }

    fn is_serializable(&self, ty: &Type) -> bool {
        self.source_of(ty).is_serializable(ty)
    }

    /// Finds a type named by a marker, in the secondary runtime first when the
    /// marker was declared there.
    fn lookup_type(&self, path: &str, origin: Origin) -> Option<Type> {
        let hosted = self.settings.hosted();
        if origin == Origin::Hosted
            && let Some(ty) = hosted.type_by_path(path)
        {
            return Some(ty);
        }
        self.source
            .type_by_path(path)
            .or_else(|| hosted.type_by_path(path))
    }
}

impl fmt::Debug for TypeEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeEditor")
            .field("settings", &self.settings)
            .field("generation", &self.generation)
            .field("cached_types", &self.cache.type_len())
            .field("cached_fields", &self.cache.field_len())
            .field("attached", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests;
