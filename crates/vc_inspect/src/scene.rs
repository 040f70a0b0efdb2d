use alloc::vec::Vec;

use vc_reflect::info::Type;
use vc_reflect::value::Handle;

/// A node of the scene tree used as the auto-set context root.
///
/// A node is itself a native object and carries component objects.
#[derive(Debug, Clone)]
pub struct SceneNode {
    handle: Handle,
    components: Vec<Handle>,
    children: Vec<SceneNode>,
}

impl SceneNode {
    #[inline]
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            components: Vec::new(),
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn with_component(mut self, component: Handle) -> Self {
        self.components.push(component);
        self
    }

    #[inline]
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.handle.name()
    }

    /// The node's own native object.
    #[inline]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    #[inline]
    pub fn components(&self) -> &[Handle] {
        &self.components
    }

    #[inline]
    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    /// Finds a direct child by name, ignoring ASCII case.
    pub fn child(&self, name: &str) -> Option<&SceneNode> {
        self.children
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// The node itself or its first component assignable to `ty`.
    pub fn object_of(&self, ty: &Type) -> Option<&Handle> {
        if self.handle.ty().is_assignable_to(ty) {
            return Some(&self.handle);
        }
        self.components.iter().find(|c| c.ty().is_assignable_to(ty))
    }

    /// Depth-first search for the first component assignable to `ty`.
    pub fn find_component(&self, ty: &Type) -> Option<&Handle> {
        self.components
            .iter()
            .find(|c| c.ty().is_assignable_to(ty))
            .or_else(|| self.children.iter().find_map(|c| c.find_component(ty)))
    }
}
