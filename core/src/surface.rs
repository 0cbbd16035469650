//! Host capability surfaces.
//!
//! The host engine itself is out of scope; these two traits are the seams
//! through which the highlighter reaches it. Overlay primitives are
//! created from a full [`OverlayDescriptor`] and subsequently edited with
//! [`OverlayPatch`]es carrying only the fields that change. Entity state
//! is read-only from this side.
//!
//! `glint-scene` provides an in-memory implementation for tests and demos.

use glint_types::{EntityId, EntityProperties, OverlayDescriptor, OverlayKind, OverlayPatch};

use crate::error::SurfaceError;

/// Opaque identifier for a host-rendered overlay, issued by
/// [`OverlaySurface::add_overlay`] and valid until the matching
/// [`OverlaySurface::delete_overlay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayHandle(pub u64);

impl std::fmt::Display for OverlayHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "overlay#{}", self.0)
    }
}

/// Overlay primitive lifecycle: create, patch, destroy.
pub trait OverlaySurface {
    /// Create an overlay of the given kind with the given full appearance.
    fn add_overlay(
        &mut self,
        kind: OverlayKind,
        descriptor: &OverlayDescriptor,
    ) -> Result<OverlayHandle, SurfaceError>;

    /// Merge a partial appearance update onto an existing overlay.
    fn edit_overlay(
        &mut self,
        handle: OverlayHandle,
        patch: &OverlayPatch,
    ) -> Result<(), SurfaceError>;

    /// Destroy an overlay. The handle is invalid afterwards.
    fn delete_overlay(&mut self, handle: OverlayHandle) -> Result<(), SurfaceError>;
}

/// Read-only queries against the host's persisted scene.
pub trait EntitySurface {
    /// Current properties of the given entity.
    fn entity_properties(&self, id: &EntityId) -> Result<EntityProperties, SurfaceError>;
}

// Shared-surface impls: a highlighter holds clones of the Rc while the
// caller keeps mutating the scene through its own clone, the way a real
// engine facade is shared. These live here because the orphan rule
// requires them in the trait's crate.

impl<S: OverlaySurface> OverlaySurface for std::rc::Rc<std::cell::RefCell<S>> {
    fn add_overlay(
        &mut self,
        kind: OverlayKind,
        descriptor: &OverlayDescriptor,
    ) -> Result<OverlayHandle, SurfaceError> {
        self.borrow_mut().add_overlay(kind, descriptor)
    }

    fn edit_overlay(
        &mut self,
        handle: OverlayHandle,
        patch: &OverlayPatch,
    ) -> Result<(), SurfaceError> {
        self.borrow_mut().edit_overlay(handle, patch)
    }

    fn delete_overlay(&mut self, handle: OverlayHandle) -> Result<(), SurfaceError> {
        self.borrow_mut().delete_overlay(handle)
    }
}

impl<S: EntitySurface> EntitySurface for std::rc::Rc<std::cell::RefCell<S>> {
    fn entity_properties(&self, id: &EntityId) -> Result<EntityProperties, SurfaceError> {
        self.borrow().entity_properties(id)
    }
}
