//! In-memory reference host for the Glint capability surfaces.
//!
//! [`MemoryScene`] backs both [`OverlaySurface`] and [`EntitySurface`]
//! with hash maps, giving tests and demos a complete host without an
//! engine. Surface impls are also provided for `Rc<RefCell<MemoryScene>>`
//! so one scene can be shared between a highlighter and the caller that
//! keeps mutating it, the way a real engine facade is shared.

use std::collections::HashMap;

use glint_core::{EntitySurface, OverlayHandle, OverlaySurface, SurfaceError};
use glint_types::{EntityId, EntityProperties, OverlayDescriptor, OverlayKind, OverlayPatch, Vec3};

/// A live overlay as the scene currently renders it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayState {
    pub kind: OverlayKind,
    pub descriptor: OverlayDescriptor,
}

/// Hash-map scene of overlays and entities.
#[derive(Debug, Default)]
pub struct MemoryScene {
    overlays: HashMap<OverlayHandle, OverlayState>,
    entities: HashMap<EntityId, EntityProperties>,
    next_handle: u64,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Entity mutation (the "rest of the engine" in tests and demos)
    // ─────────────────────────────────────────────────────────────────────

    pub fn insert_entity(&mut self, id: impl Into<EntityId>, properties: EntityProperties) {
        self.entities.insert(id.into(), properties);
    }

    /// Move an existing entity. Returns false if the id is unknown.
    pub fn move_entity(&mut self, id: &EntityId, position: Vec3) -> bool {
        match self.entities.get_mut(id) {
            Some(properties) => {
                properties.position = position;
                true
            }
            None => false,
        }
    }

    pub fn remove_entity(&mut self, id: &EntityId) -> Option<EntityProperties> {
        self.entities.remove(id)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Inspection
    // ─────────────────────────────────────────────────────────────────────

    pub fn overlay(&self, handle: OverlayHandle) -> Option<&OverlayState> {
        self.overlays.get(&handle)
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    pub fn overlays(&self) -> impl Iterator<Item = (OverlayHandle, &OverlayState)> {
        self.overlays.iter().map(|(handle, state)| (*handle, state))
    }
}

impl OverlaySurface for MemoryScene {
    fn add_overlay(
        &mut self,
        kind: OverlayKind,
        descriptor: &OverlayDescriptor,
    ) -> Result<OverlayHandle, SurfaceError> {
        self.next_handle += 1;
        let handle = OverlayHandle(self.next_handle);
        self.overlays.insert(
            handle,
            OverlayState {
                kind,
                descriptor: *descriptor,
            },
        );
        Ok(handle)
    }

    fn edit_overlay(
        &mut self,
        handle: OverlayHandle,
        patch: &OverlayPatch,
    ) -> Result<(), SurfaceError> {
        match self.overlays.get_mut(&handle) {
            Some(state) => {
                state.descriptor.apply(patch);
                Ok(())
            }
            None => Err(SurfaceError::UnknownOverlay(handle)),
        }
    }

    fn delete_overlay(&mut self, handle: OverlayHandle) -> Result<(), SurfaceError> {
        self.overlays
            .remove(&handle)
            .map(|_| ())
            .ok_or(SurfaceError::UnknownOverlay(handle))
    }
}

impl EntitySurface for MemoryScene {
    fn entity_properties(&self, id: &EntityId) -> Result<EntityProperties, SurfaceError> {
        self.entities
            .get(id)
            .cloned()
            .ok_or_else(|| SurfaceError::UnknownEntity(id.clone()))
    }
}

// Shared-scene use: a highlighter holds clones of an
// `Rc<RefCell<MemoryScene>>` while the caller keeps spawning and moving
// entities through its own clone. The surface impls for
// `Rc<RefCell<_>>` live in `glint_core::surface` (orphan rule).
