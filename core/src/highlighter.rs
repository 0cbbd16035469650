//! Entity selection highlighter.
//!
//! Owns exactly one cube overlay and mirrors its visibility/position onto
//! whichever entity is currently tracked. Two states:
//!
//! - **Idle**: no tracked entity, overlay hidden (the initial state)
//! - **Tracking**: tracked entity set, overlay visible at its position
//!
//! The overlay is created at construction and destroyed by [`Highlighter::release`]
//! (or `Drop` as a fallback), so the caller's scope is the overlay's lifetime.

use glint_types::{EntityId, OverlayDescriptor, OverlayKind, OverlayPatch};

use crate::error::SurfaceError;
use crate::surface::{EntitySurface, OverlayHandle, OverlaySurface};

/// Mirrors one selection overlay onto the currently tracked entity.
///
/// Generic over the two host surfaces so tests and demos can supply an
/// in-memory scene while a real client supplies its engine facade.
pub struct Highlighter<O: OverlaySurface, E: EntitySurface> {
    overlays: O,
    entities: E,
    /// Present from construction until `release` or `Drop` deletes it.
    handle: Option<OverlayHandle>,
    tracked: Option<EntityId>,
}

impl<O: OverlaySurface, E: EntitySurface> Highlighter<O, E> {
    /// Create the selection overlay with the default appearance
    /// (yellow wireframe cube, hidden) and start idle.
    pub fn new(overlays: O, entities: E) -> Result<Self, SurfaceError> {
        Self::with_descriptor(overlays, entities, OverlayDescriptor::default())
    }

    /// Create the selection overlay with a caller-supplied appearance.
    ///
    /// The descriptor is passed to the host as-is, so a descriptor with
    /// `visible: true` produces an overlay that is visible before any
    /// entity is tracked. [`OverlayDescriptor::default`] keeps it hidden.
    pub fn with_descriptor(
        mut overlays: O,
        entities: E,
        descriptor: OverlayDescriptor,
    ) -> Result<Self, SurfaceError> {
        let handle = overlays.add_overlay(OverlayKind::Cube, &descriptor)?;
        tracing::debug!(%handle, "created selection overlay");
        Ok(Self {
            overlays,
            entities,
            handle: Some(handle),
            tracked: None,
        })
    }

    /// The currently tracked entity, if any.
    pub fn tracked(&self) -> Option<&EntityId> {
        self.tracked.as_ref()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracked.is_some()
    }

    /// Track a new entity (`Some`) or none (`None`) and sync the overlay.
    ///
    /// Idempotent under repeated identical ids: when `id` equals the
    /// tracked id, no entity query and no overlay edit is issued, which
    /// also means the overlay position is NOT re-synced for an entity
    /// that moved since it was first highlighted.
    pub fn highlight(&mut self, id: Option<EntityId>) -> Result<(), SurfaceError> {
        if id == self.tracked {
            return Ok(());
        }
        self.tracked = id;
        self.refresh()
    }

    /// Stop tracking and hide the overlay. Equivalent to `highlight(None)`.
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        self.highlight(None)
    }

    /// Push a single-field size update to the overlay. The value is
    /// forwarded unvalidated; the host decides what it accepts.
    pub fn set_size(&mut self, size: f32) -> Result<(), SurfaceError> {
        let handle = self.handle()?;
        self.overlays
            .edit_overlay(handle, &OverlayPatch::new().size(size))
    }

    /// Sync the overlay to the tracked entity: visible at its position
    /// when tracking, hidden (position untouched) when idle.
    fn refresh(&mut self) -> Result<(), SurfaceError> {
        let handle = self.handle()?;
        match &self.tracked {
            Some(id) => {
                let properties = self.entities.entity_properties(id)?;
                tracing::debug!(%handle, entity = %id, position = %properties.position,
                    "showing highlight");
                self.overlays.edit_overlay(
                    handle,
                    &OverlayPatch::new()
                        .position(properties.position)
                        .visible(true),
                )
            }
            None => {
                tracing::debug!(%handle, "hiding highlight");
                self.overlays
                    .edit_overlay(handle, &OverlayPatch::new().visible(false))
            }
        }
    }

    /// Destroy the selection overlay and consume the highlighter.
    ///
    /// Taking `self` by value makes double-release a compile error; `Drop`
    /// only deletes when this was never called.
    pub fn release(mut self) -> Result<(), SurfaceError> {
        if let Some(handle) = self.handle.take() {
            tracing::debug!(%handle, "releasing selection overlay");
            self.overlays.delete_overlay(handle)?;
        }
        Ok(())
    }

    fn handle(&self) -> Result<OverlayHandle, SurfaceError> {
        // Only absent mid-release/mid-drop, where no method can run.
        self.handle
            .ok_or_else(|| SurfaceError::Host("selection overlay already released".to_string()))
    }
}

impl<O: OverlaySurface, E: EntitySurface> Drop for Highlighter<O, E> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = self.overlays.delete_overlay(handle) {
                tracing::warn!(%handle, error = %e, "failed to delete selection overlay on drop");
            }
        }
    }
}
