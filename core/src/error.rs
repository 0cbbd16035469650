//! Error types for host capability surfaces.

use glint_types::EntityId;
use thiserror::Error;

use crate::surface::OverlayHandle;

/// Failure reported by a host capability surface.
///
/// The highlighter adds no retry or recovery on top of these; they
/// propagate to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The overlay handle is not (or no longer) known to the host.
    #[error("unknown overlay handle {0}")]
    UnknownOverlay(OverlayHandle),

    /// The entity is not (or no longer) present in the scene.
    #[error("unknown entity {0}")]
    UnknownEntity(EntityId),

    /// Backend-specific failure from the host.
    #[error("host surface error: {0}")]
    Host(String),
}
