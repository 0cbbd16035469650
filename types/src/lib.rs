//! Shared data types for the Glint workspace.
//!
//! Pure data, no behavior beyond construction and patch merging:
//! - **Geometry**: [`Vec3`] world coordinates
//! - **Overlays**: [`OverlayDescriptor`] (canonical appearance) and
//!   [`OverlayPatch`] (independently present-or-absent field updates)
//! - **Entities**: [`EntityId`] and the [`EntityProperties`] a host
//!   scene returns for them

mod entity;
mod geometry;
mod overlay;

pub use entity::{EntityId, EntityProperties};
pub use geometry::Vec3;
pub use overlay::{Color, OverlayDescriptor, OverlayKind, OverlayPatch};
