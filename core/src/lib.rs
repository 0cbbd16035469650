//! Glint core: entity selection highlighting.
//!
//! This crate provides:
//! - **Surfaces**: the two capability traits through which the host engine
//!   is reached ([`OverlaySurface`] for overlay primitives,
//!   [`EntitySurface`] for scene queries)
//! - **Highlighter**: the component that mirrors one overlay's
//!   visibility/position onto whichever entity is currently selected
//! - **Config**: persisted overlay appearance
//!
//! # Architecture
//!
//! ```text
//! caller selects entity ──▶ Highlighter::highlight(Some(id))
//!                                     │
//!                      EntitySurface::entity_properties(id)
//!                                     │
//!                                     ▼
//!                      OverlaySurface::edit_overlay(handle,
//!                          patch { position, visible: true })
//! ```

pub mod config;
pub mod error;
pub mod highlighter;
pub mod surface;


pub use config::HighlightConfig;
pub use error::SurfaceError;
pub use highlighter::Highlighter;
pub use surface::{EntitySurface, OverlayHandle, OverlaySurface};
