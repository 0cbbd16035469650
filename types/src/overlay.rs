//! Overlay appearance types.
//!
//! An [`OverlayDescriptor`] is the full canonical appearance record passed
//! to the host when an overlay is created. Subsequent edits never resend
//! the whole record; they send an [`OverlayPatch`] carrying only the
//! fields that change, which the host merges onto its copy.

use serde::{Deserialize, Serialize};

use crate::geometry::Vec3;

/// RGB color as the host expects it: one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Overlay primitives the host can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
    Cube,
    Sphere,
}

impl std::fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlayKind::Cube => write!(f, "cube"),
            OverlayKind::Sphere => write!(f, "sphere"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Descriptor
// ─────────────────────────────────────────────────────────────────────────────

/// Full appearance record for a host overlay.
///
/// The default is the selection-highlight appearance: a yellow wireframe
/// unit cube at the origin, initially invisible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayDescriptor {
    pub position: Vec3,
    pub color: Color,
    pub alpha: f32,
    pub size: f32,
    pub solid: bool,
    pub visible: bool,
    pub line_width: f32,
    pub border_size: f32,
}

impl Default for OverlayDescriptor {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            color: Color::new(255, 255, 0),
            alpha: 1.0,
            size: 1.0,
            solid: false,
            visible: false,
            line_width: 1.0,
            border_size: 1.4,
        }
    }
}

impl OverlayDescriptor {
    /// Merge a patch onto this descriptor. Absent patch fields leave the
    /// corresponding descriptor fields untouched.
    pub fn apply(&mut self, patch: &OverlayPatch) {
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(alpha) = patch.alpha {
            self.alpha = alpha;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(solid) = patch.solid {
            self.solid = solid;
        }
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }
        if let Some(line_width) = patch.line_width {
            self.line_width = line_width;
        }
        if let Some(border_size) = patch.border_size {
            self.border_size = border_size;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Patch
// ─────────────────────────────────────────────────────────────────────────────

/// Partial overlay update: every descriptor field, independently
/// present-or-absent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_size: Option<f32>,
}

impl OverlayPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field is present, i.e. applying the patch is a no-op.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn position(mut self, position: Vec3) -> Self {
        self.position = Some(position);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn solid(mut self, solid: bool) -> Self {
        self.solid = Some(solid);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn line_width(mut self, line_width: f32) -> Self {
        self.line_width = Some(line_width);
        self
    }

    pub fn border_size(mut self, border_size: f32) -> Self {
        self.border_size = Some(border_size);
        self
    }
}
