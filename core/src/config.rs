//! Persisted highlighter configuration.
//!
//! Stored as TOML in the platform config directory via `confy`. Defaults
//! reproduce the built-in selection appearance, so a missing file behaves
//! the same as no configuration at all.

use glint_types::OverlayDescriptor;
use serde::{Deserialize, Serialize};

/// App name under which confy resolves the config file path.
const APP_NAME: &str = "glint";

/// Persisted appearance for the selection overlay.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub descriptor: OverlayDescriptor,
}

/// Load the persisted config, creating a default file on first run.
pub fn load() -> Result<HighlightConfig, confy::ConfyError> {
    confy::load(APP_NAME, None)
}

/// Persist the config.
pub fn store(config: &HighlightConfig) -> Result<(), confy::ConfyError> {
    confy::store(APP_NAME, None, config)
}
