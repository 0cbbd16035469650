//! Scene entity identifiers and queryable properties.

use serde::{Deserialize, Serialize};

use crate::geometry::Vec3;

/// Opaque identifier of a persisted scene entity.
///
/// Hosts hand these out as UUID-shaped strings; nothing here inspects the
/// contents, so any non-empty string works.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Properties a host scene reports for an entity. Only `position` drives
/// the highlighter; the rest are carried for callers that query entities
/// through the same surface.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityProperties {
    pub name: String,
    pub position: Vec3,
    pub dimensions: Vec3,
}

impl EntityProperties {
    /// Unnamed unit-sized entity at the given position.
    pub fn at(position: Vec3) -> Self {
        Self {
            name: String::new(),
            position,
            dimensions: Vec3::splat(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_serde_is_transparent() {
        let id = EntityId::from("e1a2b3c4");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""e1a2b3c4""#);
        let back: EntityId = serde_json::from_str(r#""e1a2b3c4""#).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_at_positions_a_unit_entity() {
        let props = EntityProperties::at(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(props.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(props.dimensions, Vec3::splat(1.0));
        assert!(props.name.is_empty());
    }
}
