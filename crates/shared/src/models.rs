use serde::{Deserialize, Serialize};

/// Game edition whose theme is active. Only affects styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Ascended,
    Evolved,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::Ascended, GameMode::Evolved];

    pub fn label(self) -> &'static str {
        match self {
            GameMode::Ascended => "ARK Ascended",
            GameMode::Evolved => "ARK Evolved",
        }
    }

    /// CSS class applied to the application root.
    pub fn theme_class(self) -> &'static str {
        match self {
            GameMode::Ascended => "theme-ascended",
            GameMode::Evolved => "theme-evolved",
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which marker dataset is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    #[default]
    Resource,
    Spawn,
}

impl MapType {
    pub const ALL: [MapType; 2] = [MapType::Resource, MapType::Spawn];

    pub fn label(self) -> &'static str {
        match self {
            MapType::Resource => "Resources",
            MapType::Spawn => "Spawns",
        }
    }

    /// Heading of the category section in the filter panel.
    pub fn section_title(self) -> &'static str {
        match self {
            MapType::Resource => "Resource Types",
            MapType::Spawn => "Creature Spawns",
        }
    }

    /// Plural noun used by the empty-map hint ("Select filters to see ...").
    pub fn noun(self) -> &'static str {
        match self {
            MapType::Resource => "resources",
            MapType::Spawn => "spawns",
        }
    }
}

impl std::fmt::Display for MapType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub key: String,
    pub display_name: String,
    pub color: String,
    pub glyph: String,
}

/// Point in percent of the untransformed content area, both axes in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn in_bounds(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: String,
    pub category_key: String,
    pub position: Position,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_bounds_inclusive() {
        assert!(Position { x: 0.0, y: 100.0 }.in_bounds());
        assert!(!Position { x: -0.1, y: 50.0 }.in_bounds());
        assert!(!Position { x: 50.0, y: 100.5 }.in_bounds());
    }

    #[test]
    fn test_marker_deserializes_camel_case() {
        let json = r#"{"id":"1","categoryKey":"metal","position":{"x":25,"y":30},"label":"Rich Metal Vein"}"#;
        let marker: Marker = serde_json::from_str(json).unwrap();
        assert_eq!(marker.category_key, "metal");
        assert!((marker.position.x - 25.0).abs() < 1e-9);
        assert_eq!(marker.label, "Rich Metal Vein");
    }

    #[test]
    fn test_enum_defaults() {
        assert_eq!(GameMode::default(), GameMode::Ascended);
        assert_eq!(MapType::default(), MapType::Resource);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(MapType::Spawn.section_title(), "Creature Spawns");
        assert_eq!(MapType::Resource.noun(), "resources");
        assert_eq!(GameMode::Evolved.to_string(), "ARK Evolved");
    }
}
