use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{Category, MapType, Marker};
use crate::viewport::ViewportConfig;

const BUILTIN_CATALOG: &str = include_str!("../../../assets/catalog.json");

/// Static category and marker data for both datasets, plus viewport tuning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub resource_categories: Vec<Category>,
    pub spawn_categories: Vec<Category>,
    pub resource_markers: Vec<Marker>,
    pub spawn_markers: Vec<Marker>,
    #[serde(default)]
    pub viewport: ViewportConfig,
}

impl Catalog {
    /// The catalog shipped with the app.
    pub fn builtin() -> Result<Self, String> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let catalog: Catalog =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse catalog: {}", e))?;
        catalog.validate()?;

        tracing::info!(
            resource_categories = catalog.resource_categories.len(),
            spawn_categories = catalog.spawn_categories.len(),
            resource_markers = catalog.resource_markers.len(),
            spawn_markers = catalog.spawn_markers.len(),
            "Loaded map catalog"
        );

        Ok(catalog)
    }

    pub fn categories(&self, map_type: MapType) -> &[Category] {
        match map_type {
            MapType::Resource => &self.resource_categories,
            MapType::Spawn => &self.spawn_categories,
        }
    }

    pub fn markers(&self, map_type: MapType) -> &[Marker] {
        match map_type {
            MapType::Resource => &self.resource_markers,
            MapType::Spawn => &self.spawn_markers,
        }
    }

    /// Markers whose category key is not in their own dataset's list.
    pub fn orphan_markers(&self, map_type: MapType) -> Vec<&Marker> {
        let categories = self.categories(map_type);
        self.markers(map_type)
            .iter()
            .filter(|m| !categories.iter().any(|c| c.key == m.category_key))
            .collect()
    }

    /// Hard errors for data that would break rendering or identity; orphaned
    /// markers are only logged since they render with a fallback style.
    fn validate(&self) -> Result<(), String> {
        self.viewport
            .validate()
            .map_err(|e| format!("Invalid viewport config: {}", e))?;

        for map_type in MapType::ALL {
            let mut keys = HashSet::new();
            for c in self.categories(map_type) {
                if !keys.insert(c.key.as_str()) {
                    return Err(format!(
                        "Duplicate category key '{}' in {} categories",
                        c.key,
                        map_type.noun()
                    ));
                }
            }

            let mut ids = HashSet::new();
            for m in self.markers(map_type) {
                if !ids.insert(m.id.as_str()) {
                    return Err(format!(
                        "Duplicate marker id '{}' in {} markers",
                        m.id,
                        map_type.noun()
                    ));
                }
                if !m.position.in_bounds() {
                    return Err(format!(
                        "Marker '{}' position ({}, {}) is outside 0-100",
                        m.id, m.position.x, m.position.y
                    ));
                }
            }

            for m in self.orphan_markers(map_type) {
                tracing::warn!(
                    marker = %m.id,
                    category = %m.category_key,
                    dataset = map_type.noun(),
                    "Marker references unknown category"
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::PanScaling;

    fn minimal(markers: &str) -> String {
        format!(
            r##"{{
                "resourceCategories": [{{"key":"metal","displayName":"Metal","color":"#94a3b8","glyph":"M"}}],
                "spawnCategories": [],
                "resourceMarkers": {markers},
                "spawnMarkers": []
            }}"##
        )
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let cat = Catalog::builtin().unwrap();
        assert_eq!(cat.categories(MapType::Resource).len(), 6);
        assert_eq!(cat.categories(MapType::Spawn).len(), 6);
        assert_eq!(cat.markers(MapType::Resource).len(), 8);
        assert_eq!(cat.markers(MapType::Spawn).len(), 7);
        assert_eq!(cat.viewport, ViewportConfig::default());
    }

    #[test]
    fn test_builtin_markers_reference_own_dataset() {
        let cat = Catalog::builtin().unwrap();
        for map_type in MapType::ALL {
            assert!(cat.orphan_markers(map_type).is_empty());
        }
    }

    #[test]
    fn test_missing_viewport_section_uses_defaults() {
        let cat = Catalog::from_json(&minimal("[]")).unwrap();
        assert_eq!(cat.viewport, ViewportConfig::default());
    }

    #[test]
    fn test_viewport_override() {
        let json = r#"{
            "resourceCategories": [], "spawnCategories": [],
            "resourceMarkers": [], "spawnMarkers": [],
            "viewport": {"maxZoom": 4.0, "panScaling": "content"}
        }"#;
        let cat = Catalog::from_json(json).unwrap();
        assert!((cat.viewport.max_zoom - 4.0).abs() < 1e-9);
        assert_eq!(cat.viewport.pan_scaling, PanScaling::Content);
    }

    #[test]
    fn test_invalid_viewport_rejected() {
        let json = r#"{
            "resourceCategories": [], "spawnCategories": [],
            "resourceMarkers": [], "spawnMarkers": [],
            "viewport": {"minZoom": 2.0, "maxZoom": 1.5}
        }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.starts_with("Invalid viewport config"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(err.starts_with("Failed to parse catalog"));
    }

    #[test]
    fn test_duplicate_marker_id_rejected() {
        let markers = r#"[
            {"id":"1","categoryKey":"metal","position":{"x":1,"y":1},"label":"A"},
            {"id":"1","categoryKey":"metal","position":{"x":2,"y":2},"label":"B"}
        ]"#;
        let err = Catalog::from_json(&minimal(markers)).unwrap_err();
        assert!(err.contains("Duplicate marker id '1'"));
    }

    #[test]
    fn test_duplicate_category_key_rejected() {
        let json = r##"{
            "resourceCategories": [],
            "spawnCategories": [
                {"key":"rex","displayName":"T-Rex","color":"#ef4444","glyph":"R"},
                {"key":"rex","displayName":"Rex Again","color":"#ef4444","glyph":"R"}
            ],
            "resourceMarkers": [], "spawnMarkers": []
        }"##;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.contains("Duplicate category key 'rex' in spawns"));
    }

    #[test]
    fn test_out_of_bounds_position_rejected() {
        let markers = r#"[{"id":"x","categoryKey":"metal","position":{"x":101,"y":50},"label":"Off map"}]"#;
        let err = Catalog::from_json(&minimal(markers)).unwrap_err();
        assert!(err.contains("outside 0-100"));
    }

    #[test]
    fn test_orphan_marker_is_accepted() {
        let markers = r#"[{"id":"o","categoryKey":"rex","position":{"x":10,"y":10},"label":"Lost"}]"#;
        let cat = Catalog::from_json(&minimal(markers)).unwrap();
        let orphans = cat.orphan_markers(MapType::Resource);
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].id, "o");
    }
}
