use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_COLOR_NAME, STORAGE_KEY};
use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("stored palette is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// One user-configured wheel color.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Color {
    pub id: String,
    #[serde(rename = "color")]
    pub color_value: String,
    #[serde(rename = "name")]
    pub display_name: String,
}

impl Color {
    pub fn new(id: impl Into<String>, color_value: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            color_value: color_value.into(),
            display_name: display_name.into(),
        }
    }
}

/// Ordered list of colors. Order decides where each color's wedges sit on the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::new("1", "#ef4444", "Red"),
                Color::new("2", "#3b82f6", "Blue"),
                Color::new("3", "#eab308", "Yellow"),
                Color::new("4", "#22c55e", "Green"),
            ],
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn from_json(raw: &str) -> Result<Self, PaletteError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> String {
        // A Vec of plain string records always serializes.
        serde_json::to_string(&self.colors).unwrap_or_else(|_| "[]".to_string())
    }

    /// Reads the palette under [`STORAGE_KEY`]. Missing or unparsable values
    /// fall back to the default four colors.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match store.load(STORAGE_KEY) {
            Some(raw) => match Self::from_json(&raw) {
                Ok(palette) => {
                    debug!("Loaded {} saved colors", palette.len());
                    palette
                }
                Err(e) => {
                    warn!("Failed to parse saved colors, using defaults: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), PaletteError> {
        store.save(STORAGE_KEY, &self.to_json())?;
        Ok(())
    }

    /// Appends a color. A blank name becomes "Custom". The id is taken from
    /// `now_ms` and bumped until it does not clash with an existing id.
    pub fn add(&mut self, color_value: &str, display_name: &str, now_ms: u64) -> &Color {
        let name = match display_name.trim() {
            "" => DEFAULT_COLOR_NAME,
            _ => display_name,
        };

        let mut stamp = now_ms;
        while self.colors.iter().any(|c| c.id == stamp.to_string()) {
            stamp += 1;
        }

        self.colors.push(Color::new(stamp.to_string(), color_value, name));
        &self.colors[self.colors.len() - 1]
    }

    /// Removes the color with `id`. Returns false when nothing matched.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.colors.len();
        self.colors.retain(|c| c.id != id);
        self.colors.len() != before
    }

    /// Display name of the first color whose value is `color_value`.
    pub fn name_for(&self, color_value: &str) -> Option<&str> {
        self.colors
            .iter()
            .find(|c| c.color_value == color_value)
            .map(|c| c.display_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        let names: Vec<_> = palette.colors().iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(names, vec!["Red", "Blue", "Yellow", "Green"]);
    }

    #[test]
    fn test_missing_value_loads_defaults() {
        let store = MemoryStore::new();
        assert_eq!(Palette::load(&store), Palette::default());
    }

    #[test]
    fn test_garbage_value_loads_defaults() {
        let store = MemoryStore::with_entry(STORAGE_KEY, "{not json");
        assert_eq!(Palette::load(&store), Palette::default());

        let store = MemoryStore::with_entry(STORAGE_KEY, r#"{"id":"1"}"#);
        assert_eq!(Palette::load(&store), Palette::default());
    }

    #[test]
    fn test_empty_saved_list_is_kept() {
        let store = MemoryStore::with_entry(STORAGE_KEY, "[]");
        assert!(Palette::load(&store).is_empty());
    }

    #[test]
    fn test_json_field_names() {
        let palette = Palette::new(vec![Color::new("7", "#000000", "Black")]);
        assert_eq!(palette.to_json(), r##"[{"id":"7","color":"#000000","name":"Black"}]"##);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let mut palette = Palette::default();
        palette.add("#a855f7", "Purple", 1_700_000_000_000);
        palette.save(&mut store).unwrap();
        assert_eq!(Palette::load(&store), palette);
    }

    #[test]
    fn test_blank_name_becomes_custom() {
        let mut palette = Palette::new(vec![]);
        assert_eq!(palette.add("#123456", "", 10).display_name, "Custom");
        assert_eq!(palette.add("#123456", "   ", 11).display_name, "Custom");
        assert_eq!(palette.add("#123456", "Teal", 12).display_name, "Teal");
    }

    #[test]
    fn test_add_bumps_clashing_id() {
        let mut palette = Palette::new(vec![]);
        palette.add("#111111", "A", 500);
        palette.add("#222222", "B", 500);
        palette.add("#333333", "C", 500);
        let ids: Vec<_> = palette.colors().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["500", "501", "502"]);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut palette = Palette::default();
        assert!(!palette.remove("nope"));
        assert_eq!(palette, Palette::default());
        assert!(palette.remove("2"));
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn test_name_for_first_match_wins() {
        let palette = Palette::new(vec![
            Color::new("a", "#ff0000", "Red"),
            Color::new("b", "#ff0000", "Crimson"),
        ]);
        assert_eq!(palette.name_for("#ff0000"), Some("Red"));
        assert_eq!(palette.name_for("#00ff00"), None);
    }
}
