//! Game-Konfiguration: Thing-Typ-Katalog und Action-Kategorien.

pub mod action;
pub mod thing_type;

pub use action::{LinedefActionCategory, LinedefActionInfo};
pub use thing_type::ThingTypeInfo;

use std::collections::HashMap;

/// Geladene Game-Konfiguration des aktuellen Spiels/IWADs.
///
/// Liefert Anzeigenamen für Thing-Typen und Linedef-Actions; unbekannte
/// Codes sind kein Fehler, die Aufrufer fallen auf generische Titel zurück.
#[derive(Debug, Clone, Default)]
pub struct GameConfiguration {
    thing_types: HashMap<i32, ThingTypeInfo>,
    action_categories: Vec<LinedefActionCategory>,
}

impl GameConfiguration {
    /// Erstellt eine leere Konfiguration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Thing-Typ.
    pub fn add_thing_type(&mut self, info: ThingTypeInfo) {
        self.thing_types.insert(info.type_code, info);
    }

    /// Fügt eine Action-Kategorie hinzu und hält die Liste sortiert.
    pub fn add_action_category(&mut self, category: LinedefActionCategory) {
        self.action_categories.push(category);
        self.action_categories.sort();
    }

    /// Anzeigename eines Thing-Typs, falls im Katalog vorhanden.
    pub fn thing_title(&self, type_code: i32) -> Option<&str> {
        self.thing_types
            .get(&type_code)
            .map(|info| info.title.as_str())
    }

    /// Anzeigename einer Linedef-Action über alle Kategorien.
    pub fn action_title(&self, code: i32) -> Option<&str> {
        self.action_categories
            .iter()
            .find_map(|category| category.find(code))
            .map(|action| action.title.as_str())
    }

    /// Alle Action-Kategorien, alphabetisch sortiert.
    pub fn action_categories(&self) -> &[LinedefActionCategory] {
        &self.action_categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> GameConfiguration {
        let mut config = GameConfiguration::new();
        config.add_thing_type(ThingTypeInfo::new(1, "Player 1 start"));
        config.add_thing_type(ThingTypeInfo::new(3001, "Imp"));

        let mut doors = LinedefActionCategory::new("Door");
        doors.add(LinedefActionInfo::new(1, "Door Raise"));
        let mut exits = LinedefActionCategory::new("Exit");
        exits.add(LinedefActionInfo::new(11, "Exit Level"));
        config.add_action_category(exits);
        config.add_action_category(doors);
        config
    }

    #[test]
    fn thing_title_lookup() {
        let config = sample_config();

        assert_eq!(config.thing_title(3001), Some("Imp"));
        assert!(config.thing_title(4242).is_none());
    }

    #[test]
    fn action_title_searches_all_categories() {
        let config = sample_config();

        assert_eq!(config.action_title(11), Some("Exit Level"));
        assert_eq!(config.action_title(1), Some("Door Raise"));
        assert!(config.action_title(999).is_none());
    }

    #[test]
    fn categories_stay_sorted_after_insert() {
        let config = sample_config();
        let names: Vec<&str> = config.action_categories().iter().map(|c| c.name()).collect();

        assert_eq!(names, vec!["Door", "Exit"]);
    }
}
