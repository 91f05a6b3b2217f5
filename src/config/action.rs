//! Linedef-Actions und ihre Kategorien aus der Game-Konfiguration.

use std::cmp::Ordering;

/// Anzeige-Informationen zu einer Linedef-Action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinedefActionInfo {
    /// Action-/Special-Code
    pub code: i32,
    /// Anzeigename (z.B. "Door Open")
    pub title: String,
}

impl LinedefActionInfo {
    /// Erstellt einen neuen Action-Eintrag.
    pub fn new(code: i32, title: impl Into<String>) -> Self {
        Self {
            code,
            title: title.into(),
        }
    }
}

/// Benannte Kategorie von Linedef-Actions (z.B. "Door", "Lift").
///
/// Kategorien sortieren sich alphabetisch nach ihrem Namen, damit
/// Dropdowns und Listen stabil bleiben.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinedefActionCategory {
    name: String,
    actions: Vec<LinedefActionInfo>,
}

impl LinedefActionCategory {
    /// Erstellt eine leere Kategorie.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actions: Vec::new(),
        }
    }

    /// Name der Kategorie.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alle Actions der Kategorie.
    pub fn actions(&self) -> &[LinedefActionInfo] {
        &self.actions
    }

    /// Fügt eine Action zur Kategorie hinzu.
    pub fn add(&mut self, action: LinedefActionInfo) {
        self.actions.push(action);
    }

    /// Sucht eine Action per Code.
    pub fn find(&self, code: i32) -> Option<&LinedefActionInfo> {
        self.actions.iter().find(|a| a.code == code)
    }
}

impl PartialOrd for LinedefActionCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LinedefActionCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_sort_by_name() {
        let mut categories = vec![
            LinedefActionCategory::new("Lift"),
            LinedefActionCategory::new("Door"),
            LinedefActionCategory::new("Exit"),
        ];
        categories.sort();

        let names: Vec<&str> = categories.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Door", "Exit", "Lift"]);
    }

    #[test]
    fn find_action_by_code() {
        let mut category = LinedefActionCategory::new("Door");
        category.add(LinedefActionInfo::new(1, "Door Raise"));
        category.add(LinedefActionInfo::new(31, "Door Open Stay"));

        assert_eq!(category.find(31).map(|a| a.title.as_str()), Some("Door Open Stay"));
        assert!(category.find(99).is_none());
    }
}
