//! Linedef: gerichtete Wandkante zwischen zwei Vertices.

use super::fields::UniFields;

/// Eine Linedef auf der Map.
///
/// `front_sector`/`back_sector` referenzieren die angrenzenden Sektoren
/// per Index; einseitige Wände haben nur eine Front-Seite.
#[derive(Debug, Clone)]
pub struct Linedef {
    /// Stabiler Index innerhalb der Map
    pub index: usize,
    /// Start-Vertex (Index)
    pub start: usize,
    /// End-Vertex (Index)
    pub end: usize,
    /// Sektor auf der Front-Seite (rechts der Laufrichtung)
    pub front_sector: Option<usize>,
    /// Sektor auf der Back-Seite
    pub back_sector: Option<usize>,
    /// Action-/Special-Code (0 = keiner)
    pub action: i32,
    /// Tag als Cross-Referenz-Schlüssel (0 = keiner)
    pub tag: i32,
    /// Generische UDMF-Felder (u.a. "comment")
    pub fields: UniFields,
    /// Persistentes Selektions-Flag
    pub selected: bool,
}

impl Linedef {
    /// Erstellt eine neue einseitige Linedef ohne Action/Tag.
    pub fn new(index: usize, start: usize, end: usize) -> Self {
        Self {
            index,
            start,
            end,
            front_sector: None,
            back_sector: None,
            action: 0,
            tag: 0,
            fields: UniFields::new(),
            selected: false,
        }
    }

    /// Erstellt eine Linedef mit Front-Sektor.
    pub fn with_front(index: usize, start: usize, end: usize, front_sector: usize) -> Self {
        Self {
            front_sector: Some(front_sector),
            ..Self::new(index, start, end)
        }
    }
}
