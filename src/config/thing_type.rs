//! Thing-Typ-Katalog der Game-Konfiguration.

/// Anzeige-Informationen zu einem Thing-Typ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThingTypeInfo {
    /// Typ-Code, wie er auf der Map gespeichert wird
    pub type_code: i32,
    /// Anzeigename (z.B. "Imp", "Player 1 start")
    pub title: String,
}

impl ThingTypeInfo {
    /// Erstellt einen neuen Katalog-Eintrag.
    pub fn new(type_code: i32, title: impl Into<String>) -> Self {
        Self {
            type_code,
            title: title.into(),
        }
    }
}
