//! Sector: geschlossene Bodenfläche mit Effekt und Tag.

use super::fields::UniFields;

/// Ein Map-Sektor.
///
/// Die Geometrie eines Sektors ergibt sich aus den Linedefs, die ihn als
/// Front- oder Back-Sektor referenzieren; der Sektor selbst trägt nur
/// Gameplay-Eigenschaften.
#[derive(Debug, Clone)]
pub struct Sector {
    /// Stabiler Index innerhalb der Map
    pub index: usize,
    /// Effekt-Code (entspricht der Action anderer Element-Arten, 0 = keiner)
    pub effect: i32,
    /// Tag als Cross-Referenz-Schlüssel (0 = keiner)
    pub tag: i32,
    /// Generische UDMF-Felder (u.a. "comment")
    pub fields: UniFields,
    /// Persistentes Selektions-Flag
    pub selected: bool,
}

impl Sector {
    /// Erstellt einen neuen Sektor ohne Effekt/Tag.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            effect: 0,
            tag: 0,
            fields: UniFields::new(),
            selected: false,
        }
    }
}
