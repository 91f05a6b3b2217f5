//! Thing: platzierbares Objekt (Monster, Item, Spieler-Start) mit Position.

use super::fields::UniFields;
use glam::Vec2;

/// Ein Thing auf der Map.
#[derive(Debug, Clone)]
pub struct Thing {
    /// Stabiler Index innerhalb der Map
    pub index: usize,
    /// Welt-Position
    pub position: Vec2,
    /// Thing-Typ-Code (verweist auf den Katalog der Game-Konfiguration)
    pub type_code: i32,
    /// Action-/Special-Code (0 = keiner)
    pub action: i32,
    /// Tag als Cross-Referenz-Schlüssel (0 = keiner)
    pub tag: i32,
    /// Generische UDMF-Felder (u.a. "comment")
    pub fields: UniFields,
    /// Persistentes Selektions-Flag
    pub selected: bool,
}

impl Thing {
    /// Erstellt ein neues Thing ohne Action/Tag/Felder.
    pub fn new(index: usize, position: Vec2, type_code: i32) -> Self {
        Self {
            index,
            position,
            type_code,
            action: 0,
            tag: 0,
            fields: UniFields::new(),
            selected: false,
        }
    }
}
