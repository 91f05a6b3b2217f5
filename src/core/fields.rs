//! Generische Key/Value-Felder für Map-Elemente (UDMF-Custom-Fields).

use indexmap::IndexMap;
use std::fmt;

/// Feld-Schlüssel für User-Kommentare.
pub const FIELD_COMMENT: &str = "comment";

/// Getypter Feldwert (Tagged Union, entspricht den UDMF-Werttypen).
#[derive(Debug, Clone, PartialEq)]
pub enum UniValue {
    /// Ganzzahl-Wert
    Integer(i32),
    /// Gleitkomma-Wert
    Float(f32),
    /// Wahrheitswert
    Boolean(bool),
    /// Freitext
    Text(String),
}

impl fmt::Display for UniValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniValue::Integer(v) => write!(f, "{v}"),
            UniValue::Float(v) => write!(f, "{v}"),
            UniValue::Boolean(v) => write!(f, "{v}"),
            UniValue::Text(v) => write!(f, "{v}"),
        }
    }
}

/// Geordnete Feld-Map eines Map-Elements.
///
/// IndexMap hält die Einschreib-Reihenfolge stabil, damit Feld-Listen
/// in Dialogen und beim Export deterministisch bleiben.
pub type UniFields = IndexMap<String, UniValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_keep_insertion_order() {
        let mut fields = UniFields::new();
        fields.insert("comment".to_string(), UniValue::Text("Tor A".to_string()));
        fields.insert("lightlevel".to_string(), UniValue::Integer(160));
        fields.insert("gravity".to_string(), UniValue::Float(0.5));

        let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["comment", "lightlevel", "gravity"]);
    }

    #[test]
    fn value_display_is_plain() {
        assert_eq!(UniValue::Integer(7).to_string(), "7");
        assert_eq!(UniValue::Boolean(true).to_string(), "true");
        assert_eq!(UniValue::Text("Exit".to_string()).to_string(), "Exit");
    }
}
