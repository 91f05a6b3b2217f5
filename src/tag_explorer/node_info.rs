//! Anzeige-Knoten für den Tag-Explorer.
//!
//! Ein [`NodeInfo`] ist ein reiner Schnappschuss aus Kind und Index
//! plus den beim Bau gelesenen Tag-/Action-Werten. Alle lebenden Daten
//! (Kommentar, Name, Position) werden bei jedem Zugriff neu über die
//! MapSet aufgelöst und tolerieren gelöschte Elemente.

use anyhow::bail;
use glam::Vec2;

use crate::app::UndoLog;
use crate::config::GameConfiguration;
use crate::core::{ElementKind, ElementRef, Linedef, MapSet, Sector, Thing, UniValue, FIELD_COMMENT};

/// Sortier- und Format-Modus der Tag-Explorer-Anzeige.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Nach Action-Code, Anzeige mit "Action:"-Präfix
    ByAction,
    /// Nach Element-Index, Anzeige mit "{index}: "-Präfix
    ByIndex,
    /// Nach Tag, Anzeige mit "Tag:"-Präfix
    #[default]
    ByTag,
    /// Keine Sortierung, Anzeige nur mit Namen
    Unsorted,
}

/// Schnappschuss eines Map-Elements für die Tag-Liste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    kind: ElementKind,
    index: usize,
    action: i32,
    tag: i32,
    thing_type: Option<i32>,
    default_name: String,
}

impl NodeInfo {
    /// Knoten für ein Thing; der Standard-Name kommt aus dem
    /// Thing-Typ-Katalog, unbekannte Typen heißen "Thing".
    pub fn from_thing(thing: &Thing, config: &GameConfiguration) -> Self {
        let default_name = config
            .thing_title(thing.type_code)
            .unwrap_or("Thing")
            .to_string();
        Self {
            kind: ElementKind::Thing,
            index: thing.index,
            action: thing.action,
            tag: thing.tag,
            thing_type: Some(thing.type_code),
            default_name,
        }
    }

    /// Knoten für einen Sektor.
    pub fn from_sector(sector: &Sector) -> Self {
        Self {
            kind: ElementKind::Sector,
            index: sector.index,
            action: sector.effect,
            tag: sector.tag,
            thing_type: None,
            default_name: "Sector".to_string(),
        }
    }

    /// Knoten für eine Linedef.
    pub fn from_linedef(linedef: &Linedef) -> Self {
        Self {
            kind: ElementKind::Linedef,
            index: linedef.index,
            action: linedef.action,
            tag: linedef.tag,
            thing_type: None,
            default_name: "Linedef".to_string(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn action(&self) -> i32 {
        self.action
    }

    pub fn tag(&self) -> i32 {
        self.tag
    }

    /// Referenz auf das Quell-Element.
    pub fn element(&self) -> ElementRef {
        ElementRef {
            kind: self.kind,
            index: self.index,
        }
    }

    /// Thing-Typ-Code. Auf Knoten anderer Art ein Programmierfehler.
    pub fn thing_type(&self) -> anyhow::Result<i32> {
        match self.thing_type {
            Some(code) => Ok(code),
            None => bail!(
                "thing_type auf einem {}-Knoten (Index {}) abgefragt",
                self.kind,
                self.index
            ),
        }
    }

    /// Kommentar des lebenden Elements, leer wenn das Format keine
    /// Custom-Fields trägt, das Feld fehlt oder das Element weg ist.
    pub fn comment(&self, map: &MapSet) -> String {
        if !map.custom_fields_enabled() {
            return String::new();
        }
        map.fields(self.element())
            .and_then(|fields| fields.get(FIELD_COMMENT))
            .map(|value| value.to_string())
            .unwrap_or_default()
    }

    /// Anzeigename und Kommentar, formatiert nach Sortier-Modus.
    ///
    /// Gelöschte Elemente liefern den Platzhalter `<invalid {kind}>`.
    /// Der Index-Suffix erscheint nur, solange kein Kommentar-Feld den
    /// Standard-Namen überschreibt; ein vorhandenes, aber leeres Feld
    /// unterdrückt den Suffix bereits.
    pub fn name(&self, map: &MapSet, sort: SortMode) -> (String, String) {
        let element = self.element();
        if !map.element_exists(element) {
            return (format!("<invalid {}>", self.kind), String::new());
        }

        let mut comment = String::new();
        let mut name = self.default_name.clone();
        let mut is_default_name = true;
        if map.custom_fields_enabled() {
            if let Some(value) = map.fields(element).and_then(|f| f.get(FIELD_COMMENT)) {
                comment = value.to_string();
                is_default_name = false;
                if !comment.is_empty() {
                    name = comment.clone();
                }
            }
        }

        let display = match sort {
            SortMode::ByAction => {
                let mut display = String::new();
                if self.action > 0 {
                    display.push_str(&format!("Action:{}; ", self.action));
                }
                if self.tag > 0 {
                    display.push_str(&format!("Tag:{}; ", self.tag));
                }
                display.push_str(&name);
                if is_default_name {
                    display.push_str(&format!(" {}", self.index));
                }
                display
            }
            SortMode::ByIndex => {
                let mut display = format!("{}: ", self.index);
                if self.tag > 0 {
                    display.push_str(&format!("Tag:{}; ", self.tag));
                }
                if self.action > 0 {
                    display.push_str(&format!("Action:{}; ", self.action));
                }
                display.push_str(&name);
                display
            }
            SortMode::ByTag => {
                let mut display = String::new();
                if self.tag > 0 {
                    display.push_str(&format!("Tag:{}; ", self.tag));
                }
                if self.action > 0 {
                    display.push_str(&format!("Action:{}; ", self.action));
                }
                display.push_str(&name);
                if is_default_name {
                    display.push_str(&format!(" {}", self.index));
                }
                display
            }
            SortMode::Unsorted => name,
        };

        (display, comment)
    }

    /// Setzt oder entfernt den Kommentar des lebenden Elements.
    ///
    /// Leerer Text entfernt ein vorhandenes Feld ("Remove comment");
    /// ohne vorhandenes Feld passiert nichts, auch keine Transaktion.
    /// Nicht-leerer Text legt das Feld an oder überschreibt es
    /// ("Set comment"). Vor der Mutation wird `before_fields_change`
    /// gerufen, damit der Undo-Schnappschuss den alten Stand sieht.
    pub fn set_comment(&self, map: &mut MapSet, undo: &mut UndoLog, text: &str) {
        let element = self.element();
        if !map.element_exists(element) || !map.custom_fields_enabled() {
            return;
        }

        if text.is_empty() {
            let has_comment = map
                .fields(element)
                .is_some_and(|f| f.contains_key(FIELD_COMMENT));
            if !has_comment {
                return;
            }

            undo.create_undo("Remove comment");
            undo.before_fields_change(element);
            if let Some(fields) = map.fields_mut(element) {
                fields.shift_remove(FIELD_COMMENT);
            }
        } else {
            undo.create_undo("Set comment");
            undo.before_fields_change(element);
            if let Some(fields) = map.fields_mut(element) {
                fields.insert(FIELD_COMMENT.to_string(), UniValue::Text(text.to_string()));
            }
        }
    }

    /// Repräsentativer Punkt des lebenden Elements: Thing-Position,
    /// Sektor-Bounding-Box-Mitte, Linedef-Rechteck-Mitte. Unauflösbare
    /// Knoten liefern den Null-Vektor.
    pub fn position(&self, map: &MapSet) -> Vec2 {
        match self.kind {
            ElementKind::Thing => map
                .thing(self.index)
                .map(|t| t.position)
                .unwrap_or(Vec2::ZERO),
            ElementKind::Sector => map
                .sector_bounds(self.index)
                .map(|b| b.center())
                .unwrap_or(Vec2::ZERO),
            ElementKind::Linedef => map.linedef_center(self.index).unwrap_or(Vec2::ZERO),
            ElementKind::Vertex => Vec2::ZERO,
        }
    }
}
