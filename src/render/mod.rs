//! Render-Schnittstelle: Batch-Sessions und Element-Draw-Calls.
//!
//! Der Editor-Kern implementiert kein Rendering selbst; er reicht
//! Draw-Calls an eine `RenderSurface` weiter. Der echte GPU-Backend lebt
//! außerhalb dieses Crates, für Tests und Headless-Betrieb gibt es die
//! [`recording::RecordingSurface`].

pub mod recording;

pub use recording::{RecordedBatch, RecordingSurface, SharedRecordingSurface};

use crate::core::ElementRef;

/// Darstellungsfarbe eines Elements, abgeleitet aus seinem Zustand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementColor {
    /// Normale, unselektierte Darstellung
    Normal,
    /// Persistent selektiert
    Selected,
    /// Transientes Highlight unter dem Zeiger
    Highlight,
}

/// Batch-orientierte Zeichenfläche.
///
/// Jede sichtbare Änderung läuft als `start`/`finish`-Paar; schlägt
/// `start` fehl (Session nicht verfügbar), wird das komplette Update
/// für diesen Frame übersprungen, ohne Teil-Zeichnungen und ohne
/// Fehler. Das nächste Input-Event stößt den nächsten Versuch an.
pub trait RenderSurface {
    /// Beginnt eine Render-Session.
    ///
    /// `clear` löscht die Fläche, `full` kennzeichnet einen kompletten
    /// Neuaufbau. Gibt `false` zurück, wenn keine Session verfügbar ist.
    fn start(&mut self, clear: bool, full: bool) -> bool;

    /// Zeichnet ein Element in der angegebenen Farbe.
    fn draw_element(&mut self, element: ElementRef, color: ElementColor);

    /// Schließt die aktuelle Render-Session ab.
    fn finish(&mut self);
}
