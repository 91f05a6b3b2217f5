//! Editier-Modi: pro Element-Art ein Modus mit Highlight- und
//! Selektions-Verhalten. Der aktive Modus empfängt alle Maus-Events
//! vom [`MapEditor`](crate::app::MapEditor).

mod classic;
mod linedefs;
mod sectors;
mod things;
mod vertices;


pub use linedefs::LinedefsMode;
pub use sectors::SectorsMode;
pub use things::ThingsMode;
pub use vertices::VerticesMode;

use glam::Vec2;

use crate::app::EditContext;
use crate::core::{ElementKind, ElementRef};

/// Die vier Editier-Modi des Kerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Vertices,
    Linedefs,
    Sectors,
    Things,
}

impl ModeKind {
    /// Element-Art, die dieser Modus bearbeitet.
    pub fn element_kind(self) -> ElementKind {
        match self {
            ModeKind::Vertices => ElementKind::Vertex,
            ModeKind::Linedefs => ElementKind::Linedef,
            ModeKind::Sectors => ElementKind::Sector,
            ModeKind::Things => ElementKind::Thing,
        }
    }

    /// Anzeigename des Modus.
    pub fn label(self) -> &'static str {
        match self {
            ModeKind::Vertices => "Vertices Mode",
            ModeKind::Linedefs => "Linedefs Mode",
            ModeKind::Sectors => "Sectors Mode",
            ModeKind::Things => "Things Mode",
        }
    }
}

impl std::fmt::Display for ModeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Maus-Tasten, die der Editor-Kern unterscheidet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Selektion umschalten (klassisch: linke Taste).
    Select,
    /// Eigenschaften bearbeiten (klassisch: rechte Taste).
    Edit,
}

/// Verhalten eines Editier-Modus.
///
/// Der [`MapEditor`](crate::app::MapEditor) ruft `engage` beim Aktivieren,
/// `disengage` beim Wechsel in einen anderen Modus und leitet alle
/// Maus-Events an den aktiven Modus weiter.
pub trait EditMode {
    /// Art dieses Modus.
    fn kind(&self) -> ModeKind;

    /// Modus wird aktiv.
    fn engage(&mut self, ctx: &mut EditContext);

    /// Modus wird verlassen, `next` ist der Folgemodus.
    fn disengage(&mut self, ctx: &mut EditContext, next: ModeKind);

    /// Verwirft den transienten Zustand (Highlight), als wäre der
    /// Modus frisch betreten worden. Der Modus selbst bleibt aktiv.
    fn cancel(&mut self, ctx: &mut EditContext);

    /// Komplettes Neuzeichnen der Anzeige.
    fn redraw_display(&mut self, ctx: &mut EditContext);

    /// Mauszeiger bewegt, `map_pos` in Map-Koordinaten.
    fn mouse_move(&mut self, ctx: &mut EditContext, map_pos: Vec2);

    /// Maus-Taste gedrückt.
    fn mouse_down(&mut self, ctx: &mut EditContext, button: MouseButton);

    /// Maus-Taste losgelassen.
    fn mouse_up(&mut self, ctx: &mut EditContext, button: MouseButton);

    /// Mauszeiger hat die Anzeige verlassen.
    fn mouse_leave(&mut self, ctx: &mut EditContext);

    /// Aktuell hervorgehobenes Element, falls vorhanden.
    fn highlight(&self) -> Option<ElementRef>;
}

/// Erzeugt eine frische Instanz des gewünschten Modus.
pub fn create_mode(kind: ModeKind) -> Box<dyn EditMode> {
    match kind {
        ModeKind::Vertices => Box::new(VerticesMode::new()),
        ModeKind::Linedefs => Box::new(LinedefsMode::new()),
        ModeKind::Sectors => Box::new(SectorsMode::new()),
        ModeKind::Things => Box::new(ThingsMode::new()),
    }
}
