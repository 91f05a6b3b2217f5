//! Geteilter Editor-Zustand, den alle Modi benutzen.

use glam::Vec2;

use crate::app::undo::UndoLog;
use crate::config::GameConfiguration;
use crate::core::{Camera2D, ElementKind, MapSet};
use crate::render::RenderSurface;
use crate::shared::EditorOptions;
use crate::ui::UiShell;

/// Kamera plus Viewport-Größe in Pixeln.
#[derive(Debug, Clone, Copy)]
pub struct ViewState {
    pub camera: Camera2D,
    pub viewport_size: Vec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            camera: Camera2D::default(),
            viewport_size: Vec2::new(1280.0, 720.0),
        }
    }
}

/// Kontext für den aktiven Editier-Modus: Map, Spiel-Konfiguration,
/// Render-Ziel, UI-Anbindung, Undo-Protokoll und Ansicht.
pub struct EditContext {
    pub map: MapSet,
    pub config: GameConfiguration,
    pub renderer: Box<dyn RenderSurface>,
    pub ui: Box<dyn UiShell>,
    pub undo: UndoLog,
    pub view: ViewState,
    pub options: EditorOptions,
    redraw_requested: bool,
}

impl EditContext {
    pub fn new(
        map: MapSet,
        config: GameConfiguration,
        renderer: Box<dyn RenderSurface>,
        ui: Box<dyn UiShell>,
        options: EditorOptions,
    ) -> Self {
        let undo = UndoLog::new(options.undo_max_transactions);
        Self {
            map,
            config,
            renderer,
            ui,
            undo,
            view: ViewState::default(),
            options,
            redraw_requested: false,
        }
    }

    /// Markiert, dass nach dem aktuellen Event komplett neu gezeichnet
    /// werden soll. Der [`MapEditor`](crate::app::MapEditor) bedient
    /// die Anforderung direkt nach dem Event-Dispatch.
    pub fn request_full_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Liest und löscht die Redraw-Anforderung.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Highlight-Radius für eine Element-Art in Map-Einheiten,
    /// abhängig vom aktuellen Zoom.
    pub fn highlight_range_world(&self, kind: ElementKind) -> f32 {
        let px = match kind {
            ElementKind::Vertex => self.options.vertex_highlight_range_px,
            ElementKind::Linedef => self.options.linedef_highlight_range_px,
            ElementKind::Sector => self.options.sector_highlight_range_px,
            ElementKind::Thing => self.options.thing_highlight_range_px,
        };
        self.view
            .camera
            .pick_radius_world(self.view.viewport_size.y, px)
    }
}
