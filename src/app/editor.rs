//! Editor-Fassade: hält Kontext und aktiven Modus und verteilt die
//! Eingabe-Events.

use glam::Vec2;

use crate::app::modes::{create_mode, EditMode, ModeKind, MouseButton};
use crate::app::EditContext;
use crate::core::ElementRef;

pub struct MapEditor {
    ctx: EditContext,
    mode: Box<dyn EditMode>,
}

impl MapEditor {
    /// Startet den Editor im gewünschten Modus und zeichnet einmal
    /// komplett.
    pub fn new(ctx: EditContext, initial: ModeKind) -> Self {
        let mut editor = Self {
            ctx,
            mode: create_mode(initial),
        };
        editor.mode.engage(&mut editor.ctx);
        editor.mode.redraw_display(&mut editor.ctx);
        editor.ctx.take_redraw_request();
        editor
    }

    pub fn ctx(&self) -> &EditContext {
        &self.ctx
    }

    pub fn ctx_mut(&mut self) -> &mut EditContext {
        &mut self.ctx
    }

    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    /// Aktuelles Highlight des aktiven Modus.
    pub fn highlight(&self) -> Option<ElementRef> {
        self.mode.highlight()
    }

    /// Wechselt in einen anderen Modus. Der alte Modus wird mit dem
    /// Ziel-Modus als `next` verabschiedet, der neue aktiviert und die
    /// Anzeige komplett neu gezeichnet.
    pub fn change_mode(&mut self, kind: ModeKind) {
        if kind == self.mode.kind() {
            return;
        }
        log::info!("Moduswechsel: {} -> {}", self.mode.kind(), kind);

        self.mode.disengage(&mut self.ctx, kind);
        self.mode = create_mode(kind);
        self.mode.engage(&mut self.ctx);
        self.mode.redraw_display(&mut self.ctx);
        self.ctx.take_redraw_request();
    }

    /// Bricht den aktuellen Modus ab: transienter Zustand (Highlight)
    /// wird verworfen, der Modus bleibt aktiv, die Anzeige wird
    /// komplett neu gezeichnet.
    pub fn cancel_mode(&mut self) {
        log::info!("Modus abgebrochen: {}", self.mode.kind());

        self.mode.cancel(&mut self.ctx);
        self.mode.redraw_display(&mut self.ctx);
        self.ctx.take_redraw_request();
    }

    pub fn mouse_move(&mut self, map_pos: Vec2) {
        self.mode.mouse_move(&mut self.ctx, map_pos);
        self.after_dispatch();
    }

    pub fn mouse_down(&mut self, button: MouseButton) {
        self.mode.mouse_down(&mut self.ctx, button);
        self.after_dispatch();
    }

    pub fn mouse_up(&mut self, button: MouseButton) {
        self.mode.mouse_up(&mut self.ctx, button);
        self.after_dispatch();
    }

    pub fn mouse_leave(&mut self) {
        self.mode.mouse_leave(&mut self.ctx);
        self.after_dispatch();
    }

    /// Bedient eine während des Events angeforderte
    /// Komplett-Neuzeichnung.
    fn after_dispatch(&mut self) {
        if self.ctx.take_redraw_request() {
            self.mode.redraw_display(&mut self.ctx);
            self.ctx.take_redraw_request();
        }
    }
}
