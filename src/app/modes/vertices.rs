//! Vertices-Modus: Highlight und Selektion einzelner Vertices.
//! Beim Wechsel in den Linedefs- oder Sectors-Modus wird die
//! Vertex-Selektion aufgehoben.

use glam::Vec2;

use crate::app::modes::classic::ClassicBase;
use crate::app::modes::{EditMode, ModeKind, MouseButton};
use crate::app::EditContext;
use crate::core::{ElementKind, ElementRef};

pub struct VerticesMode {
    base: ClassicBase,
}

impl VerticesMode {
    pub fn new() -> Self {
        Self {
            base: ClassicBase::new(ElementKind::Vertex),
        }
    }
}

impl Default for VerticesMode {
    fn default() -> Self {
        Self::new()
    }
}

impl EditMode for VerticesMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Vertices
    }

    fn engage(&mut self, ctx: &mut EditContext) {
        ctx.ui.set_mode_checked(ModeKind::Vertices, true);
    }

    fn disengage(&mut self, ctx: &mut EditContext, next: ModeKind) {
        if matches!(next, ModeKind::Linedefs | ModeKind::Sectors) {
            ctx.map.clear_selection(ElementKind::Vertex);
        }
        ctx.ui.set_mode_checked(ModeKind::Vertices, false);
        ctx.ui.hide_info();
    }

    fn cancel(&mut self, ctx: &mut EditContext) {
        self.base.reset(ctx);
    }

    fn redraw_display(&mut self, ctx: &mut EditContext) {
        self.base.redraw_all(ctx);
    }

    fn mouse_move(&mut self, ctx: &mut EditContext, map_pos: Vec2) {
        self.base.mouse_move(ctx, map_pos);
    }

    fn mouse_down(&mut self, ctx: &mut EditContext, button: MouseButton) {
        match button {
            MouseButton::Select => self.base.select_pressed(ctx),
            MouseButton::Edit => self.base.edit_pressed(ctx),
        }
    }

    fn mouse_up(&mut self, ctx: &mut EditContext, button: MouseButton) {
        if button == MouseButton::Edit {
            self.base.edit_released(ctx);
        }
    }

    fn mouse_leave(&mut self, ctx: &mut EditContext) {
        self.base.mouse_leave(ctx);
    }

    fn highlight(&self) -> Option<ElementRef> {
        self.base.highlight()
    }
}
