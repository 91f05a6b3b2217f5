//! Sectors-Modus: Highlight über die nächstgelegene Linedef und
//! deren Vorder-/Rückseite. Beim Wechsel in den Vertices- oder
//! Linedefs-Modus wird die Sektor-Selektion aufgehoben.

use glam::Vec2;

use crate::app::modes::classic::ClassicBase;
use crate::app::modes::{EditMode, ModeKind, MouseButton};
use crate::app::EditContext;
use crate::core::{ElementKind, ElementRef};

pub struct SectorsMode {
    base: ClassicBase,
}

impl SectorsMode {
    pub fn new() -> Self {
        Self {
            base: ClassicBase::new(ElementKind::Sector),
        }
    }
}

impl Default for SectorsMode {
    fn default() -> Self {
        Self::new()
    }
}

impl EditMode for SectorsMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Sectors
    }

    fn engage(&mut self, ctx: &mut EditContext) {
        ctx.ui.set_mode_checked(ModeKind::Sectors, true);
    }

    fn disengage(&mut self, ctx: &mut EditContext, next: ModeKind) {
        if matches!(next, ModeKind::Vertices | ModeKind::Linedefs) {
            ctx.map.clear_selection(ElementKind::Sector);
        }
        ctx.ui.set_mode_checked(ModeKind::Sectors, false);
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
