//! Linedefs-Modus.
//!
//! Zeichnet zu jeder Linedef auch ihre beiden Endpunkt-Vertices in
//! selektionsabhängiger Farbe. Beim Wechsel in den Vertices- oder
//! Sectors-Modus wird die Linedef-Selektion aufgehoben.

use glam::Vec2;

use crate::app::modes::classic::base_color;
use crate::app::modes::{EditMode, ModeKind, MouseButton};
use crate::app::EditContext;
use crate::core::{ElementKind, ElementRef};
use crate::render::ElementColor;

pub struct LinedefsMode {
    highlight: Option<ElementRef>,
}

impl LinedefsMode {
    pub fn new() -> Self {
        Self { highlight: None }
    }

    /// Zeichnet eine Linedef samt Endpunkt-Vertices. Die Vertices
    /// behalten dabei ihre eigene selektionsabhängige Farbe.
    fn draw_linedef(ctx: &mut EditContext, element: ElementRef, color: ElementColor) {
        ctx.renderer.draw_element(element, color);

        let Some(linedef) = ctx.map.linedef(element.index) else {
            return;
        };
        let (start, end) = (linedef.start, linedef.end);
        for vertex_index in [start, end] {
            let vertex = ElementRef::vertex(vertex_index);
            if ctx.map.element_exists(vertex) {
                let vertex_color = base_color(&ctx.map, vertex);
                ctx.renderer.draw_element(vertex, vertex_color);
            }
        }
    }

    fn update_highlight(&mut self, ctx: &mut EditContext, target: Option<ElementRef>) {
        if target == self.highlight {
            return;
        }

        if ctx.renderer.start(false, false) {
            if let Some(prev) = self.highlight {
                if ctx.map.element_exists(prev) {
                    let color = base_color(&ctx.map, prev);
                    Self::draw_linedef(ctx, prev, color);
                }
            }
            if let Some(new) = target {
                Self::draw_linedef(ctx, new, ElementColor::Highlight);
            }
            ctx.renderer.finish();

            self.highlight = target;
            match target {
                Some(element) => ctx.ui.show_element_info(element),
                None => ctx.ui.hide_info(),
            }
        }
    }

    /// Highlight existiert noch in der Map?
    fn valid_highlight(&self, ctx: &EditContext) -> Option<ElementRef> {
        self.highlight.filter(|h| ctx.map.element_exists(*h))
    }
}

impl Default for LinedefsMode {
    fn default() -> Self {
        Self::new()
    }
}

impl EditMode for LinedefsMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Linedefs
    }

    fn engage(&mut self, ctx: &mut EditContext) {
        ctx.ui.set_mode_checked(ModeKind::Linedefs, true);
    }

    fn disengage(&mut self, ctx: &mut EditContext, next: ModeKind) {
        if matches!(next, ModeKind::Vertices | ModeKind::Sectors) {
            ctx.map.clear_selection(ElementKind::Linedef);
        }
        ctx.ui.set_mode_checked(ModeKind::Linedefs, false);
        ctx.ui.hide_info();
    }

    fn cancel(&mut self, ctx: &mut EditContext) {
        self.highlight = None;
        ctx.ui.hide_info();
    }

    fn redraw_display(&mut self, ctx: &mut EditContext) {
        if self.highlight.is_some_and(|h| !ctx.map.element_exists(h)) {
            self.highlight = None;
        }

        if !ctx.renderer.start(true, true) {
            return;
        }
        for index in ctx.map.indices(ElementKind::Linedef) {
            let element = ElementRef::linedef(index);
            let color = if self.highlight == Some(element) {
                ElementColor::Highlight
            } else {
                base_color(&ctx.map, element)
            };
            Self::draw_linedef(ctx, element, color);
        }
        ctx.renderer.finish();
    }

    fn mouse_move(&mut self, ctx: &mut EditContext, map_pos: Vec2) {
        let radius = ctx.highlight_range_world(ElementKind::Linedef);
        let target = ctx.map.nearest_in_range(map_pos, ElementKind::Linedef, radius);
        self.update_highlight(ctx, target);
    }

    fn mouse_down(&mut self, ctx: &mut EditContext, button: MouseButton) {
        let Some(highlight) = self.valid_highlight(ctx) else {
            return;
        };

        match button {
            MouseButton::Select => {
                let selected = ctx.map.toggle_selected(highlight).unwrap_or(false);
                log::debug!(
                    "Selektion umgeschaltet: {} {} -> {}",
                    highlight.kind,
                    highlight.index,
                    selected
                );
            }
            MouseButton::Edit => {
                if !ctx.map.is_selected(highlight) {
                    ctx.map.clear_selection(ElementKind::Linedef);
                    ctx.map.set_selected(highlight, true);
                    ctx.request_full_redraw();
                }
            }
        }

        // Neuzeichnen in der Farbe des neuen Selektions-Zustands
        if ctx.renderer.start(false, false) {
            let color = base_color(&ctx.map, highlight);
            Self::draw_linedef(ctx, highlight, color);
            ctx.renderer.finish();
        }
    }

    fn mouse_up(&mut self, ctx: &mut EditContext, button: MouseButton) {
        if button != MouseButton::Edit {
            return;
        }
        // Ohne gültiges Highlight unter dem Zeiger kein Dialog
        let Some(highlight) = self.valid_highlight(ctx) else {
            return;
        };

        if ctx.renderer.start(false, false) {
            Self::draw_linedef(ctx, highlight, ElementColor::Highlight);
            ctx.renderer.finish();
        }

        let selection = ctx.map.selection(ElementKind::Linedef);
        if selection.is_empty() {
            return;
        }

        ctx.ui.show_edit_dialog(ElementKind::Linedef, &selection);

        if selection.len() == 1 {
            ctx.map.set_selected(ElementRef::linedef(selection[0]), false);
        }
        ctx.request_full_redraw();
    }

    fn mouse_leave(&mut self, ctx: &mut EditContext) {
        self.update_highlight(ctx, None);
    }

    fn highlight(&self) -> Option<ElementRef> {
        self.highlight
    }
}
