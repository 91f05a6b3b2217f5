//! Gemeinsames Highlight- und Selektions-Verhalten aller Editier-Modi.
//!
//! Jeder konkrete Modus bettet eine [`ClassicBase`] ein und delegiert
//! die Standard-Events an sie. Modi mit Sonderverhalten (z.B. der
//! Linedefs-Modus mit Endpunkt-Vertices) überschreiben nur das Zeichnen.

use glam::Vec2;

use crate::app::EditContext;
use crate::core::{ElementKind, ElementRef, MapSet};
use crate::render::ElementColor;

/// Farbwahl für ein Element ohne Highlight-Status.
pub(super) fn base_color(map: &MapSet, element: ElementRef) -> ElementColor {
    if map.is_selected(element) {
        ElementColor::Selected
    } else {
        ElementColor::Normal
    }
}

/// Gemeinsamer Zustand eines klassischen Editier-Modus.
pub(super) struct ClassicBase {
    kind: ElementKind,
    highlight: Option<ElementRef>,
}

impl ClassicBase {
    pub(super) fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            highlight: None,
        }
    }

    pub(super) fn kind(&self) -> ElementKind {
        self.kind
    }

    pub(super) fn highlight(&self) -> Option<ElementRef> {
        self.highlight
    }

    /// Verwirft das Highlight ohne Neuzeichnen; das übernimmt der
    /// Aufrufer im Anschluss.
    pub(super) fn reset(&mut self, ctx: &mut EditContext) {
        self.highlight = None;
        ctx.ui.hide_info();
    }

    /// Wechselt das Highlight auf `target`.
    ///
    /// Identischer Kandidat: kein Batch, kein Info-Update. Schlägt
    /// `renderer.start` fehl, bleibt der alte Zeiger stehen und der
    /// Wechsel wird beim nächsten Event erneut versucht.
    pub(super) fn update_highlight(&mut self, ctx: &mut EditContext, target: Option<ElementRef>) {
        if target == self.highlight {
            return;
        }

        if ctx.renderer.start(false, false) {
            if let Some(prev) = self.highlight {
                if ctx.map.element_exists(prev) {
                    let color = base_color(&ctx.map, prev);
                    ctx.renderer.draw_element(prev, color);
                }
            }
            if let Some(new) = target {
                ctx.renderer.draw_element(new, ElementColor::Highlight);
            }
            ctx.renderer.finish();

            self.highlight = target;
            match target {
                Some(element) => ctx.ui.show_element_info(element),
                None => ctx.ui.hide_info(),
            }
        }
    }

    /// Standard-Behandlung für `mouse_move`: nächstes Element der
    /// eigenen Art im Highlight-Radius suchen und hervorheben.
    pub(super) fn mouse_move(&mut self, ctx: &mut EditContext, map_pos: Vec2) {
        let radius = ctx.highlight_range_world(self.kind);
        let target = ctx.map.nearest_in_range(map_pos, self.kind, radius);
        self.update_highlight(ctx, target);
    }

    /// Select-Taste gedrückt: Selektion des Highlights umschalten.
    pub(super) fn select_pressed(&mut self, ctx: &mut EditContext) {
        let Some(highlight) = self.highlight else {
            return;
        };
        if !ctx.map.element_exists(highlight) {
            return;
        }

        let selected = ctx.map.toggle_selected(highlight).unwrap_or(false);
        log::debug!(
            "Selektion umgeschaltet: {} {} -> {}",
            highlight.kind,
            highlight.index,
            selected
        );

        // Neuzeichnen in der Farbe des neuen Selektions-Zustands
        if ctx.renderer.start(false, false) {
            let color = base_color(&ctx.map, highlight);
            ctx.renderer.draw_element(highlight, color);
            ctx.renderer.finish();
        }
    }

    /// Edit-Taste gedrückt: Highlight exklusiv selektieren, falls es
    /// nicht bereits selektiert ist.
    pub(super) fn edit_pressed(&mut self, ctx: &mut EditContext) {
        let Some(highlight) = self.highlight else {
            return;
        };
        if !ctx.map.element_exists(highlight) {
            return;
        }

        if !ctx.map.is_selected(highlight) {
            ctx.map.clear_selection(self.kind);
            ctx.map.set_selected(highlight, true);
            ctx.request_full_redraw();
        }

        if ctx.renderer.start(false, false) {
            let color = base_color(&ctx.map, highlight);
            ctx.renderer.draw_element(highlight, color);
            ctx.renderer.finish();
        }
    }

    /// Edit-Taste losgelassen: Eigenschaften-Dialog für die aktuelle
    /// Selektion. Eine Ein-Element-Selektion wird danach aufgehoben.
    /// Ohne gültiges Highlight unter dem Zeiger passiert nichts.
    pub(super) fn edit_released(&mut self, ctx: &mut EditContext) {
        let Some(highlight) = self.highlight else {
            return;
        };
        if !ctx.map.element_exists(highlight) {
            return;
        }

        if ctx.renderer.start(false, false) {
            ctx.renderer.draw_element(highlight, ElementColor::Highlight);
            ctx.renderer.finish();
        }

        let selection = ctx.map.selection(self.kind);
        if selection.is_empty() {
            return;
        }

        ctx.ui.show_edit_dialog(self.kind, &selection);

        if selection.len() == 1 {
            let only = ElementRef {
                kind: self.kind,
                index: selection[0],
            };
            ctx.map.set_selected(only, false);
        }
        ctx.request_full_redraw();
    }

    /// Mauszeiger verlässt die Anzeige: Highlight aufheben.
    pub(super) fn mouse_leave(&mut self, ctx: &mut EditContext) {
        self.update_highlight(ctx, None);
    }

    /// Komplettes Neuzeichnen: alle Elemente der eigenen Art, das
    /// Highlight zuletzt in Highlight-Farbe.
    pub(super) fn redraw_all(&mut self, ctx: &mut EditContext) {
        if self.highlight.is_some_and(|h| !ctx.map.element_exists(h)) {
            self.highlight = None;
        }

        if !ctx.renderer.start(true, true) {
            return;
        }
        for index in ctx.map.indices(self.kind) {
            let element = ElementRef {
                kind: self.kind,
                index,
            };
            let color = if self.highlight == Some(element) {
                ElementColor::Highlight
            } else {
                base_color(&ctx.map, element)
            };
            ctx.renderer.draw_element(element, color);
        }
        ctx.renderer.finish();
    }
}
