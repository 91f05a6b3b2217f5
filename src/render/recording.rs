//! Aufzeichnende RenderSurface für Tests und Headless-Betrieb.

use std::cell::RefCell;
use std::rc::Rc;

use super::{ElementColor, RenderSurface};
use crate::core::ElementRef;

/// Ein abgeschlossenes `start`/`finish`-Paar mit allen Draw-Calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedBatch {
    /// `clear`-Flag des `start`-Aufrufs
    pub clear: bool,
    /// `full`-Flag des `start`-Aufrufs
    pub full: bool,
    /// Draw-Calls in Aufruf-Reihenfolge
    pub draws: Vec<(ElementRef, ElementColor)>,
}

/// RenderSurface, die alle Batches aufzeichnet statt zu zeichnen.
///
/// Über `session_available` lässt sich eine nicht verfügbare
/// Render-Session simulieren (`start` → `false`).
#[derive(Debug)]
pub struct RecordingSurface {
    /// Steuert den Rückgabewert von `start`
    pub session_available: bool,
    batches: Vec<RecordedBatch>,
    current: Option<RecordedBatch>,
}

impl RecordingSurface {
    /// Erstellt eine aufzeichnende Surface mit verfügbarer Session.
    pub fn new() -> Self {
        Self {
            session_available: true,
            batches: Vec::new(),
            current: None,
        }
    }

    /// Alle abgeschlossenen Batches in Reihenfolge.
    pub fn batches(&self) -> &[RecordedBatch] {
        &self.batches
    }

    /// Anzahl abgeschlossener Batches.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Letzter abgeschlossener Batch.
    pub fn last_batch(&self) -> Option<&RecordedBatch> {
        self.batches.last()
    }

    /// Verwirft alle Aufzeichnungen (laufende Session bleibt bestehen).
    pub fn clear_recording(&mut self) {
        self.batches.clear();
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for RecordingSurface {
    fn start(&mut self, clear: bool, full: bool) -> bool {
        if !self.session_available {
            return false;
        }
        self.current = Some(RecordedBatch {
            clear,
            full,
            draws: Vec::new(),
        });
        true
    }

    fn draw_element(&mut self, element: ElementRef, color: ElementColor) {
        if let Some(batch) = self.current.as_mut() {
            batch.draws.push((element, color));
        }
    }

    fn finish(&mut self) {
        if let Some(batch) = self.current.take() {
            self.batches.push(batch);
        }
    }
}

/// Teilbarer Handle auf eine [`RecordingSurface`].
///
/// Der Editor besitzt einen Klon als `Box<dyn RenderSurface>`, der
/// Aufrufer behält den anderen zum Auswerten der Aufzeichnung.
#[derive(Debug, Clone, Default)]
pub struct SharedRecordingSurface(Rc<RefCell<RecordingSurface>>);

impl SharedRecordingSurface {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(RecordingSurface::new())))
    }

    /// Simuliert eine (nicht) verfügbare Render-Session.
    pub fn set_session_available(&self, available: bool) {
        self.0.borrow_mut().session_available = available;
    }

    /// Kopie aller abgeschlossenen Batches in Reihenfolge.
    pub fn batches(&self) -> Vec<RecordedBatch> {
        self.0.borrow().batches().to_vec()
    }

    pub fn batch_count(&self) -> usize {
        self.0.borrow().batch_count()
    }

    pub fn last_batch(&self) -> Option<RecordedBatch> {
        self.0.borrow().last_batch().cloned()
    }

    pub fn clear_recording(&self) {
        self.0.borrow_mut().clear_recording();
    }
}

impl RenderSurface for SharedRecordingSurface {
    fn start(&mut self, clear: bool, full: bool) -> bool {
        self.0.borrow_mut().start(clear, full)
    }

    fn draw_element(&mut self, element: ElementRef, color: ElementColor) {
        self.0.borrow_mut().draw_element(element, color);
    }

    fn finish(&mut self) {
        self.0.borrow_mut().finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_batches_in_order() {
        let mut surface = RecordingSurface::new();

        assert!(surface.start(false, false));
        surface.draw_element(ElementRef::linedef(3), ElementColor::Highlight);
        surface.finish();

        assert!(surface.start(true, true));
        surface.finish();

        assert_eq!(surface.batch_count(), 2);
        assert!(!surface.batches()[0].full);
        assert!(surface.batches()[1].full);
        assert_eq!(
            surface.batches()[0].draws,
            vec![(ElementRef::linedef(3), ElementColor::Highlight)]
        );
    }

    #[test]
    fn unavailable_session_drops_draws() {
        let mut surface = RecordingSurface::new();
        surface.session_available = false;

        assert!(!surface.start(false, false));
        surface.draw_element(ElementRef::thing(1), ElementColor::Normal);
        surface.finish();

        assert_eq!(surface.batch_count(), 0);
    }

    #[test]
    fn shared_handle_observes_boxed_surface() {
        let handle = SharedRecordingSurface::new();
        let mut boxed: Box<dyn RenderSurface> = Box::new(handle.clone());

        assert!(boxed.start(true, true));
        boxed.draw_element(ElementRef::sector(0), ElementColor::Selected);
        boxed.finish();

        assert_eq!(handle.batch_count(), 1);
        let batch = handle.last_batch().expect("Batch erwartet");
        assert!(batch.clear && batch.full);
    }
}
