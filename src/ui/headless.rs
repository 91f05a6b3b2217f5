//! Aufzeichnende UI-Shell für Tests und Headless-Betrieb.

use std::cell::RefCell;
use std::rc::Rc;

use super::UiShell;
use crate::app::modes::ModeKind;
use crate::core::{ElementKind, ElementRef};

/// Ein aufgezeichneter Shell-Aufruf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// Toggle-Button-Zustand gesetzt
    ModeChecked(ModeKind, bool),
    /// Info-Panel zeigt ein Element
    InfoShown(ElementRef),
    /// Info-Panel ausgeblendet
    InfoHidden,
    /// Modaler Edit-Dialog geöffnet (und sofort wieder geschlossen)
    EditDialog(ElementKind, Vec<usize>),
}

/// UI-Shell ohne GUI: zeichnet alle Aufrufe auf, Dialoge schließen sofort.
#[derive(Debug, Default)]
pub struct HeadlessShell {
    events: Vec<ShellEvent>,
}

impl HeadlessShell {
    /// Erstellt eine leere Shell.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Alle aufgezeichneten Aufrufe in Reihenfolge.
    pub fn events(&self) -> &[ShellEvent] {
        &self.events
    }

    /// Anzahl geöffneter Edit-Dialoge.
    pub fn edit_dialog_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ShellEvent::EditDialog(..)))
            .count()
    }

    /// Letzter aufgezeichneter Aufruf.
    pub fn last_event(&self) -> Option<&ShellEvent> {
        self.events.last()
    }

    /// Verwirft alle Aufzeichnungen.
    pub fn clear_recording(&mut self) {
        self.events.clear();
    }
}

impl UiShell for HeadlessShell {
    fn set_mode_checked(&mut self, mode: ModeKind, checked: bool) {
        self.events.push(ShellEvent::ModeChecked(mode, checked));
    }

    fn show_element_info(&mut self, element: ElementRef) {
        self.events.push(ShellEvent::InfoShown(element));
    }

    fn hide_info(&mut self) {
        self.events.push(ShellEvent::InfoHidden);
    }

    fn show_edit_dialog(&mut self, kind: ElementKind, selection: &[usize]) {
        log::debug!(
            "Edit-Dialog ({kind}) mit {} Element(en) geöffnet",
            selection.len()
        );
        self.events
            .push(ShellEvent::EditDialog(kind, selection.to_vec()));
    }
}

/// Teilbarer Handle auf eine [`HeadlessShell`].
///
/// Gegenstück zu
/// [`SharedRecordingSurface`](crate::render::SharedRecordingSurface):
/// ein Klon wandert als `Box<dyn UiShell>` in den Editor, der andere
/// bleibt beim Aufrufer zum Auswerten.
#[derive(Debug, Clone, Default)]
pub struct SharedHeadlessShell(Rc<RefCell<HeadlessShell>>);

impl SharedHeadlessShell {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(HeadlessShell::new())))
    }

    /// Kopie aller aufgezeichneten Aufrufe in Reihenfolge.
    pub fn events(&self) -> Vec<ShellEvent> {
        self.0.borrow().events().to_vec()
    }

    pub fn edit_dialog_count(&self) -> usize {
        self.0.borrow().edit_dialog_count()
    }

    pub fn last_event(&self) -> Option<ShellEvent> {
        self.0.borrow().last_event().cloned()
    }

    pub fn clear_recording(&self) {
        self.0.borrow_mut().clear_recording();
    }
}

impl UiShell for SharedHeadlessShell {
    fn set_mode_checked(&mut self, mode: ModeKind, checked: bool) {
        self.0.borrow_mut().set_mode_checked(mode, checked);
    }

    fn show_element_info(&mut self, element: ElementRef) {
        self.0.borrow_mut().show_element_info(element);
    }

    fn hide_info(&mut self) {
        self.0.borrow_mut().hide_info();
    }

    fn show_edit_dialog(&mut self, kind: ElementKind, selection: &[usize]) {
        self.0.borrow_mut().show_edit_dialog(kind, selection);
    }
}
