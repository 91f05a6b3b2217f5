//! UI-Shell-Schnittstelle: Toggle-Buttons, Info-Panel, modale Dialoge.
//!
//! Die echte GUI (Menüs, Docking, Dialog-Layout) lebt außerhalb dieses
//! Crates; der Editor-Kern meldet Zustandsänderungen über den schmalen
//! [`UiShell`]-Trait. Für Tests und den Headless-Demo-Betrieb gibt es
//! die [`headless::HeadlessShell`].

pub mod headless;

pub use headless::{HeadlessShell, SharedHeadlessShell, ShellEvent};

use crate::app::modes::ModeKind;
use crate::core::{ElementKind, ElementRef};

/// Schnittstelle des Editor-Kerns zur umgebenden GUI.
pub trait UiShell {
    /// Setzt den Checked-Zustand des Toggle-Buttons eines Modus.
    fn set_mode_checked(&mut self, mode: ModeKind, checked: bool);

    /// Zeigt Details zum Element im Info-Panel an.
    fn show_element_info(&mut self, element: ElementRef);

    /// Blendet das Info-Panel aus.
    fn hide_info(&mut self);

    /// Öffnet den modalen Edit-Dialog für die übergebene Selektion.
    ///
    /// Blockiert bis der Dialog geschlossen wurde; während der
    /// Suspendierung finden keine weiteren Modus-Übergänge statt.
    fn show_edit_dialog(&mut self, kind: ElementKind, selection: &[usize]);
}
