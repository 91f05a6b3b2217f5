//! Editor-Schicht: Kontext, Undo-Protokoll, Modi und Editor-Fassade.

pub mod context;
pub mod editor;
pub mod modes;
pub mod undo;

pub use context::{EditContext, ViewState};
pub use editor::MapEditor;
pub use undo::{UndoLog, UndoTransaction};
