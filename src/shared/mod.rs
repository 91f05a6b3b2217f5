//! Gemeinsame Hilfsmodule (Optionen, Konstanten).

pub mod options;

pub use options::EditorOptions;
