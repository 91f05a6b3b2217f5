//! WAD Map Editor Core.
//! Editier-Modi, Spatial-Map-Modell und Tag-Explorer als Library,
//! exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod config;
pub mod core;
pub mod render;
pub mod shared;
pub mod tag_explorer;
pub mod ui;

pub use app::modes::{EditMode, ModeKind, MouseButton};
pub use app::{EditContext, MapEditor, UndoLog, UndoTransaction, ViewState};
pub use config::{GameConfiguration, LinedefActionCategory, LinedefActionInfo, ThingTypeInfo};
pub use core::{
    Bounds, Camera2D, ElementKind, ElementRef, Linedef, MapFormat, MapSet, Sector, SpatialIndex,
    SpatialMatch, Thing, UniFields, UniValue, Vertex, FIELD_COMMENT,
};
pub use render::{
    ElementColor, RecordedBatch, RecordingSurface, RenderSurface, SharedRecordingSurface,
};
pub use shared::EditorOptions;
pub use tag_explorer::{NodeInfo, SortMode, TagIndex};
pub use ui::{HeadlessShell, SharedHeadlessShell, ShellEvent, UiShell};
