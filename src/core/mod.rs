//! Core-Domänentypen: Map-Elemente, MapSet, Kamera, Spatial-Index.

pub mod camera;
pub mod fields;
pub mod geometry;
pub mod linedef;
/// Core-Datenmodelle der Map
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - MapSet: Container für alle Elemente einer geladenen Map
/// - Thing / Vertex / Linedef / Sector: die vier Element-Arten
/// - ElementRef: schwache Index-Referenz auf ein Element
pub mod map_set;
pub mod sector;
pub mod spatial;
pub mod thing;
pub mod vertex;

pub use camera::Camera2D;
pub use fields::{UniFields, UniValue, FIELD_COMMENT};
pub use geometry::Bounds;
pub use linedef::Linedef;
pub use map_set::{ElementKind, ElementRef, MapFormat, MapSet};
pub use sector::Sector;
pub use spatial::{SpatialIndex, SpatialMatch};
pub use thing::Thing;
pub use vertex::Vertex;
