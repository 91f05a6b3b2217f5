//! Vertex: Eckpunkt der Linedef-Geometrie.

use glam::Vec2;

/// Ein Map-Vertex.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Stabiler Index innerhalb der Map
    pub index: usize,
    /// Welt-Position
    pub position: Vec2,
    /// Persistentes Selektions-Flag
    pub selected: bool,
}

impl Vertex {
    /// Erstellt einen neuen Vertex.
    pub fn new(index: usize, position: Vec2) -> Self {
        Self {
            index,
            position,
            selected: false,
        }
    }
}
