//! Spatial-Index (KD-Tree) für schnelle Punkt-Element-Abfragen.

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// Index des gefundenen Elements
    pub index: usize,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über Punkt-Elementen (Vertices, Things).
///
/// Wird bei jeder Element-Mutation neu aufgebaut; Abfragen laufen danach
/// ohne weitere Map-Zugriffe.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    element_indices: Vec<usize>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            element_indices: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus (Element-Index, Position)-Paaren.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (usize, Vec2)>,
    {
        let mut pairs: Vec<(usize, Vec2)> = points.into_iter().collect();
        pairs.sort_unstable_by_key(|(index, _)| *index);

        let entries: Vec<[f64; 2]> = pairs
            .iter()
            .map(|(_, pos)| [pos.x as f64, pos.y as f64])
            .collect();
        let tree: KdTree<f64, 2> = (&entries).into();

        Self {
            tree,
            element_indices: pairs.into_iter().map(|(index, _)| index).collect(),
        }
    }

    /// Gibt die Anzahl indexierter Elemente zurück.
    pub fn len(&self) -> usize {
        self.element_indices.len()
    }

    /// Gibt `true` zurück, wenn keine Elemente im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.element_indices.is_empty()
    }

    /// Findet das nächste Element zur gegebenen Weltposition.
    pub fn nearest(&self, query: Vec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        let index = *self.element_indices.get(result.item as usize)?;

        Some(SpatialMatch {
            index,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Findet das nächste Element innerhalb `radius` um die Query-Position.
    pub fn nearest_in_range(&self, query: Vec2, radius: f32) -> Option<SpatialMatch> {
        self.nearest(query).filter(|m| m.distance <= radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> SpatialIndex {
        SpatialIndex::from_points([
            (1, Vec2::new(0.0, 0.0)),
            (2, Vec2::new(10.0, 0.0)),
            (7, Vec2::new(4.0, 3.0)),
        ])
    }

    #[test]
    fn nearest_returns_expected_element() {
        let index = sample_index();
        let nearest = index.nearest(Vec2::new(3.9, 2.9)).expect("Treffer erwartet");

        assert_eq!(nearest.index, 7);
        assert!(nearest.distance < 0.2);
    }

    #[test]
    fn nearest_in_range_respects_radius() {
        let index = sample_index();

        assert_eq!(
            index
                .nearest_in_range(Vec2::new(9.0, 0.0), 2.0)
                .map(|m| m.index),
            Some(2)
        );
        assert!(index.nearest_in_range(Vec2::new(9.0, 0.0), 0.5).is_none());
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = SpatialIndex::empty();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.nearest(Vec2::new(0.0, 0.0)).is_none());
    }
}
