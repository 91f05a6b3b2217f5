//! Aufbau und Sortierung der Tag-Explorer-Liste.

use std::cmp::Ordering;

use crate::config::GameConfiguration;
use crate::core::{ElementKind, MapSet};

use super::{NodeInfo, SortMode};

/// Knoten-Liste über alle Things, Sectors und Linedefs einer Map.
///
/// Die Knoten sind reine Schnappschüsse; nach Map-Änderungen liefert
/// [`rebuild`](TagIndex::rebuild) einen frischen Stand, veraltete
/// Knoten degradieren bis dahin zu Platzhaltern.
#[derive(Debug, Default)]
pub struct TagIndex {
    nodes: Vec<NodeInfo>,
}

impl TagIndex {
    /// Baut die Knoten-Liste aus der Map, gruppiert nach Art
    /// (Things, Sectors, Linedefs) und innerhalb nach Index.
    pub fn build(map: &MapSet, config: &GameConfiguration) -> Self {
        let mut nodes = Vec::with_capacity(
            map.element_count(ElementKind::Thing)
                + map.element_count(ElementKind::Sector)
                + map.element_count(ElementKind::Linedef),
        );

        for index in map.indices(ElementKind::Thing) {
            if let Some(thing) = map.thing(index) {
                nodes.push(NodeInfo::from_thing(thing, config));
            }
        }
        for index in map.indices(ElementKind::Sector) {
            if let Some(sector) = map.sector(index) {
                nodes.push(NodeInfo::from_sector(sector));
            }
        }
        for index in map.indices(ElementKind::Linedef) {
            if let Some(linedef) = map.linedef(index) {
                nodes.push(NodeInfo::from_linedef(linedef));
            }
        }

        log::debug!("Tag-Index gebaut: {} Knoten", nodes.len());
        Self { nodes }
    }

    /// Verwirft den alten Stand und baut neu.
    pub fn rebuild(&mut self, map: &MapSet, config: &GameConfiguration) {
        *self = Self::build(map, config);
    }

    pub fn nodes(&self) -> &[NodeInfo] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Knoten einer Element-Art in Index-Reihenfolge.
    pub fn nodes_of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &NodeInfo> {
        self.nodes.iter().filter(move |n| n.kind() == kind)
    }

    /// Knoten sortiert nach Modus: Tag-, Action- oder Index-Vergleich,
    /// jeweils mit Index als Tiebreaker; `Unsorted` behält die
    /// Bau-Reihenfolge.
    pub fn sorted_nodes(&self, sort: SortMode) -> Vec<&NodeInfo> {
        let mut sorted: Vec<&NodeInfo> = self.nodes.iter().collect();
        match sort {
            SortMode::ByTag => sorted.sort_by(|a, b| {
                a.tag()
                    .cmp(&b.tag())
                    .then_with(|| compare_by_index(a, b))
            }),
            SortMode::ByAction => sorted.sort_by(|a, b| {
                a.action()
                    .cmp(&b.action())
                    .then_with(|| compare_by_index(a, b))
            }),
            SortMode::ByIndex => sorted.sort_by(compare_by_index_ref),
            SortMode::Unsorted => {}
        }
        sorted
    }

    /// Fertige Anzeige-Zeilen der ganzen Liste.
    pub fn display_rows(&self, map: &MapSet, sort: SortMode) -> Vec<String> {
        self.sorted_nodes(sort)
            .into_iter()
            .map(|node| node.name(map, sort).0)
            .collect()
    }
}

fn compare_by_index(a: &NodeInfo, b: &NodeInfo) -> Ordering {
    kind_rank(a.kind())
        .cmp(&kind_rank(b.kind()))
        .then_with(|| a.index().cmp(&b.index()))
}

fn compare_by_index_ref(a: &&NodeInfo, b: &&NodeInfo) -> Ordering {
    compare_by_index(a, b)
}

/// Gruppen-Reihenfolge der Anzeige.
fn kind_rank(kind: ElementKind) -> u8 {
    match kind {
        ElementKind::Thing => 0,
        ElementKind::Sector => 1,
        ElementKind::Linedef => 2,
        ElementKind::Vertex => 3,
    }
}
