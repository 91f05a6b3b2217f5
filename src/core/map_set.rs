//! Die zentrale MapSet-Datenstruktur mit Things, Vertices, Linedefs, Sectors.

use std::collections::HashMap;
use std::fmt;

use glam::Vec2;

use super::fields::UniFields;
use super::geometry::{point_segment_distance, side_of_line, Bounds};
use super::{Linedef, Sector, SpatialIndex, Thing, Vertex};

/// Element-Art der vier adressierbaren Map-Entitäten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Eckpunkt
    Vertex,
    /// Wandkante
    Linedef,
    /// Bodenfläche
    Sector,
    /// Platzierbares Objekt
    Thing,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Vertex => "vertex",
            ElementKind::Linedef => "linedef",
            ElementKind::Sector => "sector",
            ElementKind::Thing => "thing",
        };
        write!(f, "{name}")
    }
}

/// Schwache Referenz auf ein Map-Element: Art + stabiler Index.
///
/// Wird nie direkt dereferenziert; jeder Zugriff löst den Index neu
/// über die MapSet auf und toleriert gelöschte Elemente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef {
    /// Element-Art
    pub kind: ElementKind,
    /// Stabiler Index innerhalb der Map
    pub index: usize,
}

impl ElementRef {
    /// Referenz auf einen Vertex.
    pub fn vertex(index: usize) -> Self {
        Self {
            kind: ElementKind::Vertex,
            index,
        }
    }

    /// Referenz auf eine Linedef.
    pub fn linedef(index: usize) -> Self {
        Self {
            kind: ElementKind::Linedef,
            index,
        }
    }

    /// Referenz auf einen Sektor.
    pub fn sector(index: usize) -> Self {
        Self {
            kind: ElementKind::Sector,
            index,
        }
    }

    /// Referenz auf ein Thing.
    pub fn thing(index: usize) -> Self {
        Self {
            kind: ElementKind::Thing,
            index,
        }
    }
}

/// Map-Container-Format des geladenen Dokuments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapFormat {
    /// Klassisches Doom-Format (keine benannten Felder)
    #[default]
    Doom,
    /// Hexen-Format (erweiterte Specials, keine benannten Felder)
    Hexen,
    /// UDMF mit benannten Custom-Fields
    Udmf,
}

impl MapFormat {
    /// Gibt `true` zurück, wenn das Format benannte Custom-Fields trägt.
    pub fn supports_custom_fields(&self) -> bool {
        matches!(self, MapFormat::Udmf)
    }
}

/// Container für alle Elemente einer geladenen Map.
///
/// Elemente sind über ihren stabilen Index adressiert; Löschen
/// invalidiert den Index und alle Zugriffe liefern danach `None`.
#[derive(Debug, Clone)]
pub struct MapSet {
    format: MapFormat,
    things: HashMap<usize, Thing>,
    vertices: HashMap<usize, Vertex>,
    linedefs: HashMap<usize, Linedef>,
    sectors: HashMap<usize, Sector>,
    /// Persistenter Spatial-Index über allen Things
    thing_index: SpatialIndex,
    /// Persistenter Spatial-Index über allen Vertices
    vertex_index: SpatialIndex,
}

impl MapSet {
    /// Erstellt eine neue leere Map im angegebenen Format.
    pub fn new(format: MapFormat) -> Self {
        Self {
            format,
            things: HashMap::new(),
            vertices: HashMap::new(),
            linedefs: HashMap::new(),
            sectors: HashMap::new(),
            thing_index: SpatialIndex::empty(),
            vertex_index: SpatialIndex::empty(),
        }
    }

    /// Gibt das Map-Format zurück.
    pub fn format(&self) -> MapFormat {
        self.format
    }

    /// Gibt `true` zurück, wenn das Dokument benannte Custom-Fields
    /// (z.B. "comment") unterstützt.
    pub fn custom_fields_enabled(&self) -> bool {
        self.format.supports_custom_fields()
    }

    // ── Element-Verwaltung ──────────────────────────────────────

    /// Fügt ein Thing hinzu (ersetzt ein bestehendes mit gleichem Index).
    pub fn add_thing(&mut self, thing: Thing) {
        self.things.insert(thing.index, thing);
        self.rebuild_thing_index();
    }

    /// Fügt einen Vertex hinzu.
    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.vertices.insert(vertex.index, vertex);
        self.rebuild_vertex_index();
    }

    /// Fügt eine Linedef hinzu.
    pub fn add_linedef(&mut self, linedef: Linedef) {
        self.linedefs.insert(linedef.index, linedef);
    }

    /// Fügt einen Sektor hinzu.
    pub fn add_sector(&mut self, sector: Sector) {
        self.sectors.insert(sector.index, sector);
    }

    /// Entfernt ein Thing.
    pub fn remove_thing(&mut self, index: usize) -> Option<Thing> {
        let removed = self.things.remove(&index);
        if removed.is_some() {
            self.rebuild_thing_index();
        }
        removed
    }

    /// Entfernt einen Vertex inklusive aller referenzierenden Linedefs.
    pub fn remove_vertex(&mut self, index: usize) -> Option<Vertex> {
        let removed = self.vertices.remove(&index);
        if removed.is_some() {
            self.linedefs
                .retain(|_, l| l.start != index && l.end != index);
            self.rebuild_vertex_index();
        }
        removed
    }

    /// Entfernt eine Linedef.
    pub fn remove_linedef(&mut self, index: usize) -> Option<Linedef> {
        self.linedefs.remove(&index)
    }

    /// Entfernt einen Sektor; referenzierende Linedefs verlieren die Seite.
    pub fn remove_sector(&mut self, index: usize) -> Option<Sector> {
        let removed = self.sectors.remove(&index);
        if removed.is_some() {
            for linedef in self.linedefs.values_mut() {
                if linedef.front_sector == Some(index) {
                    linedef.front_sector = None;
                }
                if linedef.back_sector == Some(index) {
                    linedef.back_sector = None;
                }
            }
        }
        removed
    }

    /// Holt ein Thing per Index.
    pub fn thing(&self, index: usize) -> Option<&Thing> {
        self.things.get(&index)
    }

    /// Holt ein Thing mutable.
    pub fn thing_mut(&mut self, index: usize) -> Option<&mut Thing> {
        self.things.get_mut(&index)
    }

    /// Holt einen Vertex per Index.
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(&index)
    }

    /// Holt einen Vertex mutable.
    pub fn vertex_mut(&mut self, index: usize) -> Option<&mut Vertex> {
        self.vertices.get_mut(&index)
    }

    /// Holt eine Linedef per Index.
    pub fn linedef(&self, index: usize) -> Option<&Linedef> {
        self.linedefs.get(&index)
    }

    /// Holt eine Linedef mutable.
    pub fn linedef_mut(&mut self, index: usize) -> Option<&mut Linedef> {
        self.linedefs.get_mut(&index)
    }

    /// Holt einen Sektor per Index.
    pub fn sector(&self, index: usize) -> Option<&Sector> {
        self.sectors.get(&index)
    }

    /// Holt einen Sektor mutable.
    pub fn sector_mut(&mut self, index: usize) -> Option<&mut Sector> {
        self.sectors.get_mut(&index)
    }

    /// Prüft, ob das referenzierte Element (noch) existiert.
    pub fn element_exists(&self, element: ElementRef) -> bool {
        match element.kind {
            ElementKind::Vertex => self.vertices.contains_key(&element.index),
            ElementKind::Linedef => self.linedefs.contains_key(&element.index),
            ElementKind::Sector => self.sectors.contains_key(&element.index),
            ElementKind::Thing => self.things.contains_key(&element.index),
        }
    }

    /// Berechnet den nächsten freien Index für eine Element-Art.
    pub fn next_index(&self, kind: ElementKind) -> usize {
        let max = match kind {
            ElementKind::Vertex => self.vertices.keys().max(),
            ElementKind::Linedef => self.linedefs.keys().max(),
            ElementKind::Sector => self.sectors.keys().max(),
            ElementKind::Thing => self.things.keys().max(),
        };
        max.map_or(0, |m| m + 1)
    }

    /// Anzahl der Elemente einer Art.
    pub fn element_count(&self, kind: ElementKind) -> usize {
        match kind {
            ElementKind::Vertex => self.vertices.len(),
            ElementKind::Linedef => self.linedefs.len(),
            ElementKind::Sector => self.sectors.len(),
            ElementKind::Thing => self.things.len(),
        }
    }

    /// Alle Indizes einer Element-Art, aufsteigend sortiert.
    pub fn indices(&self, kind: ElementKind) -> Vec<usize> {
        let mut indices: Vec<usize> = match kind {
            ElementKind::Vertex => self.vertices.keys().copied().collect(),
            ElementKind::Linedef => self.linedefs.keys().copied().collect(),
            ElementKind::Sector => self.sectors.keys().copied().collect(),
            ElementKind::Thing => self.things.keys().copied().collect(),
        };
        indices.sort_unstable();
        indices
    }

    // ── Felder ──────────────────────────────────────────────────

    /// Feld-Map eines Elements (Vertices tragen keine Felder).
    pub fn fields(&self, element: ElementRef) -> Option<&UniFields> {
        match element.kind {
            ElementKind::Thing => self.things.get(&element.index).map(|t| &t.fields),
            ElementKind::Sector => self.sectors.get(&element.index).map(|s| &s.fields),
            ElementKind::Linedef => self.linedefs.get(&element.index).map(|l| &l.fields),
            ElementKind::Vertex => None,
        }
    }

    /// Feld-Map eines Elements mutable.
    pub fn fields_mut(&mut self, element: ElementRef) -> Option<&mut UniFields> {
        match element.kind {
            ElementKind::Thing => self.things.get_mut(&element.index).map(|t| &mut t.fields),
            ElementKind::Sector => self.sectors.get_mut(&element.index).map(|s| &mut s.fields),
            ElementKind::Linedef => self
                .linedefs
                .get_mut(&element.index)
                .map(|l| &mut l.fields),
            ElementKind::Vertex => None,
        }
    }

    // ── Selektion ───────────────────────────────────────────────

    /// Prüft das Selektions-Flag eines Elements.
    pub fn is_selected(&self, element: ElementRef) -> bool {
        match element.kind {
            ElementKind::Vertex => self
                .vertices
                .get(&element.index)
                .is_some_and(|v| v.selected),
            ElementKind::Linedef => self
                .linedefs
                .get(&element.index)
                .is_some_and(|l| l.selected),
            ElementKind::Sector => self.sectors.get(&element.index).is_some_and(|s| s.selected),
            ElementKind::Thing => self.things.get(&element.index).is_some_and(|t| t.selected),
        }
    }

    /// Setzt das Selektions-Flag; `false` wenn das Element fehlt.
    pub fn set_selected(&mut self, element: ElementRef, selected: bool) -> bool {
        match element.kind {
            ElementKind::Vertex => {
                if let Some(v) = self.vertices.get_mut(&element.index) {
                    v.selected = selected;
                    return true;
                }
            }
            ElementKind::Linedef => {
                if let Some(l) = self.linedefs.get_mut(&element.index) {
                    l.selected = selected;
                    return true;
                }
            }
            ElementKind::Sector => {
                if let Some(s) = self.sectors.get_mut(&element.index) {
                    s.selected = selected;
                    return true;
                }
            }
            ElementKind::Thing => {
                if let Some(t) = self.things.get_mut(&element.index) {
                    t.selected = selected;
                    return true;
                }
            }
        }
        false
    }

    /// Invertiert das Selektions-Flag; gibt den neuen Zustand zurück.
    pub fn toggle_selected(&mut self, element: ElementRef) -> Option<bool> {
        let next = !self.is_selected(element);
        if self.set_selected(element, next) {
            Some(next)
        } else {
            None
        }
    }

    /// Hebt die Selektion einer Element-Art komplett auf.
    pub fn clear_selection(&mut self, kind: ElementKind) {
        match kind {
            ElementKind::Vertex => self.vertices.values_mut().for_each(|v| v.selected = false),
            ElementKind::Linedef => self.linedefs.values_mut().for_each(|l| l.selected = false),
            ElementKind::Sector => self.sectors.values_mut().for_each(|s| s.selected = false),
            ElementKind::Thing => self.things.values_mut().for_each(|t| t.selected = false),
        }
    }

    /// Indizes aller selektierten Elemente einer Art, aufsteigend sortiert
    /// für deterministische Dialog- und Render-Reihenfolge.
    pub fn selection(&self, kind: ElementKind) -> Vec<usize> {
        let mut indices: Vec<usize> = match kind {
            ElementKind::Vertex => self
                .vertices
                .values()
                .filter(|v| v.selected)
                .map(|v| v.index)
                .collect(),
            ElementKind::Linedef => self
                .linedefs
                .values()
                .filter(|l| l.selected)
                .map(|l| l.index)
                .collect(),
            ElementKind::Sector => self
                .sectors
                .values()
                .filter(|s| s.selected)
                .map(|s| s.index)
                .collect(),
            ElementKind::Thing => self
                .things
                .values()
                .filter(|t| t.selected)
                .map(|t| t.index)
                .collect(),
        };
        indices.sort_unstable();
        indices
    }

    // ── Proximity-Abfragen ──────────────────────────────────────

    /// Findet das nächste Element der Art innerhalb `radius`.
    ///
    /// "Kein Treffer" ist ein normales Ergebnis, kein Fehler.
    pub fn nearest_in_range(
        &self,
        pos: Vec2,
        kind: ElementKind,
        radius: f32,
    ) -> Option<ElementRef> {
        match kind {
            ElementKind::Thing => self
                .thing_index
                .nearest_in_range(pos, radius)
                .map(|m| ElementRef::thing(m.index)),
            ElementKind::Vertex => self
                .vertex_index
                .nearest_in_range(pos, radius)
                .map(|m| ElementRef::vertex(m.index)),
            ElementKind::Linedef => self
                .nearest_linedef_in_range(pos, radius)
                .map(ElementRef::linedef),
            ElementKind::Sector => self
                .nearest_sector_in_range(pos, radius)
                .map(ElementRef::sector),
        }
    }

    /// Findet die nächste Linedef innerhalb `radius` (Punkt-Strecken-Distanz).
    pub fn nearest_linedef_in_range(&self, pos: Vec2, radius: f32) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for linedef in self.linedefs.values() {
            let (Some(start), Some(end)) = (
                self.vertices.get(&linedef.start),
                self.vertices.get(&linedef.end),
            ) else {
                continue;
            };
            let distance = point_segment_distance(pos, start.position, end.position);
            if distance <= radius && best.is_none_or(|(_, d)| distance < d) {
                best = Some((linedef.index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Findet den Sektor unter dem Punkt über die nächste Linedef:
    /// die Seite der Linedef bestimmt, ob Front- oder Back-Sektor zählt.
    pub fn nearest_sector_in_range(&self, pos: Vec2, radius: f32) -> Option<usize> {
        let linedef = self
            .nearest_linedef_in_range(pos, radius)
            .and_then(|i| self.linedefs.get(&i))?;
        let start = self.vertices.get(&linedef.start)?;
        let end = self.vertices.get(&linedef.end)?;

        let sector = if side_of_line(pos, start.position, end.position) < 0.0 {
            linedef.front_sector
        } else {
            linedef.back_sector
        };
        sector.filter(|index| self.sectors.contains_key(index))
    }

    // ── Positions-Helfer ────────────────────────────────────────

    /// Mittelpunkt des umschließenden Rechtecks einer Linedef.
    pub fn linedef_center(&self, index: usize) -> Option<Vec2> {
        let linedef = self.linedefs.get(&index)?;
        let start = self.vertices.get(&linedef.start)?;
        let end = self.vertices.get(&linedef.end)?;

        let mut bounds = Bounds::empty();
        bounds.extend(start.position);
        bounds.extend(end.position);
        Some(bounds.center())
    }

    /// Bounding-Box eines Sektors über alle referenzierenden Linedefs.
    pub fn sector_bounds(&self, index: usize) -> Option<Bounds> {
        if !self.sectors.contains_key(&index) {
            return None;
        }

        let mut bounds = Bounds::empty();
        for linedef in self.linedefs.values() {
            if linedef.front_sector != Some(index) && linedef.back_sector != Some(index) {
                continue;
            }
            if let Some(start) = self.vertices.get(&linedef.start) {
                bounds.extend(start.position);
            }
            if let Some(end) = self.vertices.get(&linedef.end) {
                bounds.extend(end.position);
            }
        }
        Some(bounds)
    }

    // ── Spatial-Index ───────────────────────────────────────────

    fn rebuild_thing_index(&mut self) {
        self.thing_index =
            SpatialIndex::from_points(self.things.values().map(|t| (t.index, t.position)));
    }

    fn rebuild_vertex_index(&mut self) {
        self.vertex_index =
            SpatialIndex::from_points(self.vertices.values().map(|v| (v.index, v.position)));
    }
}

impl Default for MapSet {
    fn default() -> Self {
        Self::new(MapFormat::Doom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Quadratischer Sektor 0 von (0,0) bis (64,64), ein Thing in der Mitte.
    fn square_map() -> MapSet {
        let mut map = MapSet::new(MapFormat::Udmf);
        map.add_sector(Sector::new(0));
        map.add_vertex(Vertex::new(0, Vec2::new(0.0, 0.0)));
        map.add_vertex(Vertex::new(1, Vec2::new(64.0, 0.0)));
        map.add_vertex(Vertex::new(2, Vec2::new(64.0, 64.0)));
        map.add_vertex(Vertex::new(3, Vec2::new(0.0, 64.0)));
        // Umlauf im Uhrzeigersinn → Innenseite ist die Front-Seite
        map.add_linedef(Linedef::with_front(0, 0, 3, 0));
        map.add_linedef(Linedef::with_front(1, 3, 2, 0));
        map.add_linedef(Linedef::with_front(2, 2, 1, 0));
        map.add_linedef(Linedef::with_front(3, 1, 0, 0));
        map.add_thing(Thing::new(0, Vec2::new(32.0, 32.0), 1));
        map
    }

    #[test]
    fn nearest_queries_per_kind() {
        let map = square_map();

        assert_eq!(
            map.nearest_in_range(Vec2::new(30.0, 30.0), ElementKind::Thing, 5.0),
            Some(ElementRef::thing(0))
        );
        assert_eq!(
            map.nearest_in_range(Vec2::new(2.0, 1.0), ElementKind::Vertex, 5.0),
            Some(ElementRef::vertex(0))
        );
        // Linedef 3 läuft von (64,0) nach (0,0) entlang y=0
        assert_eq!(
            map.nearest_in_range(Vec2::new(32.0, 3.0), ElementKind::Linedef, 5.0),
            Some(ElementRef::linedef(3))
        );
        assert!(map
            .nearest_in_range(Vec2::new(32.0, 30.0), ElementKind::Linedef, 5.0)
            .is_none());
    }

    #[test]
    fn nearest_sector_uses_line_side() {
        let map = square_map();

        // Innerhalb des Quadrats: Front-Seite → Sektor 0
        assert_eq!(
            map.nearest_in_range(Vec2::new(32.0, 4.0), ElementKind::Sector, 10.0),
            Some(ElementRef::sector(0))
        );
        // Außerhalb: Back-Seite ohne Sektor → kein Treffer
        assert!(map
            .nearest_in_range(Vec2::new(32.0, -4.0), ElementKind::Sector, 10.0)
            .is_none());
    }

    #[test]
    fn selection_toggles_and_clears() {
        let mut map = square_map();
        let linedef = ElementRef::linedef(1);

        assert_eq!(map.toggle_selected(linedef), Some(true));
        assert!(map.is_selected(linedef));
        assert_eq!(map.selection(ElementKind::Linedef), vec![1]);

        map.set_selected(ElementRef::linedef(3), true);
        assert_eq!(map.selection(ElementKind::Linedef), vec![1, 3]);

        map.clear_selection(ElementKind::Linedef);
        assert!(map.selection(ElementKind::Linedef).is_empty());
    }

    #[test]
    fn selection_on_missing_element_is_noop() {
        let mut map = square_map();

        assert!(!map.set_selected(ElementRef::thing(99), true));
        assert!(map.toggle_selected(ElementRef::thing(99)).is_none());
        assert!(!map.is_selected(ElementRef::thing(99)));
    }

    #[test]
    fn removed_thing_is_no_longer_resolvable() {
        let mut map = square_map();

        assert!(map.element_exists(ElementRef::thing(0)));
        let removed = map.remove_thing(0);
        assert!(removed.is_some());
        assert!(!map.element_exists(ElementRef::thing(0)));
        assert!(map
            .nearest_in_range(Vec2::new(32.0, 32.0), ElementKind::Thing, 100.0)
            .is_none());
    }

    #[test]
    fn remove_vertex_drops_referencing_linedefs() {
        let mut map = square_map();

        map.remove_vertex(0);
        // Linedefs 0 (0→3) und 3 (1→0) referenzieren Vertex 0
        assert!(map.linedef(0).is_none());
        assert!(map.linedef(3).is_none());
        assert!(map.linedef(1).is_some());
    }

    #[test]
    fn sector_bounds_center() {
        let map = square_map();
        let bounds = map.sector_bounds(0).expect("Sektor vorhanden");

        assert_abs_diff_eq!(bounds.center().x, 32.0, epsilon = 1e-6);
        assert_abs_diff_eq!(bounds.center().y, 32.0, epsilon = 1e-6);
    }

    #[test]
    fn linedef_center_is_rect_midpoint() {
        let map = square_map();
        let center = map.linedef_center(3).expect("Linedef vorhanden");

        assert_eq!(center, Vec2::new(32.0, 0.0));
    }

    #[test]
    fn next_index_continues_after_max() {
        let map = square_map();

        assert_eq!(map.next_index(ElementKind::Vertex), 4);
        assert_eq!(map.next_index(ElementKind::Thing), 1);
        assert_eq!(MapSet::default().next_index(ElementKind::Sector), 0);
    }
}
