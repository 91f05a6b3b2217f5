//! Tag-Explorer: Anzeige-Knoten und sortierte Listen über die
//! Tag-/Action-Querverweise einer Map.

pub mod index;
pub mod node_info;

pub use index::TagIndex;
pub use node_info::{NodeInfo, SortMode};

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::app::UndoLog;
    use crate::config::{GameConfiguration, ThingTypeInfo};
    use crate::core::{
        ElementKind, ElementRef, Linedef, MapFormat, MapSet, Sector, Thing, UniValue, Vertex,
        FIELD_COMMENT,
    };

    use super::*;

    /// UDMF-Map mit Sektor 5 (Tag 3), Thing 2 (Action 7) und einer
    /// Linedef zwischen zwei Vertices.
    fn sample_map() -> MapSet {
        let mut map = MapSet::new(MapFormat::Udmf);

        let mut sector = Sector::new(5);
        sector.tag = 3;
        map.add_sector(sector);

        let mut thing = Thing::new(2, Vec2::new(96.0, 32.0), 3001);
        thing.action = 7;
        map.add_thing(thing);

        map.add_vertex(Vertex::new(0, Vec2::new(0.0, 0.0)));
        map.add_vertex(Vertex::new(1, Vec2::new(128.0, 64.0)));
        map.add_linedef(Linedef::with_front(4, 0, 1, 5));

        map
    }

    fn sample_config() -> GameConfiguration {
        let mut config = GameConfiguration::new();
        config.add_thing_type(ThingTypeInfo::new(3001, "Imp"));
        config
    }

    #[test]
    fn nodes_snapshot_kind_and_index_of_source() {
        let map = sample_map();
        let config = sample_config();

        let thing = NodeInfo::from_thing(map.thing(2).unwrap(), &config);
        let sector = NodeInfo::from_sector(map.sector(5).unwrap());
        let linedef = NodeInfo::from_linedef(map.linedef(4).unwrap());

        assert_eq!((thing.kind(), thing.index()), (ElementKind::Thing, 2));
        assert_eq!((sector.kind(), sector.index()), (ElementKind::Sector, 5));
        assert_eq!((linedef.kind(), linedef.index()), (ElementKind::Linedef, 4));
        assert_eq!(thing.thing_type().unwrap(), 3001);
    }

    #[test]
    fn thing_type_on_non_thing_node_fails() {
        let map = sample_map();
        let node = NodeInfo::from_sector(map.sector(5).unwrap());

        let err = node.thing_type().unwrap_err();
        assert!(err.to_string().contains("sector"));
    }

    #[test]
    fn name_by_index_prefixes_index_and_tag() {
        let map = sample_map();
        let node = NodeInfo::from_sector(map.sector(5).unwrap());

        let (display, comment) = node.name(&map, SortMode::ByIndex);
        assert_eq!(display, "5: Tag:3; Sector");
        assert_eq!(comment, "");
    }

    #[test]
    fn name_by_action_appends_index_for_default_name() {
        let mut map = sample_map();
        map.thing_mut(2).unwrap().tag = 0;
        // Thing-Typ ohne Katalog-Eintrag: Standard-Name "Thing"
        let config = GameConfiguration::new();
        let node = NodeInfo::from_thing(map.thing(2).unwrap(), &config);

        let (display, _) = node.name(&map, SortMode::ByAction);
        assert_eq!(display, "Action:7; Thing 2");
    }

    #[test]
    fn name_by_tag_puts_tag_before_action() {
        let mut map = sample_map();
        let mut thing = Thing::new(9, Vec2::ZERO, 3001);
        thing.tag = 12;
        thing.action = 7;
        map.add_thing(thing);
        let config = sample_config();
        let node = NodeInfo::from_thing(map.thing(9).unwrap(), &config);

        let (display, _) = node.name(&map, SortMode::ByTag);
        assert_eq!(display, "Tag:12; Action:7; Imp 9");
    }

    #[test]
    fn comment_overrides_default_name_and_suppresses_index() {
        let mut map = sample_map();
        map.fields_mut(ElementRef::sector(5))
            .unwrap()
            .insert(FIELD_COMMENT.to_string(), UniValue::Text("Exit pit".into()));
        let node = NodeInfo::from_sector(map.sector(5).unwrap());

        let (display, comment) = node.name(&map, SortMode::ByTag);
        assert_eq!(display, "Tag:3; Exit pit");
        assert_eq!(comment, "Exit pit");
    }

    #[test]
    fn empty_comment_field_keeps_default_name_without_index() {
        let mut map = sample_map();
        map.fields_mut(ElementRef::sector(5))
            .unwrap()
            .insert(FIELD_COMMENT.to_string(), UniValue::Text(String::new()));
        let node = NodeInfo::from_sector(map.sector(5).unwrap());

        let (display, _) = node.name(&map, SortMode::ByTag);
        assert_eq!(display, "Tag:3; Sector");
    }

    #[test]
    fn unsorted_mode_shows_name_alone() {
        let map = sample_map();
        let config = sample_config();
        let node = NodeInfo::from_thing(map.thing(2).unwrap(), &config);

        let (display, _) = node.name(&map, SortMode::Unsorted);
        assert_eq!(display, "Imp");
    }

    #[test]
    fn deleted_element_yields_invalid_placeholder() {
        let mut map = sample_map();
        let node = NodeInfo::from_sector(map.sector(5).unwrap());
        map.remove_sector(5);

        let (display, comment) = node.name(&map, SortMode::ByTag);
        assert_eq!(display, "<invalid sector>");
        assert_eq!(comment, "");
        assert_eq!(node.position(&map), Vec2::ZERO);
    }

    #[test]
    fn doom_format_map_has_no_comments() {
        let mut map = MapSet::new(MapFormat::Doom);
        let mut sector = Sector::new(0);
        sector.tag = 3;
        map.add_sector(sector);
        let node = NodeInfo::from_sector(map.sector(0).unwrap());
        let mut undo = UndoLog::default();

        node.set_comment(&mut map, &mut undo, "verloren");

        assert_eq!(undo.transaction_count(), 0);
        assert_eq!(node.comment(&map), "");
    }

    #[test]
    fn set_empty_comment_without_field_is_strict_noop() {
        let mut map = sample_map();
        let node = NodeInfo::from_sector(map.sector(5).unwrap());
        let mut undo = UndoLog::default();

        node.set_comment(&mut map, &mut undo, "");

        assert_eq!(undo.transaction_count(), 0);
        assert!(!map
            .fields(ElementRef::sector(5))
            .unwrap()
            .contains_key(FIELD_COMMENT));
    }

    #[test]
    fn set_empty_comment_removes_existing_field() {
        let mut map = sample_map();
        let node = NodeInfo::from_sector(map.sector(5).unwrap());
        let mut undo = UndoLog::default();
        node.set_comment(&mut map, &mut undo, "alt");

        node.set_comment(&mut map, &mut undo, "");

        assert_eq!(undo.transaction_count(), 2);
        assert_eq!(undo.last_label(), Some("Remove comment"));
        assert_eq!(
            undo.transactions()[1].changed,
            vec![ElementRef::sector(5)]
        );
        assert!(!map
            .fields(ElementRef::sector(5))
            .unwrap()
            .contains_key(FIELD_COMMENT));
    }

    #[test]
    fn set_comment_creates_field_and_transaction() {
        let mut map = sample_map();
        let node = NodeInfo::from_sector(map.sector(5).unwrap());
        let mut undo = UndoLog::default();

        node.set_comment(&mut map, &mut undo, "Schalter hier");

        assert_eq!(undo.transaction_count(), 1);
        assert_eq!(undo.last_label(), Some("Set comment"));
        assert_eq!(node.comment(&map), "Schalter hier");
    }

    #[test]
    fn positions_resolve_per_kind() {
        let map = sample_map();
        let config = sample_config();

        let thing = NodeInfo::from_thing(map.thing(2).unwrap(), &config);
        assert_eq!(thing.position(&map), Vec2::new(96.0, 32.0));

        // Linedef von (0,0) nach (128,64): Rechteck-Mitte
        let linedef = NodeInfo::from_linedef(map.linedef(4).unwrap());
        assert_eq!(linedef.position(&map), Vec2::new(64.0, 32.0));

        let sector = NodeInfo::from_sector(map.sector(5).unwrap());
        assert_eq!(sector.position(&map), Vec2::new(64.0, 32.0));
    }

    #[test]
    fn tag_index_groups_and_sorts() {
        let map = sample_map();
        let config = sample_config();
        let index = TagIndex::build(&map, &config);

        assert_eq!(index.node_count(), 3);
        assert_eq!(index.nodes_of_kind(ElementKind::Sector).count(), 1);

        // ByTag: Tag 0 (Thing 2, Linedef 4) vor Tag 3 (Sektor 5)
        let by_tag: Vec<usize> = index
            .sorted_nodes(SortMode::ByTag)
            .iter()
            .map(|n| n.index())
            .collect();
        assert_eq!(by_tag, vec![2, 4, 5]);

        // ByAction: Action 0 zuerst, dann Thing 2 mit Action 7
        let by_action: Vec<usize> = index
            .sorted_nodes(SortMode::ByAction)
            .iter()
            .map(|n| n.index())
            .collect();
        assert_eq!(by_action, vec![5, 4, 2]);

        let rows = index.display_rows(&map, SortMode::ByIndex);
        assert_eq!(rows[0], "2: Action:7; Imp");
        assert_eq!(rows[1], "5: Tag:3; Sector");
    }
}
