//! WAD Map Editor (Headless-Demo).
//!
//! Baut eine kleine eingebaute Map, fährt eine geskriptete
//! Maus-Session durch alle vier Editier-Modi und druckt anschließend
//! die Tag-Explorer-Liste. Das echte GUI-Frontend bindet die Library
//! über `RenderSurface` und `UiShell` an.

use glam::Vec2;

use wad_map_editor::{
    EditContext, EditorOptions, GameConfiguration, LinedefActionCategory, LinedefActionInfo,
    Linedef, MapEditor, MapFormat, MapSet, ModeKind, MouseButton, NodeInfo, Sector,
    SharedHeadlessShell, SharedRecordingSurface, SortMode, TagIndex, Thing, ThingTypeInfo,
    UndoLog, Vertex,
};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("WAD Map Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut map = demo_map();
    let config = demo_config();

    // Kommentar über den Tag-Explorer setzen, inklusive Undo-Transaktion
    let mut undo = UndoLog::default();
    if let Some(sector) = map.sector(0) {
        let node = NodeInfo::from_sector(sector);
        node.set_comment(&mut map, &mut undo, "Startraum");
    }

    let surface = SharedRecordingSurface::new();
    let shell = SharedHeadlessShell::new();
    let ctx = EditContext::new(
        map,
        config.clone(),
        Box::new(surface.clone()),
        Box::new(shell.clone()),
        EditorOptions::default(),
    );
    let mut editor = MapEditor::new(ctx, ModeKind::Vertices);

    run_scripted_session(&mut editor);

    println!(
        "Session: {} Render-Batches, {} Edit-Dialog(e), Modus: {}",
        surface.batch_count(),
        shell.edit_dialog_count(),
        editor.mode_kind()
    );

    println!("\nTag-Explorer (nach Tag sortiert):");
    let tag_index = TagIndex::build(&editor.ctx().map, &config);
    for row in tag_index.display_rows(&editor.ctx().map, SortMode::ByTag) {
        println!("  {row}");
    }

    Ok(())
}

/// Fährt in jedem Modus einmal Hover, Selektion und Edit-Dialog durch.
fn run_scripted_session(editor: &mut MapEditor) {
    let hover_points = [
        (ModeKind::Vertices, Vec2::new(2.0, 2.0)),
        (ModeKind::Linedefs, Vec2::new(64.0, 2.0)),
        (ModeKind::Sectors, Vec2::new(64.0, 8.0)),
        (ModeKind::Things, Vec2::new(34.0, 32.0)),
    ];

    for (mode, point) in hover_points {
        editor.change_mode(mode);
        editor.mouse_move(point);
        editor.mouse_down(MouseButton::Select);
        editor.mouse_down(MouseButton::Edit);
        editor.mouse_up(MouseButton::Edit);
        editor.mouse_leave();
    }
}

/// Rechteckiger Startraum (128x128) mit Schalter-Linedef, getaggtem
/// Sektor und zwei Things.
fn demo_map() -> MapSet {
    let mut map = MapSet::new(MapFormat::Udmf);

    let mut room = Sector::new(0);
    room.tag = 3;
    map.add_sector(room);

    map.add_vertex(Vertex::new(0, Vec2::new(0.0, 0.0)));
    map.add_vertex(Vertex::new(1, Vec2::new(128.0, 0.0)));
    map.add_vertex(Vertex::new(2, Vec2::new(128.0, 128.0)));
    map.add_vertex(Vertex::new(3, Vec2::new(0.0, 128.0)));

    map.add_linedef(Linedef::with_front(0, 0, 3, 0));
    map.add_linedef(Linedef::with_front(1, 3, 2, 0));
    map.add_linedef(Linedef::with_front(2, 2, 1, 0));
    let mut switch = Linedef::with_front(3, 1, 0, 0);
    switch.action = 11;
    switch.tag = 3;
    map.add_linedef(switch);

    map.add_thing(Thing::new(0, Vec2::new(32.0, 32.0), 1));
    map.add_thing(Thing::new(1, Vec2::new(96.0, 96.0), 3001));

    map
}

fn demo_config() -> GameConfiguration {
    let mut config = GameConfiguration::new();
    config.add_thing_type(ThingTypeInfo::new(1, "Player 1 start"));
    config.add_thing_type(ThingTypeInfo::new(3001, "Imp"));

    let mut exits = LinedefActionCategory::new("Exits");
    exits.add(LinedefActionInfo::new(11, "S1 Exit level"));
    config.add_action_category(exits);

    config
}
