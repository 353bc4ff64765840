use glam::Vec2;
use scenario_path_editor::app::export;
use scenario_path_editor::{
    AppCommand, AppController, AppIntent, AppState, EntityCategory, EntityId, ReplayScript,
};
use scenario_path_engine::{ActionKind, EditorOptions, TriggerKind};
use std::path::PathBuf;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn run(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

/// State mit geladenem Testgraphen.
fn state_with_graph() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    run(
        &mut controller,
        &mut state,
        AppIntent::RoadGraphLoadRequested {
            path: fixture_dir().join("simple_graph.json"),
        },
    );
    (controller, state)
}

fn selected(state: &AppState) -> EntityId {
    state.selection.entity.expect("Entität sollte ausgewählt sein")
}

fn positions(state: &AppState) -> Vec<Vec2> {
    let entity = state.entities.get(selected(state)).expect("Entität vorhanden");
    entity.path.path().iter().map(|w| w.location.position).collect()
}

#[test]
fn test_place_entity_logs_command_and_snaps_spawn() {
    let (mut controller, mut state) = state_with_graph();

    run(
        &mut controller,
        &mut state,
        AppIntent::PlaceEntityRequested {
            category: EntityCategory::Car,
            world_pos: Vec2::new(0.5, 0.5),
        },
    );

    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::PlaceEntity { category, .. } => assert_eq!(*category, EntityCategory::Car),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }

    let entity = state.entities.get(selected(&state)).expect("Entität vorhanden");
    assert_eq!(entity.spawn.position, Vec2::ZERO);
    assert_eq!(positions(&state), vec![Vec2::ZERO]);
}

#[test]
fn test_car_off_graph_is_not_placed() {
    let (mut controller, mut state) = state_with_graph();

    run(
        &mut controller,
        &mut state,
        AppIntent::PlaceEntityRequested {
            category: EntityCategory::Car,
            world_pos: Vec2::new(50.0, 50.0),
        },
    );

    assert_eq!(state.entity_count(), 0);
    assert!(state.last_warning.is_some());
    assert!(!state.can_undo());
}

#[test]
fn test_pedestrian_ignores_graph() {
    let (mut controller, mut state) = state_with_graph();

    run(
        &mut controller,
        &mut state,
        AppIntent::PlaceEntityRequested {
            category: EntityCategory::Pedestrian,
            world_pos: Vec2::new(50.0, 50.0),
        },
    );
    run(
        &mut controller,
        &mut state,
        AppIntent::PointerClicked {
            world_pos: Vec2::new(60.0, 50.0),
        },
    );

    let entity = state.entities.get(selected(&state)).expect("Entität vorhanden");
    assert_eq!(entity.path.path().len(), 2);
    assert_eq!(entity.path.buffer().len(), 11);
}

#[test]
fn test_append_follows_graph_and_sets_distance_trigger() {
    let (mut controller, mut state) = state_with_graph();
    run(
        &mut controller,
        &mut state,
        AppIntent::PlaceEntityRequested {
            category: EntityCategory::Car,
            world_pos: Vec2::ZERO,
        },
    );

    run(
        &mut controller,
        &mut state,
        AppIntent::PointerClicked {
            world_pos: Vec2::new(29.5, 0.2),
        },
    );

    let entity = state.entities.get(selected(&state)).expect("Entität vorhanden");
    assert_eq!(positions(&state), vec![Vec2::ZERO, Vec2::new(30.0, 0.0)]);
    assert_eq!(entity.path.buffer().len(), 4);
    assert_eq!(entity.path.ledger().run(1), Some(3));

    let last = entity.path.path().last().expect("Wegpunkt vorhanden");
    assert_eq!(state.selection.waypoint, Some(last.id));
    match &last.triggers[..] {
        [trigger] => match &trigger.kind {
            TriggerKind::Distance { value, position, .. } => {
                assert_eq!(*value, 20.0);
                assert_eq!(position.position, Vec2::ZERO);
            }
            other => panic!("Unerwarteter Trigger: {other:?}"),
        },
        other => panic!("Genau ein Trigger erwartet: {other:?}"),
    }
}

#[test]
fn test_lane_change_edges_create_lane_change_waypoints() {
    let (mut controller, mut state) = state_with_graph();
    run(
        &mut controller,
        &mut state,
        AppIntent::PlaceEntityRequested {
            category: EntityCategory::Car,
            world_pos: Vec2::ZERO,
        },
    );

    run(
        &mut controller,
        &mut state,
        AppIntent::PointerClicked {
            world_pos: Vec2::new(30.0, 4.2),
        },
    );

    let entity = state.entities.get(selected(&state)).expect("Entität vorhanden");
    let actions: Vec<ActionKind> = entity.path.path().iter().map(|w| w.action).collect();
    assert_eq!(
        actions,
        vec![
            ActionKind::MoveTo,
            ActionKind::LaneChange,
            ActionKind::LaneChange,
            ActionKind::MoveTo
        ]
    );
    assert_eq!(entity.path.buffer().len(), 4);
}

#[test]
fn test_unreachable_target_warns_and_keeps_path() {
    let (mut controller, mut state) = state_with_graph();
    run(
        &mut controller,
        &mut state,
        AppIntent::PlaceEntityRequested {
            category: EntityCategory::Car,
            world_pos: Vec2::new(30.0, 4.0),
        },
    );
    state.last_warning = None;

    run(
        &mut controller,
        &mut state,
        AppIntent::PointerClicked {
            world_pos: Vec2::ZERO,
        },
    );

    assert_eq!(positions(&state), vec![Vec2::new(30.0, 4.0)]);
    assert!(state.last_warning.is_some());
    assert_eq!(state.history.undo_depth(), 1);
}

#[test]
fn test_undo_and_redo_restore_paths() {
    let (mut controller, mut state) = state_with_graph();
    run(
        &mut controller,
        &mut state,
        AppIntent::PlaceEntityRequested {
            category: EntityCategory::Car,
            world_pos: Vec2::ZERO,
        },
    );
    run(
        &mut controller,
        &mut state,
        AppIntent::PointerClicked {
            world_pos: Vec2::new(30.0, 0.0),
        },
    );

    run(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(positions(&state), vec![Vec2::ZERO]);
    assert!(state.can_redo());

    run(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(positions(&state), vec![Vec2::ZERO, Vec2::new(30.0, 0.0)]);
}

#[test]
fn test_drag_is_a_single_undo_step() {
    let (mut controller, mut state) = state_with_graph();
    for intent in [
        AppIntent::PlaceEntityRequested {
            category: EntityCategory::Car,
            world_pos: Vec2::ZERO,
        },
        AppIntent::PointerClicked {
            world_pos: Vec2::new(30.0, 0.0),
        },
        AppIntent::WaypointDragStarted {
            world_pos: Vec2::new(30.0, 0.0),
        },
        AppIntent::WaypointDragged {
            world_pos: Vec2::new(20.3, 0.1),
        },
        AppIntent::WaypointDragged {
            world_pos: Vec2::new(10.2, 0.0),
        },
        AppIntent::WaypointDragEnded,
    ] {
        run(&mut controller, &mut state, intent);
    }

    assert_eq!(positions(&state), vec![Vec2::ZERO, Vec2::new(10.0, 0.0)]);
    assert_eq!(state.selection.dragging, None);

    run(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(positions(&state), vec![Vec2::ZERO, Vec2::new(30.0, 0.0)]);
    let entity = state.entities.get(selected(&state)).expect("Entität vorhanden");
    assert_eq!(entity.path.buffer().len(), 4);
}

#[test]
fn test_dragging_anchor_moves_entity_spawn() {
    let (mut controller, mut state) = state_with_graph();
    for intent in [
        AppIntent::PlaceEntityRequested {
            category: EntityCategory::Pedestrian,
            world_pos: Vec2::ZERO,
        },
        AppIntent::PointerClicked {
            world_pos: Vec2::new(10.0, 0.0),
        },
        AppIntent::FinishPathRequested,
        AppIntent::WaypointDragStarted {
            world_pos: Vec2::ZERO,
        },
        AppIntent::WaypointDragged {
            world_pos: Vec2::new(0.0, 5.0),
        },
        AppIntent::WaypointDragEnded,
    ] {
        run(&mut controller, &mut state, intent);
    }

    let moved = Vec2::new(0.0, 5.0);
    let entity = state.entities.get(selected(&state)).expect("Entität vorhanden");
    assert_eq!(positions(&state), vec![moved, Vec2::new(10.0, 0.0)]);
    assert_eq!(entity.spawn.position, moved);
    assert_eq!(entity.path.spawn().position, moved);
    assert_eq!(entity.path.buffer().get(0).map(|p| p.position), Some(moved));

    run(&mut controller, &mut state, AppIntent::UndoRequested);
    let entity = state.entities.get(selected(&state)).expect("Entität vorhanden");
    assert_eq!(entity.spawn.position, Vec2::ZERO);
    assert_eq!(entity.path.spawn().position, Vec2::ZERO);
}

#[test]
fn test_anchor_cannot_be_deleted() {
    let (mut controller, mut state) = state_with_graph();
    for intent in [
        AppIntent::PlaceEntityRequested {
            category: EntityCategory::Car,
            world_pos: Vec2::ZERO,
        },
        AppIntent::PointerClicked {
            world_pos: Vec2::new(30.0, 0.0),
        },
        AppIntent::PointerClicked {
            world_pos: Vec2::ZERO,
        },
        AppIntent::DeleteSelectedWaypointRequested,
    ] {
        run(&mut controller, &mut state, intent);
    }
    assert_eq!(positions(&state).len(), 2);
    assert!(state.last_warning.is_some());

    run(
        &mut controller,
        &mut state,
        AppIntent::PointerClicked {
            world_pos: Vec2::new(30.0, 0.0),
        },
    );
    run(
        &mut controller,
        &mut state,
        AppIntent::DeleteSelectedWaypointRequested,
    );

    assert_eq!(positions(&state), vec![Vec2::ZERO]);
    assert_eq!(state.selection.waypoint, None);
}

#[test]
fn test_path_click_inserts_waypoint_on_graph() {
    let (mut controller, mut state) = state_with_graph();
    for intent in [
        AppIntent::PlaceEntityRequested {
            category: EntityCategory::Car,
            world_pos: Vec2::ZERO,
        },
        AppIntent::PointerClicked {
            world_pos: Vec2::new(30.0, 0.0),
        },
        AppIntent::PointerClicked {
            world_pos: Vec2::new(20.0, 0.3),
        },
    ] {
        run(&mut controller, &mut state, intent);
    }

    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::ClickPath { buffer_index: 2 })
    ));
    assert_eq!(
        positions(&state),
        vec![Vec2::ZERO, Vec2::new(20.0, 0.0), Vec2::new(30.0, 0.0)]
    );
    let entity = state.entities.get(selected(&state)).expect("Entität vorhanden");
    let runs: Vec<usize> = entity.path.ledger().entries().iter().map(|e| e.run_length).collect();
    assert_eq!(runs, vec![1, 2, 1]);
}

#[test]
fn test_export_contains_only_finished_paths() {
    let (mut controller, mut state) = state_with_graph();
    for intent in [
        AppIntent::PlaceEntityRequested {
            category: EntityCategory::Car,
            world_pos: Vec2::ZERO,
        },
        AppIntent::PointerClicked {
            world_pos: Vec2::new(30.0, 0.0),
        },
        AppIntent::FinishPathRequested,
        AppIntent::PlaceEntityRequested {
            category: EntityCategory::Bike,
            world_pos: Vec2::new(0.0, 20.0),
        },
    ] {
        run(&mut controller, &mut state, intent);
    }

    let paths = export::export_finished_paths(&state);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].category, EntityCategory::Car);
    assert_eq!(paths[0].waypoints.len(), 2);
    assert!(paths[0].waypoints[0].triggers.is_empty());

    let json = export::to_json(&paths).expect("Export serialisierbar");
    let value: serde_json::Value = serde_json::from_str(&json).expect("gültiges JSON");
    assert_eq!(value[0]["waypoints"][1]["triggers"][0]["kind"]["type"], "Distance");
}

#[test]
fn test_replay_script_runs_against_fixture_graph() {
    let script = ReplayScript::from_json(
        r#"{
            "road_graph": "simple_graph.json",
            "intents": [
                { "intent": "PlaceEntityRequested", "category": "Car", "world_pos": [0.0, 0.0] },
                { "intent": "PointerMoved", "world_pos": [15.0, 0.5] },
                { "intent": "PointerClicked", "world_pos": [30.0, 4.0] },
                { "intent": "FinishPathRequested" }
            ]
        }"#,
    )
    .expect("gültiges Skript");

    let state = script
        .run(&fixture_dir(), EditorOptions::default())
        .expect("Replay sollte durchlaufen");

    let paths = export::export_finished_paths(&state);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].waypoints.len(), 4);
}
