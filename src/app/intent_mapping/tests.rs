use crate::app::{AppCommand, AppController, AppIntent, AppState, EntityCategory};
use glam::Vec2;

use super::map_intent_to_commands;

/// Fußgänger bei (0, 0) mit einem Teilstück bis (10, 0) (freies Routing, 1 m Abstand).
fn state_with_pedestrian_path() -> AppState {
    let mut state = AppState::new();
    let mut controller = AppController::new();
    for intent in [
        AppIntent::PlaceEntityRequested {
            category: EntityCategory::Pedestrian,
            world_pos: Vec2::ZERO,
        },
        AppIntent::PointerClicked {
            world_pos: Vec2::new(10.0, 0.0),
        },
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Intent sollte verarbeitet werden");
    }
    state
}

#[test]
fn undo_requested_maps_to_undo() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::UndoRequested);

    assert_eq!(commands, vec![AppCommand::Undo]);
}

#[test]
fn pointer_intents_without_selection_map_to_nothing() {
    let state = AppState::new();
    let world_pos = Vec2::new(1.0, 1.0);

    assert!(map_intent_to_commands(&state, AppIntent::PointerMoved { world_pos }).is_empty());
    assert!(map_intent_to_commands(&state, AppIntent::PointerClicked { world_pos }).is_empty());
    assert!(map_intent_to_commands(&state, AppIntent::DeleteSelectedWaypointRequested).is_empty());
}

#[test]
fn pointer_moved_previews_while_building() {
    let state = state_with_pedestrian_path();
    let world_pos = Vec2::new(15.0, 5.0);

    let commands = map_intent_to_commands(&state, AppIntent::PointerMoved { world_pos });

    assert_eq!(commands, vec![AppCommand::PreviewAppend { world_pos }]);
}

#[test]
fn click_on_free_space_appends_while_building() {
    let state = state_with_pedestrian_path();
    let world_pos = Vec2::new(20.0, 0.0);

    let commands = map_intent_to_commands(&state, AppIntent::PointerClicked { world_pos });

    assert_eq!(commands, vec![AppCommand::AppendWaypoint { world_pos }]);
}

#[test]
fn click_on_own_outline_becomes_path_click() {
    let state = state_with_pedestrian_path();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerClicked {
            world_pos: Vec2::new(5.1, 0.2),
        },
    );

    assert_eq!(commands, vec![AppCommand::ClickPath { buffer_index: 5 }]);
}

#[test]
fn click_on_marker_selects_waypoint() {
    let state = state_with_pedestrian_path();
    let entity = state.selection.entity.expect("Entität ausgewählt");
    let last = state
        .entities
        .get(entity)
        .and_then(|e| e.path.path().last())
        .map(|w| w.id)
        .expect("Wegpunkt vorhanden");

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerClicked {
            world_pos: Vec2::new(10.3, 0.0),
        },
    );

    assert_eq!(commands, vec![AppCommand::SelectWaypoint { waypoint: last }]);
}

#[test]
fn click_on_free_space_does_nothing_after_finish() {
    let mut state = state_with_pedestrian_path();
    AppController::new()
        .handle_intent(&mut state, AppIntent::FinishPathRequested)
        .expect("Finish");

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerClicked {
            world_pos: Vec2::new(30.0, 30.0),
        },
    );
    let moved = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            world_pos: Vec2::new(4.0, 0.0),
        },
    );

    assert!(commands.is_empty());
    assert_eq!(
        moved,
        vec![AppCommand::HoverPath {
            world_pos: Vec2::new(4.0, 0.0)
        }]
    );
}

#[test]
fn drag_only_starts_on_a_marker() {
    let state = state_with_pedestrian_path();

    let miss = map_intent_to_commands(
        &state,
        AppIntent::WaypointDragStarted {
            world_pos: Vec2::new(5.0, 0.0),
        },
    );
    let hit = map_intent_to_commands(
        &state,
        AppIntent::WaypointDragStarted {
            world_pos: Vec2::new(10.0, 0.0),
        },
    );

    assert!(miss.is_empty());
    assert!(matches!(hit.as_slice(), [AppCommand::BeginWaypointDrag { .. }]));
}
