//! Handler für die Pfad-Bearbeitung der ausgewählten Entität.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;
use scenario_path_engine::WaypointId;

pub fn preview_append(state: &mut AppState, world_pos: Vec2) {
    use_cases::path_editing::preview_append(state, world_pos);
}

pub fn hover(state: &mut AppState, world_pos: Vec2) {
    use_cases::path_editing::hover_path(state, world_pos);
}

/// Hängt einen Wegpunkt am Pfadende an.
pub fn append(state: &mut AppState, world_pos: Vec2) {
    use_cases::path_editing::append_waypoint(state, world_pos);
}

/// Verarbeitet einen Klick auf den Pfad.
pub fn click_path(state: &mut AppState, buffer_index: usize) {
    use_cases::path_editing::click_path(state, buffer_index);
}

pub fn select_waypoint(state: &mut AppState, waypoint: WaypointId) {
    use_cases::path_editing::select_waypoint(state, waypoint);
}

/// Startet den Drag eines Wegpunkts.
pub fn begin_drag(state: &mut AppState, waypoint: WaypointId) {
    use_cases::path_editing::begin_drag(state, waypoint);
}

/// Verschiebt einen Wegpunkt.
pub fn move_waypoint(state: &mut AppState, waypoint: WaypointId, world_pos: Vec2) {
    use_cases::path_editing::move_waypoint(state, waypoint, world_pos);
}

pub fn end_drag(state: &mut AppState) {
    use_cases::path_editing::end_drag(state);
}

/// Löscht einen Wegpunkt.
pub fn delete_waypoint(state: &mut AppState, waypoint: WaypointId) {
    use_cases::path_editing::delete_waypoint(state, waypoint);
}

/// Schließt den Pfad ab.
pub fn finish(state: &mut AppState) {
    use_cases::path_editing::finish_path(state);
}
