//! Use-Cases für die Pfad-Bearbeitung der ausgewählten Entität.
//!
//! Jede Operation erstellt den Undo-Snapshot vor der Mutation und übernimmt ihn
//! nur bei Erfolg. Fehler der Engine werden als Warnung gemeldet, nie propagiert.

use crate::app::history::Snapshot;
use crate::app::AppState;
use glam::Vec2;
use scenario_path_engine::{
    AppendOutcome, EditError, EntityId, IdAllocator, InsertOutcome, Location, PathEditor,
    Router, WaypointId,
};
use std::sync::Arc;

/// Führt `f` auf dem Pfad-Editor der ausgewählten Entität aus.
fn with_selected_editor<T>(
    state: &mut AppState,
    f: impl FnOnce(&mut PathEditor, &dyn Router, &mut IdAllocator) -> Result<T, EditError>,
) -> Option<(EntityId, Result<T, EditError>)> {
    let entity_id = state.selection.entity?;
    if !state.entities.contains(entity_id) {
        return None;
    }
    let router = state.routing.router();
    let entity = Arc::make_mut(&mut state.entities).get_mut(entity_id)?;
    Some((entity_id, f(&mut entity.path, router, &mut state.ids)))
}

/// Meldet einen Bearbeitungsfehler als Warnung.
///
/// Nach einer Invariantenverletzung wird der Puffer aus den Wegpunkten neu aufgebaut.
pub(crate) fn report_edit_error(state: &mut AppState, entity: EntityId, err: EditError) {
    if matches!(
        err,
        EditError::InvariantViolation(_) | EditError::PathPoisoned(_)
    ) {
        let router = state.routing.router();
        if let Some(e) = Arc::make_mut(&mut state.entities).get_mut(entity) {
            if let Err(rebuild_err) = e.path.rebuild(router) {
                log::error!("Neuaufbau für {} fehlgeschlagen: {}", entity, rebuild_err);
            }
        }
    }
    state.warn(format!("{}: {}", entity, err));
}

/// Aktualisiert die Vorschau zum Zeiger. Fehler blenden nur die Vorschau aus.
pub fn preview_append(state: &mut AppState, world_pos: Vec2) {
    let result = with_selected_editor(state, |editor, router, ids| {
        editor.append(Location::new(world_pos), true, router, ids)
    });
    if let Some((entity, Err(err))) = result {
        log::debug!("Vorschau für {} verworfen: {}", entity, err);
    }
}

/// Zeigt den Geister-Marker auf dem fertigen Pfad.
pub fn hover_path(state: &mut AppState, world_pos: Vec2) {
    let _ = with_selected_editor(state, |editor, _, _| {
        editor.hover(world_pos);
        Ok(())
    });
}

/// Hängt am Pfadende an; der letzte neue Wegpunkt wird ausgewählt.
pub fn append_waypoint(state: &mut AppState, world_pos: Vec2) {
    let snap = Snapshot::from_state(state);
    let result = with_selected_editor(state, |editor, router, ids| {
        editor.append(Location::new(world_pos), false, router, ids)
    });
    match result {
        Some((_, Ok(AppendOutcome::Committed(created)))) => {
            state.history.record_snapshot(snap);
            state.selection.waypoint = created.last().copied();
            log::info!("{} Wegpunkt(e) angehängt", created.len());
        }
        Some((_, Ok(AppendOutcome::Previewed))) | None => {}
        Some((entity, Err(err))) => report_edit_error(state, entity, err),
    }
}

/// Klick auf den Pfad: fügt einen Wegpunkt ein oder wählt den getroffenen aus.
pub fn click_path(state: &mut AppState, buffer_index: usize) {
    let snap = Snapshot::from_state(state);
    let result = with_selected_editor(state, |editor, router, ids| {
        editor.insert_mid_path(buffer_index, router, ids)
    });
    match result {
        Some((_, Ok(InsertOutcome::Inserted(id)))) => {
            state.history.record_snapshot(snap);
            state.selection.waypoint = Some(id);
            log::info!("Wegpunkt {} bei Pufferindex {} eingefügt", id, buffer_index);
        }
        Some((_, Ok(InsertOutcome::Selected(id)))) => state.selection.waypoint = Some(id),
        Some((entity, Err(err))) => report_edit_error(state, entity, err),
        None => {}
    }
}

/// Wählt einen Wegpunkt der ausgewählten Entität aus.
pub fn select_waypoint(state: &mut AppState, waypoint: WaypointId) {
    let known = state
        .selection
        .entity
        .and_then(|id| state.entities.get(id))
        .is_some_and(|e| e.path.path().find(waypoint).is_some());
    if known {
        state.selection.waypoint = Some(waypoint);
    }
}

/// Beginnt einen Drag; der gesamte Drag ist ein Undo-Schritt.
pub fn begin_drag(state: &mut AppState, waypoint: WaypointId) {
    state.record_undo_snapshot();
    state.selection.waypoint = Some(waypoint);
    state.selection.dragging = Some(waypoint);
}

/// Verschiebt einen Wegpunkt an die (aufgelöste) Zeigerposition.
pub fn move_waypoint(state: &mut AppState, waypoint: WaypointId, world_pos: Vec2) {
    let in_drag = state.selection.dragging == Some(waypoint);
    let snap = Snapshot::from_state(state);
    let result = with_selected_editor(state, |editor, router, _| {
        let location = editor.resolve_target(Location::new(world_pos), router)?;
        let is_anchor = editor.path().anchor().map(|w| w.id) == Some(waypoint);
        editor.move_waypoint(waypoint, location, router)?;
        Ok(is_anchor.then_some(location))
    });
    match result {
        Some((entity, Ok(moved_anchor))) => {
            // Der Anker ist der Spawn der Entität.
            if let Some(location) = moved_anchor {
                if let Some(e) = Arc::make_mut(&mut state.entities).get_mut(entity) {
                    e.spawn = location;
                }
            }
            if !in_drag {
                state.history.record_snapshot(snap);
            }
        }
        Some((entity, Err(err))) if in_drag => {
            log::debug!("Drag von {} auf {}: {}", waypoint, entity, err);
            if matches!(
                err,
                EditError::InvariantViolation(_) | EditError::PathPoisoned(_)
            ) {
                report_edit_error(state, entity, err);
            }
        }
        Some((entity, Err(err))) => report_edit_error(state, entity, err),
        None => {}
    }
}

/// Beendet einen Drag.
pub fn end_drag(state: &mut AppState) {
    state.selection.dragging = None;
}

/// Löscht einen Wegpunkt; der Anker kann nicht gelöscht werden.
pub fn delete_waypoint(state: &mut AppState, waypoint: WaypointId) {
    let snap = Snapshot::from_state(state);
    let result = with_selected_editor(state, |editor, router, _| {
        editor.delete_waypoint(waypoint, router)
    });
    match result {
        Some((_, Ok(()))) => {
            state.history.record_snapshot(snap);
            if state.selection.waypoint == Some(waypoint) {
                state.selection.waypoint = None;
            }
            log::info!("Wegpunkt {} gelöscht", waypoint);
        }
        Some((entity, Err(err))) => report_edit_error(state, entity, err),
        None => {}
    }
}

/// Beendet das Zeichnen des ausgewählten Pfads.
pub fn finish_path(state: &mut AppState) {
    let snap = Snapshot::from_state(state);
    let result = with_selected_editor(state, |editor, _, _| {
        editor.finish();
        Ok(editor.path().len())
    });
    if let Some((entity, Ok(count))) = result {
        state.history.record_snapshot(snap);
        log::info!("Pfad von {} abgeschlossen ({} Wegpunkte)", entity, count);
    }
}
