//! Use-Cases für Entitäten: platzieren, auswählen, entfernen, umkategorisieren, verschieben.

use crate::app::entity::{EntityCategory, ScenarioEntity};
use crate::app::history::Snapshot;
use crate::app::AppState;
use glam::Vec2;
use scenario_path_engine::{EntityId, Location, PathEditor, PathRules, SpawnMarker};
use std::sync::Arc;

/// Platziert eine neue Entität und legt den Anker ihres Pfads auf den Spawn.
///
/// Straßengebundene Kategorien werden auf den nächsten Graph-Knoten gesnappt;
/// ohne Knoten in Reichweite wird nichts platziert.
pub fn place_entity(state: &mut AppState, category: EntityCategory, spawn: Vec2) {
    let raw = Location::new(spawn);
    let ignore_graph = category.ignores_road_graph();
    let router = state.routing.router();

    let location = if ignore_graph {
        raw
    } else {
        match router.resolve(raw) {
            Some(location) => location,
            None => {
                state.warn(format!(
                    "{} nicht platzierbar: kein Straßenknoten bei ({:.1}, {:.1})",
                    category.label(),
                    spawn.x,
                    spawn.y
                ));
                return;
            }
        }
    };

    let mut path = PathEditor::new(
        SpawnMarker::new(location.position, state.options.spawn_marker_radius),
        ignore_graph,
        PathRules::from_options(&state.options),
    );
    let mut ids = state.ids.clone();
    let id: EntityId = ids.allocate();
    if let Err(err) = path.append(location, false, router, &mut ids) {
        state.warn(format!("Anker für {} nicht setzbar: {}", category.label(), err));
        return;
    }
    state.ids = ids;

    state.record_undo_snapshot();
    let entity = ScenarioEntity {
        id,
        name: format!("{} {}", category.label(), id.0),
        category,
        spawn: location,
        path,
    };
    log::info!("{} platziert bei {:?}", entity.name, location.position);
    Arc::make_mut(&mut state.entities).insert(entity);
    state.selection.select_entity(Some(id));
}

/// Wählt eine Entität aus und entfernt die Vorschau der zuvor ausgewählten.
pub fn select_entity(state: &mut AppState, entity: EntityId) {
    if !state.entities.contains(entity) {
        log::debug!("Auswahl ignoriert: {} existiert nicht", entity);
        return;
    }
    if let Some(previous) = state.selection.entity.filter(|&p| p != entity) {
        if let Some(prev) = Arc::make_mut(&mut state.entities).get_mut(previous) {
            prev.path.clear_preview();
        }
    }
    state.selection.select_entity(Some(entity));
}

/// Entfernt eine Entität samt Pfad.
pub fn remove_entity(state: &mut AppState, entity: EntityId) {
    if !state.entities.contains(entity) {
        return;
    }
    state.record_undo_snapshot();
    if let Some(removed) = Arc::make_mut(&mut state.entities).remove(entity) {
        log::info!("{} entfernt", removed.name);
    }
    if state.selection.entity == Some(entity) {
        state.selection.select_entity(None);
    }
}

/// Ändert die Kategorie; künftige Teilstücke folgen dem neuen Ignore-Graph-Modus.
pub fn set_category(state: &mut AppState, entity: EntityId, category: EntityCategory) {
    let unchanged = state
        .entities
        .get(entity)
        .map(|e| e.category == category)
        .unwrap_or(true);
    if unchanged {
        return;
    }
    state.record_undo_snapshot();
    if let Some(e) = Arc::make_mut(&mut state.entities).get_mut(entity) {
        e.category = category;
        e.name = format!("{} {}", category.label(), entity.0);
        e.path.set_ignore_graph(category.ignores_road_graph());
        log::info!("{} → Kategorie {:?}", entity, category);
    }
}

/// Verschiebt eine Entität; der Anker ihres Pfads folgt dem Spawn.
pub fn move_entity(state: &mut AppState, entity: EntityId, world_pos: Vec2) {
    let Some(current) = state.entities.get(entity) else {
        return;
    };
    let router = state.routing.router();
    let location = match current.path.resolve_target(Location::new(world_pos), router) {
        Ok(location) => location,
        Err(err) => {
            state.warn(format!("{} nicht verschiebbar: {}", entity, err));
            return;
        }
    };

    let snap = Snapshot::from_state(state);
    let router = state.routing.router();
    let Some(e) = Arc::make_mut(&mut state.entities).get_mut(entity) else {
        return;
    };
    match e.path.move_anchor(location, router) {
        Ok(()) => {
            e.spawn = location;
            state.history.record_snapshot(snap);
        }
        Err(err) => super::path_editing::report_edit_error(state, entity, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_entity_commits_anchor_and_selects() {
        let mut state = AppState::new();

        place_entity(&mut state, EntityCategory::Pedestrian, Vec2::new(3.0, 4.0));

        let entity = state.entities.iter().next().expect("Entität erwartet");
        assert_eq!(entity.name, format!("Pedestrian {}", entity.id.0));
        assert_eq!(entity.path.path().len(), 1);
        assert_eq!(entity.path.buffer().len(), 1);
        assert_eq!(state.selection.entity, Some(entity.id));
        assert!(state.can_undo());
    }

    #[test]
    fn set_category_toggles_ignore_graph() {
        let mut state = AppState::new();
        place_entity(&mut state, EntityCategory::Car, Vec2::ZERO);
        let id = state.selection.entity.expect("ausgewählt");

        set_category(&mut state, id, EntityCategory::Bike);

        let entity = state.entities.get(id).expect("vorhanden");
        assert!(entity.path.ignore_graph());
        assert!(entity.name.starts_with("Bike"));
    }

    #[test]
    fn remove_entity_clears_selection() {
        let mut state = AppState::new();
        place_entity(&mut state, EntityCategory::Car, Vec2::ZERO);
        let id = state.selection.entity.expect("ausgewählt");

        remove_entity(&mut state, id);

        assert!(state.entities.is_empty());
        assert_eq!(state.selection.entity, None);
    }
}
