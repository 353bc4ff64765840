//! Handler für Entitäten (Platzieren, Auswahl, Kategorie, Verschieben).

use crate::app::entity::EntityCategory;
use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;
use scenario_path_engine::EntityId;

/// Platziert eine neue Entität an der Zeigerposition.
pub fn place(state: &mut AppState, category: EntityCategory, spawn: Vec2) {
    use_cases::entities::place_entity(state, category, spawn);
}

/// Wählt eine Entität aus.
pub fn select(state: &mut AppState, entity: EntityId) {
    use_cases::entities::select_entity(state, entity);
}

/// Entfernt eine Entität.
pub fn remove(state: &mut AppState, entity: EntityId) {
    use_cases::entities::remove_entity(state, entity);
}

/// Setzt die Kategorie einer Entität.
pub fn set_category(state: &mut AppState, entity: EntityId, category: EntityCategory) {
    use_cases::entities::set_category(state, entity, category);
}

/// Verschiebt eine Entität samt Pfad-Anker.
pub fn move_to(state: &mut AppState, entity: EntityId, world_pos: Vec2) {
    use_cases::entities::move_entity(state, entity, world_pos);
}
