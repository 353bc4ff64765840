//! Export-Sicht auf fertige Pfade.

use super::entity::EntityCategory;
use super::AppState;
use anyhow::Context;
use scenario_path_engine::{ActionKind, EntityId, Location, TriggerCondition, WaypointId};
use serde::Serialize;

/// Ein exportierter Wegpunkt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedWaypoint {
    pub id: WaypointId,
    pub location: Location,
    pub action: ActionKind,
    pub triggers: Vec<TriggerCondition>,
}

/// Der fertige Pfad einer Entität.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedPath {
    pub entity: EntityId,
    pub name: String,
    pub category: EntityCategory,
    pub waypoints: Vec<ExportedWaypoint>,
}

/// Sammelt alle fertigen Pfade in Registry-Reihenfolge.
///
/// Pfade, die noch gezeichnet werden, leer oder gesperrt sind, fehlen.
pub fn export_finished_paths(state: &AppState) -> Vec<ExportedPath> {
    state
        .entities
        .iter()
        .filter_map(|entity| {
            let path = entity.path.finished_path()?;
            Some(ExportedPath {
                entity: entity.id,
                name: entity.name.clone(),
                category: entity.category,
                waypoints: path
                    .iter()
                    .map(|w| ExportedWaypoint {
                        id: w.id,
                        location: w.location,
                        action: w.action,
                        triggers: w.triggers.clone(),
                    })
                    .collect(),
            })
        })
        .collect()
}

/// Serialisiert die Export-Sicht als formatiertes JSON.
pub fn to_json(paths: &[ExportedPath]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(paths).context("Export konnte nicht serialisiert werden")
}
