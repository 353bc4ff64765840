//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use scenario_path_engine::{EditMode, PathEditor};

/// Pfad-Editor der ausgewählten Entität.
fn selected_editor(state: &AppState) -> Option<&PathEditor> {
    let id = state.selection.entity?;
    state.entities.get(id).map(|entity| &entity.path)
}

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PlaceEntityRequested {
            category,
            world_pos,
        } => vec![AppCommand::PlaceEntity {
            category,
            spawn: world_pos,
        }],
        AppIntent::EntitySelected { entity } => vec![AppCommand::SelectEntity { entity }],
        AppIntent::RemoveSelectedEntityRequested => state
            .selection
            .entity
            .map(|entity| vec![AppCommand::RemoveEntity { entity }])
            .unwrap_or_default(),
        AppIntent::CategoryChangeRequested { category } => state
            .selection
            .entity
            .map(|entity| vec![AppCommand::SetEntityCategory { entity, category }])
            .unwrap_or_default(),
        AppIntent::PointerMoved { world_pos } => match selected_editor(state).map(|e| e.mode()) {
            Some(EditMode::Building) => vec![AppCommand::PreviewAppend { world_pos }],
            Some(EditMode::Editing) => vec![AppCommand::HoverPath { world_pos }],
            None => vec![],
        },
        AppIntent::PointerClicked { world_pos } => {
            let Some(editor) = selected_editor(state) else {
                return vec![];
            };
            if let Some(waypoint) = editor.waypoint_at(world_pos) {
                return vec![AppCommand::SelectWaypoint { waypoint }];
            }
            if let Some(buffer_index) = editor.click_path(world_pos) {
                return vec![AppCommand::ClickPath { buffer_index }];
            }
            match editor.mode() {
                EditMode::Building => vec![AppCommand::AppendWaypoint { world_pos }],
                EditMode::Editing => vec![],
            }
        }
        AppIntent::PathClicked { buffer_index } => selected_editor(state)
            .map(|_| vec![AppCommand::ClickPath { buffer_index }])
            .unwrap_or_default(),
        AppIntent::WaypointDragStarted { world_pos } => selected_editor(state)
            .and_then(|editor| editor.waypoint_at(world_pos))
            .map(|waypoint| vec![AppCommand::BeginWaypointDrag { waypoint }])
            .unwrap_or_default(),
        AppIntent::WaypointDragged { world_pos } => state
            .selection
            .dragging
            .map(|waypoint| {
                vec![AppCommand::MoveWaypoint {
                    waypoint,
                    world_pos,
                }]
            })
            .unwrap_or_default(),
        AppIntent::WaypointDragEnded => {
            if state.selection.dragging.is_some() {
                vec![AppCommand::EndWaypointDrag]
            } else {
                vec![]
            }
        }
        AppIntent::DeleteSelectedWaypointRequested => state
            .selection
            .waypoint
            .map(|waypoint| vec![AppCommand::DeleteWaypoint { waypoint }])
            .unwrap_or_default(),
        AppIntent::FinishPathRequested => selected_editor(state)
            .map(|_| vec![AppCommand::FinishPath])
            .unwrap_or_default(),
        AppIntent::EntityMoved { world_pos } => state
            .selection
            .entity
            .map(|entity| vec![AppCommand::MoveEntity { entity, world_pos }])
            .unwrap_or_default(),
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::RoadGraphLoadRequested { path } => vec![AppCommand::LoadRoadGraph { path }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

#[cfg(test)]
mod tests;
