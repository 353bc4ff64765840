//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Intents und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Entitäten ===
            AppCommand::PlaceEntity { category, spawn } => {
                handlers::entity::place(state, category, spawn)
            }
            AppCommand::SelectEntity { entity } => handlers::entity::select(state, entity),
            AppCommand::RemoveEntity { entity } => handlers::entity::remove(state, entity),
            AppCommand::SetEntityCategory { entity, category } => {
                handlers::entity::set_category(state, entity, category)
            }
            AppCommand::MoveEntity { entity, world_pos } => {
                handlers::entity::move_to(state, entity, world_pos)
            }

            // === Pfad ===
            AppCommand::PreviewAppend { world_pos } => {
                handlers::path::preview_append(state, world_pos)
            }
            AppCommand::HoverPath { world_pos } => handlers::path::hover(state, world_pos),
            AppCommand::AppendWaypoint { world_pos } => handlers::path::append(state, world_pos),
            AppCommand::ClickPath { buffer_index } => {
                handlers::path::click_path(state, buffer_index)
            }
            AppCommand::SelectWaypoint { waypoint } => {
                handlers::path::select_waypoint(state, waypoint)
            }
            AppCommand::BeginWaypointDrag { waypoint } => {
                handlers::path::begin_drag(state, waypoint)
            }
            AppCommand::MoveWaypoint {
                waypoint,
                world_pos,
            } => handlers::path::move_waypoint(state, waypoint, world_pos),
            AppCommand::EndWaypointDrag => handlers::path::end_drag(state),
            AppCommand::DeleteWaypoint { waypoint } => {
                handlers::path::delete_waypoint(state, waypoint)
            }
            AppCommand::FinishPath => handlers::path::finish(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Straßengraph & Optionen ===
            AppCommand::LoadRoadGraph { path } => handlers::road_graph::load(state, path)?,
            AppCommand::ApplyOptions { options } => {
                handlers::road_graph::apply_options(state, options)
            }
        }

        Ok(())
    }
}
