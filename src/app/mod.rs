//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod entity;
pub mod events;
pub mod export;
pub mod handlers;
pub mod history;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Session (Entitäten, Routing, Auswahl).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use entity::{EntityCategory, EntityRegistry, ScenarioEntity};
pub use events::{AppCommand, AppIntent};
pub use export::{export_finished_paths, ExportedPath, ExportedWaypoint};
pub use state::{AppState, RoutingState, SelectionState};
