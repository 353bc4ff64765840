//! Scenario Path Editor Library.
//! Application-Layer (Intents, Commands, Undo/Redo, Export) und Headless-Replay,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod replay;

pub use app::{
    export_finished_paths, AppCommand, AppController, AppIntent, AppState, EntityCategory,
    ExportedPath, ExportedWaypoint, ScenarioEntity,
};
pub use replay::ReplayScript;
pub use scenario_path_engine::{
    EditError, EditMode, EditorOptions, EntityId, Location, PathEditor, RoadGraph, WaypointId,
};
