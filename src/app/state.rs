//! Application State: zentrale Datenhaltung der Session.

use super::entity::EntityRegistry;
use super::history::{EditHistory, Snapshot};
use super::CommandLog;
use scenario_path_engine::{
    EditorOptions, EntityId, IdAllocator, RoadGraphRouter, Router, StraightLineRouter, WaypointId,
};
use std::sync::Arc;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Aktuell bearbeitete Entität
    pub entity: Option<EntityId>,
    /// Ausgewählter Wegpunkt der Entität
    pub waypoint: Option<WaypointId>,
    /// Wegpunkt, der gerade gezogen wird
    pub dragging: Option<WaypointId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wählt eine Entität aus und verwirft die Wegpunkt-Auswahl.
    pub fn select_entity(&mut self, entity: Option<EntityId>) {
        self.entity = entity;
        self.waypoint = None;
        self.dragging = None;
    }
}

/// Routing-Kollaborateure: Straßengraph (falls geladen) und freies Routing.
#[derive(Debug, Clone)]
pub struct RoutingState {
    /// Router über dem geladenen Straßengraphen
    pub graph: Option<Arc<RoadGraphRouter>>,
    /// Fallback ohne Straßengraph
    pub free: StraightLineRouter,
}

impl RoutingState {
    /// Erstellt den Routing-Zustand ohne Straßengraph.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            graph: None,
            free: StraightLineRouter::new(options.free_sample_spacing),
        }
    }

    /// Aktiver Router: Straßengraph, sonst freies Routing.
    pub fn router(&self) -> &dyn Router {
        match &self.graph {
            Some(router) => router.as_ref(),
            None => &self.free,
        }
    }
}

/// Zentraler Anwendungszustand
pub struct AppState {
    /// Alle Entitäten (Arc für O(1)-Snapshots, Copy-on-Write bei Mutation)
    pub entities: Arc<EntityRegistry>,
    /// Routing-Kollaborateure
    pub routing: RoutingState,
    /// Selection-State
    pub selection: SelectionState,
    /// Session-weite ID-Vergabe für Entitäten und Wegpunkte
    pub ids: IdAllocator,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Letzte nicht-fatale Warnung für die Statusanzeige
    pub last_warning: Option<String>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            entities: Arc::new(EntityRegistry::new()),
            routing: RoutingState::new(&options),
            selection: SelectionState::new(),
            ids: IdAllocator::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            command_log: CommandLog::new(),
            options,
            last_warning: None,
        }
    }

    /// Anzahl der Entitäten (für Statusanzeige)
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Speichert einen Snapshot VOR einer Mutation.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Merkt eine Warnung für die Statusanzeige und loggt sie.
    pub fn warn(&mut self, message: String) {
        log::warn!("{}", message);
        self.last_warning = Some(message);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
