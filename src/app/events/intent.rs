use crate::app::entity::EntityCategory;
use glam::Vec2;
use scenario_path_engine::{EditorOptions, EntityId};
use serde::Deserialize;
use std::path::PathBuf;

/// App-Intent Events.
/// Intents sind Eingaben aus UI, Replay-Skript oder System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "intent")]
pub enum AppIntent {
    /// Neue Entität an einer Weltposition platzieren
    PlaceEntityRequested {
        category: EntityCategory,
        world_pos: Vec2,
    },
    /// Entität für die Bearbeitung auswählen
    EntitySelected { entity: EntityId },
    /// Ausgewählte Entität entfernen
    RemoveSelectedEntityRequested,
    /// Kategorie der ausgewählten Entität ändern
    CategoryChangeRequested { category: EntityCategory },
    /// Zeiger bewegt (Vorschau bzw. Geister-Marker)
    PointerMoved { world_pos: Vec2 },
    /// Klick in den Viewport
    PointerClicked { world_pos: Vec2 },
    /// Klick auf den Pfad, bereits in einen Pufferindex übersetzt
    PathClicked { buffer_index: usize },
    /// Drag auf einem Wegpunkt-Marker gestartet
    WaypointDragStarted { world_pos: Vec2 },
    /// Drag-Update
    WaypointDragged { world_pos: Vec2 },
    /// Drag beendet
    WaypointDragEnded,
    /// Ausgewählten Wegpunkt löschen
    DeleteSelectedWaypointRequested,
    /// Zeichnen beenden (Building → Editing)
    FinishPathRequested,
    /// Ausgewählte Entität an eine neue Position verschieben
    EntityMoved { world_pos: Vec2 },
    /// Undo
    UndoRequested,
    /// Redo
    RedoRequested,
    /// Straßengraph aus Datei laden
    RoadGraphLoadRequested { path: PathBuf },
    /// Optionen wurden geändert
    OptionsChanged { options: EditorOptions },
}
