use crate::app::entity::EntityCategory;
use glam::Vec2;
use scenario_path_engine::{EditorOptions, EntityId, WaypointId};
use std::path::PathBuf;

/// App-Commands: mutierende Schritte, die der Controller ausführt.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Entität platzieren; `spawn` ist die rohe Zeigerposition
    PlaceEntity {
        category: EntityCategory,
        spawn: Vec2,
    },
    /// Entität auswählen
    SelectEntity { entity: EntityId },
    /// Entität entfernen
    RemoveEntity { entity: EntityId },
    /// Kategorie (und damit Ignore-Graph-Modus) setzen
    SetEntityCategory {
        entity: EntityId,
        category: EntityCategory,
    },
    /// Vorschau für das Anhängen aktualisieren
    PreviewAppend { world_pos: Vec2 },
    /// Geister-Marker auf dem fertigen Pfad aktualisieren
    HoverPath { world_pos: Vec2 },
    /// Wegpunkt am Pfadende anhängen
    AppendWaypoint { world_pos: Vec2 },
    /// Klick auf den Pfad an einem Pufferindex
    ClickPath { buffer_index: usize },
    /// Wegpunkt auswählen
    SelectWaypoint { waypoint: WaypointId },
    /// Drag eines Wegpunkts beginnen (Undo-Snapshot)
    BeginWaypointDrag { waypoint: WaypointId },
    /// Wegpunkt verschieben
    MoveWaypoint {
        waypoint: WaypointId,
        world_pos: Vec2,
    },
    /// Drag beenden
    EndWaypointDrag,
    /// Wegpunkt löschen
    DeleteWaypoint { waypoint: WaypointId },
    /// Zeichnen beenden
    FinishPath,
    /// Entität (und damit den Anker) verschieben
    MoveEntity { entity: EntityId, world_pos: Vec2 },
    /// Letzte Aktion rückgängig machen
    Undo,
    /// Rückgängig gemachte Aktion wiederherstellen
    Redo,
    /// Straßengraph laden
    LoadRoadGraph { path: PathBuf },
    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
}
