//! Logischer Wegpunkt eines Pfads.

use super::{Location, TriggerCondition, WaypointId};
use serde::{Deserialize, Serialize};

/// Aktion, die beim Erreichen eines Wegpunkts ausgeführt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActionKind {
    /// Zum Wegpunkt fahren/gehen
    #[default]
    MoveTo,
    /// Fahrspurwechsel (vom Pathfinder vorgegeben)
    LaneChange,
}

/// Ein Wegpunkt: Position, Aktion und Trigger-Bedingungen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Eindeutige ID
    pub id: WaypointId,
    /// Position des Wegpunkts
    pub location: Location,
    /// Auszuführende Aktion
    pub action: ActionKind,
    /// Bedingungen in Auswertungsreihenfolge
    pub triggers: Vec<TriggerCondition>,
}

impl Waypoint {
    /// Erstellt einen neuen Wegpunkt.
    pub fn new(
        id: WaypointId,
        location: Location,
        action: ActionKind,
        triggers: Vec<TriggerCondition>,
    ) -> Self {
        Self {
            id,
            location,
            action,
            triggers,
        }
    }
}
