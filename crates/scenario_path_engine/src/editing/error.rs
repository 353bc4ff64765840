//! Fehler-Taxonomie des Pfad-Editors.

use crate::core::WaypointId;
use crate::routing::RoutingError;
use thiserror::Error;

/// Grund, aus dem ein Ziel abgelehnt wurde.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTargetReason {
    /// Kein Graph-Knoten in Snap-Reichweite
    #[error("keine gültige Position in Reichweite")]
    OffGraph,
    /// An der Position liegt bereits ein Wegpunkt
    #[error("Position ist durch Wegpunkt {0} belegt")]
    OccupiedByWaypoint(WaypointId),
    /// Ziel liegt auf dem Spawn-Marker der eigenen Entität
    #[error("Position liegt auf dem Spawn-Marker")]
    OnSpawnMarker,
    /// Ziel liegt auf dem eigenen Pfad (Klick gehört zu `on_path_clicked`)
    #[error("Position liegt auf dem eigenen Pfad")]
    OnOwnPath,
    /// Teilstück hätte Länge null
    #[error("Teilstück hat keine Länge")]
    ZeroLength,
    /// Pufferindex außerhalb des Pfads
    #[error("Pufferindex {index} außerhalb (Länge {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// Wegpunkt gehört nicht zu diesem Pfad
    #[error("Wegpunkt {0} gehört nicht zu diesem Pfad")]
    UnknownWaypoint(WaypointId),
}

/// Fehler einer Editor-Operation.
///
/// Alle Varianten außer `InvariantViolation` lassen den Zustand unverändert.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// Snapping oder Hit-Test fehlgeschlagen, keine Änderung
    #[error("Ungültiges Ziel: {0}")]
    InvalidTarget(InvalidTargetReason),
    /// Pathfinder lieferte keinen Weg, Operation abgebrochen
    #[error("Kein Pfad gefunden: {0}")]
    NoPathFound(#[from] RoutingError),
    /// Der Anker darf nicht gelöscht werden
    #[error("Der Anker eines Pfads kann nicht gelöscht werden")]
    IllegalDeletion,
    /// Puffer/Ledger/Pfad sind inkonsistent; der Editor ist gesperrt
    #[error("Invariante verletzt: {0}")]
    InvariantViolation(String),
    /// Der Editor ist nach einer Invariantenverletzung gesperrt, bis `rebuild` läuft
    #[error("Pfad gesperrt bis zum Neuaufbau: {0}")]
    PathPoisoned(String),
}

impl From<InvalidTargetReason> for EditError {
    fn from(reason: InvalidTargetReason) -> Self {
        EditError::InvalidTarget(reason)
    }
}
