//! Pfad-Editor: Anhängen, Einfügen, Verschieben und Löschen von Wegpunkten.
//!
//! Pfad, Segment-Ledger und Geometrie-Puffer werden in jeder Operation
//! gemeinsam aktualisiert. Pathfinder-Aufrufe werden vor jeder Mutation
//! ausgeführt; schlägt einer fehl, bleibt der Zustand unverändert.

mod append;
mod error;
mod splice;
mod state;


pub use error::{EditError, InvalidTargetReason};
pub use state::{PathEditor, PathPreview};

use crate::core::WaypointId;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Zustand der Pfad-Bearbeitung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Pfad wird gezeichnet (Vorschau + Klick hängt an)
    #[default]
    Building,
    /// Pfad ist fertig; Wegpunkte werden ausgewählt, verschoben, gelöscht
    Editing,
}

/// Ergebnis von [`PathEditor::append`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Nur die Vorschau wurde aktualisiert
    Previewed,
    /// Neue Wegpunkte in Pfadreihenfolge (inkl. Spurwechsel-Wegpunkte)
    Committed(Vec<WaypointId>),
}

/// Ergebnis von [`PathEditor::insert_mid_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Neuer Wegpunkt wurde eingefügt
    Inserted(WaypointId),
    /// Klick lag auf einem bestehenden Wegpunkt, der ausgewählt wird
    Selected(WaypointId),
}

/// Geometrische Regeln eines Editors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathRules {
    /// Radius der Wegpunkt-Marker
    pub marker_radius: f32,
    /// Halbe Breite des Pfad-Umrisses für Treffer
    pub path_hit_width: f32,
    /// Schwelle der Standard-Distanzbedingung
    pub trigger_distance: f32,
}

impl PathRules {
    /// Übernimmt die Regeln aus den Editor-Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            marker_radius: options.marker_radius,
            path_hit_width: options.path_hit_width,
            trigger_distance: options.trigger_distance,
        }
    }
}

impl Default for PathRules {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Spawn-Marker der Entität, der den Pfad besitzt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnMarker {
    /// Spawn-Position
    pub position: Vec2,
    /// Kollisionsradius
    pub radius: f32,
}

impl SpawnMarker {
    /// Erstellt einen Spawn-Marker.
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self { position, radius }
    }

    /// Prüft ob `pos` innerhalb des Markers liegt.
    pub fn contains(&self, pos: Vec2) -> bool {
        self.position.distance(pos) <= self.radius
    }
}
