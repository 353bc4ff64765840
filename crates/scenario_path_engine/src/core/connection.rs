//! Verbindung zwischen zwei Knoten des Straßengraphen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Befahrbarkeit der Verbindung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConnectionDirection {
    /// Einbahn (start → end)
    #[default]
    Regular,
    /// In beide Richtungen befahrbar
    Dual,
}

/// Art der Verbindung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConnectionKind {
    /// Fahrt entlang einer Spur
    #[default]
    Lane,
    /// Wechsel auf eine benachbarte Spur
    LaneChange,
}

/// Eine gerichtete Verbindung im Straßengraphen
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    /// Start-Knoten-ID
    pub start_id: u64,
    /// End-Knoten-ID
    pub end_id: u64,
    /// Befahrbarkeit
    pub direction: ConnectionDirection,
    /// Spur oder Spurwechsel
    pub kind: ConnectionKind,
    /// Länge der Verbindung (Meter)
    pub length: f32,
}

impl Connection {
    /// Erstellt eine neue Verbindung; die Länge ergibt sich aus den Knotenpositionen.
    pub fn new(
        start_id: u64,
        end_id: u64,
        direction: ConnectionDirection,
        kind: ConnectionKind,
        start_pos: Vec2,
        end_pos: Vec2,
    ) -> Self {
        Self {
            start_id,
            end_id,
            direction,
            kind,
            length: start_pos.distance(end_pos),
        }
    }

    /// Gibt `true` zurück, wenn die Verbindung in beide Richtungen befahrbar ist.
    pub fn is_dual(&self) -> bool {
        self.direction == ConnectionDirection::Dual
    }
}
