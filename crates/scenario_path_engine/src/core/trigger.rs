//! Trigger-Bedingungen, die festlegen, wann die Aktion eines Wegpunkts ausgelöst wird.
//!
//! Geschlossene Menge an Bedingungsarten; jede Art trägt ihre eigenen Parameter.
//! Exporter matchen erschöpfend über `TriggerKind`.

use super::{Location, WaypointId};
use serde::{Deserialize, Serialize};

/// Vergleichsregel für wertbasierte Bedingungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    /// Messwert kleiner als Schwelle
    #[default]
    LessThan,
    /// Messwert gleich Schwelle
    EqualTo,
    /// Messwert größer als Schwelle
    GreaterThan,
}

impl Rule {
    /// Wertet die Regel für einen Messwert gegen eine Schwelle aus.
    pub fn holds(self, measured: f32, threshold: f32) -> bool {
        match self {
            Rule::LessThan => measured < threshold,
            Rule::EqualTo => (measured - threshold).abs() <= f32::EPSILON,
            Rule::GreaterThan => measured > threshold,
        }
    }
}

/// Flanke, auf die eine Bedingung reagiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionEdge {
    /// Übergang falsch → wahr
    #[default]
    Rising,
    /// Übergang wahr → falsch
    Falling,
    /// Beide Übergänge
    RisingOrFalling,
    /// Pegel statt Flanke
    None,
}

/// Art einer Trigger-Bedingung inklusive Parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TriggerKind {
    /// Entität ist näher/weiter als `value` Meter von `position` entfernt
    Distance {
        rule: Rule,
        value: f32,
        position: Location,
    },
    /// Entität erreicht `position` mit Toleranz
    ReachPosition { tolerance: f32, position: Location },
    /// Simulationszeit erreicht `value` Sekunden
    SimulationTime { rule: Rule, value: f32 },
    /// Entität steht `duration` Sekunden still
    StandStill { duration: f32 },
    /// Aktion eines anderen Wegpunkts ist abgeschlossen
    StoryboardElementState { after_waypoint: WaypointId },
}

/// Eine Trigger-Bedingung eines Wegpunkts.
///
/// Positionsbezüge sind Schnappschüsse zum Erstellungszeitpunkt und werden
/// beim Verschieben anderer Wegpunkte nicht nachgeführt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerCondition {
    /// Art und Parameter
    pub kind: TriggerKind,
    /// Verzögerung in Sekunden
    #[serde(default)]
    pub delay: f32,
    /// Auslösende Flanke
    #[serde(default)]
    pub edge: ConditionEdge,
}

impl TriggerCondition {
    /// Erstellt eine Bedingung ohne Verzögerung mit steigender Flanke.
    pub fn new(kind: TriggerKind) -> Self {
        Self {
            kind,
            delay: 0.0,
            edge: ConditionEdge::Rising,
        }
    }

    /// Standard-Bedingung neuer Wegpunkte: näher als `threshold` an `position`.
    pub fn distance_to(position: Location, threshold: f32) -> Self {
        Self::new(TriggerKind::Distance {
            rule: Rule::LessThan,
            value: threshold,
            position,
        })
    }

    /// Name der Bedingung im Szenario-Format.
    pub fn name(&self) -> &'static str {
        match self.kind {
            TriggerKind::Distance { .. } => "DistanceCondition",
            TriggerKind::ReachPosition { .. } => "ReachPositionCondition",
            TriggerKind::SimulationTime { .. } => "SimulationTimeCondition",
            TriggerKind::StandStill { .. } => "StandStillCondition",
            TriggerKind::StoryboardElementState { .. } => "StoryboardElementStateCondition",
        }
    }

    /// Schwellwert der Bedingung (Meter bzw. Sekunden), falls vorhanden.
    pub fn threshold(&self) -> Option<f32> {
        match self.kind {
            TriggerKind::Distance { value, .. } => Some(value),
            TriggerKind::ReachPosition { tolerance, .. } => Some(tolerance),
            TriggerKind::SimulationTime { value, .. } => Some(value),
            TriggerKind::StandStill { duration } => Some(duration),
            TriggerKind::StoryboardElementState { .. } => None,
        }
    }

    /// Referenzposition der Bedingung, falls positionsbasiert.
    pub fn reference_location(&self) -> Option<Location> {
        match self.kind {
            TriggerKind::Distance { position, .. } | TriggerKind::ReachPosition { position, .. } => {
                Some(position)
            }
            TriggerKind::SimulationTime { .. }
            | TriggerKind::StandStill { .. }
            | TriggerKind::StoryboardElementState { .. } => None,
        }
    }
}
