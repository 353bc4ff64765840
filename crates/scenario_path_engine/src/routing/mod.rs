//! Kollaborateure für Routing und Snapping.
//!
//! Der Editor kennt nur die Traits [`Pathfinder`] und [`Snapper`]; konkrete
//! Implementierungen sind der graphbasierte [`RoadGraphRouter`] und der
//! freie [`StraightLineRouter`].

pub mod graph_router;
pub mod straight;

pub use graph_router::RoadGraphRouter;
pub use straight::{StraightLineRouter, sample_line};

use crate::core::Location;
use glam::Vec2;
use thiserror::Error;

/// Ergebnis einer Pfadsuche.
///
/// `points[0] == from`, `points[last] == to`. `lane_changes` enthält Indizes in
/// `points`, an denen ein Spurwechsel beginnt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathSegment {
    /// Geordnete Punkte inklusive Start und Ziel
    pub points: Vec<Location>,
    /// Aufsteigende Indizes der Spurwechsel-Startpunkte
    pub lane_changes: Vec<usize>,
}

impl PathSegment {
    /// Segment ohne Spurwechsel.
    pub fn plain(points: Vec<Location>) -> Self {
        Self {
            points,
            lane_changes: Vec::new(),
        }
    }
}

/// Fehler der Pfadsuche.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// Position liegt auf keinem Knoten des Straßengraphen
    #[error("Position ({}, {}) liegt nicht auf dem Straßengraphen", .0.x, .0.y)]
    OffGraph(Vec2),
    /// Zwischen den Knoten existiert keine befahrbare Verbindung
    #[error("Kein Weg von ({}, {}) nach ({}, {})", .from.x, .from.y, .to.x, .to.y)]
    NoRoute { from: Vec2, to: Vec2 },
    /// Der Pathfinder lieferte keine Punkte
    #[error("Pfadsuche lieferte ein leeres Ergebnis")]
    EmptyResult,
}

/// Berechnet Teilpfade zwischen zwei Positionen.
pub trait Pathfinder {
    /// Sucht einen Pfad von `from` nach `to`.
    ///
    /// Bei `ignore_graph` wird frei (ohne Straßengraph) geroutet.
    fn find_path(
        &self,
        from: Location,
        to: Location,
        ignore_graph: bool,
    ) -> Result<PathSegment, RoutingError>;
}

/// Projiziert freie Zeigerpositionen auf gültige Graph-Positionen.
pub trait Snapper {
    /// Liefert die nächste gültige Position oder `None`, wenn keine in Reichweite liegt.
    fn resolve(&self, raw: Location) -> Option<Location>;
}

/// Kombination aus [`Pathfinder`] und [`Snapper`], wie sie der Editor benötigt.
pub trait Router: Pathfinder + Snapper {}

impl<T: Pathfinder + Snapper + ?Sized> Router for T {}
