//! Scenario Path Engine.
//!
//! Interaktive Pfad-Bearbeitung für Verkehrsszenarien: Wegpunkte, Segment-Ledger
//! und der gerenderte Polylinien-Puffer werden bei jeder Bearbeitung konsistent
//! gehalten, ohne den Gesamtpfad neu zu berechnen.

pub mod core;
pub mod editing;
pub mod routing;
pub mod shared;

pub use core::{
    ActionKind, Connection, ConnectionDirection, ConnectionKind, ConditionEdge, EntityId,
    GeometryBuffer, GraphNode, IdAllocator, LedgerEntry, LedgerSplit, Location, Outline, Path,
    RoadGraph, Rule, SegmentLedger, SnapIndex, NodeMatch, TriggerCondition, TriggerKind,
    Waypoint, WaypointId,
};
pub use editing::{
    AppendOutcome, EditError, EditMode, InsertOutcome, InvalidTargetReason, PathEditor,
    PathPreview, PathRules, SpawnMarker,
};
pub use routing::{
    PathSegment, Pathfinder, RoadGraphRouter, Router, RoutingError, Snapper, StraightLineRouter,
};
pub use shared::EditorOptions;
