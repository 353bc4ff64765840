//! Core-Domänentypen: Location, Wegpunkte, Pfad, Ledger, Geometrie-Puffer und Straßengraph.

pub mod connection;
pub mod geometry_buffer;
pub mod ids;
pub mod location;
pub mod outline;
pub mod path;
pub mod road_graph;
pub mod segment_ledger;
pub mod snap_index;
pub mod trigger;
pub mod waypoint;

pub use connection::{Connection, ConnectionDirection, ConnectionKind};
pub use geometry_buffer::{BufferRangeError, GeometryBuffer};
pub use ids::{EntityId, IdAllocator, WaypointId};
pub use location::Location;
pub use outline::Outline;
pub use path::Path;
pub use road_graph::{GraphNode, RoadGraph};
pub use segment_ledger::{LedgerEntry, LedgerSplit, SegmentLedger};
pub use snap_index::{NodeMatch, SnapIndex};
pub use trigger::{ConditionEdge, Rule, TriggerCondition, TriggerKind};
pub use waypoint::{ActionKind, Waypoint};
