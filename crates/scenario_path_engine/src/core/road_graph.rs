//! Straßengraph mit Knoten, Verbindungen und Snap-Index.
//!
//! Wird einmal aus JSON geladen und danach nur gelesen: der `RoadGraphRouter`
//! nutzt ihn für Snapping und Routing, der Editor authort keine Straßennetze.

use super::{Connection, ConnectionDirection, ConnectionKind};
use super::{NodeMatch, SnapIndex};
use anyhow::{Context, bail};
use glam::Vec2;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};


/// Ein Knoten des Straßengraphen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphNode {
    /// Eindeutige Knoten-ID
    pub id: u64,
    /// Position in Weltkoordinaten
    pub position: Vec2,
}

impl GraphNode {
    /// Erstellt einen neuen Knoten
    pub fn new(id: u64, position: Vec2) -> Self {
        Self { id, position }
    }
}

/// Unveränderlicher Knoten/Verbindungs-Graph eines Straßennetzes
#[derive(Debug, Clone)]
pub struct RoadGraph {
    nodes: HashMap<u64, GraphNode>,
    connections: Vec<Connection>,
    snap_index: SnapIndex,
}

#[derive(Debug, Deserialize)]
struct GraphFile {
    nodes: Vec<NodeRecord>,
    #[serde(default)]
    connections: Vec<ConnectionRecord>,
}

#[derive(Debug, Deserialize)]
struct NodeRecord {
    id: u64,
    x: f32,
    y: f32,
}

#[derive(Debug, Deserialize)]
struct ConnectionRecord {
    from: u64,
    to: u64,
    #[serde(default)]
    direction: ConnectionDirection,
    #[serde(default)]
    kind: ConnectionKind,
}

impl RoadGraph {
    /// Parst einen Graphen aus JSON.
    ///
    /// Format: `{ "nodes": [{id, x, y}], "connections": [{from, to, direction?, kind?}] }`.
    /// Doppelte Knoten-IDs, doppelte Verbindungen und Verweise auf unbekannte
    /// Knoten werden abgelehnt.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let file: GraphFile =
            serde_json::from_str(json).context("Straßengraph-JSON ist ungültig")?;

        let mut nodes = HashMap::with_capacity(file.nodes.len());
        for record in &file.nodes {
            let node = GraphNode::new(record.id, Vec2::new(record.x, record.y));
            if nodes.insert(record.id, node).is_some() {
                bail!("Knoten-ID {} ist doppelt vergeben", record.id);
            }
        }

        let mut seen = HashSet::with_capacity(file.connections.len());
        let mut connections = Vec::with_capacity(file.connections.len());
        for record in &file.connections {
            let (Some(start), Some(end)) = (nodes.get(&record.from), nodes.get(&record.to))
            else {
                bail!(
                    "Verbindung {} → {} verweist auf unbekannten Knoten",
                    record.from,
                    record.to
                );
            };
            if !seen.insert((record.from, record.to)) {
                bail!("Verbindung {} → {} ist doppelt", record.from, record.to);
            }
            connections.push(Connection::new(
                record.from,
                record.to,
                record.direction,
                record.kind,
                start.position,
                end.position,
            ));
        }

        let snap_index = SnapIndex::build(nodes.values());
        log::info!(
            "Straßengraph geparst: {} Knoten, {} Verbindungen",
            nodes.len(),
            connections.len()
        );
        Ok(Self {
            nodes,
            connections,
            snap_index,
        })
    }

    /// Lädt einen Graphen aus einer JSON-Datei.
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Straßengraph nicht lesbar: {}", path.display()))?;
        Self::from_json(&content)
    }

    pub fn node(&self, node_id: u64) -> Option<&GraphNode> {
        self.nodes.get(&node_id)
    }

    /// Iterator über alle Knoten (ohne feste Reihenfolge).
    pub fn nodes_iter(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    /// Iterator über alle Verbindungen in Dateireihenfolge.
    pub fn connections_iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Nächster Knoten zur Weltposition, unabhängig vom Snap-Radius.
    pub fn nearest_node(&self, query: Vec2) -> Option<NodeMatch> {
        self.snap_index.nearest(query)
    }
}
