//! Routing und Snapping auf dem Straßengraphen (A* via petgraph).

use std::collections::HashMap;
use std::sync::Arc;

use glam::Vec2;
use petgraph::algo::astar;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::{PathSegment, Pathfinder, RoutingError, Snapper, StraightLineRouter};
use crate::core::location::assign_headings;
use crate::core::{ConnectionKind, GraphNode, Location, RoadGraph};

/// Toleranz, innerhalb der eine Position als "auf dem Knoten" gilt.
const NODE_EPSILON: f32 = 0.01;

#[derive(Debug, Clone, Copy)]
struct EdgeData {
    length: f32,
    kind: ConnectionKind,
}

/// Router über einem unveränderlichen Straßengraphen.
///
/// Einbahn-Verbindungen werden zu einer gerichteten Kante, Zweirichtungs-
/// Verbindungen zu zwei. Im Ignore-Graph-Modus wird an den
/// [`StraightLineRouter`] delegiert.
#[derive(Debug, Clone)]
pub struct RoadGraphRouter {
    graph: Arc<RoadGraph>,
    routing: DiGraph<GraphNode, EdgeData>,
    node_index: HashMap<u64, NodeIndex>,
    snap_radius: f32,
    free: StraightLineRouter,
}

impl RoadGraphRouter {
    /// Baut den Routing-Graphen aus dem Straßengraphen auf.
    pub fn new(graph: Arc<RoadGraph>, snap_radius: f32, free_spacing: f32) -> Self {
        let mut nodes: Vec<GraphNode> = graph.nodes_iter().copied().collect();
        nodes.sort_by_key(|n| n.id);

        let mut routing = DiGraph::with_capacity(nodes.len(), graph.connection_count() * 2);
        let mut node_index = HashMap::with_capacity(nodes.len());
        for node in nodes {
            node_index.insert(node.id, routing.add_node(node));
        }

        for connection in graph.connections_iter() {
            let (Some(&a), Some(&b)) = (
                node_index.get(&connection.start_id),
                node_index.get(&connection.end_id),
            ) else {
                continue;
            };
            let data = EdgeData {
                length: connection.length,
                kind: connection.kind,
            };
            routing.update_edge(a, b, data);
            if connection.is_dual() {
                routing.update_edge(b, a, data);
            }
        }

        log::debug!(
            "Routing-Graph aufgebaut: {} Knoten, {} Kanten",
            routing.node_count(),
            routing.edge_count()
        );

        Self {
            graph,
            routing,
            node_index,
            snap_radius,
            free: StraightLineRouter::new(free_spacing),
        }
    }

    /// Der zugrundeliegende Straßengraph.
    pub fn graph(&self) -> &Arc<RoadGraph> {
        &self.graph
    }

    /// Snap-Radius in Metern.
    pub fn snap_radius(&self) -> f32 {
        self.snap_radius
    }

    fn node_at(&self, pos: Vec2) -> Result<NodeIndex, RoutingError> {
        self.graph
            .nearest_node(pos)
            .filter(|m| m.distance <= NODE_EPSILON)
            .and_then(|m| self.node_index.get(&m.node_id).copied())
            .ok_or(RoutingError::OffGraph(pos))
    }
}

impl Pathfinder for RoadGraphRouter {
    fn find_path(
        &self,
        from: Location,
        to: Location,
        ignore_graph: bool,
    ) -> Result<PathSegment, RoutingError> {
        if ignore_graph {
            return self.free.find_path(from, to, true);
        }

        let start = self.node_at(from.position)?;
        let goal = self.node_at(to.position)?;
        let goal_pos = self.routing[goal].position;

        let (_cost, route) = astar(
            &self.routing,
            start,
            |n| n == goal,
            |e| e.weight().length,
            |n| self.routing[n].position.distance(goal_pos),
        )
        .ok_or(RoutingError::NoRoute {
            from: from.position,
            to: to.position,
        })?;

        let lane_changes = route
            .windows(2)
            .enumerate()
            .filter_map(|(k, pair)| {
                let edge = self.routing.find_edge(pair[0], pair[1])?;
                (self.routing[edge].kind == ConnectionKind::LaneChange).then_some(k)
            })
            .collect();

        let mut points: Vec<Location> = route
            .iter()
            .map(|&n| Location::new(self.routing[n].position))
            .collect();
        let last = points.len().checked_sub(1).ok_or(RoutingError::EmptyResult)?;
        points[0] = from;
        points[last] = to;
        assign_headings(&mut points);

        Ok(PathSegment {
            points,
            lane_changes,
        })
    }
}

impl Snapper for RoadGraphRouter {
    fn resolve(&self, raw: Location) -> Option<Location> {
        let hit = self.graph.nearest_node(raw.position)?;
        if hit.distance > self.snap_radius {
            return None;
        }
        let node = self.graph.node(hit.node_id)?;
        Some(Location {
            position: node.position,
            ..raw
        })
    }
}
