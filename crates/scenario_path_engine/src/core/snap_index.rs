//! KD-Tree über den Knoten eines Straßengraphen für das Einrasten von Klicks.

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

use crate::core::GraphNode;

/// Nächster Knoten zu einer Abfrageposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeMatch {
    pub node_id: u64,
    /// Euklidische Distanz (Meter)
    pub distance: f32,
}

/// Snap-Index; wird einmal beim Laden des Graphen gebaut.
#[derive(Debug, Clone)]
pub struct SnapIndex {
    tree: KdTree<f32, 2>,
    len: usize,
}

impl SnapIndex {
    pub fn build<'a>(nodes: impl IntoIterator<Item = &'a GraphNode>) -> Self {
        let mut tree = KdTree::new();
        let mut len = 0;
        for node in nodes {
            tree.add(&[node.position.x, node.position.y], node.id);
            len += 1;
        }
        Self { tree, len }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Nächster Knoten ohne Radiusgrenze; `None` nur bei leerem Graphen.
    pub fn nearest(&self, query: Vec2) -> Option<NodeMatch> {
        if self.is_empty() {
            return None;
        }
        let hit = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        Some(NodeMatch {
            node_id: hit.item,
            distance: hit.distance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_picks_closest_node_and_reports_distance() {
        let nodes = [
            GraphNode::new(7, Vec2::new(0.0, 0.0)),
            GraphNode::new(42, Vec2::new(3.0, 4.0)),
            GraphNode::new(9, Vec2::new(20.0, 0.0)),
        ];
        let index = SnapIndex::build(&nodes);

        let hit = index.nearest(Vec2::new(3.0, 4.5)).expect("Treffer erwartet");
        assert_eq!(hit.node_id, 42);
        assert!((hit.distance - 0.5).abs() < 1e-5);

        let far = index.nearest(Vec2::new(100.0, 0.0)).expect("Treffer erwartet");
        assert_eq!(far.node_id, 9);
        assert!((far.distance - 80.0).abs() < 1e-3);
    }

    #[test]
    fn empty_graph_never_snaps() {
        let nodes: [GraphNode; 0] = [];
        let index = SnapIndex::build(&nodes);
        assert!(index.is_empty());
        assert!(index.nearest(Vec2::ZERO).is_none());
    }
}
