use super::{NodeID, WayID};
use crate::{path::Distance, Point};
use once_cell::sync::OnceCell;

/// A Node of the road network.
///
/// Nodes only hold what stays the same between searches: their position and the ways
/// that pass through them. Search Costs are kept by the search itself.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) pos: Point,
    pub(crate) ways: Vec<WayID>,
    pub(crate) neighbors: OnceCell<Vec<NodeID>>,
}

impl Node {
    /// Creates a Node at a normalized position, without any ways or Neighbors
    pub fn new(pos: Point) -> Node {
        Node {
            pos,
            ways: Vec::new(),
            neighbors: OnceCell::new(),
        }
    }

    /// The position of the Node in normalized map space
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// The straight-line distance to another Node in normalized map space
    ///
    /// ## Examples
    /// ```
    /// # use route_planner::graph::RoadGraph;
    /// let mut graph = RoadGraph::new();
    /// let a = graph.add_node((0.0, 0.0));
    /// let b = graph.add_node((0.75, 1.0));
    ///
    /// assert_eq!(graph[a].distance(&graph[b]), 1.25);
    /// assert_eq!(graph[b].distance(&graph[a]), 1.25);
    /// ```
    pub fn distance(&self, other: &Node) -> Distance {
        distance(self.pos, other.pos)
    }

    /// The Neighbors of this Node, if they were already discovered
    pub fn known_neighbors(&self) -> Option<&[NodeID]> {
        self.neighbors.get().map(Vec::as_slice)
    }
}

pub(crate) fn distance(a: Point, b: Point) -> Distance {
    (a.0 - b.0).hypot(a.1 - b.1)
}
