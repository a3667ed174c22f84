use super::{node::distance, Node, NodeID, WayID};
use crate::{model::RouteModel, path::Distance, Point};
use ordered_float::OrderedFloat;

/// Below this many Nodes, the closest Node is searched sequentially even with the
/// `parallel` feature enabled.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 4096;

/// An ordered sequence of Nodes forming a road
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Way {
    nodes: Vec<NodeID>,
    oneway: bool,
}

impl Way {
    /// The Nodes along the Way, in driving direction for one-way roads
    pub fn nodes(&self) -> &[NodeID] {
        &self.nodes
    }

    /// Returns `true` if the Way may only be traversed in the order of [`nodes`](Way::nodes)
    pub fn is_oneway(&self) -> bool {
        self.oneway
    }
}

/// An in-memory road network in normalized coordinates.
///
/// Nodes are connected through [`Way`]s: consecutive Nodes of a Way are Neighbors.
/// Neighbors are only worked out when first requested and then cached.
///
/// ## Examples
/// ```
/// use route_planner::graph::RoadGraph;
///
/// let mut graph = RoadGraph::new().with_metric_scale(1000.0);
/// let a = graph.add_node((0.0, 0.0));
/// let b = graph.add_node((0.5, 0.0));
/// let c = graph.add_node((1.0, 0.0));
/// graph.add_way(&[a, b, c]);
///
/// assert_eq!(graph.discover_neighbors(b), &[c, a]);
/// assert_eq!(graph.find_closest_node(0.4, 0.1), Some(b));
/// ```
#[derive(Clone, Debug)]
pub struct RoadGraph {
    nodes: slab::Slab<Node>,
    ways: Vec<Way>,
    metric_scale: Distance,
}

impl RoadGraph {
    /// Creates an empty RoadGraph with a metric scale of `1.0`
    pub fn new() -> Self {
        Self {
            nodes: slab::Slab::default(),
            ways: Vec::new(),
            metric_scale: 1.0,
        }
    }

    /// Sets the factor converting normalized distances into real-world units
    pub fn with_metric_scale(mut self, metric_scale: Distance) -> Self {
        self.metric_scale = metric_scale;
        self
    }

    /// The number of Nodes in the graph
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph contains no Nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds an unconnected Node at a normalized position
    pub fn add_node(&mut self, pos: Point) -> NodeID {
        self.nodes.insert(Node::new(pos))
    }

    /// Adds a road that can be traversed in both directions
    ///
    /// Panics if any of `nodes` is not part of the graph.
    #[track_caller]
    pub fn add_way(&mut self, nodes: &[NodeID]) -> WayID {
        self.insert_way(nodes, false)
    }

    /// Adds a road that can only be traversed in the order of `nodes`
    ///
    /// Panics if any of `nodes` is not part of the graph.
    #[track_caller]
    pub fn add_oneway(&mut self, nodes: &[NodeID]) -> WayID {
        self.insert_way(nodes, true)
    }

    /// Connects two Nodes with a two-way road
    #[track_caller]
    pub fn add_road(&mut self, a: NodeID, b: NodeID) -> WayID {
        self.insert_way(&[a, b], false)
    }

    #[track_caller]
    fn insert_way(&mut self, nodes: &[NodeID], oneway: bool) -> WayID {
        let id = self.ways.len();
        for &node_id in nodes {
            let node = &mut self[node_id];
            if !node.ways.contains(&id) {
                node.ways.push(id);
            }
            // a new Way invalidates previously discovered Neighbors
            node.neighbors.take();
        }
        self.ways.push(Way {
            nodes: nodes.to_vec(),
            oneway,
        });
        id
    }

    /// Returns the Way with the given id
    #[track_caller]
    pub fn way(&self, id: WayID) -> &Way {
        &self.ways[id]
    }

    /// The position of a Node in normalized space
    #[track_caller]
    pub fn position(&self, id: NodeID) -> Point {
        self[id].pos
    }

    /// Iterates over all Nodes and their ids
    pub fn iter(&self) -> slab::Iter<Node> {
        self.nodes.iter()
    }

    /// Returns the Neighbors of a Node, working them out from its Ways on the first call.
    ///
    /// For every occurrence of the Node in a Way, the following Node is a Neighbor, and so
    /// is the preceding one unless the Way is one-way. Duplicates are removed, keeping the
    /// order in which they were first found.
    #[track_caller]
    pub fn discover_neighbors(&self, id: NodeID) -> &[NodeID] {
        let node = &self[id];
        node.neighbors.get_or_init(|| {
            let mut found = Vec::new();
            for &way_id in node.ways.iter() {
                let way = &self.ways[way_id];
                for (i, _) in way.nodes.iter().enumerate().filter(|&(_, &n)| n == id) {
                    let next = way.nodes.get(i + 1).copied();
                    let prev = if way.oneway || i == 0 {
                        None
                    } else {
                        Some(way.nodes[i - 1])
                    };
                    for other in next.into_iter().chain(prev) {
                        if other != id && !found.contains(&other) {
                            found.push(other);
                        }
                    }
                }
            }
            log::trace!("discovered {} neighbors of node {}", found.len(), id);
            found
        })
    }

    /// Finds the Node closest to the normalized coordinates `(x, y)`.
    ///
    /// Equally close Nodes are resolved to the one with the smaller id.
    pub fn find_closest_node(&self, x: f32, y: f32) -> Option<NodeID> {
        let key = |(id, node): (NodeID, &Node)| (OrderedFloat(distance(node.pos, (x, y))), id);

        #[cfg(feature = "parallel")]
        {
            if self.nodes.len() >= PARALLEL_THRESHOLD {
                use rayon::prelude::*;
                return self
                    .nodes
                    .iter()
                    .par_bridge()
                    .map(&key)
                    .min()
                    .map(|(_, id)| id);
            }
        }

        self.nodes.iter().map(key).min().map(|(_, id)| id)
    }
}

impl Default for RoadGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteModel for RoadGraph {
    fn node(&self, id: NodeID) -> &Node {
        &self[id]
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn find_closest_node(&self, x: f32, y: f32) -> Option<NodeID> {
        RoadGraph::find_closest_node(self, x, y)
    }

    fn neighbors(&self, id: NodeID) -> &[NodeID] {
        self.discover_neighbors(id)
    }

    fn metric_scale(&self) -> Distance {
        self.metric_scale
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for RoadGraph {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node {
        &self.nodes[index]
    }
}
impl IndexMut<NodeID> for RoadGraph {
    #[track_caller]
    fn index_mut(&mut self, index: NodeID) -> &mut Node {
        &mut self.nodes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> (RoadGraph, [NodeID; 4]) {
        let mut graph = RoadGraph::new();
        let ids = [
            graph.add_node((0.0, 0.0)),
            graph.add_node((0.25, 0.0)),
            graph.add_node((0.5, 0.0)),
            graph.add_node((0.75, 0.0)),
        ];
        (graph, ids)
    }

    #[test]
    fn two_way_neighbors() {
        let (mut graph, [a, b, c, d]) = line();
        graph.add_way(&[a, b, c, d]);

        assert_eq!(graph.discover_neighbors(a), &[b]);
        assert_eq!(graph.discover_neighbors(b), &[c, a]);
        assert_eq!(graph.discover_neighbors(d), &[c]);
    }

    #[test]
    fn oneway_neighbors() {
        let (mut graph, [a, b, c, _]) = line();
        graph.add_oneway(&[a, b, c]);

        assert_eq!(graph.discover_neighbors(a), &[b]);
        assert_eq!(graph.discover_neighbors(b), &[c]);
        assert!(graph.discover_neighbors(c).is_empty());
    }

    #[test]
    fn crossing_ways_dedup() {
        let (mut graph, [a, b, c, d]) = line();
        graph.add_way(&[a, b, c]);
        graph.add_way(&[d, b, a]);

        assert_eq!(graph.discover_neighbors(b), &[c, a, d]);
        assert_eq!(graph.way(1).nodes(), &[d, b, a]);
        assert!(!graph.way(1).is_oneway());
    }

    #[test]
    fn looped_way() {
        let (mut graph, [a, b, c, _]) = line();
        graph.add_way(&[a, b, c, a]);

        assert_eq!(graph.discover_neighbors(a), &[b, c]);
    }

    #[test]
    fn discovery_is_cached() {
        let (mut graph, [a, b, c, _]) = line();
        graph.add_road(a, b);

        assert_eq!(graph[a].known_neighbors(), None);
        let first = graph.discover_neighbors(a).to_vec();
        assert_eq!(graph[a].known_neighbors(), Some(&[b][..]));
        assert_eq!(graph.discover_neighbors(a), first.as_slice());

        // adding a road resets the cache of the Nodes it touches
        graph.add_road(a, c);
        assert_eq!(graph[a].known_neighbors(), None);
        assert_eq!(graph.discover_neighbors(a), &[b, c]);
    }

    #[test]
    fn closest_node() {
        let (graph, [a, b, _, d]) = line();

        assert_eq!(graph.find_closest_node(0.1, 0.2), Some(a));
        assert_eq!(graph.find_closest_node(0.3, -0.1), Some(b));
        assert_eq!(graph.find_closest_node(1.0, 1.0), Some(d));
        // halfway between a and b
        assert_eq!(graph.find_closest_node(0.125, 0.0), Some(a));
    }

    #[test]
    fn closest_node_empty() {
        assert_eq!(RoadGraph::new().find_closest_node(0.5, 0.5), None);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn closest_node_parallel() {
        let mut graph = RoadGraph::new();
        let size = 64;
        for y in 0..size {
            for x in 0..size {
                graph.add_node((x as f32 / size as f32, y as f32 / size as f32));
            }
        }
        assert!(graph.len() >= PARALLEL_THRESHOLD);

        let id = graph.find_closest_node(0.5, 0.25).unwrap();
        assert_eq!(graph.position(id), (0.5, 0.25));
        // exactly between four grid points
        let tie = graph.find_closest_node(0.5 + 0.5 / size as f32, 0.5 + 0.5 / size as f32);
        assert_eq!(tie, Some(32 * size + 32));
    }
}
