//! The contract between the search and the road network it runs on

use crate::{graph::Node, path::Distance, NodeID};

/// Provides the road network a [`PathSearch`](crate::PathSearch) runs on.
///
/// The search never builds or changes the network itself. It only needs to
/// - resolve coordinates to Nodes
/// - look up Nodes and their Neighbors
/// - convert normalized distances to real-world units
///
/// [`RoadGraph`](crate::graph::RoadGraph) is the implementation provided by this crate.
/// Other implementations may use a spatial index for [`find_closest_node`](RouteModel::find_closest_node)
/// or load their Nodes from OpenStreetMap data, as long as they stick to normalized
/// coordinates in `[0, 1]`.
pub trait RouteModel {
    /// Returns the Node with the given id.
    ///
    /// May panic if `id` does not belong to this model.
    fn node(&self, id: NodeID) -> &Node;

    /// The number of Nodes in the model
    fn len(&self) -> usize;

    /// Returns `true` if the model contains no Nodes
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds the Node closest to the normalized coordinates `(x, y)`.
    ///
    /// Returns `None` only if the model is empty. The result must be the same for the same
    /// query on an unchanged model.
    fn find_closest_node(&self, x: f32, y: f32) -> Option<NodeID>;

    /// Provides the Nodes reachable in one step from `id`.
    ///
    /// Implementations may discover Neighbors lazily, but repeated calls must return the
    /// same Nodes in the same order.
    fn neighbors(&self, id: NodeID) -> &[NodeID];

    /// The factor converting normalized distances into real-world units (e.g. meters)
    fn metric_scale(&self) -> Distance;

    /// The straight-line distance between two Nodes in normalized space
    fn distance(&self, a: NodeID, b: NodeID) -> Distance {
        self.node(a).distance(self.node(b))
    }
}
