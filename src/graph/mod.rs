//! An in-memory road network to plan Routes on
//!
//! Nodes are referenced by the crate-wide [`NodeID`]. The maps the search keeps its
//! bookkeeping in are not part of this module:
//! ```compile_fail
//! use route_planner::graph::NodeIDMap;
//! ```

pub use crate::NodeID;

/// The Type used to reference a [`Way`] in a [`RoadGraph`]
pub type WayID = usize;

mod node;
pub use node::Node;

mod road_graph;
pub use road_graph::{RoadGraph, Way};
