use crate::NodeID;

/// Errors that can occur while setting up or running a [`PathSearch`](crate::PathSearch).
///
/// Not finding a Route is not an Error. See [`SearchOutcome`](crate::SearchOutcome).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// The Graph contains no Nodes, so no coordinate can be resolved.
    #[error("cannot resolve coordinates on an empty graph")]
    EmptyGraph,
    /// A coordinate was not a finite percentage in `[0, 100]`.
    #[error("coordinate {value} is not a percentage in [0, 100]")]
    CoordinateOutOfRange {
        /// the rejected value
        value: f32,
    },
    /// Following predecessors from `node` never reached the start Node.
    #[error("predecessor chain from node {node} does not reach the start node")]
    BrokenPredecessorChain {
        /// the Node whose predecessor was missing
        node: NodeID,
    },
}

/// Result alias used throughout this crate
pub type Result<T> = std::result::Result<T, PlannerError>;
