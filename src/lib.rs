#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find shortest Routes on a road network.
//!
//! ## Introduction
//! A road network is a Graph whose Nodes have a position on a map and whose Edges are the
//! roads connecting them. The length of a road is the straight-line distance between its
//! two ends, which makes the straight-line distance to the goal a Heuristic that never
//! overestimates the remaining length of a Route. This crate uses that Heuristic to run an
//! [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm) between two points.
//!
//! Positions live in a normalized map space, `[0, 1]` on both axes. Start and end of a
//! search are given as percentages `[0, 100]` of the map and are snapped to the closest
//! Nodes. The length of the resulting Route is converted to real-world units using the
//! model's metric scale.
//!
//! ## Examples
//! Creating the road network:
//! ```
//! use route_planner::graph::RoadGraph;
//!
//! // E---D
//! // |   |
//! // A---B---C
//! let mut graph = RoadGraph::new().with_metric_scale(500.0); // the map is 500m wide
//! let a = graph.add_node((0.0, 0.0));
//! let b = graph.add_node((0.5, 0.0));
//! let c = graph.add_node((1.0, 0.0));
//! let d = graph.add_node((0.5, 0.5));
//! let e = graph.add_node((0.0, 0.5));
//!
//! graph.add_way(&[a, b, c]); // a two-way road
//! graph.add_oneway(&[a, e, d, b]); // a one-way road
//! ```
//! The search never asks for the [`RoadGraph`](graph::RoadGraph) itself, only for the
//! [`RouteModel`] it implements. Other road networks can be searched by implementing that
//! Trait.
//!
//! ### Pathfinding
//! Finding the Route between two points:
//! ```
//! # use route_planner::graph::RoadGraph;
//! use route_planner::{PathSearch, SearchOutcome};
//! # let mut graph = RoadGraph::new().with_metric_scale(500.0);
//! # let a = graph.add_node((0.0, 0.0));
//! # let b = graph.add_node((0.5, 0.0));
//! # let c = graph.add_node((1.0, 0.0));
//! # let d = graph.add_node((0.5, 0.5));
//! # let e = graph.add_node((0.0, 0.5));
//! # graph.add_way(&[a, b, c]);
//! # graph.add_oneway(&[a, e, d, b]);
//!
//! // from the bottom left to the middle of the map
//! let mut search = PathSearch::new(&graph, 0.0, 0.0, 50.0, 50.0).unwrap();
//!
//! match search.search().unwrap() {
//!     SearchOutcome::PathFound(path) => {
//!         let ids: Vec<_> = path.iter().map(|waypoint| waypoint.id).collect();
//!         assert_eq!(ids, vec![a, e, d]);
//!         assert_eq!(path.distance, 500.0);
//!     }
//!     SearchOutcome::NoRouteFound => unreachable!(),
//! }
//! ```
//! One-way roads are only followed in their direction, so there is no Route back:
//! ```
//! # use route_planner::graph::RoadGraph;
//! # use route_planner::{PathSearch, SearchOutcome};
//! # let mut graph = RoadGraph::new().with_metric_scale(500.0);
//! # let a = graph.add_node((0.0, 0.0));
//! # let b = graph.add_node((0.5, 0.0));
//! # let c = graph.add_node((1.0, 0.0));
//! # let d = graph.add_node((0.5, 0.5));
//! # let e = graph.add_node((0.0, 0.5));
//! # graph.add_way(&[a, b, c]);
//! # graph.add_oneway(&[a, e, d, b]);
//! let mut search = PathSearch::new(&graph, 50.0, 50.0, 0.0, 0.0).unwrap();
//!
//! // d -> b -> a is possible, but d cannot be left towards e
//! let path = search.search().unwrap().into_path().unwrap();
//! let ids: Vec<_> = path.iter().map(|waypoint| waypoint.id).collect();
//! assert_eq!(ids, vec![d, b, a]);
//! ```
//!
//! ### Configuration
//! By default, a Node keeps the Cost of the first path it was discovered by. This is only
//! guaranteed to be the shortest Route if the road network guarantees that the first
//! discovery is optimal. [`PlannerConfig::OPTIMAL`] updates Nodes when a cheaper path shows
//! up, which always produces a shortest Route:
//! ```
//! use route_planner::{find_route, graph::RoadGraph, PlannerConfig};
//!
//! let mut graph = RoadGraph::new();
//! let a = graph.add_node((0.0, 0.0));
//! let b = graph.add_node((1.0, 0.0));
//! graph.add_road(a, b);
//!
//! let outcome = find_route(&graph, 0.0, 0.0, 100.0, 0.0, PlannerConfig::OPTIMAL).unwrap();
//! assert!(outcome.is_found());
//! ```

/// A shorthand for positions in normalized map space
pub type Point = (f32, f32);

mod node_id;
pub use self::node_id::NodeID;

mod config;
pub use self::config::{Expansion, PlannerConfig};

mod error;
pub use self::error::{PlannerError, Result};

mod path;
pub use self::path::{Distance, Path, Waypoint};

pub mod graph;

pub mod model;
pub use self::model::RouteModel;

mod search;
pub use self::search::{find_route, PathSearch, SearchOutcome, SearchRecord, SearchState};
