//! The A* search over a [`RouteModel`]

use crate::{
    config::{Expansion, PlannerConfig},
    error::{PlannerError, Result},
    model::RouteModel,
    node_id::NodeIDMap,
    path::{Distance, Path, Waypoint},
    NodeID,
};

mod open_set;
use self::open_set::{HeuristicElement, OpenSet};

/// The per-run bookkeeping of a discovered Node.
///
/// A Node is visited exactly when the search holds a record for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchRecord {
    /// Cost of the best known path from the start to this Node
    pub g_cost: Distance,
    /// Straight-line distance from this Node to the goal
    pub h_cost: Distance,
    /// The Node this one was reached from. `None` only for the start Node
    pub predecessor: Option<NodeID>,
}

impl SearchRecord {
    /// The estimated Cost of a path from start to goal through this Node
    pub fn f_cost(&self) -> Distance {
        self.g_cost + self.h_cost
    }
}

/// The states a [`PathSearch`] goes through.
///
/// ```no_code
/// Ready -> Running -> PathFound
///                  -> Exhausted
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchState {
    /// Only the start Node is in the open set
    Ready,
    /// Nodes are being popped and expanded
    Running,
    /// The goal was popped and the Route reconstructed
    PathFound,
    /// The open set ran empty before the goal was reached
    Exhausted,
}

/// The result of [`PathSearch::search`]
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    /// The Route from start to goal and its real-world length
    PathFound(Path<Waypoint>),
    /// The goal cannot be reached from the start
    NoRouteFound,
}

impl SearchOutcome {
    /// Returns `true` if a Route was found
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::PathFound(_))
    }

    /// The found Route, if any
    pub fn path(&self) -> Option<&Path<Waypoint>> {
        match self {
            SearchOutcome::PathFound(path) => Some(path),
            SearchOutcome::NoRouteFound => None,
        }
    }

    /// Converts into the found Route, if any
    pub fn into_path(self) -> Option<Path<Waypoint>> {
        match self {
            SearchOutcome::PathFound(path) => Some(path),
            SearchOutcome::NoRouteFound => None,
        }
    }
}

/// Searches a [`RouteModel`] for a shortest Route using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The start and goal Nodes are resolved once, when the search is created. Costs are the
/// straight-line lengths of the roads, and the Heuristic is the straight-line distance to
/// the goal.
///
/// All Costs and predecessors of a run are kept inside the search, so the model can be
/// shared by several searches and every call to [`search`](PathSearch::search) starts over.
///
/// ## Examples
/// Basic usage:
/// ```
/// use route_planner::{graph::RoadGraph, PathSearch, SearchOutcome, SearchState};
///
/// // D---C
/// // |   |
/// // A---B
/// let mut graph = RoadGraph::new().with_metric_scale(1000.0);
/// let a = graph.add_node((0.0, 0.0));
/// let b = graph.add_node((1.0, 0.0));
/// let c = graph.add_node((1.0, 1.0));
/// let d = graph.add_node((0.0, 1.0));
/// graph.add_way(&[a, b, c, d, a]);
///
/// // coordinates are percentages of the map
/// let mut search = PathSearch::new(&graph, 0.0, 0.0, 100.0, 100.0).unwrap();
/// assert_eq!(search.start_node(), a);
/// assert_eq!(search.goal_node(), c);
///
/// let path = search.search().unwrap().into_path().unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.distance, 2000.0);
/// assert_eq!(search.state(), SearchState::PathFound);
/// assert_eq!(search.total_distance(), Some(2000.0));
/// ```
///
/// If the goal cannot be reached, [`SearchOutcome::NoRouteFound`] is returned:
/// ```
/// # use route_planner::{graph::RoadGraph, PathSearch, SearchOutcome, SearchState};
/// let mut graph = RoadGraph::new();
/// graph.add_node((0.0, 0.0));
/// graph.add_node((1.0, 1.0));
///
/// let mut search = PathSearch::new(&graph, 0.0, 0.0, 100.0, 100.0).unwrap();
///
/// assert_eq!(search.search().unwrap(), SearchOutcome::NoRouteFound);
/// assert_eq!(search.state(), SearchState::Exhausted);
/// assert_eq!(search.total_distance(), None);
/// ```
#[derive(Debug)]
pub struct PathSearch<'a, M: RouteModel + ?Sized> {
    model: &'a M,
    start_node: NodeID,
    goal_node: NodeID,
    open_set: OpenSet,
    records: NodeIDMap<SearchRecord>,
    state: SearchState,
    total_distance: Option<Distance>,
    config: PlannerConfig,
}

impl<'a, M: RouteModel + ?Sized> PathSearch<'a, M> {
    /// Creates a new PathSearch with the default [`PlannerConfig`]
    ///
    /// ## Arguments
    /// - `model` - the road network to search
    /// - `start_x`, `start_y` - where to start, as percentages `[0, 100]` of the map
    /// - `end_x`, `end_y` - where to go, as percentages `[0, 100]` of the map
    ///
    /// ## Errors
    /// - [`PlannerError::CoordinateOutOfRange`] if a coordinate is not within `[0, 100]`
    /// - [`PlannerError::EmptyGraph`] if the model has no Nodes
    pub fn new(model: &'a M, start_x: f32, start_y: f32, end_x: f32, end_y: f32) -> Result<Self> {
        Self::with_config(model, start_x, start_y, end_x, end_y, PlannerConfig::default())
    }

    /// Creates a new PathSearch. See [`new`](PathSearch::new) and [`PlannerConfig`].
    pub fn with_config(
        model: &'a M,
        start_x: f32,
        start_y: f32,
        end_x: f32,
        end_y: f32,
        config: PlannerConfig,
    ) -> Result<Self> {
        let (start_x, start_y) = (normalize(start_x)?, normalize(start_y)?);
        let (end_x, end_y) = (normalize(end_x)?, normalize(end_y)?);

        let start_node = model
            .find_closest_node(start_x, start_y)
            .ok_or(PlannerError::EmptyGraph)?;
        let goal_node = model
            .find_closest_node(end_x, end_y)
            .ok_or(PlannerError::EmptyGraph)?;
        log::debug!(
            "resolved ({}, {}) to node {} and ({}, {}) to node {}",
            start_x,
            start_y,
            start_node,
            end_x,
            end_y,
            goal_node
        );

        let mut search = PathSearch {
            model,
            start_node,
            goal_node,
            open_set: OpenSet::with_capacity(config.size_hint / 2),
            records: NodeIDMap::with_capacity_and_hasher(config.size_hint, Default::default()),
            state: SearchState::Ready,
            total_distance: None,
            config,
        };
        search.reset();
        Ok(search)
    }

    /// The Node closest to the start coordinates
    pub fn start_node(&self) -> NodeID {
        self.start_node
    }

    /// The Node closest to the end coordinates
    pub fn goal_node(&self) -> NodeID {
        self.goal_node
    }

    /// The current state of the search
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The real-world length of the found Route. `None` unless the state is [`SearchState::PathFound`]
    pub fn total_distance(&self) -> Option<Distance> {
        self.total_distance
    }

    /// The options this search was created with
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// The record of a Node in the current run, if it was discovered
    pub fn record(&self, id: NodeID) -> Option<&SearchRecord> {
        self.records.get(&id)
    }

    /// Returns `true` if the Node was discovered in the current run
    pub fn is_visited(&self, id: NodeID) -> bool {
        self.records.contains_key(&id)
    }

    /// The number of entries waiting in the open set
    pub fn open_len(&self) -> usize {
        self.open_set.len()
    }

    /// The Heuristic: straight-line distance from a Node to the goal
    pub fn heuristic(&self, id: NodeID) -> Distance {
        self.model.distance(id, self.goal_node)
    }

    /// Clears all records and puts the search back into [`SearchState::Ready`]
    fn reset(&mut self) {
        self.records.clear();
        self.open_set.clear();
        self.total_distance = None;
        self.state = SearchState::Ready;

        let h_cost = self.heuristic(self.start_node);
        self.records.insert(
            self.start_node,
            SearchRecord {
                g_cost: 0.0,
                h_cost,
                predecessor: None,
            },
        );
        self.open_set.push(HeuristicElement::new(self.start_node, 0.0, h_cost));
    }

    /// Runs the search from the start.
    ///
    /// On success, the Route is returned and its length is kept in [`total_distance`](PathSearch::total_distance).
    /// Calling this again discards the previous run.
    ///
    /// ## Errors
    /// [`PlannerError::BrokenPredecessorChain`] if the Route cannot be reconstructed. Every
    /// Node popped from the open set has a chain back to the start, so this points to a bug.
    pub fn search(&mut self) -> Result<SearchOutcome> {
        self.reset();
        self.state = SearchState::Running;
        log::debug!(
            "searching from node {} to node {} ({:?})",
            self.start_node,
            self.goal_node,
            self.config.expansion
        );

        while let Some(current) = self.pop_best() {
            if current == self.goal_node {
                let path = self.build_path(current)?;
                self.state = SearchState::PathFound;
                self.total_distance = Some(path.distance);
                log::debug!(
                    "found route over {} nodes with length {} after discovering {} nodes",
                    path.len(),
                    path.distance,
                    self.records.len()
                );
                return Ok(SearchOutcome::PathFound(path));
            }
            self.expand(current);
        }

        self.state = SearchState::Exhausted;
        log::debug!(
            "no route from node {} to node {}, open set exhausted after discovering {} nodes",
            self.start_node,
            self.goal_node,
            self.records.len()
        );
        Ok(SearchOutcome::NoRouteFound)
    }

    /// Removes the open Node with the lowest `f = g + h` and returns it.
    ///
    /// Equal `f` values are resolved by the lower `h`, then the lower [`NodeID`].
    /// Returns `None` once the open set is empty.
    pub fn pop_best(&mut self) -> Option<NodeID> {
        while let Some(element) = self.open_set.pop() {
            // entries left behind when a Node got relaxed
            if element.g.0 > self.records[&element.id].g_cost {
                continue;
            }
            log::trace!(
                "popped node {} with f = {} ({} open)",
                element.id,
                element.f,
                self.open_set.len()
            );
            return Some(element.id);
        }
        None
    }

    /// Discovers the Neighbors of `id` and adds every unvisited one to the open set.
    ///
    /// With [`Expansion::FirstDiscovery`] visited Neighbors are left untouched. With
    /// [`Expansion::Relaxing`] they are updated if `id` offers a strictly cheaper path.
    ///
    /// Panics if `id` was not discovered in the current run.
    #[track_caller]
    pub fn expand(&mut self, id: NodeID) {
        let model = self.model;
        let current_cost = self.records[&id].g_cost;

        for &other in model.neighbors(id) {
            let g_cost = current_cost + model.distance(id, other);

            if let Some(record) = self.records.get_mut(&other) {
                if self.config.expansion == Expansion::Relaxing && g_cost < record.g_cost {
                    record.g_cost = g_cost;
                    record.predecessor = Some(id);
                    self.open_set.push(HeuristicElement::new(other, g_cost, record.h_cost));
                }
                continue;
            }

            let h_cost = self.heuristic(other);
            self.records.insert(
                other,
                SearchRecord {
                    g_cost,
                    h_cost,
                    predecessor: Some(id),
                },
            );
            self.open_set.push(HeuristicElement::new(other, g_cost, h_cost));
        }
    }

    /// Follows the predecessors from `goal` back to the start Node.
    ///
    /// The returned Path is ordered from start to goal. Its distance is the sum of the
    /// straight-line lengths between consecutive Nodes, scaled by the model's
    /// [`metric_scale`](RouteModel::metric_scale).
    ///
    /// ## Errors
    /// [`PlannerError::BrokenPredecessorChain`] if the chain does not lead to the start Node.
    pub fn build_path(&self, goal: NodeID) -> Result<Path<Waypoint>> {
        let mut steps = vec![];
        let mut distance = 0.0;
        let mut current = goal;

        while current != self.start_node {
            // a chain longer than the number of records has to contain a cycle
            if steps.len() > self.records.len() {
                return Err(PlannerError::BrokenPredecessorChain { node: current });
            }
            steps.push(self.waypoint(current));
            let predecessor = self
                .records
                .get(&current)
                .and_then(|record| record.predecessor)
                .ok_or(PlannerError::BrokenPredecessorChain { node: current })?;
            distance += self.model.distance(current, predecessor);
            current = predecessor;
        }
        steps.push(self.waypoint(self.start_node));
        steps.reverse();

        Ok(Path::new(steps, distance * self.model.metric_scale()))
    }

    fn waypoint(&self, id: NodeID) -> Waypoint {
        Waypoint {
            id,
            pos: self.model.node(id).pos(),
        }
    }
}

/// Turns a percentage in `[0, 100]` into a normalized coordinate in `[0, 1]`
fn normalize(value: f32) -> Result<f32> {
    if !(0.0..=100.0).contains(&value) {
        return Err(PlannerError::CoordinateOutOfRange { value });
    }
    Ok(value / 100.0)
}

/// Creates a [`PathSearch`] with the given config and runs it once.
///
/// ## Examples
/// ```
/// use route_planner::{find_route, graph::RoadGraph, PlannerConfig};
///
/// let mut graph = RoadGraph::new().with_metric_scale(100.0);
/// let a = graph.add_node((0.0, 0.5));
/// let b = graph.add_node((0.5, 0.5));
/// let c = graph.add_node((1.0, 0.5));
/// graph.add_way(&[a, b, c]);
///
/// let outcome = find_route(&graph, 0.0, 50.0, 100.0, 50.0, PlannerConfig::OPTIMAL).unwrap();
/// let path = outcome.path().unwrap();
///
/// let ids: Vec<_> = path.iter().map(|waypoint| waypoint.id).collect();
/// assert_eq!(ids, vec![a, b, c]);
/// assert_eq!(path.distance, 100.0);
/// ```
pub fn find_route<M: RouteModel + ?Sized>(
    model: &M,
    start_x: f32,
    start_y: f32,
    end_x: f32,
    end_y: f32,
    config: PlannerConfig,
) -> Result<SearchOutcome> {
    PathSearch::with_config(model, start_x, start_y, end_x, end_y, config)?.search()
}
