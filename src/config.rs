/// How [`PathSearch::expand`](crate::PathSearch::expand) treats Neighbors that were already discovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Expansion {
    /// A Node keeps the Cost and predecessor of its first discovery, even if a cheaper
    /// way to reach it shows up later.
    ///
    /// The resulting Route is only guaranteed to be the shortest one if the Graph is built
    /// so that the first discovery of every Node is already optimal.
    FirstDiscovery,
    /// A Node reached again with a strictly lower Cost takes the new predecessor and is
    /// re-inserted into the open set. Together with the admissible straight-line Heuristic
    /// this always yields a shortest Route.
    Relaxing,
}

/// Options for configuring a [`PathSearch`](crate::PathSearch)
///
/// Default options:
/// ```
/// # use route_planner::{Expansion, PlannerConfig};
/// assert_eq!(
///     PlannerConfig {
///         expansion: Expansion::FirstDiscovery,
///         size_hint: 64,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Whether already discovered Nodes may be updated with cheaper Costs (defaults to
    /// [`Expansion::FirstDiscovery`])
    pub expansion: Expansion,
    /// The number of Nodes the search expects to discover (defaults to `64`).
    ///
    /// Only used to pre-allocate the open set and the search records.
    pub size_hint: usize,
}

impl PlannerConfig {
    /// a PlannerConfig that never updates a Node after its first discovery
    ///
    /// Values:
    /// ```
    /// # use route_planner::{Expansion, PlannerConfig};
    /// assert_eq!(PlannerConfig::FAITHFUL.expansion, Expansion::FirstDiscovery);
    /// ```
    pub const FAITHFUL: PlannerConfig = PlannerConfig {
        expansion: Expansion::FirstDiscovery,
        size_hint: 64,
    };
    /// a PlannerConfig that always finds a shortest Route
    ///
    /// Values:
    /// ```
    /// # use route_planner::{Expansion, PlannerConfig};
    /// assert_eq!(PlannerConfig::OPTIMAL.expansion, Expansion::Relaxing);
    /// ```
    pub const OPTIMAL: PlannerConfig = PlannerConfig {
        expansion: Expansion::Relaxing,
        size_hint: 64,
    };

    /// Returns a copy with the given [`size_hint`](PlannerConfig::size_hint)
    pub fn with_size_hint(self, size_hint: usize) -> PlannerConfig {
        PlannerConfig { size_hint, ..self }
    }
}

impl Default for PlannerConfig {
    fn default() -> PlannerConfig {
        PlannerConfig::FAITHFUL
    }
}
