use crate::{NodeID, Point};

/// The Type used for lengths and Costs, both in normalized space and in real-world units
pub type Distance = f32;

/// A snapshot of a Node on a found Route
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// the Node this Waypoint was taken from
    pub id: NodeID,
    /// the Position of that Node in normalized space
    pub pos: Point,
}

use std::fmt;
impl fmt::Display for Waypoint {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "#{}({}, {})", self.id, self.pos.0, self.pos.1)
    }
}

/// A generic implementation of a Path
///
/// Stores a sequence of Nodes in `path`, ordered from start to goal, and the total
/// real-world length of traversing these Nodes in `distance`.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    /// the Path
    pub path: Vec<P>,
    /// the total length of the Path
    pub distance: Distance,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total length
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use route_planner::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 4.2);
    ///
    /// assert_eq!(path.path, vec!['a', 'b', 'c']);
    /// assert_eq!(path.distance, 4.2);
    /// ```
    pub fn new(path: Vec<P>, distance: Distance) -> Path<P> {
        Path { path, distance }
    }

    /// the first Node of the Path
    pub fn start(&self) -> Option<&P> {
        self.path.first()
    }

    /// the last Node of the Path
    pub fn goal(&self) -> Option<&P> {
        self.path.last()
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Distance = {}]: ", self.distance)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}
