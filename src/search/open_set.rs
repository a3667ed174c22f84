use crate::{path::Distance, NodeID};
use ordered_float::OrderedFloat;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An entry of the open set, ranked by `f = g + h`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct HeuristicElement {
    pub id: NodeID,
    pub g: OrderedFloat<Distance>,
    pub h: OrderedFloat<Distance>,
    pub f: OrderedFloat<Distance>,
}

impl HeuristicElement {
    pub fn new(id: NodeID, g: Distance, h: Distance) -> Self {
        Self {
            id,
            g: OrderedFloat(g),
            h: OrderedFloat(h),
            f: OrderedFloat(g + h),
        }
    }
}

impl PartialOrd for HeuristicElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for HeuristicElement {
    /// reversed, so that the BinaryHeap pops the lowest `f`, then lowest `h`, then lowest id
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.f
            .cmp(&self.f)
            .then_with(|| rhs.h.cmp(&self.h))
            .then_with(|| rhs.id.cmp(&self.id))
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<HeuristicElement>,
}

impl OpenSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, element: HeuristicElement) {
        self.heap.push(element);
    }

    pub fn pop(&mut self) -> Option<HeuristicElement> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_f() {
        let mut open = OpenSet::default();
        open.push(HeuristicElement::new(0, 1.0, 2.0));
        open.push(HeuristicElement::new(1, 0.5, 0.5));
        open.push(HeuristicElement::new(2, 2.0, 0.5));

        assert_eq!(open.len(), 3);
        assert_eq!(open.pop().map(|e| e.id), Some(1));
        assert_eq!(open.pop().map(|e| e.id), Some(2));
        assert_eq!(open.pop().map(|e| e.id), Some(0));
        assert_eq!(open.len(), 0);
    }

    #[test]
    fn tie_break() {
        let mut open = OpenSet::default();
        open.push(HeuristicElement::new(5, 1.0, 1.0));
        open.push(HeuristicElement::new(3, 0.0, 2.0));
        open.push(HeuristicElement::new(4, 1.5, 0.5));
        open.push(HeuristicElement::new(2, 1.5, 0.5));

        // same f everywhere: lower h first, then lower id
        let order: Vec<_> = std::iter::from_fn(|| open.pop().map(|e| e.id)).collect();
        assert_eq!(order, vec![2, 4, 5, 3]);
    }
}
