//! A Module with some utilities for working with NodeIDs

use std::hash::{BuildHasherDefault, Hasher};

/// The Type used to reference a Node in a [`RoadGraph`](crate::graph::RoadGraph)
pub type NodeID = usize;

/// A specialized [`HashMap`](hashbrown::HashMap) for NodeIDs with a faster Hasher
pub(crate) type NodeIDMap<V> = hashbrown::HashMap<NodeID, V, BuildHasherDefault<NodeIDHasher>>;

/// A [`Hasher`] specialized on NodeIDs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) struct NodeIDHasher(u64);

impl Hasher for NodeIDHasher {
    /// panics, since only NodeIDs are supposed to be used
    fn write(&mut self, _: &[u8]) {
        unreachable!("This Hasher only works with NodeIDs")
    }
    /// Writes a single NodeID into this hasher.
    fn write_usize(&mut self, id: NodeID) {
        // hashbrown takes the top 7 bits as tag, so spread the id over the whole word
        self.0 = (id as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }
    fn finish(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_roundtrip() {
        let mut map = NodeIDMap::default();
        for id in 0..100 {
            map.insert(id, id * 2);
        }
        assert_eq!(map.len(), 100);
        assert_eq!(map[&42], 84);
        assert!(!map.contains_key(&100));
    }
}
