//! Union-find over arbitrary hashable keys.
//!
//! Used by Kruskal carving (keys are cell positions) and by region joining
//! (keys are region ids). Unions are by rank; lookups chase parents without
//! compressing the path, so every query leaves the structure untouched.

use anyhow::{Result, anyhow};
use std::{collections::HashMap, fmt::Debug, hash::Hash};

/// Partition of a fixed key set into disjoint sets.
#[derive(Clone, Debug)]
pub struct DisjointSet<T> {
    nodes: HashMap<T, (T, usize)>,
    sets: usize,
}

impl<T> DisjointSet<T>
where
    T: Eq + Hash + Clone + Debug,
{
    /// Builds one singleton set per key. Repeated keys collapse into one.
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = T>) -> Self {
        let nodes: HashMap<T, (T, usize)> = keys
            .into_iter()
            .map(|key| (key.clone(), (key, 0)))
            .collect();
        let sets = nodes.len();
        Self { nodes, sets }
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no keys were inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct sets remaining.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Whether `key` was inserted at construction.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.nodes.contains_key(key)
    }

    /// Canonical representative of the set holding `key`.
    ///
    /// # Errors
    ///
    /// Fails if `key` was never inserted.
    pub fn find_rep(&self, key: &T) -> Result<T> {
        let mut current = key;
        loop {
            let (parent, _) = self
                .nodes
                .get(current)
                .ok_or_else(|| anyhow!("Key {current:?} is not in the disjoint set"))?;
            if parent == current {
                return Ok(current.clone());
            }
            current = parent;
        }
    }

    /// Merges the sets represented by `a` and `b`, by rank.
    ///
    /// On equal rank `a` becomes the root and gains one rank. Arguments are
    /// expected to be representatives already; other members are resolved
    /// first. Merging a set with itself is a no-op.
    ///
    /// # Errors
    ///
    /// Fails if either key was never inserted.
    pub fn union_reps(&mut self, a: &T, b: &T) -> Result<()> {
        let a = self.find_rep(a)?;
        let b = self.find_rep(b)?;
        if a == b {
            return Ok(());
        }

        let rank_a = self.rank(&a);
        let rank_b = self.rank(&b);
        if rank_a < rank_b {
            self.node_mut(&a).0 = b;
        } else {
            self.node_mut(&b).0 = a.clone();
            if rank_a == rank_b {
                self.node_mut(&a).1 += 1;
            }
        }
        self.sets -= 1;
        Ok(())
    }

    // Only called with keys returned by `find_rep`; a miss is a broken invariant.
    fn rank(&self, rep: &T) -> usize {
        self.nodes[rep].1
    }

    fn node_mut(&mut self, key: &T) -> &mut (T, usize) {
        self.nodes
            .get_mut(key)
            .unwrap_or_else(|| panic!("Key {key:?} is not in the disjoint set"))
    }
}
