//! Adjacency lists for undirected multigraphs.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result};

/// An undirected multigraph on the vertices `{0..n-1}`.
///
/// Every edge `u — v` is stored as two half-edges: `v` in the list of `u`
/// and `u` in the list of `v`. Parallel edges are repeated entries and a
/// self-loop puts two copies of `u` in the list of `u`.
#[derive(Ord, PartialOrd, PartialEq, Eq, Clone, Debug, Default)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
}

impl Graph {
    /// Create a graph of size `n` with the edges in `edges`.
    ///
    /// Half-edges are appended in the order of `edges`, which fixes the order
    /// in which the traversals later consume them.
    pub fn new(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut adj = vec![Vec::new(); n];
        for &(u, v) in edges {
            adj[u].push(v);
            adj[v].push(u);
        }
        Graph { adj }
    }

    /// The cycle `0 — 1 — ... — (n-1) — 0`.
    ///
    /// For `n = 1` this is a single self-loop and for `n = 2` a double edge.
    pub fn cycle(n: usize) -> Self {
        let mut adj = vec![Vec::new(); n];
        for u in 0..n {
            let v = (u + 1) % n;
            adj[u].push(v);
            adj[v].push(u);
        }
        Graph { adj }
    }

    /// Number of vertices.
    #[inline]
    pub fn size(&self) -> usize {
        self.adj.len()
    }

    /// Remaining neighbors of `u`, in insertion order.
    #[inline]
    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.adj[u]
    }

    /// Number of remaining half-edges at `u` (a self-loop counts twice).
    #[inline]
    pub fn degree(&self, u: usize) -> usize {
        self.adj[u].len()
    }

    /// Number of remaining edges.
    pub fn num_edges(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Return `true` if every edge has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.adj.iter().all(Vec::is_empty)
    }

    /// Edges as unordered pairs `(min, max)` with their multiplicity.
    pub fn edge_multiset(&self) -> BTreeMap<(usize, usize), usize> {
        let mut half_edges = BTreeMap::new();
        for (u, nbrs) in self.adj.iter().enumerate() {
            for &v in nbrs {
                *half_edges.entry((u.min(v), u.max(v))).or_insert(0) += 1;
            }
        }
        // each edge was seen once from each end, a loop twice from its only end
        for count in half_edges.values_mut() {
            *count /= 2;
        }
        half_edges
    }

    /// Remove the last remaining edge at `u` and return its other end.
    ///
    /// The matching half-edge is removed from the other end's list as a
    /// single occurrence, keeping the order of what is left.
    /// Returns `None` once `u` is isolated.
    pub fn take_edge(&mut self, u: usize) -> Option<usize> {
        let v = self.adj[u].pop()?;
        let reverse = self.adj[v].iter().position(|&w| w == u);
        debug_assert!(reverse.is_some(), "half-edge {} -> {} has no reverse", u, v);
        if let Some(i) = reverse {
            let _ = self.adj[v].remove(i);
        }
        Some(v)
    }

    /// Panic if the lists do not describe an undirected multigraph.
    #[cfg(test)]
    pub(crate) fn check_consistent(&self) {
        let n = self.adj.len();
        for nbrs in &self.adj {
            assert!(nbrs.iter().all(|&v| v < n));
        }
        for (&(u, v), &count) in &self.edge_multiset() {
            let from_u = self.adj[u].iter().filter(|&&w| w == v).count();
            let from_v = self.adj[v].iter().filter(|&&w| w == u).count();
            if u == v {
                assert_eq!(from_u, 2 * count);
            } else {
                assert_eq!(from_u, count);
                assert_eq!(from_v, count);
            }
        }
    }
}

/// Build the `n`-vertex cycle used by the comparison harness.
#[inline]
pub fn build_cycle(n: usize) -> Graph {
    Graph::cycle(n)
}

impl Display for Graph {
    fn fmt(&self, f: &mut Formatter) -> Result {
        for (u, nbrs) in self.adj.iter().enumerate() {
            write!(f, "{}:", u)?;
            for v in nbrs {
                write!(f, " {}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
