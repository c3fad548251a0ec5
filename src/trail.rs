//! Euler trails as produced by the traversals.

use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result};

/// A walk through a graph, stored in the order the vertices were emitted.
///
/// The traversals emit a vertex once all its edges are used up. For an
/// undirected circuit that order is itself a closed walk, so no reversal is
/// applied.
#[derive(Ord, PartialOrd, PartialEq, Eq, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trail(Vec<usize>);

impl Trail {
    /// Number of vertices in the walk (one more than its number of edges).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if no vertex was emitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The vertices of the walk.
    #[inline]
    pub fn vertices(&self) -> &[usize] {
        &self.0
    }

    /// First vertex of the walk.
    pub fn first(&self) -> Option<usize> {
        self.0.first().copied()
    }

    /// Last vertex of the walk.
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Return `true` if the walk ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.first() == self.last()
    }

    /// Consecutive pairs of the walk, one per traversed edge.
    pub fn steps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// Unwrap the vertices.
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// Return `true` if the walk is an Euler circuit of `g`.
    ///
    /// `g` must be the graph before the traversal consumed it. The walk must
    /// be closed and use every edge of `g` exactly once, counting parallel
    /// edges separately. An edgeless graph accepts the empty walk and any
    /// single vertex.
    pub fn is_euler_circuit_of(&self, g: &Graph) -> bool {
        let edges = g.edge_multiset();
        if edges.is_empty() {
            return self.len() <= 1 && self.0.iter().all(|&u| u < g.size());
        }
        if self.len() != g.num_edges() + 1 || !self.is_closed() {
            return false;
        }
        let mut used = BTreeMap::new();
        for (u, v) in self.steps() {
            *used.entry((u.min(v), u.max(v))).or_insert(0) += 1;
        }
        used == edges
    }
}

impl From<Vec<usize>> for Trail {
    fn from(vertices: Vec<usize>) -> Self {
        Trail(vertices)
    }
}

impl Display for Trail {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "[")?;
        for (i, u) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", u)?;
        }
        write!(f, "]")
    }
}
