//! Euler circuits by Hierholzer's algorithm, computed two ways.
//!
//! [`trail_iterative`] keeps its own stack of vertices on the heap, while
//! [`trail_recursive`] walks on the call stack and gives up with
//! [`Error::RecursionLimitExceeded`] once it is deeper than an explicit
//! ceiling. Both consume their own copy of the graph, taking edges in the
//! same order, and so return the same trail.
//!
//! The [`Harness`] times the two on cycle graphs of a chosen size.
//!
//!```
//!use euler_trail::{build_cycle, trail_iterative, trail_recursive, Error};
//!
//!let c4 = build_cycle(4);
//!let trail = trail_iterative(0, c4.clone());
//!assert_eq!(trail.vertices(), &[0, 1, 2, 3, 0]);
//!assert!(trail.is_euler_circuit_of(&c4));
//!
//!// Both variants take the edges in the same order
//!assert_eq!(trail_recursive(0, c4.clone(), 100).unwrap(), trail);
//!
//!// A cycle on n vertices needs n + 1 levels of recursion
//!let c1000 = build_cycle(1000);
//!assert_eq!(trail_iterative(0, c1000.clone()).len(), 1001);
//!assert!(matches!(
//!    trail_recursive(0, c1000, 500),
//!    Err(Error::RecursionLimitExceeded { limit: 500 })
//!));
//!```

#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    unused_labels,
    unused_results
)]

mod config;
mod error;
mod graph;
mod harness;
mod recursive;
mod trail;

pub use crate::config::HarnessConfig;
pub use crate::error::{Error, Result};
pub use crate::graph::{build_cycle, Graph};
pub use crate::harness::{
    compare, ComparisonResult, Harness, Measurement, RecursiveOutcome, Verdict,
};
pub use crate::recursive::{trail_recursive, STACK_BYTES_PER_FRAME};
pub use crate::trail::Trail;

/// Euler trail of `g` from `start`, using an explicit stack.
///
/// The vertex on top of the stack is inspected without popping it.
/// While it has an unused edge, that edge is removed from both ends and its
/// other end is pushed. Once it has none it is popped and emitted. The
/// emitted sequence is returned as is: on a connected graph with only even
/// degrees it is an Euler circuit from `start` back to `start`.
///
/// Runs in `O(V + E)` time for bounded degrees and never grows the call
/// stack. An unknown `start` gives the empty trail.
pub fn trail_iterative(start: usize, mut g: Graph) -> Trail {
    let mut path = Vec::with_capacity(g.num_edges() + 1);
    if start >= g.size() {
        return Trail::from(path);
    }
    let mut stack = vec![start];
    while let Some(&u) = stack.last() {
        match g.take_edge(u) {
            Some(v) => stack.push(v),
            None => {
                let _ = stack.pop();
                path.push(u);
            }
        }
    }
    Trail::from(path)
}

/// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c4() {
        let c4 = build_cycle(4);
        let trail = trail_iterative(0, c4.clone());
        assert_eq!(trail.vertices(), &[0, 1, 2, 3, 0]);
        assert!(trail.is_euler_circuit_of(&c4));
    }

    #[test]
    fn cycles() {
        for n in 1..200 {
            let g = build_cycle(n);
            let trail = trail_iterative(0, g.clone());
            assert_eq!(trail.len(), n + 1);
            assert_eq!(trail.first(), Some(0));
            assert_eq!(trail.last(), Some(0));
            assert!(trail.is_euler_circuit_of(&g));
        }
    }

    #[test]
    fn degenerate() {
        assert_eq!(trail_iterative(0, build_cycle(1)).vertices(), &[0, 0]);
        assert_eq!(trail_iterative(0, build_cycle(2)).vertices(), &[0, 1, 0]);
        assert!(trail_iterative(0, build_cycle(0)).is_empty());
        assert!(trail_iterative(7, build_cycle(3)).is_empty());
    }

    #[test]
    fn other_start() {
        let g = build_cycle(6);
        let trail = trail_iterative(3, g.clone());
        assert_eq!(trail.first(), Some(3));
        assert!(trail.is_euler_circuit_of(&g));
    }

    #[test]
    fn splices_side_circuits() {
        // two triangles sharing vertex 0
        let bowtie = Graph::new(5, &[(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)]);
        let trail = trail_iterative(0, bowtie.clone());
        assert!(trail.is_euler_circuit_of(&bowtie));
        assert_eq!(trail, trail_recursive(0, bowtie, 100).unwrap());
    }

    #[test]
    fn same_as_recursive() {
        for n in 0..300 {
            let g = build_cycle(n);
            let iterative = trail_iterative(0, g.clone());
            let recursive = trail_recursive(0, g, n + 1).unwrap();
            assert_eq!(iterative, recursive);
        }
    }
}
