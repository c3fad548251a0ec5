//! Hierholzer's algorithm on the call stack.

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::trail::Trail;
use std::panic;
use std::thread;

/// Stack reserved per recursion level by [`trail_recursive`].
pub const STACK_BYTES_PER_FRAME: usize = 512;

/// Euler trail of `g` from `start`, recursing once per traversed edge.
///
/// Uses the same edge order as [`trail_iterative`](crate::trail_iterative),
/// so both return the same trail on the same input. The first call has
/// depth 1 and each traversed edge adds one level; going past `limit`
/// levels fails with [`Error::RecursionLimitExceeded`] and the partial
/// trail is dropped. A cycle on `n ≥ 1` vertices needs `n + 1` levels.
///
/// The recursion runs on its own thread, with room for as many frames as
/// it can actually reach (`limit`, or one more than the number of edges if
/// that is smaller), and the caller blocks until it is done.
/// An unknown `start` gives the empty trail.
pub fn trail_recursive(start: usize, g: Graph, limit: usize) -> Result<Trail> {
    let levels = limit.min(g.num_edges() + 1);
    // an impossible size is left for the thread builder to refuse
    let size = stack_size(levels, STACK_BYTES_PER_FRAME).unwrap_or(usize::MAX);
    on_stack(size, move || walk(start, g, limit))?
}

/// Stack needed for `levels` frames of `bytes_per_frame`, plus a fixed base.
pub(crate) fn stack_size(levels: usize, bytes_per_frame: usize) -> Option<usize> {
    const BASE: usize = 1 << 20;
    levels.checked_mul(bytes_per_frame)?.checked_add(BASE)
}

/// Run `f` on a fresh thread with `stack_size` bytes of stack and wait for it.
pub(crate) fn on_stack<T, F>(stack_size: usize, f: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let worker = thread::Builder::new()
        .name("hierholzer-recursive".into())
        .stack_size(stack_size)
        .spawn(f)?;
    match worker.join() {
        Ok(value) => Ok(value),
        Err(payload) => panic::resume_unwind(payload),
    }
}

/// The recursion itself, on the current thread's stack.
pub(crate) fn walk(start: usize, mut g: Graph, limit: usize) -> Result<Trail> {
    let mut path = Vec::with_capacity(g.num_edges() + 1);
    if start < g.size() {
        visit(start, &mut g, &mut path, 1, limit)?;
    }
    Ok(Trail::from(path))
}

fn visit(
    u: usize,
    g: &mut Graph,
    path: &mut Vec<usize>,
    depth: usize,
    limit: usize,
) -> Result<()> {
    if depth > limit {
        return Err(Error::RecursionLimitExceeded { limit });
    }
    while let Some(v) = g.take_edge(u) {
        visit(v, g, path, depth + 1, limit)?;
    }
    path.push(u);
    Ok(())
}
