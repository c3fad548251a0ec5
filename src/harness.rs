//! Timing comparison of the two traversals on cycle graphs.

use crate::config::HarnessConfig;
use crate::error::{Error, Result};
use crate::graph::{build_cycle, Graph};
use crate::recursive::{on_stack, walk};
use crate::trail::Trail;
use crate::trail_iterative;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::time::{Duration, Instant};

/// Vertex every comparison starts from.
const START: usize = 0;

/// Timing of one successful traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Measurement {
    /// Wall-clock time of the traversal call alone.
    pub elapsed: Duration,
    /// Number of vertices in the trail.
    pub trail_len: usize,
    /// Whether the trail is an Euler circuit of the generated graph.
    pub valid: bool,
}

impl Measurement {
    fn new(elapsed: Duration, trail: &Trail, g: &Graph) -> Self {
        Self {
            elapsed,
            trail_len: trail.len(),
            valid: trail.is_euler_circuit_of(g),
        }
    }
}

/// What happened to the recursive traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecursiveOutcome {
    /// The traversal finished within its ceiling.
    Completed(Measurement),
    /// The traversal needed more than `limit` levels.
    Failed {
        /// The recursion ceiling in force.
        limit: usize,
    },
}

/// Which traversal won, and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "faster", rename_all = "snake_case")]
pub enum Verdict {
    /// The iterative traversal was strictly faster.
    IterativeFaster {
        /// Slower time over faster time, always above 1.
        ratio: f64,
    },
    /// The recursive traversal was faster or equally fast.
    RecursiveFaster {
        /// Slower time over faster time, at least 1.
        ratio: f64,
    },
    /// Only the iterative traversal produced a trail.
    RecursiveFailed,
}

impl Verdict {
    /// Compare two timings; `recursive` is `None` when that traversal failed.
    pub fn from_timings(iterative: Duration, recursive: Option<Duration>) -> Self {
        match recursive {
            None => Verdict::RecursiveFailed,
            Some(recursive) if iterative < recursive => Verdict::IterativeFaster {
                ratio: ratio(iterative, recursive),
            },
            Some(recursive) => Verdict::RecursiveFaster {
                ratio: ratio(recursive, iterative),
            },
        }
    }

    /// The speed ratio, if both traversals finished.
    pub fn ratio(&self) -> Option<f64> {
        match *self {
            Verdict::IterativeFaster { ratio } | Verdict::RecursiveFaster { ratio } => Some(ratio),
            Verdict::RecursiveFailed => None,
        }
    }
}

/// `slow / fast`, with equal timings giving exactly 1.
fn ratio(fast: Duration, slow: Duration) -> f64 {
    if fast == slow {
        1.0
    } else if fast.is_zero() {
        f64::INFINITY
    } else {
        slow.as_secs_f64() / fast.as_secs_f64()
    }
}

/// Result of [`Harness::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Number of vertices of the cycle.
    pub vertices: usize,
    /// Number of edges of the cycle.
    pub edges: usize,
    /// The iterative traversal, which cannot fail.
    pub iterative: Measurement,
    /// The recursive traversal.
    pub recursive: RecursiveOutcome,
    /// Summary of the two.
    pub verdict: Verdict,
}

impl ComparisonResult {
    /// Return `true` if the recursive traversal hit its ceiling.
    pub fn recursive_failed(&self) -> bool {
        matches!(self.recursive, RecursiveOutcome::Failed { .. })
    }
}

impl Display for ComparisonResult {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "cycle with {} vertices and {} edges", self.vertices, self.edges)?;
        writeln!(
            f,
            "iterative: {:.6} s, trail of {} vertices",
            self.iterative.elapsed.as_secs_f64(),
            self.iterative.trail_len
        )?;
        match self.recursive {
            RecursiveOutcome::Completed(m) => writeln!(
                f,
                "recursive: {:.6} s, trail of {} vertices",
                m.elapsed.as_secs_f64(),
                m.trail_len
            )?,
            RecursiveOutcome::Failed { limit } => {
                writeln!(f, "recursive: failed, recursion ceiling of {} exceeded", limit)?
            }
        }
        match self.verdict {
            Verdict::IterativeFaster { ratio } => write!(f, "iterative is faster: {:.2}×", ratio),
            Verdict::RecursiveFaster { ratio } => write!(f, "recursive is faster: {:.2}×", ratio),
            Verdict::RecursiveFailed => write!(f, "iterative succeeded, recursive failed"),
        }
    }
}

/// Runs both traversals on the same cycle and times them.
///
/// ```
/// use euler_trail::{Harness, HarnessConfig, Verdict};
///
/// let config = HarnessConfig::default()
///     .with_vertex_range(1, 10_000)
///     .with_recursion_limit(1_000);
/// let harness = Harness::new(config).unwrap();
///
/// let small = harness.compare(500).unwrap();
/// assert!(small.verdict.ratio().unwrap() >= 1.0);
///
/// let large = harness.compare(5_000).unwrap();
/// assert_eq!(large.iterative.trail_len, 5_001);
/// assert_eq!(large.verdict, Verdict::RecursiveFailed);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Harness {
    config: HarnessConfig,
    stack_size: usize,
}

impl Harness {
    /// Create a harness, rejecting an unusable configuration.
    pub fn new(config: HarnessConfig) -> Result<Self> {
        config.validate()?;
        let stack_size = config.stack_size()?;
        Ok(Self { config, stack_size })
    }

    /// The configuration in use.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Build the cycle on `n` vertices and time both traversals on
    /// independent copies of it.
    ///
    /// Only the traversal calls are timed, not building or copying the graph.
    /// The recursive traversal hitting its ceiling is reported in the result,
    /// not as an error.
    pub fn compare(&self, n: usize) -> Result<ComparisonResult> {
        if !self.config.accepts(n) {
            return Err(Error::InvalidInput {
                n,
                min: self.config.min_vertices,
                max: self.config.max_vertices,
            });
        }

        let g = build_cycle(n);
        let edges = g.num_edges();
        tracing::debug!("built cycle with {} vertices and {} edges", n, edges);

        let copy = g.clone();
        let start = Instant::now();
        let trail = trail_iterative(START, copy);
        let elapsed = start.elapsed();
        let iterative = Measurement::new(elapsed, &trail, &g);
        tracing::debug!("iterative traversal finished in {:?}", elapsed);
        drop(trail);

        let copy = g.clone();
        let recursive = match self.run_recursive(copy)? {
            (elapsed, Ok(trail)) => {
                tracing::debug!("recursive traversal finished in {:?}", elapsed);
                RecursiveOutcome::Completed(Measurement::new(elapsed, &trail, &g))
            }
            (_, Err(Error::RecursionLimitExceeded { limit })) => {
                tracing::warn!("recursive traversal exceeded its ceiling of {} levels", limit);
                RecursiveOutcome::Failed { limit }
            }
            (_, Err(e)) => return Err(e),
        };

        let verdict = Verdict::from_timings(
            iterative.elapsed,
            match recursive {
                RecursiveOutcome::Completed(m) => Some(m.elapsed),
                RecursiveOutcome::Failed { .. } => None,
            },
        );
        tracing::info!("n = {}: {:?}", n, verdict);

        Ok(ComparisonResult {
            vertices: n,
            edges,
            iterative,
            recursive,
            verdict,
        })
    }

    /// Run the recursive traversal on a thread with room for the whole ceiling.
    fn run_recursive(&self, g: Graph) -> Result<(Duration, Result<Trail>)> {
        let limit = self.config.recursion_limit;
        on_stack(self.stack_size, move || {
            let start = Instant::now();
            let trail = walk(START, g, limit);
            (start.elapsed(), trail)
        })
    }
}

/// Compare both traversals on the `n`-vertex cycle under `config`.
pub fn compare(n: usize, config: &HarnessConfig) -> Result<ComparisonResult> {
    Harness::new(*config)?.compare(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harness(min: usize, max: usize, limit: usize) -> Harness {
        let config = HarnessConfig::default()
            .with_vertex_range(min, max)
            .with_recursion_limit(limit);
        Harness::new(config).unwrap()
    }

    #[test]
    fn both_succeed_below_ceiling() {
        let result = harness(1, 10_000, 10_000).compare(1_000).unwrap();
        assert_eq!(result.vertices, 1_000);
        assert_eq!(result.edges, 1_000);
        assert_eq!(result.iterative.trail_len, 1_001);
        assert!(result.iterative.valid);
        match result.recursive {
            RecursiveOutcome::Completed(m) => {
                assert_eq!(m.trail_len, 1_001);
                assert!(m.valid);
            }
            RecursiveOutcome::Failed { .. } => panic!("recursive traversal should fit"),
        }
        assert!(result.verdict.ratio().unwrap() >= 1.0);
        assert!(!result.recursive_failed());
    }

    #[test]
    fn recursive_fails_above_ceiling() {
        let result = harness(1, 10_000, 1_000).compare(5_000).unwrap();
        assert_eq!(result.iterative.trail_len, 5_001);
        assert!(result.iterative.valid);
        assert_eq!(result.recursive, RecursiveOutcome::Failed { limit: 1_000 });
        assert_eq!(result.verdict, Verdict::RecursiveFailed);
        assert!(result.verdict.ratio().is_none());
        assert!(format!("{}", result).ends_with("iterative succeeded, recursive failed"));
    }

    #[test]
    fn empty_cycle() {
        let result = harness(0, 10, 10).compare(0).unwrap();
        assert_eq!(result.iterative.trail_len, 0);
        assert!(result.iterative.valid);
        assert!(!result.recursive_failed());
        assert!(result.verdict.ratio().unwrap() >= 1.0);
    }

    #[test]
    fn out_of_range() {
        let h = harness(10, 100, 1_000);
        assert!(matches!(
            h.compare(9),
            Err(Error::InvalidInput { n: 9, min: 10, max: 100 })
        ));
        assert!(matches!(h.compare(101), Err(Error::InvalidInput { .. })));
    }

    #[test]
    fn invalid_config() {
        let config = HarnessConfig::default().with_recursion_limit(0);
        assert!(matches!(Harness::new(config), Err(Error::InvalidConfig(_))));
        assert!(matches!(compare(100, &config), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn stack_is_sized_once() {
        let h = harness(1, 10, 1_000);
        assert_eq!(h.stack_size, 1_000 * h.config().stack_bytes_per_frame + (1 << 20));
        let oversized = HarnessConfig {
            stack_bytes_per_frame: usize::MAX,
            ..HarnessConfig::default()
        };
        assert!(matches!(Harness::new(oversized), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn ratios() {
        let secs = Duration::from_secs;
        assert_eq!(
            Verdict::from_timings(secs(2), Some(secs(6))),
            Verdict::IterativeFaster { ratio: 3.0 }
        );
        assert_eq!(
            Verdict::from_timings(secs(8), Some(secs(2))),
            Verdict::RecursiveFaster { ratio: 4.0 }
        );
        assert_eq!(
            Verdict::from_timings(secs(5), Some(secs(5))),
            Verdict::RecursiveFaster { ratio: 1.0 }
        );
        assert_eq!(
            Verdict::from_timings(Duration::ZERO, Some(secs(1))).ratio(),
            Some(f64::INFINITY)
        );
        assert_eq!(Verdict::from_timings(secs(1), None), Verdict::RecursiveFailed);
    }

    #[test]
    fn display() {
        let m = Measurement {
            elapsed: Duration::from_micros(1_500),
            trail_len: 11,
            valid: true,
        };
        let result = ComparisonResult {
            vertices: 10,
            edges: 10,
            iterative: m,
            recursive: RecursiveOutcome::Completed(Measurement {
                elapsed: Duration::from_micros(3_000),
                ..m
            }),
            verdict: Verdict::IterativeFaster { ratio: 2.0 },
        };
        assert_eq!(
            format!("{}", result),
            "cycle with 10 vertices and 10 edges\n\
             iterative: 0.001500 s, trail of 11 vertices\n\
             recursive: 0.003000 s, trail of 11 vertices\n\
             iterative is faster: 2.00×"
        );
    }
}
