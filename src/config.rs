//! Harness configuration: accepted graph sizes and the recursion ceiling.

use crate::error::{Error, Result};
use crate::recursive::{stack_size, STACK_BYTES_PER_FRAME};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for a [`Harness`](crate::Harness).
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```json
/// { "max_vertices": 50000, "recursion_limit": 200000 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Smallest accepted vertex count.
    pub min_vertices: usize,
    /// Largest accepted vertex count.
    pub max_vertices: usize,
    /// Maximum call depth of the recursive traversal.
    pub recursion_limit: usize,
    /// Stack reserved per recursion level on the worker thread.
    pub stack_bytes_per_frame: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            min_vertices: 10,
            max_vertices: 500_000,
            recursion_limit: 200_000,
            stack_bytes_per_frame: STACK_BYTES_PER_FRAME,
        }
    }
}

impl HarnessConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Accept vertex counts in `min..=max`.
    pub fn with_vertex_range(mut self, min: usize, max: usize) -> Self {
        self.min_vertices = min;
        self.max_vertices = max;
        self
    }

    /// Set the recursion ceiling.
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.min_vertices > self.max_vertices {
            return Err(Error::InvalidConfig(format!(
                "min_vertices ({}) is larger than max_vertices ({})",
                self.min_vertices, self.max_vertices
            )));
        }
        if self.recursion_limit == 0 {
            return Err(Error::InvalidConfig("recursion_limit must be positive".into()));
        }
        let _ = self.stack_size()?;
        Ok(())
    }

    /// Return `true` if `n` is an accepted vertex count.
    #[inline]
    pub fn accepts(&self, n: usize) -> bool {
        (self.min_vertices..=self.max_vertices).contains(&n)
    }

    /// Stack size of the thread running the recursive traversal.
    pub(crate) fn stack_size(&self) -> Result<usize> {
        stack_size(self.recursion_limit, self.stack_bytes_per_frame).ok_or_else(|| {
            Error::InvalidConfig(format!(
                "a stack for {} frames of {} bytes does not fit in memory",
                self.recursion_limit, self.stack_bytes_per_frame
            ))
        })
    }
}
