use serde::{Deserialize, Serialize};

/// Upper bound on swap loop iterations used when none is configured.
///
/// A legitimate swap takes at most one step per initialized tick plus one
/// per bitmap word it walks through; at the finest spacing that is below
/// two million steps across the full tick range.
pub const DEFAULT_MAX_ITERATIONS: usize = 4_000_000;

/// Tunables for [`crate::SwapSimulator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Maximum number of tick‑crossing steps a single swap may take before it
    /// is aborted with `SwapError::IterationLimitExceeded`. `None` disables
    /// the guard.
    pub max_iterations: Option<usize>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_iterations: Some(DEFAULT_MAX_ITERATIONS),
        }
    }
}

impl SimulatorConfig {
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}
