//! Run metrics.
//!
//! Matchers always collect these; they are a handful of counters and two
//! `Instant` reads per run. Only the verbose API surfaces them.

use crate::Unit;
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Time spent inverting the rule tables (reverse runs only).
    pub invert: Option<Duration>,
    /// Input positions (tokens or characters) in the input.
    pub positions: usize,
    /// Number of phrase-window lookups performed.
    pub phrase_probes: usize,
    /// Number of prefix pull-ins that retracted an earlier unit.
    pub retractions: usize,
}

/// Matcher output bundled with its units and metrics.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Final translated text.
    pub output: String,
    /// Units in emission order, after any retractions.
    pub units: Vec<Unit>,
    pub metrics: RunMetrics,
}

impl RunResult {
    pub(crate) fn empty() -> Self {
        RunResult { output: String::new(), units: Vec::new(), metrics: RunMetrics::default() }
    }
}
