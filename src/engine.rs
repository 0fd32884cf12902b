//! Matching and composition engine.
//!
//! Both directions run the same shape of pipeline over a borrowed
//! [`RuleSet`](crate::RuleSet):
//!
//! ```text
//! forward:  text ── split_tokens ──▶ [tokens]
//!                                      │ ForwardMatcher (forward.rs)
//!                                      │  - phrase windows 4..=2, longest first
//!                                      │  - else WordResolver (resolver.rs)
//!                                      │  - AffixAttacher (affix.rs):
//!                                      │      prefix pull-in / suffix absorption
//!                                      v
//!                                  UnitBuffer ── concat("") ──▶ output
//!
//! reverse:  text ── chars ──▶ [chars] + RuleSet::reversed()
//!                                      │ ReverseMatcher (reverse.rs)
//!                                      │  - phrase windows 4..=2, longest first
//!                                      │  - else prefix / suffix / word by char
//!                                      v
//!                                  UnitBuffer ── join(" ") ──▶ output
//! ```
//!
//! Every emission goes through a [`UnitBuffer`] of discrete units rather than
//! straight into a `String`: the forward prefix pull-in has to retract the
//! unit emitted just before it.
//!
//! ## Responsibilities by module
//!
//! - `tokenize.rs`: whitespace policy for forward input.
//! - `resolver.rs`: single-token resolution (direct, affixes, patterns).
//! - `affix.rs`: the pending output buffer and affix re-attachment.
//! - `forward.rs` / `reverse.rs`: the two greedy scanners.
//! - `metrics.rs`: timing and probe counts for verbose runs.
//!
//! ## Debugging
//!
//! Set `LIS_DEBUG_RULES=1` to print per-unit traces to stderr.

#[path = "engine/affix.rs"]
mod affix;
#[path = "engine/forward.rs"]
mod forward;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/resolver.rs"]
mod resolver;
#[path = "engine/reverse.rs"]
mod reverse;
#[path = "engine/tokenize.rs"]
mod tokenize;

#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;

pub use forward::ForwardMatcher;
pub use metrics::RunResult;
pub use reverse::ReverseMatcher;
pub use tokenize::split_tokens;

/// Environment variable that switches on stderr traces.
pub(crate) const DEBUG_ENV: &str = "LIS_DEBUG_RULES";

pub(crate) fn debug_enabled() -> bool {
    std::env::var_os(DEBUG_ENV).is_some()
}
