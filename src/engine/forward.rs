//! Source tokens → target text.
//!
//! A greedy left-to-right scan over tokens. At each cursor position the
//! longest phrase window wins; otherwise the single token goes through the
//! [`WordResolver`]. Either way the resulting unit gets a chance to pull in a
//! preceding prefix token and absorb a following suffix token before it is
//! pushed to the [`UnitBuffer`].
//!
//! ```text
//! "tich pipo s"
//!   i=0  window 3 "tich pipo s"  miss
//!        window 2 "tich pipo"    hit  -> "老师"
//!        next token "s" is a suffix   -> "老师们", cursor += 2 + 1
//! ```

use super::affix::{AffixAttacher, UnitBuffer};
use super::metrics::{RunMetrics, RunResult};
use super::resolver::WordResolver;
use super::tokenize::split_tokens;
use crate::{Direction, Options, RuleKinds, RuleSet, Unit};
use std::time::Instant;

/// Smallest phrase window; single tokens are never looked up as phrases.
pub(crate) const MIN_PHRASE_WINDOW: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct ForwardMatcher<'r> {
    rules: &'r RuleSet,
    options: Options,
}

impl<'r> ForwardMatcher<'r> {
    pub fn new(rules: &'r RuleSet, options: Options) -> Self {
        ForwardMatcher { rules, options }
    }

    /// Translate and return only the output text.
    pub fn translate(&self, text: &str) -> String {
        self.run(text).output
    }

    /// Translate, keeping the emitted units and run metrics.
    pub fn run(&self, text: &str) -> RunResult {
        if text.trim().is_empty() {
            return RunResult::empty();
        }

        let started = Instant::now();
        let debug = super::debug_enabled();
        let tokens = split_tokens(text, self.options.whitespace);
        let max_window = self.options.max_phrase_window.max(MIN_PHRASE_WINDOW);

        let resolver = WordResolver::new(self.rules);
        let attacher = AffixAttacher::new(self.rules);
        let mut buffer = UnitBuffer::new();
        let mut metrics = RunMetrics { positions: tokens.len(), ..RunMetrics::default() };

        let mut i = 0;
        while i < tokens.len() {
            let mut unit = match self.match_phrase(&tokens, i, max_window, &mut metrics) {
                Some(unit) => unit,
                None => {
                    let resolution = resolver.resolve(tokens[i]);
                    Unit::new(resolution.text, i, i + 1, resolution.kinds)
                }
            };

            if attacher.pull_prefix(&tokens, &mut unit, &mut buffer) {
                metrics.retractions += 1;
            }
            attacher.absorb_suffix(&tokens, &mut unit);

            if debug {
                eprintln!(
                    "[forward] tokens {}..{} {:?} -> \"{}\" ({})",
                    unit.span.start,
                    unit.span.end,
                    &tokens[i..unit.span.end],
                    unit.text,
                    unit.kinds.label()
                );
            }

            i = unit.span.end;
            buffer.push(unit);
        }

        let output = buffer.concat(Direction::Forward.separator());
        metrics.total = started.elapsed();
        RunResult { output, units: buffer.into_units(), metrics }
    }

    /// Longest phrase starting at token `i`, trying windows `max..=2`.
    fn match_phrase(&self, tokens: &[&str], i: usize, max_window: usize, metrics: &mut RunMetrics) -> Option<Unit> {
        let longest = max_window.min(tokens.len() - i);
        for len in (MIN_PHRASE_WINDOW..=longest).rev() {
            metrics.phrase_probes += 1;
            let candidate = tokens[i..i + len].join(" ");
            if let Some(target) = self.rules.phrase(&candidate) {
                return Some(Unit::new(target, i, i + len, RuleKinds::PHRASE));
            }
        }
        None
    }
}
