//! Target text → source tokens.
//!
//! Mirrors the forward scan over Unicode scalar values instead of tokens,
//! using the inverted tables. There is no affix re-attachment on this side:
//! a prefix or suffix character simply becomes its own source token.
//!
//! ```text
//! "老师们"
//!   i=0  window 3 "老师们"  miss
//!        window 2 "老师"    hit  -> "tich pipo"
//!   i=2  '们' reversed suffix    -> "s"
//!   => "tich pipo s"
//! ```

use super::affix::UnitBuffer;
use super::forward::MIN_PHRASE_WINDOW;
use super::metrics::{RunMetrics, RunResult};
use crate::{Direction, Options, ReverseRuleSet, RuleKinds, RuleSet, Unit};
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct ReverseMatcher<'r> {
    rules: &'r RuleSet,
    options: Options,
}

impl<'r> ReverseMatcher<'r> {
    pub fn new(rules: &'r RuleSet, options: Options) -> Self {
        ReverseMatcher { rules, options }
    }

    pub fn translate(&self, text: &str) -> String {
        self.run(text).output
    }

    pub fn run(&self, text: &str) -> RunResult {
        if text.trim().is_empty() {
            return RunResult::empty();
        }

        let started = Instant::now();
        let debug = super::debug_enabled();

        let reversed = self.rules.reversed();
        let invert = started.elapsed();

        let chars: Vec<char> = text.chars().collect();
        let max_window = self.options.max_phrase_window.max(MIN_PHRASE_WINDOW);
        let mut buffer = UnitBuffer::new();
        let mut metrics = RunMetrics { positions: chars.len(), invert: Some(invert), ..RunMetrics::default() };

        let mut i = 0;
        while i < chars.len() {
            let unit = match Self::match_phrase(&reversed, &chars, i, max_window, &mut metrics) {
                Some(unit) => unit,
                None => Self::match_single(&reversed, chars[i], i),
            };

            if debug {
                let consumed: String = chars[unit.span.start..unit.span.end].iter().collect();
                eprintln!(
                    "[reverse] chars {}..{} \"{}\" -> \"{}\" ({})",
                    unit.span.start,
                    unit.span.end,
                    consumed,
                    unit.text,
                    unit.kinds.label()
                );
            }

            i = unit.span.end;
            buffer.push(unit);
        }

        let output = buffer.concat(Direction::Reverse.separator());
        metrics.total = started.elapsed();
        RunResult { output, units: buffer.into_units(), metrics }
    }

    fn match_phrase(
        reversed: &ReverseRuleSet,
        chars: &[char],
        i: usize,
        max_window: usize,
        metrics: &mut RunMetrics,
    ) -> Option<Unit> {
        let longest = max_window.min(chars.len() - i);
        for len in (MIN_PHRASE_WINDOW..=longest).rev() {
            metrics.phrase_probes += 1;
            let candidate: String = chars[i..i + len].iter().collect();
            if let Some(source) = reversed.phrase(&candidate) {
                return Some(Unit::new(source, i, i + len, RuleKinds::PHRASE));
            }
        }
        None
    }

    fn match_single(reversed: &ReverseRuleSet, ch: char, i: usize) -> Unit {
        let mut buf = [0u8; 4];
        let key: &str = ch.encode_utf8(&mut buf);
        match reversed.single(key) {
            Some((source, kinds)) => Unit::new(source, i, i + 1, kinds),
            None => Unit::new(key, i, i + 1, RuleKinds::PASSTHROUGH),
        }
    }
}
