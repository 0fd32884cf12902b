//! Pending output buffer and affix re-attachment.
//!
//! The forward matcher never writes into a `String` directly. Each translated
//! phrase or word becomes a [`Unit`] in a [`UnitBuffer`], and only once the
//! scan is over are the units joined. This is what makes the prefix pull-in
//! possible: a prefix token is first emitted as an ordinary unit, and when the
//! next phrase or word is built the attacher pops it back out and fuses its
//! translation in front.
//!
//! ```text
//! tokens:  [un] [lof] [s]
//!           │     │    └─ absorb_suffix: "爱" -> "爱们", skip token
//!           │     └────── pull_prefix:   pop unit "un", "爱" -> "不爱"
//!           └──────────── emitted as its own unit first
//! ```
//!
//! The pull-in pops whatever unit was emitted last. When the token before the
//! current one had been swallowed by a longer phrase (or absorbed as a
//! suffix), the whole earlier unit is discarded, not just that token's share
//! of it.

use crate::{RuleKinds, RuleSet, Unit};

/// Ordered list of emitted units; the last one can be retracted.
#[derive(Debug, Default, Clone)]
pub struct UnitBuffer {
    units: Vec<Unit>,
}

impl UnitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    /// Retract the most recently emitted unit.
    pub fn pop(&mut self) -> Option<Unit> {
        self.units.pop()
    }

    pub fn into_units(self) -> Vec<Unit> {
        self.units
    }

    /// Join all unit texts with `separator`.
    pub fn concat(&self, separator: &str) -> String {
        let parts: Vec<&str> = self.units.iter().map(|u| u.text.as_str()).collect();
        parts.join(separator)
    }
}

/// Applies prefix pull-in and suffix absorption around a freshly built unit.
#[derive(Debug, Clone, Copy)]
pub struct AffixAttacher<'r> {
    rules: &'r RuleSet,
}

impl<'r> AffixAttacher<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        AffixAttacher { rules }
    }

    /// If the token just before `unit` is a prefix, fuse its translation in
    /// front of `unit` and retract the previously emitted unit.
    ///
    /// Returns whether a prefix was pulled in.
    pub fn pull_prefix(&self, tokens: &[&str], unit: &mut Unit, buffer: &mut UnitBuffer) -> bool {
        let start = unit.span.start;
        if start == 0 {
            return false;
        }
        let Some(prefix_text) = self.rules.prefix(tokens[start - 1]) else {
            return false;
        };

        unit.text.insert_str(0, prefix_text);
        unit.kinds |= RuleKinds::PREFIX;
        unit.span.start = match buffer.pop() {
            Some(previous) => previous.span.start.min(start - 1),
            None => start - 1,
        };
        true
    }

    /// If the token right after `unit` is a suffix, append its translation and
    /// extend the unit over it.
    ///
    /// Returns whether a suffix was absorbed; the caller skips that token.
    pub fn absorb_suffix(&self, tokens: &[&str], unit: &mut Unit) -> bool {
        let next = unit.span.end;
        let Some(suffix_text) = tokens.get(next).and_then(|token| self.rules.suffix(token)) else {
            return false;
        };

        unit.text.push_str(suffix_text);
        unit.kinds |= RuleKinds::SUFFIX;
        unit.span.end = next + 1;
        true
    }
}
