#[macro_use]
mod macros;
mod api;
mod engine;
mod rules;
mod session;

pub use api::{
    Options, TranslationDetails, TranslationVerbose, Translator, UnitSummary, Whitespace, default_rules,
    translate_forward, translate_forward_with, translate_reverse, translate_reverse_with, translate_verbose_with,
};
pub use rules::{PatternRule, ReverseRuleSet, RuleSet, RuleSetBuilder, RuleTable};
pub use session::{EditOutcome, Field, GateGuard, MirrorSession, SyncGate};

// Paths used by the exported macros.
#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
    pub use regex::Regex;
}

// --- Shared types -----------------------------------------------------------

/// Which way a translation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Lis source tokens to space-free target text.
    Forward,
    /// Target characters back to space-joined Lis tokens.
    Reverse,
}

impl Direction {
    /// The opposite direction.
    pub fn flip(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    /// Separator placed between emitted units in this direction's output.
    pub(crate) fn separator(self) -> &'static str {
        match self {
            Direction::Forward => "",
            Direction::Reverse => " ",
        }
    }
}

bitflags::bitflags! {
    /// Tables that contributed to a single emitted unit.
    ///
    /// A unit built from a phrase plus an absorbed suffix carries
    /// `PHRASE | SUFFIX`; a unit nothing matched carries only `PASSTHROUGH`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RuleKinds: u8 {
        const PHRASE      = 1 << 0;
        const WORD        = 1 << 1;
        const PREFIX      = 1 << 2;
        const SUFFIX      = 1 << 3;
        const PATTERN     = 1 << 4;
        const PASSTHROUGH = 1 << 5;
    }
}

impl RuleKinds {
    /// Short human-readable label, e.g. `"phrase+suffix"`.
    pub fn label(self) -> String {
        if self.is_empty() {
            return "none".to_string();
        }
        let names: Vec<String> = self.iter_names().map(|(name, _)| name.to_ascii_lowercase()).collect();
        names.join("+")
    }
}

/// Half-open range of input positions consumed by a unit.
///
/// Forward spans count tokens, reverse spans count characters (Unicode
/// scalar values), never bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// First consumed position (inclusive).
    pub start: usize,
    /// One past the last consumed position.
    pub end: usize,
}

/// One discrete entry of the pending output buffer.
///
/// Units stay separate until the very end of a run so that a later prefix
/// pull-in can retract the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Unit {
    pub text: String,
    pub span: Span,
    pub kinds: RuleKinds,
}

impl Unit {
    pub fn new(text: impl Into<String>, start: usize, end: usize, kinds: RuleKinds) -> Self {
        Unit { text: text.into(), span: Span { start, end }, kinds }
    }
}
