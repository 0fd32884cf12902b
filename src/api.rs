use crate::engine::{self, RunResult};
use crate::{Direction, RuleKinds, RuleSet, Span, Unit};
use once_cell::sync::Lazy;
use std::time::Duration;

static DEFAULT_RULES: Lazy<RuleSet> = Lazy::new(crate::rules::lis::get);

/// The bundled Lis → Chinese rule tables.
pub fn default_rules() -> &'static RuleSet {
    &DEFAULT_RULES
}

/// How forward input is cut into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Whitespace {
    /// Split on every single space. Consecutive spaces produce empty tokens,
    /// which pass through as empty strings.
    #[default]
    Literal,
    /// Split on runs of any whitespace, dropping empty tokens.
    Collapse,
}

/// Options that affect matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Tokenization policy for forward input.
    pub whitespace: Whitespace,
    /// Largest phrase window, in tokens (forward) or characters (reverse).
    /// Values below 2 behave like 2.
    pub max_phrase_window: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options { whitespace: Whitespace::Literal, max_phrase_window: 4 }
    }
}

/// A rule set paired with options, ready to translate in either direction.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'r> {
    rules: &'r RuleSet,
    options: Options,
}

impl<'r> Translator<'r> {
    pub fn new(rules: &'r RuleSet, options: Options) -> Self {
        Translator { rules, options }
    }

    pub fn rules(&self) -> &'r RuleSet {
        self.rules
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Lis tokens → target text.
    pub fn forward(&self, text: &str) -> String {
        engine::ForwardMatcher::new(self.rules, self.options).translate(text)
    }

    /// Target text → Lis tokens.
    pub fn reverse(&self, text: &str) -> String {
        engine::ReverseMatcher::new(self.rules, self.options).translate(text)
    }

    pub fn translate(&self, direction: Direction, text: &str) -> String {
        match direction {
            Direction::Forward => self.forward(text),
            Direction::Reverse => self.reverse(text),
        }
    }

    fn run(&self, direction: Direction, text: &str) -> RunResult {
        match direction {
            Direction::Forward => engine::ForwardMatcher::new(self.rules, self.options).run(text),
            Direction::Reverse => engine::ReverseMatcher::new(self.rules, self.options).run(text),
        }
    }
}

impl Default for Translator<'static> {
    fn default() -> Self {
        Translator::new(default_rules(), Options::default())
    }
}

/// A compact summary of one emitted unit, used in verbose results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSummary {
    /// Input positions consumed (tokens forward, characters reverse).
    pub span: Span,
    /// The consumed input, re-joined the way the direction splits it.
    pub source: String,
    /// Translated text of the unit.
    pub text: String,
    /// Tables that contributed.
    pub kinds: RuleKinds,
}

/// Extra details returned by [`translate_verbose_with`].
#[derive(Debug, Clone)]
pub struct TranslationDetails {
    pub direction: Direction,
    /// Total elapsed time.
    pub total: Duration,
    /// Time spent inverting the tables, for reverse runs.
    pub invert: Option<Duration>,
    /// Input positions scanned (tokens forward, characters reverse).
    pub positions: usize,
    /// Phrase-window lookups performed.
    pub phrase_probes: usize,
    /// Prefix pull-ins that retracted an already emitted unit.
    pub retractions: usize,
    /// Units in output order.
    pub units: Vec<UnitSummary>,
}

/// Result from [`translate_verbose_with`].
#[derive(Debug, Clone)]
pub struct TranslationVerbose {
    pub text: String,
    pub output: String,
    pub elapsed: Duration,
    pub details: TranslationDetails,
}

/// Translate Lis `text` with the bundled tables.
///
/// # Example
/// ```
/// use lis_translator::translate_forward;
///
/// assert_eq!(translate_forward("ai lof yu"), "我爱你");
/// assert_eq!(translate_forward("pipo s"), "人们");
/// ```
pub fn translate_forward(text: &str) -> String {
    translate_forward_with(text, default_rules(), &Options::default())
}

/// Translate target `text` back to Lis with the bundled tables.
///
/// # Example
/// ```
/// use lis_translator::translate_reverse;
///
/// assert_eq!(translate_reverse("老师"), "tich pipo");
/// ```
pub fn translate_reverse(text: &str) -> String {
    translate_reverse_with(text, default_rules(), &Options::default())
}

pub fn translate_forward_with(text: &str, rules: &RuleSet, options: &Options) -> String {
    Translator::new(rules, *options).forward(text)
}

pub fn translate_reverse_with(text: &str, rules: &RuleSet, options: &Options) -> String {
    Translator::new(rules, *options).reverse(text)
}

/// Translate and return per-unit details and timings.
///
/// Useful for rule debugging; the plain functions skip building summaries.
pub fn translate_verbose_with(
    text: &str,
    direction: Direction,
    rules: &RuleSet,
    options: &Options,
) -> TranslationVerbose {
    let run = Translator::new(rules, *options).run(direction, text);
    let units = summarize_units(text, direction, options, &run.units);

    let details = TranslationDetails {
        direction,
        total: run.metrics.total,
        invert: run.metrics.invert,
        positions: run.metrics.positions,
        phrase_probes: run.metrics.phrase_probes,
        retractions: run.metrics.retractions,
        units,
    };

    TranslationVerbose { text: text.to_string(), output: run.output, elapsed: run.metrics.total, details }
}

fn summarize_units(text: &str, direction: Direction, options: &Options, units: &[Unit]) -> Vec<UnitSummary> {
    match direction {
        Direction::Forward => {
            let tokens = engine::split_tokens(text, options.whitespace);
            units.iter().map(|unit| summarize(unit, tokens[unit.span.start..unit.span.end].join(" "))).collect()
        }
        Direction::Reverse => {
            let chars: Vec<char> = text.chars().collect();
            units.iter().map(|unit| summarize(unit, chars[unit.span.start..unit.span.end].iter().collect())).collect()
        }
    }
}

fn summarize(unit: &Unit, source: String) -> UnitSummary {
    UnitSummary { span: unit.span, source, text: unit.text.clone(), kinds: unit.kinds }
}
