use super::{PatternRule, RuleTable};
use crate::RuleKinds;

/// The static tables a translation runs against.
///
/// Build one with [`RuleSet::builder`]; once built it has no mutating methods.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    phrases: RuleTable,
    words: RuleTable,
    prefixes: RuleTable,
    suffixes: RuleTable,
    patterns: Vec<PatternRule>,
}

impl RuleSet {
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Assemble a rule set from ready-made tables (no pattern rules).
    pub fn from_tables(phrases: RuleTable, words: RuleTable, prefixes: RuleTable, suffixes: RuleTable) -> Self {
        RuleSet { phrases, words, prefixes, suffixes, patterns: Vec::new() }
    }

    pub fn phrases(&self) -> &RuleTable {
        &self.phrases
    }

    pub fn words(&self) -> &RuleTable {
        &self.words
    }

    pub fn prefixes(&self) -> &RuleTable {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &RuleTable {
        &self.suffixes
    }

    pub fn patterns(&self) -> &[PatternRule] {
        &self.patterns
    }

    pub fn phrase(&self, key: &str) -> Option<&str> {
        self.phrases.get(key)
    }

    pub fn word(&self, key: &str) -> Option<&str> {
        self.words.get(key)
    }

    pub fn prefix(&self, key: &str) -> Option<&str> {
        self.prefixes.get(key)
    }

    pub fn suffix(&self, key: &str) -> Option<&str> {
        self.suffixes.get(key)
    }

    /// Invert every table for target → source lookups.
    ///
    /// Reverse translation calls this once per run; nothing is cached.
    pub fn reversed(&self) -> ReverseRuleSet {
        ReverseRuleSet {
            phrases: self.phrases.inverted(),
            words: self.words.inverted(),
            prefixes: self.prefixes.inverted(),
            suffixes: self.suffixes.inverted(),
        }
    }
}

/// Incremental constructor for [`RuleSet`].
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: RuleSet,
}

impl RuleSetBuilder {
    pub fn phrase(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.rules.phrases.insert(source, target);
        self
    }

    pub fn word(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.rules.words.insert(source, target);
        self
    }

    pub fn prefix(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.rules.prefixes.insert(source, target);
        self
    }

    pub fn suffix(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.rules.suffixes.insert(source, target);
        self
    }

    pub fn pattern(mut self, rule: PatternRule) -> Self {
        self.rules.patterns.push(rule);
        self
    }

    pub fn build(self) -> RuleSet {
        self.rules
    }
}

/// Value → key inversions of a [`RuleSet`].
///
/// Collisions resolve to the key inserted last in the source table.
#[derive(Debug, Clone, Default)]
pub struct ReverseRuleSet {
    phrases: RuleTable,
    words: RuleTable,
    prefixes: RuleTable,
    suffixes: RuleTable,
}

impl ReverseRuleSet {
    /// Source phrase for a multi-character target sequence.
    pub fn phrase(&self, target: &str) -> Option<&str> {
        self.phrases.get(target)
    }

    /// Source token for a single target character.
    ///
    /// Prefixes are consulted first, then suffixes, then words.
    pub fn single(&self, target: &str) -> Option<(&str, RuleKinds)> {
        if let Some(source) = self.prefixes.get(target) {
            return Some((source, RuleKinds::PREFIX));
        }
        if let Some(source) = self.suffixes.get(target) {
            return Some((source, RuleKinds::SUFFIX));
        }
        self.words.get(target).map(|source| (source, RuleKinds::WORD))
    }

    pub fn phrases(&self) -> &RuleTable {
        &self.phrases
    }

    pub fn words(&self) -> &RuleTable {
        &self.words
    }
}
