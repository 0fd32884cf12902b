//! Rule tables.
//!
//! A [`RuleSet`] is four ordered string tables (phrases, words, prefixes,
//! suffixes) plus an optional list of [`PatternRule`]s. Everything here is
//! read-only once built; the matchers in `crate::engine` only borrow it.
//!
//! Table order matters: prefixes and suffixes are scanned first-to-last and
//! the first hit wins, and inversion (see [`ReverseRuleSet`]) lets the last
//! inserted key win when two keys share a value.

pub(crate) mod lis;
mod pattern;
mod ruleset;
mod table;

pub use pattern::PatternRule;
pub use ruleset::{ReverseRuleSet, RuleSet, RuleSetBuilder};
pub use table::RuleTable;
