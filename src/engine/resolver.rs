//! Single-token resolution.
//!
//! ```text
//! token ──┬─ words[token]                         -> WORD
//!         ├─ prefix + words[rest]                 -> PREFIX | WORD
//!         ├─ words[rest] + suffix                 -> WORD | SUFFIX
//!         ├─ prefix + words[middle] + suffix      -> PREFIX | WORD | SUFFIX
//!         ├─ first whole-token pattern rule       -> PATTERN
//!         └─ token unchanged                      -> PASSTHROUGH
//! ```
//!
//! The first stage that succeeds wins. Affixes are tried in table order, and
//! in the combined stage every suffix is tried for a prefix before moving on
//! to the next prefix.

use crate::{RuleKinds, RuleSet};

/// Output of [`WordResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    pub kinds: RuleKinds,
}

impl Resolution {
    fn new(text: impl Into<String>, kinds: RuleKinds) -> Self {
        Resolution { text: text.into(), kinds }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WordResolver<'r> {
    rules: &'r RuleSet,
}

impl<'r> WordResolver<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        WordResolver { rules }
    }

    /// Resolve one atomic source token. Never fails: unknown tokens pass
    /// through verbatim.
    pub fn resolve(&self, token: &str) -> Resolution {
        self.direct(token)
            .or_else(|| self.with_prefix(token))
            .or_else(|| self.with_suffix(token))
            .or_else(|| self.with_both(token))
            .or_else(|| self.with_pattern(token))
            .unwrap_or_else(|| Resolution::new(token, RuleKinds::PASSTHROUGH))
    }

    fn direct(&self, token: &str) -> Option<Resolution> {
        self.rules.word(token).map(|word| Resolution::new(word, RuleKinds::WORD))
    }

    fn with_prefix(&self, token: &str) -> Option<Resolution> {
        self.rules.prefixes().iter().find_map(|(prefix, prefix_text)| {
            let root = token.strip_prefix(prefix)?;
            let word = self.rules.word(root)?;
            Some(Resolution::new(format!("{prefix_text}{word}"), RuleKinds::PREFIX | RuleKinds::WORD))
        })
    }

    fn with_suffix(&self, token: &str) -> Option<Resolution> {
        self.rules.suffixes().iter().find_map(|(suffix, suffix_text)| {
            let root = token.strip_suffix(suffix)?;
            let word = self.rules.word(root)?;
            Some(Resolution::new(format!("{word}{suffix_text}"), RuleKinds::WORD | RuleKinds::SUFFIX))
        })
    }

    /// A pair whose affixes overlap inside the token is skipped, never looked
    /// up with swapped slice bounds.
    fn with_both(&self, token: &str) -> Option<Resolution> {
        for (prefix, prefix_text) in self.rules.prefixes().iter() {
            let Some(rest) = token.strip_prefix(prefix) else {
                continue;
            };
            for (suffix, suffix_text) in self.rules.suffixes().iter() {
                // Stripping from `rest` keeps the two affixes from overlapping.
                let Some(middle) = rest.strip_suffix(suffix) else {
                    continue;
                };
                if let Some(word) = self.rules.word(middle) {
                    return Some(Resolution::new(
                        format!("{prefix_text}{word}{suffix_text}"),
                        RuleKinds::PREFIX | RuleKinds::WORD | RuleKinds::SUFFIX,
                    ));
                }
            }
        }
        None
    }

    fn with_pattern(&self, token: &str) -> Option<Resolution> {
        self.rules
            .patterns()
            .iter()
            .find_map(|rule| rule.apply(token).map(|text| Resolution::new(text, RuleKinds::PATTERN)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PatternRule;

    fn affix_rules() -> RuleSet {
        RuleSet::builder()
            .word("lof", "爱")
            .word("pipo", "人")
            .word("ta", "他")
            .prefix("un", "不")
            .prefix("u", "无")
            .suffix("s", "们")
            .suffix("er", "者")
            .build()
    }

    #[test]
    fn direct_word_wins_over_decomposition() {
        let rules = affix_rules();
        let resolver = WordResolver::new(&rules);
        assert_eq!(resolver.resolve("pipo"), Resolution::new("人", RuleKinds::WORD));
    }

    #[test]
    fn decomposition_stages() {
        let rules = affix_rules();
        let resolver = WordResolver::new(&rules);

        let cases = vec![
            ("unlof", "不爱", RuleKinds::PREFIX | RuleKinds::WORD),
            ("pipos", "人们", RuleKinds::WORD | RuleKinds::SUFFIX),
            ("lofer", "爱者", RuleKinds::WORD | RuleKinds::SUFFIX),
            ("unlofer", "不爱者", RuleKinds::PREFIX | RuleKinds::WORD | RuleKinds::SUFFIX),
            ("upipos", "无人们", RuleKinds::PREFIX | RuleKinds::WORD | RuleKinds::SUFFIX),
        ];

        for (token, expected, kinds) in cases {
            let got = resolver.resolve(token);
            assert_eq!(got.text, expected, "token '{}'", token);
            assert_eq!(got.kinds, kinds, "token '{}'", token);
        }
    }

    #[test]
    fn prefix_order_decides_between_candidates() {
        // "unlof": "un" is listed first, so "u" + "nlof" is never considered.
        let rules = RuleSet::builder().word("lof", "爱").word("nlof", "X").prefix("un", "不").prefix("u", "无").build();
        let resolver = WordResolver::new(&rules);
        assert_eq!(resolver.resolve("unlof").text, "不爱");

        let swapped = RuleSet::builder().word("lof", "爱").word("nlof", "X").prefix("u", "无").prefix("un", "不").build();
        assert_eq!(WordResolver::new(&swapped).resolve("unlof").text, "无X");
    }

    #[test]
    fn suffix_order_decides_between_candidates() {
        // "lofes": both "lof" + "es" and "lofe" + "s" resolve.
        let rules = RuleSet::builder().word("lof", "爱").word("lofe", "E").suffix("es", "A").suffix("s", "们").build();
        assert_eq!(WordResolver::new(&rules).resolve("lofes").text, "爱A");

        let swapped = RuleSet::builder().word("lof", "爱").word("lofe", "E").suffix("s", "们").suffix("es", "A").build();
        assert_eq!(WordResolver::new(&swapped).resolve("lofes").text, "E们");
    }

    #[test]
    fn combined_stage_tries_pairs_prefix_major() {
        let base = || RuleSet::builder().word("lof", "爱").word("lofe", "E").word("nlof", "N");

        // For "unlofes" the stages before it all fail. Valid pairs are
        // (un, es) -> "lof", (un, s) -> "lofe" and (u, es) -> "nlof".
        let cases = vec![
            (base().prefix("un", "不").prefix("u", "无").suffix("es", "A").suffix("s", "们"), "不爱A"),
            (base().prefix("un", "不").prefix("u", "无").suffix("s", "们").suffix("es", "A"), "不E们"),
            (base().prefix("u", "无").prefix("un", "不").suffix("es", "A").suffix("s", "们"), "无NA"),
            (base().prefix("u", "无").prefix("un", "不").suffix("s", "们").suffix("es", "A"), "无NA"),
        ];

        for (i, (builder, expected)) in cases.into_iter().enumerate() {
            let rules = builder.build();
            let got = WordResolver::new(&rules).resolve("unlofes");
            assert_eq!(got.text, expected, "case {}", i);
            assert_eq!(got.kinds, RuleKinds::PREFIX | RuleKinds::WORD | RuleKinds::SUFFIX, "case {}", i);
        }
    }

    #[test]
    fn prefix_major_beats_earlier_suffix() {
        // (un, s) is the first prefix's only valid pair; (u, es) pairs the
        // earlier suffix with a later prefix and must lose.
        let rules = RuleSet::builder()
            .word("lofe", "E")
            .word("nlof", "N")
            .prefix("un", "不")
            .prefix("u", "无")
            .suffix("es", "A")
            .suffix("s", "们")
            .build();
        assert_eq!(WordResolver::new(&rules).resolve("unlofes").text, "不E们");
    }

    #[test]
    fn overlapping_affixes_do_not_match() {
        // Prefix "ab" and suffix "bc" overlap inside "abc"; the empty middle is
        // a word, but the pair must not apply.
        let rules = RuleSet::builder().word("", "空").prefix("ab", "A").suffix("bc", "C").build();
        let resolver = WordResolver::new(&rules);
        assert_eq!(resolver.resolve("abc"), Resolution::new("abc", RuleKinds::PASSTHROUGH));
    }

    #[test]
    fn pattern_rules_run_after_affixes() {
        let rules = RuleSet::builder()
            .word("pipo", "人")
            .suffix("s", "们")
            .pattern(PatternRule::new("any-s", r"\w+s", "复数").unwrap())
            .pattern(pattern_rule!("digits", r"(\d+)" => "#$1"))
            .build();
        let resolver = WordResolver::new(&rules);

        assert_eq!(resolver.resolve("pipos").text, "人们");
        assert_eq!(resolver.resolve("cats"), Resolution::new("复数", RuleKinds::PATTERN));
        assert_eq!(resolver.resolve("42").text, "#42");
    }

    #[test]
    fn unknown_token_passes_through() {
        let rules = affix_rules();
        let resolver = WordResolver::new(&rules);
        assert_eq!(resolver.resolve("senie"), Resolution::new("senie", RuleKinds::PASSTHROUGH));
        assert_eq!(resolver.resolve(""), Resolution::new("", RuleKinds::PASSTHROUGH));
    }
}
