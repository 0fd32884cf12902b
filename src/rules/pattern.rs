use regex::Regex;

/// A regex-driven rule for atomic source tokens.
///
/// Pattern rules are the last resort before pass-through: the word resolver
/// tries them only after direct and affix lookups failed. A rule fires when
/// its regex matches the *whole* token; the output is `template` expanded
/// with the match's capture groups (`$1`, `${name}`).
#[derive(Debug, Clone)]
pub struct PatternRule {
    name: String,
    regex: Regex,
    template: String,
}

impl PatternRule {
    /// Compile `pattern` at runtime. The pattern is anchored to the whole token.
    pub fn new(name: impl Into<String>, pattern: &str, template: impl Into<String>) -> Result<Self, regex::Error> {
        let regex = Regex::new(&anchor(pattern))?;
        Ok(Self::__anchored(name, regex, template))
    }

    /// Build a rule from an already compiled regex.
    ///
    /// The regex is recompiled anchored to the whole token, so alternations
    /// like `a|ab` pick the branch that covers the token.
    pub fn from_regex(
        name: impl Into<String>,
        regex: &Regex,
        template: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        Self::new(name, regex.as_str(), template)
    }

    // Used by `pattern_rule!`, which anchors the literal itself.
    #[doc(hidden)]
    pub fn __anchored(name: impl Into<String>, regex: Regex, template: impl Into<String>) -> Self {
        PatternRule { name: name.into(), regex, template: template.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Expand the template if the regex matches all of `token`.
    pub fn apply(&self, token: &str) -> Option<String> {
        let caps = self.regex.captures(token)?;
        let mut out = String::new();
        caps.expand(&self.template, &mut out);
        Some(out)
    }
}

fn anchor(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}
