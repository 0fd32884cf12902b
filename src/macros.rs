#[macro_export]
macro_rules! regex {
    ($pat:expr) => {{
        static RE: $crate::__private::Lazy<$crate::__private::Regex> =
            $crate::__private::Lazy::new(|| $crate::__private::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a [`PatternRule`](crate::PatternRule) from a literal regex.
///
/// The regex is anchored to the whole token and compiled once, on first use,
/// so it behaves exactly like [`PatternRule::new`](crate::PatternRule::new)
/// with the same pattern.
///
/// ```
/// use lis_translator::pattern_rule;
///
/// let rule = pattern_rule!("digits", r"(\d+)ka" => "${1}个");
/// assert_eq!(rule.apply("3ka").as_deref(), Some("3个"));
/// assert_eq!(rule.apply("x3ka"), None);
/// ```
#[macro_export]
macro_rules! pattern_rule {
    ($name:literal, $pat:literal => $template:literal $(,)?) => {
        $crate::PatternRule::__anchored(
            $name,
            $crate::regex!(concat!("^(?:", $pat, ")$")).clone(),
            $template,
        )
    };
}

/// Build a [`RuleTable`](crate::RuleTable) from `key => value` pairs, keeping
/// their order.
#[macro_export]
macro_rules! rule_table {
    ($($key:literal => $value:literal),* $(,)?) => {{
        let mut table = $crate::RuleTable::new();
        $( table.insert($key, $value); )*
        table
    }};
}
