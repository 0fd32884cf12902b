use crate::{Options, PatternRule, RuleSet, translate_forward, translate_forward_with, translate_reverse, translate_reverse_with};

#[test]
fn forward_examples_matching() {
    // Array of (input, expected)
    let cases: Vec<(&str, &str)> = vec![
        ("id tich pipo", "学生"),
        ("tich pipo", "老师"),
        ("senie id tich pipo", "高中生"),
        ("id senie tich pipo", "高中生"),
        ("shunie id tich pipo", "初中生"),
        ("id shunie tich pipo", "初中生"),
        ("pipo s", "人们"),
        ("pipos", "人们"),
        ("ai lof yu", "我爱你"),
        ("tich loc", "学校"),
        ("id tich", "学习"),
        ("id tich loc", "学习地点"),
        ("tich pipo s", "老师们"),
        ("ai bi tich pipo", "我是老师"),
        ("ta bi id tich pipo s", "ta是学生们"),
        ("ai lof Inglis", "我爱英语"),
        ("yu de tich pipo", "你的老师"),
        ("ai lof kat", "我爱kat"),
        ("ai  yu", "我你"),
    ];

    for (input, expected) in cases {
        assert_eq!(translate_forward(input), expected, "forward '{}'", input);
    }
}

#[test]
fn reverse_examples_matching() {
    let cases: Vec<(&str, &str)> = vec![
        ("老师", "tich pipo"),
        ("学生", "id tich pipo"),
        ("高中生", "id senie tich pipo"),
        ("初中生", "id shunie tich pipo"),
        ("学校", "tich loc"),
        ("人们", "pipo s"),
        ("我爱你", "ai lof yu"),
        ("我是老师们", "ai bi tich pipo s"),
        ("你的学习", "yu de id tich"),
        ("猫", "猫"),
        ("ta", "t a"),
    ];

    for (input, expected) in cases {
        assert_eq!(translate_reverse(input), expected, "reverse '{}'", input);
    }
}

#[test]
fn empty_and_blank_input() {
    for input in ["", " ", "   ", "\t\n"] {
        assert_eq!(translate_forward(input), "", "forward {:?}", input);
        assert_eq!(translate_reverse(input), "", "reverse {:?}", input);
    }
}

#[test]
fn round_trip_on_unambiguous_inputs() {
    let curated = ["tich pipo", "id tich pipo", "ai lof yu", "pipo s", "ai bi tich pipo s", "yu de id tich"];
    for input in curated {
        let there = translate_forward(input);
        assert_eq!(translate_reverse(&there), input, "round trip '{}' via '{}'", input, there);
    }
}

#[test]
fn round_trip_is_not_universal() {
    // Word-order variant collapses onto the reference phrasing.
    assert_eq!(translate_reverse(&translate_forward("senie id tich pipo")), "id senie tich pipo");
    // Multi-character word values split back into characters.
    assert_eq!(translate_reverse(&translate_forward("loc")), "地 点");
    // Identity mappings of multi-letter tokens come back letter by letter.
    assert_eq!(translate_reverse(&translate_forward("ta")), "t a");
}

#[test]
fn pass_through_leaves_unknown_units_in_place() {
    let rules = RuleSet::builder().word("ai", "我").build();
    let opts = Options::default();

    assert_eq!(translate_forward_with("zork ai blip", &rules, &opts), "zork我blip");
    assert_eq!(translate_reverse_with("猫我狗", &rules, &opts), "猫 ai 狗");
}

#[test]
fn longest_phrase_wins_at_same_start() {
    let rules = RuleSet::builder()
        .phrase("a b", "二")
        .phrase("a b c", "三")
        .phrase("a b c d", "四")
        .word("a", "甲")
        .word("d", "丁")
        .build();
    let opts = Options::default();

    assert_eq!(translate_forward_with("a b c d", &rules, &opts), "四");
    assert_eq!(translate_forward_with("a b c", &rules, &opts), "三");
    assert_eq!(translate_forward_with("a b d", &rules, &opts), "二丁");

    let reverse = RuleSet::builder().phrase("x y", "甲乙").phrase("x y z", "甲乙丙").build();
    assert_eq!(translate_reverse_with("甲乙丙", &reverse, &opts), "x y z");
    assert_eq!(translate_reverse_with("甲乙丁", &reverse, &opts), "x y 丁");
}

#[test]
fn prefix_pull_in_and_suffix_absorption() {
    let rules = RuleSet::builder()
        .phrase("tich pipo", "老师")
        .word("lof", "爱")
        .word("ai", "我")
        .prefix("un", "不")
        .suffix("s", "们")
        .build();
    let opts = Options::default();

    assert_eq!(translate_forward_with("un lof", &rules, &opts), "不爱");
    assert_eq!(translate_forward_with("ai un lof", &rules, &opts), "我不爱");
    assert_eq!(translate_forward_with("un tich pipo s", &rules, &opts), "不老师们");
    assert_eq!(translate_forward_with("unlof", &rules, &opts), "不爱");
    // A trailing prefix has nothing to attach to and passes through.
    assert_eq!(translate_forward_with("lof un", &rules, &opts), "爱un");
}

#[test]
fn prefix_pull_in_discards_whole_previous_unit() {
    // "un" is swallowed by the phrase "ai un"; pulling it in before "lof"
    // retracts the entire phrase translation.
    let rules = RuleSet::builder().phrase("ai un", "甲").word("lof", "爱").prefix("un", "不").build();
    assert_eq!(translate_forward_with("ai un lof", &rules, &Options::default()), "不爱");

    // Same when the prefix token was absorbed as a suffix of the unit before.
    let rules = RuleSet::builder().word("lof", "爱").word("ai", "我").prefix("s", "前").suffix("s", "们").build();
    assert_eq!(translate_forward_with("ai s lof", &rules, &Options::default()), "前爱");
}

#[test]
fn reverse_collisions_resolve_to_last_inserted_key() {
    let rules = RuleSet::builder().word("wo", "我").word("ai", "我").phrase("a b", "甲乙").phrase("c d", "甲乙").build();
    let opts = Options::default();

    assert_eq!(translate_reverse_with("我", &rules, &opts), "ai");
    assert_eq!(translate_reverse_with("甲乙", &rules, &opts), "c d");
}

#[test]
fn reverse_affix_characters_take_priority_over_words() {
    let rules = RuleSet::builder().word("men", "们").suffix("s", "们").word("bu", "不").prefix("un", "不").build();
    assert_eq!(translate_reverse_with("不们", &rules, &Options::default()), "un s");
}

#[test]
fn reverse_works_on_scalar_values() {
    let rules = RuleSet::builder().word("smile", "😀").phrase("big smile", "😀😀").build();
    let opts = Options::default();
    assert_eq!(translate_reverse_with("😀😀😀", &rules, &opts), "big smile smile");
}

#[test]
fn pattern_rules_match_whole_tokens_in_forward_runs() {
    let build = |rule: PatternRule| RuleSet::builder().word("lof", "爱").pattern(rule).build();
    let rules = vec![
        build(pattern_rule!("alt", r"a|ab" => "X")),
        build(PatternRule::new("alt", r"a|ab", "X").unwrap()),
    ];

    for rules in &rules {
        assert_eq!(translate_forward_with("ab", rules, &Options::default()), "X");
        assert_eq!(translate_forward_with("lof ab abc", rules, &Options::default()), "爱Xabc");
    }
}
