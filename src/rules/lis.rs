//! Bundled Lis → Chinese tables.
//!
//! The two word-order variants at the top of the phrase table map to the
//! same targets as the reference phrasings below them. Since inversion keeps
//! the key inserted last, reverse translation still yields the reference
//! phrasing.

use crate::RuleSet;

pub fn get() -> RuleSet {
    RuleSet::builder()
        // Phrases (matched before words, longest first)
        .phrase("senie id tich pipo", "高中生")
        .phrase("shunie id tich pipo", "初中生")
        .phrase("id tich pipo", "学生")
        .phrase("tich pipo", "老师")
        .phrase("id senie tich pipo", "高中生")
        .phrase("id shunie tich pipo", "初中生")
        .phrase("tich loc", "学校")
        .phrase("id tich", "学习")
        // Words
        .word("id", "被")
        .word("tich", "教")
        .word("pipo", "人")
        .word("loc", "地点")
        .word("ai", "我")
        .word("yu", "你")
        .word("ta", "ta")
        .word("de", "的")
        .word("lof", "爱")
        .word("Inglis", "英语")
        .word("bi", "是")
        // Suffixes
        .suffix("s", "们")
        .build()
}
