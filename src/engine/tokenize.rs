//! Forward-input tokenization.
//!
//! `Literal` splits on every single space, so `"ai  yu"` yields an empty
//! token between the two words; the empty token resolves to an empty unit and
//! vanishes from the concatenated output. `Collapse` splits on runs of any
//! whitespace and never yields empty tokens.

use crate::Whitespace;

/// Split forward input into source tokens under the given policy.
pub fn split_tokens(text: &str, whitespace: Whitespace) -> Vec<&str> {
    match whitespace {
        Whitespace::Literal => text.split(' ').collect(),
        Whitespace::Collapse => text.split_whitespace().collect(),
    }
}
