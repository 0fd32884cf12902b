use std::collections::HashMap;

/// An insertion-ordered string → string table.
///
/// Lookups by exact key go through a hash index; iteration yields entries in
/// the order their keys were first inserted. Re-inserting an existing key
/// replaces its value but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl RuleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key → value`, returning the previous value if the key existed.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Exact-key lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the value → key table.
    ///
    /// Values shared by several keys collapse to a single entry holding the
    /// key inserted last. The inverted entry sits where the value was first
    /// seen.
    pub fn inverted(&self) -> RuleTable {
        let mut out = RuleTable::new();
        for (key, value) in self.iter() {
            out.insert(value, key);
        }
        out
    }
}

impl<K, V> FromIterator<(K, V)> for RuleTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = RuleTable::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}
