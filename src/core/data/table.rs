use std::collections::{HashMap, HashSet};

/// A single `"key" = "value";` entry from a `.strings` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringsEntry {
    /// The original dot-delimited key (e.g., "market.header.amount_usdt").
    pub key: String,
    /// The raw value, escapes left as written.
    pub value: String,
    /// Line number (1-indexed) of the defining line.
    pub line: usize,
}

impl StringsEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, line: usize) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            line,
        }
    }
}

/// All entries of one locale file, in first-seen line order.
///
/// Re-inserting an existing key replaces its value and line but keeps
/// its original position.
#[derive(Debug, Clone, Default)]
pub struct StringsTable {
    entries: Vec<StringsEntry>,
    index: HashMap<String, usize>,
}

impl StringsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. Last write wins for duplicate keys.
    pub fn insert(&mut self, entry: StringsEntry) {
        match self.index.get(&entry.key) {
            Some(&pos) => self.entries[pos] = entry,
            None => {
                self.index.insert(entry.key.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&StringsEntry> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterate entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = &StringsEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// The key set, for set operations where values don't matter.
    pub fn key_set(&self) -> HashSet<&str> {
        self.keys().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<StringsEntry> for StringsTable {
    fn from_iter<T: IntoIterator<Item = StringsEntry>>(iter: T) -> Self {
        let mut table = StringsTable::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}
