// crates/shared-kernel/src/value_objects/frequency.rs
use std::{
    collections::{HashMap, hash_map},
    hash::Hash,
};

use serde::{Serialize, Serializer, ser::SerializeSeq};

/// Occurrence counts keyed by `K` (a character, a token or a token pair).
///
/// Counts only ever grow. Iteration order is unspecified; use [`ranked`](Self::ranked)
/// for a deterministic ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<K: Eq + Hash> {
    counts: HashMap<K, usize>,
}

impl<K: Eq + Hash> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self { counts: HashMap::new() }
    }
}

impl<K: Eq + Hash> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `delta` occurrences of `key`.
    pub fn increment(&mut self, key: K, delta: usize) {
        *self.counts.entry(key).or_insert(0) += delta;
    }

    /// Count for `key`, zero when the key was never seen.
    pub fn get<Q>(&self, key: &Q) -> usize
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, K, usize> {
        self.counts.iter()
    }
}

impl<K: Eq + Hash + Ord + Clone> FrequencyTable<K> {
    /// All entries, most frequent first. Ties are broken by key so the order is stable.
    pub fn ranked(&self) -> Vec<(K, usize)> {
        let mut entries: Vec<(K, usize)> = self.counts.iter().map(|(k, &c)| (k.clone(), c)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    /// The `n` most frequent entries, most frequent first.
    pub fn top(&self, n: usize) -> Vec<(K, usize)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// The `n` least frequent entries, least frequent first.
    pub fn bottom(&self, n: usize) -> Vec<(K, usize)> {
        self.ranked().into_iter().rev().take(n).collect()
    }
}

impl<K: Eq + Hash> Extend<K> for FrequencyTable<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.increment(key, 1);
        }
    }
}

impl<K: Eq + Hash> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<'a, K: Eq + Hash> IntoIterator for &'a FrequencyTable<K> {
    type Item = (&'a K, &'a usize);
    type IntoIter = hash_map::Iter<'a, K, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// Serialised as a ranked list of `[key, count]` pairs, since token-pair keys
/// cannot be JSON object keys.
impl<K> Serialize for FrequencyTable<K>
where
    K: Eq + Hash + Ord + Clone + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let ranked = self.ranked();
        let mut seq = serializer.serialize_seq(Some(ranked.len()))?;
        for entry in &ranked {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_accumulates_per_key() {
        let mut table = FrequencyTable::new();
        table.increment("a", 1);
        table.increment("b", 2);
        table.increment("a", 3);
        assert_eq!(table.get("a"), 4);
        assert_eq!(table.get("b"), 2);
        assert_eq!(table.get("missing"), 0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn ranked_breaks_ties_by_key() {
        let table: FrequencyTable<char> = "bbaacd".chars().collect();
        assert_eq!(table.ranked(), vec![('a', 2), ('b', 2), ('c', 1), ('d', 1)]);
    }

    #[test]
    fn top_and_bottom_tolerate_short_tables() {
        let table: FrequencyTable<&str> = ["x", "y", "x"].into_iter().collect();
        assert_eq!(table.top(5), vec![("x", 2), ("y", 1)]);
        assert_eq!(table.bottom(1), vec![("y", 1)]);
        assert!(FrequencyTable::<&str>::new().top(3).is_empty());
    }

    #[test]
    fn serializes_as_ranked_pairs() {
        let table: FrequencyTable<(String, String)> =
            [("a".to_string(), "b".to_string())].into_iter().collect();
        let json = serde_json::to_string(&table).expect("serializes");
        assert_eq!(json, r#"[[["a","b"],1]]"#);
    }
}
