use std::collections::HashMap;
use std::hash::Hash;

/// Category counts kept in first-seen order.
///
/// [`FrequencyTable::mode`] breaks ties in favour of the category seen
/// first, so every "most common" statistic is deterministic.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    entries: Vec<(K, usize)>,
    index: HashMap<K, usize>,
}

impl<K: PartialEq> PartialEq for FrequencyTable<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq> Eq for FrequencyTable<K> {}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn count(&self, key: &K) -> usize {
        self.index.get(key).map_or(0, |&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most frequent category and its count.
    pub fn mode(&self) -> Option<(&K, usize)> {
        let mut best: Option<(&K, usize)> = None;
        for (key, count) in &self.entries {
            if best.is_none_or(|(_, c)| *count > c) {
                best = Some((key, *count));
            }
        }
        best
    }

    /// Entries by descending count; equal counts keep first-seen order.
    pub fn sorted_desc(&self) -> Vec<(&K, usize)> {
        let mut sorted: Vec<(&K, usize)> = self.entries.iter().map(|(k, c)| (k, *c)).collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

impl<K: Clone + Eq + Hash> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for key in iter {
            table.add(key);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_mode() {
        let table: FrequencyTable<u32> = FrequencyTable::new();
        assert!(table.is_empty());
        assert_eq!(table.mode(), None);
    }

    #[test]
    fn test_counts_and_mode() {
        let table: FrequencyTable<&str> = ["a", "b", "b", "c", "b", "a"].into_iter().collect();
        assert_eq!(table.len(), 3);
        assert_eq!(table.count(&"a"), 2);
        assert_eq!(table.count(&"z"), 0);
        assert_eq!(table.mode(), Some((&"b", 3)));
    }

    #[test]
    fn test_tie_break_is_first_seen() {
        let table: FrequencyTable<u32> = [7, 3, 3, 7, 1].into_iter().collect();
        assert_eq!(table.mode(), Some((&7, 2)));
    }

    #[test]
    fn test_sorted_desc_is_stable() {
        let table: FrequencyTable<&str> = ["x", "y", "z", "z", "y"].into_iter().collect();
        let sorted = table.sorted_desc();
        assert_eq!(sorted, vec![(&"y", 2), (&"z", 2), (&"x", 1)]);
    }
}
