//! Utility functions and traits for [`StepHashTable`]

use crate::{StepHashTable, StepKey};

/// Extension trait providing materialized key and value views of a table.
pub trait StepTableExtensions<K, V> {
    /// Returns the live keys in storage order as a `Vec`.
    ///
    /// Storage order is position order within the backing storage, not
    /// insertion order, and is not stable across rebuilds.
    fn keys(&self) -> Vec<K>;

    /// Returns the live values in storage order as a `Vec`.
    fn values(&self) -> Vec<V>;
}

impl<K, V> StepTableExtensions<K, V> for StepHashTable<K, V>
where
    K: Clone,
    V: Clone,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }
}

/// Creates a [`StepHashTable`] from an iterator of key-value pairs.
///
/// Stops silently if the capacity ceiling is reached, like
/// [`Extend::extend`].
#[allow(dead_code)]
pub fn from_iter<K, V, I>(iter: I) -> StepHashTable<K, V>
where
    K: StepKey,
    I: IntoIterator<Item = (K, V)>,
{
    let mut table = StepHashTable::new();
    table.extend(iter);
    table
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iter() {
        let data = vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)];

        let table = from_iter(data);

        assert_eq!(table.get("a"), Ok(&1));
        assert_eq!(table.get("b"), Ok(&2));
        assert_eq!(table.get("c"), Ok(&3));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_keys_and_values() {
        let mut table = StepHashTable::new();
        table.set("a".to_string(), 1).unwrap();
        table.set("b".to_string(), 2).unwrap();
        table.set("c".to_string(), 3).unwrap();

        let mut keys = table.keys();
        keys.sort(); // Sort for predictable comparison

        let mut values = table.values();
        values.sort_unstable();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_keys_skip_tombstones() {
        let mut table = StepHashTable::new();
        table.set("a".to_string(), 1).unwrap();
        table.set("b".to_string(), 2).unwrap();
        table.delete("a").unwrap();

        assert_eq!(table.keys(), vec!["b".to_string()]);
        assert_eq!(table.values(), vec![2]);
    }
}
