use std::{borrow::Borrow, fmt, mem};

use crate::{
    error::TableError,
    hash::{self, StepKey},
};

/// Capacities the table grows through, each prime so every probe step in
/// `[1, capacity - 1]` is coprime with the capacity. Growth stops at the last
/// entry; no workload is expected to exceed ~1.5M live entries.
const DEFAULT_SIZES: [usize; 19] = [
    5, 13, 29, 53, 97, 193, 389, 769, 1543, 3079, 6151, 12289, 24593, 49157, 98317, 196613,
    393241, 786433, 1_572_869,
];

/// One position of the backing storage.
#[derive(Debug, Clone)]
enum Slot<K, V> {
    /// Never held an entry; terminates probe walks.
    Empty,
    /// Held an entry that was deleted; reusable by inserts, transparent to
    /// lookups.
    Tombstone,
    /// A live key-value pair.
    Occupied(K, V),
}

/// An open-addressing hash table using double hashing with lazy deletion.
///
/// A first polynomial hash places the key and a second, independent one
/// derives the probe step, so colliding keys walk different sequences and
/// clustering stays low. Deletion leaves a tombstone in place of the entry;
/// tombstones are reclaimed only by the full rebuild that runs once live
/// occupancy crosses two-thirds of capacity. Capacities come from a fixed
/// ascending table of primes; when the last one is exhausted the table
/// reports [`TableError::CapacityExhausted`] instead of growing further.
///
/// Note: this type is not thread-safe. Callers needing shared access must
/// serialize operations themselves.
#[derive(Debug, Clone)]
pub struct StepHashTable<K, V> {
    /// The backing storage, always exactly `sizes[size_index]` slots long.
    slots: Vec<Slot<K, V>>,
    /// Number of live (occupied, non-tombstone) entries.
    count: usize,
    /// The ascending capacity schedule the table grows through.
    sizes: Box<[usize]>,
    /// Index of the current capacity within `sizes`.
    size_index: usize,
}

impl<K, V> Default for StepHashTable<K, V>
where
    K: StepKey,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for StepHashTable<K, V>
where
    K: StepKey,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            // Stops silently at the capacity ceiling.
            if self.set(k, v).is_err() {
                break;
            }
        }
    }
}

impl<K, V> StepHashTable<K, V>
where
    K: StepKey,
{
    /// Creates an empty table at the smallest capacity of the default prime
    /// schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sizes(&DEFAULT_SIZES)
    }

    /// Creates an empty table growing through the given capacity schedule.
    ///
    /// Intended for tests that want small tables and a reachable growth
    /// ceiling. Entries below 2 cannot support the step hash's
    /// `mod (capacity - 1)` reduction and are discarded; if nothing usable
    /// remains the default schedule is used instead.
    #[must_use]
    pub fn with_sizes(sizes: &[usize]) -> Self {
        let normalized: Vec<usize> = sizes.iter().copied().filter(|&size| size >= 2).collect();
        let sizes: Box<[usize]> = if normalized.is_empty() {
            DEFAULT_SIZES.into()
        } else {
            normalized.into_boxed_slice()
        };
        let first = sizes.first().copied().unwrap_or(DEFAULT_SIZES[0]);

        Self { slots: Self::empty_slots(first), count: 0, sizes, size_index: 0 }
    }

    /// Allocates `capacity` empty slots.
    fn empty_slots(capacity: usize) -> Vec<Slot<K, V>> {
        (0..capacity).map(|_| Slot::Empty).collect()
    }

    /// Finds the slot position for `key`.
    ///
    /// Walks `(start + i * step) mod capacity` for at most `capacity`
    /// probes. For inserts the first Empty or Tombstone position (or a
    /// matching occupied slot, the update path) resolves the walk; lookups
    /// skip tombstones and stop only at Empty, a match, or the probe bound.
    /// Termination within one walk comes from the bounded iteration count,
    /// not from re-visit detection.
    fn probe<Q>(&self, key: &Q, is_insert: bool) -> Result<usize, TableError>
    where
        K: Borrow<Q>,
        Q: StepKey + ?Sized,
    {
        if key.code_points().next().is_none() {
            return Err(TableError::EmptyKey);
        }

        let capacity = self.capacity();
        let mut position = hash::position_hash(key, capacity);
        let step = hash::probe_step(key, capacity);

        for _ in 0..capacity {
            match self.slots.get(position) {
                None | Some(Slot::Empty) => {
                    return if is_insert { Ok(position) } else { Err(TableError::KeyNotFound) };
                }
                Some(Slot::Tombstone) => {
                    if is_insert {
                        return Ok(position);
                    }
                }
                Some(Slot::Occupied(existing, _)) => {
                    if existing.borrow() == key {
                        return Ok(position);
                    }
                }
            }
            position = position.saturating_add(step) % capacity;
        }

        if is_insert { Err(TableError::TableFull) } else { Err(TableError::KeyNotFound) }
    }

    /// Returns a reference to the value stored for `key`.
    ///
    /// # Errors
    ///
    /// [`TableError::KeyNotFound`] when the key is absent,
    /// [`TableError::EmptyKey`] for an empty key.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, TableError>
    where
        K: Borrow<Q>,
        Q: StepKey + ?Sized,
    {
        let position = self.probe(key, false)?;
        match self.slots.get(position) {
            Some(Slot::Occupied(_, value)) => Ok(value),
            _ => Err(TableError::KeyNotFound),
        }
    }

    /// Returns a mutable reference to the value stored for `key`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::get`].
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, TableError>
    where
        K: Borrow<Q>,
        Q: StepKey + ?Sized,
    {
        let position = self.probe(key, false)?;
        match self.slots.get_mut(position) {
            Some(Slot::Occupied(_, value)) => Ok(value),
            _ => Err(TableError::KeyNotFound),
        }
    }

    /// Stores `value` under `key`, returning the previous value on update.
    ///
    /// Inserting into an Empty or Tombstone slot raises the live count; once
    /// it exceeds two-thirds of capacity the table immediately rebuilds into
    /// the next configured capacity.
    ///
    /// # Errors
    ///
    /// [`TableError::CapacityExhausted`] when the insert crossed the load
    /// threshold but no larger capacity remains (the entry itself has been
    /// written and stays readable), [`TableError::TableFull`] when a full
    /// probe walk found no usable slot, [`TableError::EmptyKey`] for an
    /// empty key.
    pub fn set(&mut self, key: K, value: V) -> Result<Option<V>, TableError> {
        let previous = self.write(key, value)?;
        if self.count.saturating_mul(3) > self.capacity().saturating_mul(2) {
            self.grow()?;
        }
        Ok(previous)
    }

    /// Places an entry without the load-factor check; shared by [`Self::set`]
    /// and the rebuild.
    fn write(&mut self, key: K, value: V) -> Result<Option<V>, TableError> {
        let position = self.probe(&key, true)?;
        let Some(slot) = self.slots.get_mut(position) else {
            return Err(TableError::TableFull);
        };
        match mem::replace(slot, Slot::Occupied(key, value)) {
            Slot::Occupied(_, previous) => Ok(Some(previous)),
            Slot::Empty | Slot::Tombstone => {
                self.count = self.count.saturating_add(1);
                Ok(None)
            }
        }
    }

    /// Removes `key`, returning its value.
    ///
    /// The slot is overwritten with a tombstone so probe sequences passing
    /// through it remain intact; tombstones are only reclaimed by a rebuild.
    ///
    /// # Errors
    ///
    /// [`TableError::KeyNotFound`] when the key is absent,
    /// [`TableError::EmptyKey`] for an empty key.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<V, TableError>
    where
        K: Borrow<Q>,
        Q: StepKey + ?Sized,
    {
        let position = self.probe(key, false)?;
        let Some(slot) = self.slots.get_mut(position) else {
            return Err(TableError::KeyNotFound);
        };
        match mem::replace(slot, Slot::Tombstone) {
            Slot::Occupied(_, value) => {
                self.count = self.count.saturating_sub(1);
                Ok(value)
            }
            other => {
                // probe(_, false) only ever resolves to a matching occupied
                // slot, so nothing was displaced.
                *slot = other;
                Err(TableError::KeyNotFound)
            }
        }
    }

    /// Returns true if `key` is present.
    ///
    /// An empty key reports false; it can never be stored.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: StepKey + ?Sized,
    {
        self.get(key).is_ok()
    }

    /// Rebuilds the table at the next configured capacity.
    ///
    /// Allocates fresh storage, resets the live count, and re-inserts every
    /// occupied entry through the regular probe path, which recomputes both
    /// hashes against the new capacity. Tombstones are dropped. Observable
    /// state is all-or-nothing: either the rebuild completes or the table
    /// reports the growth ceiling and keeps its current storage.
    fn grow(&mut self) -> Result<(), TableError> {
        let next_index = self.size_index.saturating_add(1);
        let Some(&next_capacity) = self.sizes.get(next_index) else {
            return Err(TableError::CapacityExhausted);
        };

        let old_slots = mem::replace(&mut self.slots, Self::empty_slots(next_capacity));
        self.size_index = next_index;
        self.count = 0;
        for slot in old_slots {
            if let Slot::Occupied(key, value) = slot {
                // Cannot fail: the new capacity exceeds the live entry count.
                self.write(key, value)?;
            }
        }
        Ok(())
    }
}

impl<K, V> StepHashTable<K, V> {
    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the table holds no live entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if every slot holds a live entry.
    ///
    /// A stricter condition than the two-thirds resize threshold; it can only
    /// hold once the growth ceiling has been reached.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Number of slots in the backing storage.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Ratio of live entries to capacity.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    /// Iterates the live entries in storage order.
    ///
    /// The order is position order within the backing storage, not insertion
    /// order, and is not stable across rebuilds.
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: &self.slots, index: 0 }
    }

    /// Removes every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.count = 0;
    }
}

impl<K, V> fmt::Display for StepHashTable<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            if let Slot::Occupied(key, value) = slot {
                writeln!(f, "({key},{value})")?;
            }
        }
        Ok(())
    }
}

/// Iterator over the live entries of a [`StepHashTable`], in storage order.
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// The slots being walked.
    slots: &'a [Slot<K, V>],
    /// Next storage position to inspect.
    index: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.get(self.index) {
            self.index = self.index.saturating_add(1);
            if let Slot::Occupied(key, value) = slot {
                return Some((key, value));
            }
        }
        None
    }
}
