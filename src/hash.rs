//! Hashing primitives for [`StepHashTable`](crate::StepHashTable).
//!
//! Two independent polynomial hashes drive the probing: one places the key,
//! the other derives the probe step. Both are pure functions of the key and
//! the current capacity, so a rebuild at a new capacity recomputes them
//! identically for every re-inserted entry.

/// Multiplier applied per character in both polynomial hashes.
pub(crate) const HASH_BASE: u64 = 31;

/// Initial coefficient for the position hash; decorrelated from the modulus
/// by rescaling modulo `capacity - 1` after every character.
pub(crate) const POSITION_SEED: u64 = 31415;

/// A key that can be hashed by character for double-hash probing.
///
/// The table hashes keys as ordered sequences of Unicode code points rather
/// than through [`std::hash::Hash`], because both hash functions depend on
/// the current capacity and must be recomputed against each new capacity
/// during a rebuild.
pub trait StepKey: Eq {
    /// The key's characters as Unicode code points, in order.
    ///
    /// An empty sequence marks an unhashable key; table operations reject it
    /// before probing.
    fn code_points(&self) -> impl Iterator<Item = u32> + '_;
}

impl StepKey for str {
    fn code_points(&self) -> impl Iterator<Item = u32> + '_ {
        self.chars().map(u32::from)
    }
}

impl StepKey for String {
    fn code_points(&self) -> impl Iterator<Item = u32> + '_ {
        self.as_str().code_points()
    }
}

/// Computes the initial probe position for `key` in a table of `capacity`
/// slots.
///
/// Polynomial accumulation reduced modulo `capacity` at every character, with
/// the running coefficient rescaled modulo `capacity - 1` so it does not stay
/// phase-locked to the modulus. Requires `capacity >= 2`, which the table's
/// size normalization guarantees.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn position_hash<Q>(key: &Q, capacity: usize) -> usize
where
    Q: StepKey + ?Sized,
{
    let modulus = capacity as u64;
    let coeff_modulus = modulus.saturating_sub(1).max(1);
    let mut value: u64 = 0;
    let mut coeff = POSITION_SEED;

    for code_point in key.code_points() {
        // coeff < 2^21 and value < 2^21 once reduced, so the product cannot
        // overflow u64; wrapping ops keep the arithmetic lint satisfied.
        value = u64::from(code_point).wrapping_add(coeff.wrapping_mul(value)) % modulus;
        coeff = coeff.wrapping_mul(HASH_BASE) % coeff_modulus;
    }

    value as usize
}

/// Computes the probe step for `key` in a table of `capacity` slots.
///
/// An independent polynomial accumulation modulo `capacity - 1`, offset by
/// one so the result lies in `[1, capacity - 1]` and every probe advances.
/// With the prime default capacities the step is always coprime with the
/// capacity, so one bounded walk visits every slot exactly once.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn probe_step<Q>(key: &Q, capacity: usize) -> usize
where
    Q: StepKey + ?Sized,
{
    let modulus = (capacity as u64).saturating_sub(1).max(1);
    let mut value: u64 = 0;

    for code_point in key.code_points() {
        value = value.wrapping_mul(HASH_BASE).wrapping_add(u64::from(code_point)) % modulus;
    }

    (value as usize).saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        // 'a' is 97: position = 97 % 5, step = 97 % 4 + 1.
        assert_eq!(position_hash("a", 5), 2);
        assert_eq!(probe_step("a", 5), 2);

        // "ab": the coefficient rescales to 31415 * 31 % 4 = 1 before 'b'.
        assert_eq!(position_hash("ab", 5), 0);
        assert_eq!(probe_step("ab", 5), 2);
    }

    #[test]
    fn test_position_in_range() {
        for capacity in [2, 5, 13, 29, 97, 1543] {
            for key in ["a", "ab", "zebra", "hash table", "日本語"] {
                assert!(position_hash(key, capacity) < capacity);
            }
        }
    }

    #[test]
    fn test_step_never_zero_and_bounded() {
        for capacity in [2, 5, 13, 29, 97, 1543] {
            for key in ["a", "ab", "zebra", "hash table", "日本語"] {
                let step = probe_step(key, capacity);
                assert!(step >= 1);
                assert!(step <= capacity.saturating_sub(1).max(1));
            }
        }
    }

    #[test]
    fn test_pure_functions_of_key_and_capacity() {
        for key in ["apple", "banana", "cherry"] {
            assert_eq!(position_hash(key, 53), position_hash(key, 53));
            assert_eq!(probe_step(key, 53), probe_step(key, 53));
            // Capacity participates in both hashes.
            assert_ne!(
                (position_hash(key, 53), probe_step(key, 53)),
                (position_hash(key, 97), probe_step(key, 97)),
                "hashes for {key} should differ across capacities"
            );
        }
    }

    #[test]
    fn test_string_and_str_agree() {
        let owned = String::from("strawberry");
        assert_eq!(position_hash(&owned, 389), position_hash("strawberry", 389));
        assert_eq!(probe_step(&owned, 389), probe_step("strawberry", 389));
    }
}
