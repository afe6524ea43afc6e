//! # Step Table
//!
//! An open-addressing hash table using double hashing for collision
//! resolution, with lazy (tombstone) deletion and growth through a fixed
//! ascending schedule of prime capacities.
//!
//! One polynomial hash of the key picks the starting slot and an independent
//! second hash derives the probe step, so keys that collide on placement
//! still walk different sequences through the storage. Deleted entries leave
//! tombstones behind to keep other keys' probe chains intact; tombstones are
//! reclaimed by the full rebuild that runs as soon as live occupancy exceeds
//! two-thirds of capacity. Growth is bounded: once the largest configured
//! capacity fills up the table fails deterministically instead of growing
//! further.
//!
//! ## Basic Usage
//!
//! ```rust
//! use steptable::StepHashTable;
//!
//! let mut table = StepHashTable::new();
//!
//! // Insert values
//! table.set("apple".to_string(), 1).unwrap();
//! table.set("banana".to_string(), 2).unwrap();
//!
//! // Retrieve values
//! assert_eq!(table.get("apple"), Ok(&1));
//!
//! // Update values; the previous value comes back
//! assert_eq!(table.set("apple".to_string(), 10), Ok(Some(1)));
//!
//! // Delete values (lazily, via a tombstone)
//! assert_eq!(table.delete("apple"), Ok(10));
//! assert!(!table.contains("apple"));
//! assert_eq!(table.len(), 1);
//! ```
//!
//! ## Bounded growth
//!
//! The capacity schedule can be overridden, which makes the growth ceiling
//! easy to reach in tests:
//!
//! ```rust
//! use steptable::{StepHashTable, TableError};
//!
//! let mut table = StepHashTable::with_sizes(&[5]);
//! for i in 0..3 {
//!     table.set(format!("key-{i}"), i).unwrap();
//! }
//!
//! // The fourth insert crosses the two-thirds threshold, and there is no
//! // larger capacity left to rebuild into. The entry itself still lands.
//! assert_eq!(table.set("key-3".to_string(), 3), Err(TableError::CapacityExhausted));
//! assert_eq!(table.get("key-3"), Ok(&3));
//! ```

/// Error type shared by all table operations
mod error;
/// Hashing primitives: the `StepKey` trait and the two polynomial hashes
mod hash;
/// The double-hashing table itself: probing, resizing, iteration
mod step_table;
/// Utility helpers and the keys/values extension trait
mod utils;

pub use error::TableError;
pub use hash::StepKey;
pub use step_table::{Iter, StepHashTable};
pub use utils::StepTableExtensions;
