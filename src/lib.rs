//! # sorted-set
//!
//! An immutable ordered set for Rust: a value holding distinct elements in
//! ascending order that behaves both as a set and as an indexable sequence.
//!
//! ## Overview
//!
//! - **[`SortedSet`]**: built from any collection by sorting and
//!   deduplicating it. Never mutated after construction; every operation
//!   that "changes" a set returns a new one.
//! - **Set algebra**: union, intersection, difference, symmetric difference
//!   and subset relations, as named methods and as operators
//!   (`+`, `|`, `&`, `-`, `^`, `<`, `<=`, `>`, `>=`).
//! - **Sequence access**: signed indexing (`-1` is the largest element),
//!   clamped slicing, binary-search lookup and double-ended iteration.
//! - **Capability traits**: [`OrderedSequence`] and [`SetAlgebra`] describe
//!   the two halves independently for generic code.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` as a sequence
//! - `rayon`: parallel iteration and parallel collection
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sorted_set::prelude::*;
//!
//! let set = SortedSet::from([42, 12, 38, 12]);
//! assert_eq!(format!("{set:?}"), "SortedSet([12, 38, 42])");
//! assert_eq!(set.index_of(&38), Ok(1));
//! assert!(set.is_superset_of(vec![12, 42]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the set type, its capability traits and its error types.
///
/// # Usage
///
/// ```rust
/// use sorted_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::capability::{OrderedSequence, SetAlgebra};
    pub use crate::error::{ElementNotFoundError, IndexOutOfRangeError, SortedSetError};
    pub use crate::sorted_set::SortedSet;
}

pub mod capability;
pub mod error;
mod sorted_set;

pub use capability::{OrderedSequence, SetAlgebra};
pub use error::{ElementNotFoundError, IndexOutOfRangeError, SortedSetError};
pub use sorted_set::{IntoIter, Iter, SortedSet};
