#![forbid(unsafe_code)]
//! rill-index: the key-indexing abstraction behind grouping, dedup, and
//! set algebra.
//!
//! One uniform `KeyStore` surface over two strategies: a hash table
//! (`HashIndex`) and comparator-sorted parallel arrays (`SortedIndex`).
//! The caller picks the strategy at combinator-construction time through an
//! `IndexMaker`; the combinators never learn how membership is implemented.

pub mod hash;
pub mod sorted;
pub mod store;

pub use hash::{HashIndex, HashMaker};
pub use sorted::{SortedIndex, SortedMaker};
pub use store::{IndexMaker, KeyStore};
