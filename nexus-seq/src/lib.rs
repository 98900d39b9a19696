//! Singly-linked sequence container with arena-backed nodes.
//!
//! [`SeqList`] is a general-purpose ordered container: append, indexed
//! access, search and removal by value, conversion to arrays, ordered
//! equality, and sorting. It favors a small, predictable implementation over
//! asymptotic speed.
//!
//! # Design
//!
//! ```text
//! SeqList { head, len }
//!     │
//!     └── Slab<Node<T>>   - owns the nodes, hands out stable usize keys
//!
//! head ─► [a | next] ─► [b | next] ─► [c | NONE]
//! ```
//!
//! Each node is linked from exactly one place: its predecessor, or the list
//! head. The arena is private to the list, so nodes never outlive it and no
//! caller can alias them.
//!
//! There is no tail reference. Appending and indexing walk from the head:
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `add` | O(n) |
//! | `get` | O(index) |
//! | `index_of` / `contains` / `remove` | O(n) |
//! | `sort` | O(n log n), one temporary `Vec` |
//!
//! # Quick Start
//!
//! ```
//! use nexus_seq::SeqList;
//!
//! let mut list = SeqList::new();
//! list.add("b");
//! list.add("a");
//! list.add("c");
//!
//! list.sort();
//! assert_eq!(list.to_string(), "[a, b, c]");
//!
//! let mut it = list.iter();
//! while it.has_next() {
//!     let name = it.try_next().unwrap();
//!     assert!(list.contains(name));
//! }
//! ```
//!
//! # Errors
//!
//! Only out-of-range indexing ([`Error::OutOfRange`]), iterating past the end
//! with [`Iter::try_next`] ([`Error::Exhausted`]), and the unsupported bulk
//! operations ([`Error::Unsupported`]) report errors. Lookups that find
//! nothing return `false` or `None`.
//!
//! # Logging
//!
//! Chain relinks during `sort` are reported at `debug` level and node release on
//! `clear` at `trace` level through the [`log`] facade.
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`SeqList`] as a plain sequence

#![warn(missing_docs)]

pub mod error;
pub mod iter;
pub mod list;
mod node;

#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{Error, Result};
pub use iter::{IntoIter, Iter};
pub use list::SeqList;
