//! A probabilistic ordered set for Rust.
//!
//! This crate provides [`SkipList`], a sorted set backed by a skip list: a stack of
//! linked levels where each element appears on a randomly chosen number of them. Search,
//! insertion and removal descend from the sparsest level to the densest and take
//! expected O(log n) time, with no rebalancing.
//!
//! - [`insert`](SkipList::insert), [`remove`](SkipList::remove),
//!   [`contains`](SkipList::contains) - set operations
//! - [`ceiling`](SkipList::ceiling), [`floor`](SkipList::floor) - nearest elements
//!   at or above / at or below a key
//! - [`first`](SkipList::first), [`last`](SkipList::last) - extremes in O(1)
//! - [`get`](SkipList::get), [`rank_of`](SkipList::rank_of), indexing by [`Rank`] -
//!   rank access, **linear** in the rank
//!
//! # Example
//!
//! ```
//! use skipset::{Rank, SkipList};
//!
//! let mut list = SkipList::with_seed(7);
//! list.insert(5);
//! list.insert(1);
//! list.insert(9);
//! list.insert(3);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3, 5, 9]);
//! assert_eq!(list.floor(&4), Some(&3));
//! assert_eq!(list.ceiling(&4), Some(&5));
//! assert_eq!(list[Rank(2)], 5);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc` with default features disabled
//! - **`std`** (default) - Enables [`SkipList::new`] and the conversions that seed
//!   their generator from the operating system
//! - **Injectable randomness** - Node heights come from any [`rand_core::RngCore`], so
//!   tests can pin the exact structure of a list
//!
//! # Implementation
//!
//! Nodes live in an arena owned by the list and refer to each other by index, with a
//! head and tail sentinel spanning all 33 levels. Each node keeps forward and backward
//! links for every level it occupies. Every query first computes the *trail*: for each
//! level, the last node strictly less than the target. The trail answers the query and
//! is also the exact set of splice points for insertion and removal.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod skiplist;

pub use error::OutOfRange;
pub use order_statistic::Rank;
pub use skiplist::SkipList;
