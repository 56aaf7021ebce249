//! This is a double-ended priority queue: both the smallest and the biggest element
//! can be looked at in ***O(1)*** and removed in ***O(log n)***.
//!
//! Every element is stored once, and two binary heaps of element indexes are kept over it,
//! one ordered by minimum and one by maximum.
//! Each heap tracks the slot of every element, and every swap rewrites those slots,
//! so removing an element from one heap finds it in the other without scanning.
//!
//! Elements only need `Ord`.
//!
//! Insert, extract min and extract max have ***O(log n)*** time complexity;
//! find min, find max and len are ***O(1)***; building from a vector is ***O(n)***.
//!
//! # Examples
//!
//! A sliding leaderboard that only ever keeps the best `LIMIT` scores:
//! the worst one is dropped from the bottom while the best stays on top.
//!
//! ```
//! use dual_heap::{DualHeap, DualHeapError};
//!
//! const LIMIT: usize = 3;
//!
//! fn record(board: &mut DualHeap<u32>, score: u32) -> Result<(), DualHeapError> {
//!     board.insert(score)?;
//!     if board.len() > LIMIT {
//!         // Lowest score falls off the board
//!         board.extract_min()?;
//!     }
//!     Ok(())
//! }
//!
//! let mut board = DualHeap::with_capacity(LIMIT).unwrap();
//! for score in [40, 75, 10, 90, 55, 20] {
//!     record(&mut board, score).unwrap();
//! }
//!
//! assert_eq!(board.len(), LIMIT);
//! assert_eq!(board.find_max(), Ok(&90));
//! assert_eq!(board.find_min(), Ok(&55));
//! assert_eq!(board.into_sorted_vec(), vec![55, 75, 90]);
//! ```
//!

mod dual_heap;
mod error;
mod mirrored_heap;
mod rated_rider;

pub use crate::dual_heap::{DualHeap, IntoAscending, Iter, DEFAULT_CAPACITY, GROWTH_FACTOR};
pub use crate::error::DualHeapError;
pub use crate::rated_rider::RatedRider;

#[doc = include_str!("../../Readme.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
