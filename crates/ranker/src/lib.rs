//! Ordering of installed games for display.
//!
//! The default ranking puts the least recently touched games first, which is
//! the order in which they are most likely candidates for removal.

pub mod key;
pub mod sort;
pub mod state;

// Re-export primary types for convenience.
pub use key::{RankError, SortKey};
pub use sort::{rank, sort, sort_in_place};
pub use state::SortState;
