//! Term-list algorithms.
//!
//! Both algorithms walk sorted term lists front to back and build a new
//! list by appending, so every result is normalized by construction:
//! - Merge-based addition of two term lists
//! - Term scaling and accumulate-by-merge multiplication

pub mod merge;
pub mod product;

pub use merge::merge_add;
pub use product::{multiply, scale_by_term};
