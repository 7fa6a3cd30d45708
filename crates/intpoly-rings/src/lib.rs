//! # intpoly-rings
//!
//! Coefficient rings for intpoly.
//!
//! This crate provides:
//! - The `Coefficient` trait for fixed-width signed integers
//! - Wrapping ring operations and exponentiation by squaring
//!
//! ## Width
//!
//! Polynomials are generic over the coefficient type and default to `i64`.
//! Any of `i8`, `i16`, `i32`, `i64`, `i128` or `isize` may be used; all
//! arithmetic wraps at the chosen width.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod traits;

#[cfg(test)]
mod proptests;

pub use traits::Coefficient;
