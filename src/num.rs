//! Scalar vocabulary for bit-sequence searches
//!
//! The whole crate speaks in terms of two scalars: the bits stored in a
//! sequence and the natural numbers used to index into it. Naming them once
//! keeps signatures legible and makes the index arithmetic in strided views
//! and predicates explicit.

/// A single bit of an infinite sequence: 0 or 1.
pub type Bit = bool;

/// A non-negative index into a bit sequence.
///
/// Sequences are conceptually infinite, so indices are not bounded by any
/// backing-store length; the search engine grows its finite scratch space to
/// cover whatever indices predicates actually request.
pub type Natural = u64;
