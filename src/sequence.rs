//! Views onto possibly-infinite bit sequences
//!
//! An infinite bit sequence is never materialized; predicates only ever see a
//! *view* with a single operation, [`BitView::get`], which may answer
//! `None` ("unknown") instead of a bit. The view variants form a closed set:
//!
//! - [`BitView::Strict`]: a finite array, total within bounds. Used where
//!   the caller controls every index it generates (tests, prefix checks).
//! - [`BitView::Partial`]: a finite scratch array guarded by a *present*
//!   set. Reading a position outside the present set returns `None` and
//!   durably records the position in a *requested* set; the search engine
//!   inspects that set after the predicate returns to decide how to grow its
//!   search space.
//! - [`BitView::Strided`]: an affine reindexing of another view, mapping
//!   logical position `i` to physical position `i * stride + offset`. With
//!   stride `n`, one physical sequence carries `n` interleaved logical
//!   sequences.
//!
//! Views borrow the engine's trial state, so a predicate cannot retain one
//! past its call. The requested set sits behind a `RefCell`: several strided
//! views over one partial view must share the recorder within a single
//! trial, and recording a miss is the one mutation a read performs.

use std::cell::RefCell;

use crate::index_set::IndexSet;
use crate::num::{Bit, Natural};

/// A read-only view of a possibly-infinite bit sequence.
///
/// `get` either returns a bit or `None` for "unknown", the sentinel by
/// which a predicate tells the search engine it ran out of fixed bits.
#[derive(Debug)]
pub enum BitView<'a> {
    /// A finite, fully-known sequence. Out-of-range access is an algorithm
    /// defect and panics.
    Strict(&'a [Bit]),
    /// A finite prefix of an infinite sequence: only positions in `present`
    /// are readable, and every miss is recorded in `requested`.
    Partial {
        /// Backing scratch array; only meaningful at present positions.
        values: &'a [Bit],
        /// Positions currently fixed by the search engine.
        present: &'a IndexSet,
        /// Positions a predicate asked for but could not read.
        requested: &'a RefCell<IndexSet>,
    },
    /// Logical position `i` reads physical position `i * stride + offset`
    /// of the source view.
    Strided {
        /// The underlying physical view.
        source: &'a BitView<'a>,
        /// Spacing between consecutive logical positions.
        stride: Natural,
        /// Physical position of logical position 0.
        offset: Natural,
    },
}

impl<'a> BitView<'a> {
    /// View a fully-known finite sequence.
    pub fn strict(values: &'a [Bit]) -> Self {
        BitView::Strict(values)
    }

    /// View one trial of a partial assignment: `values` at `present`
    /// positions, recording every other read in `requested`.
    pub fn partial(
        values: &'a [Bit],
        present: &'a IndexSet,
        requested: &'a RefCell<IndexSet>,
    ) -> Self {
        BitView::Partial {
            values,
            present,
            requested,
        }
    }

    /// Reindex this view: logical `i` maps to physical `i * stride + offset`.
    pub fn stride(&self, stride: Natural, offset: Natural) -> BitView<'_> {
        BitView::Strided {
            source: self,
            stride,
            offset,
        }
    }

    /// Read the bit at a position, or `None` if it is not (yet) known.
    ///
    /// On a partial view, a miss also records the position in the requested
    /// set; that side effect is the growth signal the whole search runs on.
    pub fn get(&self, idx: Natural) -> Option<Bit> {
        match *self {
            BitView::Strict(values) => Some(values[idx as usize]),
            BitView::Partial {
                values,
                present,
                requested,
            } => {
                if present.contains(idx) {
                    Some(values[idx as usize])
                } else {
                    requested.borrow_mut().insert(idx);
                    None
                }
            }
            BitView::Strided {
                source,
                stride,
                offset,
            } => source.get(idx * stride + offset),
        }
    }
}
