//! Adaptive search over infinite bit sequences
//!
//! `for_some` decides whether a predicate over an infinite bit sequence is
//! satisfiable, inspecting only finite prefixes. The engine never guesses
//! which positions matter: the predicate asks for them, one trial at a time,
//! through the recorded-miss protocol of [`BitView::Partial`].
//!
//! # Algorithm
//!
//! ```text
//! present = {}; scratch = []
//! loop:                                  // one round per search-space size
//!     reset scratch to all-zeros
//!     for each assignment over present:  // ripple-carry enumeration
//!         answer = predicate(partial view of scratch/present)
//!         Some(true)  -> return true
//!         Some(false) -> next assignment
//!         None        -> fix every requested position into present,
//!                        grow scratch to cover them, start next round
//!     return false                       // exhausted: no assignment works
//! ```
//!
//! Assignments are enumerated by toggling the present positions in ascending
//! order with carry: binary counting using those positions as digits, low
//! digit at the smallest present index. One full cycle visits each of the
//! `2^|present|` assignments exactly once; the round stops when the counter
//! wraps back to all-zeros.
//!
//! # Termination
//!
//! The search terminates whenever the predicate's outcome is determined by a
//! finite prefix: each round either short-circuits on a satisfying
//! assignment, grows the present set (which a finitely-determined predicate
//! can only force finitely often), or proves the predicate false over every
//! assignment it can distinguish. A predicate that keeps requesting fresh
//! positions for every assignment never terminates; that is the accepted
//! cost of an exact search over an infinite domain.

use std::cell::{Cell, RefCell};

use log::{debug, trace};

use crate::index_set::IndexSet;
use crate::num::{Bit, Natural};
use crate::sequence::BitView;

// ============================================================================
// REENTRANCY GUARD
// ============================================================================

thread_local! {
    static SEARCH_ACTIVE: Cell<bool> = Cell::new(false);
}

/// Marks one `for_some` frame as active on the current thread.
///
/// The engine assumes that when a predicate answers unknown, it ran out of
/// bits in *this* frame's partial view. A predicate that reentrantly starts
/// a second search on the same thread would break that assumption (the
/// inner frame could starve on misses against the outer frame's view) and
/// silently corrupt results, so it is a fatal usage error. Distinct threads
/// may each run their own search; the flag is thread-local and the engine
/// keeps no other cross-call state.
struct ActiveSearch;

impl ActiveSearch {
    fn enter() -> Self {
        SEARCH_ACTIVE.with(|active| {
            if active.get() {
                panic!("for_some re-entered from inside an active search predicate on the same thread");
            }
            active.set(true);
        });
        ActiveSearch
    }
}

impl Drop for ActiveSearch {
    fn drop(&mut self) {
        SEARCH_ACTIVE.with(|active| active.set(false));
    }
}

// ============================================================================
// SEARCH
// ============================================================================

/// Decide whether some infinite bit sequence satisfies the predicate.
///
/// Returns true iff there is an assignment of bits to some finite set of
/// positions such that the predicate answers true: extending the
/// assignment arbitrarily elsewhere cannot change an answer the predicate
/// reached without reading elsewhere. Returns false iff every assignment
/// over the positions the predicate ever requested answers false.
///
/// The predicate must be pure, must not retain the view past the call, and
/// must not call back into a search on the same thread (panics).
pub fn for_some<P>(predicate: P) -> Bit
where
    P: Fn(&BitView<'_>) -> Option<Bit>,
{
    let _guard = ActiveSearch::enter();

    let mut present = IndexSet::new();
    let mut scratch: Vec<Bit> = Vec::new();

    loop {
        debug!(
            "enumerating assignments over {} fixed positions",
            present.len()
        );
        let positions: Vec<Natural> = present.iter().collect();
        scratch.iter_mut().for_each(|bit| *bit = false);

        let mut grew = false;
        loop {
            let requested = RefCell::new(IndexSet::new());
            let view = BitView::partial(&scratch, &present, &requested);
            match predicate(&view) {
                Some(true) => return true,
                Some(false) => {}
                None => {
                    let requested = requested.into_inner();
                    debug_assert!(
                        !requested.is_empty(),
                        "predicate answered unknown without requesting any position"
                    );
                    grow(&mut present, &mut scratch, &requested);
                    grew = true;
                    break;
                }
            }
            if !advance(&mut scratch, &positions) {
                // Counter wrapped to all-zeros: every assignment tried.
                break;
            }
        }

        if !grew {
            debug!(
                "exhausted every assignment over {} positions without a witness",
                present.len()
            );
            return false;
        }
    }
}

/// Decide whether every infinite bit sequence satisfies the predicate.
///
/// The dual of [`for_some`]: negate the predicate's decided answers
/// (propagating unknown untouched) and negate the search result.
pub fn for_every<P>(predicate: P) -> Bit
where
    P: Fn(&BitView<'_>) -> Option<Bit>,
{
    !for_some(move |bits| predicate(bits).map(|value| !value))
}

/// Step the scratch assignment to its successor: toggle the present
/// positions in ascending order until one carries to 1. Returns false once
/// the counter wraps back to all-zeros, i.e. after the last assignment.
fn advance(scratch: &mut [Bit], positions: &[Natural]) -> bool {
    for &idx in positions {
        let slot = &mut scratch[idx as usize];
        *slot = !*slot;
        if *slot {
            return true;
        }
    }
    false
}

/// Fix every requested position into the present set, growing the scratch
/// array to cover the largest of them.
fn grow(present: &mut IndexSet, scratch: &mut Vec<Bit>, requested: &IndexSet) {
    for idx in requested.iter() {
        trace!("fixing requested position {idx}");
        present.insert(idx);
    }
    if let Some(max) = requested.max() {
        if scratch.len() <= max as usize {
            scratch.resize(max as usize + 1, false);
        }
    }
}
