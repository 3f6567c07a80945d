//! Derived searches over the core engine
//!
//! Everything here reduces to [`for_some`]/[`for_every`] plus the unknown
//! sentinel: `Option::None` propagates through each combinator with `?`
//! untouched, so a predicate's request for more bits falls straight through
//! arithmetic and comparisons back to the engine.

use crate::num::{Bit, Natural};
use crate::search::for_every;
use crate::sequence::BitView;

/// Decide whether every pair of infinite bit sequences satisfies the
/// two-argument predicate.
///
/// The pair is searched inside one physical sequence: even positions carry
/// the first logical sequence, odd positions the second. Requests from
/// either logical view land in the shared physical search space, so one
/// engine run covers both sequences at once.
pub fn for_every2<P>(predicate: P) -> Bit
where
    P: Fn(&BitView<'_>, &BitView<'_>) -> Option<Bit>,
{
    for_every(move |product| {
        let a = product.stride(2, 0);
        let b = product.stride(2, 1);
        predicate(&a, &b)
    })
}

/// Decide whether two functions of a bit sequence agree on every sequence.
///
/// `f_a` and `f_b` each map a view to a decided value or unknown; unknown
/// from either side short-circuits the comparison (but not the underlying
/// position collection) and propagates to the engine.
pub fn equal<T, FA, FB>(f_a: FA, f_b: FB) -> Bit
where
    T: PartialEq,
    FA: Fn(&BitView<'_>) -> Option<T>,
    FB: Fn(&BitView<'_>) -> Option<T>,
{
    for_every(move |bits| {
        let a = f_a(bits)?;
        let b = f_b(bits)?;
        Some(a == b)
    })
}

/// The smallest natural satisfying a total predicate.
///
/// Plain linear scan from 0. Loops forever if no such natural exists; the
/// intended callers (modulus computations) guarantee one does.
pub fn least<P>(predicate: P) -> Natural
where
    P: Fn(Natural) -> bool,
{
    let mut n = 0;
    while !predicate(n) {
        n += 1;
    }
    n
}

/// Compare the first `n` positions of two views.
///
/// `Some(false)` on the first mismatch, `Some(true)` if all `n` agree, and
/// `None` the moment either view answers unknown; later positions are not
/// compared (or requested) past the first undecided one.
pub fn prefix_eq(n: Natural, a: &BitView<'_>, b: &BitView<'_>) -> Option<Bit> {
    for i in 0..n {
        let ai = a.get(i)?;
        let bi = b.get(i)?;
        if ai != bi {
            return Some(false);
        }
    }
    Some(true)
}

/// The modulus of uniform continuity of `f`: the smallest `n` such that any
/// two sequences agreeing on their first `n` positions yield the same value.
///
/// Searches pairs of sequences via [`for_every2`]: a prefix length `n` is a
/// modulus iff for every pair, prefix agreement implies equal outputs
/// (pairs with differing prefixes are vacuously fine).
pub fn modulus<T, F>(f: F) -> Natural
where
    T: PartialEq,
    F: Fn(&BitView<'_>) -> Option<T>,
{
    least(|n| {
        for_every2(|a, b| {
            let same_prefix = prefix_eq(n, a, b)?;
            if !same_prefix {
                return Some(true);
            }
            let fa = f(a)?;
            let fb = f(b)?;
            Some(fa == fb)
        })
    })
}
