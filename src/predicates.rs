//! Reference predicates
//!
//! Two small functions of an infinite bit sequence with data-dependent
//! reads: each fixes a couple of positions statically and derives one more
//! position from a bit it already read. They are the workload of the demo
//! binary, and the regression tests pin the engine's verdicts on them
//! (`equal(func_f, func_g)` is false; the moduli are 8 and 13).

use crate::num::{Bit, Natural};
use crate::sequence::BitView;

/// `t0 = a[4]`, `t1 = a[t0 * 7]`, `t2 = a[7]`; result `t0 | (t1 & t2)`.
///
/// Reads position 0 or 7 for `t1` depending on the bit at 4, so its output
/// depends on positions {0, 4, 7} and its modulus of continuity is 8.
pub fn func_f(a: &BitView<'_>) -> Option<Bit> {
    let t0 = a.get(4)?;
    let t1 = a.get(Natural::from(t0) * 7)?;
    let t2 = a.get(7)?;
    Some(t0 | (t1 & t2))
}

/// `t0 = a[4]`, `t1 = a[7]`, `t2 = a[t0 + 11 * t1]`; result `t2 & t0`.
///
/// The derived read reaches position 12 when bits 4 and 7 are both set, so
/// its modulus of continuity is 13.
pub fn func_g(a: &BitView<'_>) -> Option<Bit> {
    let t0 = a.get(4)?;
    let t1 = a.get(7)?;
    let t2 = a.get(Natural::from(t0) + 11 * Natural::from(t1))?;
    Some(t2 & t0)
}
