//! Unit tests for the derived combinators (prefix_eq, least, for_every2,
//! equal, modulus)

use std::cell::RefCell;

use cantor::{equal, for_every2, least, modulus, prefix_eq, Bit, BitView, IndexSet};

// ============================================================================
// prefix_eq
// ============================================================================

#[test]
fn prefix_eq_accepts_agreeing_prefixes() {
    let a = [true, false, true, true];
    let b = [true, false, true, false];
    let va = BitView::strict(&a);
    let vb = BitView::strict(&b);
    assert_eq!(prefix_eq(3, &va, &vb), Some(true));
}

#[test]
fn prefix_eq_rejects_on_first_mismatch() {
    let a = [true, false, true];
    let b = [true, true, true];
    let va = BitView::strict(&a);
    let vb = BitView::strict(&b);
    assert_eq!(prefix_eq(3, &va, &vb), Some(false));
}

#[test]
fn empty_prefixes_always_agree() {
    let a = [true];
    let b = [false];
    let va = BitView::strict(&a);
    let vb = BitView::strict(&b);
    assert_eq!(prefix_eq(0, &va, &vb), Some(true));
}

#[test]
fn prefix_eq_stops_at_the_first_unknown() {
    // `a` knows nothing: the comparison must give up at position 0 and
    // request nothing further.
    let values = vec![false; 4];
    let present = IndexSet::new();
    let requested = RefCell::new(IndexSet::new());
    let va = BitView::partial(&values, &present, &requested);
    let b = [true, true, true, true];
    let vb = BitView::strict(&b);

    assert_eq!(prefix_eq(4, &va, &vb), None);
    let recorded: Vec<_> = requested.borrow().iter().collect();
    assert_eq!(recorded, vec![0]);
}

// ============================================================================
// least
// ============================================================================

#[test]
fn least_finds_the_smallest_witness() {
    assert_eq!(least(|n| n * n >= 10), 4);
}

#[test]
fn least_returns_zero_for_trivial_predicates() {
    assert_eq!(least(|_| true), 0);
}

// ============================================================================
// for_every2
// ============================================================================

#[test]
fn all_pairs_agree_on_empty_prefixes() {
    assert!(for_every2(|a, b| prefix_eq(0, a, b)));
}

#[test]
fn not_all_pairs_agree_at_position_zero() {
    assert!(!for_every2(|a, b| prefix_eq(1, a, b)));
}

#[test]
fn pairwise_tautology_holds() {
    assert!(for_every2(|a, b| {
        let x = a.get(0)?;
        let y = b.get(0)?;
        Some(x == y || x != y)
    }));
}

// ============================================================================
// equal
// ============================================================================

#[test]
fn reading_the_same_position_is_equal() {
    assert!(equal::<Bit, _, _>(|bits| bits.get(3), |bits| bits.get(3)));
}

#[test]
fn reading_different_positions_is_not_equal() {
    assert!(!equal::<Bit, _, _>(|bits| bits.get(0), |bits| bits.get(1)));
}

#[test]
fn equal_compares_non_bit_values() {
    assert!(equal::<u32, _, _>(|_| Some(17), |_| Some(17)));
    assert!(!equal::<u32, _, _>(
        |bits| Some(u32::from(bits.get(0)?)),
        |_| Some(2),
    ));
}

// ============================================================================
// modulus
// ============================================================================

#[test]
fn constant_functions_have_modulus_zero() {
    assert_eq!(modulus::<Bit, _>(|_| Some(true)), 0);
}

#[test]
fn bit_zero_has_modulus_one() {
    assert_eq!(modulus::<Bit, _>(|bits| bits.get(0)), 1);
}

#[test]
fn bit_two_has_modulus_three() {
    assert_eq!(modulus::<Bit, _>(|bits| bits.get(2)), 3);
}

#[test]
fn parity_modulus_tracks_its_highest_position() {
    let parity = |bits: &BitView<'_>| {
        let a = bits.get(0)?;
        let b = bits.get(2)?;
        Some(a ^ b)
    };
    assert_eq!(modulus::<Bit, _>(parity), 3);
}
