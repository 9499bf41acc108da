//! Arithmetic property tests for the published functions

use planloader_core::{add, subtract};

/// Values around the edges of the i32 range plus a few ordinary ones
const SAMPLES: [i32; 11] = [
    i32::MIN,
    i32::MIN + 1,
    -65_536,
    -2,
    -1,
    0,
    1,
    2,
    65_535,
    i32::MAX - 1,
    i32::MAX,
];

#[test]
fn test_concrete_scenarios() {
    assert_eq!(add(2, 3), 5);
    assert_eq!(subtract(5, 2), 3);
    assert_eq!(add(-1, 1), 0);
}

#[test]
fn test_matches_wrapping_semantics() {
    for &i in &SAMPLES {
        for &j in &SAMPLES {
            assert_eq!(add(i, j), i.wrapping_add(j), "add({i}, {j})");
            assert_eq!(subtract(i, j), i.wrapping_sub(j), "subtract({i}, {j})");
        }
    }
}

#[test]
fn test_add_is_commutative() {
    for &i in &SAMPLES {
        for &j in &SAMPLES {
            assert_eq!(add(i, j), add(j, i));
        }
    }
}

#[test]
fn test_subtract_is_antisymmetric() {
    for &i in &SAMPLES {
        for &j in &SAMPLES {
            assert_eq!(subtract(i, j), subtract(j, i).wrapping_neg());
        }
    }
}

#[test]
fn test_subtract_inverts_add() {
    for &i in &SAMPLES {
        for &j in &SAMPLES {
            assert_eq!(subtract(add(i, j), j), i);
        }
    }
}
