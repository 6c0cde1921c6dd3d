//! Addition case tables shared by the soroban test suites.
//!
//! [`ADDITION_CASES`] holds `(a, b, expected)` rows covering ordinary,
//! negative, large-magnitude, and wraparound sums; [`BOUNDARY_VALUES`]
//! holds the values at and around the representable limits. Self-tests
//! check every row against a widened `i64` reference.

#![no_std]

/// Parameterized addition rows: `(a, b, expected)` where `expected` is the
/// two's-complement wrapping sum of `a` and `b`.
pub const ADDITION_CASES: &[(i32, i32, i32)] = &[
    (1, 1, 2),
    (10, 20, 30),
    (-5, 5, 0),
    (-10, -20, -30),
    (100, 200, 300),
    (1_000_000, 1_000_000, 2_000_000),
    (-1_000_000, -1_000_000, -2_000_000),
    (i32::MAX, 1, i32::MIN),
    (i32::MIN, -1, i32::MAX),
];

/// Values at and around the representable limits, exercised against the
/// additive identity.
pub const BOUNDARY_VALUES: &[i32] = &[i32::MAX, i32::MIN, 0, 1, -1];
