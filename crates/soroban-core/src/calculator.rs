//! The wrapping-addition calculator.
//!
//! One operation: the two's-complement sum of two `i32` values. The sum is
//! reduced modulo 2^32, so `i32::MAX` plus 1 is `i32::MIN` and `i32::MIN`
//! plus -1 is `i32::MAX`. Wrapping is the defined result, not an error.

/// A stateless adder over fixed-width 32-bit signed integers.
///
/// Holds no fields and owns no resources. Instances are interchangeable
/// and may be shared across threads without synchronization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Calculator;

impl Calculator {
    /// Create a calculator.
    pub const fn new() -> Self {
        Calculator
    }

    /// The two's-complement wrapping sum of `a` and `b`.
    ///
    /// Total over the full `i32` domain and never panics: native `+` traps
    /// on overflow under debug overflow checks, so the sum goes through
    /// [`i32::wrapping_add`]. Commutative and associative, with 0 as the
    /// identity.
    pub fn add(&self, a: i32, b: i32) -> i32 {
        a.wrapping_add(b)
    }
}
