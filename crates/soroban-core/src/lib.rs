//! Soroban arithmetic core.
//!
//! A `no_std` fixed-width arithmetic core providing two's-complement
//! wrapping addition over `i32`. The operation owns no resources and
//! allocates nothing, so the crate builds without `std` or `alloc`.

#![no_std]

// The library never touches std; the test suite needs it for timing.
#[cfg(test)]
extern crate std;

pub mod calculator;
