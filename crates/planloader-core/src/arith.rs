//! Integer functions published by the binding module.
//!
//! Both operate on 32-bit signed integers and wrap on overflow. Neither can
//! fail.

/// Add two numbers.
#[inline]
pub const fn add(i: i32, j: i32) -> i32 {
    i.wrapping_add(j)
}

/// Subtract two numbers.
#[inline]
pub const fn subtract(i: i32, j: i32) -> i32 {
    i.wrapping_sub(j)
}
