//! Equality and ordering between any two [`TwoComponents`] values.
//!
//! The ordering here is not a total order, and not even a partial one. `a < b` holds when
//! *either* component of `a` is smaller, so `(1, 5) < (2, 3)` and `(2, 3) < (1, 5)` are both
//! true. The other comparisons are built on top of `<` and `==` and inherit that.

use crate::components::TwoComponents;

/// Exact componentwise equality. No tolerance.
pub fn equals<T: TwoComponents, U: TwoComponents>(lhs: T, rhs: U) -> bool {
    lhs.horizontal() == rhs.horizontal() && lhs.vertical() == rhs.vertical()
}

pub fn not_equals<T: TwoComponents, U: TwoComponents>(lhs: T, rhs: U) -> bool {
    !equals(lhs, rhs)
}

/// True if either component of `lhs` is smaller than the matching one in `rhs`.
pub fn less_than<T: TwoComponents, U: TwoComponents>(lhs: T, rhs: U) -> bool {
    lhs.horizontal() < rhs.horizontal() || lhs.vertical() < rhs.vertical()
}

pub fn less_or_equal<T: TwoComponents, U: TwoComponents>(lhs: T, rhs: U) -> bool {
    less_than(lhs, rhs) || equals(lhs, rhs)
}

/// Negation of [`less_or_equal`], so NaN components compare as greater.
pub fn greater_than<T: TwoComponents, U: TwoComponents>(lhs: T, rhs: U) -> bool {
    !less_or_equal(lhs, rhs)
}

pub fn greater_or_equal<T: TwoComponents, U: TwoComponents>(lhs: T, rhs: U) -> bool {
    greater_than(lhs, rhs) || equals(lhs, rhs)
}
