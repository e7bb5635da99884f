//! Componentwise arithmetic between [`TwoComponents`] values.
//!
//! The result always has the type of the left operand, whatever the right one is.
//! Nothing here checks for zero divisors; infinities and NaNs come through per component.

use crate::components::TwoComponents;

pub fn add<T: TwoComponents, U: TwoComponents>(lhs: T, rhs: U) -> T {
    T::from_components(
        lhs.horizontal() + rhs.horizontal(),
        lhs.vertical() + rhs.vertical(),
    )
}

pub fn subtract<T: TwoComponents, U: TwoComponents>(lhs: T, rhs: U) -> T {
    T::from_components(
        lhs.horizontal() - rhs.horizontal(),
        lhs.vertical() - rhs.vertical(),
    )
}

pub fn multiply<T: TwoComponents, U: TwoComponents>(lhs: T, rhs: U) -> T {
    T::from_components(
        lhs.horizontal() * rhs.horizontal(),
        lhs.vertical() * rhs.vertical(),
    )
}

pub fn divide<T: TwoComponents, U: TwoComponents>(lhs: T, rhs: U) -> T {
    T::from_components(
        lhs.horizontal() / rhs.horizontal(),
        lhs.vertical() / rhs.vertical(),
    )
}

pub fn multiply_scalar<T: TwoComponents>(lhs: T, scalar: f64) -> T {
    T::from_components(lhs.horizontal() * scalar, lhs.vertical() * scalar)
}

pub fn divide_scalar<T: TwoComponents>(lhs: T, scalar: f64) -> T {
    T::from_components(lhs.horizontal() / scalar, lhs.vertical() / scalar)
}

pub fn add_assign<T: TwoComponents, U: TwoComponents>(lhs: &mut T, rhs: U) {
    *lhs = add(*lhs, rhs);
}

pub fn subtract_assign<T: TwoComponents, U: TwoComponents>(lhs: &mut T, rhs: U) {
    *lhs = subtract(*lhs, rhs);
}

pub fn multiply_assign<T: TwoComponents, U: TwoComponents>(lhs: &mut T, rhs: U) {
    *lhs = multiply(*lhs, rhs);
}

pub fn divide_assign<T: TwoComponents, U: TwoComponents>(lhs: &mut T, rhs: U) {
    *lhs = divide(*lhs, rhs);
}

pub fn multiply_scalar_assign<T: TwoComponents>(lhs: &mut T, scalar: f64) {
    *lhs = multiply_scalar(*lhs, scalar);
}

pub fn divide_scalar_assign<T: TwoComponents>(lhs: &mut T, scalar: f64) {
    *lhs = divide_scalar(*lhs, scalar);
}
