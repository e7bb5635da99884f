//! Operator sugar for [`TwoComponents`](crate::TwoComponents) types.
//!
//! Rust won't let one blanket impl cover "any two conforming types", so the impls are
//! stamped out per pair. Every generated operator just calls the matching function in
//! [`crate::arithmetic`] or [`crate::relations`].

/// Implements the arithmetic and comparison operators for `$lhs`.
///
/// The first type gets operators against itself plus every type listed after it:
///
/// ```
/// use vector_arithmetic::{impl_vector_operators, Point, TwoComponents, Vector};
///
/// #[derive(Debug, Clone, Copy)]
/// struct Pixel {
///     col: f64,
///     row: f64,
/// }
///
/// impl TwoComponents for Pixel {
///     fn from_components(horizontal: f64, vertical: f64) -> Self {
///         Pixel { col: horizontal, row: vertical }
///     }
///     fn horizontal(&self) -> f64 {
///         self.col
///     }
///     fn vertical(&self) -> f64 {
///         self.row
///     }
///     fn set_horizontal(&mut self, value: f64) {
///         self.col = value;
///     }
///     fn set_vertical(&mut self, value: f64) {
///         self.row = value;
///     }
/// }
///
/// impl_vector_operators!(Pixel, Point, Vector);
///
/// let moved = Pixel { col: 1.0, row: 2.0 } + Point::new(3.0, 4.0);
/// assert!(moved == Pixel { col: 4.0, row: 6.0 });
/// assert!(Pixel { col: 1.0, row: 5.0 } < Vector::new(2.0, 3.0));
/// ```
///
/// Generated: `+ - * /` and their `*Assign` forms against each listed type, `* f64`,
/// `/ f64` and their assign forms, unary `-`, `==`, `<`, `<=`, `>`, `>=`, and `num::Zero`.
///
/// `<` is true when *either* component is smaller. `partial_cmp` agrees with the
/// operators: `Equal` when equal, `Less` when `<`, and `Greater` otherwise.
///
/// That is not an order. `(1, 5) < (2, 3)` and `(2, 3) < (1, 5)` both hold while
/// `(2, 3) > (1, 5)` does not, so `a < b` and `b > a` can disagree. Sorting,
/// `max_by(partial_cmp)` and anything else that assumes `PartialOrd`'s laws give
/// meaningless results on these types.
#[macro_export]
macro_rules! impl_vector_operators {
    (@pair $lhs:ty, $rhs:ty) => {
        impl ::std::ops::Add<$rhs> for $lhs {
            type Output = Self;
            fn add(self, rhs: $rhs) -> Self {
                $crate::arithmetic::add(self, rhs)
            }
        }
        impl ::std::ops::Sub<$rhs> for $lhs {
            type Output = Self;
            fn sub(self, rhs: $rhs) -> Self {
                $crate::arithmetic::subtract(self, rhs)
            }
        }
        impl ::std::ops::Mul<$rhs> for $lhs {
            type Output = Self;
            fn mul(self, rhs: $rhs) -> Self {
                $crate::arithmetic::multiply(self, rhs)
            }
        }
        impl ::std::ops::Div<$rhs> for $lhs {
            type Output = Self;
            fn div(self, rhs: $rhs) -> Self {
                $crate::arithmetic::divide(self, rhs)
            }
        }
        impl ::std::ops::AddAssign<$rhs> for $lhs {
            fn add_assign(&mut self, rhs: $rhs) {
                $crate::arithmetic::add_assign(self, rhs)
            }
        }
        impl ::std::ops::SubAssign<$rhs> for $lhs {
            fn sub_assign(&mut self, rhs: $rhs) {
                $crate::arithmetic::subtract_assign(self, rhs)
            }
        }
        impl ::std::ops::MulAssign<$rhs> for $lhs {
            fn mul_assign(&mut self, rhs: $rhs) {
                $crate::arithmetic::multiply_assign(self, rhs)
            }
        }
        impl ::std::ops::DivAssign<$rhs> for $lhs {
            fn div_assign(&mut self, rhs: $rhs) {
                $crate::arithmetic::divide_assign(self, rhs)
            }
        }
        impl ::std::cmp::PartialEq<$rhs> for $lhs {
            fn eq(&self, other: &$rhs) -> bool {
                $crate::relations::equals(*self, *other)
            }
        }
        impl ::std::cmp::PartialOrd<$rhs> for $lhs {
            fn partial_cmp(&self, other: &$rhs) -> Option<::std::cmp::Ordering> {
                if $crate::relations::equals(*self, *other) {
                    Some(::std::cmp::Ordering::Equal)
                } else if $crate::relations::less_than(*self, *other) {
                    Some(::std::cmp::Ordering::Less)
                } else {
                    Some(::std::cmp::Ordering::Greater)
                }
            }
            fn lt(&self, other: &$rhs) -> bool {
                $crate::relations::less_than(*self, *other)
            }
            fn le(&self, other: &$rhs) -> bool {
                $crate::relations::less_or_equal(*self, *other)
            }
            fn gt(&self, other: &$rhs) -> bool {
                $crate::relations::greater_than(*self, *other)
            }
            fn ge(&self, other: &$rhs) -> bool {
                $crate::relations::greater_or_equal(*self, *other)
            }
        }
    };
    ($lhs:ty $(, $rhs:ty)* $(,)?) => {
        $crate::impl_vector_operators!(@pair $lhs, $lhs);
        $(
            $crate::impl_vector_operators!(@pair $lhs, $rhs);
        )*

        impl ::std::ops::Mul<f64> for $lhs {
            type Output = Self;
            fn mul(self, scalar: f64) -> Self {
                $crate::arithmetic::multiply_scalar(self, scalar)
            }
        }
        impl ::std::ops::Div<f64> for $lhs {
            type Output = Self;
            fn div(self, scalar: f64) -> Self {
                $crate::arithmetic::divide_scalar(self, scalar)
            }
        }
        impl ::std::ops::MulAssign<f64> for $lhs {
            fn mul_assign(&mut self, scalar: f64) {
                $crate::arithmetic::multiply_scalar_assign(self, scalar)
            }
        }
        impl ::std::ops::DivAssign<f64> for $lhs {
            fn div_assign(&mut self, scalar: f64) {
                $crate::arithmetic::divide_scalar_assign(self, scalar)
            }
        }
        impl ::std::ops::Neg for $lhs {
            type Output = Self;
            fn neg(self) -> Self {
                $crate::geometry::reversed(self)
            }
        }
        impl $crate::reexports::num::Zero for $lhs {
            fn zero() -> Self {
                <$lhs as $crate::TwoComponents>::from_components(0.0, 0.0)
            }
            fn is_zero(&self) -> bool {
                $crate::relations::equals(*self, <Self as $crate::reexports::num::Zero>::zero())
            }
        }
    };
}

/// Componentwise `approx::AbsDiffEq` and `approx::RelativeEq` for a
/// [`TwoComponents`](crate::TwoComponents) type that already has `PartialEq`.
#[macro_export]
macro_rules! impl_approx_eq {
    ($type:ty) => {
        impl $crate::reexports::approx::AbsDiffEq for $type {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                f64::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                let (h, v) = $crate::TwoComponents::components(self);
                let (other_h, other_v) = $crate::TwoComponents::components(other);
                <f64 as $crate::reexports::approx::AbsDiffEq>::abs_diff_eq(&h, &other_h, epsilon)
                    && <f64 as $crate::reexports::approx::AbsDiffEq>::abs_diff_eq(
                        &v, &other_v, epsilon,
                    )
            }
        }

        impl $crate::reexports::approx::RelativeEq for $type {
            fn default_max_relative() -> f64 {
                f64::EPSILON
            }

            fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
                let (h, v) = $crate::TwoComponents::components(self);
                let (other_h, other_v) = $crate::TwoComponents::components(other);
                <f64 as $crate::reexports::approx::RelativeEq>::relative_eq(
                    &h,
                    &other_h,
                    epsilon,
                    max_relative,
                ) && <f64 as $crate::reexports::approx::RelativeEq>::relative_eq(
                    &v,
                    &other_v,
                    epsilon,
                    max_relative,
                )
            }
        }
    };
}
