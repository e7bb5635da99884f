//! Arithmetic and geometry for anything made of two `f64` components.
//!
//! Implement [`TwoComponents`] for a type and it gets every function in [`arithmetic`],
//! [`relations`] and [`geometry`], plus the [`VectorArithmetic`] methods, including
//! against any other conforming type. [`Point`], [`Size`] and [`Vector`] come with
//! operators already; other types can get them with [`impl_vector_operators!`].
//!
//! ```
//! use vector_arithmetic::{Point, Size, Vector, VectorArithmetic};
//!
//! let moved: Point = Point::new(1.0, 2.0) + Vector::new(3.0, 4.0);
//! assert_eq!(moved, Point::new(4.0, 6.0));
//! assert_eq!(Size::new(1.0, 2.0) + moved, Size::new(5.0, 8.0));
//! assert_eq!(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0);
//! ```

pub mod arithmetic;
pub mod components;
pub mod geometry;
mod operators;
mod point;
pub mod relations;
mod size;
mod vector;

pub use components::TwoComponents;
pub use geometry::VectorArithmetic;
pub use point::Point;
pub use size::Size;
pub use vector::Vector;

pub type OkOrMessage = Result<(), String>;

#[doc(hidden)]
pub mod reexports {
    pub use approx;
    pub use num;
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;
    use std::fmt::{Debug, Display};
    use std::ops::{Add, Div, Mul, Neg, Sub};

    assert_impl_all!(Point: TwoComponents, VectorArithmetic, Send, Sync, Debug, Display, Default);
    assert_impl_all!(Size: TwoComponents, VectorArithmetic, Send, Sync, Debug, Display, Default);
    assert_impl_all!(Vector: TwoComponents, VectorArithmetic, Send, Sync, Debug, Display, Default);

    assert_impl_all!(Point: Add<Vector>, Sub<Size>, Mul<Point>, Div<f64>, Neg, PartialOrd<Size>);
    assert_impl_all!(Size: Add<Point>, Sub<Vector>, Mul<f64>, PartialEq<Vector>, num::Zero);
    assert_impl_all!(Vector: Add<Size>, Div<Point>, approx::RelativeEq, PartialOrd<Point>);

    assert_impl_all!(euclid::default::Point2D<f64>: TwoComponents, VectorArithmetic);
    assert_impl_all!(euclid::default::Size2D<f64>: TwoComponents);
    assert_impl_all!(euclid::default::Vector2D<f64>: TwoComponents);
}
