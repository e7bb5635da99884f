use std::fmt::{Display, Formatter};

use derive_more::{Constructor, From, Into};

use crate::{impl_approx_eq, impl_vector_operators, Size, TwoComponents, Vector};

/// A position, measured from an implicit origin.
#[derive(Default, Debug, Copy, Clone, Constructor, From, Into)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

impl TwoComponents for Point {
    fn from_components(horizontal: f64, vertical: f64) -> Self {
        Point::new(horizontal, vertical)
    }
    fn horizontal(&self) -> f64 {
        self.x
    }
    fn vertical(&self) -> f64 {
        self.y
    }
    fn set_horizontal(&mut self, value: f64) {
        self.x = value;
    }
    fn set_vertical(&mut self, value: f64) {
        self.y = value;
    }
}

impl_vector_operators!(Point, Size, Vector);
impl_approx_eq!(Point);

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x: {}, y: {})", self.x, self.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl<U> From<euclid::Point2D<f64, U>> for Point {
    fn from(value: euclid::Point2D<f64, U>) -> Self {
        Point::new(value.x, value.y)
    }
}

impl<U> From<Point> for euclid::Point2D<f64, U> {
    fn from(value: Point) -> Self {
        euclid::Point2D::new(value.x, value.y)
    }
}
