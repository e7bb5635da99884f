use std::fmt::{Display, Formatter};

use derive_more::{Constructor, From, Into};

use crate::{impl_approx_eq, impl_vector_operators, Point, Size, TwoComponents};

/// A displacement with an explicit direction.
#[derive(Default, Debug, Copy, Clone, Constructor, From, Into)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { dx: 0.0, dy: 0.0 };
}

impl TwoComponents for Vector {
    fn from_components(horizontal: f64, vertical: f64) -> Self {
        Vector::new(horizontal, vertical)
    }
    fn horizontal(&self) -> f64 {
        self.dx
    }
    fn vertical(&self) -> f64 {
        self.dy
    }
    fn set_horizontal(&mut self, value: f64) {
        self.dx = value;
    }
    fn set_vertical(&mut self, value: f64) {
        self.dy = value;
    }
}

impl_vector_operators!(Vector, Point, Size);
impl_approx_eq!(Vector);

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(dx: {}, dy: {})", self.dx, self.dy)
    }
}

impl From<[f64; 2]> for Vector {
    fn from([dx, dy]: [f64; 2]) -> Self {
        Vector::new(dx, dy)
    }
}

impl<U> From<euclid::Vector2D<f64, U>> for Vector {
    fn from(value: euclid::Vector2D<f64, U>) -> Self {
        Vector::new(value.x, value.y)
    }
}

impl<U> From<Vector> for euclid::Vector2D<f64, U> {
    fn from(value: Vector) -> Self {
        euclid::Vector2D::new(value.dx, value.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VectorArithmetic;
    use more_asserts as ma;
    use ntest::{assert_about_eq, assert_false};
    use pretty_assertions::assert_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_dx_is_horizontal_and_dy_is_vertical() {
        let mut v = Vector::from_components(-1.0, 1.0);
        assert_eq!((v.dx, v.dy), (-1.0, 1.0));
        v.set_horizontal(0.5);
        assert_eq!(v.components(), (0.5, 1.0));
    }

    #[test]
    fn test_normalized() {
        assert_eq!(Vector::ZERO.normalized(), Vector::ZERO);
        assert_about_eq!(Vector::new(-3.0, 12.0).normalized().magnitude(), 1.0);
        assert_eq!(Vector::new(0.0, 9.0).normalized(), Vector::new(0.0, 1.0));
    }

    #[test]
    fn test_angled_keeps_length() {
        let v = Vector::new(3.0, 4.0);
        let turned = v.angled(PI);
        turned.check_about_eq(Vector::new(-5.0, 0.0)).unwrap();
        assert_about_eq!(turned.magnitude(), 5.0);
        v.angled(0.0).check_about_eq(Vector::new(5.0, 0.0)).unwrap();
    }

    #[test]
    fn test_cross_product_method() {
        assert_about_eq!(Vector::new(1.0, 0.0).cross_product(Vector::new(0.0, 1.0)), -1.0);
        assert_about_eq!(Vector::new(0.0, 1.0).cross_product(Point::new(1.0, 0.0)), 1.0);
        assert_about_eq!(Vector::new(2.0, 0.0).cross_product(Size::new(5.0, 0.0)), 0.0);
    }

    #[test]
    fn test_limited_never_grows() {
        let v = Vector::new(-6.0, 8.0);
        ma::assert_le!(v.limited(4.0).magnitude(), 4.0 + 1e-12);
        assert_eq!(v.limited(100.0), v);
        assert_about_eq!(v.limited(5.0).angle_in_radians(), v.angle_in_radians());
    }

    #[test]
    fn test_ordering_is_either_component() {
        let v = Vector::new(1.0, 5.0);
        let w = Vector::new(2.0, 3.0);
        assert!(v < w);
        assert!(w < v);
        assert!(v <= w);
        assert_false!(v > w);
        // v < w does not make w > v
        assert_false!(w > v);
        assert_false!(v == w);
    }

    #[test]
    fn test_angle_in_radians_up_reference() {
        assert_about_eq!(Vector::new(1.0, 0.0).angle_in_radians(), -FRAC_PI_2);
        assert_about_eq!(Vector::new(0.0, 3.0).angle_in_radians(), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector::new(0.5, -1.0).to_string(), "(dx: 0.5, dy: -1)");
    }
}
