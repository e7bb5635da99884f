use approx::assert_relative_eq;
use ntest::assert_false;
use num::Zero;
use pretty_assertions::assert_eq;
use vector_arithmetic::{
    impl_approx_eq, impl_vector_operators, Point, Size, TwoComponents, Vector, VectorArithmetic,
};

// screen coordinates owned by some other crate
#[derive(Debug, Clone, Copy)]
struct Pixel {
    col: f64,
    row: f64,
}

fn pixel(col: f64, row: f64) -> Pixel {
    Pixel { col, row }
}

impl TwoComponents for Pixel {
    fn from_components(horizontal: f64, vertical: f64) -> Self {
        pixel(horizontal, vertical)
    }
    fn horizontal(&self) -> f64 {
        self.col
    }
    fn vertical(&self) -> f64 {
        self.row
    }
    fn set_horizontal(&mut self, value: f64) {
        self.col = value;
    }
    fn set_vertical(&mut self, value: f64) {
        self.row = value;
    }
}

impl_vector_operators!(Pixel, Point, Vector);
impl_approx_eq!(Pixel);

#[test]
fn test_arithmetic_keeps_the_host_type() {
    let moved: Pixel = pixel(1.0, 2.0) + Point::new(3.0, 4.0);
    assert_eq!(moved, pixel(4.0, 6.0));
    assert_eq!(pixel(5.0, 5.0) - Vector::new(1.0, 2.0), pixel(4.0, 3.0));
    assert_eq!(pixel(2.0, 3.0) * pixel(2.0, 2.0), pixel(4.0, 6.0));
    assert_eq!(pixel(2.0, 3.0) / 2.0, pixel(1.0, 1.5));
    assert_eq!(-pixel(2.0, -3.0), pixel(-2.0, 3.0));
}

#[test]
fn test_compound_assignment() {
    let mut p = Pixel::zero();
    p += Vector::new(3.0, 4.0);
    p *= 2.0;
    p -= Point::new(1.0, 1.0);
    assert_eq!(p, pixel(5.0, 7.0));
    assert_false!(p.is_zero());
}

#[test]
fn test_comparisons_against_listed_types() {
    assert!(pixel(1.0, 2.0) == Point::new(1.0, 2.0));
    assert!(pixel(1.0, 2.0) != Vector::new(2.0, 1.0));
    assert!(pixel(1.0, 5.0) < Vector::new(2.0, 3.0));
    assert!(pixel(2.0, 3.0) < Point::new(1.0, 5.0));
    assert_false!(pixel(2.0, 3.0) > Point::new(1.0, 5.0));
    assert!(pixel(2.0, 3.0) >= Vector::new(2.0, 3.0));
}

#[test]
fn test_approx_eq() {
    assert_relative_eq!(pixel(0.1 + 0.2, 1.0), pixel(0.3, 1.0));
    assert_relative_eq!(pixel(1.0, 1.0), pixel(1.05, 1.0), epsilon = 0.1);
}

#[test]
fn test_geometry_works_against_any_conforming_type() {
    assert_eq!(pixel(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0);
    assert_eq!(pixel(1.0, 2.0).dot_product(Size::new(3.0, 4.0)), 11.0);
    pixel(30.0, 40.0)
        .limited(5.0)
        .check_about_eq(pixel(3.0, 4.0))
        .unwrap();
}
