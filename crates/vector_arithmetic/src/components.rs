use euclid::{Point2D, Size2D, Vector2D};

/// Anything with a horizontal and a vertical `f64` component.
///
/// This is the only thing the rest of the crate asks of a type. Implement it
/// and every function in [`crate::arithmetic`], [`crate::relations`] and
/// [`crate::geometry`] works on that type, including against any other type
/// that implements it.
pub trait TwoComponents: Copy {
    fn from_components(horizontal: f64, vertical: f64) -> Self;
    fn horizontal(&self) -> f64;
    fn vertical(&self) -> f64;
    fn set_horizontal(&mut self, value: f64);
    fn set_vertical(&mut self, value: f64);

    fn components(&self) -> (f64, f64) {
        (self.horizontal(), self.vertical())
    }
    /// Same two numbers, different type.
    fn convert<U: TwoComponents>(&self) -> U {
        U::from_components(self.horizontal(), self.vertical())
    }
}

impl<U> TwoComponents for Point2D<f64, U> {
    fn from_components(horizontal: f64, vertical: f64) -> Self {
        Point2D::new(horizontal, vertical)
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

impl<U> TwoComponents for Vector2D<f64, U> {
    fn from_components(horizontal: f64, vertical: f64) -> Self {
        Vector2D::new(horizontal, vertical)
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

impl<U> TwoComponents for Size2D<f64, U> {
    fn from_components(horizontal: f64, vertical: f64) -> Self {
        Size2D::new(horizontal, vertical)
    }
    fn horizontal(&self) -> f64 {
        self.width
    }
    fn vertical(&self) -> f64 {
        self.height
    }
    fn set_horizontal(&mut self, value: f64) {
        self.width = value;
    }
    fn set_vertical(&mut self, value: f64) {
        self.height = value;
    }
}
