use std::fmt::{Display, Formatter};

use derive_more::{Constructor, From, Into};

use crate::{impl_approx_eq, impl_vector_operators, Point, TwoComponents, Vector};

/// Width and height. Non-negative by convention only; nothing enforces it.
#[derive(Default, Debug, Copy, Clone, Constructor, From, Into)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

impl TwoComponents for Size {
    fn from_components(horizontal: f64, vertical: f64) -> Self {
        Size::new(horizontal, vertical)
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

impl_vector_operators!(Size, Point, Vector);
impl_approx_eq!(Size);

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(width: {}, height: {})", self.width, self.height)
    }
}

impl From<[f64; 2]> for Size {
    fn from([width, height]: [f64; 2]) -> Self {
        Size::new(width, height)
    }
}

impl<U> From<euclid::Size2D<f64, U>> for Size {
    fn from(value: euclid::Size2D<f64, U>) -> Self {
        Size::new(value.width, value.height)
    }
}

impl<U> From<Size> for euclid::Size2D<f64, U> {
    fn from(value: Size) -> Self {
        euclid::Size2D::new(value.width, value.height)
    }
}
