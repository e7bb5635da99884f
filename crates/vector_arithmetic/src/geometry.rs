//! Lengths, angles and products of [`TwoComponents`] values.
//!
//! Two angle conventions live here and they do not invert each other:
//! - [`angle_in_radians`] measures from "up", so `(1, 0)` is `-π/2`.
//! - [`angled`] takes a standard angle, so `0` points along `+horizontal`.

use std::f64::consts::FRAC_PI_2;

use log::trace;

use crate::arithmetic::{divide_scalar, multiply_scalar, subtract};
use crate::components::TwoComponents;
use crate::OkOrMessage;

pub fn length_squared<T: TwoComponents>(v: T) -> f64 {
    v.horizontal() * v.horizontal() + v.vertical() * v.vertical()
}

pub fn magnitude<T: TwoComponents>(v: T) -> f64 {
    length_squared(v).sqrt()
}

pub fn length<T: TwoComponents>(v: T) -> f64 {
    magnitude(v)
}

/// Zero is straight up (`+vertical`), and the angle grows counterclockwise.
pub fn angle_in_radians<T: TwoComponents>(v: T) -> f64 {
    let n = normalized(v);
    n.vertical().atan2(n.horizontal()) - FRAC_PI_2
}

/// Unit length in the same direction. A zero length value comes back as is.
pub fn normalized<T: TwoComponents>(v: T) -> T {
    let len = magnitude(v);
    if len > 0.0 {
        divide_scalar(v, len)
    } else {
        trace!("not normalizing zero length value {:?}", v.components());
        v
    }
}

pub fn reversed<T: TwoComponents>(v: T) -> T {
    multiply_scalar(v, -1.0)
}

pub fn dot_product<T: TwoComponents, U: TwoComponents>(v: T, w: U) -> f64 {
    v.horizontal() * w.horizontal() + v.vertical() * w.vertical()
}

/// `|v| |w| sin(angle(v) - angle(w))`.
///
/// Works out to `v.vertical * w.horizontal - v.horizontal * w.vertical`, which is the
/// negative of the usual determinant form.
pub fn cross_product<T: TwoComponents, U: TwoComponents>(v: T, w: U) -> f64 {
    let delta = (angle_in_radians(v) - angle_in_radians(w)).sin();
    magnitude(v) * magnitude(w) * delta
}

pub fn distance_to<T: TwoComponents, U: TwoComponents>(v: T, w: U) -> f64 {
    let dx = (v.horizontal() - w.horizontal()).abs();
    let dy = (v.vertical() - w.vertical()).abs();
    magnitude(T::from_components(dx, dy))
}

/// Shortens `v` to `max_length` if it is longer. Direction is kept.
pub fn limited<T: TwoComponents>(v: T, max_length: f64) -> T {
    if magnitude(v) > max_length {
        trace!("clamping {:?} to length {}", v.components(), max_length);
        multiply_scalar(normalized(v), max_length)
    } else {
        v
    }
}

/// Plain multiplication by `factor`, with no clamping.
pub fn scaled<T: TwoComponents>(v: T, factor: f64) -> T {
    multiply_scalar(v, factor)
}

/// Same length as `v`, pointing at `radians` measured counterclockwise from `+horizontal`.
pub fn angled<T: TwoComponents>(v: T, radians: f64) -> T {
    let len = magnitude(v);
    T::from_components(radians.cos() * len, radians.sin() * len)
}

/// Method syntax for everything in this module.
///
/// Implemented for every [`TwoComponents`] type, so `point.magnitude()` and
/// `size.dot_product(vector)` just work.
pub trait VectorArithmetic: TwoComponents {
    fn length_squared(&self) -> f64 {
        length_squared(*self)
    }
    fn magnitude(&self) -> f64 {
        magnitude(*self)
    }
    fn length(&self) -> f64 {
        length(*self)
    }
    fn angle_in_radians(&self) -> f64 {
        angle_in_radians(*self)
    }
    fn normalized(&self) -> Self {
        normalized(*self)
    }
    fn reversed(&self) -> Self {
        reversed(*self)
    }
    fn dot_product<U: TwoComponents>(&self, other: U) -> f64 {
        dot_product(*self, other)
    }
    fn cross_product<U: TwoComponents>(&self, other: U) -> f64 {
        cross_product(*self, other)
    }
    fn distance_to<U: TwoComponents>(&self, other: U) -> f64 {
        distance_to(*self, other)
    }
    fn limited(&self, max_length: f64) -> Self {
        limited(*self, max_length)
    }
    fn scaled(&self, factor: f64) -> Self {
        scaled(*self, factor)
    }
    fn angled(&self, radians: f64) -> Self {
        angled(*self, radians)
    }
    fn about_eq<U: TwoComponents>(&self, other: U, tolerance: f64) -> bool {
        magnitude(subtract(*self, other)) < tolerance
    }
    fn check_about_eq<U: TwoComponents>(&self, other: U) -> OkOrMessage {
        let tolerance = 0.001;
        if self.about_eq(other, tolerance) {
            Ok(())
        } else {
            Err(format!(
                "\nPoints too far apart:\n\tp1: {:?}\n\tp2: {:?}\n",
                self.components(),
                other.components()
            ))
        }
    }
}

impl<T: TwoComponents> VectorArithmetic for T {}
