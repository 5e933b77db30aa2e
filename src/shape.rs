//! Collision shapes owned by a [`Body`](crate::body::Body).
//!
//! Shapes are a closed set dispatched by `match`. Narrow-phase tests are
//! specialized per shape pair, so adding a kind means adding its pair tests in
//! [`contact`](crate::contact).

use nalgebra::Vector3;

/// Geometric description of a body, in the body's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A sphere centered on the local origin.
    Sphere { radius: f32 },
}

impl Shape {
    /// Shorthand for [`Shape::Sphere`].
    #[inline]
    pub const fn sphere(radius: f32) -> Self {
        Shape::Sphere { radius }
    }

    /// Center of mass in local (model) space.
    #[inline]
    pub fn center_of_mass(&self) -> Vector3<f32> {
        match self {
            Shape::Sphere { .. } => Vector3::zeros(),
        }
    }

    /// Radius of the smallest local-origin sphere enclosing the shape.
    #[inline]
    pub fn radius(&self) -> f32 {
        match self {
            Shape::Sphere { radius } => *radius,
        }
    }
}
