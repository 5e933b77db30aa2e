//! Declarative starting layouts for a [`Scene`](crate::scene::Scene).

use nalgebra::{UnitQuaternion, Vector3};

use crate::body::Body;
use crate::shape::Shape;

/// Everything needed to spawn one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDesc {
    pub position: Vector3<f32>,
    pub orientation: UnitQuaternion<f32>,
    /// `0.0` for a static body.
    pub inv_mass: f32,
    pub shape: Shape,
}

impl BodyDesc {
    pub fn new(shape: Shape, inv_mass: f32, position: Vector3<f32>) -> Self {
        Self {
            position,
            orientation: UnitQuaternion::identity(),
            inv_mass,
            shape,
        }
    }

    /// Builder: set initial orientation.
    pub fn with_orientation(mut self, orientation: UnitQuaternion<f32>) -> Self {
        self.orientation = orientation;
        self
    }

    /// Whether `inv_mass` is finite and non-negative, as [`Body::new`] requires.
    pub fn has_valid_mass(&self) -> bool {
        self.inv_mass >= 0.0 && self.inv_mass.is_finite()
    }

    /// Spawn the described body at rest.
    ///
    /// # Panics
    /// Panics if [`has_valid_mass`](Self::has_valid_mass) is false.
    pub fn into_body(self) -> Body {
        Body::new(self.shape, self.inv_mass)
            .with_position(self.position)
            .with_orientation(self.orientation)
    }
}

/// A unit ball resting half a meter above a static planet of radius 100.
pub fn default_scenario() -> [BodyDesc; 2] {
    [
        BodyDesc::new(Shape::sphere(1.0), 1.0, Vector3::new(0.0, 0.0, 0.5)),
        BodyDesc::new(Shape::sphere(100.0), 0.0, Vector3::new(0.0, 0.0, -101.0)),
    ]
}
