//! Rigid body state and local/world frame conversions.

use nalgebra::{UnitQuaternion, Vector3};

use crate::shape::Shape;

/// Simulation state for one rigid object.
///
/// The body owns its [`Shape`] by value, so cloning a body clones the shape
/// and two bodies never share one.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// World-space origin of the body's local frame.
    pub position: Vector3<f32>,
    /// Local-to-world rotation.
    pub orientation: UnitQuaternion<f32>,
    /// World-space velocity of the center of mass.
    pub linear_velocity: Vector3<f32>,
    /// Inverse of the mass in kg. `0.0` marks a static (immovable) body.
    pub inv_mass: f32,
    /// Collision shape, owned by this body.
    pub shape: Shape,
}

impl Body {
    /// Create a body at the origin with identity orientation and no velocity.
    ///
    /// `inv_mass` of `0.0` makes the body static.
    ///
    /// # Panics
    /// Panics if `inv_mass` is negative or not finite.
    pub fn new(shape: Shape, inv_mass: f32) -> Self {
        assert!(
            inv_mass >= 0.0 && inv_mass.is_finite(),
            "inverse mass must be finite and non-negative"
        );
        Self {
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
            linear_velocity: Vector3::zeros(),
            inv_mass,
            shape,
        }
    }

    /// Create a static body (infinite mass, unaffected by impulses).
    pub fn new_static(shape: Shape) -> Self {
        Self::new(shape, 0.0)
    }

    /// Builder: set initial position.
    pub fn with_position(mut self, position: Vector3<f32>) -> Self {
        self.position = position;
        self
    }

    /// Builder: set initial orientation.
    pub fn with_orientation(mut self, orientation: UnitQuaternion<f32>) -> Self {
        self.orientation = orientation;
        self
    }

    /// Builder: set initial linear velocity.
    pub fn with_linear_velocity(mut self, velocity: Vector3<f32>) -> Self {
        self.linear_velocity = velocity;
        self
    }

    /// True when `inv_mass` is zero (infinite mass).
    #[inline]
    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// Mass in kg, or `None` for a static body whose mass is infinite.
    #[inline]
    pub fn mass(&self) -> Option<f32> {
        if self.is_static() {
            None
        } else {
            Some(1.0 / self.inv_mass)
        }
    }

    /// Kinetic energy `0.5 * m * v²`. Static bodies report zero.
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        match self.mass() {
            Some(mass) => 0.5 * mass * self.linear_velocity.norm_squared(),
            None => 0.0,
        }
    }

    /// Center of mass in world space: `position + orientation * com_local`.
    #[inline]
    pub fn center_of_mass_world_space(&self) -> Vector3<f32> {
        self.position + self.orientation * self.shape.center_of_mass()
    }

    /// Center of mass in the body's local (model) frame.
    #[inline]
    pub fn center_of_mass_model_space(&self) -> Vector3<f32> {
        self.shape.center_of_mass()
    }

    /// Convert a world-space point into the body frame anchored at the center of mass.
    pub fn world_space_to_body_space(&self, world_point: &Vector3<f32>) -> Vector3<f32> {
        let offset = world_point - self.center_of_mass_world_space();
        self.orientation.inverse() * offset
    }

    /// Inverse of [`world_space_to_body_space`](Self::world_space_to_body_space).
    pub fn body_space_to_world_space(&self, body_point: &Vector3<f32>) -> Vector3<f32> {
        self.center_of_mass_world_space() + self.orientation * body_point
    }

    /// Apply an instantaneous linear impulse: `delta_v = impulse / mass`.
    ///
    /// Static bodies are left untouched.
    #[inline]
    pub fn apply_impulse_linear(&mut self, impulse: Vector3<f32>) {
        if self.is_static() {
            return;
        }
        self.linear_velocity += impulse * self.inv_mass;
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn approx_vec_eq(a: &Vector3<f32>, b: &Vector3<f32>) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    #[test]
    fn test_body_creation() {
        let body = Body::new(Shape::sphere(1.0), 0.5);
        assert!(!body.is_static());
        assert_eq!(body.mass(), Some(2.0));
        assert!(approx_vec_eq(&body.position, &Vector3::zeros()));
        assert!(approx_vec_eq(&body.linear_velocity, &Vector3::zeros()));
        assert_eq!(body.orientation, UnitQuaternion::identity());
    }

    #[test]
    fn test_static_body_has_no_mass() {
        let body = Body::new_static(Shape::sphere(100.0));
        assert!(body.is_static());
        assert_eq!(body.mass(), None);
        assert_eq!(body.kinetic_energy(), 0.0);
    }

    #[test]
    #[should_panic]
    fn test_negative_inverse_mass_panics() {
        Body::new(Shape::sphere(1.0), -1.0);
    }

    #[test]
    fn test_apply_impulse() {
        let mut body = Body::new(Shape::sphere(1.0), 0.5);
        body.apply_impulse_linear(Vector3::new(10.0, 0.0, 0.0));

        // delta_v = 10 * 0.5
        assert!(approx_vec_eq(&body.linear_velocity, &Vector3::new(5.0, 0.0, 0.0)));
    }

    #[test]
    fn test_impulse_on_static_body_ignored() {
        let mut body = Body::new_static(Shape::sphere(1.0));
        for impulse in [
            Vector3::new(100.0, 0.0, 0.0),
            Vector3::new(0.0, -1.0e6, 3.0),
            Vector3::new(f32::MAX, 0.0, 0.0),
        ] {
            body.apply_impulse_linear(impulse);
        }
        assert_eq!(body.linear_velocity, Vector3::zeros());
    }

    #[test]
    fn test_kinetic_energy() {
        let body = Body::new(Shape::sphere(1.0), 0.5)
            .with_linear_velocity(Vector3::new(3.0, 0.0, 0.0));
        // KE = 0.5 * 2 * 9
        assert!(approx_eq(body.kinetic_energy(), 9.0));
    }

    #[test]
    fn test_center_of_mass_of_sphere_is_position() {
        let body = Body::new(Shape::sphere(1.0), 1.0)
            .with_position(Vector3::new(1.0, 2.0, 3.0))
            .with_orientation(UnitQuaternion::from_euler_angles(0.3, 0.2, 0.1));
        assert!(approx_vec_eq(
            &body.center_of_mass_world_space(),
            &Vector3::new(1.0, 2.0, 3.0)
        ));
        assert_eq!(body.center_of_mass_model_space(), Vector3::zeros());
    }

    #[test]
    fn test_world_to_body_space_applies_inverse_rotation() {
        // Quarter turn about +Z maps local +X onto world +Y.
        let body = Body::new(Shape::sphere(1.0), 1.0)
            .with_position(Vector3::new(5.0, 0.0, 0.0))
            .with_orientation(UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2));

        let local = body.world_space_to_body_space(&Vector3::new(5.0, 1.0, 0.0));
        assert!(approx_vec_eq(&local, &Vector3::new(1.0, 0.0, 0.0)));

        let world = body.body_space_to_world_space(&Vector3::new(1.0, 0.0, 0.0));
        assert!(approx_vec_eq(&world, &Vector3::new(5.0, 1.0, 0.0)));
    }

    #[test]
    fn test_body_space_round_trip() {
        let orientations = [
            UnitQuaternion::identity(),
            UnitQuaternion::from_axis_angle(&Vector3::x_axis(), PI / 3.0),
            UnitQuaternion::from_euler_angles(1.2, -0.4, 2.9),
        ];
        let points = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, -2.0, 3.5),
            Vector3::new(-40.0, 12.0, 0.25),
        ];

        for orientation in orientations {
            let body = Body::new(Shape::sphere(1.0), 1.0)
                .with_position(Vector3::new(3.0, -1.0, 7.0))
                .with_orientation(orientation);
            for p in &points {
                let back = body.body_space_to_world_space(&body.world_space_to_body_space(p));
                assert!(approx_vec_eq(&back, p), "round trip failed for {:?}", p);
            }
        }
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Body::new(Shape::sphere(1.0), 1.0);
        let mut copy = original.clone();
        copy.shape = Shape::sphere(3.0);
        assert_eq!(original.shape, Shape::sphere(1.0));
    }
}
