//! Scene configuration: gravity and the contact response policy.

use nalgebra::Vector3;

/// Gravity used unless overridden. The scene is Z-up.
pub const DEFAULT_GRAVITY: Vector3<f32> = Vector3::new(0.0, 0.0, -9.81);

/// Body capacity of [`DefaultScene`](crate::scene::DefaultScene).
pub const DEFAULT_BODY_CAPACITY: usize = 32;

/// How a detected contact changes the velocities of the two bodies.
///
/// Every variant leaves the closing speed along the contact normal lower than
/// or equal to what it was.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ContactResponse {
    /// Fully inelastic stop: both bodies lose all linear velocity.
    #[default]
    Stop,
    /// Normal impulse from the relative velocity along the contact normal.
    ///
    /// `restitution` is the bounce factor, clamped to `0.0..=1.0`.
    Impulse { restitution: f32 },
}

impl ContactResponse {
    /// Impulse response with the restitution clamped into range.
    pub fn impulse(restitution: f32) -> Self {
        ContactResponse::Impulse {
            restitution: clamp_restitution(restitution),
        }
    }
}

/// Clamp a bounce factor into `0.0..=1.0`; NaN becomes `0.0` (no bounce).
#[inline]
pub fn clamp_restitution(restitution: f32) -> f32 {
    if restitution.is_nan() {
        0.0
    } else {
        restitution.clamp(0.0, 1.0)
    }
}

/// Tunables for a [`Scene`](crate::scene::Scene).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Gravitational acceleration in m/s².
    pub gravity: Vector3<f32>,
    /// Velocity change applied to both bodies of a contact.
    pub contact_response: ContactResponse,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            contact_response: ContactResponse::Stop,
        }
    }
}

impl SceneConfig {
    /// Same as [`SceneConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set gravity (e.g., `Vector3::new(0.0, 0.0, -9.81)`).
    pub fn with_gravity(mut self, gravity: Vector3<f32>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Builder: set the contact response policy.
    pub fn with_contact_response(mut self, response: ContactResponse) -> Self {
        self.contact_response = match response {
            ContactResponse::Impulse { restitution } => ContactResponse::impulse(restitution),
            other => other,
        };
        self
    }
}
