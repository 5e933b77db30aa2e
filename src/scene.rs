//! The scene owns every body and advances them one fixed step at a time.
//!
//! Each [`Scene::update`] runs, in order:
//! 1. gravity as a linear impulse on every dynamic body,
//! 2. all-pairs collision detection, resolving each contact as soon as it is found,
//! 3. position integration from the updated velocities (semi-implicit Euler).
//!
//! # Example
//! ```
//! use rigid_scene::scene::DefaultScene;
//!
//! let mut scene = DefaultScene::new();
//! scene.initialize();
//!
//! for _ in 0..60 {
//!     scene.update(1.0 / 60.0);
//! }
//! assert_eq!(scene.body_count(), 2);
//! ```

use log::{debug, error, trace};
use nalgebra::Vector3;

use crate::body::Body;
use crate::broadphase::candidate_pairs;
use crate::config::{clamp_restitution, ContactResponse, SceneConfig, DEFAULT_BODY_CAPACITY};
use crate::contact::{intersect, Contact};
use crate::error::SceneError;
use crate::scenario::{default_scenario, BodyDesc};

/// A fixed-capacity set of bodies plus the scenario used to (re)populate it.
///
/// # Type Parameters
/// * `N` - Maximum number of bodies (compile-time capacity).
///
/// A body's index is its insertion position; there are no separate IDs.
#[derive(Debug, Clone)]
pub struct Scene<const N: usize> {
    bodies: heapless::Vec<Body, N>,
    scenario: heapless::Vec<BodyDesc, N>,
    config: SceneConfig,
}

/// Scene with room for [`DEFAULT_BODY_CAPACITY`] bodies.
pub type DefaultScene = Scene<DEFAULT_BODY_CAPACITY>;

impl<const N: usize> Default for Scene<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Scene<N> {
    /// Create an empty scene using the default scenario and configuration.
    ///
    /// Call [`initialize`](Self::initialize) to spawn the scenario's bodies.
    pub fn new() -> Self {
        let mut scenario = heapless::Vec::new();
        for desc in default_scenario() {
            if scenario.push(desc).is_err() {
                error!("default scenario does not fit scene capacity {}; truncating", N);
                break;
            }
        }
        Self {
            bodies: heapless::Vec::new(),
            scenario,
            config: SceneConfig::default(),
        }
    }

    /// Create an empty scene that spawns `scenario` on initialize and reset.
    ///
    /// Fails if the scenario has more bodies than the scene can hold, or if a
    /// descriptor's inverse mass is negative or not finite.
    pub fn with_scenario(config: SceneConfig, scenario: &[BodyDesc]) -> Result<Self, SceneError> {
        if let Some(index) = scenario.iter().position(|desc| !desc.has_valid_mass()) {
            return Err(SceneError::InvalidInverseMass { index });
        }
        let scenario = heapless::Vec::from_slice(scenario)
            .map_err(|_| SceneError::CapacityExceeded { capacity: N })?;
        Ok(Self {
            bodies: heapless::Vec::new(),
            scenario,
            config,
        })
    }

    /// Current gravity and contact response settings.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next update.
    pub fn set_config(&mut self, config: SceneConfig) {
        self.config = config;
    }

    /// The descriptors spawned by [`initialize`](Self::initialize).
    pub fn scenario(&self) -> &[BodyDesc] {
        &self.scenario
    }

    /// Append one body per scenario descriptor.
    ///
    /// Calling this twice without [`reset`](Self::reset) spawns the scenario
    /// twice. Descriptors that no longer fit are dropped and logged.
    pub fn initialize(&mut self) {
        for (spawned, desc) in self.scenario.iter().enumerate() {
            if self.bodies.push(desc.into_body()).is_err() {
                error!(
                    "scene capacity {} exceeded while initializing; {} scenario bodies dropped",
                    N,
                    self.scenario.len() - spawned
                );
                break;
            }
        }
        debug!("scene initialized with {} bodies", self.bodies.len());
    }

    /// Drop every body and spawn the scenario again.
    pub fn reset(&mut self) {
        self.bodies.clear();
        debug!("scene reset");
        self.initialize();
    }

    /// Add a body after the scenario ones. Returns its index.
    pub fn add_body(&mut self, body: Body) -> Result<usize, SceneError> {
        let index = self.bodies.len();
        self.bodies
            .push(body)
            .map_err(|_| SceneError::CapacityExceeded { capacity: N })?;
        Ok(index)
    }

    /// Body at `index` (insertion order), if any.
    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Mutable access to the body at `index`, if any.
    pub fn body_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    /// All bodies in insertion order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Number of bodies currently in the scene.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Contacts present in the current state, without resolving them.
    pub fn contacts(&self) -> impl Iterator<Item = Contact> + '_ {
        candidate_pairs(self.bodies.len(), move |i| self.bodies[i].is_static())
            .filter_map(move |pair| intersect(pair.a, &self.bodies[pair.a], pair.b, &self.bodies[pair.b]))
    }

    /// Advance the simulation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.apply_gravity(dt);

        // Resolution never changes inverse mass, so a snapshot of the static
        // flags lets the pair iterator run while bodies are mutated.
        let statics: heapless::Vec<bool, N> = self.bodies.iter().map(Body::is_static).collect();
        for pair in candidate_pairs(statics.len(), move |i| statics[i]) {
            let body_a = &self.bodies[pair.a];
            let body_b = &self.bodies[pair.b];
            if let Some(contact) = intersect(pair.a, body_a, pair.b, body_b) {
                self.resolve_contact(&contact);
            }
        }

        for body in self.bodies.iter_mut() {
            body.position += body.linear_velocity * dt;
        }
    }

    /// Advance by `dt` split into `substeps` equal updates.
    pub fn step_fixed(&mut self, dt: f32, substeps: u32) {
        if substeps == 0 {
            return;
        }
        let sub_dt = dt / substeps as f32;
        for _ in 0..substeps {
            self.update(sub_dt);
        }
    }

    /// Apply the configured contact response to the two bodies of `contact`.
    ///
    /// Contacts referring to missing or identical bodies are ignored.
    pub fn resolve_contact(&mut self, contact: &Contact) {
        let response = self.config.contact_response;
        let Some((body_a, body_b)) = pair_mut(&mut self.bodies, contact.body_a, contact.body_b) else {
            return;
        };

        match response {
            ContactResponse::Stop => {
                body_a.linear_velocity = Vector3::zeros();
                body_b.linear_velocity = Vector3::zeros();
            }
            ContactResponse::Impulse { restitution } => {
                let inv_mass_sum = body_a.inv_mass + body_b.inv_mass;
                if inv_mass_sum == 0.0 {
                    return;
                }

                // The normal points B -> A, so a negative value means closing.
                let vel_along_normal =
                    (body_a.linear_velocity - body_b.linear_velocity).dot(&contact.normal);
                if vel_along_normal >= 0.0 {
                    return;
                }

                let restitution = clamp_restitution(restitution);
                let j = -(1.0 + restitution) * vel_along_normal / inv_mass_sum;
                let impulse = contact.normal * j;
                body_a.apply_impulse_linear(impulse);
                body_b.apply_impulse_linear(-impulse);
            }
        }

        trace!(
            "resolved contact {} <-> {} ({:?})",
            contact.body_a,
            contact.body_b,
            response
        );
    }

    fn apply_gravity(&mut self, dt: f32) {
        let gravity = self.config.gravity;
        for body in self.bodies.iter_mut() {
            // Static bodies have no finite mass to scale by.
            let Some(mass) = body.mass() else {
                continue;
            };
            body.apply_impulse_linear(gravity * mass * dt);
        }
    }
}

/// Borrow two distinct bodies mutably at once.
fn pair_mut(bodies: &mut [Body], a: usize, b: usize) -> Option<(&mut Body, &mut Body)> {
    if a == b || a.max(b) >= bodies.len() {
        return None;
    }
    if a < b {
        let (lo, hi) = bodies.split_at_mut(b);
        Some((&mut lo[a], &mut hi[0]))
    } else {
        let (lo, hi) = bodies.split_at_mut(a);
        Some((&mut hi[0], &mut lo[b]))
    }
}
