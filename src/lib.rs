//! Minimal rigid-body scene for real-time loops.
//!
//! A [`Scene`] owns a fixed-capacity set of [`Body`]s and advances them with
//! [`Scene::update`]: gravity, naive all-pairs sphere collision with immediate
//! contact resolution, then semi-implicit Euler integration of position.
//!
//! Designed for `no_std` environments using fixed-capacity `heapless`
//! collections and `nalgebra` for vectors and quaternions.
//!
//! # Example
//! ```
//! use rigid_scene::{Body, BodyDesc, Scene, SceneConfig, Shape};
//! use nalgebra::Vector3;
//!
//! let scenario = [
//!     BodyDesc::new(Shape::sphere(0.5), 1.0, Vector3::new(0.0, 0.0, 5.0)),
//!     BodyDesc::new(Shape::sphere(10.0), 0.0, Vector3::new(0.0, 0.0, -10.0)),
//! ];
//! let mut scene = Scene::<8>::with_scenario(SceneConfig::default(), &scenario).unwrap();
//! scene.initialize();
//! scene.add_body(Body::new(Shape::sphere(0.5), 2.0).with_position(Vector3::new(3.0, 0.0, 5.0)))
//!     .unwrap();
//!
//! scene.update(1.0 / 60.0);
//! assert!(scene.bodies()[0].linear_velocity.z < 0.0);
//! ```
#![no_std]

pub mod body;
pub mod broadphase;
pub mod config;
pub mod contact;
pub mod error;
pub mod scenario;
pub mod scene;
pub mod shape;

pub use body::Body;
pub use config::{ContactResponse, SceneConfig};
pub use contact::Contact;
pub use error::SceneError;
pub use scenario::BodyDesc;
pub use scene::{DefaultScene, Scene};
pub use shape::Shape;
