//! Narrow phase: per-shape-pair intersection tests producing [`Contact`]s.

use nalgebra::Vector3;

use crate::body::Body;
use crate::shape::Shape;

/// A detected contact between two bodies of a [`Scene`](crate::scene::Scene).
///
/// Only lives for the frame it was produced in.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    /// Index of the first body in the scene.
    pub body_a: usize,
    /// Index of the second body in the scene.
    pub body_b: usize,
    /// Point on A's surface along the contact normal.
    pub pt_on_a_world_space: Vector3<f32>,
    /// Point on B's surface along the contact normal.
    pub pt_on_b_world_space: Vector3<f32>,
    /// Unit normal pointing from body B toward body A.
    pub normal: Vector3<f32>,
}

/// Normal used when both centers coincide and `a - b` has no direction.
const FALLBACK_NORMAL: Vector3<f32> = Vector3::new(0.0, 0.0, 1.0);

/// Test two bodies for overlap.
///
/// `index_a` and `index_b` are recorded in the contact so the owner can look
/// the bodies up again for resolution. Returns `None` when the shapes are apart.
pub fn intersect(index_a: usize, body_a: &Body, index_b: usize, body_b: &Body) -> Option<Contact> {
    match (&body_a.shape, &body_b.shape) {
        (Shape::Sphere { radius: ra }, Shape::Sphere { radius: rb }) => {
            let (normal, pt_on_a, pt_on_b) =
                intersect_sphere_sphere(&body_a.position, *ra, &body_b.position, *rb)?;
            Some(Contact {
                body_a: index_a,
                body_b: index_b,
                pt_on_a_world_space: pt_on_a,
                pt_on_b_world_space: pt_on_b,
                normal,
            })
        }
    }
}

/// Sphere vs sphere.
///
/// Overlap holds iff `|a - b|² <= (ra + rb)²`; touching counts as contact.
/// Returns `(normal_b_to_a, point_on_a, point_on_b)`.
fn intersect_sphere_sphere(
    pos_a: &Vector3<f32>,
    radius_a: f32,
    pos_b: &Vector3<f32>,
    radius_b: f32,
) -> Option<(Vector3<f32>, Vector3<f32>, Vector3<f32>)> {
    let ab = pos_a - pos_b;
    let sum_r = radius_a + radius_b;

    if ab.norm_squared() > sum_r * sum_r {
        return None;
    }

    let normal = ab.try_normalize(1e-6).unwrap_or(FALLBACK_NORMAL);
    let pt_on_a = pos_a + normal * radius_a;
    let pt_on_b = pos_b - normal * radius_b;

    Some((normal, pt_on_a, pt_on_b))
}
