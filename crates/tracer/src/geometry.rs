//! Analytic ray-sphere intersection.
//!
//! This is the only geometric primitive the tracer needs: both the visible
//! surface of a mass and its sphere of influence are spheres, and flat-space
//! propagation reduces to this closed-form test.

use crate::types::{Ray, Vec3};

/// Comparisons against sphere boundaries use this tolerance instead of exact
/// zero, so a ray sitting on a boundary it just crossed does not re-detect
/// it, and a tangent ray still counts as a hit.
pub const BOUNDARY_EPSILON: f64 = 1e-9;

/// A sphere as pure geometry: center and radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub position: Vec3,
    pub radius: f64,
}

impl Sphere {
    #[must_use]
    pub const fn new(position: Vec3, radius: f64) -> Self {
        Self { position, radius }
    }
}

/// A forward intersection: parameter distance along the ray and the point.
#[derive(Copy, Clone, Debug)]
pub struct Hit {
    pub distance: f64,
    pub point: Vec3,
}

/// Closed-form ray-sphere intersection.
///
/// Assumes `ray.direction` is unit length. When the ray origin is outside
/// the sphere the near root is returned; when it is inside, the exit root
/// `thc + tca` (entry already happened, the far boundary crossing is the
/// one ahead of the ray). The returned distance is always positive; a
/// sphere entirely behind the origin is a miss. NaN anywhere in the inputs
/// falls through every comparison and reports a miss.
#[must_use]
pub fn ray_sphere_intersection(ray: &Ray, sphere: &Sphere) -> Option<Hit> {
    let l = sphere.position - ray.position;
    let tca = l.dot(ray.direction);
    let d_squared = l.dot(l) - tca * tca;
    let r_squared = sphere.radius * sphere.radius;

    if d_squared - r_squared > BOUNDARY_EPSILON {
        return None;
    }

    let thc = (r_squared - d_squared).max(0.0).sqrt();
    let t0 = tca - thc;
    if t0 > BOUNDARY_EPSILON {
        return Some(Hit {
            distance: t0,
            point: ray.point_at(t0),
        });
    }

    // Origin inside (or on) the sphere: the entry root is behind the ray,
    // take the exit root if it lies ahead.
    let t1 = tca + thc;
    if t1 > BOUNDARY_EPSILON {
        return Some(Hit {
            distance: t1,
            point: ray.point_at(t1),
        });
    }

    None
}

/// Intersection distance flattened for minimum scans: the positive hit
/// distance, or `+INFINITY` on a miss.
#[must_use]
pub fn hit_distance(ray: &Ray, sphere: &Sphere) -> f64 {
    ray_sphere_intersection(ray, sphere).map_or(f64::INFINITY, |hit| hit.distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_on_hit_from_outside() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        let hit = ray_sphere_intersection(&ray, &sphere).unwrap();
        assert!((hit.distance - 8.0).abs() < 1e-12);
        assert!((hit.point - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-12);
    }

    #[test]
    fn offset_ray_misses() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        assert!(ray_sphere_intersection(&ray, &sphere).is_none());
        assert!(hit_distance(&ray, &sphere).is_infinite());
    }

    #[test]
    fn tangent_ray_counts_as_hit() {
        let ray = Ray::new(Vec3::new(0.0, 2.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        let hit = ray_sphere_intersection(&ray, &sphere).unwrap();
        assert!((hit.distance - 10.0).abs() < 1e-6);
    }

    #[test]
    fn origin_inside_returns_exit_root() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        let hit = ray_sphere_intersection(&ray, &sphere).unwrap();
        assert!((hit.distance - 2.0).abs() < 1e-12);
        assert!((hit.point - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn sphere_behind_origin_is_a_miss() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 10.0), 2.0);
        assert!(ray_sphere_intersection(&ray, &sphere).is_none());
    }

    #[test]
    fn hit_is_invariant_under_direction_renormalization() {
        let sphere = Sphere::new(Vec3::new(1.0, 2.0, -10.0), 3.0);
        let origin = Vec3::new(0.5, -0.5, 4.0);
        let direction = Vec3::new(0.05, 0.25, -1.4);

        let unit = Ray::new(origin, direction.normalize());
        let scaled = Ray::new(origin, direction * 7.3);

        let a = ray_sphere_intersection(&unit, &sphere).unwrap();
        let b = ray_sphere_intersection(&scaled, &sphere).unwrap();
        assert!((a.distance - b.distance).abs() < 1e-12);
        assert!((a.point - b.point).length() < 1e-12);
    }

    #[test]
    fn nan_inputs_report_a_miss() {
        let ray = Ray {
            position: Vec3::new(f64::NAN, 0.0, 0.0),
            direction: Vec3::new(0.0, 0.0, -1.0),
        };
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        assert!(ray_sphere_intersection(&ray, &sphere).is_none());
    }
}
