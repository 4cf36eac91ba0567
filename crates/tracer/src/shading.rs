//! Surface shading: a spherical-coordinate checkerboard with a simple
//! normal-based lighting term.

use std::f64::consts::TAU;

use crate::scene::Mass;
use crate::types::{Color, Vec3};

/// Full-turn counterclockwise arctangent: the angle of `(x, z)` from the
/// +x axis, in `[0, 2pi)`.
fn full_turn_atan2(z: f64, x: f64) -> f64 {
    let angle = z.atan2(x);
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// Color of the surface of `mass` at `point`, as seen by a ray arriving
/// along `view_direction` (unit length).
///
/// The surface is tiled by the parity of the spherical angles: theta from
/// the clamped arccosine of the y component, phi from the full-turn
/// arctangent of the horizontal components. At the exact poles both
/// horizontal components vanish and phi is undefined; it is forced to zero
/// there so the poles take a definite tile. The chosen tile color is scaled
/// by `|normal . view|`.
#[must_use]
pub fn surface_color(point: Vec3, view_direction: Vec3, mass: &Mass) -> Color {
    let local = point - mass.shape.position;

    let theta = (local.y / mass.shape.radius).clamp(-1.0, 1.0).acos();
    let phi = if local.x == 0.0 && local.z == 0.0 {
        0.0
    } else {
        full_turn_atan2(local.z, local.x)
    };

    let texture_angle = TAU / f64::from(mass.checkered_subdivision);
    let theta_even = ((theta / texture_angle).floor() as i64) % 2 == 0;
    let phi_even = ((phi / texture_angle).floor() as i64) % 2 == 0;

    let tile = if theta_even ^ phi_even {
        mass.color_primary
    } else {
        mass.color_secondary
    };

    let normal = local.normalize_or_zero();
    let lighting = normal.dot(view_direction).abs().clamp(0.0, 1.0);
    tile.scaled(lighting)
}
