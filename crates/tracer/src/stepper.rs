//! The region classifier and stepper: per ray, decide between analytic
//! flat-space propagation and numeric geodesic integration, and drive the
//! ray until it resolves to a terminal color.
//!
//! The two regions form a small state machine. `Outside` means no sphere of
//! influence has been entered and space is treated as flat; `Inside` means
//! the ray is being integrated under exactly one mass's field. The scene
//! invariant (no touching influence spheres) is what makes the single-mass
//! `Inside` state sound.

use crate::geodesic::schwarzschild_step;
use crate::geometry::{hit_distance, ray_sphere_intersection, Hit, Sphere};
use crate::scene::{Mass, Scene};
use crate::shading::surface_color;
use crate::types::{Color, Ray, TraceParams};

/// Where the ray currently is. Held in a loop-local variable, never on the
/// ray itself.
#[derive(Copy, Clone)]
enum RegionState<'a> {
    Outside,
    Inside(&'a Mass),
}

/// Resolve one ray against the scene to a terminal color.
///
/// This is the only entry point of the engine: a pure function of the ray
/// and read-only scene data, safe to evaluate for many rays concurrently.
#[must_use]
pub fn resolve_ray(ray: Ray, scene: &Scene, params: &TraceParams) -> Color {
    run_state_machine(ray, scene, params)
}

/// Nearest forward intersection over all masses for the sphere selected by
/// `sphere_of`. The scan keeps the first minimum it sees (strict `<`), so
/// on an exact distance tie the first-listed mass wins.
fn nearest_hit<'a>(
    ray: &Ray,
    scene: &'a Scene,
    sphere_of: impl Fn(&Mass) -> Sphere,
) -> Option<(&'a Mass, Hit)> {
    let mut nearest: Option<(&Mass, Hit)> = None;
    for mass in scene.masses() {
        if let Some(hit) = ray_sphere_intersection(ray, &sphere_of(mass)) {
            let closer = nearest
                .as_ref()
                .map_or(true, |(_, best)| hit.distance < best.distance);
            if closer {
                nearest = Some((mass, hit));
            }
        }
    }
    nearest
}

fn run_state_machine(mut ray: Ray, scene: &Scene, params: &TraceParams) -> Color {
    let soi_factor = scene.soi_factor();
    let mut state = RegionState::Outside;

    for _ in 0..params.max_steps {
        if !ray.position.is_finite() || !ray.direction.is_finite() {
            tracing::debug!(?ray.position, "ray state degenerated, falling back to background");
            return params.background;
        }

        match state {
            RegionState::Outside => {
                let surface = nearest_hit(&ray, scene, |mass| mass.shape);
                let influence =
                    nearest_hit(&ray, scene, |mass| mass.influence_sphere(soi_factor));

                match (surface, influence) {
                    // Nothing ahead: the ray escapes.
                    (None, None) => return params.background,
                    // A surface is reachable without entering any influence
                    // sphere (also the tie case): flat-space hit.
                    (Some((mass, hit)), None) => {
                        return surface_color(hit.point, ray.direction, mass);
                    }
                    (Some((mass, hit)), Some((_, soi_hit))) if hit.distance <= soi_hit.distance => {
                        return surface_color(hit.point, ray.direction, mass);
                    }
                    // An influence sphere comes first: move onto its
                    // boundary, then take one integrator step so the ray
                    // sits strictly inside and the boundary cannot be
                    // re-detected on the next pass.
                    (_, Some((mass, soi_hit))) => {
                        ray.position = soi_hit.point;
                        let step = schwarzschild_step(&ray, mass, params.dt);
                        ray.apply_step(step.dx, step.dp);
                        state = RegionState::Inside(mass);
                    }
                }
            }

            RegionState::Inside(mass) => {
                // The step is computed from, and the boundaries tested
                // against, the ray as it stands before this iteration moves
                // anything.
                let step = schwarzschild_step(&ray, mass, params.dt);
                let step_length = step.dx.length();
                let surface_distance = hit_distance(&ray, &mass.shape);
                let influence_distance =
                    hit_distance(&ray, &mass.influence_sphere(soi_factor));

                if surface_distance.is_infinite() && influence_distance.is_infinite() {
                    // The corrective boundary step carried the ray out of
                    // the influence sphere entirely. Not an error: discard
                    // the step and re-classify from scratch.
                    state = RegionState::Outside;
                } else if surface_distance <= influence_distance {
                    if step_length > surface_distance {
                        // The surface falls within this step: terminate at
                        // the exact crossing, not the overshot position.
                        let point = ray.point_at(surface_distance);
                        return surface_color(point, ray.direction, mass);
                    }
                    ray.apply_step(step.dx, step.dp);
                } else {
                    // Influence boundary ahead. The exit point is not
                    // special: the step is applied either way, only the
                    // state changes once the boundary falls within it.
                    ray.apply_step(step.dx, step.dp);
                    if step_length > influence_distance {
                        state = RegionState::Outside;
                    }
                }
            }
        }
    }

    tracing::debug!(
        ?ray.position,
        max_steps = params.max_steps,
        "step ceiling exhausted, falling back to background"
    );
    params.background
}
