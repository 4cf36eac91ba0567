//! Core value types shared across the tracer.

/// World-space vector type. Positions, directions and normals are all
/// double precision.
pub type Vec3 = glam::DVec3;

/// 8-bit RGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale each component by `factor`, clamped to `[0, 1]`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        let k = if factor.is_nan() { 0.0 } else { factor.clamp(0.0, 1.0) };
        Self {
            r: (f64::from(self.r) * k) as u8,
            g: (f64::from(self.g) * k) as u8,
            b: (f64::from(self.b) * k) as u8,
        }
    }
}

/// A photon ray: a mutable position/direction pair.
///
/// The direction is normalized on construction and renormalized after every
/// additive update, so intersection tests may always assume unit length.
#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub position: Vec3,
    pub direction: Vec3,
}

impl Ray {
    #[must_use]
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            direction: direction.normalize(),
        }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Vec3 {
        self.position + self.direction * t
    }

    /// Apply an integration step: advance the position by `dx`, deflect the
    /// momentum by `dp` and renormalize the direction.
    pub fn apply_step(&mut self, dx: Vec3, dp: Vec3) {
        self.position += dx;
        self.direction = (self.direction + dp).normalize();
    }
}

/// Tracing configuration passed into the ray engine.
#[derive(Copy, Clone, Debug)]
pub struct TraceParams {
    /// Color emitted by rays that escape every mass.
    pub background: Color,
    /// Fixed integrator step size. Should stay small relative to the
    /// smallest mass radius in the scene.
    pub dt: f64,
    /// Safety ceiling on state-machine iterations per ray. Exhausting it
    /// resolves the ray to the background color.
    pub max_steps: u32,
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            background: Color::new(127, 0, 127),
            dt: 0.1,
            max_steps: 10_000,
        }
    }
}
