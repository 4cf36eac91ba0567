//! Pinhole camera: turns pixel coordinates into world-space photon rays.

use tracer::{Ray, Vec3};

/// A look-at pinhole camera.
pub struct Camera {
    /// Camera position in world space
    pub eye: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Approximate up vector used to build the view basis
    pub up: Vec3,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Vertical field of view in degrees
    pub fov_y_degrees: f64,
}

impl Camera {
    #[must_use]
    pub const fn new(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        width: u32,
        height: u32,
        fov_y_degrees: f64,
    ) -> Self {
        Self {
            eye,
            target,
            up,
            width,
            height,
            fov_y_degrees,
        }
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// One unit-direction ray per pixel, row-major from the top-left,
    /// sampled through each pixel center.
    #[must_use]
    pub fn rays(&self) -> Vec<Ray> {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let view_up = right.cross(forward);

        let tan_half_fov = (self.fov_y_degrees.to_radians() * 0.5).tan();
        let aspect = self.aspect_ratio();

        let mut rays = Vec::with_capacity(self.width as usize * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                // Pixel center to NDC, then onto the screen plane at unit
                // depth with +y up.
                let ndc_x = (f64::from(x) + 0.5) / f64::from(self.width);
                let ndc_y = (f64::from(y) + 0.5) / f64::from(self.height);
                let screen_x = (2.0 * ndc_x - 1.0) * tan_half_fov * aspect;
                let screen_y = (1.0 - 2.0 * ndc_y) * tan_half_fov;

                let direction = forward + right * screen_x + view_up * screen_y;
                rays.push(Ray::new(self.eye, direction));
            }
        }
        rays
    }
}
