//! Parallel capture: fan the camera's rays out over a worker pool and
//! collect one color per pixel.
//!
//! Ray resolution is embarrassingly parallel: the engine reads only the
//! shared scene and each ray's own state, and every pixel owns its output
//! slot, so the capture is a single parallel map with no locking.

use std::time::Instant;

use rayon::prelude::*;

use tracer::{resolve_ray, Scene, TraceParams};

use crate::camera::Camera;
use crate::frame::Frame;

/// Capture the scene through the camera into a frame.
#[must_use]
pub fn capture(camera: &Camera, scene: &Scene, params: &TraceParams) -> Frame {
    let rays = camera.rays();
    tracing::info!(
        rays = rays.len(),
        masses = scene.masses().len(),
        "starting capture"
    );

    let start = Instant::now();
    let pixels = rays
        .par_iter()
        .map(|ray| resolve_ray(*ray, scene, params))
        .collect();
    tracing::info!(elapsed_ms = start.elapsed().as_millis(), "capture complete");

    Frame::new(camera.width, camera.height, pixels)
}
