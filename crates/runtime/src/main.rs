#![deny(clippy::all, clippy::pedantic)]

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use render::{capture, Camera, Frame};
use tracer::{Color, Mass, Scene, TraceParams, Vec3, DEFAULT_SOI_FACTOR};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let start = Instant::now();

    // A central compact mass and a distant zero-mass comparison body. The
    // heavy body bends passing rays; the light one shows the same surface
    // rendered with pure flat-space propagation.
    let scene = Scene::with_masses(
        vec![
            Mass::checkered(Vec3::ZERO, 2.0, 0.5, Color::new(50, 225, 225), 12),
            Mass::checkered(Vec3::new(-12.0, 0.0, -30.0), 5.0, 0.0, Color::new(230, 200, 50), 12),
        ],
        DEFAULT_SOI_FACTOR,
    )
    .context("demo scene failed validation")?;

    let camera = Camera::new(
        Vec3::new(0.0, 0.0, 30.0),
        Vec3::ZERO,
        Vec3::Y,
        270,
        180,
        90.0,
    );
    let params = TraceParams::default();

    tracing::info!("tracing demo scene");
    let frame = capture(&camera, &scene, &params);

    let path = Frame::timestamped_path(Path::new("captures"));
    frame.save_png(&path)?;

    tracing::info!(elapsed_ms = start.elapsed().as_millis(), "done");
    Ok(())
}
