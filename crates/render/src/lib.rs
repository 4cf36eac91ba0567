#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! Offline rendering around the ray-marching engine: camera ray
//! generation, parallel capture and PNG output.

pub mod camera;
pub mod frame;
pub mod renderer;

pub use camera::Camera;
pub use frame::Frame;
pub use renderer::capture;
