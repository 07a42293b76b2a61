//! instanced-cubes
//!
//! Two small demos that draw a large grid of identical cuboids with a single
//! instanced draw call and let the user fly through it with a first-person
//! camera. One demo colors the cuboids per vertex, the other textures them
//! with an image read from a PPM file.
//!
//! High-level modules
//! - `camera`: free-look camera, projection and the matrix uniform
//! - `config`: the two demo presets and their tunables
//! - `context`: window, surface, device and everything drawn each frame
//! - `data_structures`: meshes, cuboid geometry, instance grid, textures
//! - `flow`: the event loop (input, draw, present, quit)
//! - `input`: key and mouse mapping onto camera moves
//! - `pipelines`: the render pipeline for the cuboids
//! - `resources`: file loading, PPM decoding and GLSL shader programs
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod input;
pub mod pipelines;
pub mod resources;

pub use config::DemoConfig;
pub use flow::run;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath;
pub use wgpu;
pub use winit::event::WindowEvent;
pub use winit::keyboard::KeyCode;
