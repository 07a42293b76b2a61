//! Scene data: meshes, the cuboid geometry, the instance grid and textures.
//!
//! - `model` holds vertex layouts and the GPU mesh with its instanced draw
//! - `cuboid` contains the vertex and index tables of the two cuboid variants
//! - `instance` generates the grid of per-instance offsets
//! - `texture` wraps GPU textures (depth buffer and PPM images)
//! - `transform` is the model matrix shared by all instances
//! - `cubes` ties the above into the drawable scene

pub mod cubes;
pub mod cuboid;
pub mod instance;
pub mod model;
pub mod texture;
pub mod transform;
