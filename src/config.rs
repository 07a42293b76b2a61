//! Demo configuration.
//!
//! Everything a demo needs to know up front lives in [`DemoConfig`]. There are
//! no configuration files, command-line flags or environment variables; the two
//! presets [`DemoConfig::instanced`] and [`DemoConfig::textured`] describe the
//! two demos and a caller can adjust the public fields before calling
//! [`crate::flow::run`].

use std::{ops::Range, path::PathBuf};

/// Which cuboid is drawn and where its surface color comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// 8 vertices with a color each.
    Colored,
    /// 14 vertices with UVs into a PPM texture.
    Textured { texture: PathBuf, flip: bool },
}

/// Bounds and spacing of the instance grid (same range on every axis).
#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    pub range: Range<i32>,
    pub spacing: f32,
}

impl GridSpec {
    pub fn instance_count(&self) -> usize {
        self.range.len().pow(3)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_colour: wgpu::Color,
    /// Distance moved per key press.
    pub camera_speed: f32,
    pub fovy: cgmath::Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub vertex_shader: PathBuf,
    pub fragment_shader: PathBuf,
    pub grid: GridSpec,
    pub geometry: Geometry,
}

impl DemoConfig {
    /// Colored cuboids on a 40x40x40 grid.
    pub fn instanced() -> Self {
        Self {
            title: String::from("Instanced Cubes"),
            grid: GridSpec {
                range: -20..20,
                spacing: 5.0,
            },
            geometry: Geometry::Colored,
            ..Self::default()
        }
    }

    /// Textured cuboids on a 30x30x30 grid, texture flipped to match the UVs.
    pub fn textured() -> Self {
        Self {
            title: String::from("Textured Cubes"),
            grid: GridSpec {
                range: -15..15,
                spacing: 5.0,
            },
            geometry: Geometry::Textured {
                texture: PathBuf::from("./clouds.ppm"),
                flip: true,
            },
            ..Self::default()
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: String::from("Cubes"),
            width: 1024,
            height: 750,
            clear_colour: wgpu::Color::BLACK,
            camera_speed: 0.5,
            fovy: cgmath::Deg(45.0),
            znear: 0.1,
            zfar: 1024.0,
            vertex_shader: PathBuf::from("./shaders/vert.glsl"),
            fragment_shader: PathBuf::from("./shaders/frag.glsl"),
            grid: GridSpec {
                range: -20..20,
                spacing: 5.0,
            },
            geometry: Geometry::Colored,
        }
    }
}
