//! Per-instance data for GPU instancing.
//!
//! Every drawn copy of the cuboid is shifted by one offset of an
//! [`InstanceGrid`]. The offsets are packed into a vertex buffer whose step
//! mode is `Instance`, so the shader reads the next offset once per drawn
//! instance instead of once per vertex.

use std::ops::Range;

use cgmath::Vector3;

use crate::data_structures::model;

/// A regular 3D lattice of instance offsets.
///
/// Offsets are produced by iterating x (outermost), then y, then z over the same
/// integer range and scaling each coordinate by `spacing`. The grid never
/// changes after generation.
#[derive(Clone, Debug)]
pub struct InstanceGrid {
    offsets: Vec<Vector3<f32>>,
    spacing: f32,
}

impl InstanceGrid {
    /// Create the grid for `range` on every axis, so `range.len()³` offsets.
    /// An empty range yields an empty grid.
    pub fn generate(range: Range<i32>, spacing: f32) -> Self {
        let mut offsets = Vec::with_capacity(range.len().pow(3));
        for x in range.clone() {
            for y in range.clone() {
                for z in range.clone() {
                    offsets.push(Vector3::new(
                        x as f32 * spacing,
                        y as f32 * spacing,
                        z as f32 * spacing,
                    ));
                }
            }
        }
        log::info!("Number of instances: {}", offsets.len());
        Self { offsets, spacing }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn offsets(&self) -> &[Vector3<f32>] {
        &self.offsets
    }

    pub fn to_raw(&self) -> Vec<InstanceRaw> {
        self.offsets.iter().copied().map(InstanceRaw::from).collect()
    }
}

/**
 * The raw instance is the actual data stored on the GPU
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    offset: [f32; 3],
}

impl InstanceRaw {
    pub fn offset(&self) -> [f32; 3] {
        self.offset
    }
}

impl From<Vector3<f32>> for InstanceRaw {
    fn from(offset: Vector3<f32>) -> Self {
        Self {
            offset: offset.into(),
        }
    }
}

/**
 * One vec3 per instance at shader location 2. Locations 0 and 1 belong to the
 * per-vertex buffer in slot 0.
 */
impl model::Vertex for InstanceRaw {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            // Advance once per drawn instance rather than once per vertex
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 2,
                format: wgpu::VertexFormat::Float32x3,
            }],
        }
    }
}
