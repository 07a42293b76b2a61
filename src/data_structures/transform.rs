//! Model transform shared by every instance of a mesh.

use cgmath::{Matrix4, SquareMatrix};

/// A single model matrix. The demos leave it at identity and move the
/// instances through their per-instance offsets instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    matrix: Matrix4<f32>,
}

impl Transform {
    pub fn new() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    pub fn matrix(&self) -> Matrix4<f32> {
        self.matrix
    }

    pub fn set_matrix(&mut self, matrix: Matrix4<f32>) {
        self.matrix = matrix;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Matrix4<f32>> for Transform {
    fn from(matrix: Matrix4<f32>) -> Self {
        Self { matrix }
    }
}
