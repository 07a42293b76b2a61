//! Hard-coded cuboid geometry used by both demos.
//!
//! Both variants span -0.4..0.4 on every axis and are made of 12 triangles.

use crate::data_structures::model::{ColorVertex, TexturedVertex};

/// Number of indices of either cuboid (12 triangles).
pub const CUBOID_INDEX_COUNT: usize = 36;

pub const COLORED_CUBOID_VERTICES: [ColorVertex; 8] = [
    // front
    ColorVertex { position: [-0.4, -0.4, 0.4], color: [0.583, 0.771, 0.014] },
    ColorVertex { position: [0.4, -0.4, 0.4], color: [0.609, 0.115, 0.436] },
    ColorVertex { position: [0.4, 0.4, 0.4], color: [0.327, 0.483, 0.844] },
    ColorVertex { position: [-0.4, 0.4, 0.4], color: [0.822, 0.569, 0.201] },
    // back
    ColorVertex { position: [-0.4, -0.4, -0.4], color: [0.435, 0.602, 0.223] },
    ColorVertex { position: [0.4, -0.4, -0.4], color: [0.310, 0.747, 0.185] },
    ColorVertex { position: [0.4, 0.4, -0.4], color: [0.597, 0.770, 0.761] },
    ColorVertex { position: [-0.4, 0.4, -0.4], color: [0.559, 0.436, 0.730] },
];

#[rustfmt::skip]
pub const COLORED_CUBOID_INDICES: [u32; CUBOID_INDEX_COUNT] = [
    // front
    0, 1, 2,  2, 3, 0,
    // right
    1, 5, 6,  6, 2, 1,
    // back
    7, 6, 5,  5, 4, 7,
    // left
    4, 0, 3,  3, 7, 4,
    // bottom
    4, 5, 1,  1, 0, 4,
    // top
    3, 2, 6,  6, 7, 3,
];

/// UV-unwrapped cuboid. Corners are repeated where the unwrap needs a seam.
pub const TEXTURED_CUBOID_VERTICES: [TexturedVertex; 14] = [
    TexturedVertex { position: [0.4, 0.4, -0.4], tex_coords: [0.49837, 0.997711] },
    TexturedVertex { position: [-0.4, 0.4, 0.4], tex_coords: [0.364645, 0.74957] },
    TexturedVertex { position: [0.4, 0.4, 0.4], tex_coords: [0.499217, 0.749885] },
    TexturedVertex { position: [-0.4, -0.4, -0.4], tex_coords: [0.228806, 0.50372] },
    TexturedVertex { position: [-0.4, -0.4, 0.4], tex_coords: [0.364645, 0.500571] },
    TexturedVertex { position: [-0.4, 0.4, -0.4], tex_coords: [0.770971, 0.749295] },
    TexturedVertex { position: [0.4, -0.4, -0.4], tex_coords: [0.635676, 0.500925] },
    TexturedVertex { position: [-0.4, -0.4, -0.4], tex_coords: [0.771314, 0.50124] },
    TexturedVertex { position: [0.4, -0.4, 0.4], tex_coords: [0.498631, 0.50132] },
    TexturedVertex { position: [-0.4, -0.4, -0.4], tex_coords: [0.364645, 0.251714] },
    TexturedVertex { position: [0.4, -0.4, -0.4], tex_coords: [0.499337, 0.250604] },
    TexturedVertex { position: [0.4, 0.4, -0.4], tex_coords: [0.635676, 0.749925] },
    TexturedVertex { position: [-0.4, 0.4, -0.4], tex_coords: [0.365873, 0.998711] },
    TexturedVertex { position: [-0.4, 0.4, -0.4], tex_coords: [0.228977, 0.74831] },
];

#[rustfmt::skip]
pub const TEXTURED_CUBOID_INDICES: [u32; CUBOID_INDEX_COUNT] = [
    0, 1, 2,
    1, 3, 4,
    5, 6, 7,
    8, 9, 10,
    2, 4, 8,
    11, 8, 6,
    0, 12, 1,
    1, 13, 3,
    5, 11, 6,
    8, 4, 9,
    2, 1, 4,
    11, 2, 8,
];
