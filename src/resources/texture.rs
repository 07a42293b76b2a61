use std::path::Path;

use crate::{data_structures::texture, resources::ppm};

/// Bind group layout of the single diffuse texture: view at binding 0,
/// filtering sampler at binding 1. Fragment stage only.
pub fn diffuse_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
        label: Some("diffuse_texture_bind_group_layout"),
    })
}

pub fn diffuse_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    texture: &texture::Texture,
) -> anyhow::Result<wgpu::BindGroup> {
    use anyhow::Context;
    let sampler = texture
        .sampler
        .as_ref()
        .context("diffuse texture has no sampler")?;
    Ok(device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&texture.view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
        label: Some("diffuse_bind_group"),
    }))
}

/// Decode a PPM file and upload it. The decoded pixels are released as soon as
/// the upload is queued.
pub fn load_texture<P: AsRef<Path>>(
    path: P,
    flip: bool,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> anyhow::Result<texture::Texture> {
    let label = path.as_ref().display().to_string();
    let image = ppm::load_ppm(path, flip)?;
    texture::Texture::from_ppm(device, queue, image, &label)
}
