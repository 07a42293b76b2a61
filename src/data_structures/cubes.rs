use wgpu::util::DeviceExt;

use crate::{
    config::{DemoConfig, Geometry},
    data_structures::{
        cuboid,
        instance::InstanceGrid,
        model::{ColorVertex, DrawMesh, Mesh, TexturedVertex},
        texture::Texture,
    },
    pipelines::basic::mk_cube_pipeline,
    resources::{self, shader::create_shader_program, texture},
};

/**
 * A grid of identical cuboids drawn with one instanced draw call.
 *
 * Owns everything the draw needs apart from the matrix uniform: the mesh, the
 * instance offsets and their buffer, the optional texture and the pipeline.
 * The pipeline is `None` when the shader program failed to compile or link;
 * such a scene draws nothing.
 */
#[derive(Debug)]
pub struct InstancedCubes {
    pub mesh: Mesh,
    pub grid: InstanceGrid,
    pub instance_buffer: wgpu::Buffer,
    pub texture: Option<(Texture, wgpu::BindGroup)>,
    pub pipeline: Option<wgpu::RenderPipeline>,
}

impl InstancedCubes {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_config: &wgpu::SurfaceConfiguration,
        demo: &DemoConfig,
        matrix_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> anyhow::Result<Self> {
        let (mesh, texture) = match &demo.geometry {
            Geometry::Colored => {
                let mesh = Mesh::new(
                    device,
                    "colored cuboid",
                    &cuboid::COLORED_CUBOID_VERTICES,
                    &cuboid::COLORED_CUBOID_INDICES,
                );
                (mesh, None)
            }
            Geometry::Textured {
                texture: path,
                flip,
            } => {
                let mesh = Mesh::new(
                    device,
                    "textured cuboid",
                    &cuboid::TEXTURED_CUBOID_VERTICES,
                    &cuboid::TEXTURED_CUBOID_INDICES,
                );
                let diffuse = texture::load_texture(path, *flip, device, queue)?;
                let layout = texture::diffuse_layout(device);
                let bind_group = texture::diffuse_bind_group(device, &layout, &diffuse)?;
                (mesh, Some((diffuse, bind_group, layout)))
            }
        };

        let grid = InstanceGrid::generate(demo.grid.range.clone(), demo.grid.spacing);
        let instance_data = grid.to_raw();
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Instance Buffer"),
            contents: bytemuck::cast_slice(&instance_data),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let vertex_source = resources::load_shader(&demo.vertex_shader);
        let fragment_source = resources::load_shader(&demo.fragment_shader);
        let program = create_shader_program(&vertex_source, &fragment_source);
        let pipeline = program.into_gpu(device).map(|program| match &texture {
            None => mk_cube_pipeline::<ColorVertex>(
                device,
                surface_config,
                &program,
                &[matrix_bind_group_layout],
            ),
            Some((_, _, texture_layout)) => mk_cube_pipeline::<TexturedVertex>(
                device,
                surface_config,
                &program,
                &[matrix_bind_group_layout, texture_layout],
            ),
        });

        Ok(Self {
            mesh,
            grid,
            instance_buffer,
            texture: texture.map(|(texture, bind_group, _)| (texture, bind_group)),
            pipeline,
        })
    }

    pub fn instance_count(&self) -> u32 {
        self.grid.len() as u32
    }

    /// Record the instanced draw. Does nothing without a pipeline.
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>, matrix_bind_group: &'a wgpu::BindGroup) {
        let Some(pipeline) = &self.pipeline else {
            return;
        };
        if self.grid.is_empty() {
            log::warn!("you attemted to render something with zero instances");
            return;
        }
        render_pass.set_pipeline(pipeline);
        render_pass.set_bind_group(0, matrix_bind_group, &[]);
        if let Some((_, bind_group)) = &self.texture {
            render_pass.set_bind_group(1, bind_group, &[]);
        }
        render_pass.draw_mesh_instanced(&self.mesh, &self.instance_buffer, 0..self.instance_count());
    }
}
