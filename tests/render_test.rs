#[cfg(feature = "integration-tests")]
mod common;

#[cfg(feature = "integration-tests")]
mod gpu {
    use std::{iter, path::PathBuf};

    use instanced_cubes::{
        camera::{Camera, MatrixResources, MatrixUniform, Projection},
        config::{DemoConfig, Geometry},
        data_structures::{cubes::InstancedCubes, texture::Texture, transform::Transform},
    };

    use crate::common::test_utils::{headless_device, offscreen_config, read_texture, render_target};

    const SIZE: u32 = 128;

    fn demo_path(path: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(path)
    }

    fn demo(name: &str, geometry: Geometry) -> DemoConfig {
        DemoConfig {
            vertex_shader: demo_path(&format!("{name}/shaders/vert.glsl")),
            fragment_shader: demo_path(&format!("{name}/shaders/frag.glsl")),
            geometry,
            ..DemoConfig::instanced()
        }
    }

    /// Render one frame of `demo` and return the pixels, or `None` without a GPU.
    fn render_frame(demo: &DemoConfig) -> Option<(InstancedCubes, image::RgbaImage)> {
        let (device, queue) = headless_device()?;
        let config = offscreen_config(SIZE, SIZE);
        let target = render_target(&device, &config);
        let view = target.create_view(&wgpu::TextureViewDescriptor::default());
        let depth = Texture::create_depth_texture(&device, [SIZE, SIZE], "test depth");

        let camera = Camera::default();
        let projection = Projection::new(SIZE, SIZE, demo.fovy, demo.znear, demo.zfar);
        let transform = Transform::new();
        let mut uniform = MatrixUniform::new();
        uniform.update(&transform, &camera, &projection);
        let matrices = MatrixResources::new(&device, uniform);

        let cubes = InstancedCubes::new(&device, &queue, &config, demo, &matrices.bind_group_layout).unwrap();

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("test pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            cubes.draw(&mut render_pass, &matrices.bind_group);
        }
        queue.submit(iter::once(encoder.finish()));

        let pixels = read_texture(&device, &queue, &target);
        Some((cubes, pixels))
    }

    fn drawn_pixels(pixels: &image::RgbaImage) -> usize {
        pixels.pixels().filter(|p| p.0 != [0, 0, 0, 255]).count()
    }

    #[test]
    fn colored_grid_is_drawn() {
        let Some((cubes, pixels)) = render_frame(&demo("instanced", Geometry::Colored)) else {
            return;
        };
        assert!(cubes.pipeline.is_some());
        assert!(cubes.texture.is_none());
        assert_eq!(cubes.instance_count(), 64_000);
        assert!(drawn_pixels(&pixels) > 0);
    }

    #[test]
    fn textured_grid_is_drawn() {
        let geometry = Geometry::Textured {
            texture: demo_path("textured/clouds.ppm"),
            flip: true,
        };
        let Some((cubes, pixels)) = render_frame(&demo("textured", geometry)) else {
            return;
        };
        assert!(cubes.pipeline.is_some());
        assert!(cubes.texture.is_some());
        assert!(drawn_pixels(&pixels) > 0);
    }

    #[test]
    fn missing_shaders_draw_nothing() {
        let demo = DemoConfig {
            vertex_shader: PathBuf::from("missing/vert.glsl"),
            fragment_shader: PathBuf::from("missing/frag.glsl"),
            ..DemoConfig::instanced()
        };
        let Some((cubes, pixels)) = render_frame(&demo) else {
            return;
        };
        assert!(cubes.pipeline.is_none());
        assert_eq!(drawn_pixels(&pixels), 0);
    }

    #[test]
    fn only_color_textures_carry_a_sampler() {
        let Some((device, queue)) = headless_device() else {
            return;
        };
        let depth = Texture::create_depth_texture(&device, [SIZE, SIZE], "test depth");
        assert!(depth.sampler.is_none());

        let rgba = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255]));
        let color = Texture::from_rgba(&device, &queue, &rgba, Some("test color")).unwrap();
        assert!(color.sampler.is_some());
    }

    #[test]
    fn missing_texture_is_an_error() {
        let Some((device, queue)) = headless_device() else {
            return;
        };
        let config = offscreen_config(SIZE, SIZE);
        let matrices = MatrixResources::new(&device, MatrixUniform::new());
        let demo = demo(
            "textured",
            Geometry::Textured {
                texture: PathBuf::from("missing.ppm"),
                flip: true,
            },
        );
        let result = InstancedCubes::new(&device, &queue, &config, &demo, &matrices.bind_group_layout);
        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("Unable to open ppm file"));
    }
}
