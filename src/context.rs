use std::sync::Arc;

use anyhow::Context as _;
use winit::window::Window;

use crate::{
    camera::{Camera, MatrixResources, MatrixUniform, Projection},
    config::DemoConfig,
    data_structures::{cubes::InstancedCubes, texture, transform::Transform},
    input::CameraController,
};

/// Everything a running demo owns: the GPU handles, the camera and model
/// transform, and the scene. Built once when the window exists and passed by
/// reference into input handling, update and draw.
#[derive(Debug)]
pub struct Context {
    pub(crate) window: Arc<Window>,
    pub(crate) depth_texture: texture::Texture,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub clear_colour: wgpu::Color,
    pub camera: Camera,
    pub controller: CameraController,
    pub projection: Projection,
    pub transform: Transform,
    pub matrices: MatrixResources,
    pub cubes: InstancedCubes,
    /// Set by the quit key or a close request; checked before every frame.
    pub quit: bool,
}

impl Context {
    pub async fn new(window: Arc<Window>, demo: &DemoConfig) -> anyhow::Result<Self> {
        let size = window.inner_size();

        // The instance is a handle to our GPU. Any backend will do, including GL.
        log::info!("WGPU setup");
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("Could not create a surface for the window")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("No graphics adapter is compatible with the window")?;
        log_adapter_info(&adapter);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("Graphics device not available")?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Colors are written as-is, so prefer a linear surface format.
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("The surface reports no supported formats")?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let camera = Camera::default();
        let projection = Projection::new(config.width, config.height, demo.fovy, demo.znear, demo.zfar);
        let transform = Transform::new();
        let mut uniform = MatrixUniform::new();
        uniform.update(&transform, &camera, &projection);
        let matrices = MatrixResources::new(&device, uniform);

        let depth_texture = texture::Texture::create_depth_texture(
            &device,
            [config.width, config.height],
            "depth_texture",
        );

        let cubes = InstancedCubes::new(&device, &queue, &config, demo, &matrices.bind_group_layout)?;

        Ok(Self {
            window,
            depth_texture,
            surface,
            device,
            queue,
            config,
            clear_colour: demo.clear_colour,
            camera,
            controller: CameraController::new(demo.camera_speed),
            projection,
            transform,
            matrices,
            cubes,
            quit: false,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.projection.resize(width, height);
            self.surface.configure(&self.device, &self.config);
            self.depth_texture =
                texture::Texture::create_depth_texture(&self.device, [width, height], "depth_texture");
        }
    }
}

fn log_adapter_info(adapter: &wgpu::Adapter) {
    let info = adapter.get_info();
    log::info!("(Note: If you have two GPU's, make sure the correct one is selected)");
    log::info!("Vendor: {:#06x}", info.vendor);
    log::info!("Renderer: {}", info.name);
    log::info!("Backend: {:?}", info.backend);
    log::info!("Driver: {} {}", info.driver, info.driver_info);
}
