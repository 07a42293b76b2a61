//! Application event loop.
//!
//! One thread does everything, in this order, for every loop iteration:
//! 1. Collect window events; keys and cursor motion update the camera, the quit
//!    key and close requests set the quit flag
//! 2. On redraw: clear the frame, upload the model/view/projection matrices
//!    (projection follows the current window size) and issue the single
//!    instanced draw call
//! 3. Present the frame and request the next one
//! 4. Exit once the quit flag is set
//!
//! GPU resources are created once, when the window first becomes available,
//! and are released when the [`Context`] is dropped after the loop ends.

use std::{iter, sync::Arc};

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::Window,
};

use crate::{config::DemoConfig, context::Context, input::InputOutcome};

pub struct App {
    async_runtime: tokio::runtime::Runtime,
    demo: DemoConfig,
    ctx: Option<Context>,
    // Startup failure, handed back to the caller of `run`
    error: Option<anyhow::Error>,
}

impl App {
    fn new(demo: DemoConfig) -> anyhow::Result<Self> {
        let async_runtime = tokio::runtime::Runtime::new()?;
        Ok(Self {
            async_runtime,
            demo,
            ctx: None,
            error: None,
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("App initialization failed: {error:#}");
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.ctx.is_some() {
            return;
        }
        let window_attributes = Window::default_attributes()
            .with_title(self.demo.title.clone())
            .with_inner_size(PhysicalSize::new(self.demo.width, self.demo.height));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        match self.async_runtime.block_on(Context::new(window, &self.demo)) {
            Ok(ctx) => {
                ctx.window.request_redraw();
                self.ctx = Some(ctx);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let ctx = match &mut self.ctx {
            Some(ctx) => ctx,
            None => return,
        };

        if ctx.controller.handle_window_events(&event, &mut ctx.camera) == InputOutcome::Quit {
            ctx.quit = true;
        }

        match event {
            WindowEvent::Resized(size) => ctx.resize(size.width, size.height),
            WindowEvent::RedrawRequested if !ctx.quit => {
                match render(ctx) {
                    Ok(_) => {}
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = ctx.window.inner_size();
                        ctx.resize(size.width, size.height);
                    }
                    Err(e) => {
                        log::error!("Unable to render {}", e);
                    }
                }
                ctx.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.ctx.as_ref().is_some_and(|ctx| ctx.quit) {
            log::info!("Goodbye");
            event_loop.exit();
        }
    }
}

/// Draw one frame.
pub fn render(ctx: &mut Context) -> Result<(), wgpu::SurfaceError> {
    let output = ctx.surface.get_current_texture()?;
    let view = output
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());

    ctx.matrices
        .write(&ctx.queue, &ctx.transform, &ctx.camera, &ctx.projection);

    let mut encoder = ctx
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });
    {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(ctx.clear_colour),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &ctx.depth_texture.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        ctx.cubes.draw(&mut render_pass, &ctx.matrices.bind_group);
    }

    ctx.queue.submit(iter::once(encoder.finish()));
    output.present();
    Ok(())
}

/// Open a window and run `demo` until the user quits.
///
/// Startup failures (no window, no adapter, unreadable texture) end the loop
/// and are returned; shader problems are only logged.
pub fn run(demo: DemoConfig) -> anyhow::Result<()> {
    let env = env_logger::Env::default().default_filter_or("info");
    if let Err(e) = env_logger::Builder::from_env(env).try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(demo)?;
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
