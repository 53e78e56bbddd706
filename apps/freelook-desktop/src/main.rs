mod app;
mod config;
mod hud;

use anyhow::{Context, Result};
use app::{AppState, KeyOutcome};
use clap::Parser;
use config::{DemoConfig, Overrides};
use egui::Context as EguiContext;
use freelook_render::RenderView;
use freelook_render_wgpu::CubeRenderer;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window, WindowId};

#[derive(Parser)]
#[command(name = "freelook-desktop", about = "Free-look camera demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Primary (base) texture
    #[arg(long)]
    texture1: Option<PathBuf>,

    /// Secondary (blended) texture
    #[arg(long)]
    texture2: Option<PathBuf>,
}

impl Cli {
    fn demo_config(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load(path)?,
            None => DemoConfig::default(),
        };
        config.apply_overrides(Overrides {
            width: self.width,
            height: self.height,
            primary_texture: self.texture1.clone(),
            secondary_texture: self.texture2.clone(),
        });
        Ok(config)
    }
}

/// GPU and window resources, created once the event loop resumes.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: CubeRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

struct GpuApp {
    demo: DemoConfig,
    state: AppState,
    gpu: Option<Gpu>,
    egui_ctx: EguiContext,
}

impl GpuApp {
    fn new(demo: DemoConfig) -> Self {
        Self {
            state: AppState::new(&demo),
            demo,
            gpu: None,
            egui_ctx: EguiContext::default(),
        }
    }

    fn init_gpu(&self, event_loop: &ActiveEventLoop) -> Result<Gpu> {
        let attrs = Window::default_attributes()
            .with_title(self.demo.window.title.clone())
            .with_inner_size(PhysicalSize::new(
                self.demo.window.width.max(1),
                self.demo.window.height.max(1),
            ));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        capture_cursor(&window);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no compatible GPU adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("freelook_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("failed to create device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or(surface_caps.formats.first())
            .copied()
            .context("surface reports no formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let primary = freelook_assets::load_or_fallback(&self.demo.textures.primary, true);
        let secondary = freelook_assets::load_or_fallback(&self.demo.textures.secondary, true);

        let renderer = CubeRenderer::new(
            &device,
            &queue,
            surface_format,
            freelook_render::Viewport::new(config.width, config.height),
            [&primary, &secondary],
            self.demo.renderer.into(),
        );

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        tracing::info!(
            "GPU initialized with {} backend, {}x{}",
            adapter.get_info().backend.to_str(),
            config.width,
            config.height
        );

        Ok(Gpu {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }
}

/// Hide the cursor and keep it in the window so motion deltas keep arriving.
fn capture_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    if let Err(e) = grabbed {
        tracing::warn!("cursor grab unavailable: {e}");
    }
    window.set_cursor_visible(false);
}

impl Gpu {
    fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.renderer.resize(
            &self.device,
            freelook_render::Viewport::new(self.config.width, self.config.height),
        );
    }

    fn draw_hud(&mut self, ctx: &EguiContext, target: &wgpu::TextureView, state: &AppState) {
        let raw_input = self.egui_winit.take_egui_input(&self.window);
        let full_output = ctx.run(raw_input, |ctx| {
            if state.show_hud {
                hud::draw_hud(ctx, state.camera.state(), state.last_frame_seconds);
            }
        });
        self.egui_winit
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui_encoder"),
            });
        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            self.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        self.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }
        match self.init_gpu(event_loop) {
            Ok(gpu) => {
                let size = gpu.window.inner_size();
                self.state.handle_resize(size.width, size.height);
                self.gpu = Some(gpu);
            }
            Err(e) => {
                tracing::error!("startup failed: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };
        let _ = gpu.egui_winit.on_window_event(&gpu.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                gpu.resize(new_size.width, new_size.height);
                self.state.handle_resize(new_size.width, new_size.height);
            }
            WindowEvent::Focused(focused) => {
                if focused {
                    capture_cursor(&gpu.window);
                }
                self.state.handle_focus(focused);
                tracing::debug!("focus {}", if focused { "gained" } else { "lost" });
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;
                if self.state.handle_key(key, pressed) == KeyOutcome::Exit {
                    event_loop.exit();
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.state.handle_scroll(delta);
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                self.state.tick(now);

                let output = match gpu.surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        gpu.surface.configure(&gpu.device, &gpu.config);
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let target = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                match RenderView::from_camera(&self.state.camera, self.state.viewport) {
                    Ok(view) => {
                        let model = self.state.cube.model_matrix(self.state.elapsed_seconds(now));
                        gpu.renderer
                            .render(&gpu.device, &gpu.queue, &target, &view, model);
                    }
                    Err(e) => tracing::error!("skipping frame: {e}"),
                }

                gpu.draw_hud(&self.egui_ctx, &target, &self.state);

                output.present();
                gpu.window.request_redraw();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.state.handle_mouse_motion(delta.0, delta.1);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let demo = cli.demo_config()?;
    tracing::info!(
        "freelook-desktop starting: {}x{}",
        demo.window.width,
        demo.window.height
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(demo);
    event_loop.run_app(&mut app)?;

    Ok(())
}
