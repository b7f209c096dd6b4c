//! Standalone window backed by winit.
//!
//! ```no_run
//! # use campus_view::{Layout, Viewer};
//! Viewer::builder()
//!     .with_layout(Layout::Boxes)
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    error::ViewError,
    gpu::render_context::RenderContext,
    input::{InputEvent, InputProcessor, MouseButton},
    options::Options,
    renderer::BoxRenderer,
    util::frame_timing::FrameTiming,
    Layout, ViewCommand, ViewEngine,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    layout: Layout,
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            layout: Layout::default(),
            options: None,
            title: None,
        }
    }

    /// Choose which scene to show.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title. Defaults to one naming the layout.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let title = self
            .title
            .unwrap_or_else(|| format!("Campus View - {}", self.layout));
        Viewer {
            layout: self.layout,
            options: self.options.unwrap_or_default(),
            title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window showing one layout.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    layout: Layout,
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Viewer`] if the event loop cannot be created or
    /// exits with an error.
    pub fn run(self) -> Result<(), ViewError> {
        let event_loop =
            EventLoop::new().map_err(|e| ViewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        log::info!("starting {} viewer", self.layout);
        let input =
            InputProcessor::with_key_bindings(self.options.keybindings.clone());
        let mut app = ViewerApp {
            window: None,
            gpu: None,
            engine: ViewEngine::new(self.layout, self.options),
            input,
            frame_timing: FrameTiming::new(Instant::now()),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| ViewError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Surface and renderer, created once the window exists.
struct Gpu {
    context: RenderContext,
    renderer: BoxRenderer,
}

impl Gpu {
    fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        let (width, height) = self.context.size();
        self.renderer.resize(&self.context.device, width, height);
    }
}

struct ViewerApp {
    window: Option<Arc<Window>>,
    gpu: Option<Gpu>,
    engine: ViewEngine,
    input: InputProcessor,
    frame_timing: FrameTiming,
    title: String,
}

/// Surface size for a window, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    fn run_command(&mut self, command: ViewCommand) {
        let name = command.name();
        match self.engine.execute(command, Instant::now()) {
            Ok(outcome) => log::trace!("{name}: {outcome:?}"),
            Err(e) => log::warn!("{name} failed: {e}"),
        }
    }

    fn handle_input(&mut self, event: InputEvent) {
        if let Some(command) = self.input.handle_event(event) {
            self.run_command(command);
        }
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        self.frame_timing.tick(now);
        let _ = self.engine.tick(now);

        let (Some(gpu), Some(camera)) = (&mut self.gpu, self.engine.camera())
        else {
            return;
        };
        let items = self.engine.render_set();
        gpu.renderer.prepare(&gpu.context, camera, &items);

        let frame = match gpu.context.get_next_frame() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                gpu.context.reconfigure();
                return;
            }
            Err(e) => {
                log::error!("render error: {e:?}");
                return;
            }
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = gpu.context.create_encoder();
        gpu.renderer.render(
            &mut encoder,
            &view,
            self.engine.options().display.background,
        );
        gpu.context.submit(encoder);
        frame.present();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (mon_size.width as f64 / scale * 0.75) as u32;
            let logical_h = (mon_size.height as f64 / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        let context = match pollster::block_on(RenderContext::new(
            window.clone(),
            (vp_w, vp_h),
        )) {
            Ok(context) => context,
            Err(e) => {
                log::error!("failed to initialize GPU: {e}");
                event_loop.exit();
                return;
            }
        };
        let renderer = BoxRenderer::new(&context);

        self.engine.attach_camera(vp_w, vp_h);
        self.gpu = Some(Gpu { context, renderer });
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }
        if self.window.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                let (vp_w, vp_h) = viewport_size(size);
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(vp_w, vp_h);
                }
                self.engine.resize(vp_w, vp_h);
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let Some(button) = MouseButton::from_winit(button) else {
                    return;
                };
                self.handle_input(InputEvent::MouseButton {
                    button,
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.handle_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.handle_input(InputEvent::Scroll { delta });
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.handle_input(InputEvent::ModifiersChanged {
                    shift: modifiers.state().shift_key(),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key_str = format!("{code:?}");
                if let Some(command) = self.input.handle_key_press(&key_str) {
                    self.run_command(command);
                }
            }

            _ => (),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.engine.teardown();
        log::info!("viewer closed");
    }
}
