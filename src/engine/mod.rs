//! The view engine: scene, reveal toggle, camera controls and focus machine
//! behind one command interface.
//!
//! The engine is frame-driven and single-threaded. The host calls
//! [`ViewEngine::execute`] for each user command and [`ViewEngine::tick`]
//! once per redraw, then draws [`ViewEngine::render_set`]. Time is always
//! passed in, so the engine can be driven deterministically in tests.

mod command;

pub use command::{CommandOutcome, ViewCommand};
use glam::Vec2;
use web_time::Instant;

use crate::camera::core::Camera;
use crate::camera::{CameraRig, OrbitControls};
use crate::error::ViewError;
use crate::focus::{FocusMachine, FocusState};
use crate::options::Options;
use crate::picking::{pick_shape, Ray};
use crate::scene::{Layout, RenderItem, RevealToggle, Scene, ShapeId};

/// Owns everything a viewer needs apart from the GPU.
///
/// The camera controls are optional: they exist only between
/// [`attach_camera`](Self::attach_camera) and
/// [`teardown`](Self::teardown). Commands that need the camera are ignored
/// while it is absent.
#[derive(Debug)]
pub struct ViewEngine {
    scene: Scene,
    reveal: RevealToggle,
    controls: Option<OrbitControls>,
    focus: FocusMachine<ShapeId>,
    options: Options,
    /// Surface size in physical pixels.
    viewport: Vec2,
}

impl ViewEngine {
    /// Engine for `layout` with no camera attached yet.
    #[must_use]
    pub fn new(layout: Layout, options: Options) -> Self {
        let scene = Scene::new(layout);
        let focus = scene.focus_machine(&options.animation);
        let reveal = RevealToggle::new(options.display.start_revealed);
        log::info!("{layout} view: {} shapes", scene.len());
        Self {
            scene,
            reveal,
            controls: None,
            focus,
            options,
            viewport: Vec2::ZERO,
        }
    }

    /// Create the orbit controls at the layout's home pose for a surface of
    /// `width` x `height` pixels. Replaces any existing controls.
    pub fn attach_camera(&mut self, width: u32, height: u32) {
        let layout = self.scene.layout();
        let mut camera_options = self.options.camera.clone();
        if let Some(fovy) = layout.fovy_override() {
            camera_options.fovy = fovy;
        }
        let aspect = if height > 0 {
            width as f32 / height as f32
        } else {
            1.0
        };
        if self.controls.is_some() {
            log::debug!("replacing camera controls");
        }
        self.controls = Some(OrbitControls::new(
            layout.home_pose(),
            aspect,
            &camera_options,
            layout.orbit_limits(&self.options.camera),
        ));
        self.viewport = Vec2::new(width as f32, height as f32);
    }

    /// Drop the camera controls and abandon any camera move. Later ticks
    /// do nothing and camera commands are ignored until a camera is
    /// attached again.
    pub fn teardown(&mut self) {
        self.focus.cancel();
        if self.controls.take().is_some() {
            log::debug!("camera controls torn down");
        }
    }

    /// Track a surface resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = Vec2::new(width as f32, height as f32);
        if let Some(controls) = &mut self.controls {
            controls.resize(width, height);
        }
    }

    /// Execute one command.
    ///
    /// # Errors
    ///
    /// [`ViewError::UnknownTarget`] when a focus or floor request names
    /// nothing focusable, and [`ViewError::UnsupportedCommand`] for
    /// [`ViewCommand::SelectFloor`] outside the floors layout. No state
    /// changes in either case.
    pub fn execute(
        &mut self,
        command: ViewCommand,
        now: Instant,
    ) -> Result<CommandOutcome, ViewError> {
        let outcome: CommandOutcome = match command {
            ViewCommand::ResetCamera => {
                self.focus.reset(self.controls.as_mut(), now).into()
            }
            ViewCommand::ToggleElements => {
                let revealed = self.reveal.toggle();
                log::debug!("interiors revealed: {revealed}");
                CommandOutcome::Applied
            }
            ViewCommand::Focus(label) => {
                let id = self.resolve_label(&label)?;
                self.focus.focus(id, self.controls.as_mut(), now)?.into()
            }
            ViewCommand::CycleFocus => {
                self.focus.cycle(self.controls.as_mut(), now).into()
            }
            ViewCommand::SelectFloor(index) => {
                if self.scene.layout() != Layout::Floors {
                    return Err(ViewError::UnsupportedCommand("select floor"));
                }
                let id = self.scene.floor(index).ok_or_else(|| {
                    let label = format!("floor {}", index.saturating_add(1));
                    ViewError::UnknownTarget(label)
                })?;
                self.focus.focus(id, self.controls.as_mut(), now)?.into()
            }
            ViewCommand::Pick { x, y } => self.pick(Vec2::new(x, y), now)?,
            gesture @ (ViewCommand::RotateCamera { .. }
            | ViewCommand::PanCamera { .. }
            | ViewCommand::Zoom { .. }) => self.orbit(&gesture),
        };
        Ok(outcome)
    }

    /// Advance any camera move. Returns the focus state reached when a move
    /// settles on this frame.
    pub fn tick(&mut self, now: Instant) -> Option<FocusState<ShapeId>> {
        self.focus.tick(self.controls.as_mut(), now)
    }

    /// Everything to draw this frame.
    #[must_use]
    pub fn render_set(&self) -> Vec<RenderItem> {
        self.scene
            .render_set(self.reveal, &self.focus, &self.options.display)
    }

    /// The camera, if attached.
    #[must_use]
    pub fn camera(&self) -> Option<&Camera> {
        self.controls.as_ref().map(|controls| &controls.camera)
    }

    /// The orbit controls, if attached.
    #[must_use]
    pub fn controls(&self) -> Option<&OrbitControls> {
        self.controls.as_ref()
    }

    /// Scene being viewed.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Active layout.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.scene.layout()
    }

    /// Current reveal toggle.
    #[must_use]
    pub fn reveal(&self) -> RevealToggle {
        self.reveal
    }

    /// Focus machine, for state queries.
    #[must_use]
    pub fn focus(&self) -> &FocusMachine<ShapeId> {
        &self.focus
    }

    /// Options the engine was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Focusable shape with this label.
    fn resolve_label(&self, label: &str) -> Result<ShapeId, ViewError> {
        self.scene
            .find(label)
            .filter(|&id| self.focus.contains(id))
            .ok_or_else(|| ViewError::UnknownTarget(label.to_owned()))
    }

    /// Rotate, pan or zoom. User input never competes with a camera move.
    fn orbit(&mut self, command: &ViewCommand) -> CommandOutcome {
        let Some(controls) = self.controls.as_mut() else {
            return CommandOutcome::Ignored;
        };
        if self.focus.is_animating() {
            log::trace!("{} ignored during camera move", command.name());
            return CommandOutcome::Ignored;
        }
        match *command {
            ViewCommand::RotateCamera { delta } => controls.rotate(delta),
            ViewCommand::PanCamera { delta } => controls.pan(delta),
            ViewCommand::Zoom { delta } => controls.zoom(delta),
            _ => return CommandOutcome::Ignored,
        }
        controls.update();
        CommandOutcome::Applied
    }

    /// Focus whatever focusable shape is under the cursor.
    fn pick(
        &mut self,
        cursor: Vec2,
        now: Instant,
    ) -> Result<CommandOutcome, ViewError> {
        let Some(camera) = self.camera() else {
            return Ok(CommandOutcome::Ignored);
        };
        let Some(ray) = Ray::from_screen(camera, cursor, self.viewport) else {
            return Ok(CommandOutcome::Ignored);
        };
        let drawn =
            self.scene
                .drawn(self.reveal, &self.focus, &self.options.display);
        let Some(hit) = pick_shape(&ray, drawn) else {
            return Ok(CommandOutcome::Ignored);
        };

        if !self.focus.contains(hit) {
            if let Some(shape) = self.scene.shape(hit) {
                log::info!("clicked {}", shape.label);
            }
            return Ok(CommandOutcome::Ignored);
        }
        Ok(self.focus.focus(hit, self.controls.as_mut(), now)?.into())
    }
}
