use crate::camera::{build_camera, CameraFrame, CameraStyle};
use crate::config::CameraConfig;
use crate::traits::Camera;

use super::auto_motion::{AutoMotion, MotionAxis, DEFAULT_ITERATIONS};
use super::input_adapter::{DragAction, InputEvent, PointerInput};
use super::snapshot::CameraSnapshot;
use super::timer::FixedStep;

/// Orthographic half-extent per unit of eye-center distance
pub const ORTHO_FACTOR_SCALE: f32 = 0.00025;

/// Built-in camera poses reachable with the preset keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraPreset {
    /// Orbit camera at the default frame
    Default,
    /// Orbit camera half as far from the focus
    Close,
    /// Last saved snapshot
    Saved,
}

impl CameraPreset {
    pub const ALL: [CameraPreset; 3] = [CameraPreset::Default, CameraPreset::Close, CameraPreset::Saved];

    fn index(self) -> usize {
        Self::ALL.iter().position(|&p| p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Keyboard commands understood by the rig
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyCommand {
    PreviousPreset,
    NextPreset,
    SwitchStyle(CameraStyle),
    SaveSnapshot,
    CycleMouseLock,
    Motion { axis: MotionAxis, value: f32 },
}

impl KeyCommand {
    pub fn from_key(key: char) -> Option<Self> {
        let command = match key {
            'c' => KeyCommand::PreviousPreset,
            'C' => KeyCommand::NextPreset,
            'j' => KeyCommand::SwitchStyle(CameraStyle::Game),
            'o' => KeyCommand::SwitchStyle(CameraStyle::Orbit),
            's' => KeyCommand::SaveSnapshot,
            'm' => KeyCommand::CycleMouseLock,
            'x' => KeyCommand::Motion { axis: MotionAxis::X, value: 90.0 },
            'X' => KeyCommand::Motion { axis: MotionAxis::X, value: -90.0 },
            'y' => KeyCommand::Motion { axis: MotionAxis::Y, value: -90.0 },
            'Y' => KeyCommand::Motion { axis: MotionAxis::Y, value: 90.0 },
            'z' => KeyCommand::Motion { axis: MotionAxis::Z, value: -2.0 },
            'Z' => KeyCommand::Motion { axis: MotionAxis::Z, value: 2.0 },
            _ => return None,
        };
        Some(command)
    }
}

/// Radius a game camera returns to when switched back to orbit: the frame's
/// own radius for an orbit frame, the default radius otherwise
fn orbit_radius_for(style: CameraStyle, frame: &CameraFrame) -> f32 {
    match style {
        CameraStyle::Orbit if frame.radius() > 0.0 => frame.radius(),
        _ => CameraFrame::default().radius(),
    }
}

/// Owns the active camera and everything that replaces or drives it: style
/// switches, presets, snapshots, pointer input and animated moves.
///
/// Switching style never mutates the camera in place; the old frame is
/// adapted and a new concrete camera is built from it.
pub struct CameraRig {
    camera: Box<dyn Camera>,
    config: CameraConfig,
    input: PointerInput,
    preset: CameraPreset,
    saved: Option<CameraSnapshot>,
    /// Radius restored when coming back to an orbit camera
    orbit_radius: f32,
    motion: Option<AutoMotion>,
    motion_iterations: u32,
    timer: FixedStep,
}

impl CameraRig {
    pub fn new(config: CameraConfig) -> Self {
        Self::with_camera(CameraStyle::Orbit, CameraFrame::default(), config)
    }

    pub fn with_camera(style: CameraStyle, frame: CameraFrame, config: CameraConfig) -> Self {
        let orbit_radius = orbit_radius_for(style, &frame);

        Self {
            camera: build_camera(style, frame, &config),
            config,
            input: PointerInput::new(),
            preset: CameraPreset::Default,
            saved: None,
            orbit_radius,
            motion: None,
            motion_iterations: DEFAULT_ITERATIONS,
            timer: FixedStep::default(),
        }
    }

    pub fn camera(&self) -> &dyn Camera {
        self.camera.as_ref()
    }

    pub fn camera_mut(&mut self) -> &mut dyn Camera {
        self.camera.as_mut()
    }

    pub fn style(&self) -> CameraStyle {
        self.camera.style()
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn input(&self) -> &PointerInput {
        &self.input
    }

    pub fn preset(&self) -> CameraPreset {
        self.preset
    }

    pub fn saved_snapshot(&self) -> Option<&CameraSnapshot> {
        self.saved.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    pub fn set_motion_iterations(&mut self, iterations: u32) {
        self.motion_iterations = iterations.max(1);
    }

    /// Orthographic extent hint for the renderer
    pub fn ortho_factor(&self) -> f32 {
        ORTHO_FACTOR_SCALE * self.camera.frame().radius()
    }

    fn replace_camera(&mut self, style: CameraStyle, frame: CameraFrame) {
        self.camera = build_camera(style, frame, &self.config);
        self.motion = None;
    }

    /// Swap in a camera of `style`, carrying the current pose over.
    /// Returns false when `style` is already active.
    pub fn switch_style(&mut self, style: CameraStyle) -> bool {
        let current = self.camera.style();
        if current == style {
            return false;
        }

        let mut frame = *self.camera.frame();
        match style {
            CameraStyle::Game => {
                let radius = frame.radius();
                if radius > 0.0 {
                    self.orbit_radius = radius;
                }
                frame.adapt_center_to_direction();
            }
            CameraStyle::Orbit => frame.adapt_center_to_distance(self.orbit_radius),
        }

        log::info!("Camera style {:?} -> {:?}", current, style);
        self.replace_camera(style, frame);
        true
    }

    pub fn apply_preset(&mut self, preset: CameraPreset) {
        self.preset = preset;
        match preset {
            CameraPreset::Default => self.replace_camera(CameraStyle::Orbit, CameraFrame::default()),
            CameraPreset::Close => self.replace_camera(
                CameraStyle::Orbit,
                CameraFrame::from_scalars(0.0, 1.0, 5.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0),
            ),
            CameraPreset::Saved => match self.saved {
                Some(snapshot) => self.restore(snapshot),
                None => {
                    log::warn!("No saved camera, using the default pose");
                    self.replace_camera(CameraStyle::Orbit, CameraFrame::default());
                }
            },
        }
        self.orbit_radius = orbit_radius_for(self.camera.style(), self.camera.frame());
        log::debug!("Camera preset {:?}", preset);
    }

    pub fn cycle_preset(&mut self, forward: bool) -> CameraPreset {
        let preset = if forward { self.preset.next() } else { self.preset.previous() };
        self.apply_preset(preset);
        preset
    }

    pub fn snapshot(&self) -> CameraSnapshot {
        CameraSnapshot::capture(self.camera.as_ref())
    }

    /// Remember the current pose for [`CameraPreset::Saved`]
    pub fn save_snapshot(&mut self) -> CameraSnapshot {
        let snapshot = self.snapshot();
        log::debug!("Saved camera {:?}", snapshot);
        self.saved = Some(snapshot);
        snapshot
    }

    /// Replace the camera with `snapshot`. A later switch back to orbit uses
    /// the snapshot's radius, or the default radius for a game snapshot.
    pub fn restore(&mut self, snapshot: CameraSnapshot) {
        self.replace_camera(snapshot.style, snapshot.frame);
        self.orbit_radius = orbit_radius_for(snapshot.style, &snapshot.frame);
    }

    /// Begin an animated move; returns false when the camera refuses it
    pub fn start_motion(&mut self, axis: MotionAxis, value: f32) -> bool {
        self.motion = AutoMotion::start(axis, value, self.motion_iterations, self.camera.as_ref());
        self.motion.is_some()
    }

    /// Advance animated moves by `delta` seconds; returns the ticks applied
    pub fn advance(&mut self, delta: f32) -> u32 {
        let due = self.timer.tick(delta);
        let mut applied = 0;

        for _ in 0..due {
            let Some(motion) = self.motion.as_mut() else {
                break;
            };
            motion.step(self.camera.as_mut());
            applied += 1;
            if motion.is_finished() {
                self.motion = None;
            }
        }
        applied
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> DragAction {
        self.input.process_event(event, self.camera.as_mut())
    }

    /// Run the command bound to `key`, if any
    pub fn handle_key(&mut self, key: char) -> Option<KeyCommand> {
        let command = KeyCommand::from_key(key)?;
        self.execute(command);
        Some(command)
    }

    pub fn execute(&mut self, command: KeyCommand) {
        match command {
            KeyCommand::PreviousPreset => {
                self.cycle_preset(false);
            }
            KeyCommand::NextPreset => {
                self.cycle_preset(true);
            }
            KeyCommand::SwitchStyle(style) => {
                self.switch_style(style);
            }
            KeyCommand::SaveSnapshot => {
                self.save_snapshot();
            }
            KeyCommand::CycleMouseLock => {
                let lock = self.input.cycle_lock();
                log::debug!("Mouse lock {:?}", lock);
            }
            KeyCommand::Motion { axis, value } => {
                if !self.start_motion(axis, value) {
                    log::warn!("Camera motion {:?} {} refused", axis, value);
                }
            }
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}
