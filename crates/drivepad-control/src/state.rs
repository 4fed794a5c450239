use std::fmt;

use ahash::AHashMap;

use crate::input::{PadEvent, PadInput};
use crate::squircle::disk_to_square;

/// Step applied to a gain factor per d-pad press.
pub const SCALE_STEP: f32 = 0.05;

/// Sticks report negative values when pushed forward; throttle is flipped
/// so forward means positive.
const THROTTLE_SIGN: f32 = -1.0;

/// Discrete operating mode of the downstream vehicle controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveMode {
    User,
    LocalAngle,
    Local,
}

impl DriveMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DriveMode::User => "user",
            DriveMode::LocalAngle => "local_angle",
            DriveMode::Local => "local",
        }
    }
}

impl fmt::Display for DriveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const AUTONOMOUS_MODES: [DriveMode; 2] = [DriveMode::LocalAngle, DriveMode::Local];

/// Rotation over the autonomous sub-modes, kept as an explicit cursor.
#[derive(Debug, Default)]
struct AutonomousCycle {
    cursor: usize,
}

impl AutonomousCycle {
    fn advance(&mut self) -> DriveMode {
        let mode = AUTONOMOUS_MODES[self.cursor];
        self.cursor = (self.cursor + 1) % AUTONOMOUS_MODES.len();
        mode
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}

/// Snapshot polled by the vehicle-control loop. Plain `Copy` data, safe
/// to hand across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlOutput {
    pub angle: f32,
    pub throttle: f32,
    pub drive_mode: DriveMode,
    pub recording: bool,
}

/// The control state machine.
///
/// Consumes one decoded [`PadEvent`] at a time and folds it into the
/// current outputs. Stick events run through the disk-to-square mapper so
/// steering and throttle stay independent; everything else is
/// edge-triggered on a button value of 1 and ignored on release.
///
/// The gain factors are deliberately unclamped: they can grow without
/// bound or go negative (which inverts the axis). Stick values are taken
/// as-is from the decoder and are not clamped either.
#[derive(Debug)]
pub struct VehicleState {
    stick_x: f32,
    stick_y: f32,
    angle: f32,
    throttle: f32,
    angle_scale: f32,
    throttle_scale: f32,
    drive_mode: DriveMode,
    autonomous: AutonomousCycle,
    recording: bool,
    last_seen: AHashMap<PadInput, f32>,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleState {
    pub fn new() -> Self {
        Self {
            stick_x: 0.0,
            stick_y: 0.0,
            angle: 0.0,
            throttle: 0.0,
            angle_scale: 1.0,
            throttle_scale: 1.0,
            drive_mode: DriveMode::User,
            autonomous: AutonomousCycle::default(),
            // Recording starts enabled. Historical convention of this
            // controller layout; downstream tooling relies on it.
            recording: true,
            last_seen: AHashMap::new(),
        }
    }

    /// Applies one decoded event. Events without an input name are
    /// ignored; named events are always recorded in the last-seen map,
    /// whether or not they drive any output.
    pub fn apply(&mut self, event: PadEvent) {
        let Some(input) = event.input else {
            return;
        };
        self.last_seen.insert(input, event.value);

        let val = event.value;
        match input {
            PadInput::LeftStickX => {
                self.stick_x = val;
                self.refresh_outputs();
            }
            PadInput::LeftStickY => {
                self.stick_y = val;
                self.refresh_outputs();
            }
            PadInput::X => {
                if pressed(val) {
                    self.recording = true;
                }
            }
            PadInput::Y => {
                if pressed(val) {
                    self.recording = false;
                }
            }
            PadInput::B => {
                if pressed(val) {
                    self.drive_mode = DriveMode::User;
                }
            }
            PadInput::A => {
                if pressed(val) {
                    self.toggle_autonomous();
                }
            }
            PadInput::PadRight => {
                if pressed(val) {
                    self.angle_scale += SCALE_STEP;
                }
            }
            PadInput::PadLeft => {
                if pressed(val) {
                    self.angle_scale -= SCALE_STEP;
                }
            }
            PadInput::PadUp => {
                if pressed(val) {
                    self.throttle_scale += SCALE_STEP;
                }
            }
            PadInput::PadDown => {
                if pressed(val) {
                    self.throttle_scale -= SCALE_STEP;
                }
            }
            _ => {}
        }
    }

    /// Recomputes angle and throttle from the current stick pair. Both
    /// are always derived together; the axis that did not move keeps its
    /// last value instead of being assumed zero.
    fn refresh_outputs(&mut self) {
        let (x, y) = disk_to_square(self.stick_x, self.stick_y);
        self.angle = x * self.angle_scale;
        self.throttle = y * self.throttle_scale * THROTTLE_SIGN;
    }

    fn toggle_autonomous(&mut self) {
        if self.drive_mode == DriveMode::User {
            // Autonomous driving always engages in the angle-only
            // sub-mode, never mid-rotation.
            self.autonomous.reset();
        }
        self.drive_mode = self.autonomous.advance();
    }

    /// Current output snapshot. Never blocks, never mutates.
    pub fn output(&self) -> ControlOutput {
        ControlOutput {
            angle: self.angle,
            throttle: self.throttle,
            drive_mode: self.drive_mode,
            recording: self.recording,
        }
    }

    /// Last raw value seen for a named input, handler or not.
    pub fn last_seen(&self, input: PadInput) -> Option<f32> {
        self.last_seen.get(&input).copied()
    }

    pub fn angle_scale(&self) -> f32 {
        self.angle_scale
    }

    pub fn throttle_scale(&self) -> f32 {
        self.throttle_scale
    }
}

fn pressed(val: f32) -> bool {
    (val - 1.0).abs() < f32::EPSILON
}
