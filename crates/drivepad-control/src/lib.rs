//! Event-to-state reduction core for gamepad vehicle control.
//!
//! Raw device events come in as `(code, value)` pairs, get decoded into
//! named pad inputs, and are folded into a small control state: steering
//! angle, throttle, drive mode and a recording flag. The vehicle loop
//! polls the resulting snapshot; nothing in this crate blocks or touches
//! a device.

mod decode;
mod input;
mod squircle;
mod state;

pub use crate::decode::{ButtonMap, Decoder, DEFAULT_AXIS_MAX};
pub use crate::input::{PadEvent, PadInput, RawEvent};
pub use crate::squircle::disk_to_square;
pub use crate::state::{ControlOutput, DriveMode, VehicleState, SCALE_STEP};
