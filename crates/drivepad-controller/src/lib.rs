//! Device session management for gamepad vehicle control.
//!
//! Finds a controller by name substring over the system's input devices,
//! owns the blocking read loop, and survives transient connection loss by
//! searching for the device again. [`PadPilot`] composes a session with
//! the decoder and state machine from `drivepad-control` into the surface
//! the vehicle loop consumes.

mod backend;
mod error;
mod pilot;
mod session;

pub use crate::backend::{Discovery, EvdevBackend, EventPort, PortInfo};
pub use crate::error::{Error, Result};
pub use crate::pilot::{PadPilot, SharedOutput};
pub use crate::session::{PadSession, SessionOptions};

#[cfg(test)]
pub(crate) mod testing;
