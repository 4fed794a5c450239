use std::sync::{Arc, RwLock};

use log::info;

use drivepad_control::{ControlOutput, Decoder, VehicleState};

use crate::backend::Discovery;
use crate::error::Result;
use crate::session::PadSession;

/// Session, decoder and state machine composed into the surface the
/// vehicle-control loop consumes.
///
/// The ingestion path is single threaded: one blocking read, one decode,
/// one dispatch per [`step`](Self::step) call, strictly in arrival order
/// with no buffering. A consumer on another thread reads the latest
/// snapshot through [`shared`](Self::shared); the snapshot is replaced in
/// one write-lock acquisition per event, so a partially-updated state is
/// never observable.
pub struct PadPilot<B: Discovery> {
    session: PadSession<B>,
    decoder: Decoder,
    state: VehicleState,
    shared: Arc<RwLock<ControlOutput>>,
    verbose: bool,
}

/// Cloneable read handle for the latest control snapshot.
#[derive(Clone)]
pub struct SharedOutput(Arc<RwLock<ControlOutput>>);

impl SharedOutput {
    pub fn get(&self) -> ControlOutput {
        match self.0.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl<B: Discovery> PadPilot<B> {
    pub fn new(session: PadSession<B>, decoder: Decoder, verbose: bool) -> Self {
        let state = VehicleState::new();
        let shared = Arc::new(RwLock::new(state.output()));
        Self {
            session,
            decoder,
            state,
            shared,
            verbose,
        }
    }

    /// One blocking read/decode/dispatch step. Reconnection happens
    /// inside the session; state set before a connection loss (scales,
    /// drive mode, recording) survives it.
    pub fn step(&mut self) -> Result<()> {
        let raw = self.session.read_raw()?;
        let event = self.decoder.decode(raw);
        if self.verbose {
            match event.input {
                Some(input) => info!("input: {input}, value: {:.3}", event.value),
                None => info!("unmapped event: code {}, value {}", event.code, raw.value),
            }
        }
        self.state.apply(event);
        if let Ok(mut shared) = self.shared.write() {
            *shared = self.state.output();
        }
        Ok(())
    }

    /// Current control snapshot. Never blocks and never mutates; safe to
    /// call between steps at any cadence.
    pub fn output(&self) -> ControlOutput {
        self.state.output()
    }

    /// Handle for polling the latest snapshot from another thread.
    pub fn shared(&self) -> SharedOutput {
        SharedOutput(self.shared.clone())
    }

    pub fn device_name(&self) -> &str {
        self.session.device_name()
    }

    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    /// Marks the session inactive and lets any pending retry pause
    /// elapse before the process exits.
    pub fn shutdown(&mut self) {
        self.session.shutdown();
    }
}
