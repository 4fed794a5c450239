use std::thread;
use std::time::Duration;

use log::{info, warn};

use drivepad_control::RawEvent;

use crate::backend::{Discovery, EventPort, PortInfo};
use crate::error::{Error, Result};

/// Retry cadences for device search and reconnection. Injectable so
/// tests do not sit through real delays.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Pause between device-list polls while no match is attached.
    pub search_interval: Duration,
    /// Pause after a failed read before searching again.
    pub reconnect_pause: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            search_interval: Duration::from_secs(3),
            reconnect_pause: Duration::from_millis(100),
        }
    }
}

/// Owns one open controller device and the blocking read path.
///
/// The session has exactly two states: searching and connected. A read
/// failure after a successful connection is treated as transient (the
/// controller powered off or went out of range): the session pauses
/// briefly, then polls the device list until the controller shows up
/// again and resumes reading. Only an ambiguous name match is fatal.
#[derive(Debug)]
pub struct PadSession<B: Discovery> {
    backend: B,
    search_term: Box<str>,
    options: SessionOptions,
    port: B::Port,
    active: bool,
}

impl<B: Discovery> PadSession<B> {
    /// Searches for the device and connects, blocking until exactly one
    /// match is attached. Fails only when the search term is ambiguous.
    pub fn connect(backend: B, search_term: &str) -> Result<Self> {
        Self::connect_with(backend, search_term, SessionOptions::default())
    }

    pub fn connect_with(
        backend: B,
        search_term: &str,
        options: SessionOptions,
    ) -> Result<Self> {
        let port = search_blocking(&backend, search_term, &options)?;
        info!("connected to input device '{}'", port.name());
        Ok(Self {
            backend,
            search_term: search_term.into(),
            options,
            port,
            active: true,
        })
    }

    /// Blocks until the next raw event. Transparently reconnects after a
    /// read failure; an error from here is fatal.
    pub fn read_raw(&mut self) -> Result<RawEvent> {
        loop {
            match self.port.read_event() {
                Ok(event) => return Ok(event),
                Err(e) => {
                    warn!(
                        "read failed, likely lost connection to the controller: {e}; reconnecting"
                    );
                    thread::sleep(self.options.reconnect_pause);
                    self.port = search_blocking(&self.backend, &self.search_term, &self.options)?;
                    info!("reconnected to input device '{}'", self.port.name());
                }
            }
        }
    }

    /// Name of the currently connected device.
    pub fn device_name(&self) -> &str {
        self.port.name()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Marks the session inactive and lets a pending retry pause elapse
    /// so the process can exit cleanly.
    pub fn shutdown(&mut self) {
        self.active = false;
        thread::sleep(self.options.reconnect_pause);
    }
}

/// Polls the device list until the search term matches exactly one
/// attached device, then opens it. Zero matches and open failures are
/// retried forever; two or more matches are a configuration error.
fn search_blocking<B: Discovery>(
    backend: &B,
    term: &str,
    options: &SessionOptions,
) -> Result<B::Port> {
    loop {
        if let Some(info) = find_match(backend, term)? {
            match backend.open(&info) {
                Ok(port) => return Ok(port),
                Err(e) => warn!("failed to open '{}': {e}", info.name),
            }
        } else {
            info!(
                "no device matching '{term}' found, trying again in {:?}",
                options.search_interval
            );
        }
        thread::sleep(options.search_interval);
    }
}

fn find_match<B: Discovery>(backend: &B, term: &str) -> Result<Option<PortInfo>> {
    let needle = term.to_lowercase();
    let mut matches: Vec<PortInfo> = backend
        .scan()
        .into_iter()
        .filter(|device| device.name.to_lowercase().contains(&needle))
        .collect();
    if matches.len() > 1 {
        return Err(Error::AmbiguousDevice {
            term: term.to_string(),
            names: matches
                .iter()
                .map(|d| d.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        });
    }
    Ok(matches.pop())
}
