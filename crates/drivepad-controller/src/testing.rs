//! Scripted discovery backend for session tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;

use drivepad_control::RawEvent;

use crate::backend::{Discovery, EventPort, PortInfo};

pub(crate) fn port_info(name: &str) -> PortInfo {
    PortInfo {
        name: name.to_string(),
        path: PathBuf::from("/dev/input/event0"),
    }
}

/// A device that replays a fixed event script. A `Disconnect` entry makes
/// the next read fail the way a powered-off controller would.
#[derive(Debug)]
pub(crate) struct ScriptedPort {
    name: String,
    script: VecDeque<Entry>,
}

#[derive(Debug)]
enum Entry {
    Event(RawEvent),
    Disconnect,
}

impl ScriptedPort {
    pub(crate) fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            script: VecDeque::new(),
        }
    }

    pub(crate) fn with_button(mut self, code: u16, value: i32) -> Self {
        self.script.push_back(Entry::Event(RawEvent {
            code,
            value,
            is_axis: false,
        }));
        self
    }

    pub(crate) fn with_axis(mut self, code: u16, value: i32) -> Self {
        self.script.push_back(Entry::Event(RawEvent {
            code,
            value,
            is_axis: true,
        }));
        self
    }

    pub(crate) fn with_disconnect(mut self) -> Self {
        self.script.push_back(Entry::Disconnect);
        self
    }
}

impl EventPort for ScriptedPort {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_event(&mut self) -> io::Result<RawEvent> {
        match self.script.pop_front() {
            Some(Entry::Event(event)) => Ok(event),
            Some(Entry::Disconnect) => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "scripted disconnect",
            )),
            None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "script ended")),
        }
    }
}

/// Discovery backend with a queue of scan results and a queue of ports.
/// The final scan result keeps repeating, so reconnection loops settle.
#[derive(Debug)]
pub(crate) struct MockBackend {
    scans: RefCell<VecDeque<Vec<PortInfo>>>,
    ports: RefCell<VecDeque<ScriptedPort>>,
}

impl MockBackend {
    pub(crate) fn new() -> Self {
        Self {
            scans: RefCell::new(VecDeque::new()),
            ports: RefCell::new(VecDeque::new()),
        }
    }

    pub(crate) fn with_scan(self, devices: Vec<PortInfo>) -> Self {
        self.scans.borrow_mut().push_back(devices);
        self
    }

    pub(crate) fn with_port(self, port: ScriptedPort) -> Self {
        self.ports.borrow_mut().push_back(port);
        self
    }
}

impl Discovery for MockBackend {
    type Port = ScriptedPort;

    fn scan(&self) -> Vec<PortInfo> {
        let mut scans = self.scans.borrow_mut();
        if scans.len() > 1 {
            scans.pop_front().unwrap_or_default()
        } else {
            scans.front().cloned().unwrap_or_default()
        }
    }

    fn open(&self, info: &PortInfo) -> io::Result<ScriptedPort> {
        self.ports.borrow_mut().pop_front().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no scripted port left for '{}'", info.name),
            )
        })
    }
}
