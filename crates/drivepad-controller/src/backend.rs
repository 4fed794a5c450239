use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;

use evdev::EventType;

use drivepad_control::RawEvent;

/// Descriptor of an attached input device.
#[derive(Debug, Clone)]
pub struct PortInfo {
    pub name: String,
    pub path: PathBuf,
}

/// A blocking source of raw input events from one open device.
pub trait EventPort {
    fn name(&self) -> &str;
    /// Blocks until the next event is available. An error here means the
    /// connection is gone.
    fn read_event(&mut self) -> io::Result<RawEvent>;
}

/// Enumerates and opens input devices. The seam that lets the session
/// run against scripted devices in tests.
pub trait Discovery {
    type Port: EventPort;
    fn scan(&self) -> Vec<PortInfo>;
    fn open(&self, info: &PortInfo) -> io::Result<Self::Port>;
}

/// Production backend over the kernel evdev interface.
#[derive(Debug, Default)]
pub struct EvdevBackend;

impl Discovery for EvdevBackend {
    type Port = EvdevPort;

    fn scan(&self) -> Vec<PortInfo> {
        evdev::enumerate()
            .map(|(path, device)| PortInfo {
                name: device.name().unwrap_or("unknown").to_string(),
                path,
            })
            .collect()
    }

    fn open(&self, info: &PortInfo) -> io::Result<EvdevPort> {
        let device = evdev::Device::open(&info.path)?;
        let name = device.name().unwrap_or("unknown").to_string();
        Ok(EvdevPort {
            name,
            device,
            queue: VecDeque::new(),
        })
    }
}

/// An open evdev device. The kernel hands events over in batches; they
/// are queued so the session still sees exactly one event per read.
pub struct EvdevPort {
    name: String,
    device: evdev::Device,
    queue: VecDeque<RawEvent>,
}

impl EventPort for EvdevPort {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_event(&mut self) -> io::Result<RawEvent> {
        loop {
            if let Some(event) = self.queue.pop_front() {
                return Ok(event);
            }
            let events = self.device.fetch_events()?;
            // SYN_REPORT carries code 0, which collides with ABS_X in
            // profile button maps; sync framing is dropped here.
            self.queue.extend(
                events
                    .filter(|ev| ev.event_type() != EventType::SYNCHRONIZATION)
                    .map(|ev| RawEvent {
                        code: ev.code(),
                        value: ev.value(),
                        is_axis: ev.event_type() == EventType::ABSOLUTE,
                    }),
            );
        }
    }
}
