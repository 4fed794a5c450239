use std::fmt;

/// One event as read from the device: an opaque code, the raw integer
/// value, and whether the kernel reported it on an absolute axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEvent {
    pub code: u16,
    pub value: i32,
    pub is_axis: bool,
}

/// Logical pad inputs this crate understands.
///
/// The set covers a full Wii U Pro style layout. Only a subset drives the
/// control state; the rest is still tracked in the last-seen map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PadInput {
    LeftStickX,
    LeftStickY,
    RightStickX,
    RightStickY,
    A,
    B,
    X,
    Y,
    LeftShoulder,
    RightShoulder,
    LeftTrigger,
    RightTrigger,
    Select,
    Start,
    Home,
    LeftStick,
    RightStick,
    PadUp,
    PadDown,
    PadLeft,
    PadRight,
}

impl PadInput {
    /// Parses a config-file input name. Accepts the canonical upper-case
    /// spelling plus a few common aliases.
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name.to_lowercase().as_str() {
            "left_stick_x" => PadInput::LeftStickX,
            "left_stick_y" => PadInput::LeftStickY,
            "right_stick_x" => PadInput::RightStickX,
            "right_stick_y" => PadInput::RightStickY,
            "a" => PadInput::A,
            "b" => PadInput::B,
            "x" => PadInput::X,
            "y" => PadInput::Y,
            "l" | "left_shoulder" => PadInput::LeftShoulder,
            "r" | "right_shoulder" => PadInput::RightShoulder,
            "zl" | "left_trigger" => PadInput::LeftTrigger,
            "zr" | "right_trigger" => PadInput::RightTrigger,
            "select" | "minus" => PadInput::Select,
            "start" | "plus" => PadInput::Start,
            "home" => PadInput::Home,
            "left_stick_press" | "left_stick" => PadInput::LeftStick,
            "right_stick_press" | "right_stick" => PadInput::RightStick,
            "pad_up" => PadInput::PadUp,
            "pad_down" => PadInput::PadDown,
            "pad_left" => PadInput::PadLeft,
            "pad_right" => PadInput::PadRight,
            _ => return None,
        })
    }

    /// Canonical name as it appears in config files and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            PadInput::LeftStickX => "LEFT_STICK_X",
            PadInput::LeftStickY => "LEFT_STICK_Y",
            PadInput::RightStickX => "RIGHT_STICK_X",
            PadInput::RightStickY => "RIGHT_STICK_Y",
            PadInput::A => "A",
            PadInput::B => "B",
            PadInput::X => "X",
            PadInput::Y => "Y",
            PadInput::LeftShoulder => "L",
            PadInput::RightShoulder => "R",
            PadInput::LeftTrigger => "ZL",
            PadInput::RightTrigger => "ZR",
            PadInput::Select => "SELECT",
            PadInput::Start => "START",
            PadInput::Home => "HOME",
            PadInput::LeftStick => "LEFT_STICK_PRESS",
            PadInput::RightStick => "RIGHT_STICK_PRESS",
            PadInput::PadUp => "PAD_UP",
            PadInput::PadDown => "PAD_DOWN",
            PadInput::PadLeft => "PAD_LEFT",
            PadInput::PadRight => "PAD_RIGHT",
        }
    }
}

impl fmt::Display for PadInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded event. `input` is `None` when the code has no mapping; the
/// raw code is kept so unmapped events can still be logged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadEvent {
    pub input: Option<PadInput>,
    pub code: u16,
    pub value: f32,
}
