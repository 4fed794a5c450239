//! Controller profile loading.
//!
//! A profile is a small YAML document describing one controller model:
//! which raw event codes map to which named inputs, the stick's full-scale
//! magnitude, and optionally the search term used to find the device:
//!
//! ```yaml
//! button_map:
//!   0: LEFT_STICK_X
//!   1: LEFT_STICK_Y
//!   305: A
//! joystick_max_value: 1280
//! device_search_term: Nintendo
//! ```
//!
//! A built-in Wii U Pro Controller profile is shipped as the default.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use drivepad_control::{ButtonMap, PadInput, DEFAULT_AXIS_MAX};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml: {0}")]
    Yaml(String),
    #[error("unknown input name: {0}")]
    UnknownInput(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProfile {
    pub button_map: HashMap<u16, String>,
    #[serde(default)]
    pub joystick_max_value: Option<f32>,
    #[serde(default)]
    pub device_search_term: Option<String>,
}

/// Parsed controller profile.
#[derive(Debug, Clone)]
pub struct Profile {
    pub button_map: ButtonMap,
    pub joystick_max_value: f32,
    pub device_search_term: Option<Box<str>>,
}

impl Profile {
    pub fn from_yaml_str(input: &str) -> Result<Self, ProfileError> {
        let raw: RawProfile =
            serde_yaml::from_str(input).map_err(|e| ProfileError::Yaml(e.to_string()))?;

        let mut button_map = ButtonMap::new();
        for (code, name) in raw.button_map {
            let input =
                PadInput::parse(&name).ok_or_else(|| ProfileError::UnknownInput(name.clone()))?;
            button_map.insert(code, input);
        }

        Ok(Self {
            button_map,
            joystick_max_value: raw.joystick_max_value.unwrap_or(DEFAULT_AXIS_MAX),
            device_search_term: raw.device_search_term.map(String::into_boxed_str),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, ProfileError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&input)
    }

    /// Built-in profile for the Wii U Pro Controller as exposed by the
    /// kernel's hid-wiimote driver.
    pub fn wiiu_pro() -> Self {
        let button_map = ButtonMap::from_iter([
            (0, PadInput::LeftStickX),
            (1, PadInput::LeftStickY),
            (3, PadInput::RightStickX),
            (4, PadInput::RightStickY),
            (304, PadInput::B),
            (305, PadInput::A),
            (307, PadInput::Y),
            (308, PadInput::X),
            (310, PadInput::LeftShoulder),
            (311, PadInput::RightShoulder),
            (312, PadInput::LeftTrigger),
            (313, PadInput::RightTrigger),
            (314, PadInput::Select),
            (315, PadInput::Start),
            (316, PadInput::Home),
            (317, PadInput::LeftStick),
            (318, PadInput::RightStick),
            (544, PadInput::PadUp),
            (545, PadInput::PadDown),
            (546, PadInput::PadLeft),
            (547, PadInput::PadRight),
        ]);
        Self {
            button_map,
            joystick_max_value: DEFAULT_AXIS_MAX,
            device_search_term: Some("Nintendo".into()),
        }
    }
}
