use ahash::AHashMap;

use crate::input::{PadEvent, PadInput, RawEvent};

/// Mapping from raw event codes to logical pad inputs.
pub type ButtonMap = AHashMap<u16, PadInput>;

/// Default full-scale magnitude for stick axes (Wii U Pro reports
/// roughly -1280..=1280).
pub const DEFAULT_AXIS_MAX: f32 = 1280.0;

/// Translates raw device events into named, normalized pad events.
///
/// Axis values are divided by the configured maximum so sticks land in
/// roughly [-1.0, 1.0]; button values pass through untouched. Codes with
/// no mapping decode to an event without an input name. That is expected
/// for events the profile does not care about, so it is not an error.
#[derive(Debug, Clone)]
pub struct Decoder {
    map: ButtonMap,
    axis_max: f32,
}

impl Decoder {
    pub fn new(map: ButtonMap, axis_max: f32) -> Self {
        Self { map, axis_max }
    }

    pub fn decode(&self, raw: RawEvent) -> PadEvent {
        let input = self.map.get(&raw.code).copied();
        #[allow(clippy::cast_precision_loss)]
        let mut value = raw.value as f32;
        if raw.is_axis {
            value /= self.axis_max;
        }
        PadEvent {
            input,
            code: raw.code,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoder() -> Decoder {
        let mut map = ButtonMap::new();
        map.insert(0, PadInput::LeftStickX);
        map.insert(305, PadInput::A);
        Decoder::new(map, DEFAULT_AXIS_MAX)
    }

    #[test]
    fn axis_values_are_normalized() {
        let event = decoder().decode(RawEvent {
            code: 0,
            value: 640,
            is_axis: true,
        });
        assert_eq!(event.input, Some(PadInput::LeftStickX));
        assert!((event.value - 0.5).abs() < 1e-6);
    }

    #[test]
    fn button_values_pass_through() {
        let event = decoder().decode(RawEvent {
            code: 305,
            value: 1,
            is_axis: false,
        });
        assert_eq!(event.input, Some(PadInput::A));
        assert!((event.value - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn unmapped_codes_keep_their_raw_code() {
        let event = decoder().decode(RawEvent {
            code: 9999,
            value: 1,
            is_axis: false,
        });
        assert_eq!(event.input, None);
        assert_eq!(event.code, 9999);
    }
}
