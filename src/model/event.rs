use serde::{Deserialize, Serialize};

/// A single decoded note-on/note-off event, as delivered by the MIDI
/// decoder. Times are relative: each event carries the tick delta from
/// the previous event in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Ticks since the previous event.
    pub tick_delta: u32,
    /// True for note-on, false for note-off.
    pub is_start: bool,
    /// MIDI channel (0..15); selects the note kind.
    pub channel: u8,
    /// MIDI pitch; selects the lane.
    pub pitch: u8,
}

impl RawEvent {
    /// Create a note-on event.
    pub fn on(tick_delta: u32, channel: u8, pitch: u8) -> Self {
        Self {
            tick_delta,
            is_start: true,
            channel,
            pitch,
        }
    }

    /// Create a note-off event.
    pub fn off(tick_delta: u32, channel: u8, pitch: u8) -> Self {
        Self {
            tick_delta,
            is_start: false,
            channel,
            pitch,
        }
    }
}

/// The decoder's full output: the stream header's tick resolution plus
/// the ordered event list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStream {
    /// Ticks per beat, from the stream header.
    pub ticks_per_beat: u32,
    pub events: Vec<RawEvent>,
}
