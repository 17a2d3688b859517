use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two independent slide tracks that can be active at once.
/// Serializes as the `pos` field of a slide command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Returns all sides in order.
    pub fn all() -> &'static [Side] {
        &[Side::A, Side::B]
    }

    /// Returns the side index (0-based).
    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Playable column, numbered 1..7 in the output chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lane {
    Lane1,
    Lane2,
    Lane3,
    Lane4,
    Lane5,
    Lane6,
    Lane7,
}

impl Lane {
    /// Map a MIDI pitch to its lane. The charted octave runs high to
    /// low: pitch 36 is the rightmost lane. Pitches outside the table
    /// have no lane.
    pub fn from_pitch(pitch: u8) -> Option<Lane> {
        match pitch {
            36 => Some(Lane::Lane7),
            37 => Some(Lane::Lane6),
            38 => Some(Lane::Lane5),
            39 => Some(Lane::Lane4),
            40 => Some(Lane::Lane3),
            41 => Some(Lane::Lane2),
            42 => Some(Lane::Lane1),
            _ => None,
        }
    }

    /// Returns the lane number (1-based, as written to the chart).
    pub fn number(self) -> u8 {
        match self {
            Lane::Lane1 => 1,
            Lane::Lane2 => 2,
            Lane::Lane3 => 3,
            Lane::Lane4 => 4,
            Lane::Lane5 => 5,
            Lane::Lane6 => 6,
            Lane::Lane7 => 7,
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Kind of playable note, with the slide side resolved up front so
/// nothing downstream has to re-derive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NoteKind {
    Tap,
    Flick,
    SlideStart(Side),
    SlideTapEnd(Side),
    SlideFlickEnd(Side),
}

impl NoteKind {
    /// Map a MIDI channel to its note kind. Channels outside the table
    /// carry nothing playable.
    pub fn from_channel(channel: u8) -> Option<NoteKind> {
        match channel {
            0 => Some(NoteKind::SlideStart(Side::A)),
            1 => Some(NoteKind::SlideStart(Side::B)),
            4 => Some(NoteKind::Tap),
            5 => Some(NoteKind::SlideTapEnd(Side::A)),
            6 => Some(NoteKind::SlideTapEnd(Side::B)),
            8 => Some(NoteKind::Flick),
            9 => Some(NoteKind::SlideFlickEnd(Side::A)),
            10 => Some(NoteKind::SlideFlickEnd(Side::B)),
            _ => None,
        }
    }

    /// True for kinds hit at a single instant (zero duration).
    pub fn is_instant(self) -> bool {
        matches!(self, NoteKind::Tap | NoteKind::Flick)
    }

    /// True for the slide family (start and both end kinds).
    pub fn is_slide(self) -> bool {
        !self.is_instant()
    }

    /// The slide side, if this kind belongs to one.
    pub fn side(self) -> Option<Side> {
        match self {
            NoteKind::SlideStart(side)
            | NoteKind::SlideTapEnd(side)
            | NoteKind::SlideFlickEnd(side) => Some(side),
            NoteKind::Tap | NoteKind::Flick => None,
        }
    }
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteKind::Tap => write!(f, "tap"),
            NoteKind::Flick => write!(f, "flick"),
            NoteKind::SlideStart(side) => write!(f, "slide/{side}"),
            NoteKind::SlideTapEnd(side) => write!(f, "slideTap/{side}"),
            NoteKind::SlideFlickEnd(side) => write!(f, "slideFlick/{side}"),
        }
    }
}

/// A reconstructed note: one on/off pair from the event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub kind: NoteKind,
    pub lane: Lane,
    pub start_tick: i64,
    pub end_tick: i64,
    pub duration: i64,
}

impl Note {
    /// Create a note from a completed on/off pair.
    pub fn new(kind: NoteKind, lane: Lane, start_tick: i64, end_tick: i64) -> Self {
        Self {
            kind,
            lane,
            start_tick,
            end_tick,
            duration: end_tick - start_tick,
        }
    }
}
