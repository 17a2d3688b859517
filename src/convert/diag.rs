use thiserror::Error;

use crate::model::{Lane, NoteKind, Side};

/// A non-fatal anomaly met while converting.
///
/// Diagnostics never stop the conversion: the offending unit is dropped
/// (or, for discontinuities, kept) and the record lands on the
/// diagnostics list of the [`Conversion`](super::Conversion) result.
/// Each one is also mirrored to the log stream as it is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// Event channel has no entry in the kind table.
    #[error("unknown channel {channel} at tick {tick}, skipping event")]
    UnknownChannel { channel: u8, tick: i64 },

    /// Event pitch has no entry in the lane table.
    #[error("unknown pitch {pitch} at tick {tick}, skipping event")]
    UnknownPitch { pitch: u8, tick: i64 },

    /// A second note-on arrived while the same (lane, kind) slot was
    /// still open. The earlier start is discarded.
    #[error("overlapping {kind} on lane {lane} at tick {tick}, discarding old note")]
    OverlappingStart { lane: Lane, kind: NoteKind, tick: i64 },

    /// A note-off arrived with no matching open note-on.
    #[error("unpaired off event for {kind} on lane {lane} at tick {tick}, discarding event")]
    UnpairedStop { lane: Lane, kind: NoteKind, tick: i64 },

    /// A note-on was never closed before the stream ended.
    #[error("dangling {kind} on lane {lane} started at tick {tick} was never closed")]
    DanglingStart { lane: Lane, kind: NoteKind, tick: i64 },

    /// A paired note ended before it started.
    #[error("negative duration for {kind} on lane {lane} at tick {tick}, discarding note")]
    NegativeDuration { lane: Lane, kind: NoteKind, tick: i64 },

    /// A tap or flick note held for longer than an instant.
    #[error("{kind} note on lane {lane} at tick {tick} has nonzero duration, discarding note")]
    InstantWithDuration { lane: Lane, kind: NoteKind, tick: i64 },

    /// A slide-family note with nothing to hold.
    #[error("{kind} note on lane {lane} at tick {tick} has zero duration, discarding note")]
    SlideWithoutDuration { lane: Lane, kind: NoteKind, tick: i64 },

    /// The chain head's end does not touch the next slide note's start.
    /// The note is still emitted; only the gap is reported.
    #[error(
        "slide on pos {side} expected to continue from tick {expected_tick} \
         but starts at tick {tick}, continuing"
    )]
    SlideDiscontinuity {
        side: Side,
        expected_tick: i64,
        tick: i64,
    },

    /// A slide end arrived with no open chain on its side.
    #[error("slide end on pos {side} (lane {lane}) at tick {tick} is not within a slide, discarding note")]
    SlideEndWithoutChain { side: Side, lane: Lane, tick: i64 },

    /// A slide chain was still open when the timeline ended.
    #[error("pos {side} still has an open slide at end of chart")]
    DanglingChain { side: Side },
}
