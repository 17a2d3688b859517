use std::collections::HashMap;

use tracing::warn;

use crate::model::{Lane, Note, NoteKind, RawEvent};

use super::diag::Diagnostic;

/// Rebuilds notes from the on/off event stream.
///
/// Off events carry no reference back to their on event, so identity is
/// recovered by key: in well-formed input, notes of the same kind on the
/// same lane never overlap, which makes (lane, kind) enough to match
/// each off against the open on. That exclusivity is a property of the
/// data, not enforced upstream, so violations are tolerated here rather
/// than assumed away.
pub struct EventPairer {
    /// Absolute tick time, accumulated from event deltas.
    clock: i64,
    /// Start tick of the open note per (lane, kind) slot.
    open: HashMap<(Lane, NoteKind), i64>,
    notes: Vec<Note>,
    diagnostics: Vec<Diagnostic>,
}

impl EventPairer {
    pub fn new() -> Self {
        Self {
            clock: 0,
            open: HashMap::new(),
            notes: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Feed one event, in stream order.
    pub fn feed(&mut self, event: RawEvent) {
        // the clock advances even when the event itself is dropped
        self.clock += i64::from(event.tick_delta);

        let Some(kind) = NoteKind::from_channel(event.channel) else {
            self.report(Diagnostic::UnknownChannel {
                channel: event.channel,
                tick: self.clock,
            });
            return;
        };
        let Some(lane) = Lane::from_pitch(event.pitch) else {
            self.report(Diagnostic::UnknownPitch {
                pitch: event.pitch,
                tick: self.clock,
            });
            return;
        };

        let key = (lane, kind);
        if event.is_start {
            if self.open.insert(key, self.clock).is_some() {
                self.report(Diagnostic::OverlappingStart {
                    lane,
                    kind,
                    tick: self.clock,
                });
            }
        } else {
            match self.open.remove(&key) {
                Some(start_tick) => {
                    self.notes.push(Note::new(kind, lane, start_tick, self.clock));
                }
                None => {
                    self.report(Diagnostic::UnpairedStop {
                        lane,
                        kind,
                        tick: self.clock,
                    });
                }
            }
        }
    }

    /// Close the stream: report anything left open and hand back the
    /// paired notes in completion order.
    pub fn finish(mut self) -> (Vec<Note>, Vec<Diagnostic>) {
        // map iteration order is arbitrary; report dangling starts in a
        // fixed order so two runs produce identical diagnostics
        let mut dangling: Vec<_> = self.open.drain().collect();
        dangling.sort_by_key(|&((lane, kind), tick)| (tick, lane, kind));
        for ((lane, kind), tick) in dangling {
            let diag = Diagnostic::DanglingStart { lane, kind, tick };
            warn!("{diag}");
            self.diagnostics.push(diag);
        }
        (self.notes, self.diagnostics)
    }

    fn report(&mut self, diag: Diagnostic) {
        warn!("{diag}");
        self.diagnostics.push(diag);
    }
}

impl Default for EventPairer {
    fn default() -> Self {
        Self::new()
    }
}
