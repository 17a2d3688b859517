use tracing::warn;

use crate::config::ConvertConfig;
use crate::model::{ChartCommand, Note, NoteCommand, NoteKind, Side, SystemCommand};

use super::diag::Diagnostic;

/// Walks the time-ordered notes and writes chart commands, linking the
/// slide notes on each side into chains.
///
/// A slide chain is opened by the first slide note on a free side and
/// closed by a slide-end note; consecutive notes of one chain must be
/// adjacent in time (the previous note's end tick is the next note's
/// start tick). The source data only distinguishes slide starts and
/// slide ends, so a slide note on an occupied side replaces the chain
/// head and is emitted with neither flag set.
pub struct ChartEncoder<'a> {
    config: &'a ConvertConfig,
    ticks_per_beat: u32,
    /// Most recently emitted note of the open chain per side, indexed
    /// by [`Side::index`]. Only its end tick is consulted.
    chains: [Option<Note>; 2],
    commands: Vec<ChartCommand>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> ChartEncoder<'a> {
    /// Create an encoder. The leading BPM command is written up front.
    pub fn new(ticks_per_beat: u32, config: &'a ConvertConfig) -> Self {
        let commands = vec![ChartCommand::System(SystemCommand::Bpm {
            beat: 0.0,
            bpm: config.bpm,
        })];
        Self {
            config,
            ticks_per_beat,
            chains: [None, None],
            commands,
            diagnostics: Vec::new(),
        }
    }

    /// Feed one note, in ascending start-tick order.
    pub fn feed(&mut self, note: &Note) {
        let lane = note.lane.number();
        let beat = self.beat_at(note.start_tick);
        match note.kind {
            NoteKind::Tap => self.push(NoteCommand::Single {
                lane,
                beat,
                flick: false,
            }),
            NoteKind::Flick => self.push(NoteCommand::Single {
                lane,
                beat,
                flick: true,
            }),
            NoteKind::SlideStart(side) => {
                let start = self.chains[side.index()].is_none();
                if let Some(head) = self.chains[side.index()] {
                    self.check_continuity(side, &head, note);
                }
                self.push(NoteCommand::Slide {
                    lane,
                    beat,
                    pos: side,
                    start,
                    end: false,
                    flick: false,
                });
                self.chains[side.index()] = Some(*note);
            }
            NoteKind::SlideTapEnd(side) | NoteKind::SlideFlickEnd(side) => {
                let flick = matches!(note.kind, NoteKind::SlideFlickEnd(_));
                let Some(head) = self.chains[side.index()] else {
                    self.report(Diagnostic::SlideEndWithoutChain {
                        side,
                        lane: note.lane,
                        tick: note.start_tick,
                    });
                    return;
                };
                self.check_continuity(side, &head, note);
                self.push(NoteCommand::Slide {
                    lane,
                    beat,
                    pos: side,
                    start: false,
                    end: true,
                    flick,
                });
                self.chains[side.index()] = None;
            }
        }
    }

    /// Close the timeline: report chains that never saw their end note
    /// and hand back the commands.
    pub fn finish(mut self) -> (Vec<ChartCommand>, Vec<Diagnostic>) {
        for &side in Side::all() {
            if self.chains[side.index()].is_some() {
                self.report(Diagnostic::DanglingChain { side });
            }
        }
        (self.commands, self.diagnostics)
    }

    fn beat_at(&self, tick: i64) -> f64 {
        tick as f64 / f64::from(self.ticks_per_beat) + self.config.beat_offset
    }

    fn check_continuity(&mut self, side: Side, head: &Note, note: &Note) {
        if head.end_tick != note.start_tick {
            self.report(Diagnostic::SlideDiscontinuity {
                side,
                expected_tick: head.end_tick,
                tick: note.start_tick,
            });
        }
    }

    fn push(&mut self, command: NoteCommand) {
        self.commands.push(ChartCommand::Note(command));
    }

    fn report(&mut self, diag: Diagnostic) {
        warn!("{diag}");
        self.diagnostics.push(diag);
    }
}
