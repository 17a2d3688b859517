// The conversion pipeline: pair on/off events into notes, validate
// durations, sort the timeline, encode chart commands.

mod diag;
mod encoder;
mod pairer;
mod validate;

pub use diag::Diagnostic;
pub use encoder::ChartEncoder;
pub use pairer::EventPairer;

use tracing::warn;

use crate::config::ConvertConfig;
use crate::model::{ChartCommand, EventStream, Note};

/// Full conversion result: the chart commands plus everything that
/// looked wrong on the way there.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub commands: Vec<ChartCommand>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert a decoded event stream into chart commands.
///
/// Anomalies in the stream never abort the conversion: the offending
/// event or note is dropped and recorded as a [`Diagnostic`], and the
/// output reflects the best-effort reconstruction of the rest. Two runs
/// over the same input produce identical output.
pub fn convert(stream: &EventStream, config: &ConvertConfig) -> Conversion {
    let mut pairer = EventPairer::new();
    for event in &stream.events {
        pairer.feed(*event);
    }
    let (paired, mut diagnostics) = pairer.finish();

    let mut notes: Vec<Note> = Vec::with_capacity(paired.len());
    for note in paired {
        match validate::check(&note) {
            Some(diag) => {
                warn!("{diag}");
                diagnostics.push(diag);
            }
            None => notes.push(note),
        }
    }

    // the pairer emits notes in completion order; the encoder needs
    // start order. The sort must be stable so that simultaneous starts
    // keep their completion order and chain checks stay reproducible.
    notes.sort_by_key(|note| note.start_tick);

    let mut encoder = ChartEncoder::new(stream.ticks_per_beat, config);
    for note in &notes {
        encoder.feed(note);
    }
    let (commands, encode_diags) = encoder.finish();
    diagnostics.extend(encode_diags);

    Conversion {
        commands,
        diagnostics,
    }
}
