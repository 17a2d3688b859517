use serde::{Deserialize, Serialize};

use super::note::Side;

/// One record of the output chart, in the chart format's JSON shape.
///
/// The `flick`, `start` and `end` flags are omitted from the JSON when
/// false; `start` and `end` are never both set on one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChartCommand {
    System(SystemCommand),
    Note(NoteCommand),
}

/// Chart-global commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd")]
pub enum SystemCommand {
    #[serde(rename = "BPM")]
    Bpm { beat: f64, bpm: f64 },
}

/// Playable note commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "note")]
pub enum NoteCommand {
    Single {
        lane: u8,
        beat: f64,
        #[serde(default, skip_serializing_if = "is_false")]
        flick: bool,
    },
    Slide {
        lane: u8,
        beat: f64,
        pos: Side,
        #[serde(default, skip_serializing_if = "is_false")]
        start: bool,
        #[serde(default, skip_serializing_if = "is_false")]
        end: bool,
        #[serde(default, skip_serializing_if = "is_false")]
        flick: bool,
    },
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ChartCommand {
    /// Beat position of this command.
    pub fn beat(&self) -> f64 {
        match self {
            ChartCommand::System(SystemCommand::Bpm { beat, .. }) => *beat,
            ChartCommand::Note(
                NoteCommand::Single { beat, .. } | NoteCommand::Slide { beat, .. },
            ) => *beat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bpm_command_shape() {
        let cmd = ChartCommand::System(SystemCommand::Bpm {
            beat: 0.0,
            bpm: 180.0,
        });
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"type": "System", "cmd": "BPM", "beat": 0.0, "bpm": 180.0})
        );
    }

    #[test]
    fn single_without_flick_omits_the_field() {
        let cmd = ChartCommand::Note(NoteCommand::Single {
            lane: 1,
            beat: 1.0,
            flick: false,
        });
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"type": "Note", "note": "Single", "lane": 1, "beat": 1.0})
        );
    }

    #[test]
    fn single_with_flick_carries_the_field() {
        let cmd = ChartCommand::Note(NoteCommand::Single {
            lane: 4,
            beat: 2.5,
            flick: true,
        });
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"type": "Note", "note": "Single", "lane": 4, "beat": 2.5, "flick": true})
        );
    }

    #[test]
    fn slide_start_carries_only_the_start_flag() {
        let cmd = ChartCommand::Note(NoteCommand::Slide {
            lane: 3,
            beat: 1.0,
            pos: Side::A,
            start: true,
            end: false,
            flick: false,
        });
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"type": "Note", "note": "Slide", "lane": 3, "beat": 1.0, "pos": "A", "start": true})
        );
    }

    #[test]
    fn slide_end_with_flick() {
        let cmd = ChartCommand::Note(NoteCommand::Slide {
            lane: 3,
            beat: 3.0,
            pos: Side::B,
            start: false,
            end: true,
            flick: true,
        });
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"type": "Note", "note": "Slide", "lane": 3, "beat": 3.0, "pos": "B", "end": true, "flick": true})
        );
    }

    #[test]
    fn commands_round_trip_through_json() {
        let commands = vec![
            ChartCommand::System(SystemCommand::Bpm {
                beat: 0.0,
                bpm: 180.0,
            }),
            ChartCommand::Note(NoteCommand::Single {
                lane: 2,
                beat: 1.0,
                flick: false,
            }),
            ChartCommand::Note(NoteCommand::Slide {
                lane: 5,
                beat: 2.0,
                pos: Side::B,
                start: true,
                end: false,
                flick: false,
            }),
        ];
        let text = serde_json::to_string(&commands).unwrap();
        let parsed: Vec<ChartCommand> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, commands);
    }
}
