use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Fixed conversion parameters.
///
/// These describe the song rather than the event stream: the stream
/// carries no tempo of its own, so the BPM and the chart's offset
/// against the music are supplied from the outside. The tick
/// resolution, by contrast, travels with the stream header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Tempo written to the leading BPM command.
    pub bpm: f64,
    /// Offset of the chart relative to the music, in beats. Positive
    /// means the chart begins later than the music.
    pub beat_offset: f64,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            bpm: 180.0,
            // 4 subdivision steps at 4 steps per beat
            beat_offset: 1.0,
        }
    }
}

impl ConvertConfig {
    /// Loads config from a JSON file.
    /// Returns the default config if the file doesn't exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves config as JSON to the given path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
