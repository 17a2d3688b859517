use std::fs;
use std::path::Path;

use crate::error::ChartError;
use crate::model::{ChartCommand, EventStream};

/// Read a decoded event stream from a JSON file.
pub fn read_event_stream<P: AsRef<Path>>(path: P) -> Result<EventStream, ChartError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ChartError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Write chart commands to a file as a pretty-printed JSON array.
pub fn write_chart<P: AsRef<Path>>(path: P, commands: &[ChartCommand]) -> Result<(), ChartError> {
    let path = path.as_ref();
    let text = serde_json::to_string_pretty(commands)?;
    fs::write(path, text).map_err(|source| ChartError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
