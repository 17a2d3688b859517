// Data models: decoder input events, reconstructed notes, chart output.

mod command;
mod event;
mod note;

pub use command::{ChartCommand, NoteCommand, SystemCommand};
pub use event::{EventStream, RawEvent};
pub use note::{Lane, Note, NoteKind, Side};
