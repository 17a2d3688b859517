//! Converts decoded MIDI note events into a Bestdori-style chart: a
//! flat, time-ordered list of note commands headed by a tempo marker.
//!
//! The input is a MIDI decoder's output: an ordered list of timed
//! note-on/note-off events plus the header's tick resolution. The work
//! is in two coupled state machines, one pairing on events with off
//! events that carry no pairing identifier, the other re-linking the
//! reconstructed notes into slide chains with correct start/end flags.
//! See [`convert::convert`] for the pipeline entry point.

pub mod config;
pub mod convert;
pub mod error;
pub mod io;
pub mod model;

pub use config::ConvertConfig;
pub use convert::{Conversion, Diagnostic, convert};
pub use error::ChartError;
