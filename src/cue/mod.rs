//! Disguise cue table handling and cue list conversion

pub mod eos;
pub mod number;
pub mod table;

pub use eos::{extract_cues, write_eos_csv, CueListFormat, CueSelectMode, LxCue};
pub use number::DmxCueNumber;
pub use table::{CueTable, CueTableEntry};
