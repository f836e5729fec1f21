//! Stereo placement of window audio.
//!
//! Each tracked window's body position is turned into a left/right gain
//! pair and written to the PipeWire nodes owned by the window's process.

pub mod channel;
pub mod nodes;
pub mod pan;
pub mod pipeline;
pub mod snapshot;

pub use channel::{MemorySink, PwCli, VolumeCommand, VolumeSink};
pub use nodes::{parse_pw_dump, NodeMap};
pub use pan::Levels;
pub use pipeline::AudioPipeline;
pub use snapshot::{AudioSnapshot, AudioSource, RemovedSource};

pub type Result<T> = std::result::Result<T, windfall_common::PlatformError>;
