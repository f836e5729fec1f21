pub mod errors;
pub mod types;

pub use errors::{ConfigError, PlatformError, SimulationError, WindfallError};
pub use types::{Pid, Rect, WindowId};

pub type Result<T> = std::result::Result<T, WindfallError>;
