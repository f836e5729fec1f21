use windfall_common::{Pid, WindowId};

/// A window that may be producing sound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioSource {
    pub id: WindowId,
    pub pid: Option<Pid>,
    /// Body center in physics units, floor at y = 0.
    pub x: f64,
    pub y: f64,
}

/// Immutable view of the simulation published once per reconciliation tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioSnapshot {
    /// Arena size in physics units.
    pub width: f64,
    pub height: f64,
    pub sources: Vec<AudioSource>,
}

/// A window that left the simulation and needs its nodes reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedSource {
    pub id: WindowId,
    pub pid: Option<Pid>,
}
