//! Window physics for windfall.
//!
//! Every tracked floating window owns exactly one rapier body inside an
//! arena sized to the active workspace. [`Simulation`] is the single context
//! object: it owns the physics world, the arena boundary, the window-body
//! map and the contact observer, and exposes the body lifecycle
//! (`create`/`sync`/`destroy`), the out-of-bounds policy and the step.

pub mod arena;
pub mod body;
pub mod bounds;
pub mod contacts;
pub mod frame;
pub mod gravity;
pub mod lifecycle;
pub mod settings;
pub mod simulation;
pub mod tag;
pub mod world;

pub use arena::Arena;
pub use body::{BodyKind, WindowBody, WindowGeometry, WorkspaceSnapshot};
pub use bounds::{ArenaExtent, BoundsAction, BoundsCheck};
pub use contacts::{ContactEvent, ContactObserver};
pub use frame::ArenaFrame;
pub use settings::SimulationSettings;
pub use simulation::{BodyStatus, Placement, RemovedWindow, Simulation, SyncOutcome};
pub use tag::BodyTag;
pub use world::PhysicsWorld;

pub type Result<T> = std::result::Result<T, windfall_common::SimulationError>;
