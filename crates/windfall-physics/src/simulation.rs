//! The simulation context: one owner for everything the physics side of a
//! tick touches.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rapier2d::prelude::*;
use tracing::debug;
use windfall_common::{Pid, Rect, WindowId};
use windfall_config::schema::OutOfBoundsPolicy;

use crate::arena::Arena;
use crate::body::{BodyKind, WindowBody, WorkspaceSnapshot};
use crate::bounds::{ArenaExtent, BoundsAction};
use crate::contacts::{ContactEvent, ContactObserver};
use crate::frame::ArenaFrame;
use crate::gravity;
use crate::settings::SimulationSettings;
use crate::world::PhysicsWorld;
use crate::Result;

/// Where a dynamic window should be moved to: the global pixel position of
/// its outer top-left corner, title bar included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub id: WindowId,
    pub x: i32,
    pub y: i32,
}

/// A window that stopped being simulated this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedWindow {
    pub id: WindowId,
    pub pid: Option<Pid>,
}

/// What `sync` changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Unchanged,
    Moved,
    Resized,
    /// Fullscreen windows keep their body as-is.
    Skipped,
}

/// Per-window trace line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyStatus {
    pub id: WindowId,
    pub kind: BodyKind,
    pub center: Vector<Real>,
    pub velocity: Vector<Real>,
    pub x: i32,
    pub y: i32,
    pub mass: Real,
}

pub struct Simulation {
    pub(crate) settings: SimulationSettings,
    pub(crate) world: PhysicsWorld,
    pub(crate) arena: Arena,
    pub(crate) windows: BTreeMap<WindowId, WindowBody>,
    pub(crate) contacts: ContactObserver,
    pub(crate) rng: StdRng,
    pub(crate) removed: Vec<RemovedWindow>,
}

impl Simulation {
    pub fn new(settings: SimulationSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Deterministic spawn positions for a given seed.
    pub fn seeded(settings: SimulationSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: SimulationSettings, rng: StdRng) -> Self {
        let world = PhysicsWorld::new(
            settings.gravity,
            settings.velocity_iterations,
            settings.position_iterations,
        );
        Self {
            arena: Arena::new(settings.ceiling, settings.scale),
            contacts: ContactObserver::new(settings.min_contact_impulse),
            world,
            windows: BTreeMap::new(),
            rng,
            removed: Vec::new(),
            settings,
        }
    }

    pub fn frame(&self) -> Option<&ArenaFrame> {
        self.arena.frame()
    }

    pub fn resize_arena(&mut self, workspace: Rect) -> bool {
        self.arena.resize(&mut self.world, workspace)
    }

    pub fn window(&self, id: WindowId) -> Option<&WindowBody> {
        self.windows.get(&id)
    }

    pub fn windows(&self) -> impl Iterator<Item = &WindowBody> {
        self.windows.values()
    }

    pub fn tracked_ids(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.windows.keys().copied()
    }

    pub fn is_tracked(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    pub fn body_count(&self) -> usize {
        self.world.body_count()
    }

    /// Physics-space center of a tracked window's body.
    pub fn center(&self, id: WindowId) -> Option<Vector<Real>> {
        let record = self.windows.get(&id)?;
        self.world.body(record.handle).map(|b| *b.translation())
    }

    pub fn velocity(&self, id: WindowId) -> Option<Vector<Real>> {
        let record = self.windows.get(&id)?;
        self.world.body(record.handle).map(|b| *b.linvel())
    }

    /// Bring the tracked set in line with `snapshot`: destroy windows that
    /// vanished, sync the survivors, create the newcomers.
    pub fn reconcile(&mut self, snapshot: &WorkspaceSnapshot) -> Result<()> {
        let gone: Vec<_> = self
            .tracked_ids()
            .filter(|id| snapshot.get(*id).is_none())
            .collect();
        for id in gone {
            self.destroy(id)?;
        }
        for id in snapshot.ids() {
            if self.is_tracked(id) {
                self.sync(snapshot, id)?;
            } else {
                self.create(snapshot, id, false)?;
            }
        }
        Ok(())
    }

    /// Positions to command for every dynamic window. Each record takes on
    /// the content position the window will report once the move lands.
    pub fn placements(&mut self) -> Vec<Placement> {
        let Some(frame) = self.arena.frame().copied() else {
            return Vec::new();
        };
        let mut placements = Vec::new();
        for record in self.windows.values_mut() {
            if record.kind == BodyKind::Static {
                continue;
            }
            let Some(body) = self.world.body(record.handle) else {
                continue;
            };
            let (x, y) = frame.top_left_of(body.translation(), record.width, record.height);
            record.previous_x = record.x;
            record.previous_y = record.y;
            record.x = x;
            record.y = y + record.deco_height;
            placements.push(Placement { id: record.id, x, y });
        }
        placements
    }

    /// Apply the out-of-bounds policy and the discard rule.
    ///
    /// Out-of-bounds windows are killed or respawned according to policy.
    /// Independently, any window whose top edge is above the discard height
    /// is killed. A window is reported for killing at most once.
    pub fn enforce_bounds(&mut self, snapshot: &WorkspaceSnapshot) -> Result<Vec<BoundsAction>> {
        let Some(frame) = self.arena.frame().copied() else {
            return Ok(Vec::new());
        };
        let extent = ArenaExtent {
            width: frame.width_units(),
            ceiling: self.arena.ceiling(),
            discard_height: self.settings.discard_height,
            margin: self.settings.oob_margin,
        };
        let checks: Vec<_> = self
            .windows
            .values()
            .filter_map(|record| {
                let body = self.world.body(record.handle)?;
                let half = record.half_extents(self.settings.scale);
                Some((record.id, extent.check(record.kind, body.translation(), &half)))
            })
            .collect();

        let mut actions = Vec::new();
        for (id, check) in checks {
            if check.out_of_bounds {
                match self.settings.out_of_bounds {
                    OutOfBoundsPolicy::Close => {
                        debug!(%id, "window left the arena, closing");
                        actions.push(BoundsAction::Kill(id));
                    }
                    OutOfBoundsPolicy::Respawn => {
                        debug!(%id, "window left the arena, respawning");
                        self.respawn(snapshot, id)?;
                        actions.push(BoundsAction::Respawned(id));
                    }
                }
            }
            if check.above_discard && !actions.contains(&BoundsAction::Kill(id)) {
                debug!(%id, "window above discard height, closing");
                actions.push(BoundsAction::Kill(id));
            }
        }
        Ok(actions)
    }

    /// Apply attraction, advance by `dt` seconds and return this step's
    /// significant contacts.
    pub fn step(&mut self, dt: Real) -> Vec<ContactEvent> {
        gravity::apply(
            &mut self.world,
            self.settings.gravitational_constant,
            self.windows.values(),
        );
        self.world.step(dt, &self.contacts);
        let contacts = self.contacts.drain();
        for contact in &contacts {
            debug!(a = %contact.a, b = %contact.b, impulse = contact.impulse, "contact");
        }
        contacts
    }

    /// Windows destroyed since the last call.
    pub fn take_removed(&mut self) -> Vec<RemovedWindow> {
        std::mem::take(&mut self.removed)
    }

    pub fn status(&self) -> Vec<BodyStatus> {
        self.windows
            .values()
            .filter_map(|record| {
                let body = self.world.body(record.handle)?;
                Some(BodyStatus {
                    id: record.id,
                    kind: record.kind,
                    center: *body.translation(),
                    velocity: *body.linvel(),
                    x: record.x,
                    y: record.y,
                    mass: body.mass(),
                })
            })
            .collect()
    }
}
