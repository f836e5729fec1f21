//! Body creation, synchronization and destruction.

use rand::Rng;
use rapier2d::prelude::*;
use tracing::{debug, trace};
use windfall_common::{SimulationError, WindowId};

use crate::body::{volume_of, BodyKind, WindowBody, WorkspaceSnapshot};
use crate::simulation::{RemovedWindow, Simulation, SyncOutcome};
use crate::tag::BodyTag;
use crate::Result;

impl Simulation {
    /// Start simulating window `id` from `snapshot`.
    ///
    /// A dynamic window is dropped in from above the arena at a random
    /// horizontal position when `spawn_as_initial` is set or when it sits
    /// exactly at the configured spawn coordinate. Otherwise its body is
    /// placed where the window is, at rest.
    pub fn create(
        &mut self,
        snapshot: &WorkspaceSnapshot,
        id: WindowId,
        spawn_as_initial: bool,
    ) -> Result<()> {
        let geometry = snapshot.get(id).ok_or(SimulationError::UnknownWindow(id))?;
        let frame = *self.arena.frame().ok_or(SimulationError::ArenaNotSized)?;
        let outer = geometry.outer();
        let kind = geometry.kind(&self.settings.static_mark);
        let scale = self.settings.scale;

        let at_spawn = (geometry.rect.x, geometry.rect.y) == self.settings.spawn;
        let (center, velocity) = if kind == BodyKind::Dynamic && (spawn_as_initial || at_spawn) {
            let max_left = (frame.rect.width - outer.width).max(0);
            let left = self.rng.gen_range(0..=max_left);
            let above = frame.rect.height + outer.height + self.settings.spawn_height_padding;
            let (vx_limit, vy) = self.settings.spawn_velocity;
            let vx = if vx_limit > 0.0 {
                self.rng.gen_range(-vx_limit..vx_limit)
            } else {
                0.0
            };
            let center = vector![
                (left as Real + outer.width as Real / 2.0) * scale,
                above as Real * scale
            ];
            (center, vector![vx, vy])
        } else {
            (frame.center_of(outer), Vector::zeros())
        };

        if let Some(stale) = self.windows.remove(&id) {
            self.world.despawn(stale.handle);
        }
        let handle = self.spawn_body(id, kind, outer.width, outer.height, center, velocity);
        self.windows.insert(
            id,
            WindowBody {
                id,
                width: outer.width,
                height: outer.height,
                deco_height: geometry.deco_height,
                x: geometry.rect.x,
                y: geometry.rect.y,
                previous_x: geometry.rect.x,
                previous_y: geometry.rect.y,
                pid: geometry.pid,
                kind,
                handle,
                volume: volume_of(outer.width, outer.height, scale),
            },
        );
        debug!(%id, ?kind, x = center.x, y = center.y, "window body created");
        Ok(())
    }

    /// Fold the window manager's view of `id` into its body.
    ///
    /// A drag teleports the body and, for dynamic windows, sets a velocity
    /// proportional to the drag distance. A title bar change alone is not a
    /// drag. A size change rebuilds the body with the new shape.
    pub fn sync(&mut self, snapshot: &WorkspaceSnapshot, id: WindowId) -> Result<SyncOutcome> {
        let geometry = snapshot.get(id).ok_or(SimulationError::UnknownWindow(id))?;
        let frame = *self.arena.frame().ok_or(SimulationError::ArenaNotSized)?;
        let kind = geometry.kind(&self.settings.static_mark);
        let scale = self.settings.scale;
        let drag = self.settings.drag_scale;
        let record = self
            .windows
            .get_mut(&id)
            .ok_or(SimulationError::UntrackedWindow(id))?;

        if record.kind != kind {
            if let Some(body) = self.world.body_mut(record.handle) {
                body.set_body_type(kind.body_type(), true);
            }
            record.kind = kind;
        }
        if geometry.fullscreen {
            return Ok(SyncOutcome::Skipped);
        }
        record.pid = geometry.pid;

        let outer = geometry.outer();
        // A title bar appearing or vanishing shifts one of the two origins
        // but not both; only a change of both is the user dragging.
        let content_moved = (geometry.rect.x, geometry.rect.y) != (record.x, record.y);
        let outer_moved = (outer.x, outer.y) != (record.x, record.y - record.deco_height);
        let dragged = content_moved && outer_moved;
        let resized = (outer.width, outer.height) != (record.width, record.height);

        let center = frame.center_of(outer);
        let mut velocity = self
            .world
            .body(record.handle)
            .map(|b| *b.linvel())
            .unwrap_or_else(Vector::zeros);
        if dragged {
            if kind == BodyKind::Dynamic {
                velocity = vector![
                    (geometry.rect.x - record.x) as Real * drag * scale,
                    (record.y - geometry.rect.y) as Real * drag * scale
                ];
            }
            if let Some(body) = self.world.body_mut(record.handle) {
                body.set_translation(center, true);
                if kind == BodyKind::Dynamic {
                    body.set_linvel(velocity, true);
                }
            }
            record.previous_x = record.x;
            record.previous_y = record.y;
            trace!(%id, vx = velocity.x, vy = velocity.y, "window dragged");
        }
        record.x = geometry.rect.x;
        record.y = geometry.rect.y;
        record.deco_height = geometry.deco_height;
        if !resized {
            return Ok(if dragged {
                SyncOutcome::Moved
            } else {
                SyncOutcome::Unchanged
            });
        }

        let old = record.handle;
        record.width = outer.width;
        record.height = outer.height;
        record.volume = volume_of(outer.width, outer.height, scale);
        self.world.despawn(old);
        let handle = self.spawn_body(id, kind, outer.width, outer.height, center, velocity);
        if let Some(record) = self.windows.get_mut(&id) {
            record.handle = handle;
        }
        debug!(%id, width = outer.width, height = outer.height, "window body resized");
        Ok(SyncOutcome::Resized)
    }

    /// Stop simulating `id`. The removal is queued for the audio side.
    pub fn destroy(&mut self, id: WindowId) -> Result<WindowBody> {
        let record = self
            .windows
            .remove(&id)
            .ok_or(SimulationError::UntrackedWindow(id))?;
        self.world.despawn(record.handle);
        self.removed.push(RemovedWindow {
            id,
            pid: record.pid,
        });
        debug!(%id, "window body destroyed");
        Ok(record)
    }

    /// Drop `id` back in from above the arena. The new record keeps the
    /// last commanded position so the next sync does not read the respawn
    /// as a drag.
    pub fn respawn(&mut self, snapshot: &WorkspaceSnapshot, id: WindowId) -> Result<()> {
        let previous = self.destroy(id)?;
        self.create(snapshot, id, true)?;
        if let Some(record) = self.windows.get_mut(&id) {
            record.x = previous.x;
            record.y = previous.y;
            record.previous_x = previous.previous_x;
            record.previous_y = previous.previous_y;
        }
        Ok(())
    }

    fn spawn_body(
        &mut self,
        id: WindowId,
        kind: BodyKind,
        width: i32,
        height: i32,
        center: Vector<Real>,
        velocity: Vector<Real>,
    ) -> RigidBodyHandle {
        let scale = self.settings.scale;
        let body = RigidBodyBuilder::new(kind.body_type())
            .translation(center)
            .linvel(velocity)
            .lock_rotations()
            .user_data(BodyTag::Window(id).to_user_data())
            .build();
        let collider = ColliderBuilder::cuboid(
            width as Real * scale / 2.0,
            height as Real * scale / 2.0,
        )
        .restitution(self.settings.restitution)
        .restitution_combine_rule(CoefficientCombineRule::Max)
        .friction(self.settings.friction)
        .density(self.settings.density)
        .active_events(ActiveEvents::CONTACT_FORCE_EVENTS)
        .build();
        self.world.spawn(body, [collider])
    }
}
