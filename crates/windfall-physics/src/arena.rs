//! The walls that keep windows on their workspace.

use rapier2d::prelude::*;
use tracing::debug;
use windfall_common::Rect;

use crate::frame::ArenaFrame;
use crate::tag::BodyTag;
use crate::world::PhysicsWorld;

/// A single fixed body with four edge segments: left wall, right wall,
/// floor and ceiling. Rebuilt whenever the workspace geometry changes.
pub struct Arena {
    ceiling: Real,
    scale: Real,
    frame: Option<ArenaFrame>,
    boundary: Option<RigidBodyHandle>,
}

impl Arena {
    pub fn new(ceiling: Real, scale: Real) -> Self {
        Self {
            ceiling,
            scale,
            frame: None,
            boundary: None,
        }
    }

    /// The frame of the last `resize`, if there was one.
    pub fn frame(&self) -> Option<&ArenaFrame> {
        self.frame.as_ref()
    }

    pub fn ceiling(&self) -> Real {
        self.ceiling
    }

    pub fn boundary(&self) -> Option<RigidBodyHandle> {
        self.boundary
    }

    /// Size the arena to `workspace` (global pixels). A no-op when the
    /// geometry is unchanged; otherwise the old walls are replaced.
    /// Returns whether the walls were rebuilt.
    pub fn resize(&mut self, world: &mut PhysicsWorld, workspace: Rect) -> bool {
        if self.frame.is_some_and(|frame| frame.rect == workspace) {
            return false;
        }
        if let Some(old) = self.boundary.take() {
            world.despawn(old);
        }

        let frame = ArenaFrame::new(workspace, self.scale);
        let width = frame.width_units();
        let height = self.ceiling;
        let corners = [
            point![0.0, 0.0],
            point![width, 0.0],
            point![width, height],
            point![0.0, height],
        ];
        let edges = (0..corners.len())
            .map(|i| ColliderBuilder::segment(corners[i], corners[(i + 1) % corners.len()]).build());

        let body = RigidBodyBuilder::fixed()
            .user_data(BodyTag::Boundary.to_user_data())
            .build();
        self.boundary = Some(world.spawn(body, edges));
        self.frame = Some(frame);
        debug!(
            width = workspace.width,
            height = workspace.height,
            x = workspace.x,
            y = workspace.y,
            "arena resized"
        );
        true
    }
}
