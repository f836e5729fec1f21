//! Window records and the geometry they are built from.

use std::collections::BTreeMap;

use rapier2d::prelude::*;
use windfall_common::{Pid, Rect, WindowId};

/// Whether physics drives the window or only collides with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Dynamic,
    /// Sticky or marked windows. Never moved by the simulation.
    Static,
}

impl BodyKind {
    pub fn body_type(self) -> RigidBodyType {
        match self {
            BodyKind::Dynamic => RigidBodyType::Dynamic,
            BodyKind::Static => RigidBodyType::Fixed,
        }
    }
}

/// A floating window as the window manager last reported it.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowGeometry {
    pub id: WindowId,
    /// Content rectangle in global pixels, title bar excluded.
    pub rect: Rect,
    /// Title bar height in pixels.
    pub deco_height: i32,
    pub sticky: bool,
    pub marks: Vec<String>,
    pub fullscreen: bool,
    pub pid: Option<Pid>,
}

impl WindowGeometry {
    /// The rectangle including the title bar.
    pub fn outer(&self) -> Rect {
        Rect::new(
            self.rect.x,
            self.rect.y - self.deco_height,
            self.rect.width,
            self.rect.height + self.deco_height,
        )
    }

    pub fn kind(&self, static_mark: &str) -> BodyKind {
        if self.sticky || self.marks.iter().any(|m| m == static_mark) {
            BodyKind::Static
        } else {
            BodyKind::Dynamic
        }
    }
}

/// The floating windows of the workspace being simulated, keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkspaceSnapshot {
    pub name: String,
    pub windows: BTreeMap<WindowId, WindowGeometry>,
}

impl WorkspaceSnapshot {
    pub fn new(name: impl Into<String>, windows: impl IntoIterator<Item = WindowGeometry>) -> Self {
        Self {
            name: name.into(),
            windows: windows.into_iter().map(|w| (w.id, w)).collect(),
        }
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowGeometry> {
        self.windows.get(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.windows.keys().copied()
    }
}

/// The simulation's view of one tracked window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowBody {
    pub id: WindowId,
    /// Outer size in pixels, title bar included.
    pub width: i32,
    pub height: i32,
    pub deco_height: i32,
    /// Content origin in global pixels: last reported or last commanded.
    pub x: i32,
    pub y: i32,
    pub previous_x: i32,
    pub previous_y: i32,
    pub pid: Option<Pid>,
    pub kind: BodyKind,
    pub handle: RigidBodyHandle,
    /// Mass proxy for the attraction pass: outer area in units².
    pub volume: Real,
}

impl WindowBody {
    pub fn outer(&self) -> Rect {
        Rect::new(
            self.x,
            self.y - self.deco_height,
            self.width,
            self.height,
        )
    }

    pub fn half_extents(&self, scale: Real) -> Vector<Real> {
        vector![
            self.width as Real * scale / 2.0,
            self.height as Real * scale / 2.0
        ]
    }
}

pub(crate) fn volume_of(width: i32, height: i32, scale: Real) -> Real {
    width as Real * scale * height as Real * scale
}
