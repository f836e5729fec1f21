//! Conversions between the window manager's tree, the simulation and the
//! audio side.

use windfall_audio::{AudioSnapshot, AudioSource, RemovedSource};
use windfall_physics::{RemovedWindow, Simulation, WindowGeometry, WorkspaceSnapshot};
use windfall_sway::Node;

/// The simulatable windows of `workspace`.
pub fn workspace_snapshot(workspace: &Node, name: &str) -> WorkspaceSnapshot {
    WorkspaceSnapshot::new(name, workspace.floating_windows().map(geometry_of))
}

fn geometry_of(node: &Node) -> WindowGeometry {
    WindowGeometry {
        id: node.id,
        rect: node.rect,
        deco_height: node.deco_rect.height,
        sticky: node.sticky,
        marks: node.marks.clone(),
        fullscreen: node.is_fullscreen(),
        pid: node.pid,
    }
}

/// What the audio pipeline needs from the simulation.
pub fn audio_snapshot(sim: &Simulation) -> AudioSnapshot {
    let Some(frame) = sim.frame() else {
        return AudioSnapshot::default();
    };
    let sources = sim
        .windows()
        .filter_map(|window| {
            let center = sim.center(window.id)?;
            Some(AudioSource {
                id: window.id,
                pid: window.pid,
                x: f64::from(center.x),
                y: f64::from(center.y),
            })
        })
        .collect();
    AudioSnapshot {
        width: f64::from(frame.width_units()),
        height: f64::from(frame.height_units()),
        sources,
    }
}

pub fn removed_source(removed: RemovedWindow) -> RemovedSource {
    RemovedSource {
        id: removed.id,
        pid: removed.pid,
    }
}
