//! The reconciliation loop.
//!
//! Each tick reads the window manager's workspaces and tree, brings the
//! simulation in line with the selected workspace, sends one command batch
//! placing every dynamic window where its body is, applies the
//! out-of-bounds policy, steps the physics and publishes what the audio
//! pipeline needs.

mod pacing;
mod select;
mod snapshot;

use tokio::sync::{mpsc, watch};
use tracing::{debug, trace, warn};
use windfall_audio::{AudioSnapshot, RemovedSource};
use windfall_common::WindfallError;
use windfall_physics::{BoundsAction, Simulation};
use windfall_sway::{WindowManager, WmCommand};

pub use pacing::Pacer;
pub use select::WorkspaceSelector;

/// Why a tick left the simulation untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idle {
    /// No visible workspace on the target output matched.
    NoWorkspace,
    /// The selected workspace has no focused container.
    Unfocused,
    /// Something on the workspace is fullscreen.
    Fullscreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle(Idle),
    Simulated { windows: usize, commands: usize },
}

/// Channels to the audio pipeline.
pub struct AudioLink {
    pub snapshots: watch::Sender<AudioSnapshot>,
    pub removals: mpsc::UnboundedSender<RemovedSource>,
}

pub struct Reconciler<W> {
    wm: W,
    sim: Simulation,
    selector: WorkspaceSelector,
    audio: Option<AudioLink>,
}

impl<W: WindowManager> Reconciler<W> {
    pub fn new(
        wm: W,
        sim: Simulation,
        selector: WorkspaceSelector,
        audio: Option<AudioLink>,
    ) -> Self {
        Self {
            wm,
            sim,
            selector,
            audio,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn window_manager(&mut self) -> &mut W {
        &mut self.wm
    }

    /// Run one tick simulating `dt` seconds.
    pub async fn tick(&mut self, dt: f32) -> Result<TickOutcome, WindfallError> {
        let workspaces = self.wm.workspaces().await?;
        let selected = self.selector.select(&workspaces);
        let visited = selected.map_or(workspaces.len(), |index| index + 1);
        for workspace in &workspaces[..visited] {
            self.sim.resize_arena(workspace.rect);
        }
        let Some(workspace) = selected.map(|index| &workspaces[index]) else {
            return Ok(TickOutcome::Idle(Idle::NoWorkspace));
        };

        let tree = self.wm.tree().await?;
        let Some(node) = tree.find_by_id(workspace.id) else {
            return Ok(TickOutcome::Idle(Idle::NoWorkspace));
        };
        if self.selector.only_when_focused && !workspace.focused && node.find_focused().is_none() {
            return Ok(TickOutcome::Idle(Idle::Unfocused));
        }
        if node.has_fullscreen_descendant() {
            return Ok(TickOutcome::Idle(Idle::Fullscreen));
        }

        let snapshot = snapshot::workspace_snapshot(node, &workspace.name);
        self.sim.reconcile(&snapshot)?;

        let mut commands = Vec::new();
        for placement in self.sim.placements() {
            commands.push(WmCommand::MoveAbsolute {
                id: placement.id,
                x: placement.x,
                y: placement.y,
            });
            commands.push(WmCommand::MoveToWorkspace {
                id: placement.id,
                workspace: workspace.name.clone(),
            });
        }
        for action in self.sim.enforce_bounds(&snapshot)? {
            if let BoundsAction::Kill(id) = action {
                commands.push(WmCommand::Kill { id });
            }
        }

        let contacts = self.sim.step(dt);
        for status in self.sim.status() {
            trace!(
                id = %status.id,
                x = status.center.x,
                y = status.center.y,
                wm_x = status.x,
                wm_y = status.y,
                mass = status.mass,
                "body"
            );
        }
        self.publish();

        let outcomes = self.wm.run_commands(&commands).await?;
        for (command, outcome) in commands.iter().zip(&outcomes) {
            if !outcome.success {
                warn!(
                    %command,
                    error = outcome.error.as_deref().unwrap_or("unknown"),
                    "window manager rejected command"
                );
            }
        }

        let windows = snapshot.windows.len();
        debug!(windows, commands = commands.len(), contacts = contacts.len(), "tick");
        Ok(TickOutcome::Simulated {
            windows,
            commands: commands.len(),
        })
    }

    fn publish(&mut self) {
        let removed = self.sim.take_removed();
        let Some(audio) = &self.audio else {
            return;
        };
        for window in removed {
            if let Err(e) = audio.removals.send(snapshot::removed_source(window)) {
                warn!(id = %e.0.id, "audio pipeline gone, removal dropped");
            }
        }
        audio
            .snapshots
            .send_replace(snapshot::audio_snapshot(&self.sim));
    }

    /// Tick at `tick_rate` Hz until `shutdown` flips or a tick fails.
    pub async fn run(
        mut self,
        tick_rate: u32,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<(), WindfallError> {
        let mut pacer = Pacer::new(tick_rate);
        debug!(period_ms = pacer.period().as_millis() as u64, "reconciliation loop started");
        let mut idle = None;
        loop {
            tokio::select! {
                dt = pacer.wait() => {
                    let now = match self.tick(dt).await? {
                        TickOutcome::Idle(reason) => Some(reason),
                        TickOutcome::Simulated { .. } => None,
                    };
                    if now != idle {
                        debug!(idle = ?now, "simulation state changed");
                        idle = now;
                    }
                }
                _ = shutdown.changed() => {
                    debug!("reconciliation loop stopping");
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
