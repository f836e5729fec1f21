//! Turns simulation snapshots into volume commands.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::{debug, trace, warn};
use windfall_common::WindowId;

use crate::channel::{VolumeCommand, VolumeSink};
use crate::nodes::NodeMap;
use crate::pan::Levels;
use crate::snapshot::{AudioSnapshot, RemovedSource};
use crate::Result;

/// Last-sent levels per window plus the neutral-reset queue.
#[derive(Debug)]
pub struct AudioPipeline {
    param_index: u32,
    last_sent: HashMap<WindowId, Levels>,
    pending_resets: Vec<RemovedSource>,
}

impl AudioPipeline {
    pub fn new(param_index: u32) -> Self {
        Self {
            param_index,
            last_sent: HashMap::new(),
            pending_resets: Vec::new(),
        }
    }

    /// Queue a removed window for a neutral reset on the next tick.
    pub fn queue_removal(&mut self, removed: RemovedSource) {
        self.last_sent.remove(&removed.id);
        self.pending_resets.push(removed);
    }

    pub fn pending_resets(&self) -> usize {
        self.pending_resets.len()
    }

    /// Commands for one pipeline tick: neutral resets for queued removals
    /// first, then new levels for every window whose rounded levels changed.
    ///
    /// A window without mapped nodes is skipped and retried next tick.
    pub fn tick(&mut self, snapshot: &AudioSnapshot, nodes: &NodeMap) -> Vec<VolumeCommand> {
        let mut commands = Vec::new();
        let mut reset_pids = Vec::new();
        for removed in self.pending_resets.drain(..) {
            let node_ids = removed.pid.and_then(|pid| nodes.get(&pid));
            if node_ids.is_some_and(|ids| !ids.is_empty()) {
                reset_pids.extend(removed.pid);
            }
            for &node in node_ids.into_iter().flatten() {
                commands.push(VolumeCommand {
                    node,
                    param_index: self.param_index,
                    levels: Levels::NEUTRAL,
                });
            }
            trace!(id = %removed.id, "audio reset queued");
        }
        // A reset of a shared process also wiped the pan of its other windows.
        for source in &snapshot.sources {
            if source.pid.is_some_and(|pid| reset_pids.contains(&pid)) {
                self.last_sent.remove(&source.id);
            }
        }

        if snapshot.width <= 0.0 || snapshot.height <= 0.0 {
            return commands;
        }
        for source in &snapshot.sources {
            let levels = Levels::at(source.x, source.y, snapshot.width, snapshot.height);
            if self.last_sent.get(&source.id) == Some(&levels) {
                continue;
            }
            let Some(node_ids) = source.pid.and_then(|pid| nodes.get(&pid)) else {
                continue;
            };
            if node_ids.is_empty() {
                continue;
            }
            commands.extend(node_ids.iter().map(|&node| VolumeCommand {
                node,
                param_index: self.param_index,
                levels,
            }));
            self.last_sent.insert(source.id, levels);
        }

        self.last_sent
            .retain(|id, _| snapshot.sources.iter().any(|s| s.id == *id));
        commands
    }

    /// Drive the pipeline every `interval` until `shutdown` flips, then
    /// close the sink. The sink is closed on error exits too.
    pub async fn run<S: VolumeSink>(
        mut self,
        mut sink: S,
        interval: Duration,
        mut snapshots: watch::Receiver<AudioSnapshot>,
        nodes: watch::Receiver<NodeMap>,
        mut removals: mpsc::UnboundedReceiver<RemovedSource>,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<()> {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        let result = loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = shutdown.changed() => break Ok(()),
            }
            while let Ok(removed) = removals.try_recv() {
                self.queue_removal(removed);
            }
            let snapshot = snapshots.borrow_and_update().clone();
            let commands = {
                let nodes = nodes.borrow();
                self.tick(&snapshot, &nodes)
            };
            if commands.is_empty() {
                continue;
            }
            if let Err(e) = sink.send(&commands).await {
                break Err(e);
            }
        };

        if let Err(e) = sink.close().await {
            warn!(error = %e, "failed to close audio channel");
        }
        debug!("audio pipeline stopped");
        result
    }
}
