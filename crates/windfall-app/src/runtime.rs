//! Wiring: connect to the window manager, start the audio tasks and run the
//! reconciliation loop until a signal or a fatal error.

use std::time::Duration;

use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use windfall_audio::{nodes, AudioPipeline, AudioSnapshot, NodeMap, PwCli};
use windfall_common::WindfallError;
use windfall_config::WindfallConfig;
use windfall_physics::{Simulation, SimulationSettings};
use windfall_sway::SwayConnection;

use crate::reconcile::{AudioLink, Reconciler, WorkspaceSelector};

type Task = Result<(), WindfallError>;

fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Start the audio side: the node refresher and the volume pipeline.
fn spawn_audio(
    config: &WindfallConfig,
    tasks: &mut JoinSet<Task>,
    shutdown: &watch::Receiver<bool>,
) -> Result<AudioLink, WindfallError> {
    let audio = &config.audio;
    let timeout = millis(audio.timeout_ms);
    let sink = PwCli::spawn(&audio.pw_cli, timeout)?;

    let (snapshot_tx, snapshot_rx) = watch::channel(AudioSnapshot::default());
    let (removal_tx, removal_rx) = mpsc::unbounded_channel();
    let (nodes_tx, nodes_rx) = watch::channel(NodeMap::new());

    let refresher = nodes::run_refresher(
        audio.pw_dump.clone(),
        millis(audio.fetch_interval_ms),
        timeout,
        nodes_tx,
        shutdown.clone(),
    );
    tasks.spawn(async move { refresher.await.map_err(WindfallError::from) });

    let pipeline = AudioPipeline::new(audio.param_index).run(
        sink,
        millis(audio.update_interval_ms),
        snapshot_rx,
        nodes_rx,
        removal_rx,
        shutdown.clone(),
    );
    tasks.spawn(async move { pipeline.await.map_err(WindfallError::from) });

    info!(
        pw_cli = %audio.pw_cli,
        update_ms = audio.update_interval_ms,
        "audio panning enabled"
    );
    Ok(AudioLink {
        snapshots: snapshot_tx,
        removals: removal_tx,
    })
}

/// Resolves on SIGINT or SIGTERM.
async fn termination() -> Result<(), WindfallError> {
    let mut term = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result?,
        _ = term.recv() => {}
    }
    Ok(())
}

pub async fn run(
    config: WindfallConfig,
    seed: Option<u64>,
    audio_enabled: bool,
) -> Result<(), WindfallError> {
    let wm = SwayConnection::connect(config.ipc.socket.as_deref(), millis(config.ipc.timeout_ms))
        .await?;

    let settings = SimulationSettings::from(&config);
    let sim = match seed {
        Some(seed) => Simulation::seeded(settings, seed),
        None => Simulation::new(settings),
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut tasks = JoinSet::new();

    let audio = if audio_enabled {
        Some(spawn_audio(&config, &mut tasks, &shutdown_rx)?)
    } else {
        info!("audio panning disabled");
        None
    };

    let reconciler = Reconciler::new(
        wm,
        sim,
        WorkspaceSelector::from(&config.workspace),
        audio,
    );
    tasks.spawn(reconciler.run(config.workspace.tick_rate, shutdown_rx));
    info!(
        output = %config.workspace.output,
        workspace = %config.workspace.workspace,
        tick_rate = config.workspace.tick_rate,
        "simulation running"
    );

    let mut result = tokio::select! {
        outcome = termination() => {
            info!("termination requested");
            outcome
        }
        Some(joined) = tasks.join_next() => flatten(joined),
    };

    let _ = shutdown_tx.send(true);
    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = flatten(joined) {
            if result.is_ok() {
                result = Err(e);
            } else {
                warn!(error = %e, "task failed during shutdown");
            }
        }
    }
    debug!("all tasks stopped");
    result
}

fn flatten(joined: Result<Task, tokio::task::JoinError>) -> Task {
    joined.map_err(|e| WindfallError::Other(format!("task panicked: {e}")))?
}
