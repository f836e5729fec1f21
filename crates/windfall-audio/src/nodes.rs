//! Which PipeWire nodes belong to which process.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tokio::process::Command;
use tokio::sync::watch;
use tracing::{debug, trace};
use windfall_common::{Pid, PlatformError};

use crate::Result;

const CLIENT_TYPE: &str = "PipeWire:Interface:Client";
const NODE_TYPE: &str = "PipeWire:Interface:Node";

/// Audio node ids per owning process.
pub type NodeMap = HashMap<Pid, Vec<u32>>;

#[derive(Debug, Deserialize)]
struct DumpObject {
    id: u32,
    #[serde(rename = "type")]
    object_type: String,
    #[serde(default)]
    info: Option<DumpInfo>,
}

#[derive(Debug, Deserialize)]
struct DumpInfo {
    #[serde(default)]
    props: HashMap<String, Value>,
}

impl DumpObject {
    fn prop(&self, key: &str) -> Option<u32> {
        let value = self.info.as_ref()?.props.get(key)?;
        match value {
            Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// Build the node map from `pw-dump` output.
///
/// A node belongs to its `application.process.id`, falling back to the
/// `pipewire.sec.pid` of the client that created it.
pub fn parse_pw_dump(json: &[u8]) -> Result<NodeMap> {
    let objects: Vec<DumpObject> = serde_json::from_slice(json)
        .map_err(|e| PlatformError::AudioError(format!("malformed pw-dump output: {e}")))?;

    let clients: HashMap<u32, u32> = objects
        .iter()
        .filter(|o| o.object_type == CLIENT_TYPE)
        .filter_map(|o| Some((o.id, o.prop("pipewire.sec.pid")?)))
        .collect();

    let mut map = NodeMap::new();
    for node in objects.iter().filter(|o| o.object_type == NODE_TYPE) {
        let pid = node
            .prop("application.process.id")
            .or_else(|| clients.get(&node.prop("client.id")?).copied());
        if let Some(pid) = pid {
            map.entry(Pid(pid)).or_default().push(node.id);
        }
    }
    Ok(map)
}

/// Run `pw_dump` once and parse its output.
pub async fn fetch(pw_dump: &str, timeout: Duration) -> Result<NodeMap> {
    let output = tokio::time::timeout(timeout, Command::new(pw_dump).kill_on_drop(true).output())
        .await
        .map_err(|_| PlatformError::Timeout(format!("{pw_dump} after {}ms", timeout.as_millis())))?
        .map_err(|e| PlatformError::AudioError(format!("failed to run {pw_dump}: {e}")))?;
    if !output.status.success() {
        return Err(PlatformError::AudioError(format!(
            "{pw_dump} exited with {}",
            output.status
        )));
    }
    parse_pw_dump(&output.stdout)
}

/// Refresh the node map every `interval` until `shutdown` flips.
pub async fn run_refresher(
    pw_dump: String,
    interval: Duration,
    timeout: Duration,
    nodes: watch::Sender<NodeMap>,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = shutdown.changed() => {
                debug!("node refresher stopping");
                return Ok(());
            }
        }
        let map = fetch(&pw_dump, timeout).await?;
        trace!(processes = map.len(), "audio nodes refreshed");
        nodes.send_replace(map);
    }
}
