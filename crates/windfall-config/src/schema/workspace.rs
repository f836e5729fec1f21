//! Which output/workspace the arena follows and how fast it ticks.

use serde::{Deserialize, Serialize};

/// Workspace value that disables workspace-name filtering.
pub const ALL_WORKSPACES: &str = "all";

/// Workspace selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Output (monitor) name the arena is bound to.
    pub output: String,
    /// Workspace name, or `"all"` for whichever visible workspace is on the output.
    pub workspace: String,
    /// Only simulate while the workspace (or one of its windows) has focus.
    pub only_when_focused: bool,
    /// Reconciliation ticks per second (valid range: 1-240).
    pub tick_rate: u32,
}

impl WorkspaceConfig {
    /// The workspace name to match, if filtering is enabled.
    pub fn workspace_filter(&self) -> Option<&str> {
        if self.workspace.is_empty() || self.workspace == ALL_WORKSPACES {
            None
        } else {
            Some(&self.workspace)
        }
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            output: "eDP-1".into(),
            workspace: "9".into(),
            only_when_focused: true,
            tick_rate: 30,
        }
    }
}
