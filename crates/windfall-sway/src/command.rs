//! Window-manager commands emitted by the reconciliation loop.

use std::fmt;

use serde::Deserialize;
use windfall_common::WindowId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WmCommand {
    MoveAbsolute { id: WindowId, x: i32, y: i32 },
    MoveToWorkspace { id: WindowId, workspace: String },
    Kill { id: WindowId },
}

impl WmCommand {
    pub fn target(&self) -> WindowId {
        match self {
            WmCommand::MoveAbsolute { id, .. }
            | WmCommand::MoveToWorkspace { id, .. }
            | WmCommand::Kill { id } => *id,
        }
    }
}

impl fmt::Display for WmCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WmCommand::MoveAbsolute { id, x, y } => {
                write!(f, "[con_id={id}] move absolute position {x} {y}")
            }
            WmCommand::MoveToWorkspace { id, workspace } => {
                let escaped = workspace.replace('\\', "\\\\").replace('"', "\\\"");
                write!(f, "[con_id={id}] move to workspace \"{escaped}\"")
            }
            WmCommand::Kill { id } => write!(f, "[con_id={id}] kill"),
        }
    }
}

/// Join commands into one RUN_COMMAND payload. sway resets criteria at `;`.
pub fn render_batch(commands: &[WmCommand]) -> String {
    commands
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// One element of the RUN_COMMAND reply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandOutcome {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl CommandOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }
}
