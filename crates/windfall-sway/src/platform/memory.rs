//! In-memory window manager.
//!
//! Holds a workspace list and a tree, records every command it is sent, and
//! applies moves and kills to its own tree so the next query observes them
//! the way a real compositor would. As in sway, `move absolute position`
//! places the outer corner, so the reported content rect lands one title
//! bar lower.

use async_trait::async_trait;

use super::{Result, WindowManager};
use crate::command::{CommandOutcome, WmCommand};
use crate::tree::{Node, Workspace};

#[derive(Debug, Default)]
pub struct InMemoryWindowManager {
    pub workspaces: Vec<Workspace>,
    pub tree: Node,
    /// Every command received, in order.
    pub sent: Vec<WmCommand>,
}

impl InMemoryWindowManager {
    pub fn new(workspaces: Vec<Workspace>, tree: Node) -> Self {
        Self {
            workspaces,
            tree,
            sent: Vec::new(),
        }
    }

    /// Drain the recorded commands.
    pub fn take_sent(&mut self) -> Vec<WmCommand> {
        std::mem::take(&mut self.sent)
    }

    fn apply(&mut self, command: &WmCommand) -> CommandOutcome {
        let target = command.target();
        match command {
            WmCommand::MoveAbsolute { x, y, .. } => match self.tree.find_by_id_mut(target) {
                Some(node) => {
                    node.rect.x = *x;
                    node.rect.y = *y + node.deco_rect.height;
                    CommandOutcome::ok()
                }
                None => missing(target),
            },
            WmCommand::MoveToWorkspace { .. } => {
                if self.tree.find_by_id(target).is_some() {
                    CommandOutcome::ok()
                } else {
                    missing(target)
                }
            }
            WmCommand::Kill { .. } => match self.tree.remove_descendant(target) {
                Some(_) => CommandOutcome::ok(),
                None => missing(target),
            },
        }
    }
}

fn missing(target: windfall_common::WindowId) -> CommandOutcome {
    CommandOutcome {
        success: false,
        error: Some(format!("No matching node for con_id={target}")),
    }
}

#[async_trait]
impl WindowManager for InMemoryWindowManager {
    async fn workspaces(&mut self) -> Result<Vec<Workspace>> {
        Ok(self.workspaces.clone())
    }

    async fn tree(&mut self) -> Result<Node> {
        Ok(self.tree.clone())
    }

    async fn run_commands(&mut self, commands: &[WmCommand]) -> Result<Vec<CommandOutcome>> {
        let outcomes: Vec<CommandOutcome> = commands.iter().map(|c| self.apply(c)).collect();
        self.sent.extend_from_slice(commands);
        Ok(outcomes)
    }
}
