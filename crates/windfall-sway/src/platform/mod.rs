use async_trait::async_trait;
use windfall_common::errors::PlatformError;

use crate::command::{CommandOutcome, WmCommand};
use crate::tree::{Node, Workspace};

pub mod memory;
pub mod sway;

pub type Result<T> = std::result::Result<T, PlatformError>;

/// The window-manager surface the reconciliation loop consumes.
///
/// Commands are fire-and-forget: their effects are observed through the next
/// tick's queries, not through the reply.
#[async_trait]
pub trait WindowManager: Send {
    async fn workspaces(&mut self) -> Result<Vec<Workspace>>;
    async fn tree(&mut self) -> Result<Node>;
    async fn run_commands(&mut self, commands: &[WmCommand]) -> Result<Vec<CommandOutcome>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use windfall_common::{Rect, WindowId};

    fn workspace() -> Workspace {
        Workspace {
            id: WindowId(9),
            name: "9".into(),
            output: "eDP-1".into(),
            visible: true,
            focused: true,
            rect: Rect::new(0, 0, 1280, 800),
        }
    }

    async fn drive(wm: &mut dyn WindowManager) -> Result<usize> {
        let workspaces = wm.workspaces().await?;
        let tree = wm.tree().await?;
        let outcomes = wm
            .run_commands(&[WmCommand::Kill { id: WindowId(1) }])
            .await?;
        Ok(workspaces.len() + tree.nodes.len() + outcomes.len())
    }

    #[tokio::test]
    async fn trait_object_is_usable() {
        let mut wm = memory::InMemoryWindowManager::new(vec![workspace()], Node::default());
        assert_eq!(drive(&mut wm).await.unwrap(), 2);
    }
}
