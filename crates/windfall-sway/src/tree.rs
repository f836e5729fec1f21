//! Workspace list and container tree as reported by GET_WORKSPACES / GET_TREE.

use serde::{Deserialize, Serialize};
use windfall_common::{Pid, Rect, WindowId};

/// One entry of the GET_WORKSPACES reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    /// Container id of the workspace node in the tree.
    pub id: WindowId,
    pub name: String,
    pub output: String,
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub focused: bool,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Root,
    Output,
    Workspace,
    #[default]
    Con,
    FloatingCon,
    Dockarea,
    #[serde(other)]
    Other,
}

/// A container in the layout tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Node {
    pub id: WindowId,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub name: Option<String>,
    pub rect: Rect,
    /// Title bar, relative to the container.
    pub deco_rect: Rect,
    pub sticky: bool,
    pub marks: Vec<String>,
    /// 0 = none, 1 = workspace fullscreen, 2 = global fullscreen.
    pub fullscreen_mode: u8,
    pub pid: Option<Pid>,
    pub focused: bool,
    pub nodes: Vec<Node>,
    pub floating_nodes: Vec<Node>,
}

impl Node {
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen_mode != 0
    }

    /// Direct children, tiled first, then floating.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().chain(self.floating_nodes.iter())
    }

    /// Depth-first search for a container id, including `self`.
    pub fn find_by_id(&self, id: WindowId) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children().find_map(|child| child.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: WindowId) -> Option<&mut Node> {
        if self.id == id {
            return Some(self);
        }
        self.nodes
            .iter_mut()
            .chain(self.floating_nodes.iter_mut())
            .find_map(|child| child.find_by_id_mut(id))
    }

    /// The focused container at or below this node.
    pub fn find_focused(&self) -> Option<&Node> {
        if self.focused {
            return Some(self);
        }
        self.children().find_map(Node::find_focused)
    }

    /// Whether any container below this node is fullscreen.
    pub fn has_fullscreen_descendant(&self) -> bool {
        self.children()
            .any(|child| child.is_fullscreen() || child.has_fullscreen_descendant())
    }

    /// Floating windows of this workspace that may be simulated.
    pub fn floating_windows(&self) -> impl Iterator<Item = &Node> {
        self.floating_nodes.iter().filter(|n| !n.is_fullscreen())
    }

    /// Detach the container with `id` from anywhere below this node.
    pub fn remove_descendant(&mut self, id: WindowId) -> Option<Node> {
        if let Some(idx) = self.nodes.iter().position(|n| n.id == id) {
            return Some(self.nodes.remove(idx));
        }
        if let Some(idx) = self.floating_nodes.iter().position(|n| n.id == id) {
            return Some(self.floating_nodes.remove(idx));
        }
        self.nodes
            .iter_mut()
            .chain(self.floating_nodes.iter_mut())
            .find_map(|child| child.remove_descendant(id))
    }
}
