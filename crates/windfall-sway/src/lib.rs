//! sway / i3 window-manager collaborator.
//!
//! The reconciliation loop only needs three queries and three commands from
//! the window manager; [`WindowManager`] is that surface. [`SwayConnection`]
//! speaks the i3 IPC protocol over the compositor's unix socket and
//! [`InMemoryWindowManager`] holds a tree in memory for tests and dry runs.

pub mod codec;
pub mod command;
pub mod platform;
pub mod tree;

pub use command::{CommandOutcome, WmCommand};
pub use platform::memory::InMemoryWindowManager;
pub use platform::sway::SwayConnection;
pub use platform::WindowManager;
pub use tree::{Node, NodeType, Workspace};
