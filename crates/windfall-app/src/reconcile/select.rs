//! Which workspace gets simulated.

use windfall_config::schema::WorkspaceConfig;
use windfall_sway::Workspace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSelector {
    pub output: String,
    /// `None` accepts any workspace name.
    pub name: Option<String>,
    pub only_when_focused: bool,
}

impl From<&WorkspaceConfig> for WorkspaceSelector {
    fn from(config: &WorkspaceConfig) -> Self {
        Self {
            output: config.output.clone(),
            name: config.workspace_filter().map(str::to_string),
            only_when_focused: config.only_when_focused,
        }
    }
}

impl WorkspaceSelector {
    /// Index of the first visible workspace on the target output whose
    /// name matches.
    pub fn select(&self, workspaces: &[Workspace]) -> Option<usize> {
        workspaces.iter().position(|ws| {
            ws.output == self.output
                && ws.visible
                && self.name.as_ref().map_or(true, |name| ws.name == *name)
        })
    }
}
