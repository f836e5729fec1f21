//! Workspace selection and IPC validation.

use crate::schema::WindfallConfig;

use super::helpers::{validate_non_empty, validate_range};

pub(crate) fn validate_workspace(errors: &mut Vec<String>, config: &WindfallConfig) {
    validate_non_empty(errors, "workspace.output", &config.workspace.output);
    validate_range(
        errors,
        "workspace.tick_rate",
        config.workspace.tick_rate,
        1,
        240,
    );
}

pub(crate) fn validate_ipc(errors: &mut Vec<String>, config: &WindfallConfig) {
    if config.ipc.timeout_ms == 0 {
        errors.push("ipc.timeout_ms must be positive".into());
    }
}
