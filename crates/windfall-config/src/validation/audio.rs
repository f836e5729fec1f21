//! Audio pipeline validation. Skipped entirely when audio is disabled.

use crate::schema::WindfallConfig;

use super::helpers::validate_non_empty;

pub(crate) fn validate_audio(errors: &mut Vec<String>, config: &WindfallConfig) {
    let audio = &config.audio;
    if !audio.enabled {
        return;
    }
    if audio.update_interval_ms == 0 {
        errors.push("audio.update_interval_ms must be positive".into());
    }
    if audio.fetch_interval_ms == 0 {
        errors.push("audio.fetch_interval_ms must be positive".into());
    }
    if audio.timeout_ms == 0 {
        errors.push("audio.timeout_ms must be positive".into());
    }
    validate_non_empty(errors, "audio.pw_cli", &audio.pw_cli);
    validate_non_empty(errors, "audio.pw_dump", &audio.pw_dump);
}
