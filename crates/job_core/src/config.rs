use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use tracing::warn;

pub const SETTINGS_FILE: &str = "job_board.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Filesystem path or `http(s)://` URL of the job payload.
    pub data_source: String,
    pub window_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_source: "./upwork_jobs.json".into(),
            window_title: "Job Board".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    data_source: Option<String>,
    window_title: Option<String>,
}

/// Defaults, then `job_board.toml` in the working directory, then
/// environment overrides. A broken settings file is logged and skipped.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    match load_settings_file(Path::new(SETTINGS_FILE)) {
        Ok(Some(file_cfg)) => file_cfg.apply(&mut settings),
        Ok(None) => {}
        Err(err) => warn!("ignoring {SETTINGS_FILE}: {err:#}"),
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings
}

fn load_settings_file(path: &Path) -> anyhow::Result<Option<SettingsFile>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read '{}'", path.display()))
        }
    };
    let file_cfg = toml::from_str::<SettingsFile>(&raw)
        .with_context(|| format!("failed to parse '{}'", path.display()))?;
    Ok(Some(file_cfg))
}

impl SettingsFile {
    fn apply(self, settings: &mut Settings) {
        if let Some(v) = self.data_source {
            settings.data_source = v;
        }
        if let Some(v) = self.window_title {
            settings.window_title = v;
        }
    }
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_empty("JOB_BOARD_DATA_SOURCE") {
        settings.data_source = v;
    }
    if let Some(v) = non_empty("APP__DATA_SOURCE") {
        settings.data_source = v;
    }

    if let Some(v) = non_empty("JOB_BOARD_WINDOW_TITLE") {
        settings.window_title = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
