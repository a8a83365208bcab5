use std::path::PathBuf;

use tracing::warn;

use crate::config;

/// Values given on the command line; each one replaces its configured value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub songs_dir: Option<PathBuf>,
    pub job: Option<String>,
    pub format: Option<String>,
    pub sort: Option<Vec<String>>,
    pub output: Option<PathBuf>,
    pub score_db: Option<PathBuf>,
}

impl Overrides {
    pub fn apply(&self, settings: &mut config::Settings) {
        if let Some(dir) = &self.songs_dir {
            settings.library.path = dir.clone();
        }
        if let Some(job) = &self.job {
            settings.listing.job = job.clone();
        }
        if let Some(format) = &self.format {
            settings.listing.format = format.clone();
        }
        if let Some(sort) = &self.sort {
            settings.listing.sort = sort.clone();
        }
        if let Some(output) = &self.output {
            settings.document.output = output.clone();
        }
        if let Some(db) = &self.score_db {
            settings.scores.enabled = true;
            settings.scores.database = db.clone();
        }
    }
}

/// Load settings, falling back to defaults when the config is unreadable or
/// invalid, then apply command-line overrides.
pub fn load_settings(overrides: &Overrides) -> config::Settings {
    let config_path = overrides
        .config_path
        .clone()
        .or_else(config::resolve_config_path);

    let mut settings = match config::Settings::load_from(config_path) {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                warn!("invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            warn!("failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    };

    overrides.apply(&mut settings);
    settings
}
