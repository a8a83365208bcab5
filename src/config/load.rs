use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load_from` reads an optional config file, then environment
/// variables (prefix `SONGBOOK__`) on top, and falls back to struct defaults.
impl Settings {
    /// Load settings from an explicit (optional) config file and the environment.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("SONGBOOK")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        let doc = &self.document;
        if doc.font_size <= 0.0 {
            return Err("document.font_size must be > 0".to_string());
        }
        if doc.font_size_small <= 0.0 {
            return Err("document.font_size_small must be > 0".to_string());
        }
        if doc.margin < 0.0 {
            return Err("document.margin must be >= 0".to_string());
        }
        let (w, h) = doc.size.dimensions();
        if doc.margin * 2.0 >= w.min(h) {
            return Err("document.margin leaves no printable area".to_string());
        }
        if self.listing.format.is_empty() {
            return Err("listing.format must not be empty".to_string());
        }
        if self.scores.enabled && self.scores.database.as_os_str().is_empty() {
            return Err("scores.database must be set when scores are enabled".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `SONGBOOK_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("SONGBOOK_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/songbook/config.toml`
/// or `~/.config/songbook/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("songbook").join("config.toml"))
}
