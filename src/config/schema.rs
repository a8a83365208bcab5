use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level settings for a listing run, loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/songbook/config.toml` or `~/.config/songbook/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line overrides
/// 2) Environment variables (prefix `SONGBOOK__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub document: DocumentSettings,
    pub library: LibrarySettings,
    pub listing: ListingSettings,
    pub scores: ScoreSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DocumentSettings {
    /// Where the PDF is written.
    pub output: PathBuf,
    /// Page margin on every side (points).
    pub margin: f32,
    pub size: PageSize,
    pub orientation: Orientation,
    /// Default font size (points).
    pub font_size: f32,
    /// Font size used for values longer than `too_long`.
    pub font_size_small: f32,
    /// Values with more characters than this use `font_size_small`.
    pub too_long: usize,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("songs.pdf"),
            margin: 25.0,
            size: PageSize::A4,
            orientation: Orientation::Landscape,
            font_size: 12.0,
            font_size_small: 10.0,
            too_long: 20,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum PageSize {
    #[serde(alias = "a3")]
    A3,
    #[serde(alias = "a4")]
    A4,
    #[serde(alias = "a5")]
    A5,
    #[serde(alias = "letter", alias = "LETTER")]
    Letter,
    #[serde(alias = "legal", alias = "LEGAL")]
    Legal,
}

impl PageSize {
    /// Portrait width and height in points.
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            PageSize::A3 => (841.89, 1190.55),
            PageSize::A4 => (595.28, 841.89),
            PageSize::A5 => (419.53, 595.28),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Root of the song directory tree.
    pub path: PathBuf,
    /// File extensions treated as song descriptors (case-sensitive, without dot).
    pub extensions: Vec<String>,
    /// Filename suffix (before the extension) of the alternate multi-track variant.
    pub multi_marker: String,
    /// Whether to descend into symlinked directories during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("songs"),
            extensions: vec!["txt".into()],
            multi_marker: "[MULTI]".to_string(),
            follow_links: false,
            include_hidden: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListingSettings {
    /// Per-song format string, `.`-separated directives.
    ///
    /// Example: "l.x - .a.x - .t" -> "English - Frank Sinatra - Fly me to the moon"
    pub format: String,
    /// Sort keys applied in order; the last one dominates.
    ///
    /// Example: ["a", "l"] -> by language, artists ordered within each language
    pub sort: Vec<String>,
    /// Which songs to print (see `library::Job`).
    pub job: String,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            format: "ab.x - .t.x (.y.x).v.d.hb".to_string(),
            sort: vec!["a".into(), "l".into()],
            job: "printList".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoreSettings {
    /// Whether to join high scores from the score database.
    pub enabled: bool,
    /// Path to the UltraStar score database.
    pub database: PathBuf,
}

impl Default for ScoreSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            database: PathBuf::from("Ultrastar.db"),
        }
    }
}
