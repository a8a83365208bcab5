use std::cmp::Reverse;
use std::path::PathBuf;

/// One high-score entry joined from the score store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub player: String,
    pub score: i64,
    pub difficulty: i64,
    pub date: i64,
}

/// One karaoke song, as described by a descriptor file.
///
/// `artist` and `title` form the identity key and are fixed at construction.
/// `duo` and `scores` are only touched by the [`Catalog`](super::Catalog).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Song {
    pub(super) artist: String,
    pub(super) title: String,

    pub language: String,
    pub genre: String,
    pub year: String,
    pub creator: String,
    pub mp3: String,
    pub cover: String,
    pub video: String,
    pub bpm: String,
    pub gap: String,
    pub medley: bool,

    pub(crate) duo: bool,
    pub(crate) scores: Vec<Score>,

    /// Descriptor location; never part of the identity.
    pub path: PathBuf,
    pub folder: String,
    pub filename: String,
}

impl Song {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// `artist.title`, exact and case-sensitive.
    pub fn identity_key(&self) -> String {
        identity_key(&self.artist, &self.title)
    }

    pub fn is_duo(&self) -> bool {
        self.duo
    }

    pub fn has_video(&self) -> bool {
        !self.video.is_empty()
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    /// The highest score as `player(score)`, or a single space when there is none.
    ///
    /// Among equal scores the earliest joined entry wins.
    pub fn best_score(&self) -> String {
        self.scores
            .iter()
            .min_by_key(|s| Reverse(s.score))
            .map(|s| format!("{}({})", s.player, s.score))
            .unwrap_or_else(|| " ".to_string())
    }
}

/// The identity key of a song: `artist.title`.
pub fn identity_key(artist: &str, title: &str) -> String {
    format!("{artist}.{title}")
}
