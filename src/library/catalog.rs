//! The aggregation context shared by every phase of a listing run.
//!
//! A `Catalog` owns the ordered song list and the identity lookup. Songs are
//! only ever added through [`Catalog::add`], which enforces one song per
//! identity key and records duo pairs.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::scores::ScoreRow;

use super::job::Job;
use super::model::{Score, Song};
use super::sort::SortKey;

/// Outcome of [`Catalog::add`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Added {
    /// First song with this identity key.
    Inserted,
    /// Duplicate forming a plain/multi pair; the kept song is now a duo.
    Duo,
    /// Duplicate that is not a plain/multi pair; dropped without a flag.
    Duplicate,
}

#[derive(Debug)]
pub struct Catalog {
    songs: Vec<Song>,
    index: HashMap<String, usize>,
    multi_marker: String,
}

impl Catalog {
    /// `multi_marker` is the filename suffix (before the extension) of the
    /// alternate multi-track variant, e.g. `[MULTI]`.
    pub fn new(multi_marker: impl Into<String>) -> Self {
        Self {
            songs: Vec::new(),
            index: HashMap::new(),
            multi_marker: multi_marker.into(),
        }
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Song> {
        self.index.get(key).map(|&i| &self.songs[i])
    }

    fn is_multi(&self, song: &Song) -> bool {
        !self.multi_marker.is_empty()
            && Path::new(&song.filename)
                .file_stem()
                .map(|stem| stem.to_string_lossy().ends_with(&self.multi_marker))
                .unwrap_or(false)
    }

    /// Add a parsed song in traversal order.
    ///
    /// Only the first song per identity key is kept. A later song with the
    /// same key marks the kept one as duo when exactly one of the two is the
    /// multi variant.
    pub fn add(&mut self, song: Song) -> Added {
        let key = song.identity_key();

        let Some(&existing) = self.index.get(&key) else {
            self.index.insert(key, self.songs.len());
            self.songs.push(song);
            return Added::Inserted;
        };

        let new_multi = self.is_multi(&song);
        let old_multi = self.is_multi(&self.songs[existing]);
        if new_multi != old_multi {
            debug!(%key, "duo pair found");
            self.songs[existing].duo = true;
            Added::Duo
        } else {
            debug!(%key, filename = %song.filename, "dropping duplicate descriptor");
            Added::Duplicate
        }
    }

    /// Attach store rows to songs by identity key.
    ///
    /// Rows for songs not in the catalog are dropped. Returns how many rows
    /// were attached.
    pub fn join_scores<I>(&mut self, rows: I) -> usize
    where
        I: IntoIterator<Item = ScoreRow>,
    {
        let mut joined = 0;
        for row in rows {
            let key = row.identity_key();
            let Some(&i) = self.index.get(&key) else {
                continue;
            };
            self.songs[i].scores.push(Score {
                player: row.player().to_string(),
                score: row.score,
                difficulty: row.difficulty,
                date: row.date,
            });
            joined += 1;
        }
        joined
    }

    /// Apply each key as a full stable re-sort, in order. The last key
    /// therefore dominates and earlier keys only break its ties.
    pub fn sort(&mut self, keys: &[SortKey]) {
        for &key in keys {
            self.songs.sort_by(|a, b| key.compare(a, b));
        }
        self.reindex();
    }

    fn reindex(&mut self) {
        self.index = self
            .songs
            .iter()
            .enumerate()
            .map(|(i, s)| (s.identity_key(), i))
            .collect();
    }

    /// Songs selected by `job`, in catalog order.
    pub fn select(&self, job: Job) -> impl Iterator<Item = &Song> {
        self.songs.iter().filter(move |s| job.matches(s))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new("[MULTI]")
    }
}
