use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::model::Song;

/// Which songs a listing prints.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Job {
    PrintList,
    NoVideos,
    NoMedley,
    NoYear,
    WithDuo,
    WithScore,
    NoScore,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown job '{name}', valid jobs are: {}", Job::names().join(", "))]
pub struct UnknownJob {
    pub name: String,
}

impl Job {
    pub const ALL: [Job; 7] = [
        Job::PrintList,
        Job::NoVideos,
        Job::NoMedley,
        Job::NoYear,
        Job::WithDuo,
        Job::WithScore,
        Job::NoScore,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Job::PrintList => "printList",
            Job::NoVideos => "noVideos",
            Job::NoMedley => "noMedley",
            Job::NoYear => "noYear",
            Job::WithDuo => "withDuo",
            Job::WithScore => "withScore",
            Job::NoScore => "noScore",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|j| j.name()).collect()
    }

    /// Whether `song` belongs in this job's listing.
    pub fn matches(self, song: &Song) -> bool {
        match self {
            Job::PrintList => true,
            Job::NoVideos => !song.has_video(),
            Job::NoMedley => !song.medley,
            Job::NoYear => song.year.chars().count() != 4,
            Job::WithDuo => song.is_duo(),
            Job::WithScore => !song.scores().is_empty(),
            Job::NoScore => song.scores().is_empty(),
        }
    }

    /// Whether the listing needs joined scores to be meaningful.
    pub fn needs_scores(self) -> bool {
        matches!(self, Job::WithScore | Job::NoScore)
    }
}

impl FromStr for Job {
    type Err = UnknownJob;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name == "with Duo" {
            return Ok(Job::WithDuo);
        }
        Self::ALL
            .into_iter()
            .find(|j| j.name() == name)
            .ok_or_else(|| UnknownJob {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
