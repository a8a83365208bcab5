use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

use super::model::Song;

/// One single-field sort pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortKey {
    Artist,
    Title,
    Language,
    Genre,
    Year,
    Creator,
    /// Any other letter; compares everything as equal.
    Ignored(char),
}

impl SortKey {
    pub fn from_char(c: char) -> Self {
        match c {
            'a' => SortKey::Artist,
            't' => SortKey::Title,
            'l' => SortKey::Language,
            'g' => SortKey::Genre,
            'y' => SortKey::Year,
            'c' => SortKey::Creator,
            other => SortKey::Ignored(other),
        }
    }

    /// Parse a configured key. The key letter is the last character, so both
    /// `"a"` and the prefixed option form `"sa"` select the artist.
    pub fn parse(option: &str) -> Option<Self> {
        option.trim().chars().last().map(Self::from_char)
    }

    fn field(self, song: &Song) -> Option<&str> {
        match self {
            SortKey::Artist => Some(song.artist()),
            SortKey::Title => Some(song.title()),
            SortKey::Language => Some(&song.language),
            SortKey::Genre => Some(&song.genre),
            SortKey::Year => Some(&song.year),
            SortKey::Creator => Some(&song.creator),
            SortKey::Ignored(_) => None,
        }
    }

    pub fn compare(self, a: &Song, b: &Song) -> Ordering {
        match (self.field(a), self.field(b)) {
            (Some(x), Some(y)) => locale_cmp(x, y),
            _ => Ordering::Equal,
        }
    }
}

thread_local! {
    static ROOT_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Natural-language string ordering with the CLDR root collation.
///
/// Punctuation sorts before digits and digits before letters; accents and
/// case only break ties, lowercase first. Falls back to code point order if
/// the collation data cannot be loaded.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}
