use crate::library::identity_key;

/// One row of the score query, exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub artist: String,
    pub title: String,
    pub player: String,
    pub score: i64,
    pub difficulty: i64,
    pub date: i64,
}

/// Drop the one trailing sentinel character the store appends to text values.
///
/// Exactly one character is removed whether or not it is the sentinel.
pub fn strip_sentinel(value: &str) -> &str {
    let mut chars = value.chars();
    chars.next_back();
    chars.as_str()
}

impl ScoreRow {
    pub fn artist(&self) -> &str {
        strip_sentinel(&self.artist)
    }

    pub fn title(&self) -> &str {
        strip_sentinel(&self.title)
    }

    pub fn player(&self) -> &str {
        strip_sentinel(&self.player)
    }

    /// The identity key of the song this row belongs to.
    pub fn identity_key(&self) -> String {
        identity_key(self.artist(), self.title())
    }
}
