//! High-score store access.
//!
//! Scores come from the UltraStar SQLite database as flat rows. The text
//! columns of that database carry one trailing sentinel character, which
//! [`ScoreRow`] strips before the row is matched against the library.

mod row;
mod store;

pub use row::{ScoreRow, strip_sentinel};
pub use store::{SCORE_QUERY, ScoreStore};
