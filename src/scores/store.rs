use std::path::{Path, PathBuf};

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, Row};
use tracing::info;

use crate::error::Result;

use super::row::ScoreRow;

/// Every score joined to the song it was sung on.
pub const SCORE_QUERY: &str = "SELECT s.Artist, s.Title, r.Player, r.Score, r.Difficulty, r.Date \
     FROM us_songs s, us_scores r WHERE s.ID = r.SongID";

/// Read-only handle on the score database.
#[derive(Debug)]
pub struct ScoreStore {
    conn: Connection,
    path: PathBuf,
}

impl ScoreStore {
    pub fn open(path: &Path) -> Result<Self> {
        info!("Opening score database at {}", path.display());
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Fetch every score row.
    pub fn rows(&self) -> Result<Vec<ScoreRow>> {
        let mut stmt = self.conn.prepare(SCORE_QUERY)?;
        let rows = stmt
            .query_map([], score_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        info!(rows = rows.len(), "read score rows from {}", self.path.display());
        Ok(rows)
    }

    /// Close the connection, surfacing any error from doing so.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}

fn score_row(row: &Row<'_>) -> rusqlite::Result<ScoreRow> {
    Ok(ScoreRow {
        artist: text_column(row, 0)?,
        title: text_column(row, 1)?,
        player: text_column(row, 2)?,
        score: row.get::<_, Option<i64>>(3)?.unwrap_or_default(),
        difficulty: row.get::<_, Option<i64>>(4)?.unwrap_or_default(),
        date: row.get::<_, Option<i64>>(5)?.unwrap_or_default(),
    })
}

/// Read a text column that may have been stored as TEXT or BLOB.
fn text_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(String::new()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Ok(String::from_utf8_lossy(bytes).into_owned())
        }
        ValueRef::Integer(i) => Ok(i.to_string()),
        ValueRef::Real(f) => Ok(f.to_string()),
    }
}
