use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::Settings;
use crate::error::Result;
use crate::library::{Catalog, Job, SortKey, UnknownJob, scan};
use crate::render::{Format, PdfTypesetter, Typesetter};
use crate::scores::ScoreStore;

/// How a listing run ended.
#[derive(Debug)]
pub enum Outcome {
    Written { path: PathBuf, songs: usize },
    /// The configured job does not exist; nothing was written.
    UnknownJob(UnknownJob),
}

/// Scan the library, join scores when enabled, then sort.
///
/// The score store is closed before this returns, so every score list is
/// complete before anything is rendered.
pub fn build_catalog(settings: &Settings) -> Result<Catalog> {
    let mut catalog = scan(&settings.library.path, &settings.library)?;

    if settings.scores.enabled {
        let store = ScoreStore::open(&settings.scores.database)?;
        let rows = store.rows()?;
        store.close()?;
        let total = rows.len();
        let joined = catalog.join_scores(rows);
        info!(joined, dropped = total - joined, "joined high scores");
    }

    let keys: Vec<SortKey> = settings
        .listing
        .sort
        .iter()
        .filter_map(|k| SortKey::parse(k))
        .collect();
    catalog.sort(&keys);

    Ok(catalog)
}

/// Render every song the job selects, one row each. Returns the row count.
pub fn render_listing<T: Typesetter>(
    catalog: &Catalog,
    job: Job,
    format: &Format,
    too_long: usize,
    sink: &mut T,
) -> Result<usize> {
    let mut rows = 0;
    for song in catalog.select(job) {
        for run in format.render(song, too_long) {
            sink.write_run(&run)?;
        }
        sink.end_row()?;
        rows += 1;
    }
    Ok(rows)
}

/// Run one listing job end to end.
pub fn execute(settings: &Settings) -> Result<Outcome> {
    let job: Job = match settings.listing.job.parse() {
        Ok(job) => job,
        Err(e) => {
            warn!("{e}");
            return Ok(Outcome::UnknownJob(e));
        }
    };
    if job.needs_scores() && !settings.scores.enabled {
        warn!(%job, "score lookup is disabled, every song counts as unscored");
    }

    let catalog = build_catalog(settings)?;

    let doc = &settings.document;
    let format = Format::parse(&settings.listing.format);
    let mut pdf = PdfTypesetter::new(job.name(), doc)?;
    let songs = render_listing(&catalog, job, &format, doc.too_long, &mut pdf)?;
    pdf.save(&doc.output)?;

    info!(%job, songs, "listing written");
    Ok(Outcome::Written {
        path: doc.output.clone(),
        songs,
    })
}
