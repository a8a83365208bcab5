use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::Result;

use super::catalog::{Added, Catalog};
use super::parse::read_descriptor;

/// Whether `path` has one of the configured descriptor extensions.
pub fn is_descriptor_file(path: &Path, settings: &LibrarySettings) -> bool {
    let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
        return false;
    };
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.'))
        .any(|e| !e.is_empty() && e == ext)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Walk the song tree and build the catalog.
///
/// Entries are visited sorted by file name. Any walk or read failure aborts
/// the scan.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Catalog> {
    let mut catalog = Catalog::new(settings.multi_marker.clone());

    let mut walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .sort_by_file_name();
    if let Some(d) = settings.max_depth {
        walker = walker.max_depth(d);
    }

    let (mut duos, mut dropped) = (0usize, 0usize);
    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if !is_descriptor_file(path, settings) {
            debug!(path = %path.display(), "skipping non-descriptor file");
            continue;
        }

        match catalog.add(read_descriptor(path)?) {
            Added::Inserted => {}
            Added::Duo => duos += 1,
            Added::Duplicate => dropped += 1,
        }
    }

    info!(
        dir = %dir.display(),
        songs = catalog.len(),
        duos,
        dropped,
        "scanned song library"
    );
    Ok(catalog)
}
