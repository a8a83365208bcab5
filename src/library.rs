//! Song library: descriptor parsing, directory scanning and the catalog
//! that merges, scores, sorts and filters the scanned songs.

mod catalog;
mod job;
mod model;
mod parse;
mod scan;
mod sort;

pub use catalog::{Added, Catalog};
pub use job::{Job, UnknownJob};
pub use model::{Score, Song, identity_key};
pub use parse::{decode_latin1, parse_descriptor, read_descriptor};
pub use scan::{is_descriptor_file, scan};
pub use sort::{SortKey, locale_cmp};

#[cfg(test)]
mod tests;
