use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

use super::model::Song;

#[derive(Clone, Copy)]
enum Tag {
    Title,
    Artist,
    Language,
    Genre,
    Year,
    Creator,
    Mp3,
    Cover,
    Video,
    Bpm,
    Gap,
    MedleyStart,
}

const TAGS: [(&str, Tag); 12] = [
    ("#TITLE:", Tag::Title),
    ("#ARTIST:", Tag::Artist),
    ("#LANGUAGE:", Tag::Language),
    ("#GENRE:", Tag::Genre),
    ("#YEAR:", Tag::Year),
    ("#CREATOR:", Tag::Creator),
    ("#MP3:", Tag::Mp3),
    ("#COVER:", Tag::Cover),
    ("#VIDEO:", Tag::Video),
    ("#BPM:", Tag::Bpm),
    ("#GAP:", Tag::Gap),
    ("#MEDLEYSTARTBEAT:", Tag::MedleyStart),
];

/// Decode ISO-8859-1 bytes; every byte is the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Parse the header of a descriptor into a song.
///
/// Tags are found anywhere in a line, not only at its start. The header ends
/// at the first line starting with `:` (the first note line). Unknown lines
/// are ignored, so a file without tags yields an all-default song.
pub fn parse_descriptor(contents: &str) -> Song {
    let mut song = Song::default();

    for line in contents.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);

        for (tag, kind) in TAGS {
            let Some(pos) = line.find(tag) else {
                continue;
            };
            let value = line[pos + tag.len()..].trim().to_string();
            match kind {
                Tag::Title => song.title = value,
                Tag::Artist => song.artist = value,
                Tag::Language => song.language = value,
                Tag::Genre => song.genre = value,
                Tag::Year => song.year = value,
                Tag::Creator => song.creator = value,
                Tag::Mp3 => song.mp3 = value,
                Tag::Cover => song.cover = value,
                Tag::Video => song.video = value,
                Tag::Bpm => song.bpm = value,
                Tag::Gap => song.gap = value,
                Tag::MedleyStart => song.medley = true,
            }
        }

        if line.starts_with(':') {
            break;
        }
    }

    song
}

/// Read and parse one descriptor file.
pub fn read_descriptor(path: &Path) -> Result<Song> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let mut song = parse_descriptor(&decode_latin1(&bytes));

    song.filename = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    song.folder = path
        .parent()
        .and_then(|p| p.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    song.path = path.to_path_buf();

    debug!(path = %path.display(), key = %song.identity_key(), "parsed descriptor");
    Ok(song)
}
