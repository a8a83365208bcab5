use super::*;
use crate::config::LibrarySettings;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const FLY_ME: &str = "#TITLE:Fly Me to the Moon\r\n\
#ARTIST: Frank Sinatra \r\n\
#LANGUAGE:English\r\n\
#GENRE:Jazz\r\n\
#YEAR:1964\r\n\
#CREATOR:someone\r\n\
#MP3:Fly Me.mp3\r\n\
#COVER:Fly Me [CO].jpg\r\n\
#VIDEO:Fly Me.mp4\r\n\
#BPM:238,4\r\n\
#GAP:11480\r\n\
: 0 4 59 Fly\r\n\
#ARTIST:Not Sinatra\r\n";

fn descriptor(artist: &str, title: &str) -> String {
    format!("#TITLE:{title}\n#ARTIST:{artist}\n: 0 4 59 la\n")
}

fn named(artist: &str, title: &str, filename: &str) -> Song {
    let mut s = Song::new(artist, title);
    s.filename = filename.into();
    s
}

fn with(artist: &str, language: &str) -> Song {
    let mut s = Song::new(artist, "x");
    s.language = language.into();
    s
}

#[test]
fn parse_reads_header_tags() {
    let s = parse_descriptor(FLY_ME);
    assert_eq!(s.artist(), "Frank Sinatra");
    assert_eq!(s.title(), "Fly Me to the Moon");
    assert_eq!(s.language, "English");
    assert_eq!(s.genre, "Jazz");
    assert_eq!(s.year, "1964");
    assert_eq!(s.creator, "someone");
    assert_eq!(s.mp3, "Fly Me.mp3");
    assert_eq!(s.cover, "Fly Me [CO].jpg");
    assert_eq!(s.video, "Fly Me.mp4");
    assert_eq!(s.bpm, "238,4");
    assert_eq!(s.gap, "11480");
    assert!(!s.medley);
    assert!(!s.is_duo());
    assert!(s.scores().is_empty());
    assert_eq!(s.identity_key(), "Frank Sinatra.Fly Me to the Moon");
}

#[test]
fn parse_stops_at_first_note_line() {
    let s = parse_descriptor(FLY_ME);
    assert_eq!(s.artist(), "Frank Sinatra");

    let s = parse_descriptor(": 0 4 59 la\n#TITLE:Late\n");
    assert_eq!(s.title(), "");
}

#[test]
fn parse_finds_tags_anywhere_in_a_line() {
    let s = parse_descriptor("\u{feff}#TITLE:Bom\n  junk #ARTIST:Someone\n#MEDLEYSTARTBEAT:120\n");
    assert_eq!(s.title(), "Bom");
    assert_eq!(s.artist(), "Someone");
    assert!(s.medley);
}

#[test]
fn parse_of_malformed_text_is_all_default() {
    let s = parse_descriptor("just some text\nwithout any tags");
    assert_eq!(s, Song::default());
    assert_eq!(s.identity_key(), ".");
}

#[test]
fn identity_key_keeps_case_and_punctuation() {
    assert_eq!(Song::new("AC/DC", "T.N.T.").identity_key(), "AC/DC.T.N.T.");
    assert_eq!(Song::new("", "Solo").identity_key(), ".Solo");
    assert_eq!(Song::new("abba", "").identity_key(), "abba.");
    assert_ne!(
        Song::new("ABBA", "SOS").identity_key(),
        Song::new("Abba", "SOS").identity_key()
    );
}

#[test]
fn latin1_decoding_keeps_accents() {
    let bytes = b"#ARTIST:Ni\xf1a Pastori\n#TITLE:Cai\n";
    assert_eq!(decode_latin1(bytes), "#ARTIST:Niña Pastori\n#TITLE:Cai\n");
    assert_eq!(parse_descriptor(&decode_latin1(bytes)).artist(), "Niña Pastori");
}

#[test]
fn read_descriptor_records_location() {
    let dir = tempdir().unwrap();
    let folder = dir.path().join("Niña Pastori - Cai");
    fs::create_dir_all(&folder).unwrap();
    let path = folder.join("Niña Pastori - Cai.txt");
    fs::write(&path, b"#ARTIST:Ni\xf1a Pastori\n#TITLE:Cai\n").unwrap();

    let s = read_descriptor(&path).unwrap();
    assert_eq!(s.artist(), "Niña Pastori");
    assert_eq!(s.folder, "Niña Pastori - Cai");
    assert_eq!(s.filename, "Niña Pastori - Cai.txt");
    assert_eq!(s.path, path);

    assert!(read_descriptor(&folder.join("missing.txt")).is_err());
}

#[test]
fn best_score_picks_highest_or_placeholder() {
    let mut s = Song::new("a", "b");
    assert_eq!(s.best_score(), " ");

    for (player, score) in [("A", 100), ("B", 999), ("C", 999), ("D", 5)] {
        s.scores.push(Score {
            player: player.into(),
            score,
            difficulty: 0,
            date: 0,
        });
    }
    assert_eq!(s.best_score(), "B(999)");
}

#[test]
fn multi_pair_marks_the_kept_song_as_duo() {
    for (first, second) in [
        ("Song.txt", "Song [MULTI].txt"),
        ("Song [MULTI].txt", "Song.txt"),
    ] {
        let mut catalog = Catalog::default();
        assert_eq!(catalog.add(named("A", "S", first)), Added::Inserted);
        assert_eq!(catalog.add(named("A", "S", second)), Added::Duo);

        assert_eq!(catalog.len(), 1);
        let kept = catalog.get("A.S").unwrap();
        assert!(kept.is_duo());
        assert_eq!(kept.filename, first);
    }
}

#[test]
fn ambiguous_duplicates_are_dropped_without_duo() {
    for (first, second) in [
        ("Song.txt", "Song (2).txt"),
        ("Song [MULTI].txt", "Other [MULTI].txt"),
    ] {
        let mut catalog = Catalog::default();
        catalog.add(named("A", "S", first));
        assert_eq!(catalog.add(named("A", "S", second)), Added::Duplicate);
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.get("A.S").unwrap().is_duo());
    }
}

#[test]
fn merging_the_same_file_twice_keeps_one_song() {
    let mut catalog = Catalog::default();
    for _ in 0..3 {
        catalog.add(named("A", "S", "Song.txt"));
    }
    catalog.add(named("B", "S", "Song.txt"));
    assert_eq!(catalog.len(), 2);
    assert!(!catalog.get("A.S").unwrap().is_duo());
}

#[test]
fn custom_multi_marker() {
    let mut catalog = Catalog::new("[DUET]");
    catalog.add(named("A", "S", "Song.txt"));
    assert_eq!(catalog.add(named("A", "S", "Song [MULTI].txt")), Added::Duplicate);
    assert_eq!(catalog.add(named("A", "S", "Song [DUET].txt")), Added::Duo);
}

#[test]
fn sort_applies_keys_in_sequence_last_dominates() {
    let mut catalog = Catalog::default();
    for s in [
        with("Queen", "English"),
        with("Alaska", "Spanish"),
        with("ABBA", "English"),
        with("Mecano", "Spanish"),
    ] {
        catalog.add(s);
    }

    let keys: Vec<SortKey> = ["a", "l"].iter().filter_map(|k| SortKey::parse(k)).collect();
    catalog.sort(&keys);

    let order: Vec<&str> = catalog.songs().iter().map(|s| s.artist()).collect();
    assert_eq!(order, vec!["ABBA", "Queen", "Alaska", "Mecano"]);
    // The lookup follows the new order.
    assert_eq!(catalog.get("Mecano.x").unwrap().language, "Spanish");
}

#[test]
fn unknown_sort_keys_keep_the_previous_order() {
    let mut catalog = Catalog::default();
    for s in [with("b", ""), with("a", ""), with("c", "")] {
        catalog.add(s);
    }
    catalog.sort(&[SortKey::Artist, SortKey::parse("z").unwrap()]);
    let order: Vec<&str> = catalog.songs().iter().map(|s| s.artist()).collect();
    assert_eq!(order, vec!["a", "b", "c"]);
}

#[test]
fn sort_key_parsing() {
    assert_eq!(SortKey::parse("a"), Some(SortKey::Artist));
    assert_eq!(SortKey::parse("sa"), Some(SortKey::Artist));
    assert_eq!(SortKey::parse("sl"), Some(SortKey::Language));
    assert_eq!(SortKey::parse("y"), Some(SortKey::Year));
    assert_eq!(SortKey::parse("q"), Some(SortKey::Ignored('q')));
    assert_eq!(SortKey::parse(""), None);
}

#[test]
fn locale_ordering_ignores_case_and_accents_first() {
    use std::cmp::Ordering;
    assert_eq!(locale_cmp("alaska", "Bertín"), Ordering::Less);
    assert_eq!(locale_cmp("Álvaro", "Amaral"), Ordering::Less);
    assert_eq!(locale_cmp("Ana", "Ana"), Ordering::Equal);
    assert_eq!(locale_cmp("e", "é"), Ordering::Less);
    assert_eq!(locale_cmp("a", "A"), Ordering::Less);
    assert_eq!(locale_cmp("", "a"), Ordering::Less);
    assert_eq!(locale_cmp("10", "9"), Ordering::Less);
    assert_eq!(locale_cmp("Straße", "Strbe"), Ordering::Less);
}

#[test]
fn locale_ordering_puts_inverted_punctuation_first() {
    let mut titles = vec![
        "Zapato",
        "¿Dónde estás",
        "Amor",
        "¡Ay!",
        "Strbe",
        "Straße",
        "1a",
        "Ærø",
    ];
    titles.sort_by(|a, b| locale_cmp(a, b));
    assert_eq!(
        titles,
        vec!["¡Ay!", "¿Dónde estás", "1a", "Ærø", "Amor", "Straße", "Strbe", "Zapato"]
    );
}

#[test]
fn sort_by_title_handles_spanish_punctuation() {
    let mut catalog = Catalog::default();
    for title in ["Zapato", "¿Dónde estás", "Amor", "¡Ay!"] {
        catalog.add(Song::new("a", title));
    }
    catalog.sort(&[SortKey::Title]);
    let order: Vec<&str> = catalog.songs().iter().map(|s| s.title()).collect();
    assert_eq!(order, vec!["¡Ay!", "¿Dónde estás", "Amor", "Zapato"]);
}

#[test]
fn job_predicates() {
    let mut plain = Song::new("a", "plain");
    plain.year = "1963".into();
    plain.video = "v.mp4".into();

    let mut other = Song::new("b", "other");
    other.medley = true;
    other.duo = true;
    other.scores.push(Score {
        player: "p".into(),
        score: 1,
        difficulty: 0,
        date: 0,
    });

    assert!(Job::PrintList.matches(&plain) && Job::PrintList.matches(&other));
    assert!(!Job::NoVideos.matches(&plain) && Job::NoVideos.matches(&other));
    assert!(Job::NoMedley.matches(&plain) && !Job::NoMedley.matches(&other));
    assert!(!Job::WithDuo.matches(&plain) && Job::WithDuo.matches(&other));
    assert!(!Job::WithScore.matches(&plain) && Job::WithScore.matches(&other));
    assert!(Job::NoScore.matches(&plain) && !Job::NoScore.matches(&other));
}

#[test]
fn no_year_selects_years_not_four_long() {
    for (year, selected) in [("", true), ("63", true), ("1963a", true), ("1963", false)] {
        let mut s = Song::new("a", "b");
        s.year = year.into();
        assert_eq!(Job::NoYear.matches(&s), selected, "year {year:?}");
    }
}

#[test]
fn select_filters_without_removing() {
    let mut catalog = Catalog::default();
    let mut with_video = Song::new("a", "1");
    with_video.video = "v".into();
    catalog.add(with_video);
    catalog.add(Song::new("b", "2"));

    let picked: Vec<&str> = catalog.select(Job::NoVideos).map(|s| s.artist()).collect();
    assert_eq!(picked, vec!["b"]);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.select(Job::PrintList).count(), 2);
}

#[test]
fn job_names_round_trip_and_unknown_lists_valid_jobs() {
    for job in Job::ALL {
        assert_eq!(job.name().parse::<Job>(), Ok(job));
    }
    assert_eq!("with Duo".parse::<Job>(), Ok(Job::WithDuo));

    let err = "printAll".parse::<Job>().unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("printAll"));
    for name in Job::names() {
        assert!(msg.contains(name), "{msg}");
    }
}

#[test]
fn is_descriptor_file_matches_configured_extensions_exactly() {
    let settings = LibrarySettings::default();
    assert!(is_descriptor_file(Path::new("/tmp/a.txt"), &settings));
    assert!(!is_descriptor_file(Path::new("/tmp/a.TXT"), &settings));
    assert!(!is_descriptor_file(Path::new("/tmp/a.mp3"), &settings));
    assert!(!is_descriptor_file(Path::new("/tmp/a"), &settings));

    let settings = LibrarySettings {
        extensions: vec![".txt".into(), "TXT".into()],
        ..LibrarySettings::default()
    };
    assert!(is_descriptor_file(Path::new("/tmp/a.txt"), &settings));
    assert!(is_descriptor_file(Path::new("/tmp/a.TXT"), &settings));
    assert!(!is_descriptor_file(Path::new("/tmp/a.Txt"), &settings));
}

#[test]
fn scan_walks_subdirectories_and_merges_duos() {
    let dir = tempdir().unwrap();
    let sinatra = dir.path().join("Frank Sinatra - Fly Me");
    let queen = dir.path().join("Queen - Innuendo");
    fs::create_dir_all(&sinatra).unwrap();
    fs::create_dir_all(&queen).unwrap();

    fs::write(sinatra.join("Fly Me.txt"), FLY_ME).unwrap();
    fs::write(sinatra.join("Fly Me [MULTI].txt"), FLY_ME).unwrap();
    fs::write(sinatra.join("Fly Me.mp3"), b"not a descriptor").unwrap();
    fs::write(queen.join("Innuendo.txt"), descriptor("Queen", "Innuendo")).unwrap();

    let catalog = scan(dir.path(), &LibrarySettings::default()).unwrap();
    assert_eq!(catalog.len(), 2);
    // Entries are visited in file-name order.
    assert_eq!(catalog.songs()[0].artist(), "Frank Sinatra");
    assert_eq!(catalog.songs()[1].artist(), "Queen");

    let fly = catalog.get("Frank Sinatra.Fly Me to the Moon").unwrap();
    assert!(fly.is_duo());
    assert_eq!(fly.filename, "Fly Me [MULTI].txt");
    assert_eq!(fly.folder, "Frank Sinatra - Fly Me");
    assert!(!catalog.get("Queen.Innuendo").unwrap().is_duo());
}

#[test]
fn scan_respects_include_hidden_false() {
    let dir = tempdir().unwrap();
    let hidden = dir.path().join(".trash");
    fs::create_dir_all(&hidden).unwrap();
    fs::write(hidden.join("a.txt"), descriptor("Hidden", "A")).unwrap();
    fs::write(dir.path().join("b.txt"), descriptor("Visible", "B")).unwrap();

    let settings = LibrarySettings {
        include_hidden: false,
        ..LibrarySettings::default()
    };
    let catalog = scan(dir.path(), &settings).unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(catalog.get("Visible.B").is_some());

    let catalog = scan(dir.path(), &LibrarySettings::default()).unwrap();
    assert_eq!(catalog.len(), 2);
}

#[test]
fn scan_respects_max_depth() {
    let dir = tempdir().unwrap();
    let d1 = dir.path().join("d1");
    let d2 = d1.join("d2");
    fs::create_dir_all(&d2).unwrap();
    fs::write(dir.path().join("root.txt"), descriptor("R", "root")).unwrap();
    fs::write(d1.join("one.txt"), descriptor("R", "one")).unwrap();
    fs::write(d2.join("two.txt"), descriptor("R", "two")).unwrap();

    let settings = LibrarySettings {
        max_depth: Some(2),
        ..LibrarySettings::default()
    };
    let catalog = scan(dir.path(), &settings).unwrap();
    assert!(catalog.get("R.root").is_some());
    assert!(catalog.get("R.one").is_some());
    assert!(catalog.get("R.two").is_none());
}

#[cfg(unix)]
#[test]
fn scan_does_not_descend_into_symlinked_directories_by_default() {
    let dir = tempdir().unwrap();
    let songs = dir.path().join("songs");
    let elsewhere = dir.path().join("elsewhere");
    fs::create_dir_all(&songs).unwrap();
    fs::create_dir_all(&elsewhere).unwrap();
    fs::write(songs.join("a.txt"), descriptor("R", "a")).unwrap();
    fs::write(elsewhere.join("b.txt"), descriptor("R", "b")).unwrap();
    std::os::unix::fs::symlink(&songs, songs.join("loop")).unwrap();
    std::os::unix::fs::symlink(&elsewhere, songs.join("linked")).unwrap();

    let catalog = scan(&songs, &LibrarySettings::default()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(catalog.get("R.a").is_some());
    assert!(catalog.get("R.b").is_none());
}

#[test]
fn scan_of_a_missing_directory_fails() {
    let dir = tempdir().unwrap();
    assert!(scan(&dir.path().join("missing"), &LibrarySettings::default()).is_err());
}
