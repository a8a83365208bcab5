use crate::library::Song;

/// Value of one field code for one song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Rendered as the field code itself when set, a space otherwise.
    Flag(bool),
}

/// One immutable piece of rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub bold: bool,
    pub small_font: bool,
    /// The next run continues on the same line.
    pub continued: bool,
}

type Accessor = fn(&Song, &Directive) -> FieldValue;

/// Field codes in resolution order.
const FIELDS: [(char, Accessor); 11] = [
    ('a', artist),
    ('t', title),
    ('l', language),
    ('g', genre),
    ('y', year),
    ('c', creator),
    ('v', video),
    ('d', duo),
    ('m', medley),
    ('h', high_score),
    ('x', literal),
];

fn artist(song: &Song, _: &Directive) -> FieldValue {
    FieldValue::Text(song.artist().to_string())
}

fn title(song: &Song, _: &Directive) -> FieldValue {
    FieldValue::Text(song.title().to_string())
}

fn language(song: &Song, _: &Directive) -> FieldValue {
    FieldValue::Text(song.language.clone())
}

fn genre(song: &Song, _: &Directive) -> FieldValue {
    FieldValue::Text(song.genre.clone())
}

fn year(song: &Song, _: &Directive) -> FieldValue {
    FieldValue::Text(song.year.clone())
}

fn creator(song: &Song, _: &Directive) -> FieldValue {
    FieldValue::Text(song.creator.clone())
}

fn video(song: &Song, _: &Directive) -> FieldValue {
    FieldValue::Flag(song.has_video())
}

fn duo(song: &Song, _: &Directive) -> FieldValue {
    FieldValue::Flag(song.is_duo())
}

fn medley(song: &Song, _: &Directive) -> FieldValue {
    FieldValue::Flag(song.medley)
}

fn high_score(song: &Song, _: &Directive) -> FieldValue {
    FieldValue::Text(song.best_score())
}

fn literal(_: &Song, directive: &Directive) -> FieldValue {
    FieldValue::Text(directive.payload().to_string())
}

/// One `.`-separated token of a format string.
///
/// The first character is the field code; a trailing `b` asks for bold. For
/// the `x` code everything after the code is literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    raw: String,
}

impl Directive {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn code(&self) -> Option<char> {
        self.raw.chars().next()
    }

    pub fn is_bold(&self) -> bool {
        self.raw.ends_with('b')
    }

    /// Text after the field code.
    pub fn payload(&self) -> &str {
        match self.code() {
            Some(c) => &self.raw[c.len_utf8()..],
            None => "",
        }
    }

    /// Resolve this directive against `song`, or `None` for an unknown code.
    pub fn resolve(&self, song: &Song) -> Option<(char, FieldValue)> {
        let code = self.code()?;
        FIELDS
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(c, accessor)| (*c, accessor(song, self)))
    }
}

/// A parsed format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    directives: Vec<Directive>,
}

impl Format {
    pub fn parse(format: &str) -> Self {
        Self {
            directives: format.split('.').map(Directive::new).collect(),
        }
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Render one song into runs. Values with more than `too_long` characters
    /// are marked for the small font. Every run but the one from the last
    /// directive continues the line.
    pub fn render(&self, song: &Song, too_long: usize) -> Vec<StyledRun> {
        let last = self.directives.len().saturating_sub(1);
        self.directives
            .iter()
            .enumerate()
            .filter_map(|(i, directive)| {
                let (code, value) = directive.resolve(song)?;
                let text = match value {
                    FieldValue::Text(text) => text,
                    FieldValue::Flag(true) => code.to_string(),
                    FieldValue::Flag(false) => " ".to_string(),
                };
                Some(StyledRun {
                    small_font: text.chars().count() > too_long,
                    bold: directive.is_bold(),
                    continued: i != last,
                    text,
                })
            })
            .collect()
    }
}
