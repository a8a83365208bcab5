use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use songbook::runtime::{self, Outcome, Overrides};

/// Print a karaoke song listing to PDF.
#[derive(Debug, Parser)]
#[command(name = "songbook", version, about)]
struct Cli {
    /// Song directory (overrides `library.path`).
    songs_dir: Option<PathBuf>,

    /// Config file to read instead of the default location.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listing job: printList, noVideos, noMedley, noYear, withDuo, withScore, noScore.
    #[arg(short, long)]
    job: Option<String>,

    /// Per-song format string, e.g. "ab.x - .t.x (.y.x).v.d.hb".
    #[arg(short, long)]
    format: Option<String>,

    /// Sort keys applied in order, comma separated (a, t, l, g, y, c).
    #[arg(short, long, value_delimiter = ',')]
    sort: Option<Vec<String>>,

    /// Output PDF path.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// UltraStar score database; enables the high-score lookup.
    #[arg(long, value_name = "DB")]
    scores: Option<PathBuf>,

    /// Print the effective settings as TOML and exit.
    #[arg(long)]
    dump_config: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            config_path: self.config.clone(),
            songs_dir: self.songs_dir.clone(),
            job: self.job.clone(),
            format: self.format.clone(),
            sort: self.sort.clone(),
            output: self.output.clone(),
            score_db: self.scores.clone(),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let overrides = cli.overrides();

    if cli.dump_config {
        let settings = runtime::load_settings(&overrides);
        return match toml::to_string_pretty(&settings) {
            Ok(text) => {
                print!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("failed to serialize settings: {e}");
                ExitCode::FAILURE
            }
        };
    }

    match runtime::run(&overrides) {
        Ok(Outcome::Written { path, songs }) => {
            println!("{songs} songs written to {}", path.display());
            ExitCode::SUCCESS
        }
        // Already reported; an unknown job is not a failure.
        Ok(Outcome::UnknownJob(_)) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
