//! `chordflow` - render `ChordPro` songs with optional transposition.
//!
//! Usage: chordflow [--transpose N] [--json] [FILE...]
//!
//! Reads stdin when no file is given.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use chordflow::chordpro::{render_html_with, SongParser};
use chordflow::config::{Config, OutputFormat};
use chordflow::constants::keys::OCTAVE;
use chordflow::error::{Error, Result};

/// Command line options layered over [`Config`].
#[derive(Debug)]
struct Args {
    half_steps: i32,
    format: OutputFormat,
    files: Vec<PathBuf>,
}

impl Args {
    fn parse(config: &Config, mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut parsed = Self {
            half_steps: config.half_steps,
            format: config.format,
            files: Vec::new(),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-t" | "--transpose" => {
                    let value = args.next().ok_or("--transpose needs a number of half steps")?;
                    parsed.half_steps = value
                        .parse()
                        .map_err(|_| format!("--transpose expects an integer, got {value:?}"))?;
                }
                "--json" => parsed.format = OutputFormat::Json,
                "--html" => parsed.format = OutputFormat::Html,
                path => parsed.files.push(PathBuf::from(shellexpand::tilde(path).to_string())),
            }
        }

        if !(-OCTAVE..=OCTAVE).contains(&parsed.half_steps) {
            return Err(Error::OffsetOutOfRange { half_steps: parsed.half_steps });
        }

        Ok(parsed)
    }
}

fn render(song: &str, args: &Args, config: &Config) -> Result<String> {
    let lines = SongParser::parse(song, args.half_steps)?;
    match args.format {
        OutputFormat::Html => Ok(render_html_with(&lines, &config.separator)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&lines)?),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::load().context("Failed to load config")?;
    let args = Args::parse(&config, std::env::args().skip(1))?;
    tracing::debug!("{} {} with {args:?}", config.app_name(), config.app_version());

    if args.files.is_empty() {
        let mut song = String::new();
        io::stdin().read_to_string(&mut song).context("Failed to read stdin")?;
        println!("{}", render(&song, &args, &config)?);
        return Ok(());
    }

    for path in &args.files {
        let song = fs_err::read_to_string(path)
            .map_err(|e| Error::io(e, path.clone()))?;
        let output = render(&song, &args, &config)
            .with_context(|| format!("Failed to render {}", path.display()))?;
        println!("{output}");
    }

    Ok(())
}
