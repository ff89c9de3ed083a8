use crate::deal::Round;
use crate::rng::RandomSource;
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Runs at least this long get a progress bar
pub const PROGRESS_THRESHOLD: u64 = 10_000;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Could not open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed writing to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// How the output file is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WriteMode {
    /// Truncate the file, then write
    #[value(name = "w")]
    Write,
    /// Keep existing content and add after it
    #[value(name = "a")]
    Append,
}

impl WriteMode {
    pub fn open(&self, path: &Path) -> std::io::Result<File> {
        let mut options = OpenOptions::new();
        options.create(true);
        match self {
            WriteMode::Write => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };
        options.open(path)
    }
}

/// Parameters for one generation run
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub path: PathBuf,
    pub mode: WriteMode,
    pub rounds: u64,
}

/// Write `rounds` freshly generated rounds to `writer`, returning how many were written
pub fn write_rounds<W: Write, R: RandomSource>(
    writer: &mut W,
    rng: &mut R,
    rounds: u64,
    progress: &ProgressBar,
) -> std::io::Result<u64> {
    for i in 0..rounds {
        let round = Round::generate(rng);
        log::trace!("round {}: {}", i + 1, round.auxiliary);
        if log::log_enabled!(log::Level::Trace) {
            if let Ok(json) = round.to_json() {
                log::trace!("{}", json);
            }
        }
        write!(writer, "{}", round)?;
        progress.inc(1);
    }
    writer.flush()?;
    Ok(rounds)
}

fn progress_bar(rounds: u64) -> ProgressBar {
    if rounds < PROGRESS_THRESHOLD {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(rounds);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} rounds ({eta})") {
        bar.set_style(style);
    }
    bar
}

/// Open the target in the configured mode and write every round to it
pub fn generate<R: RandomSource>(config: &GenerateConfig, rng: &mut R) -> Result<u64, GenerateError> {
    let file = config.mode.open(&config.path).map_err(|source| GenerateError::Open {
        path: config.path.clone(),
        source,
    })?;
    log::debug!("opened {} in {:?} mode", config.path.display(), config.mode);

    let mut writer = BufWriter::new(file);
    let progress = progress_bar(config.rounds);
    let written = write_rounds(&mut writer, rng, config.rounds, &progress).map_err(|source| {
        GenerateError::Write {
            path: config.path.clone(),
            source,
        }
    })?;
    progress.finish_and_clear();

    Ok(written)
}
