use clap::Parser;
use deal_generator::deal::read_deal_file;
use deal_generator::output::{generate, GenerateConfig, WriteMode};
use deal_generator::rng::DealRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "generate")]
#[command(about = "Generate random card deals for the Hearts server", long_about = None)]
struct Cli {
    /// File to write the deals to
    file_name: PathBuf,

    /// Write option: w (truncate then write) or a (append)
    write_option: WriteMode,

    /// Number of rounds to generate
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    number_of_rounds: u64,

    /// Seed for random number generator (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Re-read the file after writing and check every round
    #[arg(long)]
    verify: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = GenerateConfig {
        path: cli.file_name,
        mode: cli.write_option,
        rounds: cli.number_of_rounds,
    };
    let mut rng = DealRng::new(cli.seed);
    log::info!(
        "generating {} rounds into {} ({:?}, seed {})",
        config.rounds,
        config.path.display(),
        config.mode,
        rng.seed()
    );

    let start = std::time::Instant::now();
    let written = match generate(&config, &mut rng) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };
    log::info!("wrote {} rounds in {:.2?}", written, start.elapsed());

    if cli.verify {
        verify_file(&config, written);
    }
}

fn verify_file(config: &GenerateConfig, written: u64) {
    let rounds = match read_deal_file(&config.path) {
        Ok(rounds) => rounds,
        Err(e) => {
            eprintln!("✗ Verification of '{}' failed: {}", config.path.display(), e);
            std::process::exit(1);
        }
    };

    let expected_at_least = written as usize;
    let consistent = match config.mode {
        WriteMode::Write => rounds.len() == expected_at_least,
        WriteMode::Append => rounds.len() >= expected_at_least,
    };
    if !consistent {
        eprintln!(
            "✗ Verification of '{}' failed: found {} rounds after writing {}",
            config.path.display(),
            rounds.len(),
            written
        );
        std::process::exit(1);
    }

    eprintln!("✓ Verified {} rounds in {}", rounds.len(), config.path.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("generate").chain(args.iter().copied()))
    }

    #[test]
    fn test_three_arguments_accepted() {
        let cli = parse(&["out.txt", "a", "3"]).expect("valid arguments");
        assert_eq!(cli.file_name, PathBuf::from("out.txt"));
        assert_eq!(cli.write_option, WriteMode::Append);
        assert_eq!(cli.number_of_rounds, 3);
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_wrong_argument_count_rejected() {
        let too_few: [&[&str]; 3] = [&[], &["out.txt"], &["out.txt", "w"]];
        for args in too_few {
            let err = parse(args).err().expect("too few arguments");
            assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        }
        let err = parse(&["out.txt", "w", "1", "extra"]).err().expect("too many arguments");
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_invalid_write_option_rejected() {
        let err = parse(&["out.txt", "x", "1"]).err().expect("invalid write option");
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_round_count_must_be_positive_integer() {
        assert!(parse(&["out.txt", "w", "three"]).is_err());
        assert!(parse(&["out.txt", "w", "0"]).is_err());
        assert!(parse(&["out.txt", "w", "-2"]).is_err());
    }

    #[test]
    fn test_optional_flags() {
        let cli = parse(&["out.txt", "w", "2", "--seed", "42", "--verify", "-v"]).unwrap();
        assert_eq!(cli.seed, Some(42));
        assert!(cli.verify);
        assert!(cli.verbose);
    }
}
