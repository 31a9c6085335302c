//! Generate random text that imitates the character statistics of a source
//! file.

use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use cursor_list::markov::{read_source, Generator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset or empty.
const DEFAULT_LOG_FILTER: &str = "randwrite=info,cursor_list=info";

/// Character-level Markov text generator
#[derive(Parser, Debug)]
#[command(name = "randwrite")]
#[command(version)]
struct Cli {
    /// Length of the seed, in characters
    k: usize,

    /// Number of characters to generate
    length: usize,

    /// Text file to imitate
    source: PathBuf,

    /// File to write the generated text to
    result: PathBuf,

    /// Seed for the random number generator, for reproducible output
    #[arg(long, env = "RANDWRITE_SEED")]
    seed: Option<u64>,
}

/// Build the log filter from the value of `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`].
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let source = read_source(BufReader::new(File::open(&cli.source)?))?;
    tracing::info!(
        "Read {} characters from {}",
        source.size(),
        cli.source.display()
    );

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut generator = Generator::new(source, cli.k, rng)?;

    let mut out = BufWriter::new(File::create(&cli.result)?);
    generator.write_to(&mut out, cli.length)?;
    out.flush()?;

    tracing::info!(
        "Wrote {} characters to {}",
        cli.length,
        cli.result.display()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    run(&Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::{log_filter, run, Cli};
    use clap::Parser;
    use cursor_list::markov::GenerateError;
    use std::fs;
    use std::io;
    use std::path::Path;
    use tracing::level_filters::LevelFilter;

    const TEXT: &str = "it was the best of times, it was the worst of times";

    fn cli(k: usize, length: usize, source: &Path, result: &Path, seed: u64) -> Cli {
        Cli::try_parse_from([
            "randwrite".to_string(),
            k.to_string(),
            length.to_string(),
            source.display().to_string(),
            result.display().to_string(),
            "--seed".to_string(),
            seed.to_string(),
        ])
        .unwrap()
    }

    #[test]
    fn log_filter_prefers_rust_log() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            log_filter(Some("")).max_level_hint(),
            Some(LevelFilter::INFO)
        );
        assert_eq!(
            log_filter(Some("cursor_list=debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn parses_arguments() {
        let cli = Cli::try_parse_from(["randwrite", "3", "100", "in.txt", "out.txt"]).unwrap();
        assert_eq!((cli.k, cli.length), (3, 100));
        assert_eq!(cli.source, Path::new("in.txt"));
        assert_eq!(cli.result, Path::new("out.txt"));

        assert!(Cli::try_parse_from(["randwrite", "-1", "100", "in.txt", "out.txt"]).is_err());
        assert!(Cli::try_parse_from(["randwrite", "3", "100", "in.txt"]).is_err());
    }

    #[test]
    fn same_seed_same_output() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.txt");
        fs::write(&source, TEXT).unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");

        run(&cli(3, 120, &source, &first, 42)).unwrap();
        run(&cli(3, 120, &source, &second, 42)).unwrap();

        let first = fs::read_to_string(first).unwrap();
        assert_eq!(first.chars().count(), 120);
        assert!(first.chars().all(|ch| TEXT.contains(ch)));
        assert_eq!(first, fs::read_to_string(second).unwrap());
    }

    #[test]
    fn missing_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("missing.txt");
        let result = dir.path().join("out.txt");

        let err = run(&cli(2, 10, &source, &result, 1)).unwrap_err();
        let err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!result.exists());
    }

    #[test]
    fn seed_longer_than_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.txt");
        fs::write(&source, "abc").unwrap();
        let result = dir.path().join("out.txt");

        let err = run(&cli(3, 10, &source, &result, 1)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GenerateError>(),
            Some(GenerateError::SeedTooLong {
                seed_len: 3,
                source_len: 3
            })
        ));
        assert!(!result.exists());
    }
}
