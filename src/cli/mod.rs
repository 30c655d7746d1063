//! CLI command definitions and handlers

mod init;
mod score;
mod serve;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Repograde - LLM-judged repository hygiene scores
#[derive(Parser, Debug)]
#[command(name = "repograde")]
#[command(
    version,
    about = "Summarise a repository and have an LLM score it across six hygiene categories",
    after_help = "\
Examples:
  repograde summary .                                   Print the summary sent to the evaluator
  repograde score https://github.com/owner/repo         Clone, summarise and score
  repograde score https://github.com/owner/repo --json  JSON output for scripting
  repograde serve --port 5000                           Start the HTTP service
  repograde init                                        Write an example config file"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the summary of a local repository (no network, no evaluator)
    Summary {
        /// Path to the repository root
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Seed for the code-sample selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Clone, summarise and score a repository
    Score {
        /// Repository URL, e.g. https://github.com/owner/repo
        url: String,

        /// Print the JSON response body instead of a table
        #[arg(long)]
        json: bool,

        /// Seed for sampling and commentary
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Start the HTTP service (GET /health, POST /get-score)
    Serve {
        /// Bind address (default: from config, else 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Port (default: from config, else 5000)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Write an example config to ~/.config/repograde/config.toml
    Init,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Summary { path, seed } => summary::run(&path, seed),
        Commands::Score { url, json, seed } => score::run(&url, json, seed),
        Commands::Serve { host, port } => serve::run(host, port),
        Commands::Init => init::run(),
    }
}

/// Seeded RNG when requested, OS-seeded otherwise.
fn make_rng(seed: Option<u64>) -> rand_chacha::ChaCha8Rng {
    use rand::SeedableRng;
    match seed {
        Some(seed) => rand_chacha::ChaCha8Rng::seed_from_u64(seed),
        None => rand_chacha::ChaCha8Rng::from_rng(&mut rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["repograde", "score", "https://github.com/o/r", "--json", "--seed", "7"]).unwrap();
        match cli.command {
            Commands::Score { url, json, seed } => {
                assert_eq!(url, "https://github.com/o/r");
                assert!(json);
                assert_eq!(seed, Some(7));
            }
            other => panic!("unexpected {other:?}"),
        }

        let cli = Cli::try_parse_from(["repograde", "--log-level", "debug", "summary"]).unwrap();
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Commands::Summary { seed: None, .. }));
    }

    #[test]
    fn test_cli_rejects_bad_log_level() {
        assert!(Cli::try_parse_from(["repograde", "--log-level", "loud", "init"]).is_err());
    }

    #[test]
    fn test_seeded_rng_repeats() {
        use rand::Rng;
        let a: u64 = make_rng(Some(3)).random();
        let b: u64 = make_rng(Some(3)).random();
        assert_eq!(a, b);
    }
}
