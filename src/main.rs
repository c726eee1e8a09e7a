use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use electoral_swing::commands::{self, info, non_swing, relocate, swing};
use electoral_swing::config::{ConfigError, ElectionConfig};
use electoral_swing::{Party, SwingMethod};
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about)]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the winner and how many electoral votes the loser is short.
    Info {
        /// Tab-separated results file
        election: PathBuf,
        #[clap(flatten)]
        analysis: AnalysisArgs,
    },
    /// Find the swing states that flip the election with the fewest voters.
    Swing {
        /// Tab-separated results file
        election: PathBuf,
        /// Solver: "brute-force" or "knapsack"
        #[clap(long, default_value = "knapsack")]
        method: SwingMethod,
        #[clap(flatten)]
        analysis: AnalysisArgs,
    },
    /// Find the largest-margin states the loser can leave alone.
    NonSwing {
        /// Tab-separated results file
        election: PathBuf,
        #[clap(flatten)]
        analysis: AnalysisArgs,
    },
    /// Move voters from the loser's states into the swing states.
    Relocate {
        /// Tab-separated results file
        election: PathBuf,
        /// Solver used to pick the swing states
        #[clap(long, default_value = "knapsack")]
        method: SwingMethod,
        #[clap(flatten)]
        analysis: AnalysisArgs,
    },
}

#[derive(Args)]
struct AnalysisArgs {
    /// JSON config file
    #[clap(long)]
    config: Option<PathBuf>,
    /// Total electoral votes in play (default 538)
    #[clap(long)]
    total: Option<u32>,
    /// Party credited with tied states: "dem" or "rep"
    #[clap(long)]
    tie_break: Option<Party>,
    /// State that may not donate voters; repeat for several
    #[clap(long = "protect")]
    protected: Vec<String>,
    /// Also write the result as JSON to this file
    #[clap(long)]
    json: Option<PathBuf>,
}

impl AnalysisArgs {
    fn config(&self) -> Result<ElectionConfig, ConfigError> {
        Ok(ElectionConfig::load(self.config.as_deref())?.with_overrides(
            self.total,
            self.tie_break,
            self.protected.clone(),
        ))
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Command(#[from] commands::CommandError),
}

fn run(opts: Opts) -> Result<(), CliError> {
    match opts.command {
        Command::Info { election, analysis } => {
            let config = analysis.config()?;
            info(&election, &config, analysis.json.as_deref())?;
        }
        Command::Swing {
            election,
            method,
            analysis,
        } => {
            let config = analysis.config()?;
            swing(&election, &config, method, analysis.json.as_deref())?;
        }
        Command::NonSwing { election, analysis } => {
            let config = analysis.config()?;
            non_swing(&election, &config, analysis.json.as_deref())?;
        }
        Command::Relocate {
            election,
            method,
            analysis,
        } => {
            let config = analysis.config()?;
            relocate(&election, &config, method, analysis.json.as_deref())?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let opts = Opts::parse();
    if let Err(e) = run(opts) {
        eprintln!("{} {}", "❌".red(), e);
        std::process::exit(1);
    }
}
