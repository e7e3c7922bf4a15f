//! Command-line arguments and their mapping onto `SimConfig`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use zv_core::{SecondaryCaseRule, SimConfig};

#[derive(Parser, Debug)]
#[command(name = "zv-trials")]
#[command(about = "Run Monte-Carlo trials of the zoonotic spillover simulation")]
pub struct Cli {
    /// Built-in dataset to simulate (RD, D0, D3, D4)
    #[arg(long, default_value = "RD")]
    pub dataset: String,

    /// Load agents from a scenario CSV instead of a built-in dataset
    #[arg(long)]
    pub scenario_csv: Option<PathBuf>,

    /// Number of independent trials
    #[arg(long, default_value_t = 10)]
    pub trials: u32,

    /// Base seed; each trial derives its own
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let hazard infect healthy humans
    #[arg(long)]
    pub spread: bool,

    /// How secondary cases are counted
    #[arg(long, value_enum)]
    pub rule: Option<RuleArg>,

    /// Between-waypoint motion model
    #[arg(long, value_enum, default_value_t = MotionArg::NoisyInterp)]
    pub motion: MotionArg,

    /// JSON file with `SimConfig` fields; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Root directory for result files
    #[arg(long, default_value = "data")]
    pub output: PathBuf,

    /// Output backend for the long-form tables
    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Record agent positions every `output_interval_ticks`
    #[arg(long)]
    pub snapshots: bool,

    /// Prefix for metric matrix files (default: current unix time)
    #[arg(long)]
    pub run_id: Option<String>,

    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RuleArg {
    FirstMatch,
    EveryContact,
}

impl From<RuleArg> for SecondaryCaseRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::FirstMatch   => SecondaryCaseRule::FirstMatch,
            RuleArg::EveryContact => SecondaryCaseRule::EveryContact,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MotionArg {
    NoisyInterp,
    Stationary,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    #[cfg(feature = "sqlite")]
    Sqlite,
    #[cfg(feature = "parquet")]
    Parquet,
}

impl Cli {
    /// Base configuration (JSON file or defaults) with flag overrides applied.
    pub fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SimConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.spread {
            config.simulate_spread = true;
        }
        if let Some(rule) = self.rule {
            config.secondary_case_rule = rule.into();
        }
        if !self.snapshots {
            config.output_interval_ticks = 0;
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn load_config(path: &Path) -> Result<SimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}
