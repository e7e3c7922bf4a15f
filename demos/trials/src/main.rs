//! zv-trials: Monte-Carlo driver for the zoonotic spillover simulation.
//!
//! Runs `--trials` independent trials of a built-in dataset (or a scenario
//! CSV), then writes into `<output>/<DATASET>/<motion>/`:
//!
//! - long-form `human_results` and `sickness_episodes` tables (plus
//!   `agent_snapshots` with `--snapshots`), in the `--format` backend;
//! - one `<run>_<metric>.csv` matrix per metric, humans × trials.
//!
//! At `--log-level debug` the first trial is replayed and every human's
//! final exposure, contact archive and sickness episodes are logged.

mod cli;
mod logging;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;

use zv_agent::Population;
use zv_core::{SimConfig, TrialId, trial_seed};
use zv_mobility::{MotionModel, NoisyInterpolation, Stationary};
use zv_output::{CsvWriter, Metric, OutputWriter, SimOutputObserver, write_metric_matrices};
use zv_scenario::{datasets, load_scenario_csv};
use zv_sim::{NoopObserver, SimBuilder, TrialOutcome, run_trial, run_trials};

use cli::{Cli, FormatArg, MotionArg};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level)?;

    let config = cli.sim_config()?;
    let scenario = match &cli.scenario_csv {
        Some(path) => load_scenario_csv(path)?,
        None => datasets::by_name(&cli.dataset)?,
    };
    let template = scenario.build_population(config.tick_duration_secs)?;
    log::info!(
        "{}: {} humans, {} reservoirs, {} trials, seed {}, spread {}",
        scenario.name,
        scenario.humans.len(),
        scenario.reservoirs.len(),
        cli.trials,
        config.seed,
        config.simulate_spread
    );

    let dir = match cli.motion {
        MotionArg::NoisyInterp => {
            run(&cli, &config, &scenario.name, &template, NoisyInterpolation::new(config.motion_jitter))?
        }
        MotionArg::Stationary => run(&cli, &config, &scenario.name, &template, Stationary)?,
    };
    log::info!("results in {}", dir.display());
    Ok(())
}

/// Run every trial with `motion` and write all result files; returns the
/// directory they were written to.
fn run<M: MotionModel + Clone>(
    cli:      &Cli,
    config:   &SimConfig,
    name:     &str,
    template: &Population,
    motion:   M,
) -> Result<PathBuf> {
    let dir = cli.output.join(name).join(motion.name());
    std::fs::create_dir_all(&dir)?;
    let mut writer = open_writer(cli.format, &dir)?;

    let t0 = Instant::now();
    let outcomes = if config.output_interval_ticks > 0 {
        // Snapshots need an observer per run, so trials go one at a time.
        let mut obs = SimOutputObserver::new(writer, TrialId(0));
        let mut outcomes = Vec::with_capacity(cli.trials as usize);
        for t in 0..cli.trials {
            obs.begin_trial(TrialId(t));
            outcomes.push(run_trial(template, config, &motion, TrialId(t), &mut obs)?);
        }
        if let Some(e) = obs.take_error() {
            return Err(e.into());
        }
        log::info!("{} snapshot rows", obs.rows_written());
        writer = obs.into_writer();
        outcomes
    } else {
        run_trials(template, config, &motion, cli.trials)?
    };
    log::info!("{} trials in {:.3} s", outcomes.len(), t0.elapsed().as_secs_f64());

    for outcome in &outcomes {
        writer.write_outcome(outcome)?;
    }
    writer.finish()?;

    let run_id = cli.run_id.clone().unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
            .to_string()
    });
    write_metric_matrices(&dir, &run_id, &outcomes)?;
    summarize(&outcomes);

    if log::log_enabled!(log::Level::Debug) {
        dump_first_trial(template, config, motion)?;
    }
    Ok(dir)
}

fn open_writer(format: FormatArg, dir: &Path) -> Result<Box<dyn OutputWriter>> {
    let writer: Box<dyn OutputWriter> = match format {
        FormatArg::Csv => Box::new(CsvWriter::new(dir)?),
        #[cfg(feature = "sqlite")]
        FormatArg::Sqlite => Box::new(zv_output::SqliteWriter::new(dir)?),
        #[cfg(feature = "parquet")]
        FormatArg::Parquet => Box::new(zv_output::ParquetWriter::new(dir)?),
    };
    Ok(writer)
}

/// Per-human means across trials.
fn summarize(outcomes: &[TrialOutcome]) {
    if outcomes.is_empty() {
        return;
    }
    let n = outcomes.len() as f64;
    let means: Vec<Vec<(zv_core::AgentId, f64)>> = Metric::ALL
        .iter()
        .map(|&m| {
            zv_output::matrix::metric_table(outcomes, m)
                .into_iter()
                .map(|(id, row)| (id, row.iter().sum::<f64>() / n))
                .collect()
        })
        .collect();

    for (i, &(id, cases)) in means[0].iter().enumerate() {
        log::info!(
            "{id}: secondary cases {cases:.2}, animal hazard {:.4}, human hazard {:.4}, p_zoonotic {:.4}",
            means[1][i].1,
            means[2][i].1,
            means[3][i].1
        );
    }
}

/// Replay trial 0 and log each human's final state.
fn dump_first_trial<M: MotionModel>(template: &Population, config: &SimConfig, motion: M) -> Result<()> {
    let config = SimConfig { seed: trial_seed(config.seed, TrialId(0)), ..config.clone() };
    let mut sim = SimBuilder::new(config)
        .motion(motion)
        .population(template.clone())
        .build()?;
    sim.run(&mut NoopObserver)?;

    for human in sim.population().humans() {
        log::debug!("{} at ({:.1}, {:.1}): {}", human.id, human.position.x, human.position.y, human.exposure);
        for contact in human.contacts.archive() {
            log::debug!("  contact {contact}");
        }
        for episode in &human.episodes {
            log::debug!("  sick {episode}");
        }
    }
    Ok(())
}
