//! Tests for the trial driver.

#[cfg(test)]
mod cli_tests {
    use std::io::Write;

    use clap::Parser;
    use zv_core::{SecondaryCaseRule, SimConfig};

    use crate::cli::{Cli, MotionArg};

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["zv-trials"]).unwrap();
        assert_eq!(cli.dataset, "RD");
        assert_eq!(cli.trials, 10);
        assert_eq!(cli.motion, MotionArg::NoisyInterp);

        let config = cli.sim_config().unwrap();
        assert_eq!(config.output_interval_ticks, 0);
        assert!(!config.simulate_spread);
        assert_eq!(config.seed, SimConfig::default().seed);
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "zv-trials", "--seed", "7", "--spread", "--rule", "every-contact", "--snapshots",
        ])
        .unwrap();
        let config = cli.sim_config().unwrap();
        assert_eq!(config.seed, 7);
        assert!(config.simulate_spread);
        assert_eq!(config.secondary_case_rule, SecondaryCaseRule::EveryContact);
        assert_eq!(config.output_interval_ticks, 1);
    }

    #[test]
    fn partial_json_config_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "hazard_decay": 0.5, "seed": 3 }}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from(["zv-trials", "--config", &path, "--seed", "9"]).unwrap();
        let config = cli.sim_config().unwrap();
        assert_eq!(config.hazard_decay, 0.5);
        assert_eq!(config.seed, 9);
        assert_eq!(config.sick_emission, SimConfig::default().sick_emission);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "hazard_decay": 2.0 }}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from(["zv-trials", "--config", &path]).unwrap();
        assert!(cli.sim_config().is_err());
    }

    #[test]
    fn unknown_rule_is_a_parse_error() {
        assert!(Cli::try_parse_from(["zv-trials", "--rule", "sometimes"]).is_err());
    }
}

#[cfg(test)]
mod run_tests {
    use clap::Parser;
    use zv_mobility::NoisyInterpolation;
    use zv_scenario::datasets;

    use crate::cli::Cli;

    #[test]
    fn writes_tables_and_matrices() {
        let out = tempfile::tempdir().unwrap();
        let root = out.path().to_str().unwrap().to_string();
        let cli = Cli::try_parse_from([
            "zv-trials", "--dataset", "d0", "--trials", "3", "--output", &root, "--run-id", "t",
        ])
        .unwrap();
        let config = cli.sim_config().unwrap();
        let scenario = datasets::by_name(&cli.dataset).unwrap();
        let template = scenario.build_population(config.tick_duration_secs).unwrap();

        let dir = crate::run(&cli, &config, &scenario.name, &template, NoisyInterpolation::default()).unwrap();
        assert!(dir.ends_with("D0/h_noisy_interp"));
        for name in [
            "human_results.csv",
            "sickness_episodes.csv",
            "t_Secondary_Cases.csv",
            "t_Animal_Hazard___Sickness.csv",
            "t_Human_Hazard___Sickness.csv",
            "t_P_Zoonotic.csv",
        ] {
            assert!(dir.join(name).exists(), "missing {name}");
        }

        let text = std::fs::read_to_string(dir.join("t_P_Zoonotic.csv")).unwrap();
        let rows: Vec<_> = text.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.split(',').count() == 3));
    }

    #[test]
    fn snapshots_run_sequentially_into_the_same_writer() {
        let out = tempfile::tempdir().unwrap();
        let root = out.path().to_str().unwrap().to_string();
        let cli = Cli::try_parse_from([
            "zv-trials", "--trials", "2", "--output", &root, "--snapshots", "--run-id", "s",
        ])
        .unwrap();
        let config = cli.sim_config().unwrap();
        let scenario = datasets::rd();
        let template = scenario.build_population(config.tick_duration_secs).unwrap();

        let dir = crate::run(&cli, &config, &scenario.name, &template, NoisyInterpolation::default()).unwrap();
        let mut rdr = csv::Reader::from_path(dir.join("agent_snapshots.csv")).unwrap();
        // 61 ticks × 4 agents × 2 trials.
        assert_eq!(rdr.records().count(), 488);
    }
}
