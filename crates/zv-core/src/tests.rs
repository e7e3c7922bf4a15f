//! Unit tests for zv-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, TrialId};

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(TrialId(100) > TrialId(99));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(TrialId(3).to_string(), "TrialId(3)");
    }

    #[test]
    fn from_raw() {
        assert_eq!(AgentId::from(12), AgentId(12));
        assert_eq!(AgentId(12).raw(), 12);
    }
}

#[cfg(test)]
mod geo {
    use approx::assert_relative_eq;

    use crate::Position;

    #[test]
    fn zero_distance() {
        let p = Position::new(120.0, -35.5);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn three_four_five() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_relative_eq!(a.distance(b), 5.0);
        assert_relative_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn offset_translates() {
        let p = Position::new(1.0, 2.0).offset(-1.0, 3.0);
        assert_eq!(p, Position::new(0.0, 5.0));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick, seconds_to_ticks};

    #[test]
    fn ticks_since() {
        assert_eq!(Tick(15).since(Tick(10)), 5);
        assert_eq!(Tick(7).since(Tick(7)), 0);
    }

    #[test]
    fn saturating_back_stops_at_zero() {
        assert_eq!(Tick(40).saturating_back(30), Tick(10));
        assert_eq!(Tick(12).saturating_back(30), Tick::ZERO);
    }

    #[test]
    fn seconds_truncate_to_ticks() {
        assert_eq!(seconds_to_ticks(0.0, 10), Tick(0));
        assert_eq!(seconds_to_ticks(9.9, 10), Tick(0));
        assert_eq!(seconds_to_ticks(305.0, 10), Tick(30));
        assert_eq!(seconds_to_ticks(600.0, 10), Tick(60));
    }

    #[test]
    fn degenerate_seconds_map_to_zero() {
        assert_eq!(seconds_to_ticks(-50.0, 10), Tick(0));
        assert_eq!(seconds_to_ticks(f64::NAN, 10), Tick(0));
        assert_eq!(seconds_to_ticks(100.0, 0), Tick(0));
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(10);
        assert_eq!(clock.elapsed_secs(), 0);
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 10);
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 20);
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn clock_display() {
        let mut clock = SimClock::new(10);
        for _ in 0..7 {
            clock.advance();
        }
        assert_eq!(clock.to_string(), "T7 (1m10s)");
    }
}

#[cfg(test)]
mod config {
    use crate::{SecondaryCaseRule, SimConfig, Tick, ZvError};

    #[test]
    fn defaults_match_reference_constants() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.tick_duration_secs, 10);
        assert_eq!(cfg.proximity_threshold, 20.0);
        assert_eq!(cfg.hazard_decay, 0.99);
        assert_eq!(cfg.sick_emission, 0.7);
        assert_eq!(cfg.healthy_emission, 0.0);
        assert!(!cfg.simulate_spread);
        assert_eq!(cfg.motion_jitter, 8);
        assert_eq!(cfg.prior_zoonotic, 0.01);
        assert_eq!(cfg.lambda_zoonotic, 0.1);
        assert_eq!(cfg.lambda_human, 2.0);
        assert_eq!(cfg.secondary_case_rule, SecondaryCaseRule::FirstMatch);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn end_tick_and_incubation() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.end_tick(), Tick(60));
        assert_eq!(cfg.incubation_ticks(), 30);
    }

    #[test]
    fn zero_tick_duration_rejected() {
        let cfg = SimConfig { tick_duration_secs: 0, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(ZvError::Config(_))));
    }

    #[test]
    fn decay_out_of_range_rejected() {
        let cfg = SimConfig { hazard_decay: 1.5, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { hazard_decay: f64::NAN, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_lambda_rejected() {
        let cfg = SimConfig { lambda_human: -1.0, ..SimConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("lambda_human"), "got {err}");
    }

    #[test]
    fn negative_threshold_rejected() {
        let cfg = SimConfig { proximity_threshold: -0.1, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rule_labels() {
        assert_eq!(SecondaryCaseRule::FirstMatch.to_string(), "first_match");
        assert_eq!(SecondaryCaseRule::EveryContact.to_string(), "every_contact");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, TrialId, trial_seed};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn jitter_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.jitter(8);
            assert!((-8.0..=8.0).contains(&v));
            assert_eq!(v.fract(), 0.0, "jitter is integral");
        }
        assert_eq!(rng.jitter(0), 0.0);
    }

    #[test]
    fn trial_seeds_are_distinct_and_stable() {
        let a = trial_seed(42, TrialId(0));
        let b = trial_seed(42, TrialId(1));
        assert_ne!(a, b);
        assert_eq!(a, trial_seed(42, TrialId(0)));
        assert_ne!(a, 42, "trial 0 must not reuse the base seed verbatim");
    }
}

#[cfg(test)]
mod status {
    use crate::HealthStatus;

    #[test]
    fn labels_round_trip() {
        assert_eq!(HealthStatus::parse("SICK"), Some(HealthStatus::Sick));
        assert_eq!(HealthStatus::parse(" healthy "), Some(HealthStatus::Healthy));
        assert_eq!(HealthStatus::parse("zombie"), None);
        assert_eq!(HealthStatus::Sick.to_string(), "sick");
    }

    #[test]
    fn default_is_healthy() {
        assert_eq!(HealthStatus::default(), HealthStatus::Healthy);
        assert!(!HealthStatus::Healthy.is_sick());
    }
}
