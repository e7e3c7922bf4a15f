//! Unit tests for zv-epi.

#[cfg(test)]
mod helpers {
    use std::collections::BTreeMap;

    use zv_agent::{AnimalReservoir, Human, Population};
    use zv_core::{AgentId, Position, Tick};

    pub fn human_at(id: u32, x: f32, y: f32) -> Human {
        Human::new(AgentId(id), BTreeMap::from([(Tick(0), Position::new(x, y))]))
    }

    pub fn reservoir_at(id: u32, x: f32, y: f32, radius: f32, rate: f64) -> AnimalReservoir {
        AnimalReservoir::new(AgentId(id), BTreeMap::from([(Tick(0), Position::new(x, y))]), radius, rate)
    }

    pub fn population(humans: Vec<Human>, reservoirs: Vec<AnimalReservoir>) -> Population {
        let mut pop = Population::new();
        for h in humans {
            pop.insert(h).unwrap();
        }
        for r in reservoirs {
            pop.insert(r).unwrap();
        }
        pop
    }
}

#[cfg(test)]
mod tracker {
    use zv_agent::AgentKind;
    use zv_core::{AgentId, HealthStatus, Position, Tick};

    use super::helpers::{human_at, population, reservoir_at};
    use crate::ContactTracker;

    #[test]
    fn observe_skips_self_and_uses_radius_for_reservoirs() {
        let pop = population(
            vec![human_at(0, 0.0, 0.0), human_at(1, 20.0, 0.0), human_at(2, 20.5, 0.0)],
            vec![reservoir_at(100, 0.0, 40.0, 40.0, 0.2), reservoir_at(101, 0.0, -40.5, 40.0, 0.1)],
        );
        let observed = ContactTracker::new(20.0).observe(AgentId(0), &pop).unwrap();
        assert_eq!(observed.len(), 4);
        assert!(observed.iter().all(|p| p.other != AgentId(0)));

        let by_id = |id| observed.iter().find(|p| p.other == AgentId(id)).unwrap();
        assert!(by_id(1).within, "threshold is inclusive");
        assert!(!by_id(2).within);
        assert!(by_id(100).within, "radius is inclusive");
        assert!(!by_id(101).within);
        assert_eq!(by_id(100).kind, AgentKind::Reservoir);
        assert_eq!(by_id(100).status, None);
        assert_eq!(by_id(100).emitted, 0.2);
        assert_eq!(by_id(1).status, Some(HealthStatus::Healthy));
    }

    #[test]
    fn observe_requires_a_human() {
        let pop = population(vec![], vec![reservoir_at(100, 0.0, 0.0, 1.0, 0.0)]);
        assert!(ContactTracker::new(20.0).observe(AgentId(100), &pop).is_err());
        assert!(ContactTracker::new(20.0).observe(AgentId(5), &pop).is_err());
    }

    #[test]
    fn open_extend_close_lifecycle() {
        let tracker = ContactTracker::new(20.0);
        let mut pop = population(vec![human_at(0, 0.0, 0.0), human_at(1, 10.0, 0.0)], vec![]);
        pop.human_mut(AgentId(1)).unwrap().status = HealthStatus::Sick;

        let mut log = zv_agent::ContactLog::new();
        let obs = tracker.observe(AgentId(0), &pop).unwrap();
        let c = tracker.apply(&mut log, &obs, Tick(3));
        assert_eq!(c.opened, 1);

        // Status changes after open are not reflected in the record.
        pop.human_mut(AgentId(1)).unwrap().status = HealthStatus::Healthy;
        pop.human_mut(AgentId(1)).unwrap().position = Position::new(5.0, 0.0);
        let obs = tracker.observe(AgentId(0), &pop).unwrap();
        let c = tracker.apply(&mut log, &obs, Tick(4));
        assert_eq!(c.extended, 1);
        let open = log.get_open(AgentId(1)).unwrap();
        assert_eq!(open.other_status, Some(HealthStatus::Sick));
        assert_eq!(open.total_proximity, 15.0);

        pop.human_mut(AgentId(1)).unwrap().position = Position::new(100.0, 0.0);
        let obs = tracker.observe(AgentId(0), &pop).unwrap();
        let c = tracker.apply(&mut log, &obs, Tick(6));
        assert_eq!(c.closed, 1);
        let closed = log.archive().next().unwrap();
        assert_eq!((closed.start, closed.end), (Tick(3), Some(Tick(6))));
        assert_eq!(closed.average_proximity(), Some(5.0));
    }
}

#[cfg(test)]
mod hazard {
    use approx::assert_relative_eq;
    use zv_agent::{AgentKind, ExposureState};
    use zv_core::{AgentId, AgentRng, HealthStatus, SimConfig};

    use crate::{HazardModel, Proximity};

    fn seen(kind: AgentKind, within: bool, emitted: f64) -> Proximity {
        Proximity { other: AgentId(9), kind, distance: 1.0, within, status: None, emitted }
    }

    #[test]
    fn expose_decays_then_accumulates() {
        let model = HazardModel::from_config(&SimConfig::default());
        let mut e = ExposureState { emitted: 0.0, from_animals: 1.0, from_humans: 2.0 };
        let observed = [
            seen(AgentKind::Reservoir, true, 0.2),
            seen(AgentKind::Reservoir, false, 5.0),
            seen(AgentKind::Human, true, 0.7),
        ];
        model.expose(&mut e, HealthStatus::Sick, &observed);
        assert_eq!(e.emitted, 0.7);
        assert_relative_eq!(e.from_animals, 0.99 + 0.2);
        assert_relative_eq!(e.from_humans, 1.98 + 0.7);
    }

    #[test]
    fn healthy_emits_nothing_by_default() {
        let model = HazardModel::from_config(&SimConfig::default());
        let mut e = ExposureState { emitted: 0.7, ..ExposureState::default() };
        model.expose(&mut e, HealthStatus::Healthy, &[]);
        assert_eq!(e.emitted, 0.0);
    }

    #[test]
    fn probability_formula() {
        let model = HazardModel::from_config(&SimConfig::default());
        let e = ExposureState { emitted: 0.0, from_animals: 0.3, from_humans: 0.2 };
        assert_relative_eq!(model.infection_probability(&e), 1.0 - (-0.5f64).exp());
        assert_eq!(model.infection_probability(&ExposureState::default()), 0.0);
    }

    #[test]
    fn spread_disabled_never_infects() {
        let model = HazardModel::from_config(&SimConfig::default());
        let e = ExposureState { emitted: 0.0, from_animals: 1e6, from_humans: 0.0 };
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!((0..100).all(|_| !model.draw_infection(&e, HealthStatus::Healthy, &mut rng)));
    }

    #[test]
    fn overwhelming_hazard_infects_when_enabled() {
        let cfg = SimConfig { simulate_spread: true, ..SimConfig::default() };
        let model = HazardModel::from_config(&cfg);
        let e = ExposureState { emitted: 0.0, from_animals: 1e3, from_humans: 0.0 };
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(model.draw_infection(&e, HealthStatus::Healthy, &mut rng));
        assert!(!model.draw_infection(&e, HealthStatus::Sick, &mut rng));
        assert!(!model.draw_infection(&ExposureState::default(), HealthStatus::Healthy, &mut rng));
    }
}

#[cfg(test)]
mod estimator {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use crate::{ZoonoticEstimator, poisson_pmf};

    #[test]
    fn poisson_values() {
        assert_relative_eq!(poisson_pmf(0, 2.0), (-2.0f64).exp(), max_relative = 1e-12);
        assert_relative_eq!(poisson_pmf(3, 2.0), 8.0 / 6.0 * (-2.0f64).exp(), max_relative = 1e-12);
        assert_eq!(poisson_pmf(0, 0.0), 1.0);
        assert_eq!(poisson_pmf(2, 0.0), 0.0);
    }

    #[test]
    fn fixed_inputs_match_closed_form() {
        let est = ZoonoticEstimator::default();
        let f = 1.0 - (-0.5f64).exp();
        let zoo = f * (-0.1f64).exp() * 0.01;
        let hum = (1.0 - f) * (-2.0f64).exp() * 0.99;
        assert_relative_eq!(est.posterior(0.5, 0), zoo / (zoo + hum), max_relative = 1e-12);
    }

    #[test]
    fn no_animal_hazard_means_zero() {
        assert_eq!(ZoonoticEstimator::default().posterior(0.0, 0), 0.0);
        assert_eq!(ZoonoticEstimator::default().posterior(-3.0, 1), 0.0);
    }

    #[test]
    fn zero_denominator_is_zero() {
        let est = ZoonoticEstimator { prior: 1.0, lambda_zoonotic: 0.1, lambda_human: 2.0 };
        assert_eq!(est.posterior(0.0, 0), 0.0);
    }

    #[test]
    fn secondary_cases_lower_the_posterior() {
        let est = ZoonoticEstimator::default();
        assert!(est.posterior(1.0, 0) > est.posterior(1.0, 1));
        assert!(est.posterior(1.0, 1) > est.posterior(1.0, 3));
    }

    proptest! {
        #[test]
        fn posterior_is_a_probability(hazard in 0.0f64..1e4, k in 0u32..200) {
            let p = ZoonoticEstimator::default().posterior(hazard, k);
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }
}

#[cfg(test)]
mod ledger {
    use zv_agent::{ContactRecord, ExposureState, Population, SicknessEpisode};
    use zv_core::{AgentId, HealthStatus, SecondaryCaseRule, SimConfig, Tick};

    use super::helpers::{human_at, population, reservoir_at};
    use crate::{EpiError, SicknessLedger, Transition};

    fn archive(pop: &mut Population, owner: u32, other: u32, status: Option<HealthStatus>, start: u64, end: u64) {
        let h = pop.human_mut(AgentId(owner)).unwrap();
        h.contacts.begin(ContactRecord::open(AgentId(other), status, Tick(start), 1.0));
        h.contacts.close(AgentId(other), Tick(end));
    }

    fn sicken(pop: &mut Population, id: u32, start: u64) {
        let h = pop.human_mut(AgentId(id)).unwrap();
        h.episodes.push(SicknessEpisode::open(Tick(start), ExposureState::default()));
        h.status = HealthStatus::Sick;
        h.prev_status = HealthStatus::Sick;
    }

    /// Human 0 falls sick at tick 40 (window opens at 10).  Humans 1 and 2
    /// were healthy contacts who fell sick inside the window; human 3 was
    /// already sick at contact; human 4 fell sick before the window;
    /// contact 9 refers to an agent that is not in the population.
    fn scenario() -> Population {
        let mut pop = population(
            (0..5).map(|i| human_at(i, 0.0, 0.0)).collect(),
            vec![reservoir_at(100, 0.0, 0.0, 10.0, 0.1)],
        );
        archive(&mut pop, 0, 9, Some(HealthStatus::Healthy), 12, 13);
        archive(&mut pop, 0, 1, Some(HealthStatus::Healthy), 20, 25);
        archive(&mut pop, 0, 3, Some(HealthStatus::Sick), 21, 22);
        archive(&mut pop, 0, 100, None, 22, 30);
        archive(&mut pop, 0, 2, Some(HealthStatus::Healthy), 30, 35);
        archive(&mut pop, 0, 4, Some(HealthStatus::Healthy), 5, 8);
        sicken(&mut pop, 1, 45);
        sicken(&mut pop, 2, 50);
        sicken(&mut pop, 3, 40);
        sicken(&mut pop, 4, 2);
        sicken(&mut pop, 0, 40);
        pop
    }

    fn ledger(rule: SecondaryCaseRule) -> SicknessLedger {
        let cfg = SimConfig { incubation_secs: 300, secondary_case_rule: rule, ..SimConfig::default() };
        SicknessLedger::from_config(&cfg)
    }

    #[test]
    fn first_match_stops_at_one() {
        let pop = scenario();
        let n = ledger(SecondaryCaseRule::FirstMatch)
            .secondary_cases(pop.human(AgentId(0)).unwrap(), &pop)
            .unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn every_contact_counts_all_qualifying() {
        let pop = scenario();
        let n = ledger(SecondaryCaseRule::EveryContact)
            .secondary_cases(pop.human(AgentId(0)).unwrap(), &pop)
            .unwrap();
        assert_eq!(n, 2);
    }

    #[test]
    fn healthy_human_is_rejected() {
        let pop = population(vec![human_at(0, 0.0, 0.0)], vec![]);
        let l = ledger(SecondaryCaseRule::FirstMatch);
        let h = pop.human(AgentId(0)).unwrap();
        assert!(matches!(l.secondary_cases(h, &pop), Err(EpiError::NotSick(AgentId(0)))));
        assert!(matches!(l.episode_snapshot(h), Err(EpiError::NotSick(_))));
    }

    #[test]
    fn onset_ongoing_recovery() {
        let l = ledger(SecondaryCaseRule::FirstMatch);
        let mut pop = population(vec![human_at(0, 0.0, 0.0)], vec![]);

        assert_eq!(l.transition(AgentId(0), &mut pop, Tick(1)).unwrap(), None);

        {
            let h = pop.human_mut(AgentId(0)).unwrap();
            h.status = HealthStatus::Sick;
            h.exposure = ExposureState { emitted: 0.7, from_animals: 0.5, from_humans: 0.0 };
        }
        assert_eq!(l.transition(AgentId(0), &mut pop, Tick(2)).unwrap(), Some(Transition::Onset));
        assert_eq!(l.transition(AgentId(0), &mut pop, Tick(3)).unwrap(), Some(Transition::Ongoing));

        let h = pop.human(AgentId(0)).unwrap();
        assert_eq!(h.episodes.len(), 1);
        let ep = &h.episodes[0];
        assert_eq!(ep.start, Tick(2));
        assert_eq!(ep.exposure_at_onset.from_animals, 0.5);
        assert_eq!(ep.secondary_cases, 0);
        assert_eq!(ep.p_zoonotic, l.estimator.posterior(0.5, 0));

        pop.human_mut(AgentId(0)).unwrap().status = HealthStatus::Healthy;
        assert_eq!(l.transition(AgentId(0), &mut pop, Tick(7)).unwrap(), Some(Transition::Recovery));
        assert_eq!(l.transition(AgentId(0), &mut pop, Tick(8)).unwrap(), None);

        pop.human_mut(AgentId(0)).unwrap().status = HealthStatus::Sick;
        assert_eq!(l.transition(AgentId(0), &mut pop, Tick(9)).unwrap(), Some(Transition::Onset));

        let eps = &pop.human(AgentId(0)).unwrap().episodes;
        assert_eq!(eps.len(), 2);
        assert_eq!(eps[0].end, Some(Tick(7)));
        assert!(eps[0].end.unwrap() <= eps[1].start);
        assert!(eps[1].is_ongoing());
    }
}

#[cfg(test)]
mod model {
    use zv_core::{AgentId, AgentRng, HealthStatus, SimConfig, Tick};

    use super::helpers::{human_at, population, reservoir_at};
    use crate::{EpiModel, Transition};

    #[test]
    fn sick_neighbour_raises_human_hazard() {
        let model = EpiModel::from_config(&SimConfig::default());
        let mut pop = population(vec![human_at(0, 0.0, 0.0), human_at(1, 10.0, 0.0)], vec![]);
        let mut rng = AgentRng::new(0, AgentId(0));

        // Human 1 updates first so its emission reflects its sick status.
        pop.human_mut(AgentId(1)).unwrap().status = HealthStatus::Sick;
        let upd = model.update_human(AgentId(1), &mut pop, &mut rng, Tick(0)).unwrap();
        assert_eq!(upd.transition, Some(Transition::Onset));
        assert_eq!(upd.contacts.opened, 1);

        let upd = model.update_human(AgentId(0), &mut pop, &mut rng, Tick(0)).unwrap();
        assert!(!upd.infected);
        assert_eq!(upd.transition, None);
        let h = pop.human(AgentId(0)).unwrap();
        assert_eq!(h.exposure.from_humans, 0.7);
        assert_eq!(h.status, HealthStatus::Healthy);
    }

    #[test]
    fn reservoir_in_radius_raises_animal_hazard() {
        let model = EpiModel::from_config(&SimConfig::default());
        let mut pop = population(vec![human_at(0, 0.0, 0.0)], vec![reservoir_at(100, 30.0, 0.0, 40.0, 0.2)]);
        let mut rng = AgentRng::new(0, AgentId(0));
        for t in 0..2 {
            model.update_human(AgentId(0), &mut pop, &mut rng, Tick(t)).unwrap();
        }
        let h = pop.human(AgentId(0)).unwrap();
        approx::assert_relative_eq!(h.exposure.from_animals, 0.2 * 0.99 + 0.2);
        assert_eq!(h.contacts.get_open(AgentId(100)).unwrap().other_status, None);
    }

    #[test]
    fn spread_enabled_can_infect() {
        let cfg = SimConfig { simulate_spread: true, ..SimConfig::default() };
        let model = EpiModel::from_config(&cfg);
        let mut pop = population(vec![human_at(0, 0.0, 0.0)], vec![reservoir_at(100, 0.0, 0.0, 10.0, 1e3)]);
        let mut rng = AgentRng::new(0, AgentId(0));
        let upd = model.update_human(AgentId(0), &mut pop, &mut rng, Tick(4)).unwrap();
        assert!(upd.infected);
        assert_eq!(upd.transition, Some(Transition::Onset));
        assert_eq!(pop.human(AgentId(0)).unwrap().episodes[0].start, Tick(4));
    }
}
