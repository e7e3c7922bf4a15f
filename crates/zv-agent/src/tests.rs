//! Unit tests for zv-agent.

#[cfg(test)]
mod exposure {
    use approx::assert_relative_eq;

    use crate::ExposureState;

    #[test]
    fn decay_leaves_emitted_alone() {
        let mut e = ExposureState { emitted: 0.7, from_animals: 1.0, from_humans: 2.0 };
        e.decay(0.5);
        assert_eq!(e.emitted, 0.7);
        assert_relative_eq!(e.from_animals, 0.5);
        assert_relative_eq!(e.from_humans, 1.0);
        assert_relative_eq!(e.total(), 1.5);
    }
}

#[cfg(test)]
mod contact_record {
    use approx::assert_relative_eq;
    use zv_core::{AgentId, HealthStatus, Tick};

    use crate::ContactRecord;

    #[test]
    fn open_record_has_no_duration() {
        let r = ContactRecord::open(AgentId(1), Some(HealthStatus::Healthy), Tick(5), 12.0);
        assert!(r.is_open());
        assert_eq!(r.duration(), None);
        assert_eq!(r.average_proximity(), None);
    }

    #[test]
    fn average_over_closed_interval() {
        let mut r = ContactRecord::open(AgentId(1), None, Tick(5), 10.0);
        r.accumulate(6.0);
        r.accumulate(2.0);
        r.end = Some(Tick(9));
        assert_eq!(r.duration(), Some(4));
        assert_relative_eq!(r.average_proximity().unwrap(), 18.0 / 4.0);
    }

    #[test]
    fn zero_duration_average_is_none() {
        let mut r = ContactRecord::open(AgentId(1), None, Tick(5), 3.0);
        r.end = Some(Tick(5));
        assert_eq!(r.duration(), Some(0));
        assert_eq!(r.average_proximity(), None);
    }

    #[test]
    fn display_mentions_interval() {
        let mut r = ContactRecord::open(AgentId(3), Some(HealthStatus::Sick), Tick(2), 1.5);
        assert!(r.to_string().contains("open"));
        r.end = Some(Tick(4));
        let s = r.to_string();
        assert!(s.contains("AgentId(3)"), "{s}");
        assert!(s.contains("T2..T4"), "{s}");
        assert!(s.contains("sick"), "{s}");
    }
}

#[cfg(test)]
mod contact_log {
    use zv_core::{AgentId, HealthStatus, Tick};

    use crate::{ContactLog, ContactRecord};

    fn rec(other: u32, start: u64) -> ContactRecord {
        ContactRecord::open(AgentId(other), Some(HealthStatus::Healthy), Tick(start), 1.0)
    }

    #[test]
    fn begin_rejects_second_open_with_same_agent() {
        let mut log = ContactLog::new();
        assert!(log.begin(rec(1, 0)));
        assert!(!log.begin(rec(1, 3)));
        assert_eq!(log.open_count(), 1);
        assert_eq!(log.get_open(AgentId(1)).unwrap().start, Tick(0));
    }

    #[test]
    fn extend_requires_open_contact() {
        let mut log = ContactLog::new();
        assert!(!log.extend(AgentId(1), 4.0));
        log.begin(rec(1, 0));
        assert!(log.extend(AgentId(1), 4.0));
        assert_eq!(log.get_open(AgentId(1)).unwrap().total_proximity, 5.0);
    }

    #[test]
    fn close_moves_to_archive() {
        let mut log = ContactLog::new();
        log.begin(rec(1, 2));
        let closed = log.close(AgentId(1), Tick(6)).cloned().unwrap();
        assert_eq!(closed.end, Some(Tick(6)));
        assert_eq!(log.open_count(), 0);
        assert_eq!(log.archived_count(), 1);
        assert!(log.close(AgentId(1), Tick(7)).is_none());
    }

    #[test]
    fn same_tick_contacts_do_not_collide() {
        let mut log = ContactLog::new();
        log.begin(rec(1, 4));
        log.begin(rec(2, 4));
        log.close(AgentId(1), Tick(5));
        log.close(AgentId(2), Tick(6));
        assert_eq!(log.archived_count(), 2);
    }

    #[test]
    fn archived_since_is_start_ordered_range() {
        let mut log = ContactLog::new();
        for (other, start, end) in [(3, 10, 12), (1, 2, 4), (2, 7, 8)] {
            log.begin(rec(other, start));
            log.close(AgentId(other), Tick(end));
        }
        let starts: Vec<u64> = log.archive().map(|r| r.start.0).collect();
        assert_eq!(starts, vec![2, 7, 10]);
        let since: Vec<u32> = log.archived_since(Tick(7)).map(|r| r.other.0).collect();
        assert_eq!(since, vec![2, 3]);
    }
}

#[cfg(test)]
mod contact_log_props {
    use proptest::prelude::*;
    use zv_core::{AgentId, Tick};

    use crate::{ContactLog, ContactRecord};

    proptest! {
        /// Drive the log the way the contact tracker does, one observation per
        /// other agent per tick, and check the interval properties.
        #[test]
        fn intervals_stay_well_formed(
            ticks in prop::collection::vec(prop::collection::vec((any::<bool>(), 0.0f32..20.0), 4), 1..40)
        ) {
            let mut log = ContactLog::new();
            for (t, row) in ticks.iter().enumerate() {
                let now = Tick(t as u64);
                for (other, &(within, d)) in row.iter().enumerate() {
                    let other = AgentId(other as u32);
                    match (within, log.get_open(other).is_some()) {
                        (true, false) => { log.begin(ContactRecord::open(other, None, now, d)); }
                        (true, true)  => { log.extend(other, d); }
                        (false, true) => { log.close(other, now); }
                        (false, false) => {}
                    }
                }
                let mut seen = std::collections::BTreeSet::new();
                for r in log.open_contacts() {
                    prop_assert!(seen.insert(r.other));
                    prop_assert!(r.is_open());
                }
            }
            for r in log.archive() {
                let end = r.end.expect("archived contacts are closed");
                prop_assert!(end >= r.start);
            }
        }
    }
}

#[cfg(test)]
mod human {
    use std::collections::BTreeMap;

    use zv_core::{AgentId, HealthStatus, Position, Tick};

    use crate::{ExposureState, Human, SicknessEpisode};

    fn path() -> BTreeMap<Tick, Position> {
        BTreeMap::from([
            (Tick(0), Position::new(50.0, 150.0)),
            (Tick(3), Position::new(200.0, 150.0)),
            (Tick(29), Position::new(200.0, 150.0)),
        ])
    }

    #[test]
    fn starts_at_first_waypoint() {
        let h = Human::new(AgentId(0), path());
        assert_eq!(h.position, Position::new(50.0, 150.0));
        assert_eq!(h.status, HealthStatus::Healthy);
    }

    #[test]
    fn empty_trajectory_starts_at_origin() {
        let h = Human::new(AgentId(0), BTreeMap::new());
        assert_eq!(h.position, Position::ORIGIN);
    }

    #[test]
    fn next_waypoint_is_strictly_after() {
        let h = Human::new(AgentId(0), path());
        assert_eq!(h.next_waypoint_after(Tick(0)).map(|(t, _)| t), Some(Tick(3)));
        assert_eq!(h.next_waypoint_after(Tick(3)).map(|(t, _)| t), Some(Tick(29)));
        assert_eq!(h.next_waypoint_after(Tick(29)), None);
    }

    #[test]
    fn current_episode_only_when_ongoing() {
        let mut h = Human::new(AgentId(0), path());
        assert!(h.current_episode().is_none());
        h.episodes.push(SicknessEpisode::open(Tick(4), ExposureState::default()));
        assert!(h.current_episode().is_some());
        h.current_episode_mut().unwrap().end = Some(Tick(9));
        assert!(h.current_episode().is_none());
        assert!(h.has_episode_since(Tick(4)));
        assert!(!h.has_episode_since(Tick(5)));
    }
}

#[cfg(test)]
mod population {
    use std::collections::BTreeMap;

    use zv_core::{AgentId, Position, Tick, ZvError};

    use crate::{AgentKind, AgentRngs, AnimalReservoir, Human, Population, PopulationBuilder};

    fn at(x: f32, y: f32) -> BTreeMap<Tick, Position> {
        BTreeMap::from([(Tick(0), Position::new(x, y))])
    }

    fn sample() -> Population {
        PopulationBuilder::new()
            .human(Human::new(AgentId(1), at(0.0, 0.0)))
            .reservoir(AnimalReservoir::new(AgentId(100), at(10.0, 0.0), 40.0, 0.2))
            .human(Human::new(AgentId(0), at(5.0, 5.0)))
            .build()
            .unwrap()
    }

    #[test]
    fn population_order_is_registration_order() {
        let pop = sample();
        let ids: Vec<u32> = pop.iter().map(|a| a.id().0).collect();
        assert_eq!(ids, vec![1, 100, 0]);
        assert_eq!(pop.human_ids(), vec![AgentId(1), AgentId(0)]);
        assert_eq!(pop.slot(AgentId(0)), Some(2));
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut pop = sample();
        let err = pop.insert(Human::new(AgentId(100), BTreeMap::new())).unwrap_err();
        assert!(matches!(err, ZvError::DuplicateAgent(AgentId(100))));
        assert_eq!(pop.len(), 3);
    }

    #[test]
    fn builder_surfaces_duplicates() {
        let res = PopulationBuilder::new()
            .human(Human::new(AgentId(0), BTreeMap::new()))
            .human(Human::new(AgentId(0), BTreeMap::new()))
            .build();
        assert!(res.is_err());
    }

    #[test]
    fn human_lookup_errors() {
        let pop = sample();
        assert!(pop.human(AgentId(0)).is_ok());
        assert!(matches!(pop.human(AgentId(100)), Err(ZvError::NotHuman(_))));
        assert!(matches!(pop.human(AgentId(7)), Err(ZvError::AgentNotFound(_))));
    }

    #[test]
    fn reservoir_emits_its_rate() {
        let pop = sample();
        let res = pop.get(AgentId(100)).unwrap();
        assert_eq!(res.kind(), AgentKind::Reservoir);
        assert_eq!(res.emitted(), 0.2);
        assert_eq!(res.status(), None);
        let r = res.as_reservoir().unwrap();
        assert!(r.reaches(Position::new(50.0, 0.0)));
        assert!(!r.reaches(Position::new(50.1, 0.0)));
    }

    #[test]
    fn clone_is_independent() {
        let template = sample();
        let mut copy = template.clone();
        copy.human_mut(AgentId(0)).unwrap().position = Position::new(99.0, 99.0);
        assert_eq!(template.human(AgentId(0)).unwrap().position, Position::new(5.0, 5.0));
    }

    #[test]
    fn rngs_follow_ids_not_slots() {
        let pop = sample();
        let mut a = AgentRngs::seeded(&pop, 7);
        let reordered = PopulationBuilder::new()
            .human(Human::new(AgentId(0), at(5.0, 5.0)))
            .human(Human::new(AgentId(1), at(0.0, 0.0)))
            .build()
            .unwrap();
        let mut b = AgentRngs::seeded(&reordered, 7);
        assert_eq!(a.len(), 3);
        // AgentId(0) is slot 2 in `pop` and slot 0 in `reordered`.
        let x: u64 = a.get_mut(2).unwrap().random();
        let y: u64 = b.get_mut(0).unwrap().random();
        assert_eq!(x, y);
    }
}
