//! Unit tests for gn-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn next_is_monotonic() {
        let a = AgentId::FIRST;
        assert_eq!(a.next(), AgentId(1));
        assert!(a < a.next());
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "agent#7");
    }
}

#[cfg(test)]
mod cell {
    use crate::{CARDINALS, Cell, Delta};

    #[test]
    fn delta_between_neighbours() {
        let a = Cell::new(2, 3);
        assert_eq!(a.delta_to(Cell::new(2, 4)), Delta::new(0, 1));
        assert_eq!(a.delta_to(Cell::new(1, 3)), Delta::new(-1, 0));
        assert!(a.delta_to(a).is_zero());
    }

    #[test]
    fn step_multiplies_direction() {
        let a = Cell::new(0, 0);
        assert_eq!(a.step(Delta::new(1, 0), 2), Cell::new(2, 0));
        assert_eq!(a.step(Delta::new(0, -1), 2), Cell::new(0, -2));
        assert_eq!(a + Delta::new(0, 1), Cell::new(0, 1));
    }

    #[test]
    fn step_saturates_instead_of_overflowing() {
        let a = Cell::new(1, 1);
        assert_eq!(a.step(Delta::new(1, 0), i32::MAX), Cell::new(i32::MAX, 1));
        assert_eq!(a.step(Delta::new(0, -1), i32::MAX), Cell::new(1, i32::MIN + 2));
        assert_eq!(Cell::new(i32::MIN, 0).step(Delta::new(-1, 0), 5).row, i32::MIN);
    }

    #[test]
    fn cardinals_are_unit_and_distinct() {
        for d in CARDINALS {
            assert_eq!(d.drow.abs() + d.dcol.abs(), 1);
        }
        for (i, a) in CARDINALS.iter().enumerate() {
            for b in &CARDINALS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(1, -2).to_string(), "(1, -2)");
        assert_eq!(Delta::new(0, -1).to_string(), "(+0, -1)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Timestamp};

    #[test]
    fn timestamp_arithmetic() {
        let t = Timestamp(250);
        assert_eq!(t + 250, Timestamp(500));
        assert_eq!(t.after_ms(100), Timestamp(350));
        assert_eq!(Timestamp(500) - Timestamp(250), 250);
        assert_eq!(Timestamp(100).since(Timestamp(300)), 0);
    }

    #[test]
    fn clock_advances_by_frame() {
        let mut clock = SimClock::new(33);
        assert_eq!(clock.now(), Timestamp::ZERO);
        assert_eq!(clock.advance(), Timestamp(33));
        assert_eq!(clock.advance(), Timestamp(66));
        assert_eq!(clock.frame, 2);
    }

    #[test]
    fn frames_for_ms_rounds_up() {
        let clock = SimClock::new(33);
        assert_eq!(clock.frames_for_ms(250), 8);
        assert_eq!(clock.frames_for_ms(33), 1);
        assert_eq!(clock.frames_for_ms(0), 0);
    }
}

#[cfg(test)]
mod config {
    use crate::{Geometry, NavConfig};

    #[test]
    fn default_matches_front_end_constants() {
        let cfg = NavConfig::default();
        assert_eq!(cfg.resolution, 20);
        assert_eq!(cfg.initial_health, 4);
        assert_eq!(cfg.move_delays_ms, vec![250, 500]);
        assert_eq!(cfg.evasion_reach, 2);
        assert_eq!(cfg.geometry, Geometry::Rectangular);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn reach_up_to_resolution_is_valid() {
        let cfg = NavConfig { resolution: 5, evasion_reach: 5, ..NavConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let bad = [
            NavConfig { resolution: 0, ..NavConfig::default() },
            NavConfig { move_delays_ms: vec![], ..NavConfig::default() },
            NavConfig { initial_health: 0, ..NavConfig::default() },
            NavConfig { evasion_reach: 0, ..NavConfig::default() },
            NavConfig { evasion_reach: 21, ..NavConfig::default() },
            NavConfig { evasion_reach: i32::MAX, ..NavConfig::default() },
        ];
        for cfg in bad {
            assert!(cfg.validate().is_err(), "{cfg:?} should be rejected");
        }
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            assert_eq!(r1.next_u64(), r2.next_u64());
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        assert_ne!(r0.next_u64(), r1.next_u64(), "seeds for adjacent agents should diverge");
    }

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = AgentRng::new(9, AgentId(3));
        let mut v = [1, 2, 3, 4];
        rng.shuffle(&mut v);
        let mut sorted = v;
        sorted.sort();
        assert_eq!(sorted, [1, 2, 3, 4]);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = AgentRng::new(0, AgentId(0));
        let empty: [u64; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[250]), Some(&250));
    }

    #[test]
    fn sim_rng_reproducible() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        for _ in 0..10 {
            assert_eq!(a.coord_below(20), b.coord_below(20));
        }
    }

    #[test]
    fn coords_stay_in_range() {
        let mut rng = SimRng::new(3);
        for _ in 0..500 {
            let c = rng.coord_below(5);
            assert!((0..5).contains(&c));
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(7);
        let mut a = root.child(1);
        let mut b = root.child(1);
        assert_ne!(a.next_seed(), b.next_seed());
    }
}
