//! Unit tests for gn-agent.

#[cfg(test)]
mod timer {
    use gn_core::{AgentId, AgentRng, Timestamp};
    use crate::MoveTimer;

    #[test]
    fn due_at_deadline_not_before() {
        let t = MoveTimer::due_at(Timestamp(250));
        assert!(!t.is_due(Timestamp(249)));
        assert!(t.is_due(Timestamp(250)));
        assert!(t.is_due(Timestamp(900)));
    }

    #[test]
    fn reschedule_draws_from_delays() {
        let mut rng = AgentRng::new(5, AgentId(0));
        let mut t = MoveTimer::due_at(Timestamp::ZERO);
        let mut seen = std::collections::HashSet::new();
        for i in 0..200 {
            let now = Timestamp(i * 10);
            let deadline = t.reschedule(now, &mut rng, &[250, 500]);
            let delay = deadline - now;
            assert!(delay == 250 || delay == 500, "unexpected delay {delay}");
            assert_eq!(t.last_delay_ms(), delay);
            seen.insert(delay);
        }
        assert_eq!(seen.len(), 2, "both delays should occur over 200 draws");
    }

    #[test]
    fn scheduled_is_not_immediately_due() {
        let mut rng = AgentRng::new(1, AgentId(1));
        let t = MoveTimer::scheduled(Timestamp(1000), &mut rng, &[250]);
        assert_eq!(t.deadline(), Timestamp(1250));
        assert!(!t.is_due(Timestamp(1000)));
    }

    #[test]
    fn empty_delays_degrade_to_zero() {
        let mut rng = AgentRng::new(1, AgentId(1));
        let t = MoveTimer::scheduled(Timestamp(40), &mut rng, &[]);
        assert!(t.is_due(Timestamp(40)));
    }
}

#[cfg(test)]
mod agent {
    use gn_core::{AgentId, Cell, Timestamp};
    use crate::{Agent, AgentStatus, Health, MoveTimer};

    fn agent(path: Vec<Cell>) -> Agent {
        Agent::new(
            AgentId(0),
            Cell::new(0, 0),
            Cell::new(0, 2),
            path,
            4,
            MoveTimer::due_at(Timestamp::ZERO),
        )
    }

    #[test]
    fn new_agent_claims_own_cell() {
        let a = agent(vec![Cell::new(0, 1), Cell::new(0, 2)]);
        assert_eq!(a.intention, a.cell);
        assert_eq!(a.next_step(), Some(Cell::new(0, 1)));
        assert_eq!(a.status, AgentStatus::Planning);
        assert_eq!(a.health, Health(4));
    }

    #[test]
    fn leading_start_is_stripped() {
        let a = agent(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]);
        assert_eq!(a.path.len(), 2);
        assert_eq!(a.next_step(), Some(Cell::new(0, 1)));
    }

    #[test]
    fn path_edits() {
        let mut a = agent(vec![Cell::new(0, 1)]);
        a.replace_path([Cell::new(1, 0), Cell::new(1, 1)]);
        assert_eq!(a.next_step(), Some(Cell::new(1, 0)));
        a.clear_path();
        assert!(!a.has_path());
        a.intention = Cell::new(0, 1);
        a.hold_position();
        assert_eq!(a.intention, a.cell);
    }

    #[test]
    fn health_only_decreases() {
        let mut h = Health(4);
        assert_eq!(h.take_damage(1), 3);
        assert_eq!(h.take_damage(-5), 3);
        assert!(h.is_alive());
        assert_eq!(h.take_damage(3), 0);
        assert!(!h.is_alive());
    }

    #[test]
    fn terminal_statuses() {
        assert!(AgentStatus::Arrived.is_terminal());
        assert!(AgentStatus::Dead.is_terminal());
        assert!(!AgentStatus::Waiting.is_terminal());
        assert!(!AgentStatus::Evading.is_terminal());
    }
}

#[cfg(test)]
mod store {
    use gn_core::{AgentId, Cell, Timestamp};
    use crate::AgentStore;

    fn spawn(store: &mut AgentStore, col: i32) -> AgentId {
        store.spawn(
            Cell::new(0, col),
            Cell::new(4, col),
            [Cell::new(1, col)],
            4,
            Timestamp::ZERO,
            &[250, 500],
        )
    }

    #[test]
    fn ids_are_monotonic_and_ordered() {
        let mut store = AgentStore::new(42);
        let a = spawn(&mut store, 0);
        let b = spawn(&mut store, 1);
        let c = spawn(&mut store, 2);
        assert_eq!((a, b, c), (AgentId(0), AgentId(1), AgentId(2)));
        assert_eq!(store.ids(), vec![a, b, c]);
        let cols: Vec<i32> = store.iter().map(|ag| ag.cell.col).collect();
        assert_eq!(cols, vec![0, 1, 2]);
    }

    #[test]
    fn remove_and_clear_never_reuse_ids() {
        let mut store = AgentStore::new(42);
        let a = spawn(&mut store, 0);
        let removed = store.remove(a).unwrap();
        assert_eq!(removed.id, a);
        assert!(!store.contains(a));
        assert!(store.is_empty());

        let b = spawn(&mut store, 1);
        assert_eq!(b, AgentId(1));
        store.clear();
        assert!(store.is_empty());
        assert!(store.rngs.is_empty());
        assert_eq!(spawn(&mut store, 2), AgentId(2));
    }

    #[test]
    fn spawn_schedules_timer() {
        let mut store = AgentStore::new(7);
        let a = spawn(&mut store, 0);
        let deadline = store.get(a).unwrap().timer.deadline();
        assert!(deadline == Timestamp(250) || deadline == Timestamp(500));
    }

    #[test]
    fn same_seed_same_timers() {
        let mut s1 = AgentStore::new(99);
        let mut s2 = AgentStore::new(99);
        for col in 0..8 {
            spawn(&mut s1, col);
            spawn(&mut s2, col);
        }
        let d1: Vec<_> = s1.iter().map(|a| a.timer.deadline()).collect();
        let d2: Vec<_> = s2.iter().map(|a| a.timer.deadline()).collect();
        assert_eq!(d1, d2);
    }

    #[test]
    fn agent_and_rng_borrow_together() {
        let mut store = AgentStore::new(3);
        let a = spawn(&mut store, 0);
        let (agent, rng) = store.agent_and_rng_mut(a).unwrap();
        agent.timer.reschedule(Timestamp(1000), rng, &[250]);
        assert_eq!(store.get(a).unwrap().timer.deadline(), Timestamp(1250));
        assert!(store.agent_and_rng_mut(AgentId(99)).is_none());
    }
}
