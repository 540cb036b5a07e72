//! Unit tests for steer-agent.

use steer_core::{AgentId, SteerError, Vec2};

use crate::AgentStoreBuilder;

#[cfg(test)]
mod store {
    use super::*;

    #[test]
    fn builder_allocates_all_arrays() {
        let (store, rngs) = AgentStoreBuilder::new(4, 0).build();
        assert_eq!(store.count, 4);
        assert_eq!(store.position.len(), 4);
        assert_eq!(store.rotation.len(), 4);
        assert_eq!(rngs.len(), 4);
        assert!(store.position.iter().all(|&p| p == Vec2::ZERO));
    }

    #[test]
    fn position_lookup_by_handle() {
        let (store, _) = AgentStoreBuilder::new(2, 0)
            .position(0, Vec2::new(1.0, 2.0))
            .position(1, Vec2::new(-3.0, 4.0))
            .build();
        assert_eq!(store.position(AgentId(0)), Some(Vec2::new(1.0, 2.0)));
        assert_eq!(store.position(AgentId(1)), Some(Vec2::new(-3.0, 4.0)));
    }

    #[test]
    fn stale_handle_resolves_to_none() {
        let (store, _) = AgentStoreBuilder::new(1, 0).build();
        assert_eq!(store.position(AgentId(5)), None);
        assert_eq!(store.position(AgentId::INVALID), None);
    }

    #[test]
    fn set_position_and_rotation() {
        let (mut store, _) = AgentStoreBuilder::new(1, 0).build();
        store.set_position(AgentId(0), Vec2::new(7.0, 8.0)).unwrap();
        store.set_rotation(AgentId(0), 1.5).unwrap();
        assert_eq!(store.position[0], Vec2::new(7.0, 8.0));
        assert_eq!(store.rotation(AgentId(0)).unwrap(), 1.5);
    }

    #[test]
    fn set_on_unknown_agent_errors() {
        let (mut store, _) = AgentStoreBuilder::new(1, 0).build();
        let err = store.set_position(AgentId(9), Vec2::ZERO).unwrap_err();
        assert!(matches!(err, SteerError::AgentNotFound(AgentId(9))));
    }

    #[test]
    fn agent_ids_ascending() {
        let (store, _) = AgentStoreBuilder::new(3, 0).build();
        let ids: Vec<_> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2)]);
    }
}

#[cfg(test)]
mod rngs {
    use super::*;

    #[test]
    fn per_agent_streams_are_deterministic() {
        let (_, mut a) = AgentStoreBuilder::new(2, 42).build();
        let (_, mut b) = AgentStoreBuilder::new(2, 42).build();
        assert_eq!(
            a.get_mut(AgentId(0)).random::<u64>(),
            b.get_mut(AgentId(0)).random::<u64>()
        );
        assert_eq!(
            a.get_mut(AgentId(1)).random::<u64>(),
            b.get_mut(AgentId(1)).random::<u64>()
        );
    }

    #[test]
    fn growing_population_preserves_existing_seeds() {
        let (_, mut small) = AgentStoreBuilder::new(1, 42).build();
        let (_, mut large) = AgentStoreBuilder::new(8, 42).build();
        assert_eq!(
            small.get_mut(AgentId(0)).random::<u64>(),
            large.get_mut(AgentId(0)).random::<u64>()
        );
    }
}
