use paging::{Access, Eviction, PagingEngine, PagingError, SimulationConfig};

const CLASSIC_ADDRESSES: [usize; 10] = [1, 4, 9, 12, 8, 13, 20, 24, 4, 28];

fn classic_engine() -> PagingEngine {
    PagingEngine::from_config(&SimulationConfig::default()).unwrap()
}

fn resident_pages(engine: &PagingEngine) -> Vec<Option<usize>> {
    engine
        .frames()
        .iter()
        .map(|frame| frame.page.map(|page| page.number()))
        .collect()
}

/// Valid bit set exactly for pages held by a frame, at that frame's index,
/// and the load order tracks the same set.
fn assert_consistent(engine: &PagingEngine) {
    let table = engine.page_table();
    let order = engine.load_order();

    assert!(order.len() <= engine.frame_count());
    assert_eq!(order.len(), table.resident_count());

    for row in table.entries() {
        let holder = engine
            .frames()
            .iter()
            .find(|frame| frame.page.map(|page| page.number()) == Some(row.page_number));

        match row.entry.frame() {
            Some(frame_number) => {
                assert_eq!(holder.map(|frame| frame.index), Some(frame_number));
                assert!(order.contains(&row.page_number));
            }
            None => {
                assert!(holder.is_none());
                assert!(!order.contains(&row.page_number));
            }
        }
    }
}

#[test]
fn classic_scenario_matches_expected_trace() {
    let mut engine = classic_engine();

    let evictions: Vec<Option<Eviction>> = CLASSIC_ADDRESSES
        .iter()
        .map(|&address| {
            let translation = engine.access(address).unwrap();
            assert_consistent(&engine);
            translation.evicted()
        })
        .collect();

    let evict = |page_number, frame_number| {
        Some(Eviction {
            page_number,
            frame_number,
        })
    };

    assert_eq!(
        evictions,
        vec![
            None,
            None,
            None,
            None,
            None,
            None,
            evict(0, 0),
            evict(1, 1),
            evict(2, 2),
            evict(3, 3),
        ]
    );

    assert_eq!(resident_pages(&engine), vec![Some(5), Some(6), Some(1), Some(7)]);
    assert_eq!(engine.load_order(), vec![5, 6, 1, 7]);
}

#[test]
fn classic_scenario_hits_on_resident_pages() {
    let mut engine = classic_engine();

    let outcomes: Vec<bool> = CLASSIC_ADDRESSES
        .iter()
        .map(|&address| engine.access(address).unwrap().is_hit())
        .collect();

    assert_eq!(
        outcomes,
        vec![false, false, false, false, true, true, false, false, false, false]
    );
}

#[test]
fn offset_and_page_follow_integer_division() {
    let mut engine = PagingEngine::new(8, 24, 10).unwrap();

    for address in (0..engine.process_size()).rev() {
        let translation = engine.access(address).unwrap();

        assert_eq!(translation.page_number, address / 8);
        assert_eq!(translation.offset, address % 8);
        assert_eq!(
            translation.physical_address,
            translation.frame_number * 8 + translation.offset
        );
        assert_consistent(&engine);
    }
}

#[test]
fn repeated_hits_do_not_change_state() {
    let mut engine = classic_engine();

    for address in [0, 4, 8] {
        engine.access(address).unwrap();
    }

    let frames = engine.frames().to_vec();
    let order = engine.load_order();
    let rows: Vec<_> = engine.page_table().entries().collect();

    for _ in 0..5 {
        for address in [3, 5, 10] {
            assert_eq!(engine.access(address).unwrap().access, Access::Hit);
        }
    }

    assert_eq!(engine.frames(), &frames[..]);
    assert_eq!(engine.load_order(), order);
    assert_eq!(engine.page_table().entries().collect::<Vec<_>>(), rows);
}

#[test]
fn pages_are_evicted_in_load_order() {
    let mut engine = PagingEngine::new(1, 3, 12).unwrap();

    let mut loaded = Vec::new();
    let mut evicted = Vec::new();

    // Revisits of resident pages mixed in; they must not disturb the order.
    for address in [0, 1, 0, 2, 1, 3, 4, 3, 5, 6, 7, 11, 10, 9, 8, 2] {
        let translation = engine.access(address).unwrap();

        if translation.is_fault() {
            loaded.push(translation.page_number);
        }
        if let Some(eviction) = translation.evicted() {
            evicted.push(eviction.page_number);
        }
        assert_consistent(&engine);
    }

    assert_eq!(evicted[..], loaded[..evicted.len()]);
}

#[test]
fn evicted_page_reloads_at_the_tail() {
    let mut engine = classic_engine();

    for address in [0, 4, 8, 12, 16] {
        engine.access(address).unwrap();
    }
    assert_eq!(engine.load_order(), vec![1, 2, 3, 4]);

    let translation = engine.access(0).unwrap();

    assert_eq!(translation.evicted().map(|e| e.page_number), Some(1));
    assert_eq!(engine.load_order(), vec![2, 3, 4, 0]);
}

#[test]
fn address_bounds_are_exclusive_at_process_size() {
    let mut engine = classic_engine();

    assert!(engine.access(31).is_ok());
    assert_eq!(
        engine.access(32),
        Err(PagingError::AddressOutOfBounds {
            address: 32,
            process_size: 32
        })
    );
    assert!(matches!(
        engine.access(usize::MAX),
        Err(PagingError::AddressOutOfBounds { .. })
    ));
}

#[test]
fn process_created_from_its_size() {
    let config = SimulationConfig::for_process(30, 4, 16).unwrap();
    let mut engine = PagingEngine::from_config(&config).unwrap();

    assert_eq!(engine.page_count(), 8);
    assert_eq!(engine.frame_count(), 4);
    assert_eq!(engine.memory_size(), 16);
    // The last page is rounded up, so its tail is addressable.
    assert!(engine.access(31).is_ok());
}

#[test]
fn uneven_memory_is_rejected() {
    assert!(matches!(
        PagingEngine::new(4, 15, 8),
        Err(PagingError::InvalidConstruction { .. })
    ));
    assert!(SimulationConfig::for_process(32, 4, 15).is_err());
}
