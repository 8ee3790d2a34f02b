use std::collections::HashSet;

use super::{names, Cache, Catalog, Event, Hardware, Level, Op, OpResult, Software};
use crate::error::Error;
use crate::ffi::bindings as b;

#[test]
fn test_lookup_all_standard_names() {
    let catalog = Catalog::standard();
    for desc in catalog.descriptors() {
        let found = catalog.lookup(desc.name).unwrap();
        assert_eq!(found, desc);
    }
}

#[test]
fn test_standard_names_are_unique() {
    let catalog = Catalog::standard();
    let unique: HashSet<_> = catalog.descriptors().iter().map(|it| it.name).collect();
    assert_eq!(unique.len(), catalog.descriptors().len());
    assert_eq!(unique.len(), 33);
}

#[test]
fn test_lookup_unknown_name() {
    let catalog = Catalog::standard();
    for name in ["", "Cycles", "cycles ", "l2_read_refs", "wall_clock_ns"] {
        match catalog.lookup(name) {
            Err(Error::UnknownCounter(it)) => assert_eq!(it, name),
            other => panic!("unexpected lookup result for {:?}: {:?}", name, other),
        }
    }
}

#[test]
fn test_hardware_config() {
    let desc = Catalog::standard().lookup(names::BRANCH_MISSES).unwrap();
    assert_eq!(desc.event, Event::Hardware(Hardware::BranchMiss));

    let cfg = desc.event.config();
    assert_eq!(cfg.ty, b::PERF_TYPE_HARDWARE);
    assert_eq!(cfg.config, 5);
}

#[test]
fn test_software_config() {
    let desc = Catalog::standard().lookup(names::PAGE_FAULTS_MAJ).unwrap();
    assert_eq!(desc.event, Event::Software(Software::MajorPageFault));

    let cfg = desc.event.config();
    assert_eq!(cfg.ty, b::PERF_TYPE_SOFTWARE);
    assert_eq!(cfg.config, 6);
}

#[test]
fn test_cache_config_encoding() {
    let catalog = Catalog::standard();

    let cfg = catalog.lookup(names::L1_READ_REF).unwrap().event.config();
    assert_eq!(cfg.ty, b::PERF_TYPE_HW_CACHE);
    assert_eq!(cfg.config, 0);

    let cfg = catalog.lookup(names::L3_READ_MISS).unwrap().event.config();
    assert_eq!(cfg.config, 2 | (1 << 16));

    let cfg = catalog.lookup(names::L3_PREFETCH_MISS).unwrap().event.config();
    assert_eq!(cfg.config, 2 | (2 << 8) | (1 << 16));

    let cfg = catalog.lookup(names::L1_WRITE_MISS).unwrap().event.config();
    assert_eq!(cfg.config, (1 << 8) | (1 << 16));
}

#[test]
fn test_all_cache_combinations_present() {
    let catalog = Catalog::standard();
    let caches: HashSet<_> = catalog
        .descriptors()
        .iter()
        .filter_map(|it| match it.event {
            Event::Cache(_) => Some(it.event.config().config),
            _ => None,
        })
        .collect();
    assert_eq!(caches.len(), 12);

    for level in [Level::L1d, Level::Ll] {
        for op in [Op::Read, Op::Write, Op::Prefetch] {
            for result in [OpResult::Access, OpResult::Miss] {
                let cfg = Event::from(Cache::new(level, op, result)).config();
                assert!(caches.contains(&cfg.config));
            }
        }
    }
}

#[test]
fn test_custom_catalog() {
    static TABLE: [super::Descriptor; 1] = [super::Descriptor {
        name: "only_cycles",
        event: Event::Hardware(Hardware::CpuCycle),
    }];
    let catalog = Catalog::new(&TABLE);
    assert!(catalog.contains("only_cycles"));
    assert!(!catalog.contains(names::CYCLES));
}
