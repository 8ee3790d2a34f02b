use std::collections::HashMap;
use std::io;
use std::time::Duration;

use super::{Preset, Profiler, ProfilerConfig};
use crate::error::{Error, Result};
use crate::event::{names, Catalog};
use crate::stopwatch::{
    FallbackStopwatch, Report, RunState, Stopwatch, SYS_CLOCK, USR_CLOCK, WALL_CLOCK,
};

#[derive(Clone, Copy, Debug)]
enum Failure {
    Denied,
    Missing,
}

/// Records every requested counter and fails the configured ones.
#[derive(Debug, Default)]
struct Recording {
    requested: Vec<String>,
    failing: HashMap<&'static str, Failure>,
    running: bool,
}

impl Recording {
    fn failing(failing: &[(&'static str, Failure)]) -> Self {
        Self {
            failing: failing.iter().copied().collect(),
            ..Default::default()
        }
    }
}

impl Stopwatch for Recording {
    fn add_counter(&mut self, name: &str) -> Result<()> {
        self.requested.push(name.to_string());
        Catalog::standard().lookup(name)?;
        let errno = match self.failing.get(name) {
            None => return Ok(()),
            Some(Failure::Denied) => libc::EACCES,
            Some(Failure::Missing) => libc::ENOENT,
        };
        Err(Error::Open {
            name: name.to_string(),
            source: io::Error::from_raw_os_error(errno),
        })
    }

    fn start(&mut self) -> Result<()> {
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.running = false;
        Ok(())
    }

    fn get_counters(&mut self) -> Result<Report> {
        let mut report = Report::new();
        report.insert(WALL_CLOCK, 3);
        report.insert(USR_CLOCK, 2);
        report.insert(SYS_CLOCK, 1);
        for name in &self.requested {
            if !self.failing.contains_key(name.as_str()) {
                report.insert(name.as_str(), 7);
            }
        }
        Ok(report)
    }

    fn wall_time(&self) -> Duration {
        Duration::from_nanos(3)
    }

    fn state(&self) -> RunState {
        match self.running {
            true => RunState::Running,
            false => RunState::Idle,
        }
    }
}

fn requested(preset: Preset, stopwatch: Recording) -> Profiler<Recording> {
    Profiler::with_stopwatch(stopwatch, ProfilerConfig::new(preset))
}

#[test]
fn test_preset_parse() {
    assert_eq!("".parse::<Preset>(), Ok(Preset::None));
    assert_eq!("default".parse::<Preset>(), Ok(Preset::Default));
    assert_eq!("cache".parse::<Preset>(), Ok(Preset::Cache));
    assert_eq!(
        "Default".parse::<Preset>(),
        Ok(Preset::Unrecognized("Default".to_string()))
    );
    assert_eq!(Preset::Cache.to_string(), "cache");
}

#[test]
fn test_no_preset_requests_nothing() {
    let profiler = requested(Preset::None, Recording::default());
    assert!(profiler.stopwatch().requested.is_empty());

    let profiler = requested(Preset::Unrecognized("fast".into()), Recording::default());
    assert!(profiler.stopwatch().requested.is_empty());
}

#[test]
fn test_default_preset() {
    let profiler = requested(Preset::Default, Recording::default());
    assert_eq!(
        profiler.stopwatch().requested,
        [
            names::CYCLES,
            names::INSTRUCTIONS,
            names::BRANCHES,
            names::BRANCH_MISSES
        ]
    );
    assert!(profiler.dropped().is_empty());
}

#[test]
fn test_cache_preset_prefers_last_level() {
    let profiler = requested(Preset::Cache, Recording::default());
    assert_eq!(
        profiler.stopwatch().requested,
        [
            names::INSTRUCTIONS,
            names::L3_READ_REF,
            names::L3_READ_MISS,
            names::L1_READ_REF,
            names::L1_READ_MISS,
            names::PAGE_FAULTS,
        ]
    );
}

#[test]
fn test_cache_preset_falls_back_to_generic() {
    let stopwatch = Recording::failing(&[
        (names::L3_READ_REF, Failure::Missing),
        (names::L3_READ_MISS, Failure::Denied),
    ]);
    let profiler = requested(Preset::Cache, stopwatch);
    assert_eq!(
        profiler.stopwatch().requested,
        [
            names::INSTRUCTIONS,
            names::L3_READ_REF,
            names::CACHE_REFS,
            names::L3_READ_MISS,
            names::CACHE_MISSES,
            names::L1_READ_REF,
            names::L1_READ_MISS,
            names::PAGE_FAULTS,
        ]
    );
    assert_eq!(profiler.dropped(), [names::L3_READ_REF, names::L3_READ_MISS]);
}

#[test]
fn test_add_reports_failures() {
    let stopwatch = Recording::failing(&[(names::CYCLES, Failure::Denied)]);
    let mut profiler = requested(Preset::None, stopwatch);

    assert!(!profiler.add(names::CYCLES));
    assert!(profiler.error_shown);
    assert!(!profiler.add("not_a_counter"));
    assert!(profiler.add(names::INSTRUCTIONS));
    assert_eq!(profiler.dropped(), [names::CYCLES, "not_a_counter"]);
}

#[test]
fn test_unknown_counter_does_not_consume_error_report() {
    let mut profiler = requested(Preset::None, Recording::default());
    assert!(!profiler.add("not_a_counter"));
    assert!(!profiler.error_shown);
}

#[test]
fn test_print_to() {
    let config = ProfilerConfig::new(Preset::Default).with_prefix("perf_");
    let mut profiler = Profiler::with_stopwatch(Recording::default(), config);
    profiler.start().unwrap();
    profiler.stop().unwrap();

    let mut out = vec![];
    profiler.print_to(&mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        "perf_wall_clock_ns\t3\n\
         perf_time_usr_ns\t2\n\
         perf_time_sys_ns\t1\n\
         perf_cycles\t7\n\
         perf_instructions\t7\n\
         perf_branches\t7\n\
         perf_branch_misses\t7\n"
    );
}

#[test]
fn test_fallback_profiler_prints_clocks() {
    let config = ProfilerConfig::new(Preset::Cache);
    let mut profiler = Profiler::with_stopwatch(FallbackStopwatch::default(), config);
    assert!(profiler.error_shown);
    assert_eq!(profiler.dropped().len(), 8);

    profiler.start().unwrap();
    profiler.stop().unwrap();

    let mut out = vec![];
    profiler.print_to(&mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    let names: Vec<_> = out.lines().filter_map(|it| it.split('\t').next()).collect();
    assert_eq!(names, [WALL_CLOCK, USR_CLOCK, SYS_CLOCK]);
}

#[test]
fn test_config_from_env() {
    // Only test that reads/writes this variable.
    std::env::set_var(super::PRESET_ENV, "cache");
    assert_eq!(ProfilerConfig::from_env().preset, Preset::Cache);
    std::env::set_var(super::PRESET_ENV, "");
    assert_eq!(ProfilerConfig::from_env().preset, Preset::None);
    std::env::remove_var(super::PRESET_ENV);
    assert_eq!(ProfilerConfig::from_env(), ProfilerConfig::default());
}
