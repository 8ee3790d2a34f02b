//! Preset-driven facade around a [`Stopwatch`].
//!
//! ```rust
//! use perf_stopwatch::profiler::{Preset, Profiler, ProfilerConfig};
//!
//! let mut profiler = Profiler::new(ProfilerConfig::new(Preset::Default));
//! profiler.start().unwrap();
//! std::hint::black_box((0..1000).sum::<u64>());
//! profiler.stop().unwrap();
//!
//! let mut out = vec![];
//! profiler.print_to(&mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("wall_clock_ns\t"));
//! ```

mod config;
#[cfg(test)]
mod test;

use std::io::Write;

use tracing::{debug, error, warn};

pub use config::*;

use crate::error::{Error, Result};
use crate::event::names;
use crate::stopwatch::{AnyStopwatch, Report, Stopwatch};

const PARANOID_HINT: &str = "Profiling requires that /proc/sys/kernel/perf_event_paranoid is \
     configured to allow users to collect metrics. You can try running \
     `sudo sh -c \"echo '1'>/proc/sys/kernel/perf_event_paranoid\"`";

pub struct Profiler<S = AnyStopwatch> {
    stopwatch: S,
    prefix: String,
    error_shown: bool,
    dropped: Vec<String>,
}

impl Profiler {
    /// Creates a profiler on the best stopwatch this platform supports.
    pub fn new(config: ProfilerConfig) -> Self {
        Self::with_stopwatch(AnyStopwatch::probe(), config)
    }
}

impl<S: Stopwatch> Profiler<S> {
    /// Registers the counters of `config.preset` on `stopwatch`.
    pub fn with_stopwatch(stopwatch: S, config: ProfilerConfig) -> Self {
        let mut profiler = Self {
            stopwatch,
            prefix: config.prefix,
            error_shown: false,
            dropped: vec![],
        };

        match &config.preset {
            Preset::None => {}
            Preset::Default => {
                profiler.add(names::CYCLES);
                profiler.add(names::INSTRUCTIONS);
                profiler.add(names::BRANCHES);
                profiler.add(names::BRANCH_MISSES);
            }
            Preset::Cache => {
                profiler.add(names::INSTRUCTIONS);
                // Last level counters first, generic ones otherwise.
                if !profiler.add(names::L3_READ_REF) {
                    profiler.add(names::CACHE_REFS);
                }
                if !profiler.add(names::L3_READ_MISS) {
                    profiler.add(names::CACHE_MISSES);
                }
                profiler.add(names::L1_READ_REF);
                profiler.add(names::L1_READ_MISS);
                profiler.add(names::PAGE_FAULTS);
            }
            Preset::Unrecognized(name) => {
                warn!("unknown performance counter preset `{}`, measuring clocks only", name);
            }
        }

        profiler
    }

    /// Adds one counter, returns whether it is being collected.
    ///
    /// Failures caused by the environment are logged once per profiler,
    /// unknown counter names every time.
    pub fn add(&mut self, counter: &str) -> bool {
        let err = match self.stopwatch.add_counter(counter) {
            Ok(()) => return true,
            Err(err) => err,
        };
        self.dropped.push(counter.to_string());

        match err {
            Error::UnknownCounter(_) => {
                error!("unknown performance counter `{}` requested", counter);
            }
            err if !self.error_shown => {
                warn!("could not add performance counter `{}`: {}", counter, err);
                if err.is_permission_denied() {
                    warn!("{}", PARANOID_HINT);
                }
                self.error_shown = true;
            }
            err => {
                debug!("could not add performance counter `{}`: {}", counter, err);
            }
        }
        false
    }

    /// Counters that were requested but are not being collected.
    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    pub fn stopwatch(&self) -> &S {
        &self.stopwatch
    }

    pub fn start(&mut self) -> Result<()> {
        self.stopwatch.start()
    }

    pub fn stop(&mut self) -> Result<()> {
        self.stopwatch.stop()
    }

    pub fn report(&mut self) -> Result<Report> {
        self.stopwatch.get_counters()
    }

    /// Writes one `<prefix><metric>\t<value>` line per collected metric, then flushes.
    pub fn print_to<W: Write>(&mut self, mut sink: W) -> Result<()> {
        let report = self.report()?;
        for (name, value) in report.iter() {
            writeln!(sink, "{}{}\t{}", self.prefix, name, value)?;
        }
        sink.flush()?;
        Ok(())
    }
}
