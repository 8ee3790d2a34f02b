use std::time::Duration;

use super::clock::{Clock, RunState};
use super::{Report, Stopwatch, SYS_CLOCK, USR_CLOCK, WALL_CLOCK};
use crate::error::{Error, Result, StateError};
use crate::event::Catalog;

/// Stopwatch for platforms without `perf_event_open`.
///
/// Only the wall clock and the process CPU times are measured, adding any
/// catalog counter fails with [`Error::Unsupported`].
#[derive(Debug)]
pub struct FallbackStopwatch {
    catalog: Catalog<'static>,
    clock: Clock,
}

impl Default for FallbackStopwatch {
    fn default() -> Self {
        Self::with_catalog(Catalog::standard())
    }
}

impl FallbackStopwatch {
    pub fn with_catalog(catalog: Catalog<'static>) -> Self {
        Self {
            catalog,
            clock: Clock::default(),
        }
    }
}

impl Stopwatch for FallbackStopwatch {
    fn add_counter(&mut self, name: &str) -> Result<()> {
        self.clock.expect_idle(StateError::AddWhileRunning)?;

        // Always enabled.
        if [WALL_CLOCK, USR_CLOCK, SYS_CLOCK].contains(&name) {
            return Ok(());
        }
        self.catalog.lookup(name)?;
        Err(Error::Unsupported(name.to_string()))
    }

    fn start(&mut self) -> Result<()> {
        self.clock.begin()
    }

    fn stop(&mut self) -> Result<()> {
        self.clock.end()
    }

    fn get_counters(&mut self) -> Result<Report> {
        self.clock.expect_idle(StateError::ReadWhileRunning)?;

        let mut report = Report::new();
        self.clock.record(&mut report);
        Ok(report)
    }

    fn wall_time(&self) -> Duration {
        self.clock.wall_time()
    }

    fn state(&self) -> RunState {
        self.clock.state()
    }
}
