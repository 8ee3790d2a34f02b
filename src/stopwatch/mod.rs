//! Start/stop measurement engines.
//!
//! Every stopwatch enforces the same call order:
//!
//! - [`add_counter`][Stopwatch::add_counter], [`start`][Stopwatch::start] and
//!   [`get_counters`][Stopwatch::get_counters] only while idle,
//! - [`stop`][Stopwatch::stop] only while running.
//!
//! Violations fail with [`Error::State`][crate::error::Error::State].
//!
//! Wall clock and process CPU time are always reported. [`HardwareStopwatch`]
//! adds `perf_event_open` counters on top, [`FallbackStopwatch`] is used where
//! those are not available.

mod clock;
mod fallback;
mod hardware;
mod report;

use std::path::Path;
use std::time::Duration;

pub use clock::RunState;
pub use fallback::*;
pub use hardware::*;
pub use report::*;

use crate::error::Result;

/// Elapsed wall clock time, always reported.
pub const WALL_CLOCK: &str = "wall_clock_ns";
/// User CPU time of the process, always reported.
pub const USR_CLOCK: &str = "time_usr_ns";
/// System CPU time of the process, always reported.
pub const SYS_CLOCK: &str = "time_sys_ns";

/// Time the counter group was enabled.
pub const TIME_ENABLED: &str = "time_enabled_ns";
/// Time the counter group was actually on the PMU.
pub const TIME_RUNNING: &str = "time_running_ns";
/// `1` if kernel space had to be excluded from counting.
pub const EXCLUDE_KERNEL: &str = "exclude_kernel";

pub trait Stopwatch {
    /// Registers a counter by catalog name. Only legal while idle.
    fn add_counter(&mut self, name: &str) -> Result<()>;

    /// Starts measuring. Only legal while idle.
    fn start(&mut self) -> Result<()>;

    /// Stops measuring and accumulates the elapsed time. Only legal while running.
    fn stop(&mut self) -> Result<()>;

    /// Collects everything measured so far. Only legal while idle.
    fn get_counters(&mut self) -> Result<Report>;

    /// Cumulative wall clock time over all start/stop brackets.
    fn wall_time(&self) -> Duration;

    fn state(&self) -> RunState;
}

const PARANOID_PATH: &str = "/proc/sys/kernel/perf_event_paranoid";

/// Whether the running kernel exposes `perf_event_open` at all.
pub fn perf_supported() -> bool {
    cfg!(any(target_os = "linux", target_os = "android")) && Path::new(PARANOID_PATH).exists()
}

/// Stopwatch picked once at runtime.
#[derive(Debug)]
pub enum AnyStopwatch {
    Hardware(HardwareStopwatch),
    Fallback(FallbackStopwatch),
}

impl AnyStopwatch {
    /// Uses hardware counters where the kernel supports them.
    pub fn probe() -> Self {
        if perf_supported() {
            tracing::debug!("perf_event_open available, using hardware counters");
            Self::Hardware(HardwareStopwatch::default())
        } else {
            tracing::debug!("perf_event_open unavailable, using wall/cpu clocks only");
            Self::Fallback(FallbackStopwatch::default())
        }
    }

    pub fn is_hardware(&self) -> bool {
        matches!(self, Self::Hardware(_))
    }
}

impl Default for AnyStopwatch {
    fn default() -> Self {
        Self::probe()
    }
}

macro_rules! dispatch {
    ($self:ident, $it:ident => $call:expr) => {
        match $self {
            AnyStopwatch::Hardware($it) => $call,
            AnyStopwatch::Fallback($it) => $call,
        }
    };
}

impl Stopwatch for AnyStopwatch {
    fn add_counter(&mut self, name: &str) -> Result<()> {
        dispatch!(self, it => it.add_counter(name))
    }

    fn start(&mut self) -> Result<()> {
        dispatch!(self, it => it.start())
    }

    fn stop(&mut self) -> Result<()> {
        dispatch!(self, it => it.stop())
    }

    fn get_counters(&mut self) -> Result<Report> {
        dispatch!(self, it => it.get_counters())
    }

    fn wall_time(&self) -> Duration {
        dispatch!(self, it => it.wall_time())
    }

    fn state(&self) -> RunState {
        dispatch!(self, it => it.state())
    }
}
