use std::fmt;
use std::time::Duration;

use tracing::debug;

use super::clock::{Clock, RunState};
use super::{Report, Stopwatch, EXCLUDE_KERNEL, TIME_ENABLED, TIME_RUNNING};
use crate::config::attr::from;
use crate::config::{Opts, Role};
use crate::count::{Backend, CounterHandle, CounterSet, CounterValue, PerfBackend};
use crate::error::{Error, Result, StateError};
use crate::event::Catalog;

/// Stopwatch backed by a group of `perf_event_open` counters.
///
/// The first counter added becomes the group leader. It is pinned, created
/// disabled and reads back the group's enabled/running times. Every later
/// counter joins the leader's group, so enabling or disabling the leader
/// starts or stops the whole group at once.
///
/// # Examples
///
/// ```rust,no_run
/// use perf_stopwatch::event::names;
/// use perf_stopwatch::stopwatch::{HardwareStopwatch, Stopwatch};
///
/// let mut stopwatch: HardwareStopwatch = HardwareStopwatch::default();
/// stopwatch.add_counter(names::INSTRUCTIONS).unwrap();
/// stopwatch.add_counter(names::CYCLES).unwrap();
///
/// stopwatch.start().unwrap();
/// std::hint::black_box((0..1000).sum::<u64>());
/// stopwatch.stop().unwrap();
///
/// for (name, value) in stopwatch.get_counters().unwrap().iter() {
///     println!("{}\t{}", name, value);
/// }
/// ```
pub struct HardwareStopwatch<B: Backend = PerfBackend> {
    backend: B,
    catalog: Catalog<'static>,
    counters: CounterSet<B::Resource>,
    clock: Clock,
    exclude_kernel: bool,
}

impl<B: Backend> fmt::Debug for HardwareStopwatch<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HardwareStopwatch")
            .field("counters", &self.counters.names().collect::<Vec<_>>())
            .field("state", &self.clock.state())
            .field("exclude_kernel", &self.exclude_kernel)
            .finish_non_exhaustive()
    }
}

impl Default for HardwareStopwatch {
    fn default() -> Self {
        Self::new(PerfBackend)
    }
}

impl<B: Backend> HardwareStopwatch<B> {
    pub fn new(backend: B) -> Self {
        Self::with_catalog(backend, Catalog::standard())
    }

    pub fn with_catalog(backend: B, catalog: Catalog<'static>) -> Self {
        Self {
            backend,
            catalog,
            counters: CounterSet::new(),
            clock: Clock::default(),
            exclude_kernel: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Whether kernel space is excluded from counting, set after the kernel
    /// refused a kernel-inclusive counter.
    pub fn exclude_kernel(&self) -> bool {
        self.exclude_kernel
    }

    pub fn counters(&self) -> &CounterSet<B::Resource> {
        &self.counters
    }

    fn open(&mut self, name: &str) -> Result<CounterHandle<B::Resource>> {
        let desc = self.catalog.lookup(name)?;
        let role = match self.counters.leader() {
            None => Role::Leader,
            Some(_) => Role::Member,
        };

        loop {
            let attr = from(desc.event.config(), &Opts::new(role, self.exclude_kernel));
            let group = self.counters.leader().and_then(|(_, it)| it.resource());

            match self.backend.open(&attr, group) {
                Ok(resource) => return Ok(CounterHandle::new(resource, role == Role::Leader)),
                // Counting kernel space needs more privileges than user space
                // (`perf_event_paranoid` >= 2), drop it for every counter from
                // here on and try again.
                Err(e) if !self.exclude_kernel && e.raw_os_error() == Some(libc::EACCES) => {
                    debug!("opening `{}` with kernel space denied, retrying without", name);
                    self.exclude_kernel = true;
                }
                Err(source) => {
                    return Err(Error::Open {
                        name: name.to_string(),
                        source,
                    })
                }
            }
        }
    }
}

impl<B: Backend> Stopwatch for HardwareStopwatch<B> {
    fn add_counter(&mut self, name: &str) -> Result<()> {
        self.clock.expect_idle(StateError::AddWhileRunning)?;
        if self.counters.contains(name) {
            debug!("counter `{}` already added", name);
            return Ok(());
        }

        let handle = self.open(name)?;
        // `contains` above rules out the leader's name, the push cannot be refused.
        let _ = self.counters.push(name, handle);
        Ok(())
    }

    fn start(&mut self) -> Result<()> {
        self.clock.expect_idle(StateError::AlreadyRunning)?;
        let leader = self.counters.leader().and_then(|(_, it)| it.resource());
        if let Some(leader) = leader {
            self.backend.enable_group(leader)?;
        }
        if let Err(e) = self.clock.begin() {
            // Stay idle with the group stopped.
            if let Some(leader) = leader {
                let _ = self.backend.disable_group(leader);
            }
            return Err(e);
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.clock.expect_running()?;
        // Only leave `Running` once the group has actually stopped.
        if let Some(leader) = self.counters.leader().and_then(|(_, it)| it.resource()) {
            self.backend.disable_group(leader)?;
        }
        self.clock.end()
    }

    fn get_counters(&mut self) -> Result<Report> {
        self.clock.expect_idle(StateError::ReadWhileRunning)?;

        let mut report = Report::new();
        self.clock.record(&mut report);
        report.insert(EXCLUDE_KERNEL, self.exclude_kernel as i64);

        let mut counters = self.counters.iter_mut();
        let Some((leader_name, leader)) = counters.next() else {
            return Ok(report);
        };

        // Member counts only make sense together with the leader's timing.
        let value = leader.read()?;
        let Some(count) = value.count() else {
            debug!("group leader `{}` was not collected, skipping group", leader_name);
            return Ok(report);
        };
        if let CounterValue::Group(stat) = value {
            report.insert(TIME_ENABLED, stat.time_enabled);
            report.insert(TIME_RUNNING, stat.time_running);
        }
        report.insert(leader_name, count);

        for (name, handle) in counters {
            match handle.read()?.count() {
                Some(count) => report.insert(name, count),
                None => debug!("counter `{}` was not collected", name),
            }
        }

        Ok(report)
    }

    fn wall_time(&self) -> Duration {
        self.clock.wall_time()
    }

    fn state(&self) -> RunState {
        self.clock.state()
    }
}
