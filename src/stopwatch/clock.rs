use std::time::{Duration, Instant};

use super::{Report, SYS_CLOCK, USR_CLOCK, WALL_CLOCK};
use crate::error::{Result, StateError};
use crate::ffi::{cpu_time, CpuTime};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// Wall and CPU time accounting plus the run state machine shared by all
/// stopwatches.
#[derive(Debug)]
pub(crate) struct Clock {
    state: RunState,
    wall_begin: Instant,
    wall_elapsed: Duration,
    cpu_begin: CpuTime,
    cpu_elapsed: CpuTime,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            state: RunState::Idle,
            wall_begin: Instant::now(),
            wall_elapsed: Duration::ZERO,
            cpu_begin: CpuTime::default(),
            cpu_elapsed: CpuTime::default(),
        }
    }
}

impl Clock {
    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn expect_idle(&self, err: StateError) -> Result<()> {
        match self.state {
            RunState::Idle => Ok(()),
            RunState::Running => Err(err.into()),
        }
    }

    pub fn expect_running(&self) -> Result<()> {
        match self.state {
            RunState::Running => Ok(()),
            RunState::Idle => Err(StateError::NotRunning.into()),
        }
    }

    pub fn begin(&mut self) -> Result<()> {
        self.expect_idle(StateError::AlreadyRunning)?;
        self.cpu_begin = cpu_time()?;
        self.wall_begin = Instant::now();
        self.state = RunState::Running;
        Ok(())
    }

    pub fn end(&mut self) -> Result<()> {
        self.expect_running()?;
        let wall_end = Instant::now();
        let cpu_end = cpu_time()?;

        self.wall_elapsed += wall_end - self.wall_begin;
        // `getrusage` is monotonic per process, saturate anyway.
        self.cpu_elapsed.usr += cpu_end.usr.saturating_sub(self.cpu_begin.usr);
        self.cpu_elapsed.sys += cpu_end.sys.saturating_sub(self.cpu_begin.sys);
        self.state = RunState::Idle;
        Ok(())
    }

    pub fn wall_time(&self) -> Duration {
        self.wall_elapsed
    }

    pub fn record(&self, report: &mut Report) {
        report.insert_duration(WALL_CLOCK, self.wall_elapsed);
        report.insert_duration(USR_CLOCK, self.cpu_elapsed.usr);
        report.insert_duration(SYS_CLOCK, self.cpu_elapsed.sys);
    }
}
