use std::fs::File;
use std::io::{Read, Result};
#[cfg(unix)]
use std::os::fd::AsRawFd;

use crate::config::Attr;
use crate::ffi::{bindings as b, syscall};

/// Access to the counter facility.
///
/// [`PerfBackend`] talks to the kernel; other implementations let the
/// stopwatch logic run without one.
pub trait Backend {
    type Resource: Read;

    /// Opens one counter, as a member of `group` if given.
    fn open(&mut self, attr: &Attr, group: Option<&Self::Resource>) -> Result<Self::Resource>;

    /// Enables the leader together with every member of its group.
    fn enable_group(&mut self, leader: &Self::Resource) -> Result<()>;

    /// Disables the leader together with every member of its group.
    fn disable_group(&mut self, leader: &Self::Resource) -> Result<()>;
}

/// `perf_event_open` counters for the calling process on any CPU.
#[derive(Clone, Copy, Debug, Default)]
pub struct PerfBackend;

impl PerfBackend {
    // Current process, all CPUs.
    const PID: i32 = 0;
    const CPU: i32 = -1;
}

impl Backend for PerfBackend {
    type Resource = File;

    fn open(&mut self, attr: &Attr, group: Option<&File>) -> Result<File> {
        #[cfg(unix)]
        let group_fd = group.map_or(-1, AsRawFd::as_raw_fd);
        #[cfg(not(unix))]
        let group_fd = {
            let _ = group;
            -1
        };
        let flags = b::PERF_FLAG_FD_CLOEXEC as u64;
        syscall!(perf_event_open, attr, Self::PID, Self::CPU, group_fd, flags)
    }

    fn enable_group(&mut self, leader: &File) -> Result<()> {
        let op = b::PERF_IOC_OP_ENABLE as u64;
        let arg = b::PERF_IOC_FLAG_GROUP as u64;
        let _: i32 = syscall!(ioctl_arg, leader, op, arg)?;
        Ok(())
    }

    fn disable_group(&mut self, leader: &File) -> Result<()> {
        let op = b::PERF_IOC_OP_DISABLE as u64;
        let arg = b::PERF_IOC_FLAG_GROUP as u64;
        let _: i32 = syscall!(ioctl_arg, leader, op, arg)?;
        Ok(())
    }
}
