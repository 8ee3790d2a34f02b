use std::fs::File;
use std::io::{Error, Result};
use std::os::fd::{AsRawFd, FromRawFd};

use super::Attr;

pub fn perf_event_open(attr: &Attr, pid: i32, cpu: i32, group_fd: i32, flags: u64) -> Result<File> {
    let num = libc::SYS_perf_event_open;
    let fd = unsafe { libc::syscall(num, attr as *const Attr, pid, cpu, group_fd, flags) };
    if fd != -1 {
        Ok(unsafe { File::from_raw_fd(fd as _) })
    } else {
        Err(Error::last_os_error())
    }
}

pub fn ioctl_arg(file: &File, op: u64, arg: u64) -> Result<i32> {
    let fd = file.as_raw_fd();
    let result = unsafe { libc::ioctl(fd, op as _, arg) };
    if result != -1 {
        Ok(result)
    } else {
        Err(Error::last_os_error())
    }
}
