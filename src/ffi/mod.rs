use std::io::Result;
use std::time::Duration;

pub mod bindings;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub mod linux_syscall;

macro_rules! syscall {
    ($syscall:ident, $($arg:expr),* $(,)?) => {{
        #[cfg(any(target_os = "linux", target_os = "android"))]
        let val = $crate::ffi::linux_syscall::$syscall($($arg),*);
        #[cfg(not(any(target_os = "linux", target_os = "android")))]
        let val = {
            $(let _ = $arg;)*
            Err(std::io::Error::from(std::io::ErrorKind::Unsupported))
        };
        val
    }};
}
pub(crate) use syscall;

pub type Attr = bindings::perf_event_attr;

/// User and system CPU time consumed by this process so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuTime {
    pub usr: Duration,
    pub sys: Duration,
}

#[cfg(unix)]
pub fn cpu_time() -> Result<CpuTime> {
    fn to_duration(tv: libc::timeval) -> Duration {
        Duration::from_secs(tv.tv_sec as _) + Duration::from_micros(tv.tv_usec as _)
    }

    let mut ru = std::mem::MaybeUninit::<libc::rusage>::uninit();
    let result = unsafe { libc::getrusage(libc::RUSAGE_SELF, ru.as_mut_ptr()) };
    if result == -1 {
        return Err(std::io::Error::last_os_error());
    }
    // `getrusage` filled the whole struct on success.
    let ru = unsafe { ru.assume_init() };

    Ok(CpuTime {
        usr: to_duration(ru.ru_utime),
        sys: to_duration(ru.ru_stime),
    })
}

// No resource accounting, CPU times stay at zero.
#[cfg(not(unix))]
pub fn cpu_time() -> Result<CpuTime> {
    Ok(CpuTime::default())
}
