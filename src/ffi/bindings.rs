#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]
#![allow(dead_code)]

// Subset of `include/uapi/linux/perf_event.h`:
// https://github.com/torvalds/linux/blob/v6.13/include/uapi/linux/perf_event.h

pub const PERF_TYPE_HARDWARE: u32 = 0;
pub const PERF_TYPE_SOFTWARE: u32 = 1;
pub const PERF_TYPE_HW_CACHE: u32 = 3;

pub const PERF_COUNT_HW_CPU_CYCLES: u32 = 0;
pub const PERF_COUNT_HW_INSTRUCTIONS: u32 = 1;
pub const PERF_COUNT_HW_CACHE_REFERENCES: u32 = 2;
pub const PERF_COUNT_HW_CACHE_MISSES: u32 = 3;
pub const PERF_COUNT_HW_BRANCH_INSTRUCTIONS: u32 = 4;
pub const PERF_COUNT_HW_BRANCH_MISSES: u32 = 5;
pub const PERF_COUNT_HW_BUS_CYCLES: u32 = 6;
pub const PERF_COUNT_HW_STALLED_CYCLES_FRONTEND: u32 = 7;
pub const PERF_COUNT_HW_STALLED_CYCLES_BACKEND: u32 = 8;
pub const PERF_COUNT_HW_REF_CPU_CYCLES: u32 = 9;

pub const PERF_COUNT_HW_CACHE_L1D: u32 = 0;
pub const PERF_COUNT_HW_CACHE_LL: u32 = 2;

pub const PERF_COUNT_HW_CACHE_OP_READ: u32 = 0;
pub const PERF_COUNT_HW_CACHE_OP_WRITE: u32 = 1;
pub const PERF_COUNT_HW_CACHE_OP_PREFETCH: u32 = 2;

pub const PERF_COUNT_HW_CACHE_RESULT_ACCESS: u32 = 0;
pub const PERF_COUNT_HW_CACHE_RESULT_MISS: u32 = 1;

pub const PERF_COUNT_SW_CPU_CLOCK: u32 = 0;
pub const PERF_COUNT_SW_TASK_CLOCK: u32 = 1;
pub const PERF_COUNT_SW_PAGE_FAULTS: u32 = 2;
pub const PERF_COUNT_SW_CONTEXT_SWITCHES: u32 = 3;
pub const PERF_COUNT_SW_CPU_MIGRATIONS: u32 = 4;
pub const PERF_COUNT_SW_PAGE_FAULTS_MIN: u32 = 5;
pub const PERF_COUNT_SW_PAGE_FAULTS_MAJ: u32 = 6;
pub const PERF_COUNT_SW_ALIGNMENT_FAULTS: u32 = 7;
pub const PERF_COUNT_SW_EMULATION_FAULTS: u32 = 8;
pub const PERF_COUNT_SW_DUMMY: u32 = 9;
pub const PERF_COUNT_SW_BPF_OUTPUT: u32 = 10;

pub const PERF_FORMAT_TOTAL_TIME_ENABLED: u32 = 1 << 0;
pub const PERF_FORMAT_TOTAL_TIME_RUNNING: u32 = 1 << 1;

pub const PERF_FLAG_FD_CLOEXEC: u32 = 1 << 3;
pub const PERF_IOC_FLAG_GROUP: u32 = 1 << 0;

pub const PERF_ATTR_SIZE_VER5: u32 = 112;

// `_IO('$', nr)`, the "none" direction bits are arch specific.
#[cfg(any(
    target_arch = "powerpc",
    target_arch = "powerpc64",
    target_arch = "mips",
    target_arch = "mips64",
    target_arch = "sparc",
    target_arch = "sparc64"
))]
const IOC_NONE: u32 = 1 << 29;
#[cfg(not(any(
    target_arch = "powerpc",
    target_arch = "powerpc64",
    target_arch = "mips",
    target_arch = "mips64",
    target_arch = "sparc",
    target_arch = "sparc64"
)))]
const IOC_NONE: u32 = 0;

const fn io(nr: u32) -> u32 {
    IOC_NONE | ((b'$' as u32) << 8) | nr
}

pub const PERF_IOC_OP_ENABLE: u32 = io(0);
pub const PERF_IOC_OP_DISABLE: u32 = io(1);
pub const PERF_IOC_OP_RESET: u32 = io(3);

// Bit offsets inside the `perf_event_attr` flags word.
const FLAG_DISABLED: u64 = 0;
const FLAG_INHERIT: u64 = 1;
const FLAG_PINNED: u64 = 2;
const FLAG_EXCLUDE_KERNEL: u64 = 5;
const FLAG_EXCLUDE_HV: u64 = 6;

/// `struct perf_event_attr` up to `PERF_ATTR_SIZE_VER5`.
///
/// The kernel accepts any published attr size, fields past `size` are
/// treated as zero.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct perf_event_attr {
    pub type_: u32,
    pub size: u32,
    pub config: u64,
    pub sample_period: u64,
    pub sample_type: u64,
    pub read_format: u64,
    pub flags: u64,
    pub wakeup_events: u32,
    pub bp_type: u32,
    pub config1: u64,
    pub config2: u64,
    pub branch_sample_type: u64,
    pub sample_regs_user: u64,
    pub sample_stack_user: u32,
    pub clockid: i32,
    pub sample_regs_intr: u64,
    pub aux_watermark: u32,
    pub sample_max_stack: u16,
    pub __reserved_2: u16,
}

const _: () = assert!(size_of::<perf_event_attr>() == PERF_ATTR_SIZE_VER5 as usize);

macro_rules! bitfield {
    ($($get:ident, $set:ident => $bit:ident;)+) => {
        impl perf_event_attr {
            $(
                pub fn $get(&self) -> u64 {
                    (self.flags >> $bit) & 1
                }

                pub fn $set(&mut self, val: u64) {
                    self.flags = (self.flags & !(1 << $bit)) | ((val & 1) << $bit);
                }
            )+
        }
    };
}

bitfield! {
    disabled, set_disabled => FLAG_DISABLED;
    inherit, set_inherit => FLAG_INHERIT;
    pinned, set_pinned => FLAG_PINNED;
    exclude_kernel, set_exclude_kernel => FLAG_EXCLUDE_KERNEL;
    exclude_hv, set_exclude_hv => FLAG_EXCLUDE_HV;
}
