use super::{Event, EventConfig};
use crate::ffi::bindings as b;

/// Generalized hardware events, mapped by the kernel onto the PMU of the running CPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hardware {
    CpuCycle,
    BusCycle,
    RefCpuCycle,

    CacheMiss,
    CacheAccess,

    BranchMiss,
    BranchInstr,

    BackendStalledCycle,
    FrontendStalledCycle,

    Instr,
}

/// Cache hierarchy event: `level | (op << 8) | (result << 16)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cache {
    pub level: Level,
    pub op: Op,
    pub result: OpResult,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    /// Level 1 data cache.
    L1d,
    /// Last level cache.
    Ll,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Op {
    Read,
    Write,
    Prefetch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpResult {
    Access,
    Miss,
}

impl Hardware {
    pub(super) const fn config(&self) -> EventConfig {
        let config = match self {
            Hardware::CpuCycle => b::PERF_COUNT_HW_CPU_CYCLES,
            Hardware::BusCycle => b::PERF_COUNT_HW_BUS_CYCLES,
            Hardware::RefCpuCycle => b::PERF_COUNT_HW_REF_CPU_CYCLES,

            Hardware::CacheMiss => b::PERF_COUNT_HW_CACHE_MISSES,
            Hardware::CacheAccess => b::PERF_COUNT_HW_CACHE_REFERENCES,

            Hardware::BranchMiss => b::PERF_COUNT_HW_BRANCH_MISSES,
            Hardware::BranchInstr => b::PERF_COUNT_HW_BRANCH_INSTRUCTIONS,

            Hardware::BackendStalledCycle => b::PERF_COUNT_HW_STALLED_CYCLES_BACKEND,
            Hardware::FrontendStalledCycle => b::PERF_COUNT_HW_STALLED_CYCLES_FRONTEND,

            Hardware::Instr => b::PERF_COUNT_HW_INSTRUCTIONS,
        };

        EventConfig {
            ty: b::PERF_TYPE_HARDWARE,
            config: config as _,
        }
    }
}

impl Cache {
    pub const fn new(level: Level, op: Op, result: OpResult) -> Self {
        Self { level, op, result }
    }

    pub(super) const fn config(&self) -> EventConfig {
        let id = match self.level {
            Level::L1d => b::PERF_COUNT_HW_CACHE_L1D,
            Level::Ll => b::PERF_COUNT_HW_CACHE_LL,
        } as u64;
        let op = match self.op {
            Op::Read => b::PERF_COUNT_HW_CACHE_OP_READ,
            Op::Write => b::PERF_COUNT_HW_CACHE_OP_WRITE,
            Op::Prefetch => b::PERF_COUNT_HW_CACHE_OP_PREFETCH,
        } as u64;
        let op_result = match self.result {
            OpResult::Access => b::PERF_COUNT_HW_CACHE_RESULT_ACCESS,
            OpResult::Miss => b::PERF_COUNT_HW_CACHE_RESULT_MISS,
        } as u64;

        EventConfig {
            ty: b::PERF_TYPE_HW_CACHE,
            config: id | (op << 8) | (op_result << 16),
        }
    }
}

impl From<Hardware> for Event {
    fn from(value: Hardware) -> Self {
        Event::Hardware(value)
    }
}

impl From<Cache> for Event {
    fn from(value: Cache) -> Self {
        Event::Cache(value)
    }
}
