//! Symbolic counter names and the events they select.

pub mod hw;
pub mod sw;
#[cfg(test)]
mod test;

pub use hw::{Cache, Hardware, Level, Op, OpResult};
pub use sw::Software;

use crate::error::{Error, Result};

/// Names accepted by [`Stopwatch::add_counter`][crate::stopwatch::Stopwatch::add_counter].
///
/// Actual availability depends on the hardware and the kernel.
pub mod names {
    pub const CYCLES: &str = "cycles";
    pub const INSTRUCTIONS: &str = "instructions";
    pub const CACHE_REFS: &str = "cache_refs";
    pub const CACHE_MISSES: &str = "cache_misses";
    pub const BRANCHES: &str = "branches";
    pub const BRANCH_MISSES: &str = "branch_misses";
    pub const BUS_CYCLES: &str = "bus_cycles";
    pub const STALLED_FRONTEND: &str = "stalled_frontend";
    pub const STALLED_BACKEND: &str = "stalled_backend";
    pub const REF_CPU_CYCLES: &str = "ref_cpu_cycles";

    pub const SW_CPU_CLOCK: &str = "cpu_clock";
    pub const SW_TASK_CLOCK: &str = "task_clock";
    pub const PAGE_FAULTS: &str = "page_faults";
    pub const CONTEXT_SWITCHES: &str = "context_switches";
    pub const CPU_MIGRATIONS: &str = "cpu_migrations";
    pub const PAGE_FAULTS_MIN: &str = "minor_faults";
    pub const PAGE_FAULTS_MAJ: &str = "major_faults";
    pub const ALIGNMENT_FAULTS: &str = "alignment_faults";
    pub const EMULATION_FAULTS: &str = "emulation_faults";
    pub const SW_DUMMY_EVENT: &str = "sw_dummy_event";
    pub const BPF_OUTPUT: &str = "bpf_output";

    pub const L1_READ_REF: &str = "l1_read_refs";
    pub const L1_READ_MISS: &str = "l1_read_misses";
    pub const L1_WRITE_REF: &str = "l1_write_refs";
    pub const L1_WRITE_MISS: &str = "l1_write_misses";
    pub const L1_PREFETCH_REF: &str = "l1_prefetch_refs";
    pub const L1_PREFETCH_MISS: &str = "l1_prefetch_misses";
    pub const L3_READ_REF: &str = "l3_read_refs";
    pub const L3_READ_MISS: &str = "l3_read_misses";
    pub const L3_WRITE_REF: &str = "l3_write_refs";
    pub const L3_WRITE_MISS: &str = "l3_write_misses";
    pub const L3_PREFETCH_REF: &str = "l3_prefetch_refs";
    pub const L3_PREFETCH_MISS: &str = "l3_prefetch_misses";
}

/// A countable event, by domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    Hardware(Hardware),
    Software(Software),
    Cache(Cache),
}

/// The `type`/`config` pair of `perf_event_attr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventConfig {
    pub ty: u32,
    pub config: u64,
}

impl Event {
    pub const fn config(&self) -> EventConfig {
        match self {
            Event::Hardware(hw) => hw.config(),
            Event::Software(sw) => sw.config(),
            Event::Cache(cache) => cache.config(),
        }
    }
}

/// A catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Descriptor {
    pub name: &'static str,
    pub event: Event,
}

macro_rules! table {
    ($($name:ident => $event:expr,)+) => {
        [$(Descriptor { name: names::$name, event: $event },)+]
    };
}

const fn cache(level: Level, op: Op, result: OpResult) -> Event {
    Event::Cache(Cache::new(level, op, result))
}

#[rustfmt::skip]
static STANDARD: [Descriptor; 33] = {
    use Event::{Hardware as H, Software as S};
    use Hardware::*;
    use Level::*;
    use Op::*;
    use OpResult::*;
    use Software::*;

    table! {
        CYCLES           => H(CpuCycle),
        INSTRUCTIONS     => H(Instr),
        CACHE_REFS       => H(CacheAccess),
        CACHE_MISSES     => H(CacheMiss),
        BRANCHES         => H(BranchInstr),
        BRANCH_MISSES    => H(BranchMiss),
        BUS_CYCLES       => H(BusCycle),
        STALLED_FRONTEND => H(FrontendStalledCycle),
        STALLED_BACKEND  => H(BackendStalledCycle),
        REF_CPU_CYCLES   => H(RefCpuCycle),

        SW_CPU_CLOCK     => S(CpuClock),
        SW_TASK_CLOCK    => S(TaskClock),
        PAGE_FAULTS      => S(PageFault),
        CONTEXT_SWITCHES => S(CtxSwitch),
        CPU_MIGRATIONS   => S(CpuMigration),
        PAGE_FAULTS_MIN  => S(MinorPageFault),
        PAGE_FAULTS_MAJ  => S(MajorPageFault),
        ALIGNMENT_FAULTS => S(AlignFault),
        EMULATION_FAULTS => S(EmuFault),
        SW_DUMMY_EVENT   => S(Dummy),
        BPF_OUTPUT       => S(BpfOutput),

        L1_READ_REF      => cache(L1d, Read,     Access),
        L1_READ_MISS     => cache(L1d, Read,     Miss),
        L1_WRITE_REF     => cache(L1d, Write,    Access),
        L1_WRITE_MISS    => cache(L1d, Write,    Miss),
        L1_PREFETCH_REF  => cache(L1d, Prefetch, Access),
        L1_PREFETCH_MISS => cache(L1d, Prefetch, Miss),
        L3_READ_REF      => cache(Ll,  Read,     Access),
        L3_READ_MISS     => cache(Ll,  Read,     Miss),
        L3_WRITE_REF     => cache(Ll,  Write,    Access),
        L3_WRITE_MISS    => cache(Ll,  Write,    Miss),
        L3_PREFETCH_REF  => cache(Ll,  Prefetch, Access),
        L3_PREFETCH_MISS => cache(Ll,  Prefetch, Miss),
    }
};

/// Immutable name to event table.
///
/// The standard table is built at compile time; custom tables can be
/// supplied with [`Catalog::new`].
#[derive(Clone, Copy, Debug)]
pub struct Catalog<'a> {
    table: &'a [Descriptor],
}

impl<'a> Catalog<'a> {
    pub const fn new(table: &'a [Descriptor]) -> Self {
        Self { table }
    }

    pub fn lookup(&self, name: &str) -> Result<&'a Descriptor> {
        self.table
            .iter()
            .find(|it| it.name == name)
            .ok_or_else(|| Error::UnknownCounter(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_ok()
    }

    pub fn descriptors(&self) -> &'a [Descriptor] {
        self.table
    }
}

impl Catalog<'static> {
    pub const fn standard() -> Self {
        Self::new(&STANDARD)
    }
}

impl Default for Catalog<'static> {
    fn default() -> Self {
        Self::standard()
    }
}
