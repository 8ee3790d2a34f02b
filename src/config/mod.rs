//! Options used to open a counter.

pub(crate) mod attr;

pub use crate::ffi::Attr;

/// Position of a counter inside its group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// First counter of the group: pinned, created disabled, and reporting
    /// the group's enabled/running times.
    Leader,
    /// Created enabled and scheduled together with the leader.
    Member,
}

/// Privilege levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Priv {
    /// Kernel space.
    pub kernel: bool,

    /// Hypervisor.
    pub hv: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opts {
    pub role: Role,

    /// Exclude events with privilege levels.
    pub exclude: Priv,

    /// Count in child tasks created after the counter was opened.
    pub inherit: bool,
}

impl Opts {
    pub fn new(role: Role, exclude_kernel: bool) -> Self {
        Self {
            role,
            exclude: Priv {
                kernel: exclude_kernel,
                hv: true,
            },
            inherit: true,
        }
    }
}
