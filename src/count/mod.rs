//! Counter handles and the groups they form.

mod backend;
mod handle;
mod set;
mod stat;
#[cfg(test)]
mod test;

pub use backend::*;
pub use handle::*;
pub use set::*;
pub use stat::GroupStat;
