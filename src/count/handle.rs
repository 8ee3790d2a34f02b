use std::fs::File;
use std::io::{ErrorKind, Read};

use super::stat::{word, GroupStat};
use crate::error::{Error, Result};

/// Outcome of reading one counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterValue {
    /// Member counters report a bare count.
    Value(i64),
    /// The group leader also reports the group's enabled/running times.
    Group(GroupStat),
    /// The counter could not be scheduled on the CPU for this sample.
    NotCollected,
}

impl CounterValue {
    pub fn count(&self) -> Option<i64> {
        match self {
            CounterValue::Value(v) => Some(*v),
            CounterValue::Group(stat) => Some(stat.value),
            CounterValue::NotCollected => None,
        }
    }
}

/// Owned counter resource.
///
/// Dropping the handle closes the underlying descriptor. A handle that was
/// [released][CounterHandle::release] stays around as an empty sentinel,
/// reading from it fails with [`Error::InvalidHandle`].
#[derive(Debug)]
pub struct CounterHandle<R = File> {
    resource: Option<R>,
    leader: bool,
}

impl<R> CounterHandle<R> {
    pub fn new(resource: R, leader: bool) -> Self {
        Self {
            resource: Some(resource),
            leader,
        }
    }

    pub fn empty(leader: bool) -> Self {
        Self {
            resource: None,
            leader,
        }
    }

    pub fn is_leader(&self) -> bool {
        self.leader
    }

    pub fn is_valid(&self) -> bool {
        self.resource.is_some()
    }

    pub fn resource(&self) -> Option<&R> {
        self.resource.as_ref()
    }

    /// Closes the resource now. Releasing an empty handle does nothing.
    pub fn release(&mut self) {
        drop(self.resource.take());
    }
}

impl<R: Read> CounterHandle<R> {
    /// Reads the current value.
    ///
    /// The leader returns the whole [`GroupStat`], all other counters
    /// return the 64-bit count.
    pub fn read(&mut self) -> Result<CounterValue> {
        let leader = self.leader;
        let resource = self.resource.as_mut().ok_or(Error::InvalidHandle)?;

        let mut buf = [0; GroupStat::SIZE];
        let expected = match leader {
            true => GroupStat::SIZE,
            false => size_of::<u64>(),
        };

        let got = loop {
            match resource.read(&mut buf[..expected]) {
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Os(e)),
            }
        };

        match got {
            // EOF, the counter could not be placed on the CPU.
            0 => Ok(CounterValue::NotCollected),
            n if n == expected && leader => Ok(CounterValue::Group(GroupStat::from_bytes(&buf))),
            n if n == expected => Ok(CounterValue::Value(word(&buf[..n]))),
            n => Err(Error::ShortRead { expected, got: n }),
        }
    }
}
