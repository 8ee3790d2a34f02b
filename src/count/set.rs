use std::fs::File;

use super::CounterHandle;

/// Counters in insertion order. The first entry is the group leader.
#[derive(Debug)]
pub struct CounterSet<R = File> {
    entries: Vec<(String, CounterHandle<R>)>,
}

impl<R> Default for CounterSet<R> {
    fn default() -> Self {
        Self { entries: vec![] }
    }
}

impl<R> CounterSet<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(it, _)| it == name)
    }

    pub fn leader(&self) -> Option<(&str, &CounterHandle<R>)> {
        self.entries.first().map(|(name, handle)| (name.as_str(), handle))
    }

    /// Appends a counter. The first handle pushed becomes the leader, and
    /// the leader is never replaced: pushing a name that is already present
    /// swaps in the new member handle and drops the old one, but a leader
    /// name is rejected and the handle is handed back.
    pub fn push(
        &mut self,
        name: impl Into<String>,
        handle: CounterHandle<R>,
    ) -> Result<(), CounterHandle<R>> {
        let name = name.into();
        match self.entries.iter().position(|(it, _)| *it == name) {
            Some(0) => Err(handle),
            Some(i) => {
                self.entries[i].1 = handle;
                Ok(())
            }
            None => {
                self.entries.push((name, handle));
                Ok(())
            }
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Leader first, then members in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut CounterHandle<R>)> {
        self.entries
            .iter_mut()
            .map(|(name, handle)| (name.as_str(), handle))
    }
}
