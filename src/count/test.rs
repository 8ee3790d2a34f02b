use std::io::{self, Cursor, Read};

use super::{CounterHandle, CounterSet, CounterValue, GroupStat};
use crate::error::Error;

fn words(values: &[u64]) -> Cursor<Vec<u8>> {
    Cursor::new(values.iter().flat_map(|it| it.to_ne_bytes()).collect())
}

struct Failing(i32);

impl Read for Failing {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::from_raw_os_error(self.0))
    }
}

#[test]
fn test_read_leader() {
    let mut handle = CounterHandle::new(words(&[42, 1000, 900]), true);
    let value = handle.read().unwrap();
    assert_eq!(
        value,
        CounterValue::Group(GroupStat {
            value: 42,
            time_enabled: 1000,
            time_running: 900,
        })
    );
    assert_eq!(value.count(), Some(42));
}

#[test]
fn test_read_member() {
    let mut handle = CounterHandle::new(words(&[7, 8, 9]), false);
    assert_eq!(handle.read().unwrap(), CounterValue::Value(7));
    assert_eq!(handle.read().unwrap(), CounterValue::Value(8));
}

#[test]
fn test_read_eof_is_not_collected() {
    let mut handle = CounterHandle::new(Cursor::new(vec![]), true);
    let value = handle.read().unwrap();
    assert_eq!(value, CounterValue::NotCollected);
    assert_eq!(value.count(), None);
}

#[test]
fn test_read_short() {
    let mut handle = CounterHandle::new(Cursor::new(vec![0; 12]), true);
    match handle.read() {
        Err(Error::ShortRead { expected, got }) => {
            assert_eq!(expected, 24);
            assert_eq!(got, 12);
        }
        other => panic!("unexpected read result: {:?}", other),
    }
}

#[test]
fn test_read_os_error() {
    let mut handle = CounterHandle::new(Failing(libc::EBADF), false);
    match handle.read() {
        Err(Error::Os(e)) => assert_eq!(e.raw_os_error(), Some(libc::EBADF)),
        other => panic!("unexpected read result: {:?}", other),
    }
}

#[test]
fn test_released_handle() {
    let mut handle = CounterHandle::new(words(&[1]), false);
    assert!(handle.is_valid());

    handle.release();
    assert!(!handle.is_valid());
    assert!(matches!(handle.read(), Err(Error::InvalidHandle)));

    // Releasing twice is fine.
    handle.release();
    assert!(!handle.is_valid());

    let mut empty = CounterHandle::<Cursor<Vec<u8>>>::empty(true);
    assert!(empty.is_leader());
    assert!(matches!(empty.read(), Err(Error::InvalidHandle)));
}

#[test]
fn test_set_leader_is_first() {
    let mut set = CounterSet::new();
    assert!(set.leader().is_none());

    set.push("cycles", CounterHandle::new(words(&[1, 2, 3]), true)).unwrap();
    set.push("instructions", CounterHandle::new(words(&[4]), false)).unwrap();
    set.push("branches", CounterHandle::new(words(&[5]), false)).unwrap();

    let (name, leader) = set.leader().unwrap();
    assert_eq!(name, "cycles");
    assert!(leader.is_leader());
    assert_eq!(
        set.names().collect::<Vec<_>>(),
        ["cycles", "instructions", "branches"]
    );
}

#[test]
fn test_set_never_replaces_leader() {
    let mut set = CounterSet::new();
    set.push("cycles", CounterHandle::new(words(&[1, 2, 3]), true)).unwrap();
    set.push("branches", CounterHandle::new(words(&[5]), false)).unwrap();

    let rejected = set.push("cycles", CounterHandle::new(words(&[9]), false));
    assert!(rejected.is_err());

    set.push("branches", CounterHandle::new(words(&[6]), false)).unwrap();
    assert_eq!(set.len(), 2);

    let values: Vec<_> = set
        .iter_mut()
        .map(|(name, handle)| (name.to_string(), handle.read().unwrap().count()))
        .collect();
    assert_eq!(
        values,
        [("cycles".to_string(), Some(1)), ("branches".to_string(), Some(6))]
    );
}
