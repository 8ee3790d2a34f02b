/// Leader read result for `PERF_FORMAT_TOTAL_TIME_ENABLED | PERF_FORMAT_TOTAL_TIME_RUNNING`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroupStat {
    pub value: i64,
    pub time_enabled: i64,
    pub time_running: i64,
}

impl GroupStat {
    pub(crate) const SIZE: usize = 3 * size_of::<u64>();

    // https://github.com/torvalds/linux/blob/v6.13/include/uapi/linux/perf_event.h#L344
    // struct read_format {
    //     u64 value;
    //     { u64 time_enabled; } && PERF_FORMAT_TOTAL_TIME_ENABLED
    //     { u64 time_running; } && PERF_FORMAT_TOTAL_TIME_RUNNING
    // };
    pub(crate) fn from_bytes(buf: &[u8; Self::SIZE]) -> Self {
        let mut words = buf.chunks_exact(size_of::<u64>()).map(word);
        // `chunks_exact` on a 24-byte array always yields three words.
        let mut next = || words.next().unwrap_or_default();

        Self {
            value: next(),
            time_enabled: next(),
            time_running: next(),
        }
    }
}

pub(crate) fn word(bytes: &[u8]) -> i64 {
    let mut raw = [0; size_of::<u64>()];
    raw.copy_from_slice(bytes);
    u64::from_ne_bytes(raw) as i64
}
