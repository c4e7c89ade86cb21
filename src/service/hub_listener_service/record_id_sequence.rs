use std::sync::atomic::{AtomicI64, Ordering};
use time::OffsetDateTime;

///
/// Allocator of feed record ids.
///
/// Ids are unix epoch milliseconds at receipt, bumped past the previous
/// id when several events arrive within the same millisecond. Seeding
/// with [Self::advance_past] keeps new ids above already persisted ones.
///
pub struct RecordIdSequence {
    last_id: AtomicI64,
}

impl RecordIdSequence {
    pub fn new() -> Self {
        let last_id = AtomicI64::new(0);

        Self { last_id }
    }

    /// Makes sure ids returned by [Self::next] are greater than `id`
    pub fn advance_past(&self, id: i64) {
        self.last_id.fetch_max(id, Ordering::SeqCst);
    }

    pub fn next(&self) -> i64 {
        let now = unix_millis_now();

        loop {
            let last = self.last_id.load(Ordering::SeqCst);
            let candidate = now.max(last + 1);

            let exchanged = self.last_id.compare_exchange(
                last,
                candidate,
                Ordering::SeqCst,
                Ordering::SeqCst,
            );
            if exchanged.is_ok() {
                return candidate;
            }
        }
    }
}

fn unix_millis_now() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
