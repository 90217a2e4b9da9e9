//! Recency and popularity filter over collected responses.
use crate::medium::types::{ResponseRecord, UserId};
use time::{Duration, OffsetDateTime};

pub const DEFAULT_RECENCY_WINDOW: Duration = Duration::days(30);

/// Selects responses that are both recent and recommended enough.
///
/// Both bounds are inclusive: a response exactly `window` old, or with exactly
/// `min_recommends`, qualifies.
#[derive(Debug, Clone, Copy)]
pub struct ResponseFilter {
    pub min_recommends: u64,
    pub window: Duration,
}

impl ResponseFilter {
    pub fn new(min_recommends: u64) -> Self {
        Self {
            min_recommends,
            window: DEFAULT_RECENCY_WINDOW,
        }
    }

    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub fn is_recent(&self, record: &ResponseRecord, now: OffsetDateTime) -> bool {
        let created_secs = record.created_at.div_euclid(1000);
        created_secs >= (now - self.window).unix_timestamp()
    }

    pub fn meets_threshold(&self, record: &ResponseRecord) -> bool {
        record.recommends >= self.min_recommends
    }

    /// Creator ids of qualifying records, in input order, one per record.
    pub fn select_creators(&self, records: &[ResponseRecord], now: OffsetDateTime) -> Vec<UserId> {
        records
            .iter()
            .filter(|r| self.is_recent(r, now) && self.meets_threshold(r))
            .map(|r| r.creator_id.clone())
            .collect()
    }
}
