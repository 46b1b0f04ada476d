//! Date-bucketed timeline grouping.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::conversation::Message;

use super::label::date_label;

/// Messages sharing one calendar date, in original append order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateGroup {
    /// Bucket key: the calendar date, time-of-day discarded.
    pub date: NaiveDate,
    /// The bucket's messages, preserving append order.
    pub messages: Vec<Message>,
}

impl DateGroup {
    /// Human-readable divider label for this bucket.
    pub fn label(&self, today: NaiveDate) -> String {
        date_label(self.date, today)
    }
}

/// Partitions messages into date buckets ordered most recent first.
///
/// The partition is stable: within a bucket the original append order is
/// preserved, never re-sorted. The date is the bucket key, so bucket dates
/// are strictly decreasing and equal-date messages are never split.
pub fn group_by_date(messages: &[Message]) -> Vec<DateGroup> {
    let mut buckets: BTreeMap<NaiveDate, Vec<Message>> = BTreeMap::new();
    for message in messages {
        buckets.entry(message.date).or_default().push(message.clone());
    }

    buckets
        .into_iter()
        .rev()
        .map(|(date, messages)| DateGroup { date, messages })
        .collect()
}
