//! Synthetic history seeding.
//!
//! Generates a plausible message history for each directory entity at
//! session start. This is a seeding utility only: after construction the
//! store is mutated exclusively through its append path.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::directory::{Directory, Entity, EntityKind};

use super::message::{Direction, Message};
use super::store::ConversationStore;

/// Seeded history length for one-on-one conversations.
pub const INDIVIDUAL_HISTORY_LEN: usize = 100;

/// Seeded history length for group conversations.
pub const GROUP_HISTORY_LEN: usize = 10;

/// Messages per calendar day: each batch of this size is dated one day
/// earlier than the batch after it.
const BATCH_SIZE: usize = 10;

/// Generates a synthetic history for one entity.
///
/// Message `i` is dated `today - i / BATCH_SIZE` days, so dates are
/// non-increasing in index and bucket membership is deterministic even
/// though directions and timestamps are randomized. Received group
/// messages get a sender drawn uniformly from the member list; sent
/// messages never carry one.
///
/// The random source is caller-supplied so tests can pass a fixed-seed
/// `StdRng`.
pub fn seed_history<R: Rng>(entity: &Entity, today: NaiveDate, rng: &mut R) -> Vec<Message> {
    let count = match entity.kind {
        EntityKind::Individual => INDIVIDUAL_HISTORY_LEN,
        EntityKind::Group { .. } => GROUP_HISTORY_LEN,
    };
    let flavor = if entity.is_group() { "Group" } else { "Personal" };

    (0..count)
        .map(|i| {
            let direction = if rng.gen_bool(0.5) {
                Direction::Sent
            } else {
                Direction::Received
            };

            let mut message = Message {
                id: i,
                text: format!("Message {} - {} chat message example", i + 1, flavor),
                direction,
                timestamp: display_time(rng),
                date: today - Duration::days((i / BATCH_SIZE) as i64),
                sender_name: None,
            };

            if direction == Direction::Received {
                if let EntityKind::Group { member_names } = &entity.kind {
                    if !member_names.is_empty() {
                        let pick = rng.gen_range(0..member_names.len());
                        message = message.with_sender(member_names[pick].clone());
                    }
                }
            }

            message
        })
        .collect()
}

/// Seeds one conversation per directory entity.
pub fn seed_store<R: Rng>(directory: &Directory, today: NaiveDate, rng: &mut R) -> ConversationStore {
    let conversations = directory
        .list()
        .iter()
        .map(|entity| (entity.id, seed_history(entity, today, rng)))
        .collect();
    ConversationStore::from_conversations(conversations)
}

/// Random display-only time of day in the "HH:MM AM/PM" form.
fn display_time<R: Rng>(rng: &mut R) -> String {
    let hour = rng.gen_range(1..=12);
    let minute = rng.gen_range(0..60);
    let meridiem = if rng.gen_bool(0.5) { "AM" } else { "PM" };
    format!("{hour:02}:{minute:02} {meridiem}")
}
