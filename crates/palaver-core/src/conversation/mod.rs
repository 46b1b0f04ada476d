//! Conversation domain module.
//!
//! # Module Structure
//!
//! - `message`: message types (`Message`, `Direction`, `MessageId`)
//! - `store`: the append-only per-entity history (`ConversationStore`)
//! - `seed`: synthetic history generation for session start

mod message;
mod seed;
mod store;

// Re-export public API
pub use message::{Direction, Message, MessageId};
pub use seed::{GROUP_HISTORY_LEN, INDIVIDUAL_HISTORY_LEN, seed_history, seed_store};
pub use store::ConversationStore;
