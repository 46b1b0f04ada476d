//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: the session state value (`SessionState`)
//! - `event`: input events consumed by the controller (`SessionEvent`)

mod event;
mod model;

// Re-export public API
pub use event::SessionEvent;
pub use model::SessionState;
