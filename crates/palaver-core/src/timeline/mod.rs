//! Timeline grouping and labeling.
//!
//! Transforms a flat conversation history into the date-bucketed,
//! most-recent-first structure the display layer renders, and formats the
//! divider label for each bucket.
//!
//! # Module Structure
//!
//! - `group`: stable date partition (`DateGroup`, `group_by_date`)
//! - `label`: pure divider labels (`date_label`)

mod group;
mod label;

// Re-export public API
pub use group::{DateGroup, group_by_date};
pub use label::date_label;
