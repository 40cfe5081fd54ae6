//! Console frontend for Storedesk.
//!
//! Everything here is I/O glue over `storedesk_core`: nested menus, prompt
//! loops, and tabular rendering. The reader/writer seams are generic so
//! flows can be driven by scripted input in tests.

pub mod menu;
pub mod prompt;
pub mod render;
