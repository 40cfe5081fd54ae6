//! Domain model for stored records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by all registry tables.
//!
//! # Invariants
//! - A record's values are positional and follow registry field order.

pub mod record;
