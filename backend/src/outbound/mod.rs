//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL repositories built on Diesel.
//!
//! Adapters translate between domain types and storage representations and
//! hold no business rules.

pub mod persistence;
