//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **http**: reqwest-backed client for the players REST backend.
//!
//! Adapters are thin translators between domain types and wire
//! representations. They contain no table or paging logic.

pub mod http;
