//! Terminal console for the players REST API.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
