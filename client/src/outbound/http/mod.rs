//! Players REST backend adapter.
//!
//! This module provides the reqwest implementation of the `PlayerGateway`
//! port.

mod dto;
mod gateway;

pub use gateway::{GatewayBuildError, PlayerHttpGateway};
