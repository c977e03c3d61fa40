//! Inbound adapters that translate user input into controller calls while
//! keeping terminal details at the edge.
//!
//! The line-oriented console lives under [`terminal`].

pub mod terminal;
