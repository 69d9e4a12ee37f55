//! Task board state and query management.
//!
//! This module implements the full task-board core: listing with filtering,
//! search, and pagination against an in-memory store; create, update, and
//! delete mutations; and the reducer-driven board state that presentation
//! consumers read and drive. The module follows hexagonal architecture:
//!
//! - Domain types and the board reducer in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The orchestrating board controller in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
