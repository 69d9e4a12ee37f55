//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by the board
//! controller and the store adapters.

pub mod gateway;
pub mod seed;

pub use gateway::{TaskGateway, TaskGatewayError, TaskGatewayResult};
pub use seed::{SeedSource, SeedSourceError};
