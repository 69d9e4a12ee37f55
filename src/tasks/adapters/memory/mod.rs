//! In-memory task store and its gateway boundary.

mod gateway;
mod store;

pub use gateway::InMemoryGateway;
pub use store::InMemoryTaskStore;
