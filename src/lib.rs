//! Taskboard: the state/query engine of a single-user kanban task manager.
//!
//! This crate provides the client-side core behind a To Do / In Progress /
//! Completed board: an in-memory task store seeded from a static JSON
//! source, an asynchronous gateway boundary, and a reducer-driven board
//! state machine with an orchestrating controller.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure entities, query types, and the board reducer with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the gateway and seed source
//! - **Adapters**: Concrete implementations of ports (in-memory store,
//!   JSON seed files)
//! - **Services**: The board controller exposed to presentation consumers
//!
//! # Modules
//!
//! - [`tasks`]: Task entities, querying, and board state orchestration

pub mod tasks;
