//! Unit tests for the task board core.

mod store_tests;
