// Library exports for the Tron agent
// This allows the test suites and other utilities to use the core decision logic

pub mod arena;
pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod search;
pub mod types;
