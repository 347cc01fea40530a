//! The `dailylist` library crate.
//!
//! Core business logic, domain models, authentication mechanisms, routing
//! configuration, and error handling for the dailylist API. The main binary
//! (`main.rs`) uses it to construct and run the application; integration
//! tests use it to assemble the same app in-process.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
