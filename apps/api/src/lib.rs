//! Typed request adapters for axum
//!
//! This library binds JSON request bodies and numeric path ids to typed
//! business-logic callbacks and answers with a uniform response envelope.
//! It also carries the environment-driven logging configuration and a small
//! `things` resource wired through every adapter.

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod services;
