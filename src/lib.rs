//! Snaplink - Terminal URL Shortener
//!
//! This crate implements an interactive terminal utility that shortens URLs
//! through the TinyURL create API. Every attempt passes a client-side
//! sliding-window rate limiter before touching the network, successful
//! transactions are posted to an optional journal endpoint as a detached
//! fire-and-forget task, and results can be copied to the system clipboard.

pub mod config;
pub mod error;
pub mod ratelimit;
pub mod shorten;
pub mod ui;
