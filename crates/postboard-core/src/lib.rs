//! Core Postboard library (config, session token, API client, feed actions).

pub mod api;
pub mod config;
pub mod feed;
pub mod interrupt;
pub mod logging;
pub mod session;
