//! Shared types for the World Events dashboard.
//!
//! The [`objects`] module holds the JSON wire format. The optional
//! [`client`] module (feature `client`) is a typed HTTP client for it.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![forbid(unsafe_code)]

#[cfg(feature = "client")]
pub mod client;
pub mod objects;
