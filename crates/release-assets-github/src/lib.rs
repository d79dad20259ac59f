#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultGithubClient is meant to be used through the ReleaseHostPort trait,
// not through its generic backend parameter
#![allow(private_interfaces, private_bounds)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultGithubClient;

// Configuration
pub use config::{DEFAULT_API_URL, GithubClientConfig};

// Errors raised while building the client
pub use error::{GithubError, GithubResult};
