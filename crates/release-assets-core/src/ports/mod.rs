//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No HTTP or wire types in any signature
//! - Adapters map their own errors to [`ReleasePortError`] at the boundary

pub mod release_host;

pub use release_host::{ReleaseHostPort, ReleasePortError, ReleasePortResult};

#[cfg(test)]
pub use release_host::MockReleaseHostPort;
