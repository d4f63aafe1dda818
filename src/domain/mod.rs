//! Domain layer: aggregates, value objects, events and ports.
//!
//! Nothing here depends on storage, transport or crypto libraries. Ports are
//! traits implemented by [`crate::infrastructure`].
//!
//! - [`value_objects`] - self-validating primitives
//! - [`entities`] - the ad aggregate, users, conversations and messages
//! - [`events`] - facts recorded by the ad aggregate
//! - [`repositories`] - storage ports
//! - [`security`] - encryption, hashing and token ports

pub mod entities;
pub mod events;
pub mod repositories;
pub mod security;
pub mod value_objects;
