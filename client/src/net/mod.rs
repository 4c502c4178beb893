//! Networking modules for the REST API and object storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `upload` pushes screenshot blobs to object
//! storage, `types` defines the shared wire schema, and `error` carries the
//! failure taxonomy both gateways report through.

pub mod api;
pub mod error;
pub mod types;
pub mod upload;
