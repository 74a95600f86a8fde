//! Networking modules for the HTTP JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the property/valuation backend and
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
