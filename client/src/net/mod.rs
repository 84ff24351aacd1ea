//! Networking modules for the catalog endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `catalog` fetches and filters the catalog, and `types` defines the wire
//! schema shared with the storefront host.

pub mod catalog;
pub mod types;
