//! Tender Search Service Library
//!
//! A paginated, relevance-ranked search API in front of an OpenSearch index of
//! procurement tenders. The binary (`main.rs`) only wires these modules together.
//!
//! ## Architecture Modules
//! - **`config`**: Startup configuration from command-line flags and environment
//!   variables (index endpoint, credentials, logging).
//! - **`gateway`**: The capability interface to the external document index and its
//!   OpenSearch-over-HTTP implementation.
//! - **`search`**: The request pipeline (normalize, build query, execute, assemble)
//!   and the HTTP handlers that expose it.

pub mod config;
pub mod gateway;
pub mod search;
