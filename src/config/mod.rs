//! Configuration Module
//!
//! Startup settings for the search service, read once in `main`.
//!
//! ## Sources
//! - **Command line**: `--bind`, `--endpoint` and `--index` override the environment.
//! - **Environment**: `OPENSEARCH_*` variables describe the index connection and
//!   its credentials; `LOG_FORMAT` / `LOG_LEVEL` drive the log subscriber.
//!
//! The OpenSearch endpoint is the only required value. Everything else has a default.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;
