//! Search Gateway Module
//!
//! The only part of the service that talks to the outside world. It hands a
//! query description to the document index and brings back the raw hits.
//!
//! ## Outcomes
//! A call either yields an `EngineResult` (the engine answered, possibly marking
//! the query as invalid) or an error (nothing usable came back). Callers rely on
//! that split to decide which message the client sees.
//!
//! ## Submodules
//! - **`types`**: The `SearchGateway` capability trait.
//! - **`opensearch`**: HTTP implementation against an OpenSearch cluster.
//! - **`credentials`**: Pluggable strategies that authenticate outgoing requests.

pub mod credentials;
pub mod opensearch;
pub mod types;
