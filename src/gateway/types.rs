use crate::search::types::{EngineResult, QuerySpec};

use anyhow::Result;
use std::future::Future;

/// Capability to run a query against the external document index.
///
/// Implementations make exactly one round trip per call.
/// * `Ok` with `valid == false` means the engine answered and rejected the query.
/// * `Err` means no usable answer was received (connection, timeout, decoding).
pub trait SearchGateway: Send + Sync + 'static {
    fn execute(
        &self,
        index: &str,
        spec: &QuerySpec,
        offset: u64,
        size: u64,
    ) -> impl Future<Output = Result<EngineResult>> + Send;
}
