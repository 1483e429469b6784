//! Check provider contract
//!
//! Every pluggable check implements [`ChecksProvider`]: produce a mapping
//! of named measurement keys to check results, and decide per request
//! whether those results may be included in the response at all.

use crate::core::types::CheckResult;
use actix_web::HttpRequest;
use async_trait::async_trait;
use indexmap::IndexMap;

/// Named groups of check results, keyed by `"componentName:measurementName"`
/// or a bare component name
///
/// An order-preserving map: the rendered document lists keys in the order
/// providers contributed them.
pub type CheckMap = IndexMap<String, Vec<CheckResult>>;

/// A pluggable unit performing one or more health probes
///
/// Implementations must capture expected failure modes (network errors,
/// timeouts, non-2xx responses) and report them as `fail` results instead
/// of propagating them; the contract deliberately has no error channel.
/// A panic out of [`checks`](ChecksProvider::checks) is a programmer error
/// and fails the whole request, matching the fail-fast philosophy for
/// unrecoverable conditions.
#[async_trait]
pub trait ChecksProvider: Send + Sync {
    /// Run this provider's probes and return its named result groups
    ///
    /// Returning an empty map is valid and contributes nothing to the
    /// response; a platform-conditional provider without support for the
    /// current platform reports itself this way.
    async fn checks(&self) -> CheckMap;

    /// Whether this provider's checks may be included in the response to
    /// the given request
    ///
    /// When this returns `false` the aggregator skips the provider
    /// entirely; [`checks`](ChecksProvider::checks) is never invoked, so
    /// no probe work is performed for unauthorized callers.
    fn authorize(&self, _req: &HttpRequest) -> bool {
        true
    }
}
