//! Best-effort relay-hint lookup for event mentions.
//!
//! Knowing which relay an event lives on is an integrator concern (an event
//! cache, an outbox index). The tagger only needs a best-effort answer, so
//! the seam is a trait that cannot fail: implementations return an empty
//! string when they have nothing, and absorb their own errors.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tracing::trace;

/// Resolves a NIP-19 identifier to a relay URL hint.
#[async_trait]
pub trait RelayHintResolver: Send + Sync {
    /// Return a relay URL where the referenced event is expected to be
    /// found, or an empty string when no hint is known. This call never
    /// errors; implementations swallow their own failures.
    async fn resolve_relay_hint(&self, identifier: &str) -> String;
}

/// Resolver that never knows a relay.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRelayHints;

#[async_trait]
impl RelayHintResolver for NoRelayHints {
    async fn resolve_relay_hint(&self, _identifier: &str) -> String {
        String::new()
    }
}

/// In-memory identifier → relay URL map.
///
/// The shape an event cache plugs into: populate it with the identifiers you
/// have seen and where, and unknown identifiers resolve to no hint.
#[derive(Debug, Clone, Default)]
pub struct StaticRelayHints {
    hints: HashMap<String, String>,
}

impl StaticRelayHints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a relay hint for an identifier, replacing any previous one.
    pub fn insert(&mut self, identifier: impl Into<String>, relay_url: impl Into<String>) {
        self.hints.insert(identifier.into(), relay_url.into());
    }

    pub fn len(&self) -> usize {
        self.hints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}

impl FromIterator<(String, String)> for StaticRelayHints {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            hints: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
impl RelayHintResolver for StaticRelayHints {
    async fn resolve_relay_hint(&self, identifier: &str) -> String {
        self.hints.get(identifier).cloned().unwrap_or_default()
    }
}

/// Decorator that bounds the inner lookup with a wall-clock timeout.
///
/// A lookup that never resolves would stall the whole tagging operation, so
/// integrators with slow backends wrap them here; a timed-out lookup
/// degrades to no hint.
#[derive(Debug, Clone)]
pub struct BoundedResolver<R> {
    inner: R,
    timeout: Duration,
}

impl<R> BoundedResolver<R> {
    pub fn new(inner: R, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<R: RelayHintResolver> RelayHintResolver for BoundedResolver<R> {
    async fn resolve_relay_hint(&self, identifier: &str) -> String {
        match tokio::time::timeout(self.timeout, self.inner.resolve_relay_hint(identifier)).await {
            Ok(hint) => hint,
            Err(_) => {
                trace!(identifier, "relay hint lookup timed out");
                String::new()
            }
        }
    }
}
