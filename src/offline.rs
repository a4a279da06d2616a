/// Fire-and-forget installation of the page's offline caching agent.
///
/// The hook takes nothing, returns nothing, and handles its own failures;
/// whatever happens inside it must never interrupt startup. It is injected
/// rather than called directly so tests can run the full startup sequence
/// without touching the browser.
pub trait OfflineCache {
    /// Asks the platform to install or update the offline caching agent.
    fn register(&self);
}

/// Offline cache that does nothing. The double for tests and for pages
/// that opt out of offline support.
pub struct NoopOfflineCache;

impl OfflineCache for NoopOfflineCache {
    fn register(&self) {}
}
