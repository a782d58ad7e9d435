use moka::sync::Cache;

use super::PeakNameResolver;

/// Memoising decorator around another resolver.
///
/// Names are keyed case-insensitively and kept for the lifetime of the
/// resolver (no eviction, no expiry). Concurrent misses for the same key
/// trigger a single delegate call.
#[derive(Debug)]
pub struct MemoryCacheResolver<R> {
    inner: R,
    cache: Cache<String, String>,
}

impl<R: PeakNameResolver> MemoryCacheResolver<R> {
    /// Wrap `inner` with an unbounded cache
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Cache::builder().build(),
        }
    }

    /// Number of distinct names resolved so far
    pub fn cached_names(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

impl<R: PeakNameResolver> PeakNameResolver for MemoryCacheResolver<R> {
    fn resolve(&self, name: &str) -> String {
        // Empty names are not worth a cache slot
        if name.is_empty() {
            return self.inner.resolve(name);
        }
        self.cache
            .get_with(name.to_lowercase(), || self.inner.resolve(name))
    }

    fn describe(&self) -> String {
        format!("memory-cache({})", self.inner.describe())
    }
}
