//! Configuration for the in-memory store.

/// Tunables for [`InMemoryClient`](crate::InMemoryClient).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Field manager assumed for apply patches sent without a field owner.
    /// When `None`, such patches are rejected as bad requests.
    pub default_field_manager: Option<String>,
    /// Whether dry-run options suppress persistence. When false, dry-run
    /// writes are persisted like any other write.
    pub honor_dry_run: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            default_field_manager: None,
            honor_dry_run: true,
        }
    }
}
