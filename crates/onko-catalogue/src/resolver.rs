//! Resolution of `(code, version)` pairs against a property catalogue.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::warn;

use onko_model::{CatalogueEntry, DataAccessError, Result};

/// External lookup collaborator backing a [`PropertyResolver`].
///
/// The upstream catalogue keys entries uniquely by `(code, version)`; a
/// lookup reporting zero or several entries for a pair makes that pair
/// unresolvable.
pub trait CatalogueLookup: Send + Sync {
    fn find_entries(&self, code: &str, version: i32) -> Vec<CatalogueEntry>;
}

/// Resolves catalogue codes to their descriptive entries.
pub struct PropertyResolver {
    lookup: Box<dyn CatalogueLookup>,
}

impl PropertyResolver {
    pub fn new(lookup: impl CatalogueLookup + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }

    /// Resolve the unique entry for `(code, version)`.
    pub fn resolve(&self, code: &str, version: i32) -> Result<CatalogueEntry> {
        let mut entries = self.lookup.find_entries(code, version);
        if entries.len() == 1 {
            Ok(entries.remove(0))
        } else {
            Err(DataAccessError::ResolutionFailed {
                code: code.to_string(),
                version,
            })
        }
    }

    /// Resolve the short description, falling back to the empty string.
    ///
    /// Best-effort display code uses this instead of propagating lookup
    /// failures; the failure is logged and swallowed.
    pub fn short_description_or_default(&self, code: &str, version: i32) -> String {
        match self.resolve(code, version) {
            Ok(entry) => entry.short_description,
            Err(_) => {
                warn!(
                    code,
                    version, "no catalogue entry, returning empty short description"
                );
                String::new()
            }
        }
    }
}

impl std::fmt::Debug for PropertyResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyResolver").finish_non_exhaustive()
    }
}

static RESOLVER: OnceLock<PropertyResolver> = OnceLock::new();

/// Bind the process-wide resolver.
///
/// The first caller wins; later calls keep the existing binding and return
/// it unchanged. Concurrent callers never observe a partially constructed
/// resolver.
pub fn initialize(lookup: impl CatalogueLookup + 'static) -> &'static PropertyResolver {
    RESOLVER.get_or_init(|| PropertyResolver::new(lookup))
}

/// The process-wide resolver bound by [`initialize`].
pub fn instance() -> Result<&'static PropertyResolver> {
    RESOLVER.get().ok_or(DataAccessError::NotInitialized)
}

/// In-memory lookup keyed by `(code, version)`.
///
/// Duplicate registrations are kept, so an ambiguous upstream catalogue
/// stays observable as a failed resolution instead of being masked.
#[derive(Debug, Default)]
pub struct InMemoryCatalogueLookup {
    entries: BTreeMap<(String, i32), Vec<CatalogueEntry>>,
}

impl InMemoryCatalogueLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, version: i32, entry: CatalogueEntry) {
        self.entries
            .entry((entry.code.clone(), version))
            .or_default()
            .push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CatalogueLookup for InMemoryCatalogueLookup {
    fn find_entries(&self, code: &str, version: i32) -> Vec<CatalogueEntry> {
        self.entries
            .get(&(code.to_string(), version))
            .cloned()
            .unwrap_or_default()
    }
}
