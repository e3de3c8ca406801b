use onko_catalogue::{InMemoryCatalogueLookup, PropertyResolver};
use onko_model::{CatalogueEntry, DataAccessError};

fn lookup_with_entry() -> InMemoryCatalogueLookup {
    let mut lookup = InMemoryCatalogueLookup::new();
    lookup.insert(
        3,
        CatalogueEntry::new("C61", "Prostate", "Malignant neoplasm of prostate")
            .with_version("2.16.840.1.113883.6.3", "ICD-10 2025"),
    );
    lookup
}

#[test]
fn resolve_returns_the_unique_entry() {
    let resolver = PropertyResolver::new(lookup_with_entry());
    let entry = resolver.resolve("C61", 3).unwrap();
    assert_eq!(entry.code, "C61");
    assert_eq!(entry.short_description, "Prostate");
    assert_eq!(entry.version_description.as_deref(), Some("ICD-10 2025"));
}

#[test]
fn resolve_fails_on_zero_matches() {
    let resolver = PropertyResolver::new(lookup_with_entry());
    assert_eq!(
        resolver.resolve("C61", 4).unwrap_err(),
        DataAccessError::ResolutionFailed {
            code: "C61".to_string(),
            version: 4
        }
    );
    assert!(matches!(
        resolver.resolve("Z99", 3),
        Err(DataAccessError::ResolutionFailed { .. })
    ));
}

#[test]
fn resolve_fails_on_ambiguous_matches() {
    let mut lookup = lookup_with_entry();
    lookup.insert(3, CatalogueEntry::new("C61", "Duplicate", "Second entry"));
    let resolver = PropertyResolver::new(lookup);
    assert!(matches!(
        resolver.resolve("C61", 3),
        Err(DataAccessError::ResolutionFailed { .. })
    ));
}

#[test]
fn short_description_or_default_resolves() {
    let resolver = PropertyResolver::new(lookup_with_entry());
    assert_eq!(resolver.short_description_or_default("C61", 3), "Prostate");
}

#[test]
fn short_description_or_default_swallows_failed_resolution() {
    let resolver = PropertyResolver::new(InMemoryCatalogueLookup::new());
    assert_eq!(resolver.short_description_or_default("X1", 9), "");
}
