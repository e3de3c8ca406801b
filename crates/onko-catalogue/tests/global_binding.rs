//! The process-wide resolver binding is first-writer-wins, so this binary
//! holds the only test that calls `initialize`.

use onko_catalogue::{InMemoryCatalogueLookup, initialize, instance};
use onko_model::CatalogueEntry;

#[test]
fn first_initialize_wins() {
    let mut first = InMemoryCatalogueLookup::new();
    first.insert(1, CatalogueEntry::new("A", "first", "bound first"));

    let mut second = InMemoryCatalogueLookup::new();
    second.insert(1, CatalogueEntry::new("A", "second", "bound second"));

    initialize(first);
    initialize(second);

    let resolver = instance().unwrap();
    assert_eq!(resolver.short_description_or_default("A", 1), "first");
}
