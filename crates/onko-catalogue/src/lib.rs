pub mod error;
pub mod loader;
pub mod resolver;
pub mod source;

pub use error::CatalogueError;
pub use loader::{load_catalogue_csv, sha256_hex, verify_sha256};
pub use resolver::{
    CatalogueLookup, InMemoryCatalogueLookup, PropertyResolver, initialize, instance,
};
pub use source::{InMemoryRowSource, RowSource};
