pub mod catalogue;
pub mod error;
pub mod row;
pub mod value;

pub use catalogue::CatalogueEntry;
pub use error::{DataAccessError, Result};
pub use row::{
    IDENTITY_COLUMN, PARENT_COLUMN, PATIENT_COLUMN, PROPCAT_VERSION_SUFFIX, Row, RowBuilder,
};
pub use value::{RawValue, ValueKind};
