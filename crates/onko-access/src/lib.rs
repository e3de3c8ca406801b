pub mod accessor;
pub mod fallback;
pub mod text;

pub use accessor::{ColumnValue, RowAccessor};
pub use fallback::try_or_log;
pub use text::{clean_text, from_utf16_units};
