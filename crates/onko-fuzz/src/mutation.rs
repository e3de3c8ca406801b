//! Combinatorial null-mutation generation.
//!
//! Robustness tests feed a consumer one row variant per bounded subset of
//! nullable columns. Generation is a pure function of the base row and the
//! configuration, and output order is deterministic, so repeated runs yield
//! identical case sequences.
//!
//! Large bounds multiply quickly: a row with n nullable columns and bound k
//! produces C(n,1) + ... + C(n,k) variants.

use onko_access::RowAccessor;
use onko_model::{IDENTITY_COLUMN, Row};

/// Bounds and filters for [`mutations`].
#[derive(Debug, Clone, Default)]
pub struct MutationConfig {
    /// When non-empty, only single-column variants for these columns are
    /// produced. Listing a column here overrides its exclusion.
    pub include_columns: Vec<String>,
    /// Columns never driven to null, unless individually included.
    pub exclude_columns: Vec<String>,
    /// Upper bound on columns nulled per variant. Zero and negative values
    /// behave like 1.
    pub max_null_columns: i32,
    /// Additional protected columns. The identity column is always
    /// protected.
    pub protected_columns: Vec<String>,
}

/// One derived row with a bounded subset of columns forced absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    label: String,
    row: Row,
}

impl Mutation {
    /// Comma-joined sorted names of the nulled columns.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn row(&self) -> &Row {
        &self.row
    }

    /// Typed view for handing to consumers.
    pub fn accessor(&self) -> RowAccessor<'_> {
        RowAccessor::new(&self.row)
    }

    /// Human-readable test case label embedding the nulled columns.
    pub fn display_label(&self) -> String {
        format!("with column(s) [{}] set to null", self.label)
    }
}

/// Enumerate all row variants for the given bounds.
///
/// Variants cover every subset of non-protected columns of size one up to
/// the configured bound, sorted lexicographically by label. The identity
/// column is never nulled.
pub fn mutations(base: &Row, config: &MutationConfig) -> Vec<Mutation> {
    let mutable: Vec<&str> = base
        .column_names()
        .filter(|name| *name != IDENTITY_COLUMN)
        .filter(|name| !config.protected_columns.iter().any(|p| p == name))
        .collect();

    if mutable.is_empty() {
        return Vec::new();
    }

    let bound = (config.max_null_columns.max(1) as usize).min(mutable.len());

    let mut variants = Vec::new();
    for subset in subsets(&mutable, bound) {
        if !passes_filters(&subset, config) {
            continue;
        }
        variants.push(Mutation {
            label: subset.join(","),
            row: base.without_columns(subset.iter().copied()),
        });
    }

    variants.sort_by(|left, right| left.label.cmp(&right.label));
    tracing::debug!(count = variants.len(), bound, "generated row variants");
    variants
}

/// All non-empty subsets of `columns` up to `bound` elements, each in
/// ascending column order.
fn subsets<'a>(columns: &[&'a str], bound: usize) -> Vec<Vec<&'a str>> {
    let mut out = Vec::new();
    let mut selection = Vec::new();
    walk(columns, bound, 0, &mut selection, &mut out);
    out
}

fn walk<'a>(
    columns: &[&'a str],
    bound: usize,
    start: usize,
    selection: &mut Vec<&'a str>,
    out: &mut Vec<Vec<&'a str>>,
) {
    for idx in start..columns.len() {
        selection.push(columns[idx]);
        out.push(selection.clone());
        if selection.len() < bound {
            walk(columns, bound, idx + 1, selection, out);
        }
        selection.pop();
    }
}

fn passes_filters(subset: &[&str], config: &MutationConfig) -> bool {
    if !config.include_columns.is_empty() {
        // The include list restricts output to the listed single-column
        // variants, overriding any exclusion of the same column.
        return subset.len() == 1 && config.include_columns.iter().any(|c| c == subset[0]);
    }
    !subset
        .iter()
        .any(|column| config.exclude_columns.iter().any(|c| c == column))
}
