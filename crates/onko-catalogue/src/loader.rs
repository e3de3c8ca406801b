//! Catalogue snapshot loading.
//!
//! Property catalogues are distributed as CSV snapshots exported from the
//! upstream reference database. Parsing is header-indexed so column order in
//! the export does not matter; an optional sha256 check guards against
//! silently truncated downloads.

use std::path::Path;

use sha2::Digest;
use tracing::debug;

use onko_model::CatalogueEntry;

use crate::error::CatalogueError;
use crate::resolver::InMemoryCatalogueLookup;

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    hex::encode(digest)
}

/// Verify a snapshot file against an expected sha256 hex digest.
pub fn verify_sha256(path: &Path, expected: &str) -> Result<(), CatalogueError> {
    let bytes = std::fs::read(path).map_err(|e| CatalogueError::io(path, e))?;
    let actual = sha256_hex(&bytes);
    if actual.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(CatalogueError::ChecksumMismatch {
            path: path.to_path_buf(),
            expected: expected.to_string(),
            actual,
        })
    }
}

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn get_string(row: &csv::StringRecord, idx: usize) -> Option<String> {
    row.get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Load a catalogue CSV snapshot into an in-memory lookup.
///
/// Required columns: `code`, `version`, `shortdesc`, `description`.
/// Optional: `version_oid`, `version_description`.
pub fn load_catalogue_csv(path: &Path) -> Result<InMemoryCatalogueLookup, CatalogueError> {
    let bytes = std::fs::read(path).map_err(|e| CatalogueError::io(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .map_err(|e| CatalogueError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .clone();

    let required = |name: &str| {
        header_index(&headers, name).ok_or_else(|| CatalogueError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
    };
    let idx_code = required("code")?;
    let idx_version = required("version")?;
    let idx_shortdesc = required("shortdesc")?;
    let idx_description = required("description")?;
    let idx_version_oid = header_index(&headers, "version_oid");
    let idx_version_description = header_index(&headers, "version_description");

    let mut lookup = InMemoryCatalogueLookup::new();
    for (line, row) in reader.records().enumerate() {
        let row = row.map_err(|e| CatalogueError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        // header occupies the first line of the file
        let row_no = line + 2;

        let code = get_string(&row, idx_code).ok_or_else(|| CatalogueError::InvalidRow {
            path: path.to_path_buf(),
            row: row_no,
            message: "empty code".to_string(),
        })?;
        let version = get_string(&row, idx_version)
            .and_then(|v| v.parse::<i32>().ok())
            .ok_or_else(|| CatalogueError::InvalidRow {
                path: path.to_path_buf(),
                row: row_no,
                message: "version is not an integer".to_string(),
            })?;
        let shortdesc = get_string(&row, idx_shortdesc).unwrap_or_default();
        let description = get_string(&row, idx_description).unwrap_or_default();

        let mut entry = CatalogueEntry::new(code, shortdesc, description);
        entry.version_oid = idx_version_oid.and_then(|idx| get_string(&row, idx));
        entry.version_description = idx_version_description.and_then(|idx| get_string(&row, idx));
        lookup.insert(version, entry);
    }

    debug!(
        path = %path.display(),
        entries = lookup.len(),
        "loaded catalogue snapshot"
    );
    Ok(lookup)
}
