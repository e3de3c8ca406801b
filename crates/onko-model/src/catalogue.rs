use serde::{Deserialize, Serialize};

/// Descriptive entry of a property catalogue, identified by `(code, version)`.
///
/// Entries are resolved from an external catalogue collaborator and are not
/// owned by any row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    pub code: String,
    pub short_description: String,
    pub description: String,
    pub version_oid: Option<String>,
    pub version_description: Option<String>,
}

impl CatalogueEntry {
    pub fn new(
        code: impl Into<String>,
        short_description: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            short_description: short_description.into(),
            description: description.into(),
            version_oid: None,
            version_description: None,
        }
    }

    #[must_use]
    pub fn with_version(
        mut self,
        oid: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.version_oid = Some(oid.into());
        self.version_description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_without_version_metadata() {
        let entry = CatalogueEntry::new("C61", "Prostate", "Malignant neoplasm of prostate");
        assert_eq!(entry.code, "C61");
        assert!(entry.version_oid.is_none());
        assert!(entry.version_description.is_none());
    }

    #[test]
    fn entry_with_version_metadata() {
        let entry = CatalogueEntry::new("C61", "Prostate", "Malignant neoplasm of prostate")
            .with_version("2.16.840.1.113883.6.3", "ICD-10 2025");
        assert_eq!(entry.version_oid.as_deref(), Some("2.16.840.1.113883.6.3"));
        assert_eq!(entry.version_description.as_deref(), Some("ICD-10 2025"));
    }
}
