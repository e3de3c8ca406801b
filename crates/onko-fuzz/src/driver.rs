//! Per-variant test driving.

use thiserror::Error;

use onko_model::Row;

use crate::mutation::{Mutation, MutationConfig, mutations};

/// Failures of the harness configuration itself.
///
/// These abort the whole template expansion; a failing consumer never
/// produces one of these.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The configured base-row provider did not yield a row.
    #[error("base row provider failed: {0}")]
    InvalidSource(String),
}

/// Labelled consumer result for one generated variant.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome<T, E> {
    /// Display label naming the nulled column(s).
    pub label: String,
    /// The consumer's result, untouched.
    pub result: std::result::Result<T, E>,
}

/// Drives a consumer operation once per generated row variant.
///
/// The driver owns enumeration and labelling only; judging the consumer's
/// result stays with the test case body.
#[derive(Debug, Clone, Default)]
pub struct MutationTestDriver {
    config: MutationConfig,
}

impl MutationTestDriver {
    pub fn new(config: MutationConfig) -> Self {
        Self { config }
    }

    /// Expand the base row into its variant cases.
    ///
    /// A failing provider is fatal to the whole expansion, not to single
    /// cases.
    pub fn cases<P, E>(&self, provider: P) -> Result<Vec<Mutation>, DriverError>
    where
        P: FnOnce() -> Result<Row, E>,
        E: std::fmt::Display,
    {
        let base = provider().map_err(|e| DriverError::InvalidSource(e.to_string()))?;
        Ok(mutations(&base, &self.config))
    }

    /// Invoke `consumer` once per variant and collect the labelled results.
    pub fn run<P, PE, F, T, E>(
        &self,
        provider: P,
        mut consumer: F,
    ) -> Result<Vec<CaseOutcome<T, E>>, DriverError>
    where
        P: FnOnce() -> Result<Row, PE>,
        PE: std::fmt::Display,
        F: FnMut(&Mutation) -> Result<T, E>,
    {
        let cases = self.cases(provider)?;
        Ok(cases
            .iter()
            .map(|case| CaseOutcome {
                label: case.display_label(),
                result: consumer(case),
            })
            .collect())
    }
}
