pub mod driver;
pub mod mutation;

pub use driver::{CaseOutcome, DriverError, MutationTestDriver};
pub use mutation::{Mutation, MutationConfig, mutations};
