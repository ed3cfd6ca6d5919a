use super::domain::{CaseDocument, CaseId};

/// Storage abstraction so the workspace service can run against any case store.
pub trait CaseRepository: Send + Sync {
    fn insert(&self, case: CaseDocument) -> Result<CaseDocument, RepositoryError>;
    /// Replace a stored case, but only while its stored revision still equals
    /// `expected_revision`. A mismatch means another edit landed first.
    fn update(&self, case: CaseDocument, expected_revision: u32) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &CaseId) -> Result<Option<CaseDocument>, RepositoryError>;
    fn list(&self) -> Result<Vec<CaseDocument>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("case already exists")]
    Conflict,
    #[error("case was revised concurrently: expected revision {expected}, found {found}")]
    StaleRevision { expected: u32, found: u32 },
    #[error("case not found")]
    NotFound,
    #[error("case store unavailable: {0}")]
    Unavailable(String),
}
