//! Case drafting workspace: stored decision drafts, template insertion, and the
//! assessment recomputed after every edit.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{CaseAssessment, CaseDocument, CaseId, NewCase};
pub use repository::{CaseRepository, RepositoryError};
pub use router::workspace_router;
pub use service::{CaseServiceError, CaseWorkspaceService};
