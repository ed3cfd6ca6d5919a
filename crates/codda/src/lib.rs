//! Drafting support for Character of Discharge decisions: a library of pre-approved
//! decision language and heuristics scoring how complete a draft is.

pub mod config;
pub mod error;
pub mod language;
pub mod scoring;
pub mod telemetry;
pub mod workspace;
