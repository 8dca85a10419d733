//! Core business logic - framework-agnostic workflow operations.
//!
//! Everything in here is presentation-neutral: a dashboard, a CLI, or a bot
//! layer can call these functions and format the structured results itself.

/// Submission, approval, and annual field configuration workflow
pub mod approval;
/// Unit normalization to a category's canonical unit
pub mod normalize;
/// Reporting period as a tagged annual/monthly variant
pub mod period;
/// Year-over-year plausibility heuristic for reviewers
pub mod plausibility;
/// Record filtering and role-scoped queries
pub mod query;
/// Aggregation, totals, and capacity reference values
pub mod report;
/// Actors, roles, and capability predicates
pub mod role;
