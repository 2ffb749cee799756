//! Admissibility evaluation engine
//!
//! The pipeline runs schema validation, the falsifiability heuristic, the
//! alternatives check, changed-path discovery, and boundary evaluation, and
//! folds everything into a single [`AdmissibilityResult`]. Debt scoring and
//! contract routing live alongside it as corpus-level passes.

pub mod boundary;
pub mod debt;
pub mod diff;
pub mod evaluator;
pub mod routing;
pub mod types;

pub use boundary::{evaluate_boundaries, prefix_match, BoundaryEvaluation, IMPLICIT_ALLOW_PREFIXES};
pub use debt::{
    compute_debt_report, score_contract, ContractDebt, DebtReport, DriftStatus, PortfolioSummary,
};
pub use diff::{collect_changed_paths, CiContext};
pub use evaluator::{criteria_falsifiable, Evaluator};
pub use routing::RoutePolicy;
pub use types::{AdmissibilityResult, CheckResult, CheckStatus, RESULT_SCHEMA_VERSION};
