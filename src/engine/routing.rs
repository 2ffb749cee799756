//! Contract routing
//!
//! Picks which contract file gates a change, from the changed-path evidence
//! alone. One implementation shared by the CLI and CI wrappers, so local
//! runs and pipelines can never disagree about which contract applies.

use crate::engine::boundary::prefix_match;

/// Routing configuration: surface prefixes and the contract each routes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePolicy {
    /// Prefixes owned by repository maintenance work; checked first
    pub maintenance_surface: Vec<String>,
    /// Contract gating maintenance changes
    pub maintenance_contract: String,
    /// Contract gating artifact-only and documentation-only changes
    pub demo_contract: String,
    /// Contract gating everything else
    pub default_contract: String,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self {
            maintenance_surface: [
                "README.md",
                "docs/",
                "scripts/",
                ".github/workflows/",
                "src/",
                "contracts/",
                "tests/",
                "Cargo.toml",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            maintenance_contract: "decisions/contracts/DC-REPO-001.yaml".to_string(),
            demo_contract: "decisions/contracts/DC-INSTALL-DEMO-001.yaml".to_string(),
            default_contract: "decisions/contracts/DC-2026-001.yaml".to_string(),
        }
    }
}

impl RoutePolicy {
    /// Select the contract that gates this changed-path set
    ///
    /// A maintenance-surface hit wins outright; otherwise a change confined
    /// to documentation and artifacts routes to the demo contract, and
    /// everything else (including an empty change set) to the default.
    pub fn route(&self, changed_paths: &[String]) -> &str {
        if changed_paths
            .iter()
            .any(|path| prefix_match(path, &self.maintenance_surface))
        {
            return &self.maintenance_contract;
        }

        let passive_surfaces = ["docs/", "artifacts/"];
        if !changed_paths.is_empty()
            && changed_paths
                .iter()
                .all(|path| prefix_match(path, &passive_surfaces))
        {
            return &self.demo_contract;
        }

        &self.default_contract
    }
}
