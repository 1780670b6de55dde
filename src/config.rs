// Attack configuration. Every knob the reference procedure hard-codes is a
// field here, with the canonical values as defaults; a JSON file overrides
// any subset of them.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackConfig {
    /// Worker threads shared by every parallel region.
    pub threads: usize,
    /// Directory receiving parameters, polynomial systems and cube sums.
    pub results_dir: PathBuf,
    /// Shell command invoking the external algebraic solver; it runs inside
    /// `results_dir` and must leave a `recovered_a.txt` behind.
    pub solver_command: String,
    /// Cube-sum trials per phase-1 invocation.
    pub phase1_tries: u32,
    /// Phase-2 cube attempts before giving up on the remaining bits.
    pub phase2_max_tries: u32,
    /// Maximum phase-2 cube columns drawn from e = 0 positions.
    pub phase2_zero_budget: usize,
    /// Number of degree-31 cubes emitted by phase 3.
    pub phase3_cubes: usize,
    /// Maximum phase-3 cube columns drawn from e = 0 positions.
    pub phase3_zero_budget: usize,
}

impl Default for AttackConfig {
    fn default() -> Self {
        AttackConfig {
            threads: 8,
            results_dir: PathBuf::from("results"),
            solver_command: "zsh script.run".to_string(),
            phase1_tries: 10,
            phase2_max_tries: 15,
            phase2_zero_budget: 29,
            phase3_cubes: 3,
            phase3_zero_budget: 28,
        }
    }
}

impl AttackConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read configuration {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid configuration {}", path.display()))
    }
}
