// External algebraic solver. The engine only emits polynomial systems and
// measurements; closing them is delegated to whatever tool the operator
// wires in, behind a capability whose sole contract is "consume the files,
// return recovered bits".

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("solver I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("solver command failed with {status}")]
    Failed { status: std::process::ExitStatus },
    #[error("solver produced no output file at {0}")]
    MissingOutput(PathBuf),
    #[error("unparseable solver output at line {line}: {text:?}")]
    BadLine { line: usize, text: String },
}

/// Recovered bit assignments keyed by column index.
pub type Assignments = BTreeMap<usize, bool>;

/// Anything able to close the emitted linear system.
pub trait Solver {
    /// Consumes the polynomial and cube-sum files in `workdir` and returns
    /// the recovered bits.
    fn solve(&self, workdir: &Path) -> Result<Assignments, SolverError>;
}

/// Subprocess adapter: runs a shell command inside the results directory and
/// reads back `recovered_a.txt`.
pub struct ShellSolver {
    pub command: String,
}

impl Solver for ShellSolver {
    fn solve(&self, workdir: &Path) -> Result<Assignments, SolverError> {
        let status = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .current_dir(workdir)
            .status()?;
        if !status.success() {
            return Err(SolverError::Failed { status });
        }
        let output = workdir.join("recovered_a.txt");
        if !output.exists() {
            return Err(SolverError::MissingOutput(output));
        }
        parse_recovered(&std::fs::read_to_string(&output)?)
    }
}

/// Parses solver output lines of the form `aI = V` with I in 0..=63 and V in
/// {0, 1}; blank lines are skipped.
pub fn parse_recovered(text: &str) -> Result<Assignments, SolverError> {
    let mut assignments = Assignments::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let parsed = line
            .strip_prefix('a')
            .and_then(|rest| rest.split_once('='))
            .and_then(|(column, value)| {
                let column: usize = column.trim().parse().ok()?;
                let value: u8 = value.trim().parse().ok()?;
                (column < 64 && value <= 1).then_some((column, value == 1))
            });
        match parsed {
            Some((column, value)) => {
                assignments.insert(column, value);
            }
            None => {
                return Err(SolverError::BadLine {
                    line: index + 1,
                    text: line.to_string(),
                })
            }
        }
    }
    Ok(assignments)
}
