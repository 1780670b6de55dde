// Cube-sum verification trials. For random inner states, the cube sum of
// the published cubes is measured and the result files are partitioned by
// the leading bits of a and e; the distinguishing property shows up as one
// partition collecting only all-zero sums.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::Rng;

use crate::config::AttackConfig;
use crate::constants::{ATTACK_ROUNDS, PHASE1_CUBE_V, PHASE1_CUBE_W};
use crate::cube::{random_word, Cube};
use crate::cube_sum::cube_sum;

/// Runs `config.phase1_tries` trials for the selected cube (0 picks the
/// first published cube, anything else the second) and appends each sum to
/// `results_dir/{header}_cube_{selector}_a_{a}_e_{e}.txt`.
pub fn run(config: &AttackConfig, header: &str, cube_selector: u32, rng: &mut impl Rng) -> Result<()> {
    let cube = if cube_selector == 0 {
        Cube::new(PHASE1_CUBE_V.to_vec())
    } else {
        Cube::new(PHASE1_CUBE_W.to_vec())
    };
    fs::create_dir_all(&config.results_dir).with_context(|| {
        format!("cannot create results directory {}", config.results_dir.display())
    })?;

    for trial in 0..config.phase1_tries {
        let started = Instant::now();
        let mut state = [0u64; 5];
        for row in state.iter_mut().skip(1) {
            *row = random_word(rng);
        }
        let a = state[1] >> 63;
        let e = !(state[3] ^ state[4]) >> 63;

        // The last linear layer is invertible, so it is skipped; constants
        // stay on because phase 1 measures the real permutation.
        cube_sum(&mut state, ATTACK_ROUNDS, &cube, false, true);

        let path = config
            .results_dir
            .join(format!("{header}_cube_{cube_selector}_a_{a}_e_{e}.txt"));
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("cannot open {}", path.display()))?;
        writeln!(file, "{:016x}", state[0])?;

        println!(
            "trial {trial}: a = {a}, e = {e}, weight {} in {:.1?}",
            state[0].count_ones(),
            started.elapsed()
        );
    }
    Ok(())
}
