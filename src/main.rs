//! Command-line driver for the cube attack.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use ascon_cube_attack::constants::{
    ATTACK_ROUNDS, PHASE2_CUBE_SIZE, PHASE2_DEGREES, PHASE3_CUBE_SIZE, PHASE3_DEGREES,
};
use ascon_cube_attack::cube::random_word;
use ascon_cube_attack::phases::{self, RecoveryContext};
use ascon_cube_attack::trails::{PAIR_PRODUCTS, TRAILS};
use ascon_cube_attack::{AttackConfig, ShellSolver};

#[derive(Parser)]
#[command(
    name = "cube-attack",
    about = "Cube attack against the 6-round nonce-misused ASCON permutation",
    version,
    long_about = r#"Recovers the secret capacity rows of a 6-round ASCON permutation under
nonce misuse, by matching measured cube sums against symbolically computed
coefficients of high-degree monomials.

Phase 1 checks the distinguishing property of the two published cubes.
Phase 2 recovers the open bits of row 1 through an external solver loop.
Phase 3 emits the degree-31 systems that pin down rows 2 and 3."#
)]
struct Cli {
    /// Optional JSON configuration file; missing fields keep their defaults.
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run cube-sum verification trials over one of the published cubes
    Phase1 {
        /// Header for the per-trial result files
        header: String,

        /// Cube selector: 0 for the first published cube, anything else for
        /// the second
        cube: u32,
    },

    /// Recover coefficients of degree-32 monomials and close open row-1 bits
    Phase2,

    /// Emit the degree-31 polynomial systems for fresh cubes
    Phase3 {
        /// Compute all 64 columns in parallel (larger memory footprint)
        #[arg(long)]
        parallel_columns: bool,
    },

    /// Recompute the cube-sum vectors for an existing parameters file
    CubeSums {
        /// Attack phase the parameters belong to
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=3))]
        phase: u8,
    },

    /// Print the fixed attack parameters
    Info,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AttackConfig::load(path)?,
        None => AttackConfig::default(),
    };
    rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build_global()
        .context("initialising the worker pool")?;
    let mut rng = rand::thread_rng();

    match cli.command {
        Commands::Phase1 { header, cube } => {
            phases::phase1::run(&config, &header, cube, &mut rng)?;
        }
        Commands::Phase2 => {
            let context = RecoveryContext::sample(&mut rng);
            println!("sampled a = {:016x}, e = {:016x}", context.a, context.e);
            let solver = ShellSolver {
                command: config.solver_command.clone(),
            };
            let outcome = phases::phase2::run(&config, &solver, context, &mut rng)?;
            if outcome.context.is_complete() {
                println!("all open a-bits recovered after {} tries", outcome.tries);
            } else {
                println!(
                    "stopped after {} tries with {} bits still open",
                    outcome.tries,
                    outcome.context.unknown_count()
                );
            }
        }
        Commands::Phase3 { parallel_columns } => {
            let a = random_word(&mut rng);
            let e = random_word(&mut rng);
            println!("sampled a = {a:016x}, e = {e:016x}");
            phases::phase3::run(&config, a, e, parallel_columns, &mut rng)?;
        }
        Commands::CubeSums { phase } => match phase {
            2 => phases::values::phase2_cube_sums(&config.results_dir, &mut rng)?,
            _ => phases::values::phase3_cube_sums(&config.results_dir, &mut rng)?,
        },
        Commands::Info => show_info(&config),
    }
    Ok(())
}

fn show_info(config: &AttackConfig) {
    println!("Cube attack against nonce-misused ASCON");
    println!("=======================================");
    println!();
    println!("Permutation rounds:        {ATTACK_ROUNDS}");
    println!("Phase-2 cube size:         {PHASE2_CUBE_SIZE}");
    println!("Phase-3 cube size:         {PHASE3_CUBE_SIZE}");
    println!(
        "Phase-2 degree schedule:   {:?} / {:?} / {:?}",
        PHASE2_DEGREES.round2, PHASE2_DEGREES.round3, PHASE2_DEGREES.round4
    );
    println!(
        "Phase-3 degree schedule:   {:?} / {:?} / {:?}",
        PHASE3_DEGREES.round2, PHASE3_DEGREES.round3, PHASE3_DEGREES.round4
    );
    println!("Catalogued pair-products:  {}", PAIR_PRODUCTS.len());
    println!("Catalogued trails:         {}", TRAILS.len());
    println!();
    println!("Worker threads:            {}", config.threads);
    println!("Results directory:         {}", config.results_dir.display());
    println!("Solver command:            {}", config.solver_command);
}
