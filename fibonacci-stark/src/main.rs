//! CLI driver: samples a secret witness `x1`, proves the square-Fibonacci
//! statement, and writes the resulting proof log to disk. An example
//! caller of the statement-agnostic prover core, not part of it (§1).

mod error;
mod statement;
#[cfg(test)]
mod tests;

use std::fs;
use std::process::ExitCode;

use arithmetization::Statement as _;
use clap::Parser;
use field::Fp;
use rand::SeedableRng;

use error::AppError;
use statement::FibonacciStatement;

/// Proves knowledge of a square-Fibonacci witness.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Number of recurrence steps, 1 <= trace_length < 1024.
    #[arg(long, default_value_t = 1022, value_parser = clap::value_parser!(u64).range(1..(domain::TRACE_DOMAIN_SIZE as i64)))]
    trace_length: u64,

    /// Seed for the witness RNG; omit for an OS-random witness.
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the proof log.
    #[arg(long, default_value = "proof.txt")]
    output: String,

    /// Emit per-step progress logging (STEP 1.., STEP 2..).
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let mut rng = match cli.seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_entropy(),
    };
    let witness_x1 = Fp::random_element(&mut rng);

    log::info!(
        "STEP 1: WITNESS: sampled secret x1 (trace_length = {})",
        cli.trace_length
    );
    let trace_length = cli.trace_length as usize;
    let statement = FibonacciStatement::new(witness_x1, trace_length);
    log::info!("         public output y = {}", statement.public_output());

    let mut transcript = transcript::Transcript::new();

    log::info!("STEP 2: ARITHMETIZATION: interpolating trace, building constraint quotients");
    let arith = arithmetization::arithmetize(&statement, &mut transcript)?;
    log::debug!(
        "         composition polynomial degree = {:?}",
        arith.composition_poly.degree()
    );

    log::info!("STEP 3: FRI: commit phase (fold + Merkle-commit each layer)");
    let layers = fri::prove(
        arith.composition_poly,
        arith.fri_domain,
        &mut transcript,
    )?;
    log::info!(
        "         committed {} layers, final layer has {} elements",
        layers.len(),
        layers.last().map(|l| l.codeword.len()).unwrap_or(0)
    );

    log::info!("STEP 4: DECOMMIT: {} queries recorded", fri::QUERIES_NUM);
    log::info!("STEP 5: WRITING PROOF: {} log entries to {}", transcript.proof_log().len(), cli.output);

    let proof_text = transcript.into_proof_log().join("\n");
    fs::write(&cli.output, proof_text).map_err(|source| AppError::ProofWrite {
        path: cli.output.clone(),
        source,
    })?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
