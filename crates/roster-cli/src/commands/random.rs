//! Random command
//!
//! Usage: roster random [--count <N>] [--seed <SEED>] [--json]

use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use roster_core::{log_op_end, log_op_error, log_op_start, Person, PersonList};

#[derive(Debug, Args)]
pub struct RandomArgs {
    /// Number of persons to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Seed for deterministic output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print the persons as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Execute random command
pub fn execute(args: RandomArgs) -> Result<(), Box<dyn std::error::Error>> {
    log_op_start!("random_generate", count = args.count, seed = ?args.seed);
    let start = std::time::Instant::now();

    let result = match args.seed {
        Some(seed) => generate(&mut ChaCha8Rng::seed_from_u64(seed), args.count),
        None => generate(&mut rand::rng(), args.count),
    };
    let persons = result.map_err(|e| {
        log_op_error!(
            "random_generate",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "random_generate",
        duration_ms = start.elapsed().as_millis() as u64,
        list_len = persons.count()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&persons)?);
    } else {
        print!("{}", persons);
    }

    Ok(())
}

fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> roster_core::Result<PersonList> {
    (0..count).map(|_| Person::random(rng)).collect()
}
