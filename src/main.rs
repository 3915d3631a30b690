use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hospital_synth::{make_rng, Generator, Scale};

/// Generate a synthetic hospital dataset as tab-separated files that
/// can be bulk-imported into a relational database.
#[derive(Parser)]
#[command(name = "hospital_synth")]
struct Cli {
    /// Scale factor controlling all derived row counts
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    scale: Option<u32>,

    /// Seed for reproducible output; omit for a fresh dataset each run
    #[arg(long)]
    seed: Option<u64>,

    /// Directory to write the table files into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let scale = match cli.scale {
        Some(scale) => Scale::new(scale),
        None => Scale::default(),
    };
    let rng = match cli.seed {
        Some(seed) => make_rng(seed, "hospital_synth"),
        None => ChaCha8Rng::from_entropy(),
    };
    info!(seeded = cli.seed.is_some(), "generating dataset");

    let mut generator = Generator::new(scale, rng);
    generator.write_all(&cli.out_dir)?;

    Ok(())
}
