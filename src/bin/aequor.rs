//! aequor CLI — generate, compare and inspect mock DNA specimens
//!
//! Commands:
//!   aequor populate     — build a population of likely survivors and dump it
//!   aequor compare      — report pairwise DNA matches within a population
//!   aequor inspect      — complement, GC content and a mutation of one strand
//!   aequor demo         — walk every specimen operation on a seeded run
//!   aequor init-config  — write a default config file

use aequor_core::dna::{ComparisonMode, Specimen, Strand};
use aequor_core::population::{PopulationBuilder, PopulationConfig};
use aequor_core::Result;
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = "aequor.json";

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate and filter mock DNA specimens", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a population of likely survivors and dump it
    Populate {
        #[command(flatten)]
        run: RunArgs,
        /// Dump the population as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Report DNA matches between specimens of a population
    Compare {
        #[command(flatten)]
        run: RunArgs,
        /// Measure against the longer strand instead of the other specimen's
        #[arg(long)]
        symmetric: bool,
    },
    /// Show complement, GC content, survival and a mutation of one strand
    Inspect {
        /// Strand to inspect, e.g. ATCGGCTA
        strand: String,
        /// RNG seed for the mutation
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Run every specimen operation on a small seeded population
    Demo,
    /// Write a default config file
    InitConfig {
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Bases per strand
    #[arg(short, long)]
    length: Option<usize>,
    /// Survivors to collect
    #[arg(short, long)]
    target: Option<usize>,
    /// Minimum C/G share for survival, in (0, 1]
    #[arg(long)]
    threshold: Option<f64>,
    /// RNG seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,
}

impl RunArgs {
    fn resolve(&self) -> Result<PopulationConfig> {
        let mut config = match &self.config {
            Some(path) => PopulationConfig::load(path)?,
            None => PopulationConfig::default(),
        };
        if let Some(length) = self.length {
            config.strand_length = length;
        }
        if let Some(target) = self.target {
            config.target_population = target;
        }
        if let Some(threshold) = self.threshold {
            config.survival_threshold = threshold;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!("Using RNG seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Populate { run, json } => cmd_populate(&run, json),
        Command::Compare { run, symmetric } => cmd_compare(&run, symmetric),
        Command::Inspect { strand, seed } => cmd_inspect(&strand, seed),
        Command::Demo => cmd_demo(),
        Command::InitConfig { path } => PopulationConfig::default().save(&path),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn cmd_populate(run: &RunArgs, json: bool) -> Result<()> {
    let config = run.resolve()?;
    let mut rng = make_rng(config.seed);
    let population = PopulationBuilder::new(config)?.build(&mut rng)?;

    if json {
        println!("{}", population.to_json()?);
        return Ok(());
    }

    println!("\n  Surviving specimens ({}):", population.len());
    println!("  {}", "-".repeat(60));
    for specimen in population.iter() {
        println!("  {}", specimen.summary());
    }
    println!("\n  {}", population.summary());
    Ok(())
}

fn cmd_compare(run: &RunArgs, symmetric: bool) -> Result<()> {
    let mut config = run.resolve()?;
    if symmetric {
        config.comparison = ComparisonMode::Symmetric;
    }
    let mode = config.comparison;
    let mut rng = make_rng(config.seed);
    let population = PopulationBuilder::new(config)?.build(&mut rng)?;

    println!("\n  Neighbouring specimens:");
    println!("  {}", "-".repeat(60));
    for pair in population.specimens().windows(2) {
        println!("  {}", pair[0].compare_dna_with(&pair[1], mode));
    }

    if let Some(best) = population.most_related_pair(mode) {
        println!("\n  Most related pair:");
        println!("  {}", best);
    }
    Ok(())
}

fn cmd_inspect(input: &str, seed: Option<u64>) -> Result<()> {
    let strand: Strand = input.parse()?;
    let mut specimen = Specimen::new(1, strand)?;
    let original = specimen.clone();

    println!("\n  {}", specimen.summary());
    println!("  Complement:  {}", specimen.complement_strand());

    let mut rng = make_rng(seed);
    let mutated = specimen.mutate(&mut rng).clone();
    println!("  Mutated:     {}", mutated);
    println!("  {}", specimen.compare_dna(&original));
    Ok(())
}

fn cmd_demo() -> Result<()> {
    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║        aequor — mock DNA specimen walkthrough                ║
╚══════════════════════════════════════════════════════════════╝
"#
    );

    let config = PopulationConfig {
        seed: Some(2024),
        ..PopulationConfig::new(5, 15)
    };
    let mut rng = make_rng(config.seed);

    // Step 1: Population
    println!("Step 1: Building {} likely survivors...", config.target_population);
    println!("{}", "-".repeat(60));
    let mut population = PopulationBuilder::new(config)?.build(&mut rng)?;
    for specimen in population.iter() {
        println!("  {}", specimen.summary());
    }

    // Step 2: Complement
    println!("\nStep 2: Complementary strands...");
    println!("{}", "-".repeat(60));
    for specimen in population.iter() {
        println!(
            "  #{:<4} {} -> {}",
            specimen.id(),
            specimen.strand(),
            specimen.complement_strand()
        );
    }

    // Step 3: Compare
    println!("\nStep 3: Comparing the first specimen with the rest...");
    println!("{}", "-".repeat(60));
    if let Some((first, rest)) = population.specimens().split_first() {
        for other in rest {
            println!("  {}", first.compare_dna(other));
        }
    }

    // Step 4: Mutate
    println!("\nStep 4: Mutating the first specimen...");
    println!("{}", "-".repeat(60));
    let first_id = population.specimens()[0].id();
    if let Some(specimen) = population.get_mut(first_id) {
        let before = specimen.clone();
        let after = specimen.mutate(&mut rng).clone();
        println!("  before: {}", before.strand());
        println!("  after:  {}", after);
        println!("  {}", specimen.compare_dna(&before));
        println!("  still viable: {}", specimen.will_likely_survive());
    }

    // Step 5: Summary
    println!("\nStep 5: Summary");
    println!("{}", "-".repeat(60));
    println!("  {}", population.summary());
    if let Some(best) = population.most_related_pair(ComparisonMode::Reference) {
        println!("  Most related: {}", best);
    }
    Ok(())
}
