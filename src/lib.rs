//! aequor — mock DNA specimens
//!
//! Generates random DNA strands, wraps them in numbered specimens, and
//! keeps the ones rich enough in C/G bases to likely survive.

pub mod dna;
pub mod error;
pub mod population;

pub use dna::{Base, ComparisonMode, DnaMatch, Specimen, Strand};
pub use error::{DnaError, Result};
pub use population::{build_surviving_population, Population, PopulationBuilder, PopulationConfig};
