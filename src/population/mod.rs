//! Population — build a set of specimens that pass the survival filter

mod builder;
mod config;

pub use builder::{build_surviving_population, Population, PopulationBuilder};
pub use config::{PopulationConfig, DEFAULT_STRAND_LENGTH, DEFAULT_TARGET_POPULATION};
