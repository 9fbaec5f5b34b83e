//! DNA model — bases, strands and the specimens that carry them
//!
//! A specimen = sequential id + one fixed-length strand.
//! Every random draw goes through an injected `rand::Rng`.

mod base;
mod strand;
mod specimen;
mod comparison;

pub use base::{random_base, Base};
pub use strand::{generate_strand, Strand};
pub use specimen::{Specimen, SURVIVAL_THRESHOLD};
pub use comparison::{ComparisonMode, DnaMatch};
