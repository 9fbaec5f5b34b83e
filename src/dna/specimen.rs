//! Specimen — an identified individual carrying one strand
//!
//! All behaviours act on the specimen's own strand. Only `mutate` changes
//! it, and only one position at a time, so the strand length is fixed for
//! the specimen's lifetime.

use super::base::random_base;
use super::comparison::{ComparisonMode, DnaMatch};
use super::strand::Strand;
use crate::error::{DnaError, Result};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Share of C/G bases a specimen needs to be considered viable
pub const SURVIVAL_THRESHOLD: f64 = 0.6;

/// Absorbs float rounding at the exact threshold (e.g. 9 of 15 bases)
const THRESHOLD_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specimen {
    id: u64,
    strand: Strand,
}

impl Specimen {
    /// Wrap a strand under a positive id
    pub fn new(id: u64, strand: Strand) -> Result<Self> {
        if id == 0 {
            return Err(DnaError::InvalidArgument(
                "specimen ids start at 1".into(),
            ));
        }
        Ok(Self { id, strand })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn strand(&self) -> &Strand {
        &self.strand
    }

    pub fn into_strand(self) -> Strand {
        self.strand
    }

    /// Replace one base with a different one and return the mutated strand.
    ///
    /// The position is drawn from `[0, len - 1)`: the final base is never
    /// mutated. A single-base strand mutates its only position.
    pub fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Strand {
        let upper = self.strand.len().saturating_sub(1).max(1);
        let index = rng.gen_range(0..upper);
        let current = self.strand.bases()[index];
        let mut replacement = random_base(rng);
        while replacement == current {
            replacement = random_base(rng);
        }
        self.strand.replace(index, replacement);
        debug!(
            "Specimen {} mutated at {}: {} -> {}",
            self.id, index, current, replacement
        );
        &self.strand
    }

    /// Match percentage against `other`, measured over `other`'s length
    pub fn compare_dna(&self, other: &Specimen) -> DnaMatch {
        self.compare_dna_with(other, ComparisonMode::Reference)
    }

    pub fn compare_dna_with(&self, other: &Specimen, mode: ComparisonMode) -> DnaMatch {
        DnaMatch::measure(
            self.id,
            self.strand.bases(),
            other.id,
            other.strand.bases(),
            mode,
        )
    }

    /// True when at least 60% of the bases are C or G
    pub fn will_likely_survive(&self) -> bool {
        self.survives_with(SURVIVAL_THRESHOLD)
    }

    pub fn survives_with(&self, threshold: f64) -> bool {
        self.strand.gc_content() + THRESHOLD_EPSILON >= threshold
    }

    /// Complementary strand; the specimen itself is untouched
    pub fn complement_strand(&self) -> Strand {
        self.strand.complement()
    }

    pub fn gc_content(&self) -> f64 {
        self.strand.gc_content()
    }

    pub fn summary(&self) -> String {
        format!(
            "Specimen #{} | {} | gc={:.1}% | viable={}",
            self.id,
            self.strand,
            self.gc_content() * 100.0,
            self.will_likely_survive()
        )
    }
}
