//! Population builder — generate specimens until enough survive
//!
//! Every attempt consumes the next id, kept or not, so survivor ids are
//! unique and increasing but usually not contiguous. There is no cap on
//! attempts: the loop ends once the target count of survivors is reached.

use super::config::PopulationConfig;
use crate::dna::{generate_strand, ComparisonMode, DnaMatch, Specimen};
use crate::error::{DnaError, Result};
use log::{debug, info, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Survivors of a generation run, in discovery order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Population {
    specimens: Vec<Specimen>,
    /// Ids consumed, including discarded specimens
    attempts: u64,
}

impl Population {
    pub fn len(&self) -> usize {
        self.specimens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specimens.is_empty()
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn specimens(&self) -> &[Specimen] {
        &self.specimens
    }

    pub fn iter(&self) -> impl Iterator<Item = &Specimen> {
        self.specimens.iter()
    }

    pub fn get(&self, id: u64) -> Option<&Specimen> {
        self.specimens.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Specimen> {
        self.specimens.iter_mut().find(|s| s.id() == id)
    }

    pub fn into_specimens(self) -> Vec<Specimen> {
        self.specimens
    }

    pub fn mean_gc_content(&self) -> f64 {
        if self.specimens.is_empty() {
            return 0.0;
        }
        self.specimens.iter().map(|s| s.gc_content()).sum::<f64>() / self.specimens.len() as f64
    }

    /// Pair with the highest match percentage; the earlier pair wins ties
    pub fn most_related_pair(&self, mode: ComparisonMode) -> Option<DnaMatch> {
        let mut best: Option<DnaMatch> = None;
        for (i, a) in self.specimens.iter().enumerate() {
            for b in &self.specimens[i + 1..] {
                let m = a.compare_dna_with(b, mode);
                if best.as_ref().map_or(true, |current| m.percentage > current.percentage) {
                    best = Some(m);
                }
            }
        }
        best
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DnaError::Config(format!("serialize population: {}", e)))
    }

    pub fn summary(&self) -> String {
        let survival_rate = if self.attempts > 0 {
            self.specimens.len() as f64 / self.attempts as f64 * 100.0
        } else {
            0.0
        };
        format!(
            "Population | {} survivors | {} attempts | survival rate {:.1}% | mean gc {:.1}%",
            self.specimens.len(),
            self.attempts,
            survival_rate,
            self.mean_gc_content() * 100.0
        )
    }
}

/// Runs the keep-or-discard loop for a given configuration
#[derive(Debug, Clone, Default)]
pub struct PopulationBuilder {
    config: PopulationConfig,
}

impl PopulationBuilder {
    pub fn new(config: PopulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PopulationConfig {
        &self.config
    }

    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Population> {
        let target = self.config.target_population;
        let mut specimens = Vec::with_capacity(target);
        let mut next_id: u64 = 1;

        while specimens.len() < target {
            let strand = generate_strand(self.config.strand_length, rng)?;
            let specimen = Specimen::new(next_id, strand)?;
            next_id += 1;

            if specimen.survives_with(self.config.survival_threshold) {
                debug!("Kept {}", specimen.summary());
                specimens.push(specimen);
            } else {
                trace!("Discarded specimen #{}", specimen.id());
            }
        }

        let population = Population {
            specimens,
            attempts: next_id - 1,
        };
        info!("{}", population.summary());
        Ok(population)
    }
}

/// Generate specimens of `strand_length` bases until `target_count` of
/// them are likely to survive.
pub fn build_surviving_population<R: Rng + ?Sized>(
    target_count: usize,
    strand_length: usize,
    rng: &mut R,
) -> Result<Population> {
    PopulationBuilder::new(PopulationConfig::new(target_count, strand_length))?.build(rng)
}
