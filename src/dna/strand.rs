//! Strand — a fixed-length sequence of bases
//!
//! A strand never changes length once built. Content changes only through
//! single-position replacement, which is how specimens mutate.

use super::base::{random_base, Base};
use crate::error::{DnaError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered, non-empty sequence of bases
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Strand {
    bases: Vec<Base>,
}

impl Strand {
    pub fn new(bases: Vec<Base>) -> Result<Self> {
        if bases.is_empty() {
            return Err(DnaError::InvalidArgument(
                "a strand needs at least one base".into(),
            ));
        }
        Ok(Self { bases })
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Always false for a constructed strand
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    pub fn get(&self, index: usize) -> Option<Base> {
        self.bases.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Base> + '_ {
        self.bases.iter().copied()
    }

    /// Swap the base at `index`, returning the previous one.
    /// Panics if `index` is out of range, like slice indexing.
    pub(crate) fn replace(&mut self, index: usize, base: Base) -> Base {
        std::mem::replace(&mut self.bases[index], base)
    }

    /// New strand with every base paired to its complement
    pub fn complement(&self) -> Strand {
        Strand {
            bases: self.bases.iter().map(|b| b.complement()).collect(),
        }
    }

    /// Number of C or G bases
    pub fn gc_count(&self) -> usize {
        self.bases.iter().filter(|b| b.is_strong()).count()
    }

    /// Fraction of C or G bases, in [0, 1]
    pub fn gc_content(&self) -> f64 {
        self.gc_count() as f64 / self.len() as f64
    }
}

impl FromStr for Strand {
    type Err = DnaError;

    fn from_str(s: &str) -> Result<Self> {
        let bases = s
            .trim()
            .chars()
            .map(Base::try_from)
            .collect::<Result<Vec<_>>>()?;
        Strand::new(bases)
    }
}

impl TryFrom<String> for Strand {
    type Error = DnaError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Strand> for String {
    fn from(strand: Strand) -> Self {
        strand.to_string()
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.bases {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}

/// Generate a strand of `length` independently drawn bases
pub fn generate_strand<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<Strand> {
    if length == 0 {
        return Err(DnaError::InvalidArgument(
            "strand length must be positive".into(),
        ));
    }
    Strand::new((0..length).map(|_| random_base(rng)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_strand_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(1);
        for length in [1, 2, 15, 100] {
            let strand = generate_strand(length, &mut rng).unwrap();
            assert_eq!(strand.len(), length);
            assert!(strand.iter().all(|b| Base::ALL.contains(&b)));
            assert!(strand
                .to_string()
                .chars()
                .all(|c| matches!(c, 'A' | 'T' | 'C' | 'G')));
        }
    }

    #[test]
    fn test_generate_zero_length_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate_strand(0, &mut rng);
        assert!(matches!(result, Err(DnaError::InvalidArgument(_))));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_strand(15, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_strand(15, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);

        let c = generate_strand(15, &mut StdRng::seed_from_u64(43)).unwrap();
        // collision odds between distinct seeds are 4^-15
        assert_ne!(a, c);
    }

    #[test]
    fn test_complement_involution() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let strand = generate_strand(15, &mut rng).unwrap();
            let complement = strand.complement();
            assert_eq!(complement.len(), strand.len());
            assert_eq!(complement.complement(), strand);
        }
        let fixed: Strand = "ATCGGA".parse().unwrap();
        assert_eq!(fixed.complement().to_string(), "TAGCCT");
    }

    #[test]
    fn test_parse_and_display() {
        let strand: Strand = "atcg".parse().unwrap();
        assert_eq!(strand.to_string(), "ATCG");
        assert!(matches!("ATXG".parse::<Strand>(), Err(DnaError::InvalidBase('X'))));
        assert!(matches!("".parse::<Strand>(), Err(DnaError::InvalidArgument(_))));
    }

    #[test]
    fn test_gc_content() {
        let strand: Strand = "CCGGAT".parse().unwrap();
        assert_eq!(strand.gc_count(), 4);
        assert!((strand.gc_content() - 4.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_serde_as_string() {
        let strand: Strand = "GATTACA".parse().unwrap();
        let json = serde_json::to_string(&strand).unwrap();
        assert_eq!(json, "\"GATTACA\"");
        let back: Strand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, strand);
        assert!(serde_json::from_str::<Strand>("\"GATXACA\"").is_err());
    }
}
