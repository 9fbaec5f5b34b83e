//! Base — one symbol of the DNA alphabet
//!
//! Bases are drawn uniformly from {A, T, C, G} and pair with their
//! Watson–Crick complement (A↔T, C↔G).

use crate::error::{DnaError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single nucleotide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base {
    A,
    T,
    C,
    G,
}

impl Base {
    /// The full alphabet, in draw order
    pub const ALL: [Base; 4] = [Base::A, Base::T, Base::C, Base::G];

    /// Watson–Crick partner of this base
    pub fn complement(self) -> Base {
        match self {
            Base::A => Base::T,
            Base::T => Base::A,
            Base::C => Base::G,
            Base::G => Base::C,
        }
    }

    /// C and G count toward survivability
    pub fn is_strong(self) -> bool {
        matches!(self, Base::C | Base::G)
    }

    pub fn symbol(self) -> char {
        match self {
            Base::A => 'A',
            Base::T => 'T',
            Base::C => 'C',
            Base::G => 'G',
        }
    }
}

impl TryFrom<char> for Base {
    type Error = DnaError;

    fn try_from(symbol: char) -> Result<Self> {
        match symbol.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'T' => Ok(Base::T),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            other => Err(DnaError::InvalidBase(other)),
        }
    }
}

impl FromStr for Base {
    type Err = DnaError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Base::try_from(c),
            _ => Err(DnaError::InvalidArgument(format!(
                "expected a single base symbol, got {:?}",
                s
            ))),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Draw one base with uniform probability
pub fn random_base<R: Rng + ?Sized>(rng: &mut R) -> Base {
    Base::ALL[rng.gen_range(0..Base::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_complement_pairs() {
        assert_eq!(Base::A.complement(), Base::T);
        assert_eq!(Base::T.complement(), Base::A);
        assert_eq!(Base::C.complement(), Base::G);
        assert_eq!(Base::G.complement(), Base::C);
        for base in Base::ALL {
            assert_eq!(base.complement().complement(), base);
        }
    }

    #[test]
    fn test_strong_bases() {
        assert!(Base::C.is_strong());
        assert!(Base::G.is_strong());
        assert!(!Base::A.is_strong());
        assert!(!Base::T.is_strong());
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!(Base::try_from('a').unwrap(), Base::A);
        assert_eq!("G".parse::<Base>().unwrap(), Base::G);
        assert!(matches!(Base::try_from('N'), Err(DnaError::InvalidBase('N'))));
        assert!("GC".parse::<Base>().is_err());
        assert!("".parse::<Base>().is_err());
    }

    #[test]
    fn test_random_base_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts: HashMap<Base, usize> = HashMap::new();
        for _ in 0..4000 {
            *counts.entry(random_base(&mut rng)).or_default() += 1;
        }
        assert_eq!(counts.len(), 4);
        for base in Base::ALL {
            let n = counts[&base];
            assert!(n > 800 && n < 1200, "{} drawn {} times", base, n);
        }
    }
}
