//! DNA comparison — positional match percentage between two specimens

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which length the match percentage is measured against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonMode {
    /// Divide by the other specimen's strand length. Not symmetric when
    /// the two strands differ in length.
    #[default]
    Reference,
    /// Divide by the longer of the two strands, so `a ~ b == b ~ a`
    Symmetric,
}

/// Result of comparing two specimens position by position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnaMatch {
    pub specimen_id: u64,
    pub other_id: u64,
    /// Positions holding the same base
    pub matches: usize,
    /// Match share in percent, in [0, 100]
    pub percentage: f64,
}

impl DnaMatch {
    pub(crate) fn measure(
        specimen_id: u64,
        bases: &[super::Base],
        other_id: u64,
        other: &[super::Base],
        mode: ComparisonMode,
    ) -> Self {
        let matches = bases
            .iter()
            .zip(other.iter())
            .filter(|(a, b)| a == b)
            .count();
        let denominator = match mode {
            ComparisonMode::Reference => other.len(),
            ComparisonMode::Symmetric => bases.len().max(other.len()),
        };
        let percentage = if denominator == 0 {
            0.0
        } else {
            matches as f64 / denominator as f64 * 100.0
        };
        Self { specimen_id, other_id, matches, percentage }
    }
}

impl fmt::Display for DnaMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "There is a {:.2}% DNA match between specimen numbers {} and {}.",
            self.percentage, self.specimen_id, self.other_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dna::Base::{A, C, G, T};

    #[test]
    fn test_reference_denominator_uses_other_length() {
        let short = [A, C, G];
        let long = [A, C, G, T, T, T];
        let m = DnaMatch::measure(1, &short, 2, &long, ComparisonMode::Reference);
        assert_eq!(m.matches, 3);
        assert!((m.percentage - 50.0).abs() < 1e-9);

        let m = DnaMatch::measure(2, &long, 1, &short, ComparisonMode::Reference);
        assert!((m.percentage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric_denominator() {
        let short = [A, C, G];
        let long = [A, C, G, T, T, T];
        let ab = DnaMatch::measure(1, &short, 2, &long, ComparisonMode::Symmetric);
        let ba = DnaMatch::measure(2, &long, 1, &short, ComparisonMode::Symmetric);
        assert_eq!(ab.percentage, ba.percentage);
        assert!((ab.percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_format() {
        let m = DnaMatch { specimen_id: 3, other_id: 11, matches: 2, percentage: 200.0 / 3.0 };
        assert_eq!(
            m.to_string(),
            "There is a 66.67% DNA match between specimen numbers 3 and 11."
        );
    }
}
