use std::fmt;
use std::str::FromStr;

use distill_core::errors::EnsembleError;
use serde::{Deserialize, Serialize};

/// Ensemble aggregation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationMethod {
    MajorityVote,
    BordaCount,
    #[serde(alias = "pairwise_preference")]
    Condorcet,
}

impl AggregationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MajorityVote => "majority_vote",
            Self::BordaCount => "borda_count",
            Self::Condorcet => "condorcet",
        }
    }
}

impl fmt::Display for AggregationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregationMethod {
    type Err = EnsembleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "majority_vote" | "majority" => Ok(Self::MajorityVote),
            "borda_count" | "borda" => Ok(Self::BordaCount),
            "condorcet" | "pairwise_preference" | "pairwise" => Ok(Self::Condorcet),
            _ => Err(EnsembleError::UnknownMethod {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("majority_vote".parse(), Ok(AggregationMethod::MajorityVote));
        assert_eq!("Borda_Count".parse(), Ok(AggregationMethod::BordaCount));
        assert_eq!(
            "pairwise_preference".parse(),
            Ok(AggregationMethod::Condorcet)
        );
        assert_eq!(
            "ranked_choice".parse::<AggregationMethod>(),
            Err(EnsembleError::UnknownMethod {
                name: "ranked_choice".to_string()
            })
        );
    }

    #[test]
    fn display_round_trips() {
        for m in [
            AggregationMethod::MajorityVote,
            AggregationMethod::BordaCount,
            AggregationMethod::Condorcet,
        ] {
            assert_eq!(m.to_string().parse::<AggregationMethod>(), Ok(m));
        }
    }
}
