//! How inserts choose their destination layer

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Layer assignment policy for inserts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentPolicy {
    /// Cycle through the layers regardless of content; layer sizes never
    /// differ by more than one
    #[default]
    RoundRobin,
    /// Fill empty layers first, then join the layer with the closest centroid
    NearestCentroid,
}

impl AssignmentPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoundRobin => "round_robin",
            Self::NearestCentroid => "nearest_centroid",
        }
    }
}

impl fmt::Display for AssignmentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssignmentPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "round_robin" => Ok(Self::RoundRobin),
            "nearest_centroid" => Ok(Self::NearestCentroid),
            other => Err(DomainError::validation(format!(
                "Unknown assignment policy '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_round_robin() {
        assert_eq!(AssignmentPolicy::default(), AssignmentPolicy::RoundRobin);
    }

    #[test]
    fn test_parse_and_display() {
        for policy in [AssignmentPolicy::RoundRobin, AssignmentPolicy::NearestCentroid] {
            assert_eq!(policy.to_string().parse::<AssignmentPolicy>().unwrap(), policy);
        }

        assert!("closest".parse::<AssignmentPolicy>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&AssignmentPolicy::NearestCentroid).unwrap(),
            "\"nearest_centroid\""
        );
    }
}
