//! Type aliases and common types.

use nalgebra::SVector;
use serde::{Deserialize, Serialize};

/// 9-dimensional vector of decile values.
pub type Vector9 = SVector<f64, 9>;

/// Side of a decision threshold that counts as accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Accept values greater than or equal to the threshold.
    #[default]
    Above,
    /// Accept values less than or equal to the threshold.
    Below,
}

impl Direction {
    /// Lowercase name used in CSV exports and status lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Above => "above",
            Direction::Below => "below",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
