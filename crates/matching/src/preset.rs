//! Named weighting presets.
//!
//! Presets are a closed enum: an unknown name fails to parse instead of silently
//! falling back to the default weights.

use crate::MatchingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One weight per match factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    pub proximity: f64,
    pub dietary: f64,
    pub category: f64,
    pub activity: f64,
    pub reputation: f64,
    pub response_time: f64,
}

impl FactorWeights {
    /// Weights in factor order: proximity, dietary, category, activity,
    /// reputation, response time.
    pub const fn as_array(&self) -> [f64; 6] {
        [
            self.proximity,
            self.dietary,
            self.category,
            self.activity,
            self.reputation,
            self.response_time,
        ]
    }

    /// Sum of all six weights.
    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

/// Named weighting scheme for match scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CriteriaPreset {
    /// Balanced weighting
    #[default]
    Default,
    /// Favors nearby, quick-to-respond sharers for pickups
    FoodPickup,
    /// Favors dietary compatibility above everything else
    DietaryFocused,
    /// Favors active, well-rated community members
    Community,
}

const DEFAULT_WEIGHTS: FactorWeights = FactorWeights {
    proximity: 0.25,
    dietary: 0.20,
    category: 0.20,
    activity: 0.10,
    reputation: 0.15,
    response_time: 0.10,
};

const FOOD_PICKUP_WEIGHTS: FactorWeights = FactorWeights {
    proximity: 0.40,
    dietary: 0.15,
    category: 0.15,
    activity: 0.05,
    reputation: 0.10,
    response_time: 0.15,
};

const DIETARY_FOCUSED_WEIGHTS: FactorWeights = FactorWeights {
    proximity: 0.15,
    dietary: 0.45,
    category: 0.15,
    activity: 0.05,
    reputation: 0.10,
    response_time: 0.10,
};

const COMMUNITY_WEIGHTS: FactorWeights = FactorWeights {
    proximity: 0.15,
    dietary: 0.10,
    category: 0.20,
    activity: 0.25,
    reputation: 0.20,
    response_time: 0.10,
};

impl CriteriaPreset {
    /// Every preset, in declaration order.
    pub const ALL: [CriteriaPreset; 4] = [
        CriteriaPreset::Default,
        CriteriaPreset::FoodPickup,
        CriteriaPreset::DietaryFocused,
        CriteriaPreset::Community,
    ];

    /// The preset's fixed weight vector.
    pub const fn weights(self) -> &'static FactorWeights {
        match self {
            CriteriaPreset::Default => &DEFAULT_WEIGHTS,
            CriteriaPreset::FoodPickup => &FOOD_PICKUP_WEIGHTS,
            CriteriaPreset::DietaryFocused => &DIETARY_FOCUSED_WEIGHTS,
            CriteriaPreset::Community => &COMMUNITY_WEIGHTS,
        }
    }

    /// Minimum total score for a result to pass.
    pub const fn threshold(self) -> f64 {
        match self {
            CriteriaPreset::Default | CriteriaPreset::FoodPickup => 0.5,
            CriteriaPreset::DietaryFocused => 0.6,
            CriteriaPreset::Community => 0.4,
        }
    }

    /// Wire name, as used in JSON and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            CriteriaPreset::Default => "default",
            CriteriaPreset::FoodPickup => "foodPickup",
            CriteriaPreset::DietaryFocused => "dietaryFocused",
            CriteriaPreset::Community => "community",
        }
    }
}

impl fmt::Display for CriteriaPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CriteriaPreset {
    type Err = MatchingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CriteriaPreset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .ok_or_else(|| MatchingError::UnknownPreset(s.to_string()))
    }
}
