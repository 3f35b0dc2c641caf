//! Agent personalities.

use serde::{Deserialize, Serialize};

use crate::time::now_ms;

/// Big Five trait scores on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BigFive {
    pub openness: f32,
    pub conscientiousness: f32,
    pub extraversion: f32,
    pub agreeableness: f32,
    pub neuroticism: f32,
}

impl Default for BigFive {
    fn default() -> Self {
        Self {
            openness: 50.0,
            conscientiousness: 50.0,
            extraversion: 50.0,
            agreeableness: 50.0,
            neuroticism: 50.0,
        }
    }
}

/// A named personality: trait scores plus free-form instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personality {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub big_five: BigFive,
    /// Behavior slider values keyed by behavior id, 0-100.
    #[serde(default)]
    pub behaviors: std::collections::BTreeMap<String, f32>,
    #[serde(default)]
    pub custom_instructions: String,
}

/// The full set of user-defined personalities, persisted as one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityLibrary {
    pub personalities: Vec<Personality>,
    pub last_updated: i64,
}

impl PersonalityLibrary {
    pub fn new(personalities: Vec<Personality>) -> Self {
        Self {
            personalities,
            last_updated: now_ms(),
        }
    }
}
