//! Attribute value object - the five character traits used for bonuses and checks.
//!
//! Replaces stringly-typed attribute names with an exhaustive enum so every
//! lookup is checked at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Character attribute referenced by actions (bonus) and event options (check).
///
/// Legacy content spellings are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    #[serde(alias = "carisma")]
    Charisma,
    #[serde(alias = "proficiencia")]
    Proficiency,
    #[serde(alias = "rede")]
    Network,
    #[serde(alias = "moralidade")]
    Morality,
    #[serde(alias = "resiliencia")]
    Resilience,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Self::Charisma,
        Self::Proficiency,
        Self::Network,
        Self::Morality,
        Self::Resilience,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Charisma => "charisma",
            Self::Proficiency => "proficiency",
            Self::Network => "network",
            Self::Morality => "morality",
            Self::Resilience => "resilience",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "charisma" | "carisma" => Ok(Self::Charisma),
            "proficiency" | "proficiencia" => Ok(Self::Proficiency),
            "network" | "rede" => Ok(Self::Network),
            "morality" | "moralidade" => Ok(Self::Morality),
            "resilience" | "resiliencia" => Ok(Self::Resilience),
            other => Err(DomainError::parse(format!("Unknown attribute: {other}"))),
        }
    }
}

/// The five attribute scores of a character template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    #[serde(default, alias = "carisma")]
    pub charisma: i32,
    #[serde(default, alias = "proficiencia")]
    pub proficiency: i32,
    #[serde(default, alias = "rede")]
    pub network: i32,
    #[serde(default, alias = "moralidade")]
    pub morality: i32,
    #[serde(default, alias = "resiliencia")]
    pub resilience: i32,
}

impl AttributeSet {
    pub fn new(charisma: i32, proficiency: i32, network: i32, morality: i32, resilience: i32) -> Self {
        Self {
            charisma,
            proficiency,
            network,
            morality,
            resilience,
        }
    }

    /// Score for a single attribute.
    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Charisma => self.charisma,
            Attribute::Proficiency => self.proficiency,
            Attribute::Network => self.network,
            Attribute::Morality => self.morality,
            Attribute::Resilience => self.resilience,
        }
    }

    /// Iterate `(attribute, score)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.into_iter().map(move |a| (a, self.get(a)))
    }
}
