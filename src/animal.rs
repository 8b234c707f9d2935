//! The record type queried by the demo.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dietary category of an animal.
///
/// Ordered by declaration: `Herbivorous < Predator < Omnivorous`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Herbivorous,
    Predator,
    Omnivorous,
}

impl Classification {
    pub const ALL: [Classification; 3] = [
        Classification::Herbivorous,
        Classification::Predator,
        Classification::Omnivorous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Herbivorous => "HERBIVOROUS",
            Classification::Predator => "PREDATOR",
            Classification::Omnivorous => "OMNIVOROUS",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable animal record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Animal {
    name: String,
    age: u32,
    classification: Classification,
}

impl Animal {
    pub fn new(name: impl Into<String>, age: u32, classification: Classification) -> Self {
        Self {
            name: name.into(),
            age,
            classification,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn is_predator(&self) -> bool {
        self.classification == Classification::Predator
    }
}

/// `Animal{name='Лев', age=10, classification=PREDATOR}`
impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Animal{{name='{}', age={}, classification={}}}",
            self.name, self.age, self.classification
        )
    }
}
