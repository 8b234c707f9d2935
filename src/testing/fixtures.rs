//! Small herds for tests.

use crate::animal::{Animal, Classification};

/// Build a herd from `(name, age, classification)` rows.
pub fn herd(rows: &[(&str, u32, Classification)]) -> Vec<Animal> {
    rows.iter()
        .map(|&(name, age, c)| Animal::new(name, age, c))
        .collect()
}

/// A herd with repeated ages, for tie-breaking. The two predators come first.
pub fn tied_herd() -> Vec<Animal> {
    use Classification::*;
    herd(&[
        ("Рысь", 4, Predator),
        ("Лев", 4, Predator),
        ("Слон", 4, Herbivorous),
        ("Гибон", 9, Omnivorous),
        ("Жираф", 9, Herbivorous),
    ])
}
