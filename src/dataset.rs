use crate::animal::{Animal, Classification};

/// Number of animals in [`sample_animals`].
pub const SAMPLE_SIZE: usize = 8;

/// The fixed herd every demo query runs against.
pub fn sample_animals() -> Vec<Animal> {
    use Classification::*;
    vec![
        Animal::new("Слон", 20, Herbivorous),
        Animal::new("Лев", 10, Predator),
        Animal::new("Гиена", 11, Predator),
        Animal::new("Жираф", 7, Herbivorous),
        Animal::new("Гибон", 35, Omnivorous),
        Animal::new("Лошадь", 36, Herbivorous),
        Animal::new("Рысь", 2, Predator),
        Animal::new("Динозавр", 200, Predator),
    ]
}
