//! The nine demo queries, expressed as pipelines over one shared source.
//!
//! Every method builds a fresh branch off the same source collection and
//! collects it with the configured [`Runner`], so calling a query twice
//! gives the same answer.

use crate::animal::{Animal, Classification};
use crate::dataset::sample_animals;
use crate::{from_vec, PCollection, Pipeline, Runner};
use anyhow::Result;

pub struct AnimalQueries {
    pipeline: Pipeline,
    animals: PCollection<Animal>,
    runner: Runner,
}

impl AnimalQueries {
    pub fn new(animals: Vec<Animal>, runner: Runner) -> Self {
        let pipeline = Pipeline::default();
        let animals = from_vec(&pipeline, animals);
        Self {
            pipeline,
            animals,
            runner,
        }
    }

    /// Queries over [`sample_animals`].
    pub fn sample(runner: Runner) -> Self {
        Self::new(sample_animals(), runner)
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Predators in source order.
    pub fn predators(&self) -> Result<Vec<Animal>> {
        self.animals
            .clone()
            .filter(Animal::is_predator)
            .collect_with(&self.runner)
    }

    /// Order by (age descending, classification descending), then reverse
    /// that ordering. Animals tied on both keep their source order.
    pub fn sorted_by_age_and_classification(&self) -> Result<Vec<Animal>> {
        self.animals
            .clone()
            .sorted_by_reversed(|a: &Animal, b: &Animal| {
                b.age()
                    .cmp(&a.age())
                    .then_with(|| b.classification().cmp(&a.classification()))
            })
            .collect_with(&self.runner)
    }

    pub fn all_older_than(&self, age: u32) -> Result<bool> {
        self.animals
            .clone()
            .all_match(move |a: &Animal| a.age() > age)
            .holds(&self.runner)
    }

    pub fn any_older_than(&self, age: u32) -> Result<bool> {
        self.animals
            .clone()
            .any_match(move |a: &Animal| a.age() > age)
            .holds(&self.runner)
    }

    /// `true` when no animal is called `name`.
    pub fn none_named(&self, name: &str) -> Result<bool> {
        let name = name.to_string();
        self.animals
            .clone()
            .none_match(move |a: &Animal| a.name() == name)
            .holds(&self.runner)
    }

    pub fn oldest(&self) -> Result<Option<Animal>> {
        self.animals
            .clone()
            .max_by_key(Animal::age)
            .collect_first(&self.runner)
    }

    pub fn youngest(&self) -> Result<Option<Animal>> {
        self.animals
            .clone()
            .min_by_key(Animal::age)
            .collect_first(&self.runner)
    }

    /// Animals grouped by classification, groups in `Classification` order.
    pub fn by_classification(&self) -> Result<Vec<(Classification, Vec<Animal>)>> {
        self.animals
            .clone()
            .key_by(Animal::classification)
            .group_by_key()
            .collect_sorted_by_key(&self.runner)
    }

    pub fn oldest_predator_name(&self) -> Result<Option<String>> {
        self.animals
            .clone()
            .filter(Animal::is_predator)
            .max_by_key(Animal::age)
            .map(|a: &Animal| a.name().to_string())
            .collect_first(&self.runner)
    }
}
