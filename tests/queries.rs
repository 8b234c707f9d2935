use menagerie::testing::*;
use menagerie::*;

fn names(animals: &[Animal]) -> Vec<String> {
    animals.iter().map(|a| a.name().to_string()).collect()
}

#[test]
fn sample_has_eight_animals() {
    assert_eq!(sample_animals().len(), SAMPLE_SIZE);
}

#[test]
fn predators_are_exactly_the_predator_subsequence() -> anyhow::Result<()> {
    let q = AnimalQueries::sample(Runner::sequential());
    let expected: Vec<Animal> = sample_animals()
        .into_iter()
        .filter(|a| a.classification() == Classification::Predator)
        .collect();
    assert_collections_equal(&q.predators()?, &expected);
    assert_eq!(names(&expected), ["Лев", "Гиена", "Рысь", "Динозавр"]);
    Ok(())
}

#[test]
fn grouping_partitions_the_sample() -> anyhow::Result<()> {
    let q = AnimalQueries::sample(Runner::sequential());
    let groups = q.by_classification()?;

    assert_eq!(groups.len(), 3);
    assert_eq!(groups.iter().map(|(_, m)| m.len()).sum::<usize>(), SAMPLE_SIZE);
    assert_groups_partition(&groups, &sample_animals(), Animal::classification);

    let keys: Vec<Classification> = groups.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, Classification::ALL);
    Ok(())
}

#[test]
fn group_members_keep_source_order() -> anyhow::Result<()> {
    let q = AnimalQueries::sample(Runner::sequential());
    let groups = q.by_classification()?;
    let herbivores = &groups[0].1;
    assert_eq!(names(herbivores), ["Слон", "Жираф", "Лошадь"]);
    Ok(())
}

#[test]
fn sorted_sequence_is_a_fixed_point() -> anyhow::Result<()> {
    let once = AnimalQueries::sample(Runner::sequential()).sorted_by_age_and_classification()?;
    let twice = AnimalQueries::new(once.clone(), Runner::sequential())
        .sorted_by_age_and_classification()?;
    assert_collections_equal(&twice, &once);
    Ok(())
}

#[test]
fn queries_are_idempotent() -> anyhow::Result<()> {
    let q = AnimalQueries::sample(Runner::sequential());
    assert_eq!(q.predators()?, q.predators()?);
    assert_eq!(q.sorted_by_age_and_classification()?, q.sorted_by_age_and_classification()?);
    assert_eq!(q.by_classification()?, q.by_classification()?);
    assert_eq!(q.oldest()?, q.oldest()?);
    assert_eq!(q.oldest_predator_name()?, q.oldest_predator_name()?);
    Ok(())
}

#[test]
fn ties_resolve_to_the_earliest_animal() -> anyhow::Result<()> {
    let q = AnimalQueries::new(tied_herd(), Runner::sequential());
    assert_eq!(q.oldest()?.map(|a| a.name().to_string()).as_deref(), Some("Гибон"));
    assert_eq!(q.youngest()?.map(|a| a.name().to_string()).as_deref(), Some("Рысь"));
    assert_eq!(q.oldest_predator_name()?.as_deref(), Some("Рысь"));
    Ok(())
}

#[test]
fn tied_sort_orders_classifications_within_age() -> anyhow::Result<()> {
    let q = AnimalQueries::new(tied_herd(), Runner::sequential());
    let sorted = q.sorted_by_age_and_classification()?;
    assert_eq!(names(&sorted), ["Слон", "Рысь", "Лев", "Жираф", "Гибон"]);
    Ok(())
}

#[test]
fn sort_is_a_fixed_point_with_full_ties() -> anyhow::Result<()> {
    let once = AnimalQueries::new(tied_herd(), Runner::sequential())
        .sorted_by_age_and_classification()?;
    let twice = AnimalQueries::new(once.clone(), Runner::parallel(Some(2), Some(3)))
        .sorted_by_age_and_classification()?;
    assert_collections_equal(&twice, &once);
    Ok(())
}
