use menagerie::testing::*;
use menagerie::*;

fn runners() -> Vec<Runner> {
    vec![
        Runner::parallel(Some(2), Some(2)),
        Runner::parallel(Some(4), Some(5)),
        Runner::parallel(None, Some(8)),
        Runner::default(),
    ]
}

#[test]
fn every_query_agrees_with_sequential() -> anyhow::Result<()> {
    for herd in [sample_animals(), tied_herd(), Vec::new()] {
        let seq = AnimalQueries::new(herd.clone(), Runner::sequential());
        for r in runners() {
            let par = AnimalQueries::new(herd.clone(), r);
            assert_eq!(seq.predators()?, par.predators()?);
            assert_eq!(
                seq.sorted_by_age_and_classification()?,
                par.sorted_by_age_and_classification()?
            );
            assert_eq!(seq.all_older_than(10)?, par.all_older_than(10)?);
            assert_eq!(seq.any_older_than(10)?, par.any_older_than(10)?);
            assert_eq!(seq.none_named("Слон")?, par.none_named("Слон")?);
            assert_eq!(seq.oldest()?, par.oldest()?);
            assert_eq!(seq.youngest()?, par.youngest()?);
            assert_eq!(seq.by_classification()?, par.by_classification()?);
            assert_eq!(seq.oldest_predator_name()?, par.oldest_predator_name()?);
        }
    }
    Ok(())
}

#[test]
fn large_generated_herd_groups_identically() -> anyhow::Result<()> {
    let herd: Vec<Animal> = (0..1_000u32)
        .map(|i| Animal::new(format!("a{i}"), i % 37, Classification::ALL[(i % 3) as usize]))
        .collect();

    let p = Pipeline::default();
    let grouped = from_vec(&p, herd.clone())
        .key_by(Animal::classification)
        .group_by_key();
    let seq = grouped.clone().collect_seq()?;
    let par = grouped.collect_par(Some(4), Some(16))?;

    assert_eq!(seq, par);
    assert_groups_partition(&par, &herd, Animal::classification);
    Ok(())
}
