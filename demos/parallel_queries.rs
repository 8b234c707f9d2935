//! Parallel query walkthrough.
//!
//! Runs the animal queries on a dedicated four-thread pool and checks that
//! each answer matches the sequential run.
//!
//! Run with: `cargo run --example parallel_queries`

use anyhow::{Result, ensure};
use menagerie::report::Optional;
use menagerie::{AnimalQueries, Runner};

fn main() -> Result<()> {
    println!("🐾 Parallel Animal Queries\n");

    let seq = AnimalQueries::sample(Runner::sequential());
    let par = AnimalQueries::sample(Runner::parallel(Some(4), Some(3)));

    // =============================================================================
    // Filter and sort
    // =============================================================================
    println!("Predators:");
    let predators = par.predators()?;
    for a in &predators {
        println!("  {a}");
    }
    ensure!(predators == seq.predators()?, "predators differ between modes");

    println!("\nBy age, youngest first:");
    let sorted = par.sorted_by_age_and_classification()?;
    for a in &sorted {
        println!("  {a}");
    }
    ensure!(
        sorted == seq.sorted_by_age_and_classification()?,
        "sort differs between modes"
    );

    // =============================================================================
    // Matching and extrema
    // =============================================================================
    println!("\nEvery animal older than 10: {}", par.all_older_than(10)?);
    println!("Some animal older than 10:  {}", par.any_older_than(10)?);
    println!("Nobody named Слон:          {}", par.none_named("Слон")?);

    let oldest = par.oldest()?;
    let youngest = par.youngest()?;
    println!("\nOldest:   {}", Optional(&oldest));
    println!("Youngest: {}", Optional(&youngest));
    ensure!(oldest == seq.oldest()? && youngest == seq.youngest()?, "extrema differ");

    // =============================================================================
    // Grouping
    // =============================================================================
    println!("\nGroups:");
    let groups = par.by_classification()?;
    for (classification, members) in &groups {
        println!("  {classification}: {} animal(s)", members.len());
    }
    ensure!(groups == seq.by_classification()?, "groups differ between modes");

    println!(
        "\nOldest predator: {}",
        Optional(&par.oldest_predator_name()?)
    );
    println!("\n✅ Parallel and sequential runs agree");
    Ok(())
}
