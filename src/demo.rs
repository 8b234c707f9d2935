//! The scripted walk through all nine queries.

use crate::queries::AnimalQueries;
use crate::report::{write_animals, write_groups, write_if_present, Optional, QueryReport};
use crate::Runner;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;

/// Name probed by the none-match query.
pub const ELEPHANT: &str = "Слон";
/// Age threshold for the all/any-match queries.
pub const AGE_THRESHOLD: u32 = 10;

/// Run every query against the sample herd, writing each result to `out`
/// right after it is computed.
pub fn run(runner: &Runner, out: &mut impl Write) -> Result<QueryReport> {
    let q = AnimalQueries::sample(runner.clone());
    debug!(mode = ?runner.mode, "running animal queries");

    let predators = q.predators().context("filter predators")?;
    debug!(count = predators.len(), "filter");
    write_animals(out, &predators)?;

    let sorted = q
        .sorted_by_age_and_classification()
        .context("sort by age and classification")?;
    debug!(count = sorted.len(), "sort");
    write_animals(out, &sorted)?;

    let all_older_than_ten = q.all_older_than(AGE_THRESHOLD).context("all match")?;
    debug!(result = all_older_than_ten, "all match");
    writeln!(out, "{all_older_than_ten}")?;

    let any_older_than_ten = q.any_older_than(AGE_THRESHOLD).context("any match")?;
    debug!(result = any_older_than_ten, "any match");
    writeln!(out, "{any_older_than_ten}")?;

    let none_named_elephant = q.none_named(ELEPHANT).context("none match")?;
    debug!(result = none_named_elephant, "none match");
    writeln!(out, "{none_named_elephant}")?;

    let oldest = q.oldest().context("max by age")?;
    debug!(present = oldest.is_some(), "max");
    write_if_present(out, &oldest)?;

    let youngest = q.youngest().context("min by age")?;
    debug!(present = youngest.is_some(), "min");
    write_if_present(out, &youngest)?;

    let groups = q.by_classification().context("group by classification")?;
    debug!(groups = groups.len(), "group");
    write_groups(out, &groups)?;

    let oldest_predator_name = q.oldest_predator_name().context("oldest predator")?;
    debug!(name = ?oldest_predator_name, "oldest predator");
    writeln!(out, "{}", Optional(&oldest_predator_name))?;

    Ok(QueryReport {
        predators,
        sorted,
        all_older_than_ten,
        any_older_than_ten,
        none_named_elephant,
        oldest,
        youngest,
        groups,
        oldest_predator_name,
    })
}
