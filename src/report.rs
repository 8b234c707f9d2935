//! Console rendering of query results.
//!
//! The writers here are shared by [`demo::run`](crate::demo::run), which
//! prints each result as soon as it is computed, and by
//! [`QueryReport::render`], which reprints a finished run.

use crate::animal::{Animal, Classification};
use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// Renders an `Option` as `Optional[value]` or `Optional.empty`.
pub struct Optional<'a, T>(pub &'a Option<T>);

impl<T: fmt::Display> fmt::Display for Optional<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "Optional[{v}]"),
            None => f.write_str("Optional.empty"),
        }
    }
}

/// One animal per line.
pub fn write_animals(out: &mut impl Write, animals: &[Animal]) -> Result<()> {
    for a in animals {
        writeln!(out, "{a}")?;
    }
    Ok(())
}

/// The animal on its own line, or nothing when absent.
pub fn write_if_present(out: &mut impl Write, animal: &Option<Animal>) -> Result<()> {
    if let Some(a) = animal {
        writeln!(out, "{a}")?;
    }
    Ok(())
}

/// Classification, its members, then a blank line, for each group.
pub fn write_groups(out: &mut impl Write, groups: &[(Classification, Vec<Animal>)]) -> Result<()> {
    for (classification, members) in groups {
        writeln!(out, "{classification}")?;
        write_animals(out, members)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Results of one full demo run, in query order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueryReport {
    pub predators: Vec<Animal>,
    pub sorted: Vec<Animal>,
    pub all_older_than_ten: bool,
    pub any_older_than_ten: bool,
    pub none_named_elephant: bool,
    pub oldest: Option<Animal>,
    pub youngest: Option<Animal>,
    pub groups: Vec<(Classification, Vec<Animal>)>,
    pub oldest_predator_name: Option<String>,
}

impl QueryReport {
    pub fn render(&self, out: &mut impl Write) -> Result<()> {
        write_animals(out, &self.predators)?;
        write_animals(out, &self.sorted)?;
        writeln!(out, "{}", self.all_older_than_ten)?;
        writeln!(out, "{}", self.any_older_than_ten)?;
        writeln!(out, "{}", self.none_named_elephant)?;
        write_if_present(out, &self.oldest)?;
        write_if_present(out, &self.youngest)?;
        write_groups(out, &self.groups)?;
        writeln!(out, "{}", Optional(&self.oldest_predator_name))?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_wrapper_forms() {
        assert_eq!(Optional(&Some("Динозавр")).to_string(), "Optional[Динозавр]");
        assert_eq!(Optional::<String>(&None).to_string(), "Optional.empty");
    }

    #[test]
    fn groups_end_with_blank_line() -> Result<()> {
        let groups = vec![(
            Classification::Omnivorous,
            vec![Animal::new("Гибон", 35, Classification::Omnivorous)],
        )];
        let mut buf = Vec::new();
        write_groups(&mut buf, &groups)?;
        assert_eq!(
            String::from_utf8(buf)?,
            "OMNIVOROUS\nAnimal{name='Гибон', age=35, classification=OMNIVOROUS}\n\n"
        );
        Ok(())
    }

    #[test]
    fn absent_animal_prints_nothing() -> Result<()> {
        let mut buf = Vec::new();
        write_if_present(&mut buf, &None)?;
        assert!(buf.is_empty());
        Ok(())
    }
}
