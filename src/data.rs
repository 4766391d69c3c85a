//! Loading of historical results and upcoming fixtures from CSV tables.
//!
//! The loader assumes the feed has already been cleaned: team names must be
//! canonical across both tables, since the engine keys ratings by exact name.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context};
use chrono::NaiveDate;

use crate::domain::{Fixture, MatchResult, Score};

const RESULT_FIELDS: usize = 5;
const FIXTURE_FIELDS: usize = 3;

/// Reads historical results from a CSV table with the header
/// `date,home_team,away_team,home_goals,away_goals`. Rows are sorted
/// chronologically (stable, so same-day ordering follows the file) before
/// being handed to the engine.
pub fn read_match_results(path: impl AsRef<Path>) -> anyhow::Result<Vec<MatchResult>> {
    let mut results = vec![];
    for (line, record) in read_records(path.as_ref())? {
        if record.len() != RESULT_FIELDS {
            bail!(
                "line {line}: expected {RESULT_FIELDS} fields, got {}",
                record.len()
            );
        }
        let date = NaiveDate::parse_from_str(&record[0], "%Y-%m-%d")
            .with_context(|| format!("line {line}: bad date {:?}", record[0]))?;
        let home_goals: u8 = record[3]
            .parse()
            .with_context(|| format!("line {line}: bad home goals {:?}", record[3]))?;
        let away_goals: u8 = record[4]
            .parse()
            .with_context(|| format!("line {line}: bad away goals {:?}", record[4]))?;
        results.push(MatchResult {
            date,
            home_team: record[1].clone(),
            away_team: record[2].clone(),
            score: Score::new(home_goals, away_goals),
        });
    }
    results.sort_by_key(|result| result.date);
    Ok(results)
}

/// Reads upcoming fixtures from a CSV table with the header
/// `round,home_team,away_team`; the round may be blank.
pub fn read_fixtures(path: impl AsRef<Path>) -> anyhow::Result<Vec<Fixture>> {
    let mut fixtures = vec![];
    for (line, record) in read_records(path.as_ref())? {
        if record.len() != FIXTURE_FIELDS {
            bail!(
                "line {line}: expected {FIXTURE_FIELDS} fields, got {}",
                record.len()
            );
        }
        let round = if record[0].is_empty() {
            None
        } else {
            Some(
                record[0]
                    .parse()
                    .with_context(|| format!("line {line}: bad round {:?}", record[0]))?,
            )
        };
        fixtures.push(Fixture {
            round,
            home_team: record[1].clone(),
            away_team: record[2].clone(),
        });
    }
    Ok(fixtures)
}

/// Splits a CSV file into trimmed records, skipping the header row and blank
/// lines. Yields one-based line numbers for error context.
fn read_records(path: &Path) -> anyhow::Result<Vec<(usize, Vec<String>)>> {
    let file =
        File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let mut records = vec![];
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("cannot read {}", path.display()))?;
        if index == 0 || line.trim().is_empty() {
            continue;
        }
        let record = line
            .split(',')
            .map(|field| field.trim().to_string())
            .collect();
        records.push((index + 1, record));
    }
    Ok(records)
}
