use std::ops::RangeInclusive;

use shared::{
    domain::{normalize_key, AboutProfile, PortfolioSnapshot, ProjectId, ProjectRecord},
    error::ParseError,
};

/// First-column marker opening the profile block.
pub const ABOUT_START: &str = "ABOUT_SECTION";
/// First-column marker closing the profile block.
pub const ABOUT_END: &str = "END_ABOUT";

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or_default()
}

/// Row indices covered by the profile block, markers included. Without a closing
/// marker the block runs to the last row.
fn about_span(grid: &[Vec<String>]) -> Option<RangeInclusive<usize>> {
    let start = grid.iter().position(|row| cell(row, 0) == ABOUT_START)?;
    let end = grid[start + 1..]
        .iter()
        .position(|row| cell(row, 0) == ABOUT_END)
        .map_or(grid.len() - 1, |offset| start + 1 + offset);
    Some(start..=end)
}

/// Parses a header row plus data rows into a snapshot.
///
/// Each data row whose first cell is non-empty becomes one [`ProjectRecord`];
/// empty cells are left out of the record. The profile block is read by
/// [`parse_about`] on its own and does not affect which rows are projects.
pub fn parse_grid(grid: &[Vec<String>]) -> Result<PortfolioSnapshot, ParseError> {
    if grid.len() < 2 {
        return Err(ParseError::InsufficientData { rows: grid.len() });
    }

    let headers: Vec<String> = grid[0].iter().map(|header| normalize_key(header)).collect();

    let mut projects = Vec::new();
    for row in &grid[1..] {
        if cell(row, 0).is_empty() {
            continue;
        }

        let mut record = ProjectRecord::new(ProjectId::from_index(projects.len()));
        for (column, key) in headers.iter().enumerate() {
            let value = cell(row, column);
            if key.is_empty() || value.is_empty() {
                continue;
            }
            record.set_field(key, value);
        }
        projects.push(record);
    }

    if projects.is_empty() {
        return Err(ParseError::NoProjects { rows: grid.len() });
    }

    Ok(PortfolioSnapshot::new(projects, parse_about(grid)))
}

/// Collects `key -> value` pairs from the rows between [`ABOUT_START`] and
/// [`ABOUT_END`]. Only rows with both leading cells filled contribute.
pub fn parse_about(grid: &[Vec<String>]) -> AboutProfile {
    let Some(span) = about_span(grid) else {
        return AboutProfile::new();
    };

    grid[*span.start() + 1..=*span.end()]
        .iter()
        .filter_map(|row| {
            let (key, value) = (cell(row, 0), cell(row, 1));
            if key.is_empty() || value.is_empty() || key == ABOUT_START || key == ABOUT_END {
                return None;
            }
            Some((normalize_key(key), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
