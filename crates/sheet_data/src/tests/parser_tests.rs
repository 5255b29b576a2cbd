use std::collections::HashSet;

use super::*;

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

#[test]
fn blank_first_cell_rows_are_dropped() {
    let values = grid(&[
        &["Title", "Date"],
        &["Alpha", "2024"],
        &["", "ignored"],
        &["Beta", "2025"],
    ]);

    let snapshot = parse_grid(&values).expect("parse");
    assert_eq!(snapshot.projects.len(), 2);
    assert_eq!(snapshot.projects[0].title.as_deref(), Some("Alpha"));
    assert_eq!(snapshot.projects[0].date.as_deref(), Some("2024"));
    assert_eq!(snapshot.projects[1].title.as_deref(), Some("Beta"));
    assert_eq!(snapshot.projects[1].date.as_deref(), Some("2025"));
    assert_eq!(snapshot.projects[1].id, ProjectId(2));
    assert!(snapshot.about.is_empty());
}

#[test]
fn about_block_is_captured_and_every_titled_row_stays_a_project() {
    let values = grid(&[
        &["Title", "Date"],
        &["Alpha", "2024"],
        &["ABOUT_SECTION"],
        &["Name", "Jane"],
        &["END_ABOUT"],
        &["Beta", "2025"],
    ]);

    let snapshot = parse_grid(&values).expect("parse");
    assert_eq!(snapshot.about, [("name", "Jane")].into_iter().collect());
    let titles: Vec<_> = snapshot.projects.iter().map(|p| p.title_or_empty()).collect();
    assert_eq!(
        titles,
        vec!["Alpha", "ABOUT_SECTION", "Name", "END_ABOUT", "Beta"]
    );
    assert_eq!(snapshot.projects[4].id, ProjectId(5));
    assert_eq!(snapshot.projects[4].date.as_deref(), Some("2025"));
}

#[test]
fn grid_holding_only_the_about_block_keeps_the_profile() {
    let values = grid(&[
        &["Title"],
        &["ABOUT_SECTION"],
        &["Name", "Jane"],
        &["END_ABOUT"],
    ]);

    let snapshot = parse_grid(&values).expect("parse");
    assert_eq!(snapshot.about.get("name"), Some("Jane"));
    assert_eq!(snapshot.projects.len(), 3);
}

#[test]
fn about_capture_stops_at_end_marker() {
    let values = grid(&[
        &["Title", "Date"],
        &["Before", "outside"],
        &["ABOUT_SECTION"],
        &["Current Status", "Studying"],
        &["half-filled"],
        &["END_ABOUT"],
        &["After", "outside"],
        &["Email", "after@example.com"],
    ]);

    let about = parse_about(&values);
    assert_eq!(about.len(), 1);
    assert_eq!(about.get("current_status"), Some("Studying"));
    assert_eq!(about.get("before"), None);
    assert_eq!(about.get("email"), None);
}

#[test]
fn about_block_without_end_marker_keeps_later_projects() {
    let values = grid(&[
        &["Title"],
        &["Alpha"],
        &["ABOUT_SECTION"],
        &["Name", "Jane"],
        &["Beta"],
        &["Gamma"],
    ]);

    let snapshot = parse_grid(&values).expect("parse");
    assert_eq!(snapshot.about, [("name", "Jane")].into_iter().collect());
    let titles: Vec<_> = snapshot.projects.iter().map(|p| p.title_or_empty()).collect();
    assert_eq!(titles, vec!["Alpha", "ABOUT_SECTION", "Name", "Beta", "Gamma"]);
}

#[test]
fn record_keys_come_from_normalized_headers() {
    let values = grid(&[
        &["Title", "External Link", "Team Size", "Video"],
        &["Alpha", "https://a.example", "3"],
        &["Beta", "", "", "clip.mp4"],
    ]);
    let allowed: HashSet<String> = values[0].iter().map(|h| normalize_key(h)).collect();

    let snapshot = parse_grid(&values).expect("parse");
    for record in &snapshot.projects {
        for key in record.field_keys() {
            assert!(allowed.contains(key), "unexpected key {key}");
        }
    }
    assert_eq!(
        snapshot.projects[0].extra.get("team_size").map(String::as_str),
        Some("3")
    );
    assert_eq!(snapshot.projects[1].external_link, None);
    assert_eq!(snapshot.projects[1].video.as_deref(), Some("clip.mp4"));
}

#[test]
fn short_grids_are_insufficient() {
    assert_eq!(
        parse_grid(&[]),
        Err(ParseError::InsufficientData { rows: 0 })
    );
    assert_eq!(
        parse_grid(&grid(&[&["Title", "Date"]])),
        Err(ParseError::InsufficientData { rows: 1 })
    );
}

#[test]
fn grid_without_project_rows_is_rejected() {
    let values = grid(&[&["Title"], &[""], &[]]);
    assert_eq!(parse_grid(&values), Err(ParseError::NoProjects { rows: 3 }));
}

#[test]
fn images_column_becomes_ordered_list() {
    let values = grid(&[
        &["Title", "Images"],
        &["Alpha", "one.png, two.png,three.gif"],
    ]);

    let snapshot = parse_grid(&values).expect("parse");
    assert_eq!(
        snapshot.projects[0].images,
        vec!["one.png", "two.png", "three.gif"]
    );
}
