// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write as _;

const CATALOG: &str = r#"
[project]
name = "analytics"

[[job]]
name = "ingest"
cron = "@hourly"
start_date = "2020-04-05"
window = "3d"

[[job]]
name = "daily-rollup"
cron = "0 2 * * *"
start_date = "2020-04-05"
window = "24h"
depends_on = ["ingest"]
"#;

#[test]
fn parses_a_full_catalog() {
    let catalog = parse(CATALOG).unwrap();

    assert_eq!(catalog.project.name, "analytics");
    assert_eq!(catalog.jobs.len(), 2);

    let rollup = &catalog.jobs[1];
    assert_eq!(rollup.name, "daily-rollup");
    assert_eq!(rollup.schedule.interval.expr(), "0 2 * * *");
    assert_eq!(rollup.window, TaskWindow::from_hours(24));
    assert_eq!(rollup.intra_upstreams().collect::<Vec<_>>(), vec!["ingest"]);
}

#[test]
fn jobs_keep_file_order() {
    let catalog = parse(CATALOG).unwrap();
    let names: Vec<_> = catalog.jobs.iter().map(|j| j.name.as_str()).collect();
    assert_eq!(names, vec!["ingest", "daily-rollup"]);
}

#[test]
fn window_suffixes() {
    assert_eq!(parse_window("3d").unwrap(), Duration::from_secs(3 * 24 * 3600));
    assert_eq!(parse_window("24h").unwrap(), Duration::from_secs(24 * 3600));
    assert_eq!(parse_window("90m").unwrap(), Duration::from_secs(90 * 60));
    assert_eq!(parse_window("0").unwrap(), Duration::ZERO);
}

#[test]
fn bad_window_is_rejected() {
    assert!(parse_window("3w").is_err());
    assert!(parse_window("").is_err());
    assert!(parse_window("d").is_err());
    assert!(parse_window("abc").is_err());
}

#[test]
fn bad_cron_names_the_job() {
    let text = CATALOG.replace("@hourly", "whenever");
    let err = parse(&text).unwrap_err();
    assert!(format!("{err:#}").contains("ingest"));
}

#[test]
fn bad_window_names_the_job() {
    let text = CATALOG.replace("\"3d\"", "\"3w\"");
    let err = parse(&text).unwrap_err();
    assert!(format!("{err:#}").contains("ingest"));
}

#[test]
fn missing_project_section_fails() {
    let err = parse("[[job]]\nname = \"a\"").unwrap_err();
    assert!(err.to_string().contains("project"));
}

#[test]
fn empty_job_list_is_allowed() {
    let catalog = parse("[project]\nname = \"empty\"").unwrap();
    assert!(catalog.jobs.is_empty());
}

#[test]
fn load_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();

    let catalog = load(file.path()).unwrap();
    assert_eq!(catalog.jobs.len(), 2);
}

#[test]
fn load_reports_the_path_on_failure() {
    let err = load(std::path::Path::new("/nonexistent/catalog.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/catalog.toml"));
}
