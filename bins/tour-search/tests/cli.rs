//! End-to-end tests for the tour-search binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn tour_search() -> Command {
    let mut cmd = Command::cargo_bin("tour-search").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_search_ranks_matching_tour_first() {
    let json = json_stdout(tour_search().args(["search", "ubud", "--format", "json"]));

    assert_eq!(json["results"][0]["name"], "Ubud Cultural Tour");
    assert_eq!(json["results"][0]["score"], 120);
}

#[test]
fn test_search_with_category() {
    let json = json_stdout(tour_search().args(["search", "", "-C", "beach", "--format", "json"]));

    assert_eq!(json["total_results"], 2);
    assert_eq!(json["results"][0]["id"], 2);
    assert_eq!(json["results"][1]["id"], 10);
}

#[test]
fn test_search_paginates_by_width() {
    let json = json_stdout(tour_search().args([
        "search", "", "--width", "375", "--page", "2", "--format", "json",
    ]));

    assert_eq!(json["per_page"], 3);
    assert_eq!(json["page"], 2);
    assert_eq!(json["total_pages"], 4);
    assert_eq!(json["results"][0]["id"], 4);
}

#[test]
fn test_search_no_results_exit_code() {
    tour_search()
        .args(["search", "qqqqqqqq"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("No tours found"));
}

#[test]
fn test_search_text_reports_count() {
    tour_search()
        .args(["search", "", "-C", "beach"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 tours found"))
        .stdout(predicate::str::contains("Page 1 of 1"));
}

#[test]
fn test_json_log_format() {
    let output = tour_search()
        .env("RUST_LOG", "debug")
        .args(["categories", "--format", "json", "--log-format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let first_line = String::from_utf8(output.stderr).unwrap();
    let first_line = first_line.lines().next().unwrap();
    let log: serde_json::Value = serde_json::from_str(first_line).unwrap();
    assert_eq!(log["level"], "DEBUG");

    let stdout: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(stdout.is_array());
}

#[test]
fn test_search_unknown_category() {
    tour_search()
        .args(["search", "ubud", "--category", "volcano"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn test_suggest_limit() {
    let json = json_stdout(tour_search().args(["suggest", "tour", "--limit", "2", "--format", "json"]));
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[test]
fn test_show_tour() {
    tour_search()
        .args(["show", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mount Batur Sunrise Trek"))
        .stdout(predicate::str::contains("https://wa.me/"))
        .stdout(predicate::str::contains("tour-search inquiry 4"));
}

#[test]
fn test_show_missing_tour() {
    tour_search()
        .args(["show", "999"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Tour not found: 999"));
}

#[test]
fn test_show_json_includes_schema_org() {
    let json = json_stdout(tour_search().args(["show", "1", "--format", "json"]));
    assert_eq!(json["schema_org"]["offers"]["price"], "450000");
}

#[test]
fn test_categories() {
    let json = json_stdout(tour_search().args(["categories", "--format", "json"]));
    assert_eq!(json[0]["category"], "all");
    assert_eq!(json[0]["tours"], 12);
}

#[test]
fn test_score_command() {
    tour_search()
        .args(["score", "bud", "Ubud Tour"])
        .assert()
        .success()
        .stdout(predicate::str::contains("60"))
        .stdout(predicate::str::contains("Contains"));
}

#[test]
fn test_distance_command() {
    tour_search()
        .args(["distance", "kitten", "sitting"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_inquiry_uses_config() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[contact]\nphone = \"+6289999999\"").unwrap();

    tour_search()
        .args(["inquiry", "2", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("https://wa.me/+6289999999?text="));
}

#[test]
fn test_custom_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("tours.json");
    std::fs::write(
        &catalog,
        r#"[{"id": 1, "name": "Menjangan Snorkeling", "description": "", "price": "Rp 700.000", "category": "beach"}]"#,
    )
    .unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        format!("[catalog]\npath = {:?}\n", catalog.to_str().unwrap()),
    )
    .unwrap();

    let json = json_stdout(tour_search().args(["search", "snorkling", "--format", "json", "--config"]).arg(&config));
    assert_eq!(json["results"][0]["name"], "Menjangan Snorkeling");
    assert_eq!(json["results"][0]["score"], 30);
}

#[test]
fn test_missing_config_file() {
    tour_search()
        .args(["categories", "--config", "/no/such/config.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No config file at"));
}
