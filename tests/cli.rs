//! CLI smoke tests over the seeded datasets.

use assert_cmd::Command;
use predicates::prelude::*;

fn flowdeck() -> Command {
    let mut cmd = Command::cargo_bin("flowdeck").unwrap();
    // Keep the run hermetic: no user config, no real service endpoints.
    cmd.env("FLOWDECK_CONFIG", "/nonexistent/flowdeck.toml");
    cmd.env("FLOWDECK_MARKET_ENDPOINT", "http://127.0.0.1:1");
    cmd.env("FLOWDECK_MATCHING_ENDPOINT", "http://127.0.0.1:1");
    cmd.env_remove("FLOWDECK_MATCHING_API_KEY");
    cmd.env_remove("FLOWDECK_MARKET_API_KEY");
    cmd
}

#[test]
fn directory_lists_first_page() {
    flowdeck()
        .args(["directory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of"));
}

#[test]
fn directory_family_office_tab() {
    flowdeck()
        .args(["directory", "--type", "family-office", "--machine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_results\""))
        .stdout(predicate::str::contains("Family office"));
}

#[test]
fn directory_rejects_unknown_sort_field() {
    flowdeck()
        .args(["directory", "--sort", "revenue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sort field"));
}

#[test]
fn directory_machine_errors_go_to_stdout_as_json() {
    flowdeck()
        .args(["--machine", "directory", "--type", "bank"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"error\":true"));
}

#[test]
fn deals_board_shows_default_stages() {
    flowdeck()
        .args(["deals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sourcing"))
        .stdout(predicate::str::contains("Project Bluebird"))
        .stdout(predicate::str::contains("Total pipeline revenue"));
}

#[test]
fn deals_move_to_unknown_stage_fails() {
    flowdeck()
        .args(["deals", "move", "101", "limbo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown pipeline stage"));
}

#[test]
fn portfolio_metrics_roll_up() {
    flowdeck()
        .args(["portfolio", "metrics", "--machine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"active_companies\":4"));
}

#[test]
fn news_tag_filter() {
    flowdeck()
        .args(["news", "--tag", "saas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SaaS Multiples"));
}

#[test]
fn match_without_key_reports_empty() {
    flowdeck()
        .args(["match", "--company", "Acme", "--industry", "Logistics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No match"));
}

#[test]
fn market_quote_degrades_to_synthetic() {
    flowdeck()
        .args(["market", "aapl", "--machine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"synthetic\":true"));
}

#[test]
fn config_masks_secrets() {
    flowdeck()
        .env("FLOWDECK_MATCHING_API_KEY", "super-secret")
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<set>"))
        .stdout(predicate::str::contains("super-secret").not());
}
