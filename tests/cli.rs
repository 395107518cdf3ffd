use std::path::{Path, PathBuf};

use assert_cmd::Command;
use chrono::NaiveDate;
use predicates::prelude::*;
use tempfile::TempDir;

use renewal_vault::models::{Item, ItemCategory, Money, Price, Vault};
use renewal_vault::snapshot::Snapshot;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn renewal(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("renewal").unwrap();
    cmd.env("RENEWAL_VAULT_DATA_DIR", data_dir)
        .env_remove("RENEWAL_VAULT_SNAPSHOT")
        .env_remove("RENEWAL_VAULT_TIER")
        .env_remove("RUST_LOG")
        .args(["--today", "2025-01-15"]);
    cmd
}

/// Writes a snapshot with a personal and a travel vault
fn write_snapshot(dir: &Path) -> PathBuf {
    let personal = Vault::personal();
    let travel = Vault::new("Travel");
    let items = vec![
        Item::new("Passport", ItemCategory::Passport, date(2025, 1, 25))
            .with_issuer("City Hall")
            .in_vault(personal.id),
        Item::new("Netflix", ItemCategory::Subscription, date(2025, 2, 10))
            .with_price(Price::untagged(Money::from_cents(1299)))
            .in_vault(personal.id),
        Item::new("Car insurance", ItemCategory::CarInsurance, date(2024, 12, 31))
            .with_price(Price::new(Money::from_cents(45_000), "$"))
            .in_vault(personal.id)
            .completed(),
        Item::new("Visa", ItemCategory::Other, date(2025, 8, 1)).in_vault(travel.id),
    ];

    let path = dir.join("snapshot.json");
    Snapshot {
        vaults: vec![personal, travel],
        items,
    }
    .save_json(&path)
    .unwrap();
    path
}

#[test]
fn init_creates_personal_vault() {
    let dir = TempDir::new().unwrap();

    renewal(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created the personal vault."));

    assert!(dir.path().join("config.json").exists());

    renewal(dir.path())
        .args(["vault", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal").and(predicate::str::contains("yes")));

    renewal(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created the personal vault.").not());
}

#[test]
fn init_keeps_tier_override_in_memory() {
    let dir = TempDir::new().unwrap();

    renewal(dir.path())
        .args(["--tier", "pro", "init"])
        .assert()
        .success();

    let config = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(config.contains("\"tier\": \"free\""));

    renewal(dir.path())
        .args(["gate", "create-item", "--count", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Upgrade required"));
}

#[test]
fn missing_snapshot_points_at_init() {
    let dir = TempDir::new().unwrap();

    renewal(dir.path())
        .args(["item", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("renewal init"));
}

#[test]
fn item_list_groups_by_urgency() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(dir.path());

    renewal(dir.path())
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["item", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Expiring soon (2)")
                .and(predicate::str::contains("Later (1)"))
                .and(predicate::str::contains("Expired (1)"))
                .and(predicate::str::contains("€12.99")),
        );

    renewal(dir.path())
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["item", "list", "--vault", "travel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Visa").and(predicate::str::contains("Passport").not()));
}

#[test]
fn item_reminders_skip_past_dates() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(dir.path());

    renewal(dir.path())
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["item", "reminders", "passport"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Passport expires in 7 days")
                .and(predicate::str::contains("Passport expires in 1 day"))
                .and(predicate::str::contains("expires in 30 days").not()),
        );

    renewal(dir.path())
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["item", "show", "nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item not found: nothing"));
}

#[test]
fn dashboard_is_gated() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(dir.path());

    renewal(dir.path())
        .arg("--snapshot")
        .arg(&snapshot)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Upgrade required"));

    renewal(dir.path())
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["--tier", "pro", "dashboard"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("To pay in February 2025: €12.99")
                .and(predicate::str::contains("$450.00")),
        );
}

#[test]
fn personal_vault_cannot_be_deleted() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(dir.path());

    renewal(dir.path())
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["vault", "check-delete", "Personal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("protected default vault"));

    renewal(dir.path())
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["vault", "check-delete", "Travel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 item would be removed"));
}

#[test]
fn export_requires_pro() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(dir.path());

    renewal(dir.path())
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["export", "personal", "--format", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PDF export"));

    renewal(dir.path())
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["--tier", "pro", "export", "personal", "--format", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"vault_name\": \"Personal\"")
                .and(predicate::str::contains("Visa").not()),
        );
}

#[test]
fn price_and_days_helpers() {
    let dir = TempDir::new().unwrap();

    renewal(dir.path())
        .args(["price", "parse", "12,50"])
        .assert()
        .success()
        .stdout("€12.50 (1250 cents)\n");

    renewal(dir.path())
        .args(["price", "format", "999", "--currency", "$"])
        .assert()
        .success()
        .stdout("$9.99\n");

    renewal(dir.path())
        .args(["days", "toggle", "7", "--selected", "30,7"])
        .assert()
        .success()
        .stdout("30\n");

    renewal(dir.path())
        .args(["days", "available", "--selected", "45"])
        .assert()
        .success()
        .stdout("90, 60, 45, 30, 14, 7, 1\n");

    renewal(dir.path())
        .args(["days", "parse", "0"])
        .assert()
        .failure();
}

#[test]
fn gate_reports_limits() {
    let dir = TempDir::new().unwrap();

    renewal(dir.path())
        .args(["gate", "create-item", "--count", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 of 5"));

    renewal(dir.path())
        .args(["gate", "create-item", "--count", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Upgrade required"));

    renewal(dir.path())
        .args(["--tier", "pro", "gate", "create-item", "--count", "5"])
        .assert()
        .success();
}
