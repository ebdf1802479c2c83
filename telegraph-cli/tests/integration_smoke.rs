//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("telegraph").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init-db"));
}

#[test]
fn test_serve_help_shows_env() {
    let mut cmd = Command::cargo_bin("telegraph").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PORT"))
        .stdout(predicate::str::contains("DB_HOST"))
        .stdout(predicate::str::contains("DB_ACQUIRE_TIMEOUT"))
        .stdout(predicate::str::contains("STATIC_DIR"));
}

#[test]
fn test_init_db_fails_without_database() {
    let mut cmd = Command::cargo_bin("telegraph").unwrap();
    cmd.current_dir(std::env::temp_dir())
        .env_remove("RUST_LOG")
        .args([
            "init-db",
            "--db-host",
            "127.0.0.1",
            "--db-port",
            "1",
            "--connect-timeout",
            "1",
        ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Database connection check failed"));
}
