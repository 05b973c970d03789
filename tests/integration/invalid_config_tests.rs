//! These tests are for testing some invalid config files.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::nvme_usage_command;

#[test]
fn test_unknown_key() {
    nvme_usage_command(&["-C", "./tests/invalid_configs/unknown_key.toml"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown field `rate`"));
}

#[test]
fn test_toml_mismatch_type() {
    nvme_usage_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_unterminated_string() {
    nvme_usage_command(&["-C", "./tests/invalid_configs/unterminated_string.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn test_empty_nvme_binary() {
    nvme_usage_command(&["-C", "./tests/invalid_configs/empty_nvme_binary.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'nvme_binary' was set with an invalid value",
        ));
}

#[test]
fn test_missing_config_file() {
    nvme_usage_command(&["-C", "./tests/invalid_configs/does_not_exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to read"));
}
