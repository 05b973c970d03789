//! Tests for config files that should work.

use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{fake_nvme, fake_nvme_args, nvme_usage_command, SMART_LOG};

#[test]
fn test_empty_config() {
    let dir = tempfile::tempdir().unwrap();
    let nvme = fake_nvme(dir.path(), SMART_LOG, 0);

    nvme_usage_command(&["-C", "./tests/valid_configs/empty_config.toml"])
        .arg("--nvme_binary")
        .arg(&nvme)
        .assert()
        .success();

    assert_eq!(fake_nvme_args(dir.path()), "smart-log /dev/nvme0");
}

#[test]
fn test_device_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let nvme = fake_nvme(dir.path(), SMART_LOG, 0);

    nvme_usage_command(&["-C", "./tests/valid_configs/device.toml"])
        .arg("--nvme_binary")
        .arg(&nvme)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total data written to /dev/nvme1:"));

    assert_eq!(fake_nvme_args(dir.path()), "smart-log /dev/nvme1");
}

#[test]
fn test_device_arg_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let nvme = fake_nvme(dir.path(), SMART_LOG, 0);

    nvme_usage_command(&["-C", "./tests/valid_configs/device.toml"])
        .arg("--nvme_binary")
        .arg(&nvme)
        .args(["--device", "/dev/nvme4"])
        .assert()
        .success();

    assert_eq!(fake_nvme_args(dir.path()), "smart-log /dev/nvme4");
}

#[test]
fn test_nvme_binary_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let nvme = fake_nvme(dir.path(), SMART_LOG, 0);

    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        format!(
            "device = \"/dev/nvme2\"\nnvme_binary = '{}'\n",
            nvme.display()
        ),
    )
    .unwrap();

    nvme_usage_command(&[])
        .arg("-C")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total GB Written: 11.497 GB"));

    assert_eq!(fake_nvme_args(dir.path()), "smart-log /dev/nvme2");
}
