//! Collects smart-log data from a device.

pub mod error;
pub mod smart_log;

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use self::error::{CollectionError, CollectionResult};
use crate::constants::SMART_LOG_SUBCOMMAND;

/// Something that can produce the text of a smart-log report for a device.
pub trait SmartLogSource {
    fn smart_log(&self, device: &Path) -> CollectionResult<String>;
}

/// Gets smart-log reports by shelling out to nvme-cli.
#[derive(Debug, Clone)]
pub struct NvmeCli {
    binary: PathBuf,
}

impl NvmeCli {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl SmartLogSource for NvmeCli {
    /// Runs `nvme smart-log <device>` and returns its standard output. This
    /// blocks until the process exits.
    fn smart_log(&self, device: &Path) -> CollectionResult<String> {
        info!(
            "Running {} {SMART_LOG_SUBCOMMAND} {}",
            self.binary.display(),
            device.display()
        );

        let output = Command::new(&self.binary)
            .arg(SMART_LOG_SUBCOMMAND)
            .arg(device)
            .output()?;

        if !output.status.success() {
            warn!(
                "{} failed with stderr: {}",
                self.binary.display(),
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
            return Err(CollectionError::Execution(output.status.to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
