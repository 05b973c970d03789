use std::path::PathBuf;

use serde::Deserialize;

/// The config file. Every key is optional; anything unset falls back to the
/// arguments' defaults.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The NVMe device to query, e.g. `/dev/nvme1`.
    pub(crate) device: Option<PathBuf>,
    /// The nvme-cli executable to run.
    pub(crate) nvme_binary: Option<PathBuf>,
}
