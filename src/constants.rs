use crate::utils::data_units::MEGA_LIMIT;

/// The device queried when neither the arguments nor the config file name one.
pub const DEFAULT_DEVICE: &str = "/dev/nvme0";

/// The diagnostic utility; resolved through `PATH` unless overridden.
pub const DEFAULT_NVME_BINARY: &str = "nvme";

/// The subcommand passed to the utility before the device path.
pub const SMART_LOG_SUBCOMMAND: &str = "smart-log";

/// The label of the smart-log line holding the written counter.
pub const DATA_UNITS_WRITTEN_LABEL: &str = "data_units_written";

/// Index of the counter within the whitespace-separated fields of the matched
/// line, e.g. `data_units_written : 12345 (6.32 TB)`.
pub const DATA_UNITS_FIELD_INDEX: usize = 2;

/// nvme-cli reports data units in blocks of 1,000,000 bytes.
pub const DATA_UNIT_BYTES: u64 = MEGA_LIMIT;

// Config and flags
pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "nvme-usage/nvme-usage.toml";
