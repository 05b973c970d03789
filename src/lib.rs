//! A small tool that reports how much data has been written to an NVMe device,
//! based on the `data_units_written` counter of `nvme smart-log`.

#![warn(rust_2018_idioms)]

#[macro_use]
extern crate log;

pub mod utils {
    pub mod data_units;
    pub mod logging;
}
pub mod collection;
pub mod constants;
pub mod options;
pub mod report;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Context;

use collection::NvmeCli;
use options::ReporterSettings;
use report::report_usage;

/// Main code to call to start nvme-usage.
///
/// Option errors are returned. Failures while collecting are printed to
/// stdout, and reflected in the returned exit code.
pub fn start_nvme_usage() -> anyhow::Result<ExitCode> {
    let args = options::get_args();

    #[cfg(feature = "logging")]
    {
        if let Some(log_file) = &args.general_args.log_file {
            utils::logging::init_logger(log::LevelFilter::Debug, log_file)
                .context("Unable to set up the debug log file.")?;
        }
    }

    let config = options::read_config(args.general_args.config_location.as_deref())
        .context("Unable to properly parse or read the config file.")?;
    let settings = ReporterSettings::new(&args.general_args, &config)
        .context("Found an issue while trying to build the settings.")?;
    debug!("Settings: {settings:?}");

    let nvme = NvmeCli::new(settings.nvme_binary);
    let mut stdout = io::stdout().lock();

    match report_usage(&nvme, &settings.device) {
        Ok(report) => {
            report.write_to(&mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!("{err}");
            writeln!(stdout, "{err}")?;
            Ok(ExitCode::FAILURE)
        }
    }
}
