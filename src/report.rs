//! Turns a data units counter into the printed usage report.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    collection::{error::CollectionResult, smart_log, SmartLogSource},
    utils::data_units::{bytes_to_gibi, bytes_to_tebi, units_to_bytes},
};

/// The total amount written to a device.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageReport {
    pub device: PathBuf,
    pub data_units: u64,
    pub gb_written: f64,
    pub tb_written: f64,
}

impl UsageReport {
    pub fn new(device: impl Into<PathBuf>, data_units: u64) -> Self {
        let bytes = units_to_bytes(data_units);

        Self {
            device: device.into(),
            data_units,
            gb_written: bytes_to_gibi(bytes),
            tb_written: bytes_to_tebi(bytes),
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Total data written to {}:", self.device.display())?;
        writeln!(out, "Total GB Written: {:.3} GB", self.gb_written)?;
        writeln!(out, "Total TB Written: {:.3} TB", self.tb_written)?;

        Ok(())
    }
}

/// Fetches the smart-log for `device` from `source` and builds a report from
/// its data units written counter.
pub fn report_usage<S: SmartLogSource + ?Sized>(
    source: &S, device: &Path,
) -> CollectionResult<UsageReport> {
    let text = source.smart_log(device)?;
    let data_units = smart_log::data_units_written(&text)?;
    debug!("{} has written {data_units} data units", device.display());

    Ok(UsageReport::new(device, data_units))
}
