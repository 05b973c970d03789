//! Argument parsing via clap.
//!
//! Note that you probably want to keep this as a single file so the build
//! script doesn't trip all over itself.

use std::path::PathBuf;

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "nvme-usage [OPTIONS]";

/// The arguments for nvme-usage.
#[derive(Parser, Debug)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[command(flatten)]
    pub(crate) general_args: GeneralArgs,

    #[command(flatten)]
    pub(crate) other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options", rename_all = "snake_case")]
pub struct GeneralArgs {
    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If not set, the file is looked for in the default config directory, and the \
                    built-in defaults are used if it doesn't exist."
    )]
    pub(crate) config_location: Option<PathBuf>,

    #[arg(
        short = 'd',
        long,
        value_name = "PATH",
        help = "Sets the NVMe device to report on.",
        long_help = "Sets the NVMe device to report on, e.g. /dev/nvme1. Defaults to /dev/nvme0."
    )]
    pub(crate) device: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Writes a debug log to the given file.",
        long_help = "Writes a debug log of each step to the given file. This has no effect if \
                    built without the 'logging' feature."
    )]
    pub(crate) log_file: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Sets the nvme-cli executable to run.",
        long_help = "Sets the nvme-cli executable to run. Defaults to 'nvme', looked up through PATH."
    )]
    pub(crate) nvme_binary: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Other Options")]
pub(crate) struct OtherArgs {
    #[arg(short = 'h', long, action = ArgAction::Help, help = "Prints help info (for more details use '--help').")]
    help: (),

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: (),
}

/// Returns a [`Command`] based off of [`Args`].
pub fn build_cmd() -> Command {
    Args::command()
}

/// Returns an [`Args`].
pub fn get_args() -> Args {
    Args::parse()
}
