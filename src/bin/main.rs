use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    nvme_usage::start_nvme_usage()
}
