use std::{
    env, fs,
    io::Result,
    path::{Path, PathBuf},
};

use clap_complete::{generate_to, shells::Shell, Generator};
use clap_mangen::Man;

#[allow(dead_code)]
#[path = "src/options/args.rs"]
mod args;

fn create_dir(dir: &Path) -> Result<()> {
    let res = fs::create_dir_all(dir);
    if let Err(err) = &res {
        eprintln!(
            "Failed to create a directory at location {dir:?}, encountered error {err:?}. Aborting...",
        );
    }

    res
}

fn generate_completions<G>(to_generate: G, cmd: &mut clap::Command, out_dir: &Path) -> Result<()>
where
    G: Generator,
{
    generate_to(to_generate, cmd, "nvme-usage", out_dir)?;

    Ok(())
}

fn main() -> Result<()> {
    const COMPLETION_DIR: &str = "./target/tmp/nvme-usage/completion/";
    const MANPAGE_DIR: &str = "./target/tmp/nvme-usage/manpage/";

    match env::var_os("NVME_USAGE_GENERATE") {
        Some(var) if !var.is_empty() => {
            let completion_out_dir = PathBuf::from(COMPLETION_DIR);
            let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

            create_dir(&completion_out_dir)?;
            create_dir(&manpage_out_dir)?;

            let mut cmd = args::build_cmd();

            generate_completions(Shell::Bash, &mut cmd, &completion_out_dir)?;
            generate_completions(Shell::Zsh, &mut cmd, &completion_out_dir)?;
            generate_completions(Shell::Fish, &mut cmd, &completion_out_dir)?;
            generate_completions(Shell::PowerShell, &mut cmd, &completion_out_dir)?;
            generate_completions(Shell::Elvish, &mut cmd, &completion_out_dir)?;

            let mut buffer: Vec<u8> = Default::default();
            Man::new(cmd).render(&mut buffer)?;
            fs::write(manpage_out_dir.join("nvme-usage.1"), buffer)?;
        }
        _ => {}
    }

    println!("cargo:rerun-if-env-changed=NVME_USAGE_GENERATE");

    Ok(())
}
