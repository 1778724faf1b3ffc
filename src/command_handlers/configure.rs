use crate::config::{BuildTarget, ConfigStore};
use crate::error::TcError;
use crate::prompt::{value_or_prompt, Prompter};
use anyhow::{Context, Result};
use std::io::Write;

pub struct ConfigArgs {
    pub init: bool,
    pub server: Option<String>,
    pub build_type_id: Option<String>,
}

pub fn run_config(
    store: &ConfigStore,
    args: ConfigArgs,
    prompter: &dyn Prompter,
    out: &mut dyn Write,
) -> Result<()> {
    if args.init {
        create_build_configuration(store, args, prompter)
    } else {
        print_build_configuration(store, out)
    }
}

fn create_build_configuration(store: &ConfigStore, args: ConfigArgs, prompter: &dyn Prompter) -> Result<()> {
    let server = value_or_prompt(args.server, prompter, "Please enter server host:port")?;
    let build_type_id = value_or_prompt(args.build_type_id, prompter, "Please enter build type id")?;
    let path = store
        .save_build_target(&BuildTarget { server, build_type_id })
        .context("saving build configuration")?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

fn print_build_configuration(store: &ConfigStore, out: &mut dyn Write) -> Result<()> {
    match store.load_build_target() {
        Ok(target) => {
            writeln!(out, "Server = {}", target.server)?;
            writeln!(out, "Build type id = {}", target.build_type_id)?;
        }
        Err(TcError::ConfigMissing { .. }) => {
            writeln!(out, "No config exists. Create with --init flag")?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
