use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;
use tf_prepare::cli::{
    common_config, invocation, log_level, log_passthrough, passthrough_arg, with_common_args,
};
use tf_prepare::logging::with_logger;
use tf_prepare::{prepare_module, ModuleConfig};
use tracing::info;

const PASSTHROUGH: [&str; 5] = ["pkg", "name", "out-dirs", "strip", "deps"];

fn main() -> Result<()> {
    let command = Command::new("prepare_module")
        .about("Move a prepared Terraform module and its dependency modules into an output directory")
        .arg(
            Arg::new("module-dir")
                .long("module-dir")
                .value_name("DIR")
                .help("Prepared module directory to move")
                .required(true),
        );
    let command = PASSTHROUGH
        .into_iter()
        .fold(with_common_args(command), |cmd, name| cmd.arg(passthrough_arg(name)));

    let matches = command.get_matches();
    let config = create_module_config(&matches);

    with_logger(log_level(&matches), || -> Result<()> {
        info!("preparing module with args: {}", invocation());
        log_passthrough(&matches, &PASSTHROUGH);

        let report = prepare_module(&config).with_context(|| {
            format!("Failed to prepare module {}", config.module_dir.display())
        })?;
        report.log_summary();
        Ok(())
    })
}

fn create_module_config(matches: &ArgMatches) -> ModuleConfig {
    let module_dir = matches
        .get_one::<String>("module-dir")
        .map(PathBuf::from)
        .unwrap_or_default();

    ModuleConfig {
        common: common_config(matches),
        module_dir,
    }
}
