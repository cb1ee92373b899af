use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;
use tf_prepare::cli::{
    common_config, invocation, log_level, log_passthrough, passthrough_arg, with_common_args,
};
use tf_prepare::logging::with_logger;
use tf_prepare::{prepare_workspace, WorkspaceConfig};
use tracing::info;

const PASSTHROUGH: [&str; 5] = ["pkg", "name", "os", "arch", "var-files"];

fn main() -> Result<()> {
    let command = Command::new("prepare_workspace")
        .about("Prepare a Terraform workspace from package sources and dependency modules")
        .arg(
            Arg::new("pkg-dir")
                .long("pkg-dir")
                .value_name("DIR")
                .help("Package directory the sources are relative to")
                .required(true),
        )
        .arg(
            Arg::new("srcs")
                .long("srcs")
                .value_name("LIST")
                .help("Source files as a bracketed, space separated list, e.g. \"[main.tf modules/vars.tf]\"")
                .required(true)
                .allow_hyphen_values(true),
        );
    let command = PASSTHROUGH
        .into_iter()
        .fold(with_common_args(command), |cmd, name| cmd.arg(passthrough_arg(name)));

    let matches = command.get_matches();
    let config = create_workspace_config(&matches);

    with_logger(log_level(&matches), || -> Result<()> {
        info!("preparing root with args: {}", invocation());
        log_passthrough(&matches, &PASSTHROUGH);

        let report = prepare_workspace(&config).with_context(|| {
            format!("Failed to prepare workspace in {}", config.common.out.display())
        })?;
        report.log_summary();
        Ok(())
    })
}

fn create_workspace_config(matches: &ArgMatches) -> WorkspaceConfig {
    let pkg_dir = matches
        .get_one::<String>("pkg-dir")
        .map(PathBuf::from)
        .unwrap_or_default();

    let srcs = matches
        .get_one::<String>("srcs")
        .cloned()
        .unwrap_or_default();

    WorkspaceConfig {
        common: common_config(matches),
        pkg_dir,
        srcs,
    }
}
