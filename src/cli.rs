use crate::config::{parse_log_level, CommonConfig, DEFAULT_TARGET, TARGET_ENV};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, Level};

/// Single-valued flags accepted for build-system bookkeeping
pub fn passthrough_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("VALUE")
        .help("Accepted for compatibility with the build rules; unused")
}

/// Add the flags both preparers share: `--out`, `--modules`, `--target` and `--log-level`
pub fn with_common_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("out")
                .long("out")
                .value_name("DIR")
                .help("Output directory")
                .required(true),
        )
        .arg(
            Arg::new("modules")
                .long("modules")
                .value_name("MODULE")
                .help("Dependency module directories to copy under the output directory")
                .num_args(0..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("target")
                .long("target")
                .value_name("NAME")
                .env(TARGET_ENV)
                .default_value(DEFAULT_TARGET)
                .help("Build target name stripped from the end of dependency module paths"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Set the log level (trace, debug, info, warn, error)")
                .default_value("info"),
        )
}

/// Pure function to create the shared configuration from parsed arguments
pub fn common_config(matches: &ArgMatches) -> CommonConfig {
    let out = matches
        .get_one::<String>("out")
        .cloned()
        .unwrap_or_default();

    let modules: Vec<String> = matches
        .get_many::<String>("modules")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let target = matches.get_one::<String>("target").map(String::as_str);

    CommonConfig::new(out, target, modules)
}

pub fn log_level(matches: &ArgMatches) -> Level {
    matches
        .get_one::<String>("log-level")
        .map(|level| parse_log_level(level))
        .unwrap_or(Level::INFO)
}

/// Log the values of flags that do not influence the run
pub fn log_passthrough(matches: &ArgMatches, names: &[&str]) {
    for name in names {
        if let Some(value) = matches.get_one::<String>(name) {
            debug!("--{} = {}", name, value);
        }
    }
}

/// Full command line, for the startup log line
pub fn invocation() -> String {
    std::env::args().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> Command {
        with_common_args(Command::new("test"))
    }

    #[test]
    fn test_modules_accepts_empty_and_multiple_values() {
        let matches = command()
            .try_get_matches_from(["test", "--out", "o", "--target", "t", "--modules", "", "a/t", "b/t"])
            .unwrap();
        let config = common_config(&matches);

        assert_eq!(config.modules, vec!["", "a/t", "b/t"]);
        assert_eq!(config.require_target().unwrap().as_str(), "/t");
    }

    #[test]
    fn test_modules_may_be_omitted() {
        let matches = command()
            .try_get_matches_from(["test", "--out", "o", "--log-level", "debug"])
            .unwrap();

        assert!(common_config(&matches).modules.is_empty());
        assert_eq!(log_level(&matches), Level::DEBUG);
    }

    #[test]
    fn test_explicit_target_wins_over_default() {
        let matches = command()
            .try_get_matches_from(["test", "--out", "o", "--target", "mymodule"])
            .unwrap();
        assert_eq!(
            common_config(&matches).require_target().unwrap().as_str(),
            "/mymodule"
        );
    }

    #[test]
    fn test_empty_target_is_missing() {
        let matches = command()
            .try_get_matches_from(["test", "--out", "o", "--target", "", "--modules", "a/t"])
            .unwrap();
        assert!(matches!(
            common_config(&matches).require_target(),
            Err(crate::error::PrepareError::MissingTarget)
        ));
    }

    #[test]
    fn test_out_is_required() {
        assert!(command().try_get_matches_from(["test"]).is_err());
    }
}
